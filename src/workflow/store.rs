//! 工作流状态存储
//!
//! 整个工作流唯一的数据变更入口。状态由显式构造的存储对象持有并注入
//! 控制器，不使用全局单例；订阅方通过watch通道感知变更。

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::{GatewayError, GatewayResult};
use crate::types::{CompanyDetail, CompanySearchResult, InvestmentReport, WebSearchResult};
use crate::workflow::step::WorkflowStep;

/// 工作流全量状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    /// 当前步骤
    pub current_step: WorkflowStep,
    /// 搜索关键词
    pub search_query: String,
    /// 企业搜索结果
    pub search_results: Vec<CompanySearchResult>,
    /// 选中的目标公司
    pub selected_company: Option<CompanySearchResult>,
    /// 企业详情
    pub company_detail: Option<CompanyDetail>,
    /// 网络搜索结果
    pub web_search_results: Vec<WebSearchResult>,
    /// 投资建议书
    pub report: Option<InvestmentReport>,
    /// 各异步步骤的加载标志
    pub loading: LoadingFlags,
    /// 各异步步骤的错误信息
    pub errors: StepErrors,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            current_step: WorkflowStep::Search,
            search_query: String::new(),
            search_results: vec![],
            selected_company: None,
            company_detail: None,
            web_search_results: vec![],
            report: None,
            loading: LoadingFlags::default(),
            errors: StepErrors::default(),
        }
    }
}

/// 加载状态，每个异步步骤一个布尔标志
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingFlags {
    pub searching: bool,
    pub loading_company_detail: bool,
    pub loading_web_search: bool,
    pub generating_report: bool,
}

impl LoadingFlags {
    pub fn get(&self, step: WorkflowStep) -> bool {
        match step {
            WorkflowStep::Search => self.searching,
            WorkflowStep::CompanyInfo => self.loading_company_detail,
            WorkflowStep::WebSearch => self.loading_web_search,
            WorkflowStep::Generate => self.generating_report,
            _ => false,
        }
    }

    fn set(&mut self, step: WorkflowStep, value: bool) {
        match step {
            WorkflowStep::Search => self.searching = value,
            WorkflowStep::CompanyInfo => self.loading_company_detail = value,
            WorkflowStep::WebSearch => self.loading_web_search = value,
            WorkflowStep::Generate => self.generating_report = value,
            _ => {}
        }
    }
}

/// 错误状态，每个异步步骤一条可选的用户可读信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepErrors {
    pub search: Option<String>,
    pub company_detail: Option<String>,
    pub web_search: Option<String>,
    pub generation: Option<String>,
}

impl StepErrors {
    pub fn get(&self, step: WorkflowStep) -> Option<&str> {
        match step {
            WorkflowStep::Search => self.search.as_deref(),
            WorkflowStep::CompanyInfo => self.company_detail.as_deref(),
            WorkflowStep::WebSearch => self.web_search.as_deref(),
            WorkflowStep::Generate => self.generation.as_deref(),
            _ => None,
        }
    }

    fn set(&mut self, step: WorkflowStep, message: Option<String>) {
        match step {
            WorkflowStep::Search => self.search = message,
            WorkflowStep::CompanyInfo => self.company_detail = message,
            WorkflowStep::WebSearch => self.web_search = message,
            WorkflowStep::Generate => self.generation = message,
            _ => {}
        }
    }
}

/// 工作流状态存储
pub struct WorkflowStore {
    state: WorkflowState,
    notifier: watch::Sender<u64>,
}

impl Default for WorkflowStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowStore {
    pub fn new() -> Self {
        let (notifier, _) = watch::channel(0);
        Self {
            state: WorkflowState::default(),
            notifier,
        }
    }

    /// 只读访问当前状态
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// 订阅状态版本号，任何变更后版本号递增
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notifier.subscribe()
    }

    fn touch(&mut self) {
        self.notifier.send_modify(|version| *version += 1);
    }

    /// 写入搜索结果
    pub fn set_search_results(&mut self, query: &str, results: Vec<CompanySearchResult>) {
        self.state.search_query = query.to_string();
        self.state.search_results = results;
        self.touch();
    }

    /// 选中目标公司（级联失效的唯一权威入口）
    ///
    /// 原子地清空企业详情、网络搜索结果与建议书等全部下游派生数据，
    /// 以及相关步骤的历史错误；不依赖调用方自行补充reset。
    pub fn select_company(&mut self, company: CompanySearchResult) {
        self.state.selected_company = Some(company);
        self.state.company_detail = None;
        self.state.web_search_results = vec![];
        self.state.report = None;
        self.state.errors.company_detail = None;
        self.state.errors.web_search = None;
        self.state.errors.generation = None;
        self.touch();
    }

    /// 写入企业详情
    ///
    /// 不变量：详情必须与当前选中公司的unique_id一致，否则拒绝写入。
    pub fn set_company_detail(&mut self, detail: CompanyDetail) -> GatewayResult<()> {
        let selected = self.state.selected_company.as_ref().ok_or_else(|| {
            GatewayError::Validation("尚未选中目标公司，无法写入企业详情".to_string())
        })?;
        if selected.unique_id != detail.unique_id {
            return Err(GatewayError::Validation(format!(
                "企业详情与选中公司不匹配: {} != {}",
                detail.unique_id, selected.unique_id
            )));
        }

        self.state.company_detail = Some(detail);
        self.touch();
        Ok(())
    }

    /// 写入网络搜索结果
    pub fn set_web_search_results(&mut self, results: Vec<WebSearchResult>) {
        self.state.web_search_results = results;
        self.touch();
    }

    /// 写入建议书
    ///
    /// 不变量：建议书存在蕴含企业详情与网络搜索结果存在。
    /// 重新生成时整体覆盖旧对象，不做字段合并。
    pub fn set_report(&mut self, report: InvestmentReport) -> GatewayResult<()> {
        if self.state.company_detail.is_none() || self.state.web_search_results.is_empty() {
            return Err(GatewayError::Validation(
                "上游数据缺失，无法写入建议书".to_string(),
            ));
        }

        self.state.report = Some(report);
        self.touch();
        Ok(())
    }

    /// 字段级编辑建议书
    pub fn edit_report_field(&mut self, path: &str, value: &str) -> GatewayResult<()> {
        let report = self
            .state
            .report
            .as_mut()
            .ok_or_else(|| GatewayError::Validation("建议书尚未生成，无法编辑".to_string()))?;
        report.set_field(path, value)?;
        self.touch();
        Ok(())
    }

    pub fn set_loading(&mut self, step: WorkflowStep, value: bool) {
        self.state.loading.set(step, value);
        self.touch();
    }

    pub fn set_error(&mut self, step: WorkflowStep, message: Option<String>) {
        self.state.errors.set(step, message);
        self.touch();
    }

    /// 步骤跳转，只允许进入可用状态的步骤
    pub fn goto_step(&mut self, step: WorkflowStep) -> GatewayResult<()> {
        if !step.is_enabled(&self.state) {
            return Err(GatewayError::Validation(format!(
                "步骤「{}」的前置数据尚未就绪",
                step
            )));
        }

        self.state.current_step = step;
        self.touch();
        Ok(())
    }

    /// 重置整个工作流
    pub fn reset(&mut self) {
        self.state = WorkflowState::default();
        self.touch();
    }
}
