//! 步骤控制器
//!
//! 为四个数据获取步骤调度网关调用：进入步骤时产出已存在则不重复获取；
//! 获取期间置位加载标志并清除历史错误；失败只存储用户可读信息，
//! 不让错误冲垮工作流。同一步骤已有请求在途时忽略新请求。

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::Gateway;
use crate::workflow::step::WorkflowStep;
use crate::workflow::store::{WorkflowState, WorkflowStore};

/// 工作流控制器，持有状态存储与外部网关
pub struct WorkflowController {
    store: WorkflowStore,
    gateway: Gateway,
}

impl WorkflowController {
    pub fn new(store: WorkflowStore, gateway: Gateway) -> Self {
        Self { store, gateway }
    }

    pub fn state(&self) -> &WorkflowState {
        self.store.state()
    }

    pub fn store(&self) -> &WorkflowStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WorkflowStore {
        &mut self.store
    }

    /// 在途请求保护：同一步骤的重复请求直接忽略
    fn begin_fetch(&mut self, step: WorkflowStep) -> bool {
        if self.store.state().loading.get(step) {
            eprintln!("⚠️ 步骤「{}」已有请求在途，忽略本次触发", step);
            return false;
        }
        self.store.set_loading(step, true);
        self.store.set_error(step, None);
        true
    }

    /// 企业搜索（用户动作触发，重复执行覆盖旧结果）
    pub async fn run_search(&mut self, query: &str) -> GatewayResult<()> {
        let step = WorkflowStep::Search;
        if !self.begin_fetch(step) {
            return Ok(());
        }

        match self.gateway.search_company(query).await {
            Ok(results) => self.store.set_search_results(query, results),
            Err(e) => self.store.set_error(step, Some(e.to_string())),
        }
        self.store.set_loading(step, false);
        Ok(())
    }

    /// 从搜索结果中选中目标公司
    pub fn select_company(&mut self, index: usize) -> GatewayResult<()> {
        let company = self
            .store
            .state()
            .search_results
            .get(index)
            .cloned()
            .ok_or_else(|| {
                GatewayError::Validation(format!(
                    "搜索结果中不存在第{}条记录（共{}条）",
                    index + 1,
                    self.store.state().search_results.len()
                ))
            })?;

        self.store.select_company(company);
        Ok(())
    }

    /// 获取企业详情
    ///
    /// 幂等：已有与当前选中公司匹配的详情时不重复获取。
    pub async fn load_company_detail(&mut self) -> GatewayResult<()> {
        let step = WorkflowStep::CompanyInfo;
        let unique_id = {
            let state = self.store.state();
            let selected = state.selected_company.as_ref().ok_or_else(|| {
                GatewayError::Validation("尚未选中目标公司，无法获取企业详情".to_string())
            })?;
            if state
                .company_detail
                .as_ref()
                .is_some_and(|d| d.unique_id == selected.unique_id)
            {
                return Ok(());
            }
            selected.unique_id.clone()
        };

        if !self.begin_fetch(step) {
            return Ok(());
        }

        match self.gateway.company_detail(&unique_id).await {
            Ok(detail) => {
                if let Err(e) = self.store.set_company_detail(detail) {
                    self.store.set_error(step, Some(e.to_string()));
                }
            }
            Err(e) => self.store.set_error(step, Some(e.to_string())),
        }
        self.store.set_loading(step, false);
        Ok(())
    }

    /// 以公司名为关键词执行网络搜索
    ///
    /// 幂等：已有结果时不重复获取，手动重试前错误已被清除。
    pub async fn run_web_search(&mut self) -> GatewayResult<()> {
        let step = WorkflowStep::WebSearch;
        let query = {
            let state = self.store.state();
            if state.company_detail.is_none() {
                return Err(GatewayError::Validation(
                    "企业详情尚未就绪，无法执行网络搜索".to_string(),
                ));
            }
            if !state.web_search_results.is_empty() {
                return Ok(());
            }
            state
                .selected_company
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default()
        };

        if !self.begin_fetch(step) {
            return Ok(());
        }

        match self.gateway.web_search(&query).await {
            Ok(results) => self.store.set_web_search_results(results),
            Err(e) => self.store.set_error(step, Some(e.to_string())),
        }
        self.store.set_loading(step, false);
        Ok(())
    }

    /// 生成投资建议书
    ///
    /// `force_live` 用于审阅模拟草稿后的强制实时重新生成：
    /// 绕过幂等保护与模拟数据开关，成功后整体覆盖旧建议书。
    pub async fn generate_report(&mut self, force_live: bool) -> GatewayResult<()> {
        let step = WorkflowStep::Generate;
        let (detail, results) = {
            let state = self.store.state();
            let ready = step.is_enabled(state);
            match state.company_detail.clone() {
                Some(detail) if ready => {
                    if state.report.is_some() && !force_live {
                        return Ok(());
                    }
                    (detail, state.web_search_results.clone())
                }
                _ => {
                    return Err(GatewayError::Validation(
                        "企业详情或网络搜索结果尚未就绪，无法生成建议书".to_string(),
                    ));
                }
            }
        };

        if !self.begin_fetch(step) {
            return Ok(());
        }

        match self.gateway.generate_report(&detail, &results, force_live).await {
            Ok(report) => {
                if let Err(e) = self.store.set_report(report) {
                    self.store.set_error(step, Some(e.to_string()));
                }
            }
            Err(e) => self.store.set_error(step, Some(e.to_string())),
        }
        self.store.set_loading(step, false);
        Ok(())
    }

    /// 字段级编辑建议书（查看与编辑步骤）
    pub fn edit_report_field(&mut self, path: &str, value: &str) -> GatewayResult<()> {
        self.store.edit_report_field(path, value)
    }

    /// 跳转到指定步骤（用户动作，受步骤可用性约束）
    pub fn goto(&mut self, step: WorkflowStep) -> GatewayResult<()> {
        self.store.goto_step(step)
    }

    /// 进入下一步骤
    pub fn advance(&mut self) -> GatewayResult<()> {
        let current = self.store.state().current_step;
        match current.next() {
            Some(next) => self.store.goto_step(next),
            None => Err(GatewayError::Validation(
                "已处于最后一个步骤".to_string(),
            )),
        }
    }
}
