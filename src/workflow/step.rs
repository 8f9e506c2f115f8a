//! 工作流步骤定义
//!
//! 六个有序步骤的完成/可用判定集中在一张声明式描述表里，
//! 避免在多处函数中重复同一组枚举分支。

use serde::{Deserialize, Serialize};

use crate::workflow::store::WorkflowState;

/// 工作流步骤，顺序固定，同一时刻只有一个"当前步骤"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowStep {
    /// 公司搜索
    Search,
    /// 公司信息
    CompanyInfo,
    /// 网络搜索
    WebSearch,
    /// 生成建议书
    Generate,
    /// 查看与编辑
    Review,
    /// 导出报告
    Export,
}

impl WorkflowStep {
    pub const ALL: [WorkflowStep; 6] = [
        WorkflowStep::Search,
        WorkflowStep::CompanyInfo,
        WorkflowStep::WebSearch,
        WorkflowStep::Generate,
        WorkflowStep::Review,
        WorkflowStep::Export,
    ];

    /// 步骤序号（从1开始，用于展示）
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) + 1
    }

    /// 下一个步骤，Export为终态
    pub fn next(&self) -> Option<WorkflowStep> {
        let pos = Self::ALL.iter().position(|s| s == self)?;
        Self::ALL.get(pos + 1).copied()
    }

    pub fn descriptor(&self) -> &'static StepDescriptor {
        &STEP_TABLE[Self::ALL.iter().position(|s| s == self).unwrap()]
    }

    /// 步骤是否已完成（状态的纯函数）
    pub fn is_complete(&self, state: &WorkflowState) -> bool {
        (self.descriptor().is_complete)(state)
    }

    /// 步骤是否可进入（前置数据齐备）
    pub fn is_enabled(&self, state: &WorkflowState) -> bool {
        (self.descriptor().is_enabled)(state)
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.descriptor().title)
    }
}

/// 单个步骤的声明式描述
pub struct StepDescriptor {
    pub step: WorkflowStep,
    pub title: &'static str,
    pub is_complete: fn(&WorkflowState) -> bool,
    pub is_enabled: fn(&WorkflowState) -> bool,
}

/// 步骤描述表
///
/// 完成判定：搜索步完成即已选中公司；审阅步完成即步骤游标已越过审阅；
/// 导出步可反复执行，永不报告"已完成"。
pub const STEP_TABLE: [StepDescriptor; 6] = [
    StepDescriptor {
        step: WorkflowStep::Search,
        title: "公司搜索",
        is_complete: |state| state.selected_company.is_some(),
        is_enabled: |_| true,
    },
    StepDescriptor {
        step: WorkflowStep::CompanyInfo,
        title: "公司信息",
        is_complete: |state| state.company_detail.is_some(),
        is_enabled: |state| state.selected_company.is_some(),
    },
    StepDescriptor {
        step: WorkflowStep::WebSearch,
        title: "网络搜索",
        is_complete: |state| !state.web_search_results.is_empty(),
        is_enabled: |state| state.company_detail.is_some(),
    },
    StepDescriptor {
        step: WorkflowStep::Generate,
        title: "生成建议书",
        is_complete: |state| state.report.is_some(),
        is_enabled: |state| {
            state.company_detail.is_some() && !state.web_search_results.is_empty()
        },
    },
    StepDescriptor {
        step: WorkflowStep::Review,
        title: "查看与编辑",
        is_complete: |state| state.current_step == WorkflowStep::Export,
        is_enabled: |state| state.report.is_some(),
    },
    StepDescriptor {
        step: WorkflowStep::Export,
        title: "导出报告",
        is_complete: |_| false,
        is_enabled: |state| state.report.is_some(),
    },
];
