//! 投资尽调工作流
//!
//! 六步流水线的编排入口：公司搜索 → 公司信息 → 网络搜索 →
//! 生成建议书 → 查看与编辑 → 导出报告。状态存储与步骤控制器
//! 负责数据与调度，这里只做批处理式的推进与落盘。

use anyhow::{Result, bail};

use crate::config::Config;
use crate::export;
use crate::gateway::Gateway;
use crate::share::SharedReportStore;

pub mod controller;
pub mod step;
pub mod store;

pub use controller::WorkflowController;
pub use step::{StepDescriptor, WorkflowStep};
pub use store::{WorkflowState, WorkflowStore};

/// 按配置执行完整的尽调流水线
pub async fn launch(config: &Config) -> Result<()> {
    let Some(query) = config.company_query.clone().filter(|q| !q.trim().is_empty()) else {
        bail!("未指定目标公司检索关键词");
    };

    println!("🚀 投资尽调报告生成器启动");
    if config.use_mock_data && !config.force_live {
        println!("💡 模拟数据模式，不发起任何网络请求");
    }

    let gateway = Gateway::new(config.clone())?;

    // 实时生成建议书前先验证模型连通性，尽早失败
    if config.force_live || !config.use_mock_data {
        gateway.llm().check_connection().await?;
    }

    let mut ctl = WorkflowController::new(WorkflowStore::new(), gateway);

    // 步骤一：公司搜索
    println!("\n🔄 [1/6] 公司搜索: {}", query);
    ctl.run_search(&query).await?;
    ensure_step_ok(&ctl, WorkflowStep::Search)?;
    let found = ctl.state().search_results.len();
    if found == 0 {
        bail!("未搜索到与「{}」相关的企业", query);
    }
    println!("✅ 共找到 {} 家企业", found);

    ctl.select_company(config.select_index)?;
    let company_name = ctl
        .state()
        .selected_company
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    println!("✅ 已选中: {}", company_name);

    // 步骤二：公司信息
    println!("\n🔄 [2/6] 获取企业详情");
    ctl.goto(WorkflowStep::CompanyInfo)?;
    ctl.load_company_detail().await?;
    ensure_step_ok(&ctl, WorkflowStep::CompanyInfo)?;
    println!("✅ 企业详情就绪");

    // 步骤三：网络搜索
    println!("\n🔄 [3/6] 网络搜索");
    ctl.goto(WorkflowStep::WebSearch)?;
    ctl.run_web_search().await?;
    ensure_step_ok(&ctl, WorkflowStep::WebSearch)?;
    println!("✅ 获得 {} 条网络信息", ctl.state().web_search_results.len());

    // 步骤四：生成建议书
    println!("\n🔄 [4/6] 生成投资建议书");
    ctl.goto(WorkflowStep::Generate)?;
    ctl.generate_report(config.force_live).await?;
    ensure_step_ok(&ctl, WorkflowStep::Generate)?;
    println!("✅ 建议书生成完成");

    // 步骤五：查看与编辑
    println!("\n🔄 [5/6] 查看与编辑");
    ctl.goto(WorkflowStep::Review)?;
    for edit in &config.edits {
        let Some((path, value)) = edit.split_once('=') else {
            bail!("非法的编辑指令（应为 章节.字段=新文本）: {}", edit);
        };
        ctl.edit_report_field(path.trim(), value)?;
        println!("🖊️ 已更新字段: {}", path.trim());
    }

    // 步骤六：导出报告
    println!("\n🔄 [6/6] 导出报告");
    ctl.goto(WorkflowStep::Export)?;
    let report = ctl
        .state()
        .report
        .clone()
        .ok_or_else(|| anyhow::anyhow!("建议书缺失，无法导出"))?;
    export::save_exports(&config.output_path, &report, &company_name)?;

    if config.share {
        let store = SharedReportStore::new(&config.internal_path);
        store.put(&company_name, &report)?;
    }

    println!("\n✅ 尽调流程全部完成");
    Ok(())
}

/// 把步骤层存储的用户可读错误升级为流水线失败
fn ensure_step_ok(ctl: &WorkflowController, step: WorkflowStep) -> Result<()> {
    if let Some(message) = ctl.state().errors.get(step) {
        bail!("步骤「{}」失败: {}", step, message);
    }
    Ok(())
}

#[cfg(test)]
mod tests;
