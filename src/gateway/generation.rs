//! 建议书生成网关
//!
//! 将企业详情与网络搜索结果打包为JSON负载交给LLM，要求只输出符合
//! 建议书Schema的JSON对象，返回后逐章节校验。

use serde_json::json;

use crate::error::{GatewayError, GatewayResult};
use crate::llm::LLMClient;
use crate::types::report::parse_report_json;
use crate::types::{CompanyDetail, InvestmentReport, WebSearchResult};

/// 生成建议书的系统指令，内嵌输出JSON Schema以固定结构
pub fn build_system_prompt() -> String {
    let schema = schemars::schema_for!(InvestmentReport);
    let schema_json =
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string());

    format!(
        "你是一个专业的投资分析师，需要基于提供的公司信息和网络搜索结果，生成一份全面的投资建议书。\n\
         输出要求：\n\
         1. 只输出一个JSON对象，不要输出任何解释性文字或Markdown围栏。\n\
         2. JSON对象必须包含companyBasicInfo、teamInfo、productAndTechnology、businessModel、marketAnalysis、investmentSuggestion六个顶层章节。\n\
         3. 每个字段填写专业、具体的中文分析文本，不允许留空。\n\
         4. 输出必须符合以下JSON Schema：\n{}",
        schema_json
    )
}

/// 生成建议书的输入负载
pub fn build_user_prompt(
    detail: &CompanyDetail,
    results: &[WebSearchResult],
) -> GatewayResult<String> {
    let input = json!({
        "companyInfo": detail,
        "webSearchInfo": results,
    });
    serde_json::to_string(&input)
        .map_err(|e| GatewayError::Validation(format!("生成输入序列化失败: {}", e)))
}

/// 调用LLM生成建议书并校验输出结构
pub async fn generate(
    llm: &LLMClient,
    detail: &CompanyDetail,
    results: &[WebSearchResult],
) -> GatewayResult<InvestmentReport> {
    let system_prompt = build_system_prompt();
    let user_prompt = build_user_prompt(detail, results)?;

    let raw = llm
        .prompt(&system_prompt, &user_prompt)
        .await
        .map_err(|e| GatewayError::Network(format!("生成投资建议书失败: {}", e)))?;

    parse_report_json(&raw)
}
