use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GatewayError, GatewayResult};

/// 投资建议书必需的六个顶层章节
///
/// LLM输出缺少任意一个章节即视为生成失败，不允许用默认值补齐。
pub const REQUIRED_SECTIONS: [&str; 6] = [
    "companyBasicInfo",
    "teamInfo",
    "productAndTechnology",
    "businessModel",
    "marketAnalysis",
    "investmentSuggestion",
];

/// 投资建议书
///
/// 工作流的核心产出物：由生成步骤创建，在查看与编辑步骤中按字段整体替换，
/// 导出阶段只读。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReport {
    /// 一、公司基本情况
    pub company_basic_info: CompanyBasicInfo,
    /// 二、团队简介
    pub team_info: TeamInfo,
    /// 三、产品与技术
    pub product_and_technology: ProductAndTechnology,
    /// 四、业务模式
    pub business_model: BusinessModel,
    /// 五、市场分析
    pub market_analysis: MarketAnalysis,
    /// 六、投资建议
    pub investment_suggestion: InvestmentSuggestion,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBasicInfo {
    pub name: String,
    pub credit_code: String,
    pub establish_date: String,
    pub registered_capital: String,
    pub business_scope: String,
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    pub core_members: String,
    pub background: String,
    pub experience: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductAndTechnology {
    pub main_products: String,
    pub technology_advantage: String,
    pub patents: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessModel {
    pub revenue_stream: String,
    pub customers: String,
    pub competitive_advantage: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub industry_size: String,
    pub growth: String,
    pub maturity: String,
    pub competition: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSuggestion {
    pub financing_plan: String,
    pub valuation_analysis: String,
    pub risks: String,
    pub opportunities: String,
    pub recommendation: String,
}

impl InvestmentReport {
    /// 按 `section.field` 路径整体替换某个字段的文本
    ///
    /// 编辑粒度为字段级全量替换，不做文本diff。未知路径返回校验错误。
    pub fn set_field(&mut self, path: &str, value: &str) -> GatewayResult<()> {
        let (section, field) = path
            .split_once('.')
            .ok_or_else(|| GatewayError::Validation(format!("非法字段路径: {}", path)))?;

        let slot = self.field_mut(section, field).ok_or_else(|| {
            GatewayError::Validation(format!("未知的报告字段: {}.{}", section, field))
        })?;
        *slot = value.to_string();
        Ok(())
    }

    fn field_mut(&mut self, section: &str, field: &str) -> Option<&mut String> {
        match section {
            "companyBasicInfo" => {
                let s = &mut self.company_basic_info;
                match field {
                    "name" => Some(&mut s.name),
                    "creditCode" => Some(&mut s.credit_code),
                    "establishDate" => Some(&mut s.establish_date),
                    "registeredCapital" => Some(&mut s.registered_capital),
                    "businessScope" => Some(&mut s.business_scope),
                    "address" => Some(&mut s.address),
                    _ => None,
                }
            }
            "teamInfo" => {
                let s = &mut self.team_info;
                match field {
                    "coreMembers" => Some(&mut s.core_members),
                    "background" => Some(&mut s.background),
                    "experience" => Some(&mut s.experience),
                    _ => None,
                }
            }
            "productAndTechnology" => {
                let s = &mut self.product_and_technology;
                match field {
                    "mainProducts" => Some(&mut s.main_products),
                    "technologyAdvantage" => Some(&mut s.technology_advantage),
                    "patents" => Some(&mut s.patents),
                    _ => None,
                }
            }
            "businessModel" => {
                let s = &mut self.business_model;
                match field {
                    "revenueStream" => Some(&mut s.revenue_stream),
                    "customers" => Some(&mut s.customers),
                    "competitiveAdvantage" => Some(&mut s.competitive_advantage),
                    _ => None,
                }
            }
            "marketAnalysis" => {
                let s = &mut self.market_analysis;
                match field {
                    "industrySize" => Some(&mut s.industry_size),
                    "growth" => Some(&mut s.growth),
                    "maturity" => Some(&mut s.maturity),
                    "competition" => Some(&mut s.competition),
                    _ => None,
                }
            }
            "investmentSuggestion" => {
                let s = &mut self.investment_suggestion;
                match field {
                    "financingPlan" => Some(&mut s.financing_plan),
                    "valuationAnalysis" => Some(&mut s.valuation_analysis),
                    "risks" => Some(&mut s.risks),
                    "opportunities" => Some(&mut s.opportunities),
                    "recommendation" => Some(&mut s.recommendation),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// 将LLM返回的文本解析为投资建议书
///
/// 先剥离可能包裹的Markdown代码围栏，再解析JSON并校验六个顶层章节齐全。
/// 任何缺失章节都作为生成失败处理，不返回部分填充的报告。
pub fn parse_report_json(raw: &str) -> GatewayResult<InvestmentReport> {
    let text = strip_code_fence(raw);

    let value: Value = serde_json::from_str(text)
        .map_err(|e| GatewayError::Validation(format!("建议书JSON解析失败: {}", e)))?;

    let object = value
        .as_object()
        .ok_or_else(|| GatewayError::Validation("建议书输出不是JSON对象".to_string()))?;

    let missing: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .filter(|section| !object.contains_key(**section))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(GatewayError::Validation(format!(
            "建议书缺少必需章节: {}",
            missing.join(", ")
        )));
    }

    serde_json::from_value(value)
        .map_err(|e| GatewayError::Validation(format!("建议书章节结构不完整: {}", e)))
}

/// 剥离 ```json ... ``` 代码围栏
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // 去掉围栏行上的语言标注
    let rest = match rest.split_once('\n') {
        Some((_lang, body)) => body,
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

// Include tests
#[cfg(test)]
mod tests;
