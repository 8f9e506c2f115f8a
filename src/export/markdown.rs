//! 建议书的Markdown中间表示
//!
//! 两种导出目标共享这一份确定性模板：相同建议书与公司名（同一天内）
//! 必然产出逐字节一致的Markdown。

use chrono::NaiveDate;

use crate::types::InvestmentReport;

/// 固定的报告落款
pub const FOOTER_DISCLAIMER: &str = "本报告由投资尽调报告生成器生成，仅供参考";

/// 生成建议书Markdown，生成日期取当天
pub fn to_markdown(report: &InvestmentReport, company_name: &str) -> String {
    to_markdown_with_date(report, company_name, chrono::Local::now().date_naive())
}

/// 生成建议书Markdown（显式指定生成日期，便于复现）
pub fn to_markdown_with_date(
    report: &InvestmentReport,
    company_name: &str,
    date: NaiveDate,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {} 投资建议书\n\n", company_name));
    out.push_str(&format!("生成日期: {}\n\n", date.format("%Y-%m-%d")));

    // 一、公司基本情况：以表格哨兵块渲染为键值表
    let basic = &report.company_basic_info;
    out.push_str("## 一、公司基本情况\n\n");
    out.push_str(":::table\n");
    out.push_str(&format!("公司名称|{}\n", basic.name));
    out.push_str(&format!("统一社会信用代码|{}\n", basic.credit_code));
    out.push_str(&format!("成立日期|{}\n", basic.establish_date));
    out.push_str(&format!("注册资本|{}\n", basic.registered_capital));
    out.push_str(&format!("注册地址|{}\n", basic.address));
    out.push_str(&format!("经营范围|{}\n", basic.business_scope));
    out.push_str(":::\n\n");

    let team = &report.team_info;
    out.push_str("## 二、团队简介\n\n");
    push_field(&mut out, "核心成员", &team.core_members);
    push_field(&mut out, "团队背景", &team.background);
    push_field(&mut out, "相关经验", &team.experience);

    let product = &report.product_and_technology;
    out.push_str("## 三、产品与技术\n\n");
    push_field(&mut out, "主要产品", &product.main_products);
    push_field(&mut out, "技术优势", &product.technology_advantage);
    push_field(&mut out, "专利情况", &product.patents);

    let business = &report.business_model;
    out.push_str("## 四、业务模式\n\n");
    push_field(&mut out, "收入来源", &business.revenue_stream);
    push_field(&mut out, "客户情况", &business.customers);
    push_field(&mut out, "竞争优势", &business.competitive_advantage);

    let market = &report.market_analysis;
    out.push_str("## 五、市场分析\n\n");
    push_field(&mut out, "行业规模", &market.industry_size);
    push_field(&mut out, "成长性", &market.growth);
    push_field(&mut out, "成熟度", &market.maturity);
    push_field(&mut out, "竞争格局", &market.competition);

    let suggestion = &report.investment_suggestion;
    out.push_str("## 六、投资建议\n\n");
    push_field(&mut out, "融资计划", &suggestion.financing_plan);
    push_field(&mut out, "估值分析", &suggestion.valuation_analysis);
    push_field(&mut out, "风险", &suggestion.risks);
    push_field(&mut out, "机会", &suggestion.opportunities);
    push_field(&mut out, "建议", &suggestion.recommendation);

    out.push_str(FOOTER_DISCLAIMER);
    out.push('\n');

    out
}

/// 字段渲染为加粗标签 + 正文段落
fn push_field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("**{}：**\n\n", label));
    out.push_str(value.trim_end());
    out.push_str("\n\n");
}
