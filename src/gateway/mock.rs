//! 模拟数据 - 用于开发测试
//!
//! 所有模拟数据由输入确定性派生，相同输入必然产生相同输出。

use crate::types::report::{
    BusinessModel, CompanyBasicInfo, InvestmentReport, InvestmentSuggestion, MarketAnalysis,
    ProductAndTechnology, TeamInfo,
};
use crate::types::{CompanyDetail, CompanySearchResult, ContactInfo, WebSearchResult};

/// 模拟企业搜索结果
pub fn mock_search_company(query: &str) -> Vec<CompanySearchResult> {
    vec![
        CompanySearchResult {
            name: format!("{}科技有限公司", query),
            unique_id: "abc123".to_string(),
            credit_code: "91110111MA01C8JT4A".to_string(),
            legal_representative: "张三".to_string(),
            address: "北京市海淀区西土城路10号".to_string(),
            establish_date: Some("2018-05-15".to_string()),
            registered_capital: Some("1000万".to_string()),
            status: Some("在业".to_string()),
        },
        CompanySearchResult {
            name: format!("{}信息技术有限公司", query),
            unique_id: "def456".to_string(),
            credit_code: "91110111MA01C8JT4B".to_string(),
            legal_representative: "李四".to_string(),
            address: "北京市朝阳区建国路88号".to_string(),
            establish_date: Some("2015-08-22".to_string()),
            registered_capital: Some("500万".to_string()),
            status: Some("在业".to_string()),
        },
    ]
}

/// 模拟企业详情
pub fn mock_company_detail(unique_id: &str) -> CompanyDetail {
    CompanyDetail {
        unique_id: unique_id.to_string(),
        name: "模拟科技有限公司".to_string(),
        credit_code: "91110111MA01C8JT4A".to_string(),
        legal_representative: "张三".to_string(),
        status: "存续（在营、开业、在册）".to_string(),
        establish_date: "2018-05-15".to_string(),
        registered_capital: "1000万元".to_string(),
        registered_capital_amount: "1000".to_string(),
        registered_capital_unit: "万".to_string(),
        registered_capital_currency: "CNY".to_string(),
        address: "北京市海淀区西土城路10号".to_string(),
        business_scope: "技术开发；货物进出口、技术进出口；销售通讯设备、计算机软件及辅助设备"
            .to_string(),
        contact_info: Some(ContactInfo {
            websites: vec!["https://www.example.com".to_string()],
            email: Some("contact@example.com".to_string()),
            tel: Some("010-12345678".to_string()),
        }),
    }
}

/// 模拟网络搜索结果
pub fn mock_web_search(query: &str) -> Vec<WebSearchResult> {
    vec![
        WebSearchResult {
            title: format!("{}科技有限公司完成A轮融资", query),
            url: "https://news.example.com/article1".to_string(),
            snippet: format!(
                "{}科技有限公司宣布完成5000万元人民币A轮融资，由XXX资本领投。",
                query
            ),
            summary: Some(format!(
                "{}科技有限公司于2023年6月完成5000万元人民币A轮融资，由XXX资本领投，YYY资本跟投。公司主要业务为企业级SaaS服务，目前已有超过100家企业客户。",
                query
            )),
            source_site_name: Some("科技新闻网".to_string()),
            last_crawled_date: Some("2023-07-01".to_string()),
        },
        WebSearchResult {
            title: format!("{}科技CEO专访：谈技术创新与未来发展", query),
            url: "https://blog.example.com/interview".to_string(),
            snippet: format!("{}科技CEO张三分享了公司的核心技术和未来发展规划。", query),
            summary: Some(format!(
                "在这次专访中，{}科技CEO张三介绍了公司的核心AI技术，以及在企业服务领域的创新应用。他表示，公司计划在明年拓展海外市场，并推出新的数据分析产品线。",
                query
            )),
            source_site_name: Some("科技博客".to_string()),
            last_crawled_date: Some("2023-08-15".to_string()),
        },
    ]
}

/// 模拟生成的投资建议书
///
/// 公司基本情况直接取自企业详情，其余章节为固定分析文本。
pub fn mock_generate_report(
    detail: &CompanyDetail,
    _results: &[WebSearchResult],
) -> InvestmentReport {
    InvestmentReport {
        company_basic_info: CompanyBasicInfo {
            name: detail.name.clone(),
            credit_code: detail.credit_code.clone(),
            establish_date: detail.establish_date.clone(),
            registered_capital: detail.registered_capital.clone(),
            business_scope: detail.business_scope.clone(),
            address: detail.address.clone(),
        },
        team_info: TeamInfo {
            core_members: "张三（CEO）：清华大学计算机博士，前XXX公司技术总监\n李四（CTO）：斯坦福大学人工智能硕士，拥有多项专利".to_string(),
            background: "创始团队拥有丰富的技术和行业经验，在人工智能领域有深厚的研究背景"
                .to_string(),
            experience: "管理团队曾成功创办过两家科技企业，并有丰富的企业级服务经验".to_string(),
        },
        product_and_technology: ProductAndTechnology {
            main_products: "1. 企业智能决策系统\n2. 数据分析平台\n3. 行业专用AI解决方案"
                .to_string(),
            technology_advantage:
                "自主研发的机器学习算法，在数据处理效率上比行业平均水平提高30%".to_string(),
            patents: "拥有5项核心技术专利，3项软件著作权".to_string(),
        },
        business_model: BusinessModel {
            revenue_stream: "主要通过SaaS服务订阅模式获取收入，辅以定制化解决方案服务".to_string(),
            customers: "目前已服务超过100家中大型企业客户，包括金融、制造、零售等多个行业"
                .to_string(),
            competitive_advantage: "技术领先、产品体验优秀、客户服务及时，客户续约率达95%"
                .to_string(),
        },
        market_analysis: MarketAnalysis {
            industry_size: "企业级SaaS市场规模2023年达到2000亿元，年增长率25%".to_string(),
            growth: "未来5年，预计复合增长率将保持在20%以上".to_string(),
            maturity: "行业处于快速发展期，国内市场渗透率仍较低，有巨大发展空间".to_string(),
            competition: "目前有3-5家主要竞争对手，但各家在细分领域侧重点不同".to_string(),
        },
        investment_suggestion: InvestmentSuggestion {
            financing_plan: "计划在12个月内完成B轮融资，融资金额1亿元人民币".to_string(),
            valuation_analysis: "基于当前营收和增长率，估值区间为5-7亿元人民币".to_string(),
            risks: "技术迭代风险、市场竞争加剧风险、人才流失风险".to_string(),
            opportunities: "产业数字化转型加速、政策支持、国产替代趋势".to_string(),
            recommendation: "建议投资，看好公司在企业服务领域的长期发展潜力。投资者可考虑参与下一轮融资，建议投资额不超过3000万元。".to_string(),
        },
    }
}
