use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 企业搜索结果条目
///
/// 由企业检索步骤产生，返回后不再修改；
/// 用户选中的一条将成为整个工作流的分析对象。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CompanySearchResult {
    /// 企业名称
    pub name: String,
    /// 企业唯一标识
    pub unique_id: String,
    /// 统一社会信用代码
    pub credit_code: String,
    /// 法定代表人
    pub legal_representative: String,
    /// 注册地址
    pub address: String,
    /// 成立日期
    pub establish_date: Option<String>,
    /// 注册资本
    pub registered_capital: Option<String>,
    /// 登记状态
    pub status: Option<String>,
}

/// 企业工商详情
///
/// 与选中企业的unique_id一一对应，选中企业变化时必须丢弃重取。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct CompanyDetail {
    pub unique_id: String,
    pub name: String,
    pub credit_code: String,
    pub legal_representative: String,
    pub status: String,
    pub establish_date: String,
    /// 注册资本（含单位的展示文本）
    pub registered_capital: String,
    /// 注册资本数值部分
    pub registered_capital_amount: String,
    /// 注册资本单位
    pub registered_capital_unit: String,
    /// 注册资本币种
    pub registered_capital_currency: String,
    pub address: String,
    /// 经营范围
    pub business_scope: String,
    pub contact_info: Option<ContactInfo>,
}

/// 企业联系方式
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default, JsonSchema)]
pub struct ContactInfo {
    #[serde(default)]
    pub websites: Vec<String>,
    pub email: Option<String>,
    pub tel: Option<String>,
}
