//! 企业注册数据网关 - 企业检索与工商详情
//!
//! 请求需携带基于共享密钥的时间戳签名：md5(app_key + timespan + secret_key)
//! 的大写十六进制作为Token头，timespan为当前Unix秒。

use md5::{Digest, Md5};
use serde::Deserialize;

use crate::config::RegistryConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::types::{CompanyDetail, CompanySearchResult, ContactInfo};

/// 计算签名Token
pub fn sign(app_key: &str, timespan: &str, secret_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(app_key.as_bytes());
    hasher.update(timespan.as_bytes());
    hasher.update(secret_key.as_bytes());
    format!("{:X}", hasher.finalize())
}

fn ensure_credentials(config: &RegistryConfig) -> GatewayResult<()> {
    if config.app_key.is_empty() || config.secret_key.is_empty() {
        return Err(GatewayError::Configuration(
            "注册数据服务凭证未配置".to_string(),
        ));
    }
    Ok(())
}

/// 企业高级搜索
pub async fn search(
    http: &reqwest::Client,
    config: &RegistryConfig,
    query: &str,
) -> GatewayResult<Vec<CompanySearchResult>> {
    ensure_credentials(config)?;

    let timespan = chrono::Utc::now().timestamp().to_string();
    let token = sign(&config.app_key, &timespan, &config.secret_key);
    let url = format!("{}/ECIV4/SearchWide", config.api_base_url);

    let response = http
        .get(&url)
        .query(&[("key", config.app_key.as_str()), ("searchKey", query)])
        .header("Token", token)
        .header("Timespan", timespan)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("企业搜索请求失败: {}", e)))?;

    if !response.status().is_success() {
        return Err(GatewayError::Network(format!(
            "企业搜索请求失败: HTTP {}",
            response.status()
        )));
    }

    let body: RawSearchResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Network(format!("企业搜索响应格式异常: {}", e)))?;

    if body.status != "200" {
        return Err(GatewayError::Network(format!(
            "注册数据API错误: {}",
            body.message.unwrap_or_else(|| "未知错误".to_string())
        )));
    }

    Ok(body
        .result
        .unwrap_or_default()
        .into_iter()
        .map(map_search_record)
        .collect())
}

/// 企业信息核验（详情）
pub async fn detail(
    http: &reqwest::Client,
    config: &RegistryConfig,
    unique_id: &str,
) -> GatewayResult<CompanyDetail> {
    ensure_credentials(config)?;

    let timespan = chrono::Utc::now().timestamp().to_string();
    let token = sign(&config.app_key, &timespan, &config.secret_key);
    let url = format!("{}/EnterpriseInfo/Verify", config.api_base_url);

    let response = http
        .get(&url)
        .query(&[("key", config.app_key.as_str()), ("searchKey", unique_id)])
        .header("Token", token)
        .header("Timespan", timespan)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("企业详情请求失败: {}", e)))?;

    if !response.status().is_success() {
        return Err(GatewayError::Network(format!(
            "企业详情请求失败: HTTP {}",
            response.status()
        )));
    }

    let body: RawDetailResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Network(format!("企业详情响应格式异常: {}", e)))?;

    if body.status != "200" {
        return Err(GatewayError::Network(format!(
            "注册数据API错误: {}",
            body.message.unwrap_or_else(|| "未知错误".to_string())
        )));
    }

    let data = body
        .result
        .and_then(|r| r.data)
        .ok_or_else(|| GatewayError::Network("企业详情响应缺少数据".to_string()))?;

    Ok(map_detail_record(data))
}

/// 提供方字段名（PascalCase）到内部模型的映射
pub(crate) fn map_search_record(raw: RawCompanyRecord) -> CompanySearchResult {
    CompanySearchResult {
        name: raw.name,
        unique_id: raw.key_no,
        credit_code: raw.credit_code,
        legal_representative: raw.oper_name,
        address: raw.address,
        establish_date: raw.start_date,
        registered_capital: raw.regist_capi,
        status: raw.status,
    }
}

pub(crate) fn map_detail_record(raw: RawDetailData) -> CompanyDetail {
    CompanyDetail {
        unique_id: raw.key_no,
        name: raw.name,
        credit_code: raw.credit_code,
        legal_representative: raw.oper_name,
        status: raw.status,
        establish_date: raw.start_date,
        registered_capital: raw.regist_capi,
        registered_capital_amount: raw.registered_capital.unwrap_or_default(),
        registered_capital_unit: raw.registered_capital_unit.unwrap_or_default(),
        registered_capital_currency: raw.registered_capital_ccy.unwrap_or_default(),
        address: raw.address,
        business_scope: raw.scope,
        contact_info: raw.contact_info.map(|c| ContactInfo {
            websites: c.web_site_list.unwrap_or_default(),
            email: c.email,
            tel: c.tel,
        }),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "Result")]
    pub result: Option<Vec<RawCompanyRecord>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCompanyRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "KeyNo")]
    pub key_no: String,
    #[serde(rename = "CreditCode", default)]
    pub credit_code: String,
    #[serde(rename = "OperName", default)]
    pub oper_name: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "StartDate")]
    pub start_date: Option<String>,
    #[serde(rename = "RegistCapi")]
    pub regist_capi: Option<String>,
    #[serde(rename = "Status")]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Message")]
    pub message: Option<String>,
    #[serde(rename = "Result")]
    pub result: Option<RawDetailResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailResult {
    #[serde(rename = "Data")]
    pub data: Option<RawDetailData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailData {
    #[serde(rename = "KeyNo")]
    pub key_no: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CreditCode", default)]
    pub credit_code: String,
    #[serde(rename = "OperName", default)]
    pub oper_name: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "StartDate", default)]
    pub start_date: String,
    #[serde(rename = "RegistCapi", default)]
    pub regist_capi: String,
    #[serde(rename = "RegisteredCapital")]
    pub registered_capital: Option<String>,
    #[serde(rename = "RegisteredCapitalUnit")]
    pub registered_capital_unit: Option<String>,
    #[serde(rename = "RegisteredCapitalCCY")]
    pub registered_capital_ccy: Option<String>,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Scope", default)]
    pub scope: String,
    #[serde(rename = "ContactInfo")]
    pub contact_info: Option<RawContactInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawContactInfo {
    #[serde(rename = "WebSiteList")]
    pub web_site_list: Option<Vec<String>>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Tel")]
    pub tel: Option<String>,
}
