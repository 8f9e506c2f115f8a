//! 网络搜索网关
//!
//! 请求体携带 {query, freshness, summary, count, page}，响应业务码200为成功。

use serde::Deserialize;
use serde_json::json;

use crate::config::WebSearchConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::types::WebSearchResult;

/// 网络搜索
pub async fn search(
    http: &reqwest::Client,
    config: &WebSearchConfig,
    query: &str,
) -> GatewayResult<Vec<WebSearchResult>> {
    if config.api_key.is_empty() {
        return Err(GatewayError::Configuration(
            "网络搜索API密钥未配置".to_string(),
        ));
    }

    let url = format!("{}/web-search", config.api_base_url);
    let payload = json!({
        "query": query,
        "freshness": config.freshness,
        "summary": config.summary,
        "count": config.count,
        "page": 1,
    });

    let response = http
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&payload)
        .send()
        .await
        .map_err(|e| GatewayError::Network(format!("网络搜索请求失败: {}", e)))?;

    if !response.status().is_success() {
        return Err(GatewayError::Network(format!(
            "网络搜索请求失败: HTTP {}",
            response.status()
        )));
    }

    let body: RawWebSearchResponse = response
        .json()
        .await
        .map_err(|e| GatewayError::Network(format!("网络搜索响应格式异常: {}", e)))?;

    if body.code != 200 {
        return Err(GatewayError::Network(format!(
            "网络搜索API错误: {}",
            body.msg.unwrap_or_else(|| "未知错误".to_string())
        )));
    }

    let pages = body
        .data
        .and_then(|d| d.web_pages)
        .ok_or_else(|| GatewayError::Network("网络搜索响应缺少数据".to_string()))?;

    Ok(pages.value.into_iter().map(map_web_page).collect())
}

pub(crate) fn map_web_page(raw: RawWebPage) -> WebSearchResult {
    WebSearchResult {
        title: raw.name,
        url: raw.url,
        snippet: raw.snippet.unwrap_or_default(),
        summary: raw.summary,
        source_site_name: raw.site_name,
        last_crawled_date: raw.date_last_crawled,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWebSearchResponse {
    pub code: i64,
    pub msg: Option<String>,
    pub data: Option<RawSearchData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchData {
    #[serde(rename = "webPages")]
    pub web_pages: Option<RawWebPages>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWebPages {
    #[serde(default)]
    pub value: Vec<RawWebPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawWebPage {
    pub name: String,
    pub url: String,
    pub snippet: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "siteName")]
    pub site_name: Option<String>,
    #[serde(rename = "dateLastCrawled")]
    pub date_last_crawled: Option<String>,
}
