use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// 网络搜索结果条目
///
/// 顺序即搜索服务的排名顺序，仅用于展示，不承载其他语义。
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
pub struct WebSearchResult {
    /// 网页标题
    pub title: String,
    /// 网页地址
    pub url: String,
    /// 摘要片段
    pub snippet: String,
    /// AI生成的内容总结
    pub summary: Option<String>,
    /// 来源站点名称
    pub source_site_name: Option<String>,
    /// 最近抓取日期
    pub last_crawled_date: Option<String>,
}
