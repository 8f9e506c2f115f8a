//! 外部网关适配器
//!
//! 统一包装三类外部服务：企业注册数据（检索/详情）、网络搜索、LLM建议书生成。
//! 每个适配器先检查全局模拟数据开关；实时路径失败时，开发环境降级为
//! 模拟数据并记录告警，生产环境将类型化错误原样上抛。

use std::time::Duration;

use anyhow::Result;

use crate::config::{Config, RuntimeEnv};
use crate::error::{GatewayError, GatewayResult};
use crate::llm::LLMClient;
use crate::types::{CompanyDetail, CompanySearchResult, InvestmentReport, WebSearchResult};

pub mod generation;
pub mod mock;
pub mod registry;
pub mod websearch;

/// 注册数据与网络搜索请求的超时时间（秒）
const HTTP_TIMEOUT_SECS: u64 = 30;

/// 外部网关门面
#[derive(Clone)]
pub struct Gateway {
    config: Config,
    http: reqwest::Client,
    llm: LLMClient,
}

impl Gateway {
    /// 创建网关实例
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        let llm = LLMClient::new(config.llm.clone())?;

        Ok(Self { config, http, llm })
    }

    pub fn llm(&self) -> &LLMClient {
        &self.llm
    }

    /// 企业搜索
    pub async fn search_company(&self, query: &str) -> GatewayResult<Vec<CompanySearchResult>> {
        if self.config.use_mock_data {
            return Ok(mock::mock_search_company(query));
        }

        match registry::search(&self.http, &self.config.registry, query).await {
            Ok(results) => Ok(results),
            Err(e) => self.degrade(e, || mock::mock_search_company(query)),
        }
    }

    /// 企业详情
    pub async fn company_detail(&self, unique_id: &str) -> GatewayResult<CompanyDetail> {
        if self.config.use_mock_data {
            return Ok(mock::mock_company_detail(unique_id));
        }

        match registry::detail(&self.http, &self.config.registry, unique_id).await {
            Ok(detail) => Ok(detail),
            Err(e) => self.degrade(e, || mock::mock_company_detail(unique_id)),
        }
    }

    /// 网络搜索
    pub async fn web_search(&self, query: &str) -> GatewayResult<Vec<WebSearchResult>> {
        if self.config.use_mock_data {
            return Ok(mock::mock_web_search(query));
        }

        match websearch::search(&self.http, &self.config.web_search, query).await {
            Ok(results) => Ok(results),
            Err(e) => self.degrade(e, || mock::mock_web_search(query)),
        }
    }

    /// 生成投资建议书
    ///
    /// `force_live` 为单次绕过模拟数据开关的强制实时生成，
    /// 用于在审阅模拟草稿后重新生成；此时失败不降级，错误直接上抛。
    pub async fn generate_report(
        &self,
        detail: &CompanyDetail,
        results: &[WebSearchResult],
        force_live: bool,
    ) -> GatewayResult<InvestmentReport> {
        if self.config.use_mock_data && !force_live {
            return Ok(mock::mock_generate_report(detail, results));
        }

        match generation::generate(&self.llm, detail, results).await {
            Ok(report) => Ok(report),
            Err(e) if force_live => Err(e),
            Err(e) => self.degrade(e, || mock::mock_generate_report(detail, results)),
        }
    }

    /// 开发环境降级策略
    ///
    /// 只有可降级的错误类型（网络/校验）在开发环境下回退为模拟数据，
    /// 且必须先记录告警；生产环境一律不降级。
    fn degrade<T>(&self, err: GatewayError, fallback: impl FnOnce() -> T) -> GatewayResult<T> {
        if self.config.runtime == RuntimeEnv::Development && err.is_degradable() {
            eprintln!("⚠️ 外部服务调用失败，开发环境降级为模拟数据: {}", err);
            Ok(fallback())
        } else {
            Err(err)
        }
    }
}
