use crate::config::{Config, LLMProvider, RuntimeEnv};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// Dili-RS - 由Rust与AI驱动的投资尽调报告生成器
#[derive(Parser, Debug)]
#[command(name = "dili-rs")]
#[command(
    about = "AI-based investment due diligence report generator. It searches company registry data, gathers public web information, and generates a structured investment recommendation report."
)]
#[command(version)]
pub struct Args {
    /// 目标公司检索关键词
    pub query: Option<String>,

    /// 从搜索结果中选取第几条作为分析对象（从0开始）
    #[arg(short, long, default_value_t = 0)]
    pub select: usize,

    /// 输出路径
    #[arg(short, long, default_value = "./dili.reports")]
    pub output_path: PathBuf,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 全程使用实时外部服务（关闭模拟数据）
    #[arg(long)]
    pub live: bool,

    /// 生成建议书时单次绕过模拟数据开关，强制实时生成
    #[arg(long)]
    pub force_live: bool,

    /// 以生产环境运行（外部服务失败时不降级为模拟数据）
    #[arg(long)]
    pub production: bool,

    /// 查看与编辑步骤的字段级修改，形如 "teamInfo.background=新文本"，可重复
    #[arg(long = "edit")]
    pub edits: Vec<String>,

    /// 导出后发布共享报告并打印分享链接
    #[arg(long)]
    pub share: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// 企业注册数据服务应用KEY
    #[arg(long)]
    pub registry_app_key: Option<String>,

    /// 企业注册数据服务签名密钥
    #[arg(long)]
    pub registry_secret_key: Option<String>,

    /// 网络搜索服务API KEY
    #[arg(long)]
    pub websearch_api_key: Option<String>,

    /// LLM Provider (openai, deepseek, moonshot, openrouter, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// 生成建议书使用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,
}

impl Args {
    /// 将CLI参数转换为配置
    ///
    /// 优先级：CLI参数 > 配置文件 > 默认值。配置文件取显式指定路径，
    /// 否则尝试当前目录下的dili.toml；文件无法读取时作为配置错误上抛。
    pub fn into_config(self) -> Result<Config> {
        let mut config = if let Some(config_path) = &self.config {
            Config::from_file(config_path)
                .with_context(|| format!("无法读取配置文件 {:?}", config_path))?
        } else {
            let default_config_path = std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join("dili.toml");

            if default_config_path.exists() {
                Config::from_file(&default_config_path).with_context(|| {
                    format!("无法读取默认配置文件 {:?}", default_config_path)
                })?
            } else {
                Config::default()
            }
        };

        // 覆盖配置文件中的设置
        if self.query.is_some() {
            config.company_query = self.query;
        }
        config.select_index = self.select;
        config.output_path = self.output_path;

        if self.live {
            config.use_mock_data = false;
        }
        if self.force_live {
            config.force_live = true;
        }
        if self.production {
            config.runtime = RuntimeEnv::Production;
        }
        if !self.edits.is_empty() {
            config.edits = self.edits;
        }
        if self.share {
            config.share = true;
        }

        // 覆盖外部服务凭证
        if let Some(app_key) = self.registry_app_key {
            config.registry.app_key = app_key;
        }
        if let Some(secret_key) = self.registry_secret_key {
            config.registry.secret_key = secret_key;
        }
        if let Some(api_key) = self.websearch_api_key {
            config.web_search.api_key = api_key;
        }

        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config.llm.provider = provider;
            } else {
                eprintln!(
                    "⚠️ 警告: 未知的provider: {}，使用默认provider",
                    provider_str
                );
            }
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }

        config.verbose = self.verbose;

        Ok(config)
    }
}

// Include tests
#[cfg(test)]
mod tests;
