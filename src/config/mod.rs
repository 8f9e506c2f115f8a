use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    OpenAI,
    #[serde(rename = "deepseek")]
    #[default]
    DeepSeek,
    #[serde(rename = "moonshot")]
    Moonshot,
    #[serde(rename = "openrouter")]
    OpenRouter,
    #[serde(rename = "ollama")]
    Ollama,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Moonshot => write!(f, "moonshot"),
            LLMProvider::OpenRouter => write!(f, "openrouter"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "moonshot" => Ok(LLMProvider::Moonshot),
            "openrouter" => Ok(LLMProvider::OpenRouter),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 运行环境
///
/// 开发环境下外部网关在网络或校验失败时降级为模拟数据，
/// 生产环境严禁降级，错误原样上抛到步骤层。
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum RuntimeEnv {
    #[serde(rename = "development")]
    #[default]
    Development,
    #[serde(rename = "production")]
    Production,
}

impl std::fmt::Display for RuntimeEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuntimeEnv::Development => write!(f, "development"),
            RuntimeEnv::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for RuntimeEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(RuntimeEnv::Development),
            "production" | "prod" => Ok(RuntimeEnv::Production),
            _ => Err(format!("Unknown runtime env: {}", s)),
        }
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 目标公司检索关键词
    pub company_query: Option<String>,

    /// 从搜索结果中选取第几条作为分析对象
    pub select_index: usize,

    /// 输出路径
    pub output_path: PathBuf,

    /// 内部工作目录路径 (.dili)
    pub internal_path: PathBuf,

    /// 是否全程使用模拟数据（不发起任何网络请求）
    pub use_mock_data: bool,

    /// 生成建议书时单次绕过模拟数据开关，强制实时生成
    pub force_live: bool,

    /// 运行环境
    pub runtime: RuntimeEnv,

    /// 查看与编辑步骤的字段级修改，形如 "teamInfo.background=新文本"
    pub edits: Vec<String>,

    /// 导出后是否发布共享报告
    pub share: bool,

    /// 企业注册数据服务配置
    pub registry: RegistryConfig,

    /// 网络搜索服务配置
    pub web_search: WebSearchConfig,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// 企业注册数据服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct RegistryConfig {
    /// 应用KEY
    pub app_key: String,

    /// 签名密钥
    pub secret_key: String,

    /// API基地址
    pub api_base_url: String,
}

/// 网络搜索服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct WebSearchConfig {
    /// API KEY
    pub api_key: String,

    /// API基地址
    pub api_base_url: String,

    /// 时效过滤
    pub freshness: String,

    /// 是否请求AI摘要
    pub summary: bool,

    /// 返回结果条数
    pub count: u32,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 生成建议书使用的模型
    pub model: String,

    /// 最大tokens，约束建议书输出长度
    pub max_tokens: u32,

    /// 温度，建议书生成要求接近确定性的低随机采样
    pub temperature: f64,

    /// 重试次数
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_query: None,
            select_index: 0,
            output_path: PathBuf::from("./dili.reports"),
            internal_path: PathBuf::from("./.dili"),
            use_mock_data: true,
            force_live: false,
            runtime: RuntimeEnv::default(),
            edits: vec![],
            share: false,
            registry: RegistryConfig::default(),
            web_search: WebSearchConfig::default(),
            llm: LLMConfig::default(),
            verbose: false,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            app_key: std::env::var("DILI_REGISTRY_APP_KEY").unwrap_or_default(),
            secret_key: std::env::var("DILI_REGISTRY_SECRET_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.qichacha.com"),
        }
    }
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("DILI_WEBSEARCH_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.bochaai.com/v1"),
            freshness: String::from("noLimit"),
            summary: true,
            count: 10,
        }
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            provider: LLMProvider::default(),
            api_key: std::env::var("DILI_LLM_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://api.deepseek.com"),
            model: String::from("deepseek-chat"),
            max_tokens: 8192,
            temperature: 0.2,
            retry_attempts: 3,
            retry_delay_ms: 3000,
            timeout_seconds: 120,
        }
    }
}
