use thiserror::Error;

/// 网关与工作流共用的错误分类
///
/// 适配器内部不区分底层错误来源，统一折叠为四类，
/// 工作流控制器据此决定是否可重试、是否允许降级。
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 缺少凭证等配置问题，不可重试
    #[error("配置错误: {0}")]
    Configuration(String),

    /// 请求失败、非2xx状态码或响应格式异常，可由用户重试
    #[error("网络请求失败: {0}")]
    Network(String),

    /// LLM输出缺少必需章节或解析失败，可通过强制实时重新生成重试
    #[error("数据校验失败: {0}")]
    Validation(String),

    /// 共享报告键不存在
    #[error("未找到指定数据: {0}")]
    NotFound(String),
}

impl GatewayError {
    /// 开发环境下允许降级为模拟数据的错误类型
    pub fn is_degradable(&self) -> bool {
        matches!(self, GatewayError::Network(_) | GatewayError::Validation(_))
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
