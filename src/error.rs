use std::fmt;
use thiserror::Error;

/// 应用程序错误类型
///
/// 只有这几类错误会中断整个批次，单篇文章的失败都会落到 `CheckError`
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 输入文档读取错误
    #[error("文档读取错误: {0}")]
    DocumentRead(#[from] DocumentReadError),
    /// 报告写入错误
    #[error("报告写入错误: {0}")]
    Write(#[from] WriteError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少 API 密钥
    #[error("未设置 API 密钥 (环境变量 TEXTRU_API_KEY 或配置文件 api_key)")]
    MissingApiKey,
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// 文档读取错误
#[derive(Debug, Error)]
pub enum DocumentReadError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 不是合法的 docx 容器
    #[error("无法解析 Word 文档 ({path}): {reason}")]
    InvalidContainer { path: String, reason: String },
}

/// 报告写入错误
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("写入 Excel 失败 ({path}): {source}")]
    Xlsx {
        path: String,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

/// 请求所处的阶段（提交 / 轮询）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Submit,
    Status,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Submit => write!(f, "提交文本"),
            Stage::Status => write!(f, "查询状态"),
        }
    }
}

/// 单篇文章检测错误
///
/// `Display` 的结果直接写入报告的"错误"列
#[derive(Debug, Error)]
pub enum CheckError {
    /// 网络请求失败或 HTTP 状态码非 2xx
    #[error("{stage}失败: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务返回了不符合协议的内容
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    /// 轮询次数耗尽仍未完成
    #[error("检测未完成: 已轮询 {attempts} 次{}", last_desc_suffix(.last_desc))]
    Timeout {
        attempts: usize,
        last_desc: Option<String>,
    },
    /// 文本过短，未提交
    #[error("文本过短 ({chars} 字符，至少需要 {min} 字符)")]
    TooShort { chars: usize, min: usize },
}

/// 协议层错误
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// 响应体不是合法 JSON
    #[error("{stage}失败: 响应无法解析: {source}")]
    InvalidBody {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
    /// 提交后没有返回 text_uid
    #[error("{desc}")]
    MissingUid { desc: String },
    /// 轮询时返回了非"处理中"的错误码
    #[error("检测服务返回错误 (error_code={}): {desc}", code_label(.code))]
    Terminal { code: Option<i64>, desc: String },
}

/// 嵌套的 seo_check 字段无法解析
#[derive(Debug, Error)]
#[error("SEO 数据解析失败: {source}")]
pub struct SeoParseError {
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

fn last_desc_suffix(last_desc: &Option<String>) -> String {
    match last_desc {
        Some(desc) => format!(" (最后状态: {})", desc),
        None => String::new(),
    }
}

fn code_label(code: &Option<i64>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "无".to_string())
}

// ========== 便捷构造函数 ==========

impl CheckError {
    /// 创建网络请求失败错误
    pub fn transport(stage: Stage, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        CheckError::Transport {
            stage,
            source: Box::new(source),
        }
    }

    /// 创建响应解析失败错误
    pub fn invalid_body(stage: Stage, source: serde_json::Error) -> Self {
        CheckError::Protocol(ProtocolError::InvalidBody { stage, source })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_uid_renders_service_description_only() {
        let err = CheckError::from(ProtocolError::MissingUid {
            desc: "bad key".to_string(),
        });
        assert_eq!(err.to_string(), "bad key");
    }

    #[test]
    fn test_terminal_error_mentions_code() {
        let err = ProtocolError::Terminal {
            code: Some(140),
            desc: "Нет такого uid".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("140"));
        assert!(msg.contains("Нет такого uid"));

        let absent = ProtocolError::Terminal {
            code: None,
            desc: "未知状态".to_string(),
        };
        assert!(absent.to_string().contains("error_code=无"));
    }

    #[test]
    fn test_timeout_message() {
        let err = CheckError::Timeout {
            attempts: 12,
            last_desc: Some("Текст ещё проверяется".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("12"));
        assert!(msg.contains("Текст ещё проверяется"));

        let bare = CheckError::Timeout {
            attempts: 3,
            last_desc: None,
        };
        assert_eq!(bare.to_string(), "检测未完成: 已轮询 3 次");
    }

    #[test]
    fn test_transport_message_names_stage() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = CheckError::transport(Stage::Submit, io);
        assert_eq!(err.to_string(), "提交文本失败: connection refused");
    }
}
