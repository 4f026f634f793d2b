use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// 默认配置文件名（位于工作目录）
pub const DEFAULT_CONFIG_FILE: &str = "textru.toml";

/// 程序配置
#[derive(Clone)]
pub struct Config {
    /// text.ru API 密钥
    pub api_key: String,
    /// 提交与查询共用的接口地址
    pub api_url: String,
    /// 待检测的 Word 文档
    pub docx_path: String,
    /// 结果 Excel 路径
    pub output_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: "https://api.text.ru/post".to_string(),
            docx_path: "articles.docx".to_string(),
            output_path: "text_ru_results.xlsx".to_string(),
            verbose_logging: false,
        }
    }
}

// 密钥不进日志
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .field("docx_path", &self.docx_path)
            .field("output_path", &self.output_path)
            .field("verbose_logging", &self.verbose_logging)
            .finish()
    }
}

/// 配置文件中可出现的字段，全部可选
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_key: Option<String>,
    api_url: Option<String>,
    docx_path: Option<String>,
    output_path: Option<String>,
    verbose_logging: Option<bool>,
}

impl Config {
    /// 加载配置：默认值 → 配置文件 → 环境变量
    ///
    /// 配置文件路径取 `TEXTRU_CONFIG`，未设置时若工作目录存在 `textru.toml` 则读取它
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let explicit = std::env::var("TEXTRU_CONFIG").ok();
        let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
        if explicit.is_some() || Path::new(path).exists() {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
                path: path.to_string(),
                source,
            })?;
            config = config.merge_toml(&content, path)?;
        }

        let config = config.merge_env_with(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 仅从环境变量读取（在默认值之上覆盖）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().merge_env_with(|name| std::env::var(name).ok())
    }

    /// 用 TOML 内容覆盖当前配置
    pub fn merge_toml(self, content: &str, path: &str) -> Result<Self, ConfigError> {
        let file: FileConfig =
            toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
                path: path.to_string(),
                source,
            })?;

        Ok(Self {
            api_key: file.api_key.unwrap_or(self.api_key),
            api_url: file.api_url.unwrap_or(self.api_url),
            docx_path: file.docx_path.unwrap_or(self.docx_path),
            output_path: file.output_path.unwrap_or(self.output_path),
            verbose_logging: file.verbose_logging.unwrap_or(self.verbose_logging),
        })
    }

    /// 用环境变量覆盖当前配置，`lookup` 便于测试时注入
    pub fn merge_env_with<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING".to_string(),
                    value,
                    expected_type: "bool".to_string(),
                })?,
            None => self.verbose_logging,
        };

        Ok(Self {
            api_key: lookup("TEXTRU_API_KEY").unwrap_or(self.api_key),
            api_url: lookup("TEXTRU_API_URL").unwrap_or(self.api_url),
            docx_path: lookup("TEXTRU_DOCX_PATH").unwrap_or(self.docx_path),
            output_path: lookup("TEXTRU_OUTPUT_PATH").unwrap_or(self.output_path),
            verbose_logging,
        })
    }

    /// 检查必填项
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.text.ru/post");
        assert_eq!(config.docx_path, "articles.docx");
        assert_eq!(config.output_path, "text_ru_results.xlsx");
        assert!(!config.verbose_logging);
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_toml_then_env_layering() {
        let toml = r#"
            api_key = "from-file"
            docx_path = "input/batch.docx"
            verbose_logging = true
        "#;

        let config = Config::default()
            .merge_toml(toml, "textru.toml")
            .unwrap()
            .merge_env_with(lookup_from(&[
                ("TEXTRU_API_KEY", "from-env"),
                ("TEXTRU_OUTPUT_PATH", "out.xlsx"),
            ]))
            .unwrap();

        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.docx_path, "input/batch.docx");
        assert_eq!(config.output_path, "out.xlsx");
        assert!(config.verbose_logging);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_reported_with_path() {
        let err = Config::default()
            .merge_toml("api_key = ", "broken.toml")
            .unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_bad_verbose_flag() {
        let err = Config::default()
            .merge_env_with(lookup_from(&[("VERBOSE_LOGGING", "yes please")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvVarParseFailed { .. }));
    }

    #[test]
    fn test_blank_key_rejected() {
        let config = Config::default()
            .merge_env_with(lookup_from(&[("TEXTRU_API_KEY", "   ")]))
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let config = Config {
            api_key: "super-secret".to_string(),
            ..Config::default()
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
    }
}
