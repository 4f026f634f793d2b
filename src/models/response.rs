//! text.ru 接口的响应结构
//!
//! 提交与查询共用同一个地址，靠请求参数区分

use serde::Deserialize;
use serde_json::Value;

/// "文本仍在检测中" 的错误码
pub const STILL_PROCESSING_CODE: i64 = 181;

/// 提交文本的响应
///
/// 服务端字段类型并不稳定（数字、字符串都出现过），这里一律按 `Value` 接收，
/// 只在读取时转成文本；错误码提交阶段用不到，不解析
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub text_uid: Option<Value>,
    #[serde(default)]
    pub error_desc: Option<Value>,
}

impl SubmitResponse {
    /// 返回非空的 uid
    pub fn uid(&self) -> Option<String> {
        non_blank_text(self.text_uid.as_ref())
    }

    /// 返回非空的错误描述
    pub fn error_desc(&self) -> Option<String> {
        non_blank_text(self.error_desc.as_ref())
    }
}

fn non_blank_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(value_to_text)
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// 查询状态的响应
///
/// 完成时带 `text_unique`，`seo_check` 是一个 JSON 字符串；
/// 未完成时只有 `error_code` / `error_desc`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub text_unique: Option<Value>,
    #[serde(default)]
    pub seo_check: Option<Value>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub error_desc: Option<String>,
}

impl StatusResponse {
    /// 检测是否已完成
    pub fn is_completed(&self) -> bool {
        matches!(&self.text_unique, Some(v) if !v.is_null())
    }

    /// 服务是否表示"仍在检测中"
    pub fn is_still_processing(&self) -> bool {
        self.error_code == Some(STILL_PROCESSING_CODE)
    }
}

/// 将数字或字符串形式的值转成文本，`null` 视为无值
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submit_response_uid() {
        let ok: SubmitResponse = serde_json::from_str(r#"{"text_uid": "123"}"#).unwrap();
        assert_eq!(ok.uid().as_deref(), Some("123"));

        let failed: SubmitResponse =
            serde_json::from_str(r#"{"error_code": 142, "error_desc": "bad key"}"#).unwrap();
        assert_eq!(failed.uid(), None);
        assert_eq!(failed.error_desc().as_deref(), Some("bad key"));

        let empty: SubmitResponse = serde_json::from_str(r#"{"text_uid": "  "}"#).unwrap();
        assert_eq!(empty.uid(), None);
        assert_eq!(empty.error_desc(), None);
    }

    #[test]
    fn test_submit_response_loose_field_types() {
        // 字符串形式的错误码不能让整个响应解析失败
        let failed: SubmitResponse =
            serde_json::from_str(r#"{"error_code": "142", "error_desc": "bad key"}"#).unwrap();
        assert_eq!(failed.uid(), None);
        assert_eq!(failed.error_desc().as_deref(), Some("bad key"));

        let numeric_uid: SubmitResponse =
            serde_json::from_str(r#"{"text_uid": 5012345}"#).unwrap();
        assert_eq!(numeric_uid.uid().as_deref(), Some("5012345"));

        let null_uid: SubmitResponse =
            serde_json::from_str(r#"{"text_uid": null, "error_desc": null}"#).unwrap();
        assert_eq!(null_uid.uid(), None);
        assert_eq!(null_uid.error_desc(), None);
    }

    #[test]
    fn test_status_response_states() {
        let done: StatusResponse = serde_json::from_value(json!({
            "text_unique": "87.5",
            "seo_check": "{\"spam_percent\":12}",
            "result_json": "{}"
        }))
        .unwrap();
        assert!(done.is_completed());

        let pending: StatusResponse =
            serde_json::from_value(json!({"error_code": 181, "error_desc": "Текст ещё не проверен"}))
                .unwrap();
        assert!(!pending.is_completed());
        assert!(pending.is_still_processing());

        let null_unique: StatusResponse =
            serde_json::from_value(json!({"text_unique": null})).unwrap();
        assert!(!null_unique.is_completed());
        assert!(!null_unique.is_still_processing());
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!("87.5")), Some("87.5".to_string()));
        assert_eq!(value_to_text(&json!(12)), Some("12".to_string()));
        assert_eq!(value_to_text(&json!(30.5)), Some("30.5".to_string()));
        assert_eq!(value_to_text(&Value::Null), None);
    }
}
