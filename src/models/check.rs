//! 检测会话、SEO 数据与结果行

use crate::error::{CheckError, SeoParseError};
use crate::models::response::{value_to_text, StatusResponse};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 检测结果页的地址前缀
pub const RESULT_LINK_BASE: &str = "https://text.ru/antiplagiat/";

/// 报告中文本预览的字符数
pub const PREVIEW_CHARS: usize = 50;

/// seo_check 无法解析时写入"垃圾度"和"水分"两列的标记
pub const SEO_PARSE_ERROR_MARKER: &str = "SEO 解析失败";

/// seo_check 可解析但缺少对应字段时的标记
pub const NO_DATA_MARKER: &str = "无数据";

/// 一次提交得到的检测会话
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSession {
    uid: String,
}

impl CheckSession {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// 供人工查看的结果页链接
    pub fn result_link(&self) -> String {
        format!("{}{}", RESULT_LINK_BASE, self.uid)
    }
}

/// seo_check 中我们关心的字段
///
/// `None` 表示字段缺失，`Some(Value::Null)` 表示字段存在但为 null
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeoCheck {
    #[serde(default, deserialize_with = "present")]
    pub spam_percent: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub water_percent: Option<Value>,
}

// 出现的字段（包括 null）一律为 Some，缺失时由 default 给出 None
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// seo_check 字段的三种情况
#[derive(Debug)]
pub enum SeoDetails {
    /// 响应中没有该字段（或为空）
    Absent,
    Parsed(SeoCheck),
    Malformed(SeoParseError),
}

impl SeoDetails {
    /// 从状态响应中提取
    ///
    /// 线上格式是 JSON 字符串套 JSON，已解码的对象也照样接受
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => SeoDetails::Absent,
            Some(Value::String(s)) if s.trim().is_empty() => SeoDetails::Absent,
            Some(Value::String(s)) => match serde_json::from_str::<SeoCheck>(s) {
                Ok(seo) => SeoDetails::Parsed(seo),
                Err(source) => SeoDetails::Malformed(SeoParseError {
                    raw: s.clone(),
                    source,
                }),
            },
            Some(other) => match serde_json::from_value::<SeoCheck>(other.clone()) {
                Ok(seo) => SeoDetails::Parsed(seo),
                Err(source) => SeoDetails::Malformed(SeoParseError {
                    raw: other.to_string(),
                    source,
                }),
            },
        }
    }

    /// 返回 (垃圾度, 水分) 两列的内容
    fn columns(&self) -> (String, String) {
        match self {
            SeoDetails::Absent => (String::new(), String::new()),
            SeoDetails::Parsed(seo) => (
                seo_column(seo.spam_percent.as_ref()),
                seo_column(seo.water_percent.as_ref()),
            ),
            SeoDetails::Malformed(_) => (
                SEO_PARSE_ERROR_MARKER.to_string(),
                SEO_PARSE_ERROR_MARKER.to_string(),
            ),
        }
    }
}

fn percent(value: &str) -> String {
    format!("{}%", value)
}

/// 缺失 → 无数据标记；null → 空；其余加 `%`
fn seo_column(value: Option<&Value>) -> String {
    match value {
        None => NO_DATA_MARKER.to_string(),
        Some(v) => value_to_text(v).map(|v| percent(&v)).unwrap_or_default(),
    }
}

/// 一次完成的检测
#[derive(Debug)]
pub struct CheckReport {
    pub uniqueness: String,
    pub seo: SeoDetails,
}

impl CheckReport {
    /// 从已完成的状态响应中提取结果
    pub fn from_status(status: &StatusResponse) -> Self {
        Self {
            uniqueness: status
                .text_unique
                .as_ref()
                .and_then(value_to_text)
                .unwrap_or_default(),
            seo: SeoDetails::from_raw(status.seo_check.as_ref()),
        }
    }
}

/// 报告中的一行，对应一篇文章
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRow {
    pub text_preview: String,
    pub uniqueness: String,
    pub spam: String,
    pub water: String,
    pub link: String,
    pub error: String,
}

impl ResultRow {
    /// 表头，顺序与字段顺序一致
    pub const HEADERS: [&'static str; 6] =
        ["文本", "原创度", "关键词堆砌度", "水分", "结果链接", "错误"];

    /// 检测成功的行
    pub fn completed(text_preview: String, session: &CheckSession, report: &CheckReport) -> Self {
        let (spam, water) = report.seo.columns();
        Self {
            text_preview,
            uniqueness: percent(&report.uniqueness),
            spam,
            water,
            link: session.result_link(),
            error: String::new(),
        }
    }

    /// 检测失败的行，拿到 uid 之后的失败仍然保留链接
    pub fn failed(text_preview: String, session: Option<&CheckSession>, error: &CheckError) -> Self {
        Self {
            text_preview,
            link: session.map(CheckSession::result_link).unwrap_or_default(),
            error: error.to_string(),
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_empty()
    }

    /// 按表头顺序输出各列
    pub fn cells(&self) -> [&str; 6] {
        [
            self.text_preview.as_str(),
            self.uniqueness.as_str(),
            self.spam.as_str(),
            self.water.as_str(),
            self.link.as_str(),
            self.error.as_str(),
        ]
    }
}
