//! text.ru API 客户端
//!
//! 提交与查询共用一个 POST 地址，参数以表单形式发送

use crate::clients::CheckApi;
use crate::config::Config;
use crate::error::{CheckError, Stage};
use crate::models::{StatusResponse, SubmitResponse};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// text.ru 客户端
pub struct TextRuClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl TextRuClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// 提交文本的表单参数
    fn submit_form<'a>(&'a self, text: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            ("userkey", self.api_key.as_str()),
            ("text", text),
            ("visible", "text"),
            ("jsonvisible", "detail"),
            ("json", "1"),
        ]
    }

    /// 查询状态的表单参数
    fn status_form<'a>(&'a self, uid: &'a str) -> Vec<(&'static str, &'a str)> {
        vec![
            ("userkey", self.api_key.as_str()),
            ("uid", uid),
            ("jsonvisible", "detail"),
            ("json", "1"),
        ]
    }

    /// 发送表单并解析 JSON
    async fn post_form<T: DeserializeOwned>(
        &self,
        stage: Stage,
        form: &[(&'static str, &str)],
    ) -> Result<T, CheckError> {
        let response = self
            .http
            .post(&self.api_url)
            .form(form)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| CheckError::transport(stage, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| CheckError::transport(stage, e))?;
        debug!("{} 响应: {}", stage, body);

        decode_body(stage, &body)
    }
}

/// 解析响应体
fn decode_body<T: DeserializeOwned>(stage: Stage, body: &str) -> Result<T, CheckError> {
    serde_json::from_str(body).map_err(|e| CheckError::invalid_body(stage, e))
}

#[async_trait]
impl CheckApi for TextRuClient {
    async fn submit(&self, text: &str) -> Result<SubmitResponse, CheckError> {
        debug!("提交文本，长度: {} 字符", text.chars().count());
        self.post_form(Stage::Submit, &self.submit_form(text)).await
    }

    async fn status(&self, uid: &str) -> Result<StatusResponse, CheckError> {
        debug!("查询检测状态，uid: {}", uid);
        self.post_form(Stage::Status, &self.status_form(uid)).await
    }
}
