pub mod textru_client;

pub use textru_client::TextRuClient;

use crate::error::CheckError;
use crate::models::{StatusResponse, SubmitResponse};
use async_trait::async_trait;

/// 检测服务的两种调用
///
/// 流程层只依赖这个 trait，测试时可以换成脚本化的假实现
#[async_trait]
pub trait CheckApi: Send + Sync {
    /// 提交文本，返回带 uid 或错误描述的响应
    async fn submit(&self, text: &str) -> Result<SubmitResponse, CheckError>;

    /// 按 uid 查询检测状态
    async fn status(&self, uid: &str) -> Result<StatusResponse, CheckError>;
}
