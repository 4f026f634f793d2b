//! 单篇文章检测流程 - 流程层
//!
//! 核心职责：定义"一篇文章"的完整处理流程
//!
//! 流程顺序：
//! 1. 提交文本 → 拿到 uid
//! 2. 按轮询策略查询状态 → 拿到原创度与 SEO 数据
//! 3. 无论成功失败都产出恰好一行结果

use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::CheckApi;
use crate::error::{CheckError, ProtocolError};
use crate::models::check::PREVIEW_CHARS;
use crate::models::{Article, CheckReport, CheckSession, ResultRow, SeoDetails};
use crate::services::{PollPolicy, Sleeper};
use crate::workflow::article_ctx::ArticleCtx;

/// 提交后未返回 uid、服务也没给出原因时的错误信息
pub const MISSING_UID_MESSAGE: &str = "未获取到 text_uid";

/// 单篇文章检测流程
///
/// - 不持有结果列表，只返回一行
/// - 任何错误都转换为失败行，不向上传播
pub struct CheckFlow {
    api: Arc<dyn CheckApi>,
    sleeper: Arc<dyn Sleeper>,
    policy: PollPolicy,
    min_text_chars: Option<usize>,
}

impl CheckFlow {
    /// 使用默认轮询策略创建
    pub fn new(api: Arc<dyn CheckApi>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            api,
            sleeper,
            policy: PollPolicy::default(),
            min_text_chars: None,
        }
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 短于 `min` 个字符的文章不提交，直接记为失败
    pub fn with_min_text_chars(mut self, min: usize) -> Self {
        self.min_text_chars = Some(min);
        self
    }

    /// 处理一篇文章，总是返回一行结果
    pub async fn run(&self, ctx: &ArticleCtx, article: &Article) -> ResultRow {
        let preview = article.preview(PREVIEW_CHARS);

        if let Some(min) = self.min_text_chars {
            let chars = article.char_count();
            if chars < min {
                warn!("{} 文本过短，跳过", ctx);
                return ResultRow::failed(preview, None, &CheckError::TooShort { chars, min });
            }
        }

        // ========== 阶段 1: 提交 ==========
        let session = match self.submit(article).await {
            Ok(session) => session,
            Err(e) => {
                warn!("{} ❌ 提交失败: {}", ctx, e);
                return ResultRow::failed(preview, None, &e);
            }
        };
        info!("{} ✓ 已提交，uid: {}", ctx, session.uid());

        // ========== 阶段 2: 轮询 ==========
        match self.poll(&session).await {
            Ok(report) => {
                if let SeoDetails::Malformed(e) = &report.seo {
                    warn!("{} ⚠️ {} (原始内容: {})", ctx, e, e.raw);
                }
                let row = ResultRow::completed(preview, &session, &report);
                info!(
                    "{} ✅ 检测完成: 原创度 {} | 关键词堆砌度 {} | 水分 {}",
                    ctx, row.uniqueness, row.spam, row.water
                );
                row
            }
            Err(e) => {
                warn!("{} ❌ {}，结果链接: {}", ctx, e, session.result_link());
                ResultRow::failed(preview, Some(&session), &e)
            }
        }
    }

    async fn submit(&self, article: &Article) -> Result<CheckSession, CheckError> {
        let response = self.api.submit(article.text()).await?;

        if let Some(uid) = response.uid() {
            return Ok(CheckSession::new(uid));
        }

        let desc = response
            .error_desc()
            .unwrap_or_else(|| MISSING_UID_MESSAGE.to_string());
        Err(ProtocolError::MissingUid { desc }.into())
    }

    async fn poll(&self, session: &CheckSession) -> Result<CheckReport, CheckError> {
        let api = self.api.as_ref();
        let uid = session.uid();

        let status = self
            .policy
            .poll(self.sleeper.as_ref(), move |_| api.status(uid))
            .await?;

        Ok(CheckReport::from_status(&status))
    }
}
