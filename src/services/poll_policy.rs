//! 轮询策略 - 业务能力层
//!
//! 固定间隔、固定次数的轮询，只关心"何时继续、何时停止"，不关心请求怎么发

use crate::error::{CheckError, ProtocolError};
use crate::models::StatusResponse;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// 两次查询之间的等待时间
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// 最大查询次数（约 60 秒）
pub const MAX_POLL_ATTEMPTS: usize = 12;

/// 等待能力，测试时替换为不真正睡眠的实现
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// 基于 tokio 定时器的等待
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 单次查询结果的判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollDecision {
    /// 检测完成
    Completed,
    /// 仍在检测，继续下一次
    Retry,
    /// 其他错误码（或没有错误码），立即停止
    Abort,
}

/// 轮询策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: usize,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: usize) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// 完成判定：带有非空的 text_unique
    pub fn is_completed(status: &StatusResponse) -> bool {
        status.is_completed()
    }

    /// 可重试判定：error_code 为"仍在检测"
    pub fn is_retryable(status: &StatusResponse) -> bool {
        status.is_still_processing()
    }

    pub fn decide(status: &StatusResponse) -> PollDecision {
        if Self::is_completed(status) {
            PollDecision::Completed
        } else if Self::is_retryable(status) {
            PollDecision::Retry
        } else {
            PollDecision::Abort
        }
    }

    /// 执行轮询
    ///
    /// 每次查询前先等待 `interval`；请求失败立即返回，不再消耗剩余次数；
    /// 次数耗尽时返回 `Timeout`，附带最后一次的错误描述
    pub async fn poll<S, F, Fut>(&self, sleeper: &S, mut fetch: F) -> Result<StatusResponse, CheckError>
    where
        S: Sleeper + ?Sized,
        F: FnMut(usize) -> Fut,
        Fut: Future<Output = Result<StatusResponse, CheckError>>,
    {
        let mut last_desc = None;

        for attempt in 1..=self.max_attempts {
            sleeper.sleep(self.interval).await;

            let status = fetch(attempt).await?;

            match Self::decide(&status) {
                PollDecision::Completed => {
                    debug!("第 {}/{} 次查询: 检测完成", attempt, self.max_attempts);
                    return Ok(status);
                }
                PollDecision::Retry => {
                    debug!("第 {}/{} 次查询: 仍在检测中", attempt, self.max_attempts);
                    last_desc = status.error_desc;
                }
                PollDecision::Abort => {
                    let desc = status
                        .error_desc
                        .unwrap_or_else(|| "检测未完成".to_string());
                    return Err(ProtocolError::Terminal {
                        code: status.error_code,
                        desc,
                    }
                    .into());
                }
            }
        }

        Err(CheckError::Timeout {
            attempts: self.max_attempts,
            last_desc,
        })
    }
}
