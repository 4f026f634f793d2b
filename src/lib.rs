//! # text.ru Bulk Check
//!
//! 从 Word 文档中读取文章，逐篇提交到 text.ru 检测原创度，结果写入 Excel
//!
//! ## 架构设计
//!
//! ### ① 接口层（Clients）
//! - `clients/` - 与 text.ru 交互，`CheckApi` 是唯一的接缝
//!
//! ### ② 业务能力层（Services）
//! - `PollPolicy` - 固定间隔、固定次数的轮询
//! - `ReportWriter` - 写 Excel 报告
//!
//! ### ③ 流程层（Workflow）
//! - `CheckFlow` - 单篇文章的流程编排（submit → poll → row）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 读文档、逐篇检测、写报告
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{CheckApi, TextRuClient};
pub use config::Config;
pub use error::{AppError, AppResult, CheckError};
pub use models::{Article, ResultRow};
pub use orchestrator::{App, BatchSummary};
pub use workflow::{ArticleCtx, CheckFlow};
