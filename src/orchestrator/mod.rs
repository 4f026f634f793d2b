//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责整批文章的调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Article>，写出报告)
//!     ↓
//! workflow::CheckFlow (处理单篇 Article)
//!     ↓
//! services (能力层：轮询策略 / 报告写入)
//!     ↓
//! clients (text.ru 接口)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，CheckFlow 管单篇
//! 2. **顺序执行**：一次只处理一篇文章
//! 3. **向下依赖**：编排层 → workflow → services → clients

pub mod batch_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchSummary};
