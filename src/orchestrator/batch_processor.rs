//! 批量检测处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责整批文章的处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、创建 text.ru 客户端
//! 2. **加载文章**：从 Word 文档读取 `Vec<Article>`
//! 3. **顺序处理**：逐篇交给 `CheckFlow`，每篇恰好得到一行结果
//! 4. **写出报告**：全部处理完后一次性写入 Excel
//! 5. **全局统计**：汇总成功 / 失败数量
//!
//! 只有读文档和写报告的失败会中断整批，单篇文章的失败都记录在结果行里。

use crate::clients::{CheckApi, TextRuClient};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{load_articles_from_docx, Article, ResultRow};
use crate::services::{ReportWriter, Sleeper, TokioSleeper};
use crate::utils::logging;
use crate::workflow::{ArticleCtx, CheckFlow};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: CheckFlow,
    writer: ReportWriter,
}

/// 一次批量检测的结果
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 与输入文章一一对应的结果行
    pub rows: Vec<ResultRow>,
    pub success: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.rows.len()
    }
}

impl App {
    /// 初始化应用（真实的 text.ru 客户端 + tokio 定时器）
    pub fn initialize(config: Config) -> AppResult<Self> {
        config.validate()?;

        let api = Arc::new(TextRuClient::new(&config));
        Ok(Self::with_api(config, api, Arc::new(TokioSleeper)))
    }

    /// 注入自定义的服务实现与等待方式
    pub fn with_api(config: Config, api: Arc<dyn CheckApi>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            writer: ReportWriter::with_path(config.output_path.clone()),
            flow: CheckFlow::new(api, sleeper),
            config,
        }
    }

    /// 替换单篇处理流程（例如调整轮询策略）
    pub fn with_flow(mut self, flow: CheckFlow) -> Self {
        self.flow = flow;
        self
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<BatchSummary> {
        logging::log_startup(&self.config.docx_path, &self.config.output_path);

        let articles = self.load_articles()?;

        if articles.is_empty() {
            warn!("⚠️ 文档中没有找到文章，只写出表头");
        } else {
            logging::log_articles_loaded(articles.len());
        }

        let summary = self.check_all(&articles).await;

        self.writer.write(&summary.rows)?;

        logging::print_final_stats(
            summary.success,
            summary.failed,
            summary.total(),
            self.writer.output_path(),
        );

        Ok(summary)
    }

    /// 加载文章
    fn load_articles(&self) -> AppResult<Vec<Article>> {
        info!("\n📁 正在读取文档...");
        Ok(load_articles_from_docx(Path::new(&self.config.docx_path))?)
    }

    /// 逐篇检测
    async fn check_all(&self, articles: &[Article]) -> BatchSummary {
        let total = articles.len();
        let mut summary = BatchSummary {
            rows: Vec::with_capacity(total),
            ..Default::default()
        };

        for (idx, article) in articles.iter().enumerate() {
            let ctx = ArticleCtx::new(idx + 1, total);
            logging::log_article_start(ctx.index, ctx.total, article.text());

            let row = self.flow.run(&ctx, article).await;
            if row.is_success() {
                summary.success += 1;
            } else {
                summary.failed += 1;
            }
            summary.rows.push(row);
        }

        summary
    }
}
