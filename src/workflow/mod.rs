pub mod article_ctx;
pub mod check_flow;

pub use article_ctx::ArticleCtx;
pub use check_flow::CheckFlow;
