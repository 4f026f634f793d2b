pub mod article;
pub mod check;
pub mod loaders;
pub mod response;

pub use article::{split_articles, Article};
pub use check::{CheckReport, CheckSession, ResultRow, SeoCheck, SeoDetails};
pub use loaders::load_articles_from_docx;
pub use response::{StatusResponse, SubmitResponse, STILL_PROCESSING_CODE};
