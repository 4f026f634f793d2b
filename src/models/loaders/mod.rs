pub mod docx_loader;

pub use docx_loader::load_articles_from_docx;
