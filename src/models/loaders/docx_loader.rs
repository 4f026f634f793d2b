use crate::error::DocumentReadError;
use crate::models::article::{split_articles, Article};
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use std::path::Path;
use tracing::{debug, info};

/// 从 Word 文档读取文章列表
///
/// 每次调用都会重新读取文件，文章之间以空段落分隔
pub fn load_articles_from_docx(docx_path: &Path) -> Result<Vec<Article>, DocumentReadError> {
    let path_label = docx_path.display().to_string();

    if !docx_path.exists() {
        return Err(DocumentReadError::NotFound { path: path_label });
    }

    let bytes = std::fs::read(docx_path).map_err(|source| DocumentReadError::ReadFailed {
        path: path_label.clone(),
        source,
    })?;

    let paragraphs = read_paragraphs(&bytes).map_err(|reason| DocumentReadError::InvalidContainer {
        path: path_label.clone(),
        reason,
    })?;
    debug!("文档 {} 共 {} 个段落", path_label, paragraphs.len());

    let articles = split_articles(&paragraphs);
    info!("从 {} 读取到 {} 篇文章", path_label, articles.len());

    Ok(articles)
}

/// 解析 docx 字节流，按顺序返回正文中每个顶层段落的文本
fn read_paragraphs(bytes: &[u8]) -> Result<Vec<String>, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| format!("{:?}", e))?;

    let paragraphs = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect();

    Ok(paragraphs)
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buffer = String::new();
    for child in &paragraph.children {
        push_paragraph_child(child, &mut buffer);
    }
    buffer
}

fn push_paragraph_child(child: &ParagraphChild, buffer: &mut String) {
    match child {
        ParagraphChild::Run(run) => push_run(run, buffer),
        ParagraphChild::Hyperlink(link) => {
            for link_child in &link.children {
                push_paragraph_child(link_child, buffer);
            }
        }
        ParagraphChild::Insert(insert) => {
            for insert_child in &insert.children {
                if let docx_rs::InsertChild::Run(run) = insert_child {
                    push_run(run, buffer);
                }
            }
        }
        _ => {}
    }
}

fn push_run(run: &Run, buffer: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buffer.push_str(&text.text),
            RunChild::Tab(_) => buffer.push('\t'),
            RunChild::Break(_) => buffer.push('\n'),
            RunChild::Sym(sym) => buffer.push_str(&sym.char),
            _ => {}
        }
    }
}
