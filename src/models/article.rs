//! 文章模型与按空段落切分

use std::fmt;

/// 一篇待检测的文章
///
/// 已去除首尾空白，且保证非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    text: String,
}

impl Article {
    /// 从原始文本创建，空白文本返回 `None`
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                text: trimmed.to_string(),
            })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 字符数（非字节数）
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// 前 `max_chars` 个字符，用作报告中的文本预览
    pub fn preview(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// 将段落序列切分为文章
///
/// 非空段落逐行累积，遇到空段落（trim 后为空）且缓冲区非空时输出一篇；
/// 文档末尾没有空段落时，最后的缓冲区同样输出
pub fn split_articles<I, S>(paragraphs: I) -> Vec<Article>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut articles = Vec::new();
    let mut current = String::new();

    for paragraph in paragraphs {
        let paragraph = paragraph.as_ref();
        if paragraph.trim().is_empty() {
            if let Some(article) = Article::new(&current) {
                articles.push(article);
            }
            current.clear();
        } else {
            current.push_str(paragraph);
            current.push('\n');
        }
    }

    if let Some(article) = Article::new(&current) {
        articles.push(article);
    }

    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.text()).collect()
    }

    #[test]
    fn test_blank_paragraphs_separate_articles() {
        let paragraphs = ["第一篇 第一段", "第一篇 第二段", "", "第二篇", "", "第三篇"];
        let articles = split_articles(paragraphs);
        assert_eq!(
            texts(&articles),
            vec!["第一篇 第一段\n第一篇 第二段", "第二篇", "第三篇"]
        );
    }

    #[test]
    fn test_last_article_flushed_without_trailing_blank() {
        let articles = split_articles(["一", "", "二"]);
        assert_eq!(texts(&articles), vec!["一", "二"]);
    }

    #[test]
    fn test_consecutive_blanks_produce_no_empty_articles() {
        let articles = split_articles(["", "  ", "", "正文", "", "\t", "", "结尾", "", ""]);
        assert_eq!(texts(&articles), vec!["正文", "结尾"]);
    }

    #[test]
    fn test_all_blank_document_is_empty() {
        assert!(split_articles(["", "   ", "\t"]).is_empty());
        assert!(split_articles(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_article_count_matches_non_blank_runs() {
        let paragraphs = ["a", "b", "", "", "c", "", "d", "e", "f", "", "g"];
        assert_eq!(split_articles(paragraphs).len(), 4);
    }

    #[test]
    fn test_inner_whitespace_kept_outer_trimmed() {
        let articles = split_articles(["   缩进的段落", "第二行   "]);
        assert_eq!(texts(&articles), vec!["缩进的段落\n第二行"]);
    }

    #[test]
    fn test_preview_counts_characters() {
        let article = Article::new(&"Проверка уникальности текста ".repeat(5)).unwrap();
        let preview = article.preview(50);
        assert_eq!(preview.chars().count(), 50);
        assert!(article.text().starts_with(&preview));

        let short = Article::new("коротко").unwrap();
        assert_eq!(short.preview(50), "коротко");
        assert_eq!(short.char_count(), 7);
    }

    #[test]
    fn test_blank_article_rejected() {
        assert!(Article::new(" \n\t ").is_none());
    }
}
