//! 文章处理上下文
//!
//! 封装"我正在处理第几篇文章"这一信息

use std::fmt::Display;

/// 文章处理上下文
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCtx {
    /// 文章序号（从1开始）
    pub index: usize,

    /// 文章总数
    pub total: usize,
}

impl ArticleCtx {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }
}

impl Display for ArticleCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文章 {}/{}]", self.index, self.total)
    }
}
