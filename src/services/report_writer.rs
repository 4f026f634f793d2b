//! 报告写入服务 - 业务能力层
//!
//! 只负责"把结果行写成 Excel"，不关心结果从哪来

use crate::error::WriteError;
use crate::models::ResultRow;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

/// 各列宽度，与表头一一对应
const COLUMN_WIDTHS: [f64; 6] = [52.0, 12.0, 16.0, 10.0, 42.0, 48.0];

/// 报告写入服务
pub struct ReportWriter {
    output_path: String,
}

impl ReportWriter {
    /// 使用指定文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            output_path: path.into(),
        }
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// 写入全部结果行
    ///
    /// 一行表头，之后每篇文章一行，顺序与输入一致；没有结果时只写表头
    pub fn write(&self, rows: &[ResultRow]) -> Result<(), WriteError> {
        debug!("写入报告: {} 行 -> {}", rows.len(), self.output_path);

        self.build_workbook(rows)
            .and_then(|mut workbook| workbook.save(&self.output_path))
            .map_err(|source| WriteError::Xlsx {
                path: self.output_path.clone(),
                source,
            })
    }

    fn build_workbook(&self, rows: &[ResultRow]) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name("text.ru")?;

        for (col, (header, width)) in ResultRow::HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, *header, &header_format)?;
            worksheet.set_column_width(col, width)?;
        }

        for (idx, row) in rows.iter().enumerate() {
            let row_num = (idx + 1) as u32;
            for (col, cell) in row.cells().iter().enumerate() {
                if !cell.is_empty() {
                    worksheet.write_string(row_num, col as u16, *cell)?;
                }
            }
        }

        Ok(workbook)
    }
}
