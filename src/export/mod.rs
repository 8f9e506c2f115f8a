//! 建议书导出
//!
//! 先渲染确定性的Markdown中间表示，再按目标格式封装：
//! Markdown原样落盘；HTML带内嵌打印样式；Word兼容HTML以.doc落盘。

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::InvestmentReport;

pub mod html;
pub mod markdown;
pub mod word;

pub use html::{markdown_to_html, to_printable_html};
pub use markdown::{to_markdown, to_markdown_with_date, FOOTER_DISCLAIMER};
pub use word::{to_word_html, DOC_MIME};

/// 导出目标格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown原文
    Markdown,
    /// 带打印样式的HTML（宿主环境打印为PDF）
    Html,
    /// Word兼容HTML
    Doc,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] =
        [ExportFormat::Markdown, ExportFormat::Html, ExportFormat::Doc];

    /// 落盘文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Doc => "doc",
        }
    }

    fn render(&self, markdown: &str) -> String {
        match self {
            ExportFormat::Markdown => markdown.to_string(),
            ExportFormat::Html => to_printable_html(markdown),
            ExportFormat::Doc => to_word_html(markdown),
        }
    }
}

/// 导出文件名：`{公司名}_投资建议书.{扩展名}`
pub fn export_filename(company_name: &str, format: ExportFormat) -> String {
    format!("{}_投资建议书.{}", company_name, format.extension())
}

/// 将建议书以全部格式保存到输出目录，返回落盘路径列表
pub fn save_exports(
    output_dir: &Path,
    report: &InvestmentReport,
    company_name: &str,
) -> Result<Vec<PathBuf>> {
    println!("\n🖊️ 建议书导出中...");
    fs::create_dir_all(output_dir)?;

    let md = to_markdown(report, company_name);
    let mut saved = Vec::with_capacity(ExportFormat::ALL.len());

    for format in ExportFormat::ALL {
        let path = output_dir.join(export_filename(company_name, format));
        fs::write(&path, format.render(&md))?;
        println!("💾 已保存文档: {}", path.display());
        saved.push(path);
    }

    println!("💾 导出完成，输出目录: {}", output_dir.display());
    Ok(saved)
}
