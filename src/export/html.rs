//! Markdown到HTML的转换与打印文档封装
//!
//! 转换规则固定且极小：`#`/`##` 标题、`**` 加粗、空行分段、
//! `:::` 表格哨兵块（每行 `标签|值` 一行表格）。
//! 其余语法一律按字面文本透传。

use regex::Regex;
use std::sync::LazyLock;

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern"));

/// 打印样式（页边距、表格边框、页眉页脚），嵌入打印文档头部
const PRINT_STYLE: &str = r#"
body { font-family: "SimSun", "Songti SC", serif; font-size: 10.5pt; line-height: 1.6; color: #1a1a1a; max-width: 48em; margin: 0 auto; padding: 2em; }
h1 { font-size: 18pt; text-align: center; margin-bottom: 0.5em; }
h2 { font-size: 14pt; margin-top: 1.2em; border-bottom: 1px solid #ccc; padding-bottom: 0.2em; }
table { border-collapse: collapse; width: 100%; margin: 0.8em 0; }
td { border: 1px solid #999; padding: 0.4em 0.6em; vertical-align: top; }
td:first-child { width: 11em; font-weight: bold; background: #f5f5f5; }
@page { size: A4; margin: 2cm 1.8cm; }
@media print {
  body { padding: 0; }
  h2 { page-break-after: avoid; }
  table { page-break-inside: avoid; }
}
"#;

/// 将Markdown中间表示转换为HTML片段
pub fn markdown_to_html(markdown: &str) -> String {
    let mut html = String::new();
    let mut paragraph: Vec<String> = vec![];
    let mut in_table = false;

    for line in markdown.lines() {
        let line = line.trim_end();

        if line == ":::table" || line == ":::" {
            flush_paragraph(&mut html, &mut paragraph);
            if line == ":::table" {
                html.push_str("<table>\n");
                in_table = true;
            } else {
                html.push_str("</table>\n");
                in_table = false;
            }
            continue;
        }

        if in_table {
            let (label, value) = line.split_once('|').unwrap_or((line, ""));
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                render_inline(label),
                render_inline(value)
            ));
            continue;
        }

        if let Some(title) = line.strip_prefix("## ") {
            flush_paragraph(&mut html, &mut paragraph);
            html.push_str(&format!("<h2>{}</h2>\n", render_inline(title)));
        } else if let Some(title) = line.strip_prefix("# ") {
            flush_paragraph(&mut html, &mut paragraph);
            html.push_str(&format!("<h1>{}</h1>\n", render_inline(title)));
        } else if line.is_empty() {
            flush_paragraph(&mut html, &mut paragraph);
        } else {
            paragraph.push(render_inline(line));
        }
    }
    flush_paragraph(&mut html, &mut paragraph);

    html
}

/// 包装为带内嵌打印样式的完整HTML文档，交给宿主环境打印为PDF
pub fn to_printable_html(markdown: &str) -> String {
    let title = first_heading(markdown).unwrap_or_else(|| "投资建议书".to_string());
    format!(
        "<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        title,
        PRINT_STYLE,
        markdown_to_html(markdown)
    )
}

/// 行内渲染：先转义HTML特殊字符，再替换加粗定界符
fn render_inline(text: &str) -> String {
    let escaped = escape_html(text);
    BOLD_RE.replace_all(&escaped, "<strong>$1</strong>").into_owned()
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// 段内换行以<br>保留，空行对产生段落边界
fn flush_paragraph(html: &mut String, paragraph: &mut Vec<String>) {
    if paragraph.is_empty() {
        return;
    }
    html.push_str(&format!("<p>{}</p>\n", paragraph.join("<br>")));
    paragraph.clear();
}

fn first_heading(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| escape_html(title))
}
