//! Word兼容HTML封装
//!
//! 不生成真正的OOXML：复用HTML转换结果，套上Office命名空间与
//! mso条件注释，使Word按打印视图打开。文件以.doc扩展名落盘。

use crate::export::html::markdown_to_html;

/// Word兼容文档的MIME类型
pub const DOC_MIME: &str = "application/msword";

/// Word文档内嵌样式，与打印样式保持同一套版式约定
const WORD_STYLE: &str = r#"
body { font-family: "SimSun", serif; font-size: 10.5pt; line-height: 1.6; }
h1 { font-size: 18pt; text-align: center; }
h2 { font-size: 14pt; }
table { border-collapse: collapse; width: 100%; }
td { border: 1px solid #999; padding: 4pt 6pt; }
"#;

/// 将Markdown中间表示封装为Word可打开的HTML文档
pub fn to_word_html(markdown: &str) -> String {
    let body = markdown_to_html(markdown);
    format!(
        concat!(
            "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" ",
            "xmlns:w=\"urn:schemas-microsoft-com:office:word\" ",
            "xmlns=\"http://www.w3.org/TR/REC-html40\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<!--[if gte mso 9]><xml>\n",
            "<w:WordDocument><w:View>Print</w:View><w:Zoom>100</w:Zoom></w:WordDocument>\n",
            "</xml><![endif]-->\n",
            "<style>{}</style>\n",
            "</head>\n",
            "<body>\n{}</body>\n",
            "</html>\n"
        ),
        WORD_STYLE, body
    )
}
