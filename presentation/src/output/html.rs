//! Standalone verdict document export
//!
//! Produces a self-contained HTML file with embedded CSS, so the ruling
//! stays presentable when opened offline. The verdict prompt instructs the
//! judge to use only `###` headings and `**bold**` emphasis, so rendering
//! handles exactly those two conventions plus paragraphs.

use gavel_domain::TrialResult;

/// Render the verdict as a complete standalone HTML document.
pub fn verdict_document(result: &TrialResult) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>CyberGavel Verdict</title>
    <style>
        body {{
            font-family: 'Georgia', serif;
            background-color: #f0f2f6;
            display: flex;
            justify-content: center;
            padding: 40px;
            margin: 0;
        }}
        .verdict-paper {{
            background-color: #fdfbf7;
            color: #2c3e50;
            padding: 60px;
            width: 100%;
            max-width: 900px;
            border: 1px solid #dcdcdc;
            box-shadow: 0 10px 30px rgba(0,0,0,0.1);
            border-radius: 8px;
        }}
        h1 {{
            text-align: center;
            border-bottom: 3px double #8d6e63;
            padding-bottom: 20px;
            margin-bottom: 30px;
        }}
        h3 {{
            border-left: 5px solid #8d6e63;
            padding-left: 15px;
            margin-top: 30px;
        }}
        p {{
            line-height: 1.8;
            font-size: 16px;
            margin-bottom: 15px;
            text-align: justify;
        }}
        strong {{
            color: #d35400;
            font-weight: 900;
        }}
        .footer {{
            margin-top: 60px;
            text-align: center;
            color: #95a5a6;
            font-size: 13px;
        }}
    </style>
</head>
<body>
    <div class="verdict-paper">
        <h1>⚖️ Verdict</h1>
        <p><em>Case: {case}</em></p>
        {body}
        <div class="footer">Rendered by CyberGavel — a simulated proceeding, not legal advice.</div>
    </div>
</body>
</html>
"#,
        case = escape_html(&result.topic),
        body = render_markdown(&result.verdict),
    )
}

/// Minimal renderer for the two conventions the verdict prompt requests:
/// `### ` headings and `**bold**` inline emphasis.
fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    for line in markdown.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        if let Some(heading) = line.strip_prefix("### ") {
            out.push_str(&format!("<h3>{}</h3>\n", render_bold(heading)));
        } else {
            out.push_str(&format!("<p>{}</p>\n", render_bold(line)));
        }
    }
    out
}

fn render_bold(line: &str) -> String {
    let escaped = escape_html(line);
    let mut out = String::with_capacity(escaped.len());
    let mut open = false;
    let mut rest = escaped.as_str();
    while let Some(idx) = rest.find("**") {
        out.push_str(&rest[..idx]);
        out.push_str(if open { "</strong>" } else { "<strong>" });
        open = !open;
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    if open {
        // Unbalanced marker: close the tag rather than emit broken HTML.
        out.push_str("</strong>");
    }
    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_domain::Transcript;

    #[test]
    fn test_headings_and_bold_are_rendered() {
        assert_eq!(
            render_markdown("### Ruling\nThe **plaintiff** prevails."),
            "<h3>Ruling</h3>\n<p>The <strong>plaintiff</strong> prevails.</p>\n"
        );
    }

    #[test]
    fn test_html_in_verdict_text_is_escaped() {
        let rendered = render_markdown("use <script> tags & win");
        assert!(rendered.contains("&lt;script&gt;"));
        assert!(rendered.contains("&amp;"));
    }

    #[test]
    fn test_unbalanced_bold_is_closed() {
        let rendered = render_bold("oops **unclosed");
        assert_eq!(rendered, "oops <strong>unclosed</strong>");
    }

    #[test]
    fn test_document_contains_case_and_verdict() {
        let result = TrialResult {
            topic: "X".to_string(),
            transcript: Transcript::open("X"),
            jury_opinions: vec![],
            verdict: "### Ruling\n**Done.**".to_string(),
        };
        let doc = verdict_document(&result);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("Case: X"));
        assert!(doc.contains("<h3>Ruling</h3>"));
    }
}
