//! Markup and plain-text rendering of classified lines.

use duplex_api::{ClassifiedLine, ComparisonResult, LineBlock};

use crate::config::RenderConfig;

/// Escape `&`, `<` and `>` for embedding in markup.
#[must_use]
pub fn escape_markup(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Serializes classified lines for display and export.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Construct a renderer with explicit settings.
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Escape text according to the configured policy.
    #[must_use]
    pub fn escape(&self, text: &str) -> String {
        if self.config.escape_quotes {
            html_escape::encode_quoted_attribute(text).into_owned()
        } else {
            escape_markup(text)
        }
    }

    /// Escaped, line-numbered blocks for one side.
    #[must_use]
    pub fn blocks(&self, lines: &[ClassifiedLine]) -> Vec<LineBlock> {
        lines
            .iter()
            .map(|line| LineBlock {
                line_number: line.line_number,
                category: line.category,
                placeholder: line.is_placeholder,
                html: self.escape(&line.content),
            })
            .collect()
    }

    /// Markup for one side: one element per line.
    #[must_use]
    pub fn render_side(&self, lines: &[ClassifiedLine]) -> String {
        let mut html = String::new();
        for line in lines {
            let placeholder = if line.is_placeholder {
                " diff-placeholder"
            } else {
                ""
            };
            html.push_str(&format!(
                "<div class=\"diff-line {class}{placeholder}\" data-line=\"{number}\">\
                 <span class=\"line-number\">{number}</span>\
                 <span class=\"line-content\">{content}</span></div>",
                class = line.category.css_class(),
                number = line.line_number,
                content = self.escape(&line.content),
            ));
        }
        html
    }

    /// Plain-text report of both sides.
    #[must_use]
    pub fn text_report(&self, result: &ComparisonResult) -> String {
        format!(
            "Text A:\n{}\n\nText B:\n{}",
            plain_text(&result.lines_a),
            plain_text(&result.lines_b)
        )
    }

    /// Standalone HTML document containing both rendered sides.
    #[must_use]
    pub fn html_document(&self, result: &ComparisonResult) -> String {
        let title = self.escape(&self.config.document_title);
        format!(
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
             <body><h1>{title}</h1><h3>Text A</h3>{a}<h3>Text B</h3>{b}</body></html>",
            a = self.render_side(&result.lines_a),
            b = self.render_side(&result.lines_b),
        )
    }
}

/// Line contents joined with newlines; placeholders render empty.
#[must_use]
pub fn plain_text(lines: &[ClassifiedLine]) -> String {
    lines
        .iter()
        .map(|line| {
            if line.is_placeholder {
                ""
            } else {
                line.content.as_str()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
