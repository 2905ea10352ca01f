//! Markdown rendering for markdown cells
//!
//! [`render_markdown`] is the full pipeline: math is lifted out, the rest is
//! converted to HTML, then the math is put back verbatim.

mod renderer;

pub use renderer::{markdown_options, markdown_to_html, CmarkConverter, MarkdownConverter};

use crate::math::{extract_math, restore_math};

/// Convert markdown to HTML without disturbing any math expression
pub fn render_markdown(text: &str, converter: &dyn MarkdownConverter) -> String {
    let (stripped, math) = extract_math(text);
    let html = converter.convert(&stripped);
    let html = restore_math(&html, &math);
    tracing::debug!(
        target: "render",
        math_spans = math.len(),
        html_len = html.len(),
        "markdown rendered"
    );
    html
}
