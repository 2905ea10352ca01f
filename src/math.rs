//! Math guard - keeps LaTeX spans out of the markdown converter's reach
//!
//! Markdown treats `_`, `*` and `\` as syntax, which mangles TeX such as
//! `$a_1 * b_2$`. Before conversion every math span is swapped for an
//! `@@N@@` placeholder; after conversion the placeholders are swapped back.
//!
//! Recognised delimiters:
//! - `$...$` and `$$...$$`
//! - `\\(...\\)` and `\\[...\\]` (doubled backslash, as typed in markdown)
//! - `\begin{env}...\end{env}`
//!
//! Once any placeholder exists, every other `@` run in the text is stashed
//! as well, so the stripped text holds no `@` outside a placeholder.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Splits text into alternating prose / token pieces.
///
/// The doubled-backslash delimiters are listed before the single escapes so
/// that `\\(` is not consumed as an escaped backslash.
fn math_split() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)\$\$?|\\\\(?:\(|\)|\[|\])|\\(?:begin|end)\{[a-z]*\*?\}|\\[\\{}$]|[{}]|(?:\n\s*)+|@@\d+@@",
        )
        .expect("math split pattern is valid")
    })
}

fn placeholder_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"@@(\d+)@@").expect("placeholder pattern is valid"))
}

/// Placeholder text for the math expression at `index`
pub fn placeholder(index: usize) -> String {
    format!("@@{}@@", index)
}

/// Extracted math expressions, indexed by placeholder number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MathMapping {
    expressions: Vec<String>,
}

impl MathMapping {
    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Original text stored for placeholder `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.expressions.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expressions.iter().map(String::as_str)
    }

    fn push(&mut self, expression: String) -> String {
        let token = placeholder(self.expressions.len());
        self.expressions.push(expression);
        token
    }
}

/// Replace every math span in `text` with a placeholder
///
/// Returns the stripped text and the mapping needed by [`restore_math`].
/// Unterminated delimiters are left in place as literal text.
pub fn extract_math(text: &str) -> (String, MathMapping) {
    let has_code_spans = text.contains('`');
    let source = if has_code_spans {
        mask_code_spans(text)
    } else {
        text.to_string()
    };

    let mut blocks = split_keeping_delimiters(&source);
    let mut generated = vec![false; blocks.len()];
    let mut mapping = MathMapping::default();
    let mut scan = SpanScan::default();

    let mut i = 1;
    while i < blocks.len() {
        match scan.start {
            None => {
                if blocks[i].starts_with('@') {
                    // Pre-existing placeholder lookalike: stash it so that
                    // restoration hands it back unchanged.
                    let literal = std::mem::take(&mut blocks[i]);
                    blocks[i] = mapping.push(literal);
                    generated[i] = true;
                } else if let Some(end) = closing_delimiter(&blocks[i]) {
                    scan.open(i, end);
                }
            }
            Some(start) => {
                let block = blocks[i].as_str();
                if block == scan.end {
                    if scan.braces > 0 {
                        scan.last = Some(i);
                    } else {
                        collect_span(&mut blocks, start, i, &mut mapping, has_code_spans);
                        generated[start] = true;
                        scan = SpanScan::default();
                    }
                } else if is_paragraph_break(block) {
                    if let Some(last) = scan.last {
                        i = last;
                        collect_span(&mut blocks, start, last, &mut mapping, has_code_spans);
                        generated[start] = true;
                    }
                    scan = SpanScan::default();
                } else if block == "{" {
                    scan.braces += 1;
                } else if block == "}" && scan.braces > 0 {
                    scan.braces -= 1;
                }
            }
        }
        i += 2;
    }

    if let (Some(start), Some(last)) = (scan.start, scan.last) {
        collect_span(&mut blocks, start, last, &mut mapping, has_code_spans);
        generated[start] = true;
    }

    if !mapping.is_empty() {
        for (block, generated) in blocks.iter_mut().zip(&generated) {
            if !*generated && block.contains('@') {
                *block = stash_at_runs(block, &mut mapping);
            }
        }
    }

    let stripped = blocks.concat();
    let stripped = if has_code_spans {
        unmask(&stripped)
    } else {
        stripped
    };
    (stripped, mapping)
}

/// Put the extracted math back into rendered HTML, verbatim
///
/// Single pass: restored expressions are not rescanned. Placeholders with an
/// index outside the mapping are left as they are.
pub fn restore_math(html: &str, mapping: &MathMapping) -> String {
    if mapping.is_empty() {
        return html.to_string();
    }
    placeholder_pattern()
        .replace_all(html, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| mapping.get(index))
                .map(str::to_string)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// State of the delimiter currently being matched
#[derive(Debug, Default)]
struct SpanScan {
    start: Option<usize>,
    end: String,
    braces: usize,
    /// Closing delimiter seen while braces were still open
    last: Option<usize>,
}

impl SpanScan {
    fn open(&mut self, start: usize, end: String) {
        self.start = Some(start);
        self.end = end;
        self.braces = 0;
        self.last = None;
    }
}

/// The delimiter that closes a span opened by `block`, if it opens one
fn closing_delimiter(block: &str) -> Option<String> {
    match block {
        "$" | "$$" => Some(block.to_string()),
        r"\\(" => Some(r"\\)".to_string()),
        r"\\[" => Some(r"\\]".to_string()),
        _ => block
            .strip_prefix(r"\begin")
            .map(|env| format!(r"\end{}", env)),
    }
}

/// A run of newlines spanning a blank line ends a paragraph
fn is_paragraph_break(block: &str) -> bool {
    block.matches('\n').count() >= 2
}

/// Collapse blocks `start..=end` into one stored expression
fn collect_span(
    blocks: &mut [String],
    start: usize,
    end: usize,
    mapping: &mut MathMapping,
    masked: bool,
) {
    let mut expression = String::new();
    for block in &mut blocks[start..=end] {
        expression.push_str(block);
        block.clear();
    }
    if masked {
        expression = unmask(&expression);
    }
    blocks[start] = mapping.push(expression);
}

/// Replace each maximal run of `@` in `text` with a placeholder
fn stash_at_runs(text: &str, mapping: &mut MathMapping) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('@') {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];
        let run = tail.len() - tail.trim_start_matches('@').len();
        out.push_str(&mapping.push(tail[..run].to_string()));
        rest = &tail[run..];
    }
    out.push_str(rest);
    out
}

/// Split on the math tokens, keeping them at odd indices
fn split_keeping_delimiters(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut last = 0;
    for token in math_split().find_iter(text) {
        blocks.push(text[last..token.start()].to_string());
        blocks.push(token.as_str().to_string());
        last = token.end();
    }
    blocks.push(text[last..].to_string());
    blocks
}

/// Hide `$` inside inline code spans so they are never taken as delimiters
///
/// `~` is escaped as `~T` first, then `$` inside spans becomes `~D`;
/// [`unmask`] reverses both.
fn mask_code_spans(text: &str) -> String {
    let escaped = text.replace('~', "~T");
    let bytes = escaped.as_bytes();
    let mut out = String::with_capacity(escaped.len());
    let mut copied = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'`' {
            pos += 1;
            continue;
        }
        let open = pos;
        while pos < bytes.len() && bytes[pos] == b'`' {
            pos += 1;
        }
        if open > 0 && bytes[open - 1] == b'\\' {
            continue;
        }
        if let Some((content_end, close_end)) = find_closing_run(bytes, pos, pos - open) {
            out.push_str(&escaped[copied..pos]);
            out.push_str(&escaped[pos..content_end].replace('$', "~D"));
            copied = content_end;
            pos = close_end;
        }
    }
    out.push_str(&escaped[copied..]);
    out
}

/// Find a backtick run of exactly `run` characters on the same line
fn find_closing_run(bytes: &[u8], from: usize, run: usize) -> Option<(usize, usize)> {
    let mut pos = from;
    while pos < bytes.len() && bytes[pos] != b'\n' {
        if bytes[pos] != b'`' {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < bytes.len() && bytes[pos] == b'`' {
            pos += 1;
        }
        if pos - start == run && start > from {
            return Some((start, pos));
        }
    }
    None
}

fn unmask(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '~' {
            match chars.peek() {
                Some('T') => {
                    chars.next();
                    out.push('~');
                    continue;
                }
                Some('D') => {
                    chars.next();
                    out.push('$');
                    continue;
                }
                _ => {}
            }
        }
        out.push(ch);
    }
    out
}
