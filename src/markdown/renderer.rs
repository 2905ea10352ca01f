//! Markdown to HTML converter using pulldown-cmark

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::config::MarkdownConfig;
use crate::util::escape_html;

/// Converts markdown text to an HTML fragment
///
/// Implementations must be pure: the same text always yields the same HTML.
pub trait MarkdownConverter {
    fn convert(&self, markdown: &str) -> String;
}

impl<F> MarkdownConverter for F
where
    F: Fn(&str) -> String,
{
    fn convert(&self, markdown: &str) -> String {
        self(markdown)
    }
}

/// Default converter backed by pulldown-cmark
#[derive(Debug, Clone)]
pub struct CmarkConverter {
    options: Options,
    links_in_new_tab: bool,
}

impl CmarkConverter {
    pub fn new(config: &MarkdownConfig) -> Self {
        Self {
            options: markdown_options(config),
            links_in_new_tab: config.links_in_new_tab,
        }
    }
}

impl Default for CmarkConverter {
    fn default() -> Self {
        Self::new(&MarkdownConfig::default())
    }
}

impl MarkdownConverter for CmarkConverter {
    fn convert(&self, markdown: &str) -> String {
        render(markdown, self.options, self.links_in_new_tab)
    }
}

/// Parser extensions enabled by the config
pub fn markdown_options(config: &MarkdownConfig) -> Options {
    let mut options = Options::empty();
    options.set(Options::ENABLE_TABLES, config.tables);
    options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
    options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
    options.set(Options::ENABLE_TASKLISTS, config.tasklists);
    options
}

/// Convert markdown to an HTML fragment
pub fn markdown_to_html(markdown: &str, config: &MarkdownConfig) -> String {
    render(markdown, markdown_options(config), config.links_in_new_tab)
}

fn render(markdown: &str, options: Options, links_in_new_tab: bool) -> String {
    let parser = Parser::new_ext(markdown, options);

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    if links_in_new_tab {
        html::push_html(&mut html_output, open_links_in_new_tab(parser));
    } else {
        html::push_html(&mut html_output, parser);
    }
    html_output
}

/// Rewrite links that leave the page to open in a new tab
///
/// In-page links (`#anchor`) are passed through untouched.
fn open_links_in_new_tab<'a>(
    events: impl Iterator<Item = Event<'a>>,
) -> impl Iterator<Item = Event<'a>> {
    let mut rewritten: Vec<bool> = Vec::new();

    events.map(move |event| match event {
        Event::Start(Tag::Link {
            dest_url, title, ..
        }) if !dest_url.starts_with('#') => {
            rewritten.push(true);
            Event::InlineHtml(CowStr::from(link_open_tag(&dest_url, &title)))
        }
        Event::Start(tag @ Tag::Link { .. }) => {
            rewritten.push(false);
            Event::Start(tag)
        }
        Event::End(TagEnd::Link) => {
            if rewritten.pop().unwrap_or(false) {
                Event::InlineHtml(CowStr::Borrowed("</a>"))
            } else {
                Event::End(TagEnd::Link)
            }
        }
        other => other,
    })
}

fn link_open_tag(href: &str, title: &str) -> String {
    let mut tag = format!(r#"<a href="{}""#, escape_html(href));
    if !title.is_empty() {
        tag.push_str(&format!(r#" title="{}""#, escape_html(title)));
    }
    tag.push_str(r#" target="_blank">"#);
    tag
}
