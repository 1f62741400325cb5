//! Markdown Rendering
//!
//! Extends pulldown-cmark with:
//! - Syntax highlighting (syntect)
//! - Asset resolution: relative image paths go through the site asset base
//! - Link routing: site paths become router links, external links open in a new tab
//! - Sanitizing: raw HTML is dropped and only http(s), mailto and schemeless
//!   URLs survive, since post bodies are fetched at runtime

use std::sync::OnceLock;

use portfolio_core::{Route, SiteConfig};
use pulldown_cmark::{html::push_html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;
use tracing::warn;

const THEME_NAME: &str = "InspiredGitHub";

/// Syntax highlighter resources (lazy loaded)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn get_syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn get_theme() -> Option<&'static Theme> {
    THEME_SET.get_or_init(ThemeSet::load_defaults).themes.get(THEME_NAME)
}

/// Render markdown to HTML with all extensions enabled
pub fn render_markdown(text: &str, config: &SiteConfig) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser, config);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES
}

// State for the event transformer
enum State {
    Normal,
    InCodeBlock { lang: Option<String>, content: String },
    InImage { src: String, title: String, alt: String },
}

/// Transform parser events to handle all custom features
fn transform_events<'a>(parser: Parser<'a>, config: &SiteConfig) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;
    let mut in_external_link = false;

    for event in parser {
        match state {
            State::Normal => match event {
                // --- Code Blocks (Highlighting) ---
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(l) => l.split_whitespace().next().map(str::to_string),
                        CodeBlockKind::Indented => None,
                    };
                    state = State::InCodeBlock { lang, content: String::new() };
                }

                // --- Images: collect alt text, emit one <img> ---
                Event::Start(Tag::Image { dest_url, title, .. }) => {
                    let src = if is_safe_url(&dest_url) {
                        config.asset_url(&dest_url)
                    } else {
                        warn!(url = %dest_url, "dropping unsafe image source");
                        String::new()
                    };
                    state = State::InImage {
                        src,
                        title: title.to_string(),
                        alt: String::new(),
                    };
                }

                // --- Links ---
                Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                    if is_external_url(&dest_url) {
                        in_external_link = true;
                        events.push(Event::Html(CowStr::from(format!(
                            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                            escape_html(&dest_url)
                        ))));
                    } else {
                        let dest_url = CowStr::from(resolve_site_url(&dest_url, config));
                        events.push(Event::Start(Tag::Link { link_type, dest_url, title, id }));
                    }
                }
                Event::End(TagEnd::Link) if in_external_link => {
                    in_external_link = false;
                    events.push(Event::Html(CowStr::Borrowed("</a>")));
                }

                // --- Raw HTML is never passed through ---
                Event::Html(_) | Event::InlineHtml(_) => {}

                other => events.push(other),
            },

            State::InCodeBlock { ref lang, ref mut content } => match event {
                Event::Text(t) => content.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    let html = highlight_code(content, lang.as_deref());
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },

            State::InImage { ref src, ref title, ref mut alt } => match event {
                Event::Text(t) | Event::Code(t) => alt.push_str(&t),
                Event::End(TagEnd::Image) => {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, escape_html(title))
                    };
                    let html = format!(
                        r#"<img src="{}" alt="{}"{} loading="lazy" />"#,
                        escape_html(src),
                        escape_html(alt),
                        title_attr
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::Normal;
                }
                _ => {}
            },
        }
    }

    events
}

fn highlight_code(code: &str, lang: Option<&str>) -> String {
    let ss = get_syntax_set();
    let Some(theme) = get_theme() else {
        return plain_code_block(code, lang);
    };

    let syntax = lang
        .and_then(|l| ss.find_syntax_by_token(l))
        .unwrap_or_else(|| ss.find_syntax_plain_text());

    highlighted_html_for_string(code, ss, syntax, theme)
        .unwrap_or_else(|_| plain_code_block(code, lang))
}

fn plain_code_block(code: &str, lang: Option<&str>) -> String {
    match lang {
        Some(lang) => format!(
            r#"<pre><code class="language-{}">{}</code></pre>"#,
            escape_html(lang),
            escape_html(code)
        ),
        None => format!("<pre><code>{}</code></pre>", escape_html(code)),
    }
}

fn is_external_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// http, https, mailto, or no scheme at all (paths, relative links, anchors)
fn is_safe_url(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };
    let scheme = &url[..colon];
    // A colon after the first '/', '?' or '#' is not a scheme separator
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https" | "mailto")
}

/// Site paths that name a page become router links; other absolute paths
/// are assets. Relative links, anchors and mailto pass through; any other
/// scheme becomes an empty href.
fn resolve_site_url(url: &str, config: &SiteConfig) -> String {
    if !is_safe_url(url) {
        warn!(url, "dropping unsafe link target");
        return String::new();
    }
    if !url.starts_with('/') || url.starts_with("//") {
        return url.to_string();
    }
    match Route::parse(url) {
        Route::NotFound(_) => config.asset_url(url),
        route => route.href(config.router_mode),
    }
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
    use portfolio_core::RouterMode;

    fn render(text: &str) -> String {
        render_markdown(text, &SiteConfig::default())
    }

    #[test]
    fn test_basic_markdown() {
        let html = render("## Principles\n\nSome **bold** text.");
        assert!(html.contains("<h2>Principles</h2>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_code_block_highlighted() {
        let html = render("```rust\nfn main() {}\n```");
        assert!(html.contains("<pre"));
        assert!(html.contains("main"));
        assert!(!html.contains("```"));
    }

    #[test]
    fn test_code_is_escaped() {
        let html = plain_code_block("a < b && c", None);
        assert_eq!(html, "<pre><code>a &lt; b &amp;&amp; c</code></pre>");
    }

    #[test]
    fn test_external_link_new_tab() {
        let html = render("[site](https://example.com/a?b=1&c=2)");
        assert!(html.contains(r#"href="https://example.com/a?b=1&amp;c=2""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("site</a>"));
    }

    #[test]
    fn test_site_link_follows_router_mode() {
        let html = render("[all posts](/blog)");
        assert!(html.contains(r##"href="#/blog""##));

        let config = SiteConfig { router_mode: RouterMode::Path, ..SiteConfig::default() };
        let html = render_markdown("[all posts](/blog)", &config);
        assert!(html.contains(r#"href="/blog""#));
    }

    #[test]
    fn test_image_uses_asset_base() {
        let config = SiteConfig { asset_base: "https://cdn.test".to_string(), ..SiteConfig::default() };
        let html = render_markdown("![A *diagram*](/images/graph.png \"Graph\")", &config);
        assert!(html.contains(r#"src="https://cdn.test/images/graph.png""#));
        assert!(html.contains(r#"alt="A diagram""#));
        assert!(html.contains(r#"title="Graph""#));
    }

    #[test]
    fn test_raw_html_dropped() {
        let html = render("Intro <img src=x onerror=\"alert(1)\">\n\n<script>alert(2)</script>\n\nAfter");
        assert!(!html.contains("onerror"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("alert(2)"));
        assert!(html.contains("Intro"));
        assert!(html.contains("<p>After</p>"));
    }

    #[test]
    fn test_unsafe_link_scheme_blanked() {
        let html = render("[click](javascript:alert(3)) and [mail](mailto:jane@example.com)");
        assert!(!html.contains("javascript:"));
        assert!(html.contains(r#"<a href="">click</a>"#));
        assert!(html.contains(r#"href="mailto:jane@example.com""#));
    }

    #[test]
    fn test_unsafe_image_source_blanked() {
        let html = render("![x](JavaScript:alert(4)) ![y](data:image/png;base64,AAAA)");
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(!html.contains("data:"));
        assert!(html.contains(r#"<img src="" alt="x""#));
    }

    #[test]
    fn test_safe_url_rules() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("/blog"));
        assert!(is_safe_url("#setup"));
        assert!(is_safe_url("notes/a:b.md"));
        assert!(!is_safe_url("vbscript:msgbox"));
        assert!(!is_safe_url(" javascript:alert(1)"));
    }

    #[test]
    fn test_heading_anchor_link() {
        let html = render("## Setup {#setup}\n\n[jump](#setup)");
        assert!(html.contains(r#"<h2 id="setup">Setup</h2>"#));
        assert!(html.contains(r##"<a href="#setup">jump</a>"##));
    }

    #[test]
    fn test_tables_enabled() {
        let html = render("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }
}
