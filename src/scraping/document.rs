use scraper::{Html, Selector};
use url::Url;

/// Read-only queries the scoring engine runs against a page tree.
///
/// Selectors are CSS selectors; a selector that fails to parse matches nothing.
pub trait DocumentQuery {
    /// Number of elements matching `selector`.
    fn count(&self, selector: &str) -> usize;

    /// Trimmed, non-empty attribute `name` of the first matching element that
    /// carries one.
    fn attr(&self, selector: &str, name: &str) -> Option<String>;

    /// Trimmed text content of the first element matching `selector`.
    fn text(&self, selector: &str) -> Option<String>;

    /// `href` of every anchor, in document order.
    fn link_hrefs(&self) -> Vec<String>;
}

/// `scraper`-backed adapter. html5ever never rejects input, so malformed or
/// empty markup still yields a (possibly empty) tree.
pub struct HtmlDocument {
    document: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Body text with `script`/`style`/`noscript`/`template` content removed,
    /// whitespace collapsed, original case kept.
    pub fn visible_text(&self) -> String {
        let body = Selector::parse("body")
            .ok()
            .and_then(|sel| self.document.select(&sel).next())
            .unwrap_or_else(|| self.document.root_element());

        let mut parts: Vec<&str> = Vec::new();
        for node in body.descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|a| {
                a.value().as_element().is_some_and(|e| {
                    matches!(e.name(), "script" | "style" | "noscript" | "template")
                })
            });
            if !hidden {
                parts.push(text);
            }
        }

        parts
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl DocumentQuery for HtmlDocument {
    fn count(&self, selector: &str) -> usize {
        match Selector::parse(selector) {
            Ok(sel) => self.document.select(&sel).count(),
            Err(_) => 0,
        }
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        self.document
            .select(&sel)
            .filter_map(|el| el.value().attr(name))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn text(&self, selector: &str) -> Option<String> {
        let sel = Selector::parse(selector).ok()?;
        self.document
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    }

    fn link_hrefs(&self) -> Vec<String> {
        let Ok(sel) = Selector::parse("a[href]") else {
            return Vec::new();
        };
        self.document
            .select(&sel)
            .filter_map(|e| e.value().attr("href"))
            .map(|s| s.trim().to_string())
            .collect()
    }
}

/// Immutable view over one fetched page for the duration of an analysis.
pub struct ParsedDocument {
    origin: Url,
    text: String,
    markup: String,
    visible_text: String,
    query: Box<dyn DocumentQuery>,
}

impl ParsedDocument {
    /// Builds the view from raw markup with the `scraper` adapter.
    pub fn parse(html: &str, origin: Url) -> Self {
        let adapter = HtmlDocument::parse(html);
        let visible_text = adapter.visible_text();
        Self::from_parts(origin, html, visible_text, Box::new(adapter))
    }

    /// Builds the view from an arbitrary query implementation, e.g. a
    /// hand-written fixture.
    pub fn from_parts(
        origin: Url,
        raw_markup: &str,
        visible_text: impl Into<String>,
        query: Box<dyn DocumentQuery>,
    ) -> Self {
        let visible_text = visible_text.into();
        Self {
            origin,
            text: visible_text.to_lowercase(),
            markup: raw_markup.to_lowercase(),
            visible_text,
            query,
        }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// Lowercase visible text, for case-insensitive phrase matching.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercase raw markup, for structural markers.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Original-case visible text, for sentence and word measurements.
    pub fn visible_text(&self) -> &str {
        &self.visible_text
    }

    pub fn word_count(&self) -> usize {
        self.visible_text.split_whitespace().count()
    }

    pub fn count(&self, selector: &str) -> usize {
        self.query.count(selector)
    }

    /// Sum of matches over several selectors.
    pub fn count_any(&self, selectors: &[&str]) -> usize {
        selectors.iter().map(|s| self.query.count(s)).sum()
    }

    pub fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.query.attr(selector, name).filter(|v| !v.is_empty())
    }

    pub fn title(&self) -> String {
        self.query.text("title").unwrap_or_default()
    }

    pub fn meta_description(&self) -> String {
        self.attr("meta[name=\"description\"]", "content")
            .unwrap_or_default()
    }

    /// Anchors whose resolved host differs from the origin host. A leading
    /// `www.` is ignored on both sides; relative links resolve to the origin.
    pub fn external_link_count(&self) -> usize {
        let origin_host = self.origin.host_str().map(normalize_host);
        self.query
            .link_hrefs()
            .iter()
            .filter_map(|href| self.origin.join(href).ok())
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .filter(|u| u.host_str().map(normalize_host) != origin_host)
            .count()
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    host.strip_prefix("www.").map(str::to_string).unwrap_or(host)
}
