use scraper::{Html, Selector};

/// Read-only query view over a fetched HTML document.
///
/// Parsing is lenient: malformed markup never fails, it just yields fewer
/// recognizable nodes. Every getter trims the extracted value and maps an
/// empty result to `None`, so downstream fields are never empty strings.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// `content` attribute of `<meta {attr}="{value}">`.
    pub fn meta_content(&self, attr: &str, value: &str) -> Option<String> {
        let selector = Selector::parse(&format!("meta[{attr}=\"{value}\"]")).ok()?;
        self.html
            .select(&selector)
            .find_map(|el| el.value().attr("content"))
            .and_then(non_empty)
    }

    /// `href` attribute of `<link rel="{rel}">`.
    pub fn link_href(&self, rel: &str) -> Option<String> {
        let selector = Selector::parse(&format!("link[rel=\"{rel}\"]")).ok()?;
        self.html
            .select(&selector)
            .find_map(|el| el.value().attr("href"))
            .and_then(non_empty)
    }

    /// Text content of the `<title>` element.
    pub fn title_text(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let element = self.html.select(&selector).next()?;
        non_empty(&element.text().collect::<String>())
    }

    /// `charset` attribute of any element carrying one (typically `<meta charset>`).
    pub fn charset(&self) -> Option<String> {
        let selector = Selector::parse("[charset]").ok()?;
        self.html
            .select(&selector)
            .find_map(|el| el.value().attr("charset"))
            .and_then(non_empty)
    }

    /// `lang` attribute of the root `<html>` element.
    pub fn html_lang(&self) -> Option<String> {
        non_empty(self.html.root_element().value().attr("lang")?)
    }

    /// All `<link rel="alternate">` elements that carry both `hreflang` and
    /// `href`, in document order.
    pub fn alternate_links(&self) -> Vec<(String, String)> {
        let Ok(selector) = Selector::parse("link[rel=\"alternate\"]") else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .filter_map(|el| {
                let hreflang = non_empty(el.value().attr("hreflang")?)?;
                let href = non_empty(el.value().attr("href")?)?;
                Some((hreflang, href))
            })
            .collect()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
