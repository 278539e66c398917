//! Maps a parsed document onto the flat metadata record.
//!
//! The mapping itself lives in [`fields`] as a table of (field, lookup)
//! pairs; this module runs the table, derives the social-preview alias
//! fields, and collects the alternate-language links.

use std::collections::BTreeMap;

use log::debug;

use crate::document::ParsedDocument;
use crate::model::PageMetadata;

mod fields;

use fields::{assign, RULES};

/// Extract every markup-derived field. Site-resource fields (robots.txt,
/// sitemap) are filled in later by the prober.
pub(crate) fn extract_markup(doc: &ParsedDocument) -> PageMetadata {
    let mut out = PageMetadata::default();

    let mut found = 0usize;
    for (field, lookup) in RULES {
        if let Some(value) = lookup.resolve(doc) {
            assign(&mut out, *field, value);
            found += 1;
        }
    }
    debug!("extracted {found} of {} markup fields", RULES.len());

    apply_aliases(&mut out);
    out.alternate_urls = collect_alternate_urls(doc);
    out
}

/// Social platforms without their own meta vocabulary render previews from
/// Open Graph data. The derived values are duplicated into the record here
/// so consumers never re-implement the fallback chain.
fn apply_aliases(out: &mut PageMetadata) {
    let title = out.og_title.clone().or_else(|| out.title.clone());
    let description = out
        .og_description
        .clone()
        .or_else(|| out.description.clone());
    let image = out.og_image.clone();

    out.whatsapp_title = title.clone();
    out.whatsapp_description = description.clone();
    out.whatsapp_image = image.clone();

    out.linkedin_title = title.clone();
    out.linkedin_description = description.clone();
    out.linkedin_image = image.clone();
    out.linkedin_author = out.article_author.clone();

    out.pinterest_description = description.clone();
    out.pinterest_image = image.clone();

    out.discord_title = title.clone();
    out.discord_description = description.clone();
    out.discord_image = image.clone();
    out.discord_type = out.og_type.clone();

    out.slack_title = title;
    out.slack_description = description;
    out.slack_image = image;
    out.slack_type = out.og_type.clone();
}

/// `hreflang` → `href` for every alternate link carrying both attributes.
/// Duplicated `hreflang` values keep the first occurrence. An empty map is
/// reported as absent, not as `{}`.
fn collect_alternate_urls(doc: &ParsedDocument) -> Option<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for (hreflang, href) in doc.alternate_links() {
        map.entry(hreflang).or_insert(href);
    }
    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> PageMetadata {
        extract_markup(&ParsedDocument::parse(html))
    }

    #[test]
    fn basic_and_open_graph_fields() {
        let record = extract(
            r#"<html lang="en"><head>
                <meta charset="utf-8">
                <title>Example</title>
                <meta name="description" content="Demo">
                <meta name="keywords" content="a, b">
                <meta property="og:title" content="OG Example">
                <meta property="og:image" content="https://example.com/og.png">
                <meta property="og:image:width" content="1200">
            </head></html>"#,
        );

        assert_eq!(record.title.as_deref(), Some("Example"));
        assert_eq!(record.description.as_deref(), Some("Demo"));
        assert_eq!(record.keywords.as_deref(), Some("a, b"));
        assert_eq!(record.og_title.as_deref(), Some("OG Example"));
        assert_eq!(record.og_image_width.as_deref(), Some("1200"));
        assert_eq!(record.charset.as_deref(), Some("utf-8"));
        assert_eq!(record.language.as_deref(), Some("en"));
        assert!(record.twitter_card.is_none());
    }

    #[test]
    fn alias_fields_prefer_open_graph() {
        let record = extract(
            r#"<html><head>
                <title>Example</title>
                <meta name="description" content="Demo">
                <meta property="og:title" content="OG Example">
                <meta property="og:description" content="OG Demo">
                <meta property="og:image" content="https://example.com/og.png">
                <meta property="og:type" content="article">
            </head></html>"#,
        );

        assert_eq!(record.whatsapp_title, record.og_title);
        assert_eq!(record.linkedin_description, record.og_description);
        assert_eq!(record.pinterest_image, record.og_image);
        assert_eq!(record.discord_type.as_deref(), Some("article"));
        assert_eq!(record.slack_title.as_deref(), Some("OG Example"));
    }

    #[test]
    fn alias_fields_fall_back_to_basic_fields() {
        let record = extract(
            r#"<html><head>
                <title>Example</title>
                <meta name="description" content="Demo">
            </head></html>"#,
        );

        assert_eq!(record.whatsapp_title.as_deref(), Some("Example"));
        assert_eq!(record.whatsapp_description.as_deref(), Some("Demo"));
        // og:image has no fallback
        assert!(record.whatsapp_image.is_none());
        assert!(record.discord_type.is_none());
    }

    #[test]
    fn linkedin_author_comes_from_article_author() {
        let record = extract(
            r#"<html><head>
                <meta property="article:author" content="Jane Doe">
            </head></html>"#,
        );
        assert_eq!(record.linkedin_author.as_deref(), Some("Jane Doe"));
        assert_eq!(record.article_author.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn favicon_falls_back_to_shortcut_icon() {
        let record = extract(
            r#"<html><head>
                <link rel="shortcut icon" href="/old-favicon.ico">
            </head></html>"#,
        );
        assert_eq!(record.favicon.as_deref(), Some("/old-favicon.ico"));

        let record = extract(
            r#"<html><head>
                <link rel="icon" href="/favicon.svg">
                <link rel="shortcut icon" href="/old-favicon.ico">
            </head></html>"#,
        );
        assert_eq!(record.favicon.as_deref(), Some("/favicon.svg"));
    }

    #[test]
    fn alternate_urls_first_occurrence_wins() {
        let record = extract(
            r#"<html><head>
                <link rel="alternate" hreflang="en" href="https://example.com/en">
                <link rel="alternate" hreflang="en" href="https://example.com/en-dup">
                <link rel="alternate" hreflang="de" href="https://example.com/de">
                <link rel="alternate" hreflang="fr">
            </head></html>"#,
        );

        let alternates = record.alternate_urls.expect("map should be present");
        assert_eq!(alternates.len(), 2);
        assert_eq!(alternates["en"], "https://example.com/en");
        assert_eq!(alternates["de"], "https://example.com/de");
    }

    #[test]
    fn no_alternates_means_absent_not_empty() {
        let record = extract("<html><head><title>Example</title></head></html>");
        assert!(record.alternate_urls.is_none());
    }

    #[test]
    fn pagination_and_verification_tags() {
        let record = extract(
            r#"<html><head>
                <link rel="prev" href="/page/1">
                <link rel="next" href="/page/3">
                <meta name="p:domain_verify" content="pin123">
                <meta name="facebook-domain-verification" content="fb456">
                <meta property="fb:app_id" content="789">
            </head></html>"#,
        );

        assert_eq!(record.prev_page.as_deref(), Some("/page/1"));
        assert_eq!(record.next_page.as_deref(), Some("/page/3"));
        assert_eq!(record.pinterest_domain_verification.as_deref(), Some("pin123"));
        assert_eq!(record.fb_domain_verification.as_deref(), Some("fb456"));
        assert_eq!(record.fb_app_id.as_deref(), Some("789"));
    }

    #[test]
    fn empty_document_yields_empty_record() {
        let record = extract("");
        assert_eq!(record, PageMetadata::default());
    }
}
