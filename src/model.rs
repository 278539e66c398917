use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything the inspector found for one page.
///
/// Field names serialize in camelCase so the record matches what API
/// consumers expect. Every optional field is either a non-empty string or
/// absent; absent fields are omitted from the serialized output entirely.
/// The grouping below is documentation only, the record itself is flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageMetadata {
    // Basic SEO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,

    // Open Graph
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_audio: Option<String>,

    // Facebook
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fb_domain_verification: Option<String>,

    // Twitter Cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_domain_verification: Option<String>,

    // WhatsApp (aliased from Open Graph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_image: Option<String>,

    // LinkedIn (aliased from Open Graph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_author: Option<String>,

    // Pinterest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinterest_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinterest_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinterest_domain_verification: Option<String>,

    // Discord (aliased from Open Graph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_type: Option<String>,

    // Slack (aliased from Open Graph)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack_type: Option<String>,

    // Technical
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apple_touch_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,

    // Article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_tags: Option<String>,

    // Additional SEO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_urls: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,

    // Site resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap_url: Option<String>,
    pub sitemap_exists: bool,
    pub robots_txt_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub robots_txt_content: Option<String>,
}
