use crate::document::ParsedDocument;
use crate::model::PageMetadata;

/// Output fields that are read straight from the markup. Alias fields
/// (WhatsApp, LinkedIn, Discord, ...) are derived afterwards and do not
/// appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Title,
    Description,
    Keywords,
    Author,
    Generator,
    ThemeColor,
    OgTitle,
    OgDescription,
    OgImage,
    OgImageWidth,
    OgImageHeight,
    OgImageAlt,
    OgUrl,
    OgType,
    OgSiteName,
    OgLocale,
    OgVideo,
    OgAudio,
    FbAppId,
    FbPages,
    FbDomainVerification,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
    TwitterImageAlt,
    TwitterSite,
    TwitterCreator,
    TwitterDomainVerification,
    PinterestDomainVerification,
    CanonicalUrl,
    Robots,
    Viewport,
    Charset,
    Language,
    Favicon,
    AppleTouchIcon,
    Manifest,
    ArticlePublishedTime,
    ArticleModifiedTime,
    ArticleAuthor,
    ArticleSection,
    ArticleTags,
    PrevPage,
    NextPage,
    Rating,
    Referrer,
}

/// How a field's value is located in the document.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Lookup {
    /// `<meta name="...">` content attribute
    MetaName(&'static str),
    /// `<meta property="...">` content attribute
    MetaProperty(&'static str),
    /// `<link rel="...">` href attribute
    LinkRel(&'static str),
    /// `<link rel="...">` href, trying a second rel when the first is absent
    LinkRelOr(&'static str, &'static str),
    /// Text content of the `<title>` element
    TitleText,
    /// `charset` attribute of any element carrying one
    CharsetAttr,
    /// `lang` attribute of the root `<html>` element
    HtmlLang,
}

/// The full markup-to-field mapping, processed uniformly by the extractor.
/// Lookups are independent of each other; order here is cosmetic.
pub(crate) const RULES: &[(Field, Lookup)] = &[
    // Basic SEO
    (Field::Title, Lookup::TitleText),
    (Field::Description, Lookup::MetaName("description")),
    (Field::Keywords, Lookup::MetaName("keywords")),
    (Field::Author, Lookup::MetaName("author")),
    (Field::Generator, Lookup::MetaName("generator")),
    (Field::ThemeColor, Lookup::MetaName("theme-color")),
    // Open Graph
    (Field::OgTitle, Lookup::MetaProperty("og:title")),
    (Field::OgDescription, Lookup::MetaProperty("og:description")),
    (Field::OgImage, Lookup::MetaProperty("og:image")),
    (Field::OgImageWidth, Lookup::MetaProperty("og:image:width")),
    (Field::OgImageHeight, Lookup::MetaProperty("og:image:height")),
    (Field::OgImageAlt, Lookup::MetaProperty("og:image:alt")),
    (Field::OgUrl, Lookup::MetaProperty("og:url")),
    (Field::OgType, Lookup::MetaProperty("og:type")),
    (Field::OgSiteName, Lookup::MetaProperty("og:site_name")),
    (Field::OgLocale, Lookup::MetaProperty("og:locale")),
    (Field::OgVideo, Lookup::MetaProperty("og:video")),
    (Field::OgAudio, Lookup::MetaProperty("og:audio")),
    // Facebook
    (Field::FbAppId, Lookup::MetaProperty("fb:app_id")),
    (Field::FbPages, Lookup::MetaProperty("fb:pages")),
    (
        Field::FbDomainVerification,
        Lookup::MetaName("facebook-domain-verification"),
    ),
    // Twitter Cards
    (Field::TwitterCard, Lookup::MetaName("twitter:card")),
    (Field::TwitterTitle, Lookup::MetaName("twitter:title")),
    (
        Field::TwitterDescription,
        Lookup::MetaName("twitter:description"),
    ),
    (Field::TwitterImage, Lookup::MetaName("twitter:image")),
    (Field::TwitterImageAlt, Lookup::MetaName("twitter:image:alt")),
    (Field::TwitterSite, Lookup::MetaName("twitter:site")),
    (Field::TwitterCreator, Lookup::MetaName("twitter:creator")),
    (
        Field::TwitterDomainVerification,
        Lookup::MetaName("twitter:domain-verification"),
    ),
    // Pinterest
    (
        Field::PinterestDomainVerification,
        Lookup::MetaName("p:domain_verify"),
    ),
    // Technical
    (Field::CanonicalUrl, Lookup::LinkRel("canonical")),
    (Field::Robots, Lookup::MetaName("robots")),
    (Field::Viewport, Lookup::MetaName("viewport")),
    (Field::Charset, Lookup::CharsetAttr),
    (Field::Language, Lookup::HtmlLang),
    (Field::Favicon, Lookup::LinkRelOr("icon", "shortcut icon")),
    (Field::AppleTouchIcon, Lookup::LinkRel("apple-touch-icon")),
    (Field::Manifest, Lookup::LinkRel("manifest")),
    // Article
    (
        Field::ArticlePublishedTime,
        Lookup::MetaProperty("article:published_time"),
    ),
    (
        Field::ArticleModifiedTime,
        Lookup::MetaProperty("article:modified_time"),
    ),
    (Field::ArticleAuthor, Lookup::MetaProperty("article:author")),
    (Field::ArticleSection, Lookup::MetaProperty("article:section")),
    (Field::ArticleTags, Lookup::MetaProperty("article:tag")),
    // Additional SEO
    (Field::PrevPage, Lookup::LinkRel("prev")),
    (Field::NextPage, Lookup::LinkRel("next")),
    (Field::Rating, Lookup::MetaName("rating")),
    (Field::Referrer, Lookup::MetaName("referrer")),
];

impl Lookup {
    pub(crate) fn resolve(&self, doc: &ParsedDocument) -> Option<String> {
        match self {
            Lookup::MetaName(name) => doc.meta_content("name", name),
            Lookup::MetaProperty(property) => doc.meta_content("property", property),
            Lookup::LinkRel(rel) => doc.link_href(rel),
            Lookup::LinkRelOr(rel, fallback) => {
                doc.link_href(rel).or_else(|| doc.link_href(fallback))
            }
            Lookup::TitleText => doc.title_text(),
            Lookup::CharsetAttr => doc.charset(),
            Lookup::HtmlLang => doc.html_lang(),
        }
    }
}

pub(crate) fn assign(out: &mut PageMetadata, field: Field, value: String) {
    let slot = match field {
        Field::Title => &mut out.title,
        Field::Description => &mut out.description,
        Field::Keywords => &mut out.keywords,
        Field::Author => &mut out.author,
        Field::Generator => &mut out.generator,
        Field::ThemeColor => &mut out.theme_color,
        Field::OgTitle => &mut out.og_title,
        Field::OgDescription => &mut out.og_description,
        Field::OgImage => &mut out.og_image,
        Field::OgImageWidth => &mut out.og_image_width,
        Field::OgImageHeight => &mut out.og_image_height,
        Field::OgImageAlt => &mut out.og_image_alt,
        Field::OgUrl => &mut out.og_url,
        Field::OgType => &mut out.og_type,
        Field::OgSiteName => &mut out.og_site_name,
        Field::OgLocale => &mut out.og_locale,
        Field::OgVideo => &mut out.og_video,
        Field::OgAudio => &mut out.og_audio,
        Field::FbAppId => &mut out.fb_app_id,
        Field::FbPages => &mut out.fb_pages,
        Field::FbDomainVerification => &mut out.fb_domain_verification,
        Field::TwitterCard => &mut out.twitter_card,
        Field::TwitterTitle => &mut out.twitter_title,
        Field::TwitterDescription => &mut out.twitter_description,
        Field::TwitterImage => &mut out.twitter_image,
        Field::TwitterImageAlt => &mut out.twitter_image_alt,
        Field::TwitterSite => &mut out.twitter_site,
        Field::TwitterCreator => &mut out.twitter_creator,
        Field::TwitterDomainVerification => &mut out.twitter_domain_verification,
        Field::PinterestDomainVerification => &mut out.pinterest_domain_verification,
        Field::CanonicalUrl => &mut out.canonical_url,
        Field::Robots => &mut out.robots,
        Field::Viewport => &mut out.viewport,
        Field::Charset => &mut out.charset,
        Field::Language => &mut out.language,
        Field::Favicon => &mut out.favicon,
        Field::AppleTouchIcon => &mut out.apple_touch_icon,
        Field::Manifest => &mut out.manifest,
        Field::ArticlePublishedTime => &mut out.article_published_time,
        Field::ArticleModifiedTime => &mut out.article_modified_time,
        Field::ArticleAuthor => &mut out.article_author,
        Field::ArticleSection => &mut out.article_section,
        Field::ArticleTags => &mut out.article_tags,
        Field::PrevPage => &mut out.prev_page,
        Field::NextPage => &mut out.next_page,
        Field::Rating => &mut out.rating,
        Field::Referrer => &mut out.referrer,
    };
    *slot = Some(value);
}
