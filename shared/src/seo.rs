//! Page metadata: titles, descriptions, canonical and alternate URLs, social cards.
//!
//! Everything here is a pure function of the site URL, the language and the page,
//! so the server can inject the same tags the browser app sets after hydration.

use std::collections::BTreeMap;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{SITE_NAME, SOCIAL_IMAGE_PATH, SOCIAL_IMAGE_SIZE};
use crate::i18n::{lookup, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Home,
    About,
    Contact,
    Privacy,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [PageKind::Home, PageKind::About, PageKind::Contact, PageKind::Privacy];

    /// Path segment after the language; empty for the home page.
    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Home => "",
            PageKind::About => "about",
            PageKind::Contact => "contact",
            PageKind::Privacy => "privacy",
        }
    }

    pub fn from_slug(slug: &str) -> Option<PageKind> {
        match slug.trim_matches('/') {
            "" | "home" => Some(PageKind::Home),
            "about" => Some(PageKind::About),
            "contact" => Some(PageKind::Contact),
            "privacy" => Some(PageKind::Privacy),
            _ => None,
        }
    }

    /// Translation key of the link label pointing at this page.
    pub fn label_key(self) -> &'static str {
        match self {
            PageKind::Home => "visitHome",
            PageKind::About => "aboutUs",
            PageKind::Contact => "contact",
            PageKind::Privacy => "privacyPolicy",
        }
    }

    fn meta_keys(self) -> (&'static str, &'static str) {
        match self {
            PageKind::Home => ("metaHomeTitle", "metaHomeDescription"),
            PageKind::About => ("metaAboutTitle", "metaAboutDescription"),
            PageKind::Contact => ("metaContactTitle", "metaContactDescription"),
            PageKind::Privacy => ("metaPrivacyTitle", "metaPrivacyDescription"),
        }
    }
}

fn trim_base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

/// In-app route path: `/en`, `/ja/about`.
pub fn page_path(language: Language, page: PageKind) -> String {
    match page {
        PageKind::Home => format!("/{}", language.code()),
        _ => format!("/{}/{}", language.code(), page.slug()),
    }
}

/// English is served without a language prefix; every other language is prefixed.
pub fn canonical_url(base_url: &str, language: Language, page: PageKind) -> String {
    let base = trim_base(base_url);
    match (language, page) {
        (Language::En, PageKind::Home) => base.to_string(),
        (Language::En, _) => format!("{}/{}", base, page.slug()),
        (_, PageKind::Home) => format!("{}/{}", base, language.code()),
        _ => format!("{}/{}/{}", base, language.code(), page.slug()),
    }
}

/// hreflang alternates for one page, including `x-default`.
pub fn language_alternates(base_url: &str, page: PageKind) -> BTreeMap<String, String> {
    let mut alternates: BTreeMap<String, String> = Language::ALL
        .into_iter()
        .map(|lang| (lang.code().to_string(), canonical_url(base_url, lang, page)))
        .collect();
    alternates.insert("x-default".to_string(), canonical_url(base_url, Language::En, page));
    alternates
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraphImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OpenGraphImage>,
    pub locale: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoMetadata {
    pub language: Language,
    pub page: PageKind,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical: String,
    pub alternates: BTreeMap<String, String>,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl SeoMetadata {
    pub fn build(base_url: &str, language: Language, page: PageKind) -> Self {
        let (title_key, description_key) = page.meta_keys();
        let title = lookup(title_key, language).to_string();
        let description = meta_description(lookup(description_key, language), crate::constants::META_DESCRIPTION_MAX);
        let keywords = match page {
            PageKind::Home => lookup("metaHomeKeywords", language)
                .split(", ")
                .map(str::to_string)
                .collect(),
            _ => extract_keywords(&description, 8),
        };
        let canonical = canonical_url(base_url, language, page);
        let image_url = format!("{}{}", trim_base(base_url), SOCIAL_IMAGE_PATH);

        SeoMetadata {
            language,
            page,
            keywords,
            alternates: language_alternates(base_url, page),
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                url: canonical.clone(),
                site_name: SITE_NAME.to_string(),
                images: vec![OpenGraphImage {
                    url: image_url.clone(),
                    width: SOCIAL_IMAGE_SIZE,
                    height: SOCIAL_IMAGE_SIZE,
                    alt: title.clone(),
                }],
                locale: language.og_locale().to_string(),
                kind: "website".to_string(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: title.clone(),
                description: description.clone(),
                images: vec![image_url],
            },
            canonical,
            title,
            description,
        }
    }
}

/// Cuts `content` to at most `max_chars` characters, ending in `...` when cut.
pub fn meta_description(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let kept: String = content.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("static regex"));

/// Most frequent words longer than three characters, most frequent first.
/// Ties keep the order in which words first appear.
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    let mut order: Vec<&str> = Vec::new();
    let mut frequency: HashMap<&str, usize> = HashMap::new();
    for word in cleaned.split_whitespace().filter(|word| word.chars().count() > 3) {
        let count = frequency.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    // Stable sort keeps first-appearance order among equal counts
    order.sort_by(|a, b| frequency[b].cmp(&frequency[a]));
    order.into_iter().take(max_keywords).map(str::to_string).collect()
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// `<head>` markup for server-side injection. `json_ld` must already be JSON;
/// `</` sequences inside it are escaped so it cannot close the script tag.
pub fn head_tags(meta: &SeoMetadata, json_ld: Option<&str>) -> String {
    let mut tags = Vec::new();
    tags.push(format!("<title>{}</title>", escape_html(&meta.title)));
    tags.push(format!(r#"<meta name="description" content="{}">"#, escape_html(&meta.description)));
    tags.push(format!(r#"<meta name="keywords" content="{}">"#, escape_html(&meta.keywords.join(", "))));
    tags.push(format!(r#"<link rel="canonical" href="{}">"#, escape_html(&meta.canonical)));
    for (hreflang, href) in &meta.alternates {
        tags.push(format!(
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            escape_html(hreflang),
            escape_html(href)
        ));
    }

    let og = &meta.open_graph;
    for (property, content) in [
        ("og:title", og.title.as_str()),
        ("og:description", og.description.as_str()),
        ("og:url", og.url.as_str()),
        ("og:site_name", og.site_name.as_str()),
        ("og:locale", og.locale.as_str()),
        ("og:type", og.kind.as_str()),
    ] {
        tags.push(format!(r#"<meta property="{}" content="{}">"#, property, escape_html(content)));
    }
    for image in &og.images {
        tags.push(format!(r#"<meta property="og:image" content="{}">"#, escape_html(&image.url)));
        tags.push(format!(r#"<meta property="og:image:width" content="{}">"#, image.width));
        tags.push(format!(r#"<meta property="og:image:height" content="{}">"#, image.height));
    }

    let twitter = &meta.twitter;
    tags.push(format!(r#"<meta name="twitter:card" content="{}">"#, escape_html(&twitter.card)));
    tags.push(format!(r#"<meta name="twitter:title" content="{}">"#, escape_html(&twitter.title)));
    tags.push(format!(
        r#"<meta name="twitter:description" content="{}">"#,
        escape_html(&twitter.description)
    ));
    if let Some(image) = twitter.images.first() {
        tags.push(format!(r#"<meta name="twitter:image" content="{}">"#, escape_html(image)));
    }

    if let Some(json) = json_ld {
        tags.push(format!(
            r#"<script type="application/ld+json" id="json-ld-schema">{}</script>"#,
            json.replace("</", "<\\/")
        ));
    }

    tags.join("\n    ")
}
