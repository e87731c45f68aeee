//! schema.org structured data (JSON-LD).

use serde::{Deserialize, Serialize};

use crate::constants::{DATE_MODIFIED, DATE_PUBLISHED, SITE_NAME, SOCIAL_IMAGE_PATH, SOFTWARE_VERSION};
use crate::i18n::{lookup, Language};
use crate::seo::{canonical_url, PageKind};

const CONTEXT: &str = "https://schema.org";
const FAQ_COUNT: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl Organization {
    fn named(url: Option<String>, logo: Option<ImageObject>) -> Self {
        Self {
            kind: "Organization".to_string(),
            name: SITE_NAME.to_string(),
            url,
            logo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub price: String,
    #[serde(rename = "priceCurrency")]
    pub price_currency: String,
}

impl Offer {
    fn free() -> Self {
        Self {
            kind: "Offer".to_string(),
            price: "0".to_string(),
            price_currency: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableLanguage {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(rename = "alternateName")]
    pub alternate_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "inLanguage")]
    pub in_language: Vec<String>,
    pub publisher: Organization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebAppSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub application_category: String,
    pub operating_system: String,
    pub offers: Offer,
    pub author: Organization,
    pub publisher: Organization,
    pub browser_requirements: String,
    pub date_published: String,
    pub date_modified: String,
    pub in_language: String,
    pub available_language: Vec<AvailableLanguage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub application_category: String,
    pub application_sub_category: String,
    pub operating_system: String,
    pub offers: Offer,
    pub feature_list: Vec<String>,
    pub author: Organization,
    pub publisher: Organization,
    pub software_version: String,
    pub date_published: String,
    pub date_modified: String,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: String,
    pub position: usize,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    WebSite(WebSiteSchema),
    WebApp(Box<WebAppSchema>),
    Software(Box<SoftwareSchema>),
    Breadcrumb(BreadcrumbSchema),
    Faq(FaqSchema),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crumb {
    pub name: String,
    pub url: String,
}

/// The FAQ shown on the home page; the structured data uses the same entries.
pub fn faq_entries(language: Language) -> Vec<FaqItem> {
    (1..=FAQ_COUNT)
        .map(|n| FaqItem {
            question: lookup(&format!("faq{}Question", n), language).to_string(),
            answer: lookup(&format!("faq{}Answer", n), language).to_string(),
        })
        .collect()
}

pub fn web_site_schema(base_url: &str) -> WebSiteSchema {
    WebSiteSchema {
        context: CONTEXT.to_string(),
        kind: "WebSite".to_string(),
        name: SITE_NAME.to_string(),
        url: canonical_url(base_url, Language::En, PageKind::Home),
        description: "Interactive decision-making tool that helps you make quick yes or no choices through a spinning wheel interface.".to_string(),
        in_language: Language::ALL.iter().map(|lang| lang.code().to_string()).collect(),
        publisher: Organization::named(None, None),
    }
}

pub fn web_app_schema(base_url: &str, language: Language) -> WebAppSchema {
    let root = canonical_url(base_url, Language::En, PageKind::Home);
    WebAppSchema {
        context: CONTEXT.to_string(),
        kind: "WebApplication".to_string(),
        name: lookup("metaHomeTitle", language).to_string(),
        description: lookup("metaHomeDescription", language).to_string(),
        url: canonical_url(base_url, language, PageKind::Home),
        application_category: "UtilityApplication".to_string(),
        operating_system: "All".to_string(),
        offers: Offer::free(),
        author: Organization::named(Some(root.clone()), None),
        publisher: Organization::named(
            None,
            Some(ImageObject {
                kind: "ImageObject".to_string(),
                url: format!("{}{}", root, SOCIAL_IMAGE_PATH),
            }),
        ),
        browser_requirements: "Requires JavaScript. Requires HTML5.".to_string(),
        date_published: DATE_PUBLISHED.to_string(),
        date_modified: DATE_MODIFIED.to_string(),
        in_language: language.code().to_string(),
        available_language: Language::ALL
            .iter()
            .map(|lang| AvailableLanguage {
                kind: "Language".to_string(),
                name: lang.native_name().to_string(),
                alternate_name: lang.code().to_string(),
            })
            .collect(),
    }
}

pub fn software_schema(base_url: &str) -> SoftwareSchema {
    SoftwareSchema {
        context: CONTEXT.to_string(),
        kind: "SoftwareApplication".to_string(),
        name: SITE_NAME.to_string(),
        description: "A web-based decision-making tool that generates random Yes or No answers through an interactive wheel spinner.".to_string(),
        url: canonical_url(base_url, Language::En, PageKind::Home),
        application_category: "Utility".to_string(),
        application_sub_category: "Decision Support Tool".to_string(),
        operating_system: "Web-based".to_string(),
        offers: Offer::free(),
        feature_list: [
            "Interactive decision wheel",
            "Random yes/no generator",
            "Multiple language support",
            "Dark/light theme toggle",
            "Instant decision making",
            "No registration required",
        ]
        .iter()
        .map(|feature| feature.to_string())
        .collect(),
        author: Organization::named(None, None),
        publisher: Organization::named(None, None),
        software_version: SOFTWARE_VERSION.to_string(),
        date_published: DATE_PUBLISHED.to_string(),
        date_modified: DATE_MODIFIED.to_string(),
        keywords: "decision maker, wheel spinner, yes no generator, random choice, decision tool, spinning wheel".to_string(),
    }
}

pub fn breadcrumb_schema(crumbs: &[Crumb]) -> BreadcrumbSchema {
    BreadcrumbSchema {
        context: CONTEXT.to_string(),
        kind: "BreadcrumbList".to_string(),
        item_list_element: crumbs
            .iter()
            .enumerate()
            .map(|(index, crumb)| ListItem {
                kind: "ListItem".to_string(),
                position: index + 1,
                name: crumb.name.clone(),
                item: crumb.url.clone(),
            })
            .collect(),
    }
}

pub fn faq_schema(faqs: &[FaqItem]) -> FaqSchema {
    FaqSchema {
        context: CONTEXT.to_string(),
        kind: "FAQPage".to_string(),
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question".to_string(),
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer".to_string(),
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    }
}

/// Site-wide schemas plus the page-specific one: the FAQ on the home page,
/// a breadcrumb trail everywhere else.
pub fn complete_schema_set(base_url: &str, language: Language, page: PageKind) -> Vec<Schema> {
    let mut schemas = vec![
        Schema::WebSite(web_site_schema(base_url)),
        Schema::WebApp(Box::new(web_app_schema(base_url, language))),
        Schema::Software(Box::new(software_schema(base_url))),
    ];

    match page {
        PageKind::Home => schemas.push(Schema::Faq(faq_schema(&faq_entries(language)))),
        _ => {
            let crumbs = [
                Crumb {
                    name: lookup("heroTitle", language).to_string(),
                    url: canonical_url(base_url, language, PageKind::Home),
                },
                Crumb {
                    name: lookup(page.label_key(), language).to_string(),
                    url: canonical_url(base_url, language, page),
                },
            ];
            schemas.push(Schema::Breadcrumb(breadcrumb_schema(&crumbs)));
        }
    }

    schemas
}

pub fn schema_set_json(base_url: &str, language: Language, page: PageKind) -> Result<String, serde_json::Error> {
    serde_json::to_string(&complete_schema_set(base_url, language, page))
}
