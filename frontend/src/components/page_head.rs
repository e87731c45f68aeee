use shared::i18n::Language;
use shared::schema::schema_set_json;
use shared::seo::{PageKind, SeoMetadata};
use web_sys::{window, Document, Element};
use yew::prelude::*;

use crate::config::site_url;

const JSON_LD_ID: &str = "json-ld-schema";

/// Finds `selector` in `<head>` or creates `tag` there.
fn head_element(document: &Document, selector: &str, tag: &str) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let head = document.head()?;
    let element = document.create_element(tag).ok()?;
    head.append_child(&element).ok()?;
    Some(element)
}

fn apply_metadata(document: &Document, meta: &SeoMetadata) {
    document.set_title(&meta.title);

    if let Some(description) = head_element(document, "meta[name='description']", "meta") {
        let _ = description.set_attribute("name", "description");
        let _ = description.set_attribute("content", &meta.description);
    }
    if let Some(keywords) = head_element(document, "meta[name='keywords']", "meta") {
        let _ = keywords.set_attribute("name", "keywords");
        let _ = keywords.set_attribute("content", &meta.keywords.join(", "));
    }
    if let Some(canonical) = head_element(document, "link[rel='canonical']", "link") {
        let _ = canonical.set_attribute("rel", "canonical");
        let _ = canonical.set_attribute("href", &meta.canonical);
    }
    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("lang", meta.language.html_lang());
    }
}

/// Replaces any JSON-LD already on the page, including the server-injected one.
fn insert_json_ld(document: &Document, json: &str) -> Option<Element> {
    if let Some(existing) = document.get_element_by_id(JSON_LD_ID) {
        existing.remove();
    }
    let head = document.head()?;
    let script = document.create_element("script").ok()?;
    script.set_id(JSON_LD_ID);
    script.set_attribute("type", "application/ld+json").ok()?;
    script.set_text_content(Some(json));
    head.append_child(&script).ok()?;
    Some(script)
}

#[derive(Properties, PartialEq)]
pub struct PageHeadProps {
    pub language: Language,
    pub page: PageKind,
}

#[function_component(PageHead)]
pub fn page_head(props: &PageHeadProps) -> Html {
    use_effect_with((props.language, props.page), |(language, page)| {
        let base = site_url();
        let document = window().and_then(|w| w.document());
        let script = document.as_ref().and_then(|document| {
            apply_metadata(document, &SeoMetadata::build(&base, *language, *page));
            match schema_set_json(&base, *language, *page) {
                Ok(json) => insert_json_ld(document, &json),
                Err(e) => {
                    log::warn!("Failed to serialize structured data: {}", e);
                    None
                }
            }
        });
        if document.is_none() {
            log::warn!("No document, page head not updated");
        }

        move || {
            if let Some(script) = script {
                script.remove();
            }
        }
    });

    html! {}
}
