use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::seo::{canonical_url, escape_html, language_alternates, PageKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// `(hreflang, url)` pairs
    pub alternates: Vec<(String, String)>,
}

/// Root URL, each language's home page, then each language's static pages.
pub fn sitemap_entries(base_url: &str, last_modified: NaiveDate) -> Vec<SitemapEntry> {
    let base = base_url.trim_end_matches('/');
    let mut entries = vec![SitemapEntry {
        url: base.to_string(),
        last_modified,
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
        alternates: language_alternates(base_url, PageKind::Home).into_iter().collect(),
    }];

    // English pages are canonical without a prefix, but the prefixed routes
    // exist too and crawlers should see every language home.
    for language in Language::ALL {
        entries.push(SitemapEntry {
            url: format!("{}/{}", base, language.code()),
            last_modified,
            change_frequency: ChangeFrequency::Weekly,
            priority: 1.0,
            alternates: Vec::new(),
        });
    }

    for page in [PageKind::About, PageKind::Contact, PageKind::Privacy] {
        let alternates: Vec<(String, String)> = language_alternates(base_url, page).into_iter().collect();
        for language in Language::ALL {
            entries.push(SitemapEntry {
                url: canonical_url(base_url, language, page),
                last_modified,
                change_frequency: ChangeFrequency::Monthly,
                priority: 0.5,
                alternates: alternates.clone(),
            });
        }
    }

    entries
}

pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_html(&entry.url)));
        xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.last_modified.format("%Y-%m-%d")));
        xml.push_str(&format!("    <changefreq>{}</changefreq>\n", entry.change_frequency.as_str()));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        for (hreflang, href) in &entry.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                escape_html(hreflang),
                escape_html(href)
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 26).unwrap()
    }

    #[test]
    fn test_entries_cover_root_languages_and_pages() {
        let entries = sitemap_entries("https://yesornowheel.com/", date());
        assert_eq!(entries.len(), 1 + 4 + 3 * 4);
        assert_eq!(entries[0].url, "https://yesornowheel.com");
        assert_eq!(entries[0].priority, 1.0);

        let languages: Vec<&str> = entries[1..5].iter().map(|e| e.url.as_str()).collect();
        assert_eq!(
            languages,
            vec![
                "https://yesornowheel.com/en",
                "https://yesornowheel.com/ru",
                "https://yesornowheel.com/ja",
                "https://yesornowheel.com/es",
            ]
        );
        assert!(entries
            .iter()
            .any(|e| e.url == "https://yesornowheel.com/ja/privacy" && e.change_frequency == ChangeFrequency::Monthly));
    }

    #[test]
    fn test_render_xml() {
        let xml = render_sitemap_xml(&sitemap_entries("https://yesornowheel.com", date()));
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://yesornowheel.com/es</loc>"));
        assert!(xml.contains("<lastmod>2025-11-26</lastmod>"));
        assert!(xml.contains("<priority>0.5</priority>"));
        assert!(xml.contains(r#"hreflang="x-default" href="https://yesornowheel.com/about""#));
        assert_eq!(xml.matches("<url>").count(), 17);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_robots_points_at_sitemap() {
        let robots = robots_txt("https://yesornowheel.com/");
        assert!(robots.contains("Allow: /"));
        assert!(robots.ends_with("Sitemap: https://yesornowheel.com/sitemap.xml\n"));
    }
}
