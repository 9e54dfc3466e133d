use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::domain::{BusinessProfile, NO_DESCRIPTION, UNKNOWN_BUSINESS};

// Both patterns are deliberately permissive: the email pattern accepts any
// localpart@domain.tld-shaped token, and the phone pattern matches any run of
// 9+ digit-bearing characters (so dates and order ids can slip through).
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\s\-]{7,}\d").unwrap());

/// Never fails: malformed markup degrades to sentinel values and empty
/// contact sets, not an error.
pub fn extract_profile(html: &str, fetch_duration: f64) -> BusinessProfile {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse("title").unwrap();
    let description_selector = Selector::parse(r#"meta[name="description"]"#).unwrap();

    let name = document
        .select(&title_selector)
        .next()
        .map(|title| title.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNKNOWN_BUSINESS.to_string());

    let description = document
        .select(&description_selector)
        .next()
        .and_then(|meta| meta.value().attr("content"))
        .filter(|content| !content.is_empty())
        .map(|content| content.to_string())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    // Contact signals come from the flattened text nodes only, never from
    // attributes or markup.
    let text = document.root_element().text().collect::<Vec<_>>().join(" ");

    let emails: BTreeSet<String> = EMAIL_RE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();
    let phones: BTreeSet<String> = PHONE_RE
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect();

    BusinessProfile {
        name,
        description,
        emails,
        phones,
        scrape_time: (fetch_duration * 100.0).round() / 100.0,
    }
}
