//! Contact field extraction. Each field is searched independently; a bad match
//! in one field never affects another.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::extraction::models::ContactInfo;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

/// Tried in order; the first pattern with any match wins.
static PHONE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\+91\s?\d{10}",
        r"\(\d{3}\)\s?\d{3}-\d{4}",
        r"\+?\d{0,2}\s?\d{3}[-.\s]\d{3}[-.\s]\d{4}",
        r"\d{10}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/([\w-]+)").unwrap());

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/([\w-]+)").unwrap());

static WEBSITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://)?([\w.-]+\.[a-zA-Z]{2,})").unwrap());

/// Profile hosts already reported through their own fields.
const PROFILE_HOSTS: &[&str] = &["linkedin.com", "github.com"];

pub fn extract_contact_info(text: &str) -> ContactInfo {
    let contact = ContactInfo {
        email: EMAIL_RE.find(text).map(|m| m.as_str().to_string()),
        phone: find_phone(text),
        linkedin: capture_first(&LINKEDIN_RE, text),
        github: capture_first(&GITHUB_RE, text),
        website: find_website(text),
    };
    debug!(found = contact.found_count(), "extracted contact info");
    contact
}

fn find_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
}

fn capture_first(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First domain-shaped token that is neither part of an e-mail address nor a
/// LinkedIn/GitHub profile link.
fn find_website(text: &str) -> Option<String> {
    WEBSITE_RE.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let domain = caps.get(2)?;
        let before = text[..whole.start()].chars().next_back();
        let after = text[whole.end()..].chars().next();
        if before == Some('@') || after == Some('@') {
            return None;
        }
        let host = domain.as_str().to_lowercase();
        if PROFILE_HOSTS.iter().any(|h| host.ends_with(h)) {
            return None;
        }
        Some(domain.as_str().to_string())
    })
}
