//! Output validation against brand rules.
//!
//! Advisory only: callers log a failed result and still return the content.
//! Brand name and phone presence are not checked since many categories
//! (educational, engagement) legitimately omit them.

use serde::Serialize;
use serde_json::Value;

use crate::models::content::{BrandProfile, ContentCategory, GeneratedContent};

/// Keys every generated record must carry. `cta` may be absent.
const REQUIRED_FIELDS: &[&str] = &["headline", "caption", "hashtags", "design_prompt"];

/// Leftover template or dummy text.
const PLACEHOLDER_PATTERNS: &[&str] = &["xxxxx", "xxxx", "placeholder", "dummy", "[insert", "[add"];

/// Selling language not allowed in festival greetings.
const SALESY_WORDS: &[&str] = &["buy", "purchase", "sale", "discount", "offer", "limited time"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: String,
}

impl ValidationResult {
    fn pass() -> Self {
        Self {
            valid: true,
            reason: String::new(),
        }
    }

    fn fail(reason: String) -> Self {
        Self {
            valid: false,
            reason,
        }
    }
}

/// Validates a parsed record. See [`validate_fields`] for the rules.
pub fn validate_output(
    content: &GeneratedContent,
    profile: &BrandProfile,
    category: Option<ContentCategory>,
) -> ValidationResult {
    match serde_json::to_value(content) {
        Ok(fields) => validate_fields(&fields, profile, category),
        Err(e) => ValidationResult::fail(format!("Unserializable content: {e}")),
    }
}

/// Validates a generated record given as a JSON object.
///
/// Checks in order, stopping at the first failure:
/// 1. required keys present (presence only, empty values pass)
/// 2. no forbidden word from the profile
/// 3. no placeholder text
/// 4. festival posts carry no selling language
///
/// Checks 2-4 are case-insensitive substring scans over headline, caption and cta.
pub fn validate_fields(
    fields: &Value,
    profile: &BrandProfile,
    category: Option<ContentCategory>,
) -> ValidationResult {
    for &field in REQUIRED_FIELDS {
        if fields.get(field).is_none() {
            return ValidationResult::fail(format!("Missing field: {field}"));
        }
    }

    let text_of = |key: &str| fields.get(key).and_then(Value::as_str).unwrap_or_default();
    let full_text = format!(
        "{} {} {}",
        text_of("headline"),
        text_of("caption"),
        text_of("cta")
    )
    .to_lowercase();

    for word in &profile.forbidden_words {
        if full_text.contains(&word.to_lowercase()) {
            return ValidationResult::fail(format!("Forbidden word found: {word}"));
        }
    }

    if let Some(pattern) = PLACEHOLDER_PATTERNS
        .iter()
        .copied()
        .find(|p| full_text.contains(p))
    {
        return ValidationResult::fail(format!("Placeholder text found: {pattern}"));
    }

    if category == Some(ContentCategory::FestivalOccasion) {
        if let Some(word) = SALESY_WORDS.iter().copied().find(|w| full_text.contains(w)) {
            return ValidationResult::fail(format!(
                "Festival post contains selling language: {word}"
            ));
        }
    }

    ValidationResult::pass()
}
