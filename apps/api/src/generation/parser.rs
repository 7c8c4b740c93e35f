//! Structured-text parser: turns the model's plain-text reply into `GeneratedContent`.
//!
//! The reply format is requested by the prompt but not machine-enforced, so this
//! parser is total: every input yields a complete record. Fields start out empty
//! and are filled only when their section is found.
//!
//! Sections, in order: `Headline:`, `Caption:`, `CTA:`, `Hashtags:`, `IMAGE PROMPT`.
//! Markers match case-insensitively. A section runs until the first later marker
//! that starts a line, or to the end of the text.
//!
//! Known gap: marker words inside a field's own text are not escaped. A caption
//! line beginning with "Hashtags:" ends the caption early, and a section opens
//! at the first occurrence of its marker anywhere in the text.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::content::GeneratedContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Headline,
    Caption,
    Cta,
    Hashtags,
    ImagePrompt,
}

const SECTIONS: [Section; 5] = [
    Section::Headline,
    Section::Caption,
    Section::Cta,
    Section::Hashtags,
    Section::ImagePrompt,
];

impl Section {
    /// Regex fragment for the marker that opens this section.
    fn marker(self) -> &'static str {
        match self {
            Section::Headline => "Headline:",
            Section::Caption => "Caption:",
            Section::Cta => "CTA:",
            Section::Hashtags => "Hashtags:",
            Section::ImagePrompt => "IMAGE PROMPT:?",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Section::Headline => "headline",
            Section::Caption => "caption",
            Section::Cta => "cta",
            Section::Hashtags => "hashtags",
            Section::ImagePrompt => "design_prompt",
        }
    }
}

/// Upper-cased keywords that mark a line as a section header in the fallback scan.
const HEADER_KEYWORDS: &[&str] = &[
    "POST TEXT",
    "HEADLINE:",
    "CAPTION:",
    "CTA:",
    "HASHTAGS:",
    "IMAGE PROMPT",
];

/// Compiled start and end patterns for one section.
struct SectionPattern {
    section: Section,
    start: Regex,
    /// None for the last section, which always runs to the end of the text.
    end: Option<Regex>,
}

fn section_patterns() -> &'static [SectionPattern] {
    static PATTERNS: OnceLock<Vec<SectionPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SECTIONS
            .iter()
            .enumerate()
            .map(|(i, &section)| {
                let later: Vec<&str> = SECTIONS[i + 1..].iter().map(|s| s.marker()).collect();
                SectionPattern {
                    section,
                    start: Regex::new(&format!(r"(?i){}", section.marker()))
                        .expect("valid section marker"),
                    end: (!later.is_empty()).then(|| {
                        Regex::new(&format!(r"(?i)\n[ \t]*(?:{})", later.join("|")))
                            .expect("valid section terminator")
                    }),
                }
            })
            .collect()
    })
}

fn tag_separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[\s,]+").expect("valid tag separator"))
}

/// Parses a raw model reply. Never fails; missing sections stay empty.
pub fn parse_structured_text(raw: &str) -> GeneratedContent {
    let mut result = GeneratedContent::default();
    let content = raw.trim();

    debug!("Parsing structured text: {} chars", content.len());

    for pattern in section_patterns() {
        let Some(value) = extract_section(content, pattern) else {
            debug!("Section {} not found", pattern.section.name());
            continue;
        };

        match pattern.section {
            Section::Headline => result.headline = collapse_whitespace(value),
            Section::Caption => result.caption = collapse_whitespace(value),
            Section::Cta => result.cta = collapse_whitespace(value),
            Section::Hashtags => result.hashtags = split_hashtags(value),
            Section::ImagePrompt => result.design_prompt = collapse_whitespace(value),
        }
        debug!("Parsed {}: {:?}", pattern.section.name(), value.trim());
    }

    if result.headline.is_empty() && result.caption.is_empty() && result.design_prompt.is_empty()
    {
        warn!("No section markers matched in model reply; falling back to line heuristic");
        apply_line_fallback(content, &mut result);
    }

    result
}

/// Returns the raw text between a section's marker and the next later marker.
fn extract_section<'a>(content: &'a str, pattern: &SectionPattern) -> Option<&'a str> {
    let start = pattern.start.find(content)?.end();
    let rest = &content[start..];
    let end = pattern
        .end
        .as_ref()
        .and_then(|re| re.find(rest))
        .map(|m| m.start())
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits on whitespace and commas, stripping one leading `#` per tag.
fn split_hashtags(value: &str) -> Vec<String> {
    tag_separator()
        .split(value)
        .map(|token| token.strip_prefix('#').unwrap_or(token))
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// First two non-header lines become headline and caption.
fn apply_line_fallback(content: &str, result: &mut GeneratedContent) {
    let mut candidates = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let upper = line.to_uppercase();
            !HEADER_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
        });

    if let Some(line) = candidates.next() {
        result.headline = line.to_string();
    }
    if let Some(line) = candidates.next() {
        result.caption = line.to_string();
    }
}
