//! Prompt assembly for post generation.
//!
//! The output-format section must stay in sync with the section markers the
//! parser looks for (`Headline:`, `Caption:`, `CTA:`, `Hashtags:`, `IMAGE PROMPT`).

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::generation::category::{behavior_for, yes_no};
use crate::models::content::{AgencyInstructions, BrandProfile, ContentBrief, ContentCategory};

/// Post generation prompt template.
/// Replace: {brand_name}, {industry}, {primary_service}, {target_audience},
///          {brand_tone}, {phone}, {cta_text}, {platform}, {category},
///          {topic}, {festival_block}, {category_behavior}
pub const POST_PROMPT_TEMPLATE: &str = r#"You are a senior social media strategist and creative director
working inside a professional social media marketing platform.

Your job is to generate HIGH-QUALITY, ACCURATE, READY-TO-USE
social media content for brands.

STRICT RULES (NON-NEGOTIABLE):
1. You MUST ALWAYS generate TWO THINGS:
   a) Post text content
   b) Image generation prompt

2. You must NEVER generate images.
3. You must NEVER return JSON.
4. You must NEVER explain your output.
5. You must NEVER include placeholders like XXXXX or dummy numbers.
6. Follow the brand details EXACTLY as provided.
7. Do NOT modify brand name, phone number, or CTA text.
8. Adapt tone, writing style, and visuals strictly based on Content Category.
9. Avoid spam, exaggeration, clickbait, or excessive emojis.
10. Output must be clean, professional, and ready to copy-paste.

BRAND DETAILS:
Brand Name: {brand_name}
Industry: {industry}
Primary Service: {primary_service}
Target Audience: {target_audience}
Brand Tone: {brand_tone}
Phone Number / CTA Contact: {phone}
CTA Text: {cta_text}

CONTENT DETAILS:
Platform: {platform}
Content Category: {category}
Topic / Goal: {topic}
{festival_block}
CONTENT CATEGORY BEHAVIOR (INTERNAL LOGIC):
{category_behavior}

REQUIRED OUTPUT FORMAT (STRICT - PLAIN TEXT ONLY):

Your response MUST follow this structure exactly:

POST TEXT
Headline:
<one clear, professional headline>

Caption:
<clean, well-written caption aligned with content category>

CTA:
<include CTA only if applicable>

Hashtags:
<relevant, non-spammy hashtags>


IMAGE PROMPT
Create a professional 1080x1080 social media post design with
<clear visual description>.
The style should match the brand tone and content category.
Mention colors, layout, mood, and visual elements clearly.
The design must be clean, modern, premium, and uncluttered.

REMEMBER:
- NO JSON format
- NO placeholders or dummy data
- Brand details must be EXACT
- Output must be ready to copy-paste
- Follow content category behavior strictly
"#;

/// Festival block template, only emitted for Festival / Occasion briefs.
/// Replace: {festival_name}, {festival_type}, {cta_enabled}
pub const FESTIVAL_BLOCK_TEMPLATE: &str = r#"
FESTIVAL DETAILS:
Festival Name: {festival_name}
Festival Type: {festival_type}
CTA Enabled: {cta_enabled}
"#;

/// Header of the optional agency addendum.
pub const ADDITIONAL_INSTRUCTIONS_HEADER: &str = "ADDITIONAL INSTRUCTIONS:";

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("valid placeholder regex"))
}

/// Substitutes `{key}` placeholders in a single pass.
///
/// Inserted values are never rescanned, so a brand field that itself contains
/// `{topic}` is copied through untouched. Unknown keys are left as-is.
fn fill_template(template: &str, values: &HashMap<&str, &str>) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => (*value).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Builds the full generation prompt. Pure: no I/O, inputs copied verbatim.
pub fn assemble_prompt(
    profile: &BrandProfile,
    brief: &ContentBrief,
    instructions: Option<&AgencyInstructions>,
) -> String {
    let category_behavior = behavior_for(brief.content_category, brief.cta_enabled);
    let festival_block = build_festival_block(brief);

    let values: HashMap<&str, &str> = HashMap::from([
        ("brand_name", profile.name.as_str()),
        ("industry", profile.industry.as_str()),
        ("primary_service", profile.primary_service.as_str()),
        ("target_audience", profile.target_audience.as_str()),
        ("brand_tone", profile.tone.as_str()),
        ("phone", profile.phone.as_str()),
        ("cta_text", profile.cta.as_str()),
        ("platform", brief.platform.as_str()),
        ("category", brief.content_category.label()),
        ("topic", brief.topic.as_str()),
        ("festival_block", festival_block.as_str()),
        ("category_behavior", category_behavior.as_str()),
    ]);

    let mut prompt = fill_template(POST_PROMPT_TEMPLATE, &values);

    if let Some(extra) = instructions
        .and_then(|i| i.extra_instructions.as_deref())
        .filter(|extra| !extra.is_empty())
    {
        prompt.push_str("\n\n");
        prompt.push_str(ADDITIONAL_INSTRUCTIONS_HEADER);
        prompt.push('\n');
        prompt.push_str(extra);
        prompt.push('\n');
    }

    prompt
}

/// Festival details, or an empty string for every other category.
fn build_festival_block(brief: &ContentBrief) -> String {
    if brief.content_category != ContentCategory::FestivalOccasion {
        return String::new();
    }

    let values: HashMap<&str, &str> = HashMap::from([
        ("festival_name", brief.festival_name.as_deref().unwrap_or_default()),
        ("festival_type", brief.festival_type.as_deref().unwrap_or_default()),
        ("cta_enabled", yes_no(brief.cta_enabled)),
    ]);
    fill_template(FESTIVAL_BLOCK_TEMPLATE, &values)
}
