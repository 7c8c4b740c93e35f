//! Category behavior table: maps each content category to the editorial
//! guidance injected into the prompt.
//!
//! Each block encodes one intent: promotional, soft, non-promotional,
//! thought-leadership, educational, personal, social-proof, conversational.

use crate::models::content::ContentCategory;

const SERVICE_PROMOTION: &str = "\
- Focus on benefits, growth, leads, ROI
- CTA should be strong and clear
- Highlight results and transformation
- Professional and persuasive tone";

const BRAND_AWARENESS: &str = "\
- Focus on trust, positioning, credibility
- CTA is soft or optional
- Build brand reputation and authority
- Emphasize values and mission";

const TRENDING_TOPIC: &str = "\
- Opinionated, expert, insightful
- Position brand as knowledgeable
- Add value to the conversation
- Thought leadership tone";

const EDUCATIONAL: &str = "\
- Teach ONE clear idea
- Encourage save, learn, or awareness
- Minimal CTA
- Helpful and informative tone
- Break down complex topics simply";

const FOUNDER_TEAM: &str = "\
- Human, authentic, trust-building
- No selling tone
- Share story, journey, or behind-the-scenes
- Personal and relatable";

const TESTIMONIAL: &str = "\
- Social proof, confidence, credibility
- Professional tone
- Real results and experiences
- Build trust through customer success";

const ENGAGEMENT_POST: &str = "\
- Ask a clear question
- Encourage comments or interaction
- NO selling
- Conversational and inviting tone
- Make audience feel heard";

/// Renders a CTA flag the way it appears in prompts.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Returns the guidance block for `category`.
///
/// Festival / Occasion is the only parameterized entry: it states whether a CTA
/// is allowed. Unknown categories get an empty block.
pub fn behavior_for(category: ContentCategory, cta_enabled: bool) -> String {
    match category {
        ContentCategory::ServicePromotion => SERVICE_PROMOTION.to_string(),
        ContentCategory::BrandAwareness => BRAND_AWARENESS.to_string(),
        ContentCategory::FestivalOccasion => format!(
            "- Mention the specific festival explicitly\n\
             - Emotional, respectful, culturally appropriate\n\
             - NO selling language\n\
             - CTA only if CTA Enabled = Yes (currently: {})\n\
             - Warm, celebratory, and genuine tone\n\
             - Focus on wishes and celebration, not promotion",
            yes_no(cta_enabled)
        ),
        ContentCategory::TrendingTopic => TRENDING_TOPIC.to_string(),
        ContentCategory::Educational => EDUCATIONAL.to_string(),
        ContentCategory::FounderTeam => FOUNDER_TEAM.to_string(),
        ContentCategory::Testimonial => TESTIMONIAL.to_string(),
        ContentCategory::EngagementPost => ENGAGEMENT_POST.to_string(),
        ContentCategory::Other => String::new(),
    }
}
