use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Editorial intent of a post. Drives the behavior block injected into the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentCategory {
    #[serde(rename = "Service Promotion")]
    ServicePromotion,
    #[serde(rename = "Brand Awareness")]
    BrandAwareness,
    #[serde(rename = "Festival / Occasion")]
    FestivalOccasion,
    #[serde(rename = "Trending Topic")]
    TrendingTopic,
    #[serde(rename = "Educational")]
    Educational,
    #[serde(rename = "Founder / Team")]
    FounderTeam,
    #[serde(rename = "Testimonial")]
    Testimonial,
    #[serde(rename = "Engagement Post")]
    EngagementPost,
    /// Any category label this build does not know about.
    #[serde(other)]
    Other,
}

impl ContentCategory {
    /// Human-readable label, identical to the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            ContentCategory::ServicePromotion => "Service Promotion",
            ContentCategory::BrandAwareness => "Brand Awareness",
            ContentCategory::FestivalOccasion => "Festival / Occasion",
            ContentCategory::TrendingTopic => "Trending Topic",
            ContentCategory::Educational => "Educational",
            ContentCategory::FounderTeam => "Founder / Team",
            ContentCategory::Testimonial => "Testimonial",
            ContentCategory::EngagementPost => "Engagement Post",
            ContentCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandProfile {
    pub name: String,
    pub industry: String,
    pub primary_service: String,
    pub target_audience: String,
    pub tone: String,
    pub phone: String,
    pub cta: String,
    #[serde(default)]
    pub forbidden_words: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentBrief {
    pub platform: String,
    pub content_category: ContentCategory,
    pub topic: String,
    // Festival fields are only read when content_category is Festival / Occasion
    #[serde(default)]
    pub festival_name: Option<String>,
    #[serde(default)]
    pub festival_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub cta_enabled: bool,
}

/// Clients send `"cta_enabled": null` for an unticked box.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Free-text addendum from the agency, appended verbatim to the prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgencyInstructions {
    #[serde(default)]
    pub extra_instructions: Option<String>,
}

/// Request body for `POST /generate-post`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    pub profile: BrandProfile,
    pub brief: ContentBrief,
    #[serde(default)]
    pub instructions: Option<AgencyInstructions>,
}

/// Structured fields recovered from the model's reply.
///
/// Always fully populated: a field the parser could not find is empty, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub headline: String,
    pub caption: String,
    pub cta: String,
    /// Tags without the leading `#`, in reply order.
    pub hashtags: Vec<String>,
    pub design_prompt: String,
}

impl GeneratedContent {
    /// True when every field is empty, i.e. nothing usable came back from the model.
    pub fn is_empty(&self) -> bool {
        self.headline.is_empty()
            && self.caption.is_empty()
            && self.cta.is_empty()
            && self.hashtags.is_empty()
            && self.design_prompt.is_empty()
    }
}

/// Response body for `POST /generate-post`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub headline: String,
    pub caption: String,
    pub cta: String,
    pub hashtags: Vec<String>,
    pub design_prompt: String,
    /// Image generation is not performed; always null.
    pub image_url: Option<String>,
    pub cost_metadata: Value,
}

impl From<GeneratedContent> for GenerationResponse {
    fn from(content: GeneratedContent) -> Self {
        Self {
            headline: content.headline,
            caption: content.caption,
            cta: content.cta,
            hashtags: content.hashtags,
            design_prompt: content.design_prompt,
            image_url: None,
            cost_metadata: serde_json::json!({ "status": "logged" }),
        }
    }
}
