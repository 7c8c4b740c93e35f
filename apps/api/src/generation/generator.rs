//! Post Generation: orchestrates the single-request pipeline.
//!
//! Flow: assemble_prompt → completion call → parse_structured_text →
//!       validate_output (advisory) → return content.
//!
//! Upstream failures never propagate from here: a failed completion call
//! yields an all-empty `GeneratedContent`. No retries.

use tracing::{error, info, warn};

use crate::generation::parser::parse_structured_text;
use crate::generation::prompts::assemble_prompt;
use crate::generation::validation::{validate_output, ValidationResult};
use crate::llm_client::CompletionClient;
use crate::models::content::{GeneratedContent, GenerationRequest};

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub content: GeneratedContent,
    /// Advisory; a failed validation does not withhold the content.
    pub validation: ValidationResult,
}

/// Sends the prompt and parses the reply. Upstream errors become an empty record.
pub async fn generate_text(llm: &dyn CompletionClient, prompt: &str) -> GeneratedContent {
    match llm.complete(prompt).await {
        Ok(raw) => parse_structured_text(&raw),
        Err(e) => {
            error!("Completion call failed: {e}");
            GeneratedContent::default()
        }
    }
}

/// Runs the full pipeline for one request.
pub async fn generate_post(llm: &dyn CompletionClient, request: &GenerationRequest) -> GeneratedPost {
    let prompt = assemble_prompt(
        &request.profile,
        &request.brief,
        request.instructions.as_ref(),
    );
    info!(
        "Assembled prompt for brand '{}' ({}, {} chars)",
        request.profile.name,
        request.brief.content_category.label(),
        prompt.len()
    );

    let content = generate_text(llm, &prompt).await;

    let validation = validate_output(
        &content,
        &request.profile,
        Some(request.brief.content_category),
    );
    if !validation.valid {
        warn!("Validation failed: {}", validation.reason);
    }

    GeneratedPost {
        content,
        validation,
    }
}
