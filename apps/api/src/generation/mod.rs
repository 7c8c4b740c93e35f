// Post generation: prompt assembly, completion, parsing and advisory validation.
// All completion calls go through llm_client, never to a provider directly.

pub mod category;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod validation;
