mod client;
mod types;

pub use client::{OllamaVlmClient, VlmClient};
pub use types::GenerationParams;

/// Some models echo the input prompt before continuing. When the prompt
/// occurs in the generated text, keep only the suffix after its last
/// occurrence and trim surrounding whitespace; otherwise return the text
/// unchanged.
pub fn strip_prompt_echo(prompt: &str, text: &str) -> String {
    if prompt.is_empty() {
        return text.to_string();
    }
    match text.rfind(prompt) {
        Some(index) => text[index + prompt.len()..].trim().to_string(),
        None => text.to_string(),
    }
}
