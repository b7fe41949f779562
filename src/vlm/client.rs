use super::types::GenerationParams;
use crate::{Error, Result, config::ModelConfig, imaging};
use async_trait::async_trait;
use image::DynamicImage;
use ollama_rs::Ollama;
use ollama_rs::generation::chat::ChatMessage;
use ollama_rs::generation::chat::request::ChatMessageRequest;
use ollama_rs::generation::images::Image;
use ollama_rs::models::ModelOptions;
use tracing::{debug, info};

/// Boundary to the vision-language model: prompt plus optional image in,
/// decoded text out. Opaque and non-retryable; any runtime failure surfaces
/// as an inference error. A call may take seconds and is never cancelled.
#[async_trait]
pub trait VlmClient: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&DynamicImage>,
        params: GenerationParams,
    ) -> Result<String>;
}

/// `VlmClient` backed by a local Ollama runtime holding the model weights.
pub struct OllamaVlmClient {
    ollama: Ollama,
    model: String,
}

impl OllamaVlmClient {
    /// Connects to the runtime and verifies the configured model is
    /// available. Called once at startup; failure is fatal and the process
    /// must exit before serving.
    pub async fn connect(config: &ModelConfig) -> Result<Self> {
        info!(
            "Loading VLM model {} via {}:{}",
            config.model, config.ollama_host, config.ollama_port
        );

        let ollama = Ollama::new(config.ollama_host.clone(), config.ollama_port);

        let models = ollama
            .list_local_models()
            .await
            .map_err(|e| Error::startup(format!("model runtime unreachable: {}", e)))?;

        if !models.iter().any(|m| m.name == config.model) {
            return Err(Error::startup(format!(
                "model {} is not available in the runtime (pull it first)",
                config.model
            )));
        }

        info!("Model loaded successfully");

        Ok(Self {
            ollama,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl VlmClient for OllamaVlmClient {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&DynamicImage>,
        params: GenerationParams,
    ) -> Result<String> {
        debug!(
            model = %self.model,
            has_image = image.is_some(),
            max_new_tokens = params.max_new_tokens,
            "Running VLM inference"
        );

        let mut message = ChatMessage::user(prompt.to_string());
        if let Some(image) = image {
            let encoded = imaging::to_png_base64(image)?;
            message = message.with_images(vec![Image::from_base64(&encoded)]);
        }

        // The runtime has no separate do_sample switch; greedy decoding is
        // temperature zero.
        let temperature = if params.sample { params.temperature } else { 0.0 };
        let options = ModelOptions::default()
            .temperature(temperature)
            .num_predict(params.max_new_tokens as i32);

        let request = ChatMessageRequest::new(self.model.clone(), vec![message]).options(options);

        let response = self
            .ollama
            .send_chat_messages(request)
            .await
            .map_err(|e| Error::inference(e.to_string()))?;

        debug!(
            response_len = response.message.content.len(),
            "VLM inference finished"
        );

        Ok(response.message.content)
    }
}
