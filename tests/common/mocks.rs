use async_trait::async_trait;
use image::DynamicImage;
use std::sync::{Arc, Mutex};
use vlm_server::{
    Error, Result,
    vlm::{GenerationParams, VlmClient},
};

/// One recorded call to the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub had_image: bool,
    pub params: GenerationParams,
}

/// Mock VLM client for testing: scripted responses, optional forced error,
/// and a record of every call made.
#[derive(Debug)]
pub struct MockVlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
    pub error: Option<String>,
}

impl MockVlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockVlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VlmClient for MockVlmClient {
    async fn generate(
        &self,
        prompt: &str,
        image: Option<&DynamicImage>,
        params: GenerationParams,
    ) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            had_image: image.is_some(),
            params,
        });

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::inference("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}
