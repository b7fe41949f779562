/// Decoding parameters for one inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub sample: bool,
}

impl GenerationParams {
    /// Preset used when generating a quiz/problem from an image.
    pub const GENERATION: Self = Self {
        max_new_tokens: 500,
        temperature: 0.7,
        sample: true,
    };

    /// Preset used when evaluating a learner's answer.
    pub const EVALUATION: Self = Self {
        max_new_tokens: 300,
        temperature: 0.5,
        sample: true,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generation_preset() {
        let params = GenerationParams::GENERATION;
        assert_eq!(params.max_new_tokens, 500);
        assert_eq!(params.temperature, 0.7);
        assert!(params.sample);
    }

    #[test]
    fn test_evaluation_preset() {
        let params = GenerationParams::EVALUATION;
        assert_eq!(params.max_new_tokens, 300);
        assert_eq!(params.temperature, 0.5);
        assert!(params.sample);
    }
}
