pub const GROQ_HOST: &str = "https://api.groq.com/openai";
pub const GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

/// Settings for any OpenAI compatible chat completions endpoint
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    pub host: String,
    pub api_key: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<i32>,
}
