use crate::error::{missing_field_path, to_env_var, ConfigError};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment};
use delve::agent::{
    AgentConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_SEARCH_GUIDANCE, DEFAULT_SEARCH_RESULTS,
};
use delve::providers::configs::{OpenAiProviderConfig, GROQ_HOST, GROQ_MODEL};
use delve::search::tavily::{TavilyConfig, TAVILY_HOST};
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

// Keys without a default, each supplied by DELVE_<SECTION>__<KEY>
const REQUIRED_KEYS: [&str; 2] = ["provider.api_key", "search.api_key"];

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum ProviderSettings {
    Groq {
        #[serde(default = "default_groq_host")]
        host: String,
        api_key: String,
        #[serde(default = "default_groq_model")]
        model: String,
        #[serde(default)]
        temperature: Option<f32>,
        #[serde(default)]
        max_tokens: Option<i32>,
    },
    OpenAi {
        #[serde(default = "default_openai_host")]
        host: String,
        api_key: String,
        #[serde(default = "default_openai_model")]
        model: String,
        #[serde(default)]
        temperature: Option<f32>,
        #[serde(default)]
        max_tokens: Option<i32>,
    },
}

impl ProviderSettings {
    // Both variants speak the OpenAI chat completions protocol
    pub fn into_config(self) -> OpenAiProviderConfig {
        match self {
            ProviderSettings::Groq {
                host,
                api_key,
                model,
                temperature,
                max_tokens,
            }
            | ProviderSettings::OpenAi {
                host,
                api_key,
                model,
                temperature,
                max_tokens,
            } => OpenAiProviderConfig {
                host,
                api_key,
                model,
                temperature,
                max_tokens,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_tavily_host")]
    pub host: String,
    pub api_key: String,
}

impl SearchSettings {
    pub fn into_config(self) -> TavilyConfig {
        TavilyConfig {
            host: self.host,
            api_key: self.api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub max_iterations: usize,
    pub search_results: usize,
    pub search_guidance: String,
    pub system_prompt_path: Option<PathBuf>,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            search_results: DEFAULT_SEARCH_RESULTS,
            search_guidance: DEFAULT_SEARCH_GUIDANCE.to_string(),
            system_prompt_path: None,
        }
    }
}

impl AgentSettings {
    pub fn into_config(self) -> AgentConfig {
        AgentConfig {
            max_iterations: self.max_iterations,
            search_results: self.search_results,
            search_guidance: self.search_guidance,
            system_prompt_template: self.system_prompt_path,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub search: SearchSettings,
    #[serde(default)]
    pub agent: AgentSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Server defaults
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            // Provider defaults
            .set_default("provider.type", "groq")?;

        // The provider's own variable names work too, below the DELVE_ ones
        let builder = with_env_fallback(builder, "provider.api_key", "GROQ_API_KEY")?;
        let builder = with_env_fallback(builder, "search.api_key", "TAVILY_API_KEY")?;

        let config = builder
            .add_source(
                Environment::with_prefix("DELVE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Checked before deserializing so the error names the full key path
        for key in REQUIRED_KEYS {
            match config.get_string(key) {
                Ok(value) if !value.is_empty() => {}
                _ => {
                    return Err(ConfigError::MissingEnvVar {
                        env_var: to_env_var(key),
                    })
                }
            }
        }

        let result: Result<Self, config::ConfigError> = config.try_deserialize();

        match result {
            Ok(settings) => Ok(settings),
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);

                if let Some(field) = missing_field_path(&err.to_string()) {
                    Err(ConfigError::MissingEnvVar {
                        env_var: to_env_var(&field),
                    })
                } else if let config::ConfigError::NotFound(field) = &err {
                    Err(ConfigError::MissingEnvVar {
                        env_var: to_env_var(field),
                    })
                } else {
                    Err(ConfigError::Other(err))
                }
            }
        }
    }
}

fn with_env_fallback(
    builder: ConfigBuilder<DefaultState>,
    key: &str,
    env_var: &str,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match std::env::var(env_var) {
        Ok(value) if !value.is_empty() => Ok(builder.set_default(key, value)?),
        _ => Ok(builder),
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_groq_host() -> String {
    GROQ_HOST.to_string()
}

fn default_groq_model() -> String {
    GROQ_MODEL.to_string()
}

fn default_openai_host() -> String {
    "https://api.openai.com".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o".to_string()
}

fn default_tavily_host() -> String {
    TAVILY_HOST.to_string()
}
