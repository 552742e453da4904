use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {env_var}")]
    MissingEnvVar { env_var: String },
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

// Convert a configuration field path (e.g., "provider.api_key") to its environment variable name
pub fn to_env_var(field_path: &str) -> String {
    format!("DELVE_{}", field_path.replace('.', "__").to_uppercase())
}

// Pull the field path out of serde's "missing field `x`" message, with the
// enclosing key when config reports one ("... for key `provider`")
pub fn missing_field_path(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    let (field, rest) = rest.split_once('`')?;
    match rest
        .split_once("for key `")
        .and_then(|(_, key)| key.split_once('`'))
    {
        Some((key, _)) if !key.is_empty() => Some(format!("{}.{}", key, field)),
        _ => Some(field.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_env_var() {
        assert_eq!(to_env_var("provider.api_key"), "DELVE_PROVIDER__API_KEY");
        assert_eq!(to_env_var("server.port"), "DELVE_SERVER__PORT");
    }

    #[test]
    fn test_missing_field_path() {
        assert_eq!(
            missing_field_path("missing field `api_key`"),
            Some("api_key".to_string())
        );
        assert_eq!(
            missing_field_path("missing field `api_key` for key `search`"),
            Some("search.api_key".to_string())
        );
        assert_eq!(missing_field_path("invalid type: string"), None);
    }
}
