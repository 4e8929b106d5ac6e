use std::env;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "myapp";

/// Configuração lida do ambiente (`.env` é carregado antes, se existir)
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    pub uri: String,
    pub database: String,
}

impl SeedConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            uri: non_empty("MONGODB_URI").unwrap_or_else(|| DEFAULT_URI.to_string()),
            database: non_empty("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        }
    }
}

/// URI sem a parte `usuário:senha@`, própria para log
pub fn redact_uri(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return uri.to_string();
    };
    let authority_end = rest.find(|c| c == '/' || c == '?').unwrap_or(rest.len());
    match rest[..authority_end].rfind('@') {
        Some(at) => format!("{}://***@{}", scheme, &rest[at + 1..]),
        None => uri.to_string(),
    }
}
