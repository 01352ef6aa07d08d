//! API key resolution
//!
//! The key is resolved once at startup, in priority order:
//!
//! 1. `--api-key` on the command line
//! 2. `openai.api_key` in a config file
//! 3. the environment variable named by `openai.api_key_env`
//!    (a `.env` file in the working directory is loaded first)

use super::file_config::FileOpenAiConfig;
use thiserror::Error;
use tracing::debug;

/// Credential resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error(
        "No API key found: pass --api-key, set openai.api_key in the config file, or set the {env_var} environment variable"
    )]
    Missing { env_var: String },
}

/// An API key. `Debug` never prints the key itself.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank strings.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(<redacted>)")
    }
}

/// Load `.env` from the working directory (if any) into the process
/// environment. Existing variables win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => debug!("Ignoring unreadable .env file: {}", e),
    }
}

/// Resolve the API key from the flag, the config, or the process environment.
pub fn resolve_api_key(
    flag: Option<&str>,
    config: &FileOpenAiConfig,
) -> Result<ApiKey, CredentialError> {
    resolve_api_key_with(flag, config, |name| std::env::var(name).ok())
}

/// Same as [`resolve_api_key`] with an injectable environment lookup.
pub fn resolve_api_key_with<F>(
    flag: Option<&str>,
    config: &FileOpenAiConfig,
    env: F,
) -> Result<ApiKey, CredentialError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = flag.and_then(ApiKey::new) {
        debug!("Using API key from command line");
        return Ok(key);
    }

    if let Some(key) = config.api_key.clone().and_then(ApiKey::new) {
        debug!("Using API key from config file");
        return Ok(key);
    }

    if let Some(key) = env(&config.api_key_env).and_then(ApiKey::new) {
        debug!("Using API key from ${}", config.api_key_env);
        return Ok(key);
    }

    Err(CredentialError::Missing {
        env_var: config.api_key_env.clone(),
    })
}
