use crate::translator::{with_option, Options, ProviderOption, Registry, Translate};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Namespace of every variable read from the environment
pub const ENV_PREFIX: &str = "TRANSLATE_";

/// Variable naming the provider to resolve
pub const PROVIDER_VAR: &str = "TRANSLATE_PROVIDER";

/// Prefix of provider option variables (`TRANSLATE_OPTION_APIKEY=...`)
pub const OPTION_PREFIX: &str = "TRANSLATE_OPTION_";

/// Variable toggling language list memoization
pub const CACHE_LANGS_VAR: &str = "TRANSLATE_CACHE_LANGS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Registered name of the provider to use
    pub provider: String,

    /// Provider options, keys lowercased
    pub options: Options,

    /// Wrap the provider in a memoizing facade
    pub cache_langs: bool,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> Result<Self> {
        // Missing .env is fine; real deployments set variables directly
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Read the `TRANSLATE_*` variables of the process environment.
    ///
    /// Variables outside that namespace are skipped without being decoded,
    /// so non-UTF-8 entries elsewhere in the environment do no harm.
    pub fn from_env() -> Result<Self> {
        let mut vars = Vec::new();
        for (key, value) in std::env::vars_os() {
            let Some(key) = key.to_str().filter(|k| k.starts_with(ENV_PREFIX)) else {
                continue;
            };
            let value = value
                .into_string()
                .map_err(|_| anyhow::anyhow!("{} is not valid UTF-8", key))?;
            vars.push((key.to_string(), value));
        }
        Self::from_vars(vars)
    }

    /// Read configuration from a dotenv-format file, ignoring the process
    /// environment.
    pub fn from_dotenv_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let mut vars = Vec::new();
        for item in iter {
            let (key, value) =
                item.with_context(|| format!("Failed to parse {}", path.display()))?;
            vars.push((key, value));
        }
        Self::from_vars(vars)
    }

    /// Build the configuration from arbitrary variable pairs.
    ///
    /// Pairs are read in order; when a variable (or two option names that
    /// only differ in case) appears more than once, the last one wins.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut provider = None;
        let mut options = Options::new();
        let mut cache_langs = None;

        for (key, value) in vars {
            let key: String = key.into();
            let value: String = value.into();
            if key == PROVIDER_VAR {
                provider = Some(value);
            } else if key == CACHE_LANGS_VAR {
                cache_langs = Some(value);
            } else if let Some(name) = key.strip_prefix(OPTION_PREFIX) {
                if !name.is_empty() {
                    options.insert(name.to_lowercase(), Value::String(value));
                }
            }
        }

        let provider = provider
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .context("TRANSLATE_PROVIDER not set")?;

        let cache_langs = cache_langs
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(true);

        Ok(Self {
            provider,
            options,
            cache_langs,
        })
    }

    /// The configured options as option builders.
    pub fn provider_options(&self) -> Vec<ProviderOption> {
        self.options
            .iter()
            .map(|(name, value)| with_option(name.clone(), value.clone()))
            .collect()
    }

    /// Resolve the configured provider from `registry`.
    pub fn open(&self, registry: &Registry) -> Result<Translate> {
        let translator = registry
            .new_translator(&self.provider, self.provider_options())
            .with_context(|| format!("Failed to create translator '{}'", self.provider))?;

        Ok(if self.cache_langs {
            Translate::new(translator)
        } else {
            Translate::uncached(translator)
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
