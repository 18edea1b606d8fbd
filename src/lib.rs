//! Pluggable machine-translation providers behind one `Translator` trait.
//!
//! Provider backends register a factory under a name; callers resolve a
//! provider by name, hand it options, and get back a uniform translator that
//! can detect languages, list supported languages and translate text.

pub mod config;
pub mod error;
pub mod logging;
pub mod translator;

pub use error::{RegistryError, TranslateError};
pub use translator::{
    collect_options, with_option, CacheStats, Direction, DirectionParseError, Language, Options,
    ProviderOption, Registry, Targets, Translate, Translation, Translator, TranslatorFactory,
};
