//! Provider abstraction for machine translation.
//!
//! This module contains everything needed to plug translation backends in
//! behind one interface and pick one by name at runtime.
//!
//! # Architecture
//!
//! - `language`: Language value type, compared by code
//! - `direction`: Source→target pair with its "en-ru" textual form
//! - `targets`: Direction graph, source language → reachable targets
//! - `provider`: The `Translator` trait providers implement, and their factory
//! - `options`: Option sets handed to factories, and `with_option`
//! - `registry`: Name → factory table
//! - `facade`: `Translate`, a wrapper memoizing language lists
//!
//! # Example
//!
//! ```rust,ignore
//! use translate_hub::{with_option, Registry};
//!
//! let registry = Registry::new();
//! registry.register("yandex", yandex::factory)?;
//!
//! let mut tr = registry.open("yandex", [with_option("apikey", key)])?;
//! let langs = tr.get_langs("en")?;
//! let result = tr.translate("Привет", &"ru-en".parse()?)?;
//! ```

mod direction;
mod facade;
mod language;
mod options;
mod provider;
mod registry;
mod targets;

pub use direction::{Direction, DirectionParseError, DIRECTION_SEPARATOR};
pub use facade::{CacheStats, Translate};
pub use language::Language;
pub use options::{collect_options, with_option, Options, ProviderOption};
pub use provider::{Translation, Translator, TranslatorFactory};
pub use registry::Registry;
pub use targets::Targets;
