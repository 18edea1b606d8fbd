//! The provider contract: the `Translator` trait and its factory.

use crate::error::Result;
use crate::translator::{Direction, Language, Options};
use serde::Serialize;

/// Outcome of a successful translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Translated text
    pub text: String,

    /// Source language, when the provider reports it
    pub from: Option<Language>,

    /// Target language, when the provider reports it
    pub to: Option<Language>,

    /// Detected source language, only set when detection was requested
    pub detected: Option<Language>,
}

impl Translation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Basic translation operations a provider backend implements.
///
/// Every method takes `&mut self`: a provider instance, and the facade
/// wrapping it, belong to one caller at a time.
pub trait Translator: Send {
    /// Languages supported by the provider. `code` selects the language in
    /// which the names are reported; an empty code leaves it to the provider.
    fn get_langs(&mut self, code: &str) -> Result<Vec<Language>>;

    /// Detect the language of `text`.
    fn detect(&mut self, text: &str) -> Result<Language>;

    /// Translate `text` along `direction`.
    fn translate(&mut self, text: &str, direction: &Direction) -> Result<Translation>;

    /// Name of the provider.
    fn name(&self) -> &str;
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn get_langs(&mut self, code: &str) -> Result<Vec<Language>> {
        (**self).get_langs(code)
    }

    fn detect(&mut self, text: &str) -> Result<Language> {
        (**self).detect(text)
    }

    fn translate(&mut self, text: &str, direction: &Direction) -> Result<Translation> {
        (**self).translate(text, direction)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Builds provider instances from an option set.
///
/// Any `Fn(Options) -> Box<dyn Translator>` closure is a factory.
pub trait TranslatorFactory: Send + Sync {
    fn new_instance(&self, options: Options) -> Box<dyn Translator>;
}

impl<F> TranslatorFactory for F
where
    F: Fn(Options) -> Box<dyn Translator> + Send + Sync,
{
    fn new_instance(&self, options: Options) -> Box<dyn Translator> {
        self(options)
    }
}
