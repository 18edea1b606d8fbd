//! Provider options and option builders.
//!
//! Options are collected into a fresh [`Options`] set for every instantiation,
//! so a factory always receives its own copy and never aliases the caller's
//! state.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Option set handed to a provider factory: option name → value.
pub type Options = BTreeMap<String, Value>;

/// A deferred edit of an option set, applied when a provider is instantiated.
pub struct ProviderOption(Box<dyn FnOnce(&mut Options) + Send>);

impl ProviderOption {
    /// Wrap an arbitrary edit of the option set.
    pub fn new<F>(apply: F) -> Self
    where
        F: FnOnce(&mut Options) + Send + 'static,
    {
        Self(Box::new(apply))
    }

    pub(crate) fn apply(self, options: &mut Options) {
        (self.0)(options)
    }
}

impl fmt::Debug for ProviderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProviderOption(..)")
    }
}

/// Set `name` to `value`. A later option for the same name wins.
///
/// # Example
/// ```
/// use translate_hub::with_option;
///
/// let options = [with_option("apikey", "123"), with_option("timeout", 30)];
/// ```
pub fn with_option(name: impl Into<String>, value: impl Into<Value>) -> ProviderOption {
    let name = name.into();
    let value = value.into();
    ProviderOption::new(move |options| {
        options.insert(name, value);
    })
}

/// Build an option set by applying `options` in order.
pub fn collect_options<I>(options: I) -> Options
where
    I: IntoIterator<Item = ProviderOption>,
{
    let mut set = Options::new();
    for option in options {
        option.apply(&mut set);
    }
    set
}
