//! Provider registry: resolves translation providers by name.
//!
//! Applications construct a [`Registry`], register every provider factory
//! during startup and pass the registry to whatever needs to instantiate
//! providers. A lazily initialised process-wide instance is available through
//! [`Registry::global`] for providers that register themselves.

use crate::error::RegistryError;
use crate::translator::{collect_options, ProviderOption, Translate, Translator, TranslatorFactory};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

/// Name → factory table guarded by a single reader/writer lock.
#[derive(Default)]
pub struct Registry {
    factories: RwLock<HashMap<String, Arc<dyn TranslatorFactory>>>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry instance.
    ///
    /// This method initializes an empty registry on first call and returns a
    /// reference to the same instance on subsequent calls.
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::new)
    }

    // The table holds plain map entries only, so a panic in another thread
    // cannot leave it half-updated.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn TranslatorFactory>>> {
        self.factories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn TranslatorFactory>>> {
        self.factories.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a provider factory under `name`.
    ///
    /// # Errors
    /// `RegistryError::DuplicateProvider` if `name` is already taken. Each
    /// provider is expected to register exactly once, so this points at a
    /// startup misconfiguration; the existing entry is left untouched.
    pub fn register<F>(&self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: TranslatorFactory + 'static,
    {
        let name = name.into();
        let mut factories = self.write();
        if factories.contains_key(&name) {
            warn!("Rejected duplicate registration of translation provider '{}'", name);
            return Err(RegistryError::DuplicateProvider(name));
        }

        info!("Registered translation provider '{}'", name);
        factories.insert(name, Arc::new(factory));
        Ok(())
    }

    /// Sorted names of the registered providers.
    pub fn translators(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// True if a provider is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Create a new instance of provider `name`.
    ///
    /// `options` are applied in order to a fresh option set, so a later
    /// option for the same key overrides an earlier one. The factory owns
    /// that set; nothing else holds a reference to it.
    ///
    /// # Errors
    /// `RegistryError::UnknownProvider` if nothing is registered under `name`.
    pub fn new_translator<I>(
        &self,
        name: &str,
        options: I,
    ) -> Result<Box<dyn Translator>, RegistryError>
    where
        I: IntoIterator<Item = ProviderOption>,
    {
        // Release the lock before running provider code.
        let factory = self
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownProvider(name.to_string()))?;

        let options = collect_options(options);
        debug!(
            "Creating translation provider '{}' with options {:?}",
            name,
            options.keys().collect::<Vec<_>>()
        );
        Ok(factory.new_instance(options))
    }

    /// Create a new instance of provider `name` wrapped in the memoizing
    /// [`Translate`] facade.
    pub fn open<I>(&self, name: &str, options: I) -> Result<Translate, RegistryError>
    where
        I: IntoIterator<Item = ProviderOption>,
    {
        self.new_translator(name, options).map(Translate::new)
    }

    /// Remove every registered provider.
    #[cfg(test)]
    pub(crate) fn clear(&self) {
        self.write().clear();
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("translators", &self.translators())
            .finish()
    }
}
