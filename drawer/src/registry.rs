//! Tag name to component factory lookup.
//!
//! The built-in components are defined once, the first time the process-wide
//! registry is used. Separate registries can be built for tests or embedders
//! that want their own tags.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

use crate::button::Button;
use crate::component::Component;
use crate::config::DrawerConfig;
use crate::drawer::Drawer;
use crate::error::RegistryError;
use crate::table::Table;

/// Builds a component from its attributes.
pub type Factory = fn(&Attributes, &DrawerConfig) -> Result<Box<dyn Component>, RegistryError>;

/// Element attributes, e.g. `role="delRow"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: HashMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, Factory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with `ext-button`, `ext-table` and `app-drawer` defined.
    pub fn builtin() -> Self {
        let factories = [
            (Button::TAG, Button::create as Factory),
            (Table::TAG, Table::create as Factory),
            (Drawer::TAG, Drawer::create as Factory),
        ]
        .into_iter()
        .map(|(tag, factory)| (tag.to_string(), factory))
        .collect();
        Self { factories }
    }

    /// Define a tag. Tags can only be defined once.
    pub fn define(&mut self, tag: impl Into<String>, factory: Factory) -> Result<(), RegistryError> {
        let tag = tag.into();
        if self.factories.contains_key(&tag) {
            return Err(RegistryError::AlreadyDefined(tag));
        }
        debug!("defined <{tag}>");
        self.factories.insert(tag, factory);
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Defined tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Instantiate the component registered under `tag`.
    pub fn create(
        &self,
        tag: &str,
        attrs: &Attributes,
        config: &DrawerConfig,
    ) -> Result<Box<dyn Component>, RegistryError> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))?;
        factory(attrs, config)
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry of built-in components.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::builtin)
}
