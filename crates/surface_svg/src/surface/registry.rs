//! Registry of named surfaces.
use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::surface::catalog;
use crate::surface::HeightField;

/// Registry for storing and looking up height fields by unique string identifiers.
#[non_exhaustive]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, Arc<dyn HeightField>>,
}

impl SurfaceRegistry {
    /// Creates a new, empty [`SurfaceRegistry`].
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
        }
    }

    /// Creates a registry holding every surface from [`catalog::builtins`].
    pub fn with_builtins() -> Self {
        let builtins = catalog::builtins();
        let mut registry = Self {
            surfaces: HashMap::with_capacity(builtins.len()),
        };
        for (name, f) in builtins {
            registry.register(name, f);
        }
        registry
    }

    /// Returns the number of registered surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns `true` if there are no registered surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Registers a surface under the given identifier, replacing any previous entry.
    pub fn register<H>(&mut self, id: impl Into<String>, surface: H)
    where
        H: HeightField + 'static,
    {
        self.surfaces.insert(id.into(), Arc::new(surface));
    }

    /// Registers a surface under the given identifier using an [`Arc`].
    pub fn register_arc(&mut self, id: impl Into<String>, surface: Arc<dyn HeightField>) {
        self.surfaces.insert(id.into(), surface);
    }

    /// Unregisters a surface. Returns `true` if it was found and removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        self.surfaces.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }

    /// Retrieves a surface by its identifier.
    pub fn get(&self, id: &str) -> Option<Arc<dyn HeightField>> {
        let found = self.surfaces.get(id).cloned();
        if found.is_none() {
            warn!("Unknown surface id '{}'.", id);
        }
        found
    }

    /// Registered identifiers in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SurfaceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
