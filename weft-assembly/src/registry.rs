//! Emitter registry for discovery and selection
//!
//! This module provides a centralized registry for all available emitters.
//! Emitters can be registered and retrieved by name.

use std::collections::HashMap;

use crate::emitter::Emitter;
use crate::error::EmitError;

/// Registry of output emitters
///
/// # Examples
///
/// ```ignore
/// let mut registry = EmitterRegistry::new();
/// registry.register(MyEmitter);
///
/// let emitter = registry.get("my-format")?;
/// let rendered = emitter.emit(&doc)?;
/// ```
pub struct EmitterRegistry {
    emitters: HashMap<String, Box<dyn Emitter>>,
}

impl EmitterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        EmitterRegistry {
            emitters: HashMap::new(),
        }
    }

    /// Register an emitter
    ///
    /// If an emitter with the same name already exists, it will be replaced.
    pub fn register<E: Emitter + 'static>(&mut self, emitter: E) {
        self.emitters
            .insert(emitter.name().to_string(), Box::new(emitter));
    }

    /// Get an emitter by name
    pub fn get(&self, name: &str) -> Result<&dyn Emitter, EmitError> {
        self.emitters
            .get(name)
            .map(|e| e.as_ref())
            .ok_or_else(|| EmitError::EmitterNotFound(name.to_string()))
    }

    /// Check if an emitter exists
    pub fn has(&self, name: &str) -> bool {
        self.emitters.contains_key(name)
    }

    /// List all available emitter names (sorted)
    pub fn list_emitters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.emitters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect emitter from filename based on file extension
    ///
    /// Returns the emitter name if a matching extension is found, or None
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = EmitterRegistry::default();
    /// assert_eq!(registry.detect_emitter_from_filename("out.tex"), Some("latex".to_string()));
    /// assert_eq!(registry.detect_emitter_from_filename("out.docx"), Some("docx".to_string()));
    /// assert_eq!(registry.detect_emitter_from_filename("out.unknown"), None);
    /// ```
    pub fn detect_emitter_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for emitter in self.emitters.values() {
            if emitter.file_extensions().contains(&extension) {
                return Some(emitter.name().to_string());
            }
        }

        None
    }

    /// Create a registry with the built-in emitters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::emitters::latex::LatexEmitter::new());
        registry.register(crate::emitters::docx::DocxEmitter::new());

        registry
    }
}

impl Default for EmitterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
