//! Selector Scoping Engine
//!
//! Decides, per selector occurrence, whether the name stays global or is
//! rewritten to a file-scoped ident. The registry of globally claimed names
//! is the only cross-file state in the crate, and resolution order matters:
//! vendored files must be processed before the component files that reuse
//! their selector names.

use std::collections::HashSet;

use log::debug;

use crate::config::{RawScopeOptions, ScopeOptions};
use crate::error::ScopeError;
use crate::template::PathData;

/// Names currently claimed as global. A claim is made the first time a name
/// is seen in a vendored file and holds for the rest of the build run; only
/// `clear` releases it.
#[derive(Debug, Default)]
pub struct GlobalSelectorRegistry {
    claimed: HashSet<String>,
}

impl GlobalSelectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_global(&self, name: &str) -> bool {
        self.claimed.contains(name)
    }

    pub fn claim(&mut self, name: &str) {
        if self.claimed.insert(name.to_string()) {
            debug!("selector `{name}` claimed global");
        }
    }

    pub fn clear(&mut self) {
        self.claimed.clear();
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

pub struct ScopeEngine {
    options: ScopeOptions,
    registry: GlobalSelectorRegistry,
}

impl Default for ScopeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeEngine {
    pub fn new() -> Self {
        Self::with_options(ScopeOptions::default())
    }

    pub fn with_options(options: ScopeOptions) -> Self {
        Self {
            options,
            registry: GlobalSelectorRegistry::new(),
        }
    }

    /// Resolve one selector occurrence to its final name.
    ///
    /// 1. A name already claimed global stays untouched, wherever it now
    ///    appears. A dependency's public class name must not be shadowed by
    ///    a later local rewrite.
    /// 2. A name first seen under a vendored path is claimed global.
    /// 3. Everything else gets a generated file-scoped ident.
    pub fn resolve(&mut self, name: &str, file_path: &str, content: &str) -> String {
        if self.registry.is_global(name) {
            return name.to_string();
        }

        if self.options.is_global_module_path(file_path) {
            self.registry.claim(name);
            return name.to_string();
        }

        self.options.local_name_template().render(
            PathData::default().filename(file_path).content(content),
            name,
        )
    }

    /// Apply host-supplied overrides. Meant to run before any file is
    /// processed; see `config` module notes.
    pub fn configure(&mut self, raw: RawScopeOptions) -> Result<(), ScopeError> {
        self.options.apply(raw)
    }

    pub fn set_global_module_paths(&mut self, patterns: Vec<String>) -> Result<(), ScopeError> {
        self.options.set_global_module_paths(patterns)
    }

    pub fn set_local_name_template(&mut self, template: String) -> Result<(), ScopeError> {
        self.options.set_local_name_template(template)
    }

    pub fn options(&self) -> &ScopeOptions {
        &self.options
    }

    pub fn registry(&self) -> &GlobalSelectorRegistry {
        &self.registry
    }

    /// Start-of-build-run lifecycle: releases every global claim. Keeps the
    /// configuration.
    pub fn reset(&mut self) {
        self.registry.clear();
    }
}
