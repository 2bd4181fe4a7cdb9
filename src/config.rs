//! Scoping Configuration
//!
//! Options are applied once, before the host starts feeding files through
//! the engine. Changing them mid-build is documented caller responsibility;
//! nothing here guards against it.

use log::debug;
use regex::Regex;
use serde::Deserialize;

use crate::error::ScopeError;
use crate::template::NameTemplate;

pub const DEFAULT_GLOBAL_MODULE_PATH: &str = "/node_modules/";
pub const DEFAULT_LOCAL_NAME_TEMPLATE: &str = "[name]_[local]_[hash:base64:5]";

/// Options object as the host supplies it, camelCase JSON. Either field may
/// be omitted; `globalModulePaths` accepts a single pattern or a list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawScopeOptions {
    pub global_module_paths: Option<OneOrMany<String>>,
    pub local_name_template: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

/// Compiled configuration: vendored-path patterns plus the local-name
/// template. Invalid input is rejected here, at configuration time, never
/// during per-selector resolution.
#[derive(Debug, Clone)]
pub struct ScopeOptions {
    global_module_paths: Vec<Regex>,
    local_name_template: NameTemplate,
}

impl Default for ScopeOptions {
    fn default() -> Self {
        Self {
            global_module_paths: vec![
                Regex::new(DEFAULT_GLOBAL_MODULE_PATH).expect("Invalid default pattern")
            ],
            local_name_template: NameTemplate::new(DEFAULT_LOCAL_NAME_TEMPLATE)
                .expect("Invalid default template"),
        }
    }
}

impl ScopeOptions {
    pub fn from_raw(raw: RawScopeOptions) -> Result<Self, ScopeError> {
        let mut options = Self::default();
        options.apply(raw)?;
        Ok(options)
    }

    /// Merge host-supplied overrides onto the current configuration.
    pub fn apply(&mut self, raw: RawScopeOptions) -> Result<(), ScopeError> {
        if let Some(paths) = raw.global_module_paths {
            self.set_global_module_paths(paths.into_vec())?;
        }
        if let Some(template) = raw.local_name_template {
            self.set_local_name_template(template)?;
        }
        Ok(())
    }

    /// Replace the vendored-path pattern list. An empty list means no path
    /// is treated as vendored.
    pub fn set_global_module_paths(&mut self, patterns: Vec<String>) -> Result<(), ScopeError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = Regex::new(&pattern).map_err(|source| ScopeError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            compiled.push(regex);
        }
        debug!(
            "global module paths set to {:?}",
            compiled.iter().map(|r| r.as_str()).collect::<Vec<_>>()
        );
        self.global_module_paths = compiled;
        Ok(())
    }

    pub fn set_local_name_template(&mut self, template: String) -> Result<(), ScopeError> {
        self.local_name_template = NameTemplate::new(template)?;
        Ok(())
    }

    pub fn is_global_module_path(&self, file_path: &str) -> bool {
        self.global_module_paths
            .iter()
            .any(|pattern| pattern.is_match(file_path))
    }

    pub fn local_name_template(&self) -> &NameTemplate {
        &self.local_name_template
    }
}
