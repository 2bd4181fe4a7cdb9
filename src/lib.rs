//! # CSS Modules Selector Scoping
//!
//! Build-time selector scoping for component applications. For every class
//! selector the upstream style processor encounters, this crate decides
//! whether the name is rewritten to a file-scoped, collision-resistant
//! ident ("local") or left untouched so other files can reference it
//! ("global"), and it caches each file's locals map until the host embeds
//! it into that file's module output.
//!
//! ## Scoping Invariants
//!
//! 1. **Global claims persist**: a selector first seen under a vendored
//!    path keeps its authored name everywhere for the rest of the build
//!    run. Local rewrites must never shadow a dependency's public class.
//!
//! 2. **Local names are deterministic**: a generated ident is a pure
//!    function of (selector, file path, file content, template).
//!
//! 3. **Store before retrieve**: finalizing a module whose locals were
//!    never cached is a fatal pipeline-ordering error, not a fallback.
//!
//! 4. **Order matters**: vendored files must be fed through the engine
//!    before the component files that reuse their selector names. The
//!    host owns that ordering; the binding surface serializes all engine
//!    access behind one lock so overlapping calls cannot interleave
//!    registry mutations.
//!
//! All logic lives in the plain-Rust API below. The `napi` feature adds a
//! thin Node-API surface over process-wide instances for JS build hosts.

#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

mod cache;
mod config;
mod error;
mod finalize;
mod hash;
mod scope;
mod template;


pub use cache::LocalsCache;
pub use config::{
    OneOrMany, RawScopeOptions, ScopeOptions, DEFAULT_GLOBAL_MODULE_PATH,
    DEFAULT_LOCAL_NAME_TEMPLATE,
};
pub use error::ScopeError;
pub use finalize::finalize_module;
pub use hash::{ContentDigest, DigestEncoding};
pub use scope::{GlobalSelectorRegistry, ScopeEngine};
pub use template::{NameTemplate, PathData, LOCAL_PLACEHOLDER};

// ═══════════════════════════════════════════════════════════════════════════════
// NODE-API BINDING SURFACE
// ═══════════════════════════════════════════════════════════════════════════════
//
// The JS host registers these statically through Node-API. They operate on
// one process-wide engine/cache pair scoped to a single build run; the host
// calls `reset_build_state_native` between independent runs in the same
// process.

#[cfg(feature = "napi")]
mod bindings {
    use std::sync::Mutex;

    use lazy_static::lazy_static;

    use crate::{finalize_module, LocalsCache, RawScopeOptions, ScopeEngine};

    lazy_static! {
        static ref SCOPE_ENGINE: Mutex<ScopeEngine> = Mutex::new(ScopeEngine::new());
        static ref LOCALS_CACHE: Mutex<LocalsCache> = Mutex::new(LocalsCache::new());
    }

    /// Resolve one selector occurrence to its final name.
    #[napi]
    pub fn scoped_name_native(name: String, filename: String, css: String) -> String {
        SCOPE_ENGINE
            .lock()
            .unwrap()
            .resolve(&name, &filename, &css)
    }

    /// Store the locals map the upstream style processor produced for a file.
    #[napi]
    pub fn write_module_locals_native(file_path: String, locals: serde_json::Value) {
        LOCALS_CACHE.lock().unwrap().insert(file_path, locals);
    }

    /// Append the cached locals map to a file's processed module source.
    #[napi]
    pub fn finalize_module_native(source: String, file_path: String) -> napi::Result<String> {
        let cache = LOCALS_CACHE.lock().unwrap();
        finalize_module(&source, &file_path, &cache)
            .map_err(|e| napi::Error::from_reason(e.to_string()))
    }

    /// Apply the host's scoping options. Call before processing starts.
    #[napi]
    pub fn configure_scoping_native(options: serde_json::Value) -> napi::Result<()> {
        let raw: RawScopeOptions = serde_json::from_value(options)
            .map_err(|e| napi::Error::from_reason(format!("invalid scoping options: {e}")))?;
        SCOPE_ENGINE
            .lock()
            .unwrap()
            .configure(raw)
            .map_err(|e| napi::Error::from_reason(e.to_string()))
    }

    /// Drop all global claims and cached locals. Call between build runs.
    #[napi]
    pub fn reset_build_state_native() {
        SCOPE_ENGINE.lock().unwrap().reset();
        LOCALS_CACHE.lock().unwrap().clear();
    }
}
