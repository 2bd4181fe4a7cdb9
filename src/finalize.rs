//! Module Output Finalization
//!
//! Appends the cached locals map to a file's already-processed module
//! source, as a trailing `exports.locals` assignment the runtime can read.

use crate::cache::LocalsCache;
use crate::error::ScopeError;

pub fn finalize_module(
    source: &str,
    file_path: &str,
    cache: &LocalsCache,
) -> Result<String, ScopeError> {
    let locals = cache.get(file_path)?;
    let json = serde_json::to_string(locals).map_err(|source| ScopeError::Serialize {
        path: file_path.to_string(),
        source,
    })?;
    Ok(format!("{source}\nexports.locals = {json};"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_appends_locals_assignment() {
        let mut cache = LocalsCache::new();
        cache.insert("/app/src/a.css", json!({"btn": "a_btn_x1"}));

        let out = finalize_module("module.exports = css;", "/app/src/a.css", &cache).unwrap();
        assert_eq!(
            out,
            "module.exports = css;\nexports.locals = {\"btn\":\"a_btn_x1\"};"
        );
    }

    #[test]
    fn test_missing_entry_is_fatal_and_names_the_file() {
        let cache = LocalsCache::new();
        let err = finalize_module("", "/app/src/b.css", &cache).unwrap_err();
        assert!(matches!(err, ScopeError::CacheMiss { .. }));
        assert!(err.to_string().contains("/app/src/b.css"));
    }
}
