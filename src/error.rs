//! Error taxonomy for the scoping pipeline.
//!
//! Every failure here is synchronous and terminal for the current build
//! step; nothing is retried or swallowed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    /// Locals were requested for a module before the upstream style
    /// processor stored them. Always a pipeline-ordering bug in the host.
    #[error("unable to load CSS module locals for {path}")]
    CacheMiss { path: String },

    /// A global module path override failed to compile as a regex.
    #[error("invalid global module path pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A local name template without a `[local]` placeholder would emit the
    /// same ident for every selector in a file.
    #[error("local name template `{template}` is missing the [local] placeholder")]
    InvalidTemplate { template: String },

    /// The host handed us an options object we could not deserialize.
    #[error("invalid scoping options: {reason}")]
    InvalidOptions { reason: String },

    #[error("failed to serialize locals for {path}: {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
