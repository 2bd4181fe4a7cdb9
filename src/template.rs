//! Local Name Template Rendering
//!
//! Expands a local-name template against the originating file's path and
//! content. This is the name-interpolation collaborator of the scoping
//! engine: a pure function of (template, path, content, selector).

use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::ScopeError;
use crate::hash::{ContentDigest, DigestEncoding};

pub const LOCAL_PLACEHOLDER: &str = "[local]";
pub const FILE_PLACEHOLDER: &str = "[file]";
pub const BASE_PLACEHOLDER: &str = "[base]";
pub const NAME_PLACEHOLDER: &str = "[name]";
pub const PATH_PLACEHOLDER: &str = "[path]";
pub const EXT_PLACEHOLDER: &str = "[ext]";

lazy_static! {
    static ref HASH_PLACEHOLDER: Regex =
        Regex::new(r"\[hash(?::(base64|hex))?(?::(\d+))?\]").expect("Invalid regex");
    // Characters that may leak in from [path] or an exotic template but are
    // not valid inside a CSS ident.
    static ref ESCAPE_IDENT_REGEX: Regex =
        Regex::new(r#"[<>:"/\\|?*\.]"#).expect("Invalid regex");
}

/// A validated local-name template. Construction fails without a `[local]`
/// placeholder, since expansion would then collapse every selector of a
/// file onto one ident.
#[derive(Debug, Clone)]
pub struct NameTemplate {
    template: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PathData<'a> {
    pub filename: Option<&'a str>,
    pub content: Option<&'a str>,
}

impl<'a> PathData<'a> {
    pub fn filename(mut self, v: &'a str) -> Self {
        self.filename = Some(v);
        self
    }

    pub fn content(mut self, v: &'a str) -> Self {
        self.content = Some(v);
        self
    }
}

impl NameTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, ScopeError> {
        let template = template.into();
        if !template.contains(LOCAL_PLACEHOLDER) {
            return Err(ScopeError::InvalidTemplate { template });
        }
        Ok(Self { template })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Expand the template. Path placeholders resolve from `data.filename`,
    /// hash placeholders from a SHA-256 digest of `data.content`, and
    /// `[local]` is substituted last so a selector literally named "name"
    /// or "hash" cannot corrupt the other placeholders.
    pub fn render(&self, data: PathData, local: &str) -> String {
        let mut out = self.template.clone();

        if let Some(filename) = data.filename {
            let file = Path::new(filename);
            out = out.replace(FILE_PLACEHOLDER, filename);
            out = out.replace(
                EXT_PLACEHOLDER,
                &file
                    .extension()
                    .map(|p| format!(".{}", p.to_string_lossy()))
                    .unwrap_or_default(),
            );
            if let Some(base) = file.file_name().map(|p| p.to_string_lossy()) {
                out = out.replace(BASE_PLACEHOLDER, &base);
            }
            if let Some(name) = file.file_stem().map(|p| p.to_string_lossy()) {
                out = out.replace(NAME_PLACEHOLDER, &name);
            }
            out = out.replace(
                PATH_PLACEHOLDER,
                &file
                    .parent()
                    .map(|p| p.to_string_lossy())
                    .filter(|p| !p.is_empty())
                    .map(|p| p.into_owned() + "/")
                    .unwrap_or_default(),
            );
        }

        if HASH_PLACEHOLDER.is_match(&out) {
            let digest = ContentDigest::of(data.content.unwrap_or_default().as_bytes());
            out = HASH_PLACEHOLDER
                .replace_all(&out, |caps: &Captures| {
                    let encoding = caps
                        .get(1)
                        .and_then(|m| DigestEncoding::parse(m.as_str()))
                        .unwrap_or(DigestEncoding::Hex);
                    let length = caps
                        .get(2)
                        .and_then(|m| m.as_str().parse().ok())
                        .unwrap_or(usize::MAX);
                    digest.rendered(encoding, length)
                })
                .into_owned();
        }

        out = out.replace(LOCAL_PLACEHOLDER, local);
        ESCAPE_IDENT_REGEX.replace_all(&out, "-").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_template_without_local_placeholder() {
        let err = NameTemplate::new("[name]_[hash:base64:5]").unwrap_err();
        assert!(matches!(err, ScopeError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_renders_path_placeholders() {
        let template = NameTemplate::new("[name]__[local]").unwrap();
        let rendered = template.render(
            PathData::default().filename("/app/src/Button.module.css"),
            "btn",
        );
        assert_eq!(rendered, "Button-module__btn");
    }

    #[test]
    fn test_hash_placeholder_respects_encoding_and_length() {
        let template = NameTemplate::new("[local]_[hash:base64:5]").unwrap();
        let a = template.render(
            PathData::default().filename("/a.css").content(".btn {}"),
            "btn",
        );
        let b = template.render(
            PathData::default().filename("/a.css").content(".btn {}"),
            "btn",
        );
        assert_eq!(a, b);
        assert!(a.starts_with("btn_"));
        // 5 digest chars, plus one for the `_` digit guard at most.
        let digest = &a["btn_".len()..];
        assert!(digest.len() == 5 || digest.len() == 6);
    }

    #[test]
    fn test_local_substituted_after_name() {
        // A selector named "name" must not be clobbered by [name] expansion.
        let template = NameTemplate::new("[name]_[local]").unwrap();
        let rendered = template.render(PathData::default().filename("/app/Card.css"), "name");
        assert_eq!(rendered, "Card_name");
    }

    #[test]
    fn test_sanitizes_ident_unsafe_characters() {
        let template = NameTemplate::new("[path][name]_[local]").unwrap();
        let rendered = template.render(PathData::default().filename("src/ui/Card.css"), "title");
        assert!(!rendered.contains('/'));
        assert_eq!(rendered, "src-ui-Card_title");
    }
}
