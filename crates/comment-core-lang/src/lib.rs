#![warn(missing_docs)]
//! `comment-core-lang` - data-driven comment-token configuration for `comment-core`.
//!
//! The commenting kernel is language-agnostic: it receives the tokens to work with on
//! every invocation and never consults ambient state. This crate provides the small
//! value types hosts use to describe those tokens per language, plus a registry for
//! hosts that key configuration off a language identifier.

use std::collections::HashMap;

/// Comment tokens for a single language.
///
/// Either style may be absent; an absent style means the corresponding commands
/// are unsupported for that language and must no-op.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment open token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment close token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// A config supporting only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// A config supporting only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// A config supporting both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Returns `true` if a non-empty line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured and non-empty.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// The line comment token, if usable.
    pub fn line_token(&self) -> Option<&str> {
        if self.has_line() { self.line.as_deref() } else { None }
    }

    /// The block comment token pair, if usable.
    pub fn block_tokens(&self) -> Option<(&str, &str)> {
        if self.has_block() {
            Some((self.block_start.as_deref()?, self.block_end.as_deref()?))
        } else {
            None
        }
    }
}

/// Maps language identifiers (e.g. `"rust"`, `"python"`) to comment configs.
///
/// Hosts that track a per-document language id can use this as their lookup backend;
/// hosts with richer language services (per-position injection, etc.) can ignore it
/// and resolve configs themselves.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    configs: HashMap<String, CommentConfig>,
}

impl LanguageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with configs for a handful of common languages.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("rust", CommentConfig::line_and_block("//", "/*", "*/"));
        registry.register("c", CommentConfig::line_and_block("//", "/*", "*/"));
        registry.register("cpp", CommentConfig::line_and_block("//", "/*", "*/"));
        registry.register("javascript", CommentConfig::line_and_block("//", "/*", "*/"));
        registry.register("typescript", CommentConfig::line_and_block("//", "/*", "*/"));
        registry.register("go", CommentConfig::line_and_block("//", "/*", "*/"));
        registry.register("python", CommentConfig::line("#"));
        registry.register("shell", CommentConfig::line("#"));
        registry.register("toml", CommentConfig::line("#"));
        registry.register("yaml", CommentConfig::line("#"));
        registry.register("lua", CommentConfig::line_and_block("--", "--[[", "]]"));
        registry.register("sql", CommentConfig::line_and_block("--", "/*", "*/"));
        registry.register("html", CommentConfig::block("<!--", "-->"));
        registry.register("xml", CommentConfig::block("<!--", "-->"));
        registry.register("css", CommentConfig::block("/*", "*/"));
        registry
    }

    /// Register (or replace) the config for a language id.
    pub fn register(&mut self, language: impl Into<String>, config: CommentConfig) {
        self.configs.insert(language.into(), config);
    }

    /// Look up the config for a language id.
    pub fn get(&self, language: &str) -> Option<&CommentConfig> {
        self.configs.get(language)
    }

    /// Look up the config for a language id, defaulting to an empty config.
    ///
    /// An empty config makes every comment command a no-op, which is the required
    /// behavior for unknown languages.
    pub fn get_or_empty(&self, language: &str) -> CommentConfig {
        self.configs.get(language).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_only_config() {
        let config = CommentConfig::line("#");
        assert!(config.has_line());
        assert!(!config.has_block());
        assert_eq!(config.line_token(), Some("#"));
        assert_eq!(config.block_tokens(), None);
    }

    #[test]
    fn test_block_only_config() {
        let config = CommentConfig::block("<!--", "-->");
        assert!(!config.has_line());
        assert!(config.has_block());
        assert_eq!(config.block_tokens(), Some(("<!--", "-->")));
    }

    #[test]
    fn test_empty_tokens_are_unusable() {
        let config = CommentConfig::line("");
        assert!(!config.has_line());
        assert_eq!(config.line_token(), None);

        let config = CommentConfig::block("/*", "");
        assert!(!config.has_block());
        assert_eq!(config.block_tokens(), None);
    }

    #[test]
    fn test_registry_defaults() {
        let registry = LanguageRegistry::with_defaults();
        assert_eq!(
            registry.get("rust"),
            Some(&CommentConfig::line_and_block("//", "/*", "*/"))
        );
        assert_eq!(registry.get("python"), Some(&CommentConfig::line("#")));
        assert_eq!(registry.get("unknown-language"), None);
        assert_eq!(registry.get_or_empty("unknown-language"), CommentConfig::default());
    }

    #[test]
    fn test_registry_register_overrides() {
        let mut registry = LanguageRegistry::with_defaults();
        registry.register("python", CommentConfig::line("##"));
        assert_eq!(registry.get("python"), Some(&CommentConfig::line("##")));
    }
}
