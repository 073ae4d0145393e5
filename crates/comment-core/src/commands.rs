//! Command interface layer.
//!
//! Wraps the commenters in the six user-facing intents (toggle / force-comment /
//! force-uncomment, each in line and block style). Each command resolves comment
//! tokens for the primary region's position through an injected [`CommentProvider`],
//! plans an [`EditBatch`], applies it atomically, and remaps the selection set.
//!
//! There are no error conditions: every failure case (no tokens configured, the
//! single-direction command already satisfied, nothing to act on) surfaces as `false`
//! with the document untouched.
//!
//! # Example
//!
//! ```rust
//! use comment_core::{CommentCommand, CommentConfig, EditorState, Region, SelectionSet};
//!
//! let mut state = EditorState::new("foo", SelectionSet::single(Region::caret(0)));
//! let config = CommentConfig::line_and_block("//", "/*", "*/");
//!
//! assert!(state.execute(CommentCommand::ToggleLineComment, &config));
//! assert_eq!(state.document().get_text(), "// foo");
//!
//! assert!(state.execute(CommentCommand::ToggleLineComment, &config));
//! assert_eq!(state.document().get_text(), "foo");
//! ```

use crate::commenter::{BlockCommenter, CommentOption, LineCommenter};
use crate::document::Document;
use crate::edit::EditBatch;
use crate::selection_set::{Region, SelectionSet};
use comment_core_lang::{CommentConfig, LanguageRegistry};

/// The user-facing comment commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentCommand {
    /// Toggle line comments on the selected lines.
    ToggleLineComment,
    /// Add line comments; no-op if already commented.
    LineComment,
    /// Remove line comments; no-op if not commented.
    LineUncomment,
    /// Toggle a block comment around each selected region.
    ToggleBlockComment,
    /// Add block comments; no-op if already commented.
    BlockComment,
    /// Remove block comments; no-op if not commented.
    BlockUncomment,
}

impl CommentCommand {
    fn option(self) -> CommentOption {
        match self {
            Self::ToggleLineComment | Self::ToggleBlockComment => CommentOption::Toggle,
            Self::LineComment | Self::BlockComment => CommentOption::OnlyComment,
            Self::LineUncomment | Self::BlockUncomment => CommentOption::OnlyUncomment,
        }
    }

    fn is_block(self) -> bool {
        matches!(
            self,
            Self::ToggleBlockComment | Self::BlockComment | Self::BlockUncomment
        )
    }
}

/// Host-supplied comment-token lookup, injected per command invocation.
///
/// `offset` is the primary region's start, so hosts with per-position language
/// injection (embedded languages, mixed documents) can resolve accordingly. Returning
/// a config without the relevant token makes the command a no-op.
pub trait CommentProvider {
    /// Resolve the comment config applicable at `offset`.
    fn resolve(&self, state: &EditorState, offset: usize) -> CommentConfig;
}

/// A fixed config is itself a provider; useful for tests and single-language hosts.
impl CommentProvider for CommentConfig {
    fn resolve(&self, _state: &EditorState, _offset: usize) -> CommentConfig {
        self.clone()
    }
}

/// Provider backed by a [`LanguageRegistry`] and a per-document language id.
#[derive(Debug, Clone)]
pub struct RegistryProvider {
    /// The registry to consult.
    pub registry: LanguageRegistry,
    /// The language id of the current document.
    pub language: String,
}

impl RegistryProvider {
    /// A provider for `language` backed by `registry`.
    pub fn new(registry: LanguageRegistry, language: impl Into<String>) -> Self {
        Self {
            registry,
            language: language.into(),
        }
    }
}

impl CommentProvider for RegistryProvider {
    fn resolve(&self, _state: &EditorState, _offset: usize) -> CommentConfig {
        self.registry.get_or_empty(&self.language)
    }
}

/// An immutable document-plus-selection snapshot that comment commands operate on.
///
/// One command invocation reads the snapshot and produces at most one edit batch,
/// applied atomically: either every edit takes effect or the state is untouched.
#[derive(Debug, Clone)]
pub struct EditorState {
    document: Document,
    selections: SelectionSet,
    last_batch: Option<EditBatch>,
}

impl EditorState {
    /// Build a state from source text and a selection set.
    pub fn new(text: &str, selections: SelectionSet) -> Self {
        Self {
            document: Document::from_text(text),
            selections,
            last_batch: None,
        }
    }

    /// The current document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The current selection set.
    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    /// Replace the selection set.
    pub fn set_selections(&mut self, selections: SelectionSet) {
        self.selections = selections;
    }

    /// The batch applied by the most recent successful command, for hosts that relay
    /// structured edits (LSP sync, undo recording, etc.).
    pub fn last_batch(&self) -> Option<&EditBatch> {
        self.last_batch.as_ref()
    }

    /// Compute the edit batch a command would apply, without applying it.
    ///
    /// Returns `None` for every no-op case of the command layer.
    pub fn plan(
        &self,
        command: CommentCommand,
        provider: &dyn CommentProvider,
    ) -> Option<EditBatch> {
        let config = provider.resolve(self, self.selections.primary().from());
        let option = command.option();
        if command.is_block() {
            let (open, close) = config.block_tokens()?;
            BlockCommenter::new(open, close).toggle(option, self)
        } else {
            let token = config.line_token()?;
            LineCommenter::new(token).toggle(option, self)
        }
    }

    /// Execute a command: plan, apply the batch atomically, and remap the selection
    /// set through it. Returns whether an edit was applied.
    pub fn execute(&mut self, command: CommentCommand, provider: &dyn CommentProvider) -> bool {
        let Some(batch) = self.plan(command, provider) else {
            return false;
        };

        let regions: Vec<Region> = self
            .selections
            .regions()
            .iter()
            .map(|region| batch.map_region(region))
            .collect();
        let primary_index = self.selections.primary_index();

        batch.apply(&mut self.document);
        self.selections = SelectionSet::new(regions, primary_index);
        self.last_batch = Some(batch);
        true
    }
}
