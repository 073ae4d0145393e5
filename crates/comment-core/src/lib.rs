#![warn(missing_docs)]
//! Comment Core - Headless Comment-Toggling Kernel
//!
//! # Overview
//!
//! `comment-core` decides whether selected regions of a document are commented and
//! produces the minimal text edits to toggle them. It is a building block for editor
//! commands, not an editor: rendering, key binding, persistence, and language
//! detection all belong to the host. Comment tokens are supplied per invocation
//! through an injected lookup, so the kernel itself is language-agnostic.
//!
//! # Core Features
//!
//! - **Line comments**: one shared alignment column across multi-line regions, blank
//!   lines skipped, partial comment coverage treated as uncommented
//! - **Block comments**: open/close tokens with margin tracking, so uncommenting
//!   strips exactly the padding that commenting inserted
//! - **Multiple regions**: independent classification, one atomic edit batch
//! - **Position mapping**: selections and later edits survive earlier edits in the
//!   same batch
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface (EditorState::execute)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Commenters (line / block classification)   │  ← Decision + edit generation
//! ├─────────────────────────────────────────────┤
//! │  Edit Batch (atomic apply, position maps)   │  ← Cross-edit bookkeeping
//! ├─────────────────────────────────────────────┤
//! │  Line Ranges & Scanning Primitives          │  ← Pure text predicates
//! ├─────────────────────────────────────────────┤
//! │  Document (Rope-based line access)          │  ← Snapshot storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use comment_core::{CommentCommand, CommentConfig, EditorState, Region, SelectionSet};
//!
//! let selections = SelectionSet::single(Region::new(0, 8));
//! let mut state = EditorState::new("  indent\nplain", selections);
//! let config = CommentConfig::line("//");
//!
//! // Toggle comments on, then back off.
//! assert!(state.execute(CommentCommand::ToggleLineComment, &config));
//! assert_eq!(state.document().get_text(), "  // indent\nplain");
//!
//! assert!(state.execute(CommentCommand::ToggleLineComment, &config));
//! assert_eq!(state.document().get_text(), "  indent\nplain");
//! ```
//!
//! # Module Description
//!
//! - [`scan`] - whitespace/token scanning primitives
//! - [`document`] - rope-backed document snapshot and line access
//! - [`line_range`] - region-to-line extraction
//! - [`selection_set`] - regions, orientation, and normalization
//! - [`edit`] - atomic edit batches and position mapping
//! - [`commenter`] - line/block comment classification and edit generation
//! - [`commands`] - the six user-facing commands and token-lookup injection
//!
//! # Error Model
//!
//! Nothing in the kernel returns an error in normal operation: every failure case
//! (no comment tokens for the language, a force command that is already satisfied,
//! nothing to act on) is an absent edit batch, surfaced by the command layer as a
//! `false` return with the document untouched.

pub mod commands;
pub mod commenter;
pub mod document;
pub mod edit;
pub mod line_ending;
pub mod line_range;
pub mod scan;
pub mod selection_set;

pub use commands::{CommentCommand, CommentProvider, EditorState, RegistryProvider};
pub use commenter::{BlockCommenter, BlockWitness, CommentOption, DEFAULT_MARGIN, LineCommenter};
pub use document::{Document, Line};
pub use edit::{Assoc, Edit, EditBatch};
pub use line_ending::LineEnding;
pub use line_range::region_lines;
pub use selection_set::{Region, SelectionSet};

pub use comment_core_lang::{CommentConfig, LanguageRegistry};
