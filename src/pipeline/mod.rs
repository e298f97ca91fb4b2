//! Repository classification and pipeline template selection.
//!
//! The flow mirrors the scaffolding wizard that embeds this crate:
//!
//! 1. [`language::classify_repository`] infers the repository's primary
//!    language from its top-level file names.
//! 2. [`selector::select_templates`] accumulates the base template table
//!    plus the inferred language's table, then narrows the union by the
//!    requested target type and kind.
//! 3. [`render`] substitutes `{{key}}` placeholders into the chosen
//!    template file.
//!
//! Template tables in [`catalog`] are `const` and never mutated; selection
//! is a pure function over them.

pub mod catalog;
pub mod language;
pub mod render;
pub mod selector;

pub use catalog::{PipelineTemplate, TargetFilter, TargetKind, TargetType};
pub use language::{analyze_repository, classify_repository, AnalysisResult, Language};
pub use render::{render_builtin, render_file, render_str};
pub use selector::{select_templates, templates_for_analysis};
