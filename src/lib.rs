//! # doc-gauge
//!
//! A validation and scoring engine for LLM-facing documentation index files.
//!
//! doc-gauge ingests a curated Markdown link catalog of unknown quality and
//! produces a structural/content diagnosis against a five-level conformance
//! ladder plus a gated, three-dimension composite quality score. It never
//! generates or rewrites documents, never fetches URLs, and never fails:
//! every input — including binary garbage — yields a complete report.
//!
//! ## Pipeline
//!
//! ```text
//! ┌───────┐   ┌──────────┐   ┌────────┐   ┌─────────────┐   ┌────────┐
//! │ bytes │──▶│ Classify │──▶│ Parse  │──▶│ Validate    │──▶│ Score  │
//! └───────┘   │ kind+tier│   │ tree   │   │ + Patterns  │   │ 0–100  │
//!             └──────────┘   └────────┘   └─────────────┘   └────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use doc_gauge::{config::Config, pipeline};
//!
//! let report = pipeline::run_text("llms.txt", "# My Project\n", &Config::default());
//! println!("{} ({:?})", report.score.total, report.score.grade);
//! for diagnostic in &report.validation.diagnostics {
//!     println!("{}: {}", diagnostic.code.as_str(), diagnostic.message);
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Raw input and the typed document tree |
//! | [`classify`] | Document kind and token-budget tier |
//! | [`parse`] | Permissive structural parser + canonical rendering |
//! | [`canon`] | Canonical section vocabulary and ordering |
//! | [`diagnostics`] | Stable diagnostic code registry |
//! | [`validate`] | The L0–L4 conformance ladder |
//! | [`heuristics`] | Shared approximate text predicates |
//! | [`antipattern`] | The 22-pattern detector |
//! | [`score`] | Weighted, gated composite scoring |
//! | [`pipeline`] | bytes → [`pipeline::ValidationReport`] |
//! | [`config`] | Overridable tier/budget constants |
//! | [`batch`] | Parallel corpus validation |

pub mod antipattern;
pub mod batch;
pub mod canon;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod heuristics;
pub mod models;
pub mod parse;
pub mod pipeline;
pub mod score;
pub mod validate;
