//! Slowlint core library.
//!
//! This crate exposes programmatic APIs for incrementally gating a codebase's
//! lint status: run an external linter across a file set, exclude permanently
//! and temporarily ignored files, and reconcile the recorded known-bad set
//! against the actual results.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `paths`: Path normalization relative to the working root, file sets.
//! - `ignore`: The permanent and temporary ignore lists, snapshot writing.
//! - `linter`: The injected `Linter` capability and external-process adapter.
//! - `report`: Good/bad/ignored arithmetic over one invocation.
//! - `engine`: The lint / check-drift / snapshot reconciliation modes.
//! - `output`: Human/JSON printers.
//! - `progress`: Optional pre-run file counting (UI only).
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod engine;
pub mod ignore;
pub mod linter;
pub mod models;
pub mod output;
pub mod paths;
pub mod progress;
pub mod report;
pub mod utils;
