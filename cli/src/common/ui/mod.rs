//! # bpmig UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal-facing helpers.
//!
//! - **`progress`**: the `ProgressSink` interface the pipelines report through,
//!   with a tracing/stderr implementation and an in-memory recorder.
//!

pub mod progress;
