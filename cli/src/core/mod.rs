//! # bpmig Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that the rest of
//! bpmig builds on:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{BpmigError, Result};
//! ```
//!
pub mod config;
pub mod error;
