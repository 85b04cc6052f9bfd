//! # bpmig Archive Utilities Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Archive helpers shared by the pipelines. Currently a single submodule:
//!
//! - **`tar`**: builds gzipped TAR archives of a directory tree in memory.
//!

pub mod tar;
