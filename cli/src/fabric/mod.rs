//! # bpmig Fabric Pipelines (`fabric`)
//!
//! File: cli/src/fabric/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The pipelines that do bpmig's actual work. They talk to the controller only
//! through `&dyn common::controller::Controller` and report through
//! `&dyn common::ui::progress::ProgressSink`, so each run owns its data and
//! nothing is shared between runs.
//!
//! ## Read path: configuration extraction
//!
//! - **`splitter`**: cuts a rendered config at the configlet markers.
//! - **`collector`**: fetches pristine/rendered config for one switch.
//! - **`archive`**: lays the bundles out on disk and packs a `.tgz`.
//! - **`extract`**: runs the collector over every switch, then archives.
//!
//! ## Write path: blueprint migration
//!
//! - **`model`**: snapshot, node, relationship and creation spec types.
//! - **`export`**: captures a blueprint graph as a snapshot.
//! - **`transform`**: rewrites a snapshot into a creation spec.
//! - **`create`**: validates, transforms and submits a snapshot.
//!

pub mod archive;
pub mod collector;
pub mod create;
pub mod export;
pub mod extract;
pub mod model;
pub mod splitter;
pub mod transform;
