//! An in-memory hierarchical filesystem and a small script runner around it.
//!
//! The [`filesystem`] module holds the tree engine; everything else turns YAML scripts
//! into commands, runs them through a [`shell::Shell`] and renders the results.

#![allow(clippy::enum_variant_names, clippy::module_inception)]

pub mod application;
pub mod cli;
pub mod filesystem;
pub mod script;
pub mod shell;
