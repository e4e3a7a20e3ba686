//! Core library for excaclean.
//!
//! The filtering rule and the tree walkers live here so that embedding
//! callers (e.g. a sync pipeline that cleans notes before upload) share the
//! exact same behavior as the command-line tool.

pub mod cli;
pub mod clipboard;
pub mod core;
pub mod modes;
