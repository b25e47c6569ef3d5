//! Foundation types and traits for the Sandcraft GUI.
//!
//! This crate contains the renderer-agnostic types shared by all Sandcraft
//! crates: input events, backend trait definitions, image regions,
//! configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod input;
