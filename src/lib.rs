//! osm-dash crate
//!
//! This crate is an implementation detail of the `osm-dash` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.

#[doc(hidden)]
pub mod client;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod loading;

#[doc(hidden)]
pub mod metrics;

#[doc(hidden)]
pub mod misc;

#[doc(hidden)]
pub mod reports;

#[doc(hidden)]
pub mod view;

pub use crate::commands::{Host, run};
