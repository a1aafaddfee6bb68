//! Headless client for the tactics engine.
//!
//! The binary is the composition root: it reads [`ClientConfig`] from the
//! environment, loads content, and drives a [`tactics_runtime::Runtime`]
//! with a [`HeadlessScene`] standing in for a real frontend.

pub mod config;
pub mod headless;

pub use config::ClientConfig;
pub use headless::{DEFAULT_LEVEL, HeadlessScene, parse_intent, parse_script, render};
