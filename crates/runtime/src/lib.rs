//! Frame-based orchestration for the tactics engine.
//!
//! The crate wraps a [`tactics_core::World`] in a [`Runtime`] that advances
//! one frame at a time:
//! - [`phase`] defines the ordered frame phases and the context scenes see
//! - [`scene`] holds named scenes and the director that switches them
//! - [`intent`] queues player intents from whatever reads the input
//! - [`report`] summarises each frame for readers such as renderers and logs
pub mod error;
pub mod intent;
pub mod phase;
pub mod report;
pub mod runtime;
pub mod scene;

pub use error::{Result, RuntimeError};
pub use intent::{IntentQueue, PlayerIntent};
pub use phase::{FrameContext, Phase, SceneRequest};
pub use report::FrameReport;
pub use runtime::{Runtime, RuntimeBuilder};
pub use scene::{Scene, SceneDirector};
