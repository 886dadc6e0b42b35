// ============================================================================
// EMOTION GARDEN - Particles, swaying grass and hidden messages
// ============================================================================
//
// scene/   what the host controls: viewport, emotion, intensity, phase
// sim/     entity collections and the GardenWorld that steps them
// render/  draws a world onto any Canvas implementation
// content  message bank lookup
// web      wasm32 host: canvas backend, frame loop, decay timer

pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod scene;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{GardenConfig, PlacementConfig};
pub use content::{MessageBank, MessageChoice, Tier};
pub use error::{GardenError, Result};
pub use render::{draw_frame, Canvas};
pub use scene::{Emotion, Phase, Rgba, SceneState, ShapeKind, Viewport};
pub use sim::{FoundMessage, GardenWorld};
