// scene/ - What the host tells the engine
//
// Viewport size, chosen emotion and intensity, and the session phase.
// Changes to these drive regeneration of the entity collections in sim/.

mod color;
mod emotion;

pub use color::Rgba;
pub use emotion::{Emotion, ShapeKind};

use std::str::FromStr;

use crate::error::GardenError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Welcome,
    Exploring,
    Results,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Welcome => "welcome",
            Phase::Exploring => "exploring",
            Phase::Results => "results",
        }
    }
}

impl FromStr for Phase {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Phase::Welcome),
            "exploring" => Ok(Phase::Exploring),
            "results" => Ok(Phase::Results),
            other => Err(GardenError::UnknownPhase(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub viewport: Viewport,
    pub emotion: Emotion,
    /// Always within [0, 1]
    pub intensity: f64,
    pub phase: Phase,
}

impl SceneState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            emotion: Emotion::Neutral,
            intensity: 0.5,
            phase: Phase::Welcome,
        }
    }

    pub fn is_exploring(&self) -> bool {
        self.phase == Phase::Exploring
    }
}

/// NaN maps to zero
pub fn clamp_intensity(intensity: f64) -> f64 {
    if intensity.is_nan() { 0.0 } else { intensity.clamp(0.0, 1.0) }
}
