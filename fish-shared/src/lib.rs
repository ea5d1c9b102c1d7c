#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use fish_core::{Fish, PathPreview, SchoolConfig, Vector2};
use serde::{Deserialize, Serialize};

/// A 2D position in screen coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for Position {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// What the renderer needs to draw one fish
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FishState {
    pub x: f32,
    pub y: f32,
    /// Heading in radians
    pub heading: f32,
    pub shill: bool,
}

impl From<&Fish> for FishState {
    fn from(fish: &Fish) -> Self {
        Self {
            x: fish.position.x,
            y: fish.position.y,
            heading: fish.heading(),
            shill: fish.is_shill(),
        }
    }
}

/// One rendered frame: every fish plus the shill's preview trail, if any
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub fish: Vec<FishState>,
    /// Starts at the shill's position; empty while the pointer is inactive
    pub preview: Vec<Position>,
}

impl FrameSnapshot {
    pub fn capture(frame: u64, fish: &[Fish], preview: Option<&PathPreview>) -> Self {
        let preview = match preview {
            Some(preview) => core::iter::once(preview.start())
                .chain(preview.iter())
                .map(Position::from)
                .collect(),
            None => Vec::new(),
        };

        Self {
            frame,
            fish: fish.iter().map(FishState::from).collect(),
            preview,
        }
    }

    #[cfg(feature = "std")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// School settings as loaded from a JSON file; missing fields take defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchoolSettings {
    pub fish_count: usize,
    pub speed: f32,
    pub max_turn_rate: f32,
    pub shill_influence: f32,
    pub repel_radius: f32,
    pub orient_radius: f32,
    pub attract_radius: f32,
    pub pointer_deadzone: f32,
    pub preview_steps: usize,
}

impl Default for SchoolSettings {
    fn default() -> Self {
        SchoolConfig::default().into()
    }
}

impl From<SchoolConfig> for SchoolSettings {
    fn from(config: SchoolConfig) -> Self {
        Self {
            fish_count: config.fish_count,
            speed: config.speed,
            max_turn_rate: config.max_turn_rate,
            shill_influence: config.shill_influence,
            repel_radius: config.repel_radius,
            orient_radius: config.orient_radius,
            attract_radius: config.attract_radius,
            pointer_deadzone: config.pointer_deadzone,
            preview_steps: config.preview_steps,
        }
    }
}

impl From<&SchoolSettings> for SchoolConfig {
    fn from(settings: &SchoolSettings) -> Self {
        Self {
            fish_count: settings.fish_count,
            speed: settings.speed,
            max_turn_rate: settings.max_turn_rate,
            shill_influence: settings.shill_influence,
            repel_radius: settings.repel_radius,
            orient_radius: settings.orient_radius,
            attract_radius: settings.attract_radius,
            pointer_deadzone: settings.pointer_deadzone,
            preview_steps: settings.preview_steps,
        }
    }
}

impl SchoolSettings {
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks the settings before a school is built from them.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fish_count == 0 {
            return Err(SettingsError::EmptySchool);
        }
        if !(self.speed > 0.0) {
            return Err(SettingsError::NonPositive("speed"));
        }
        if !(self.max_turn_rate > 0.0) {
            return Err(SettingsError::NonPositive("max_turn_rate"));
        }
        if !(self.repel_radius > 0.0
            && self.repel_radius < self.orient_radius
            && self.orient_radius < self.attract_radius)
        {
            return Err(SettingsError::RadiiOutOfOrder {
                repel: self.repel_radius,
                orient: self.orient_radius,
                attract: self.attract_radius,
            });
        }
        Ok(())
    }

    pub fn to_config(&self) -> SchoolConfig {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    EmptySchool,
    NonPositive(&'static str),
    RadiiOutOfOrder { repel: f32, orient: f32, attract: f32 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::EmptySchool => write!(f, "fish_count must be at least 1"),
            SettingsError::NonPositive(field) => write!(f, "{} must be positive", field),
            SettingsError::RadiiOutOfOrder {
                repel,
                orient,
                attract,
            } => write!(
                f,
                "zone radii must satisfy 0 < repel < orient < attract, got {} / {} / {}",
                repel, orient, attract
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SettingsError {}
