//! Application configuration with TOML file support.
//!
//! Every section uses `#[serde(default)]`, so a partial file (only
//! overriding `[tracking]`, say) loads with defaults for the rest.

use std::path::Path;
use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraPose, ClipPlanes, FirstPersonNavigator, ProjectionKind, ScreenGeometry};
use crate::error::{Error, Result};
use crate::tracking::TrackerVariant;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub tracking: TrackingConfig,
    pub scene: SceneConfig,
}

/// Window size and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Parallax Window".to_string(),
        }
    }
}

impl WindowConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Initial camera pose, projection, and navigation speeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fovy: f32,
    pub projection: ProjectionKind,
    pub near: f32,
    pub far: f32,
    /// World units per second
    pub move_speed: f32,
    /// Radians per pixel
    pub look_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(4.0, 2.0, 4.0),
            target: Vec3::new(0.0, 1.8, 0.0),
            up: Vec3::Y,
            fovy: 60.0,
            projection: ProjectionKind::Perspective,
            near: 0.1,
            far: 100.0,
            move_speed: 5.0,
            look_sensitivity: 0.003,
        }
    }
}

impl CameraConfig {
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            target: self.target,
            up: self.up,
            fovy: self.fovy,
            projection: self.projection,
        }
    }

    pub fn clip(&self) -> ClipPlanes {
        ClipPlanes::new(self.near, self.far)
    }

    pub fn navigator(&self) -> FirstPersonNavigator {
        FirstPersonNavigator::new(self.move_speed, self.look_sensitivity)
    }
}

/// Head tracking parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackingConfig {
    /// Start the tracker at all. Disabled means permanent degraded mode.
    pub enabled: bool,
    /// Capture device index
    pub device_index: u32,
    pub variant: TrackerVariant,
    /// No new sample for this long marks the feed stale
    pub stale_after_ms: u64,
    /// World units per screen height applied to the eye offset
    pub offset_scale: f32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            device_index: 0,
            variant: TrackerVariant::Dnn,
            stale_after_ms: 1000,
            offset_scale: 1.0,
        }
    }
}

impl TrackingConfig {
    pub fn stale_after(&self) -> Duration {
        Duration::from_millis(self.stale_after_ms)
    }
}

/// Room generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub columns: usize,
    /// Fixed seed for a reproducible room; random when absent
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self { columns: 20, seed: None }
    }
}

impl SceneConfig {
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

impl AppConfig {
    /// Parse TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::ConfigParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Screen geometry handed to the tracking subsystem: window aspect,
    /// near plane, and a viewing distance matching the camera FOV.
    pub fn screen_geometry(&self) -> ScreenGeometry {
        ScreenGeometry::from_fov(self.window.aspect_ratio(), self.camera.near, self.camera.fovy.to_radians())
    }

    /// Reject values the camera model cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if !self.camera.clip().is_valid() {
            return Err(Error::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.camera.near, self.camera.far
            )));
        }
        if !(self.camera.fovy > 0.0 && self.camera.fovy < 180.0) {
            return Err(Error::InvalidConfig(format!(
                "fovy must be in (0, 180) degrees, got {}",
                self.camera.fovy
            )));
        }
        if !self.camera.pose().has_valid_up() {
            return Err(Error::InvalidConfig(
                "camera up must not be parallel to the view direction".to_string(),
            ));
        }
        if !(self.tracking.offset_scale > 0.0 && self.tracking.offset_scale.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "tracking offset_scale must be positive, got {}",
                self.tracking.offset_scale
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
