// config.rs - Viewer configuration, loaded from an optional JSON file
use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Airplane motion parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub start_position: Vec3,
    pub figure_eight_radius: f32,
    /// Angular rate of the figure-eight parameter (rad/s)
    pub figure_eight_speed: f32,
    /// Manual flight speed (units/s)
    pub speed: f32,
    /// Degrees of heading change per pixel of pointer motion
    pub sensitivity: f32,
    /// Manual mode flies forward without input
    pub cruise: bool,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(5.0, 7.0, 5.0),
            figure_eight_radius: 5.0,
            figure_eight_speed: 0.2,
            speed: 2.5,
            sensitivity: 0.1,
            cruise: false,
            yaw: -90.0,
            pitch: 0.0,
        }
    }
}

/// Free-fly camera and projection parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub start_position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(12.0, 2.0, 12.0),
            yaw: -90.0,
            pitch: 0.0,
            speed: 2.5,
            sensitivity: 0.1,
            zoom: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Flight Viewer".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Scene layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Spacing of the cube/light grid
    pub spacing: f32,
    /// Half extent of the floor plane
    pub floor_extent: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spacing: 10.0,
            floor_extent: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowConfig,
    pub flight: FlightConfig,
    pub camera: CameraConfig,
    pub scene: SceneConfig,
}

impl ViewerConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid viewer configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to load {}", path.display()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize viewer configuration")
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.window.width > 0 && self.window.height > 0,
            "Window size must be non-zero, got {}x{}",
            self.window.width,
            self.window.height
        );
        anyhow::ensure!(
            self.camera.near > 0.0 && self.camera.far > self.camera.near,
            "Camera clip planes must satisfy 0 < near < far, got near={} far={}",
            self.camera.near,
            self.camera.far
        );
        anyhow::ensure!(
            self.flight.start_position.is_finite(),
            "Airplane start position must be finite"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.flight.start_position, Vec3::new(5.0, 7.0, 5.0));
        assert_eq!(config.flight.figure_eight_radius, 5.0);
        assert_eq!(config.flight.figure_eight_speed, 0.2);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = ViewerConfig::from_json(
            r#"{ "flight": { "speed": 4.0, "start_position": [1.0, 2.0, 3.0] }, "window": { "width": 1024 } }"#,
        )
        .unwrap();

        assert_eq!(config.flight.speed, 4.0);
        assert_eq!(config.flight.start_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.flight.sensitivity, 0.1);
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
    }

    #[test]
    fn round_trips_through_json() {
        let mut config = ViewerConfig::default();
        config.flight.cruise = true;
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ViewerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_bad_clip_planes() {
        let err = ViewerConfig::from_json(r#"{ "camera": { "near": 5.0, "far": 1.0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("clip planes"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ViewerConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ViewerConfig::load(Path::new("/nonexistent/viewer.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/viewer.json"));
    }
}
