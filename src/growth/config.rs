//! Growth configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Parameters controlling ivy growth, ribbon meshing, and leaf placement.
///
/// Read-only during a generation run. Defaults match the tool's shipped
/// settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    /// Target distance between consecutive waypoints; also the reach of
    /// every fallback ray
    pub segment_length: f32,
    /// Full width of the generated ribbon
    pub strip_width: f32,
    /// Branches grown per patch
    pub branch_count: u32,
    /// Extension iterations per branch. A stalled iteration still counts,
    /// and obstruction midpoints can push the waypoint count past this.
    pub segment_count: u32,
    /// Hover distance of waypoints above the queried surface
    pub surface_offset: f32,
    /// Maximum per-step wander, degrees either way
    pub direction_change_range: f32,
    /// Whether leaves are placed at all
    pub leaf_enabled: bool,
    /// Chance in [0, 100] that a ribbon vertex sprouts a leaf
    pub leaf_probability: f32,
    /// Maximum leaf twist about its up axis, degrees either way
    pub leaf_max_twist: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            segment_length: 1.0,
            strip_width: 0.4,
            branch_count: 3,
            segment_count: 30,
            surface_offset: 0.1,
            direction_change_range: 20.0,
            leaf_enabled: true,
            leaf_probability: 60.0,
            leaf_max_twist: 100.0,
        }
    }
}

impl GrowthConfig {
    /// Save as pretty JSON (sync)
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Settings(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file (sync). Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| Error::Settings(e.to_string()))
    }
}
