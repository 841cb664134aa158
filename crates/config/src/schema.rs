use hud_core::ConstructionSite;
use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `hud.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Host-wide settings.
    pub global: GlobalConfig,
    /// Which overlays are shown.
    pub overlays: OverlayConfig,
    /// Where the host's icon row starts.
    pub icons: IconRowConfig,
    /// Initial state of the simulated world.
    pub scenario: ScenarioConfig,
}

/// Host-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Locale code for tooltip text, e.g. `"en"` or `"de"`.
    pub locale: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Frames rendered per simulated day.
    pub frames_per_day: u32,
    /// Wall-clock time between frames (milliseconds).
    pub frame_interval_ms: u64,
    /// Simulated days to run; `0` runs until interrupted.
    pub days: u32,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            locale:            "en".to_string(),
            log_level:         "info".to_string(),
            frames_per_day:    4,
            frame_interval_ms: 250,
            days:              10,
        }
    }
}

/// Overlay toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Show the construction status icon.
    pub construction_status: bool,
    /// Character whose sprite sheet provides the icon.
    pub builder: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            construction_status: true,
            builder:             "Robin".to_string(),
        }
    }
}

/// Layout of the host's icon row.  Icons are laid out right to left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct IconRowConfig {
    /// X of the first (right-most) icon.
    pub origin_x: i32,
    /// Y shared by every icon in the row.
    pub origin_y: i32,
    /// Horizontal distance between neighbouring icons.
    pub spacing: i32,
}

impl Default for IconRowConfig {
    fn default() -> Self {
        Self {
            origin_x: 1210,
            origin_y: 260,
            spacing:  48,
        }
    }
}

/// Initial world state for the headless host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub days_until_house_upgrade: i32,
    pub construction: Option<ConstructionSite>,
    /// Texture handle for the builder's sprite sheet; `None` = sprite missing.
    pub builder_texture: Option<u64>,
    /// Fixed pointer position `[x, y]`.
    pub pointer: [i32; 2],
    /// Days (1-based) on which a cutscene covers the screen.
    pub cinematic_days: Vec<u32>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            days_until_house_upgrade: 0,
            construction: Some(ConstructionSite {
                days_of_construction_left: 3,
                days_until_available:      4,
            }),
            builder_texture: Some(1),
            pointer:         [1230, 280],
            cinematic_days:  Vec::new(),
        }
    }
}
