//! Agent configuration loading and validation.

use std::collections::BTreeSet;
use std::path::Path;

use forage_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::{ForageError, Result};

/// Top-level configuration, usually loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForageConfig {
    /// Config version
    pub version: Option<String>,

    /// Actuation, interaction and capability settings
    pub agent: AgentConfig,

    /// Shaping constants and event rewards
    pub reward: RewardConfig,

    /// Episode-start placement of the agent
    pub spawn: SpawnConfig,

    /// Environment scale and receptacle layout
    pub environment: EnvironmentConfig,

    /// Class ordinals the scorer emits, with display names
    pub categories: Vec<CategoryEntry>,
}

impl Default for ForageConfig {
    fn default() -> Self {
        Self {
            version: None,
            agent: AgentConfig::default(),
            reward: RewardConfig::default(),
            spawn: SpawnConfig::default(),
            environment: EnvironmentConfig::default(),
            categories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Training enables rewards and randomized spawns; freeze is only allowed outside training.
    pub training_mode: bool,

    /// Drained nodes yield tokens that must be delivered before foraging again.
    pub delivery_enabled: bool,

    /// Force applied per unit of movement action
    pub move_force: f32,

    /// Degrees per second at full pitch action
    pub pitch_speed: f32,

    /// Degrees per second at full yaw action
    pub yaw_speed: f32,

    pub max_pitch_deg: f32,

    /// Rate (per second) at which smoothed pitch/yaw approach the requested values
    pub rotation_smoothing: f32,

    /// Contacts farther than this from the interaction point are ignored
    pub interaction_radius: f32,

    /// Amount requested from a node per extraction contact
    pub feed_amount: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            training_mode: true,
            delivery_enabled: true,
            move_force: 2.0,
            pitch_speed: 100.0,
            yaw_speed: 100.0,
            max_pitch_deg: 80.0,
            rotation_smoothing: 2.0,
            interaction_radius: 0.008,
            feed_amount: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardConfig {
    /// Per-step distance/alignment shaping
    pub shaping_enabled: bool,

    /// Radius around the hover point where shaping switches from distance to alignment
    pub proximity_threshold: f32,

    /// k1: weight of the distance delta while outside the threshold
    pub distance_scale: f32,

    /// k2: weight of each alignment delta while inside the threshold
    pub alignment_scale: f32,

    /// Reward per unit of resource extracted
    pub extraction_scale: f32,

    /// Maximum extra reward for extracting while facing into the node
    pub alignment_bonus: f32,

    pub delivery_reward: f32,

    pub boundary_penalty: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            shaping_enabled: true,
            proximity_threshold: 0.5,
            distance_scale: 0.001,
            alignment_scale: 0.001,
            extraction_scale: 0.1,
            alignment_bonus: 0.02,
            delivery_reward: 0.1,
            boundary_penalty: -0.5,
        }
    }
}

/// Closed float interval used for random draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Candidate poses tried before giving up
    pub attempts: u32,

    /// Radius that must be free of colliders around a candidate
    pub clearance_radius: f32,

    /// Probability (training only) of spawning in front of a node
    pub in_front_chance: f32,

    /// Distance in front of a node, along its up axis
    pub front_distance: FloatRange,

    /// Height above the area centre for free-flight spawns
    pub height: FloatRange,

    /// Horizontal distance from the area centre for free-flight spawns
    pub radius: FloatRange,

    /// Initial pitch (degrees) for free-flight spawns
    pub pitch: FloatRange,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            attempts: 100,
            clearance_radius: 0.05,
            in_front_chance: 0.5,
            front_distance: FloatRange::new(0.1, 0.2),
            height: FloatRange::new(1.2, 2.5),
            radius: FloatRange::new(2.0, 7.0),
            pitch: FloatRange::new(-60.0, 60.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Scale used to normalize distances in observations
    pub area_diameter: f32,

    pub center: Vec3,

    /// Vertical spacing between stacked tokens
    pub receptacle_spacing: f32,

    /// Receptacles are placed at least this far from the centre
    pub receptacle_min_radius: f32,

    /// ... and at most `area_diameter * receptacle_radius_fraction`
    pub receptacle_radius_fraction: f32,

    /// Height above the centre from which receptacle placement probes for ground
    pub receptacle_probe_height: f32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            area_diameter: 20.0,
            center: Vec3::ZERO,
            receptacle_spacing: 0.02,
            receptacle_min_radius: 1.0,
            receptacle_radius_fraction: 0.375,
            receptacle_probe_height: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: i32,
    pub name: String,
}

impl ForageConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ForageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|source| ForageError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ForageError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let agent = &self.agent;
        let positive = [
            ("agent.move_force", agent.move_force),
            ("agent.pitch_speed", agent.pitch_speed),
            ("agent.yaw_speed", agent.yaw_speed),
            ("agent.max_pitch_deg", agent.max_pitch_deg),
            ("agent.rotation_smoothing", agent.rotation_smoothing),
            ("agent.interaction_radius", agent.interaction_radius),
            ("agent.feed_amount", agent.feed_amount),
            ("reward.proximity_threshold", self.reward.proximity_threshold),
            ("environment.area_diameter", self.environment.area_diameter),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be > 0, got {value}")));
            }
        }

        if agent.max_pitch_deg >= 90.0 {
            return Err(invalid(format!(
                "agent.max_pitch_deg must be < 90, got {}",
                agent.max_pitch_deg
            )));
        }

        let spawn = &self.spawn;
        if spawn.attempts == 0 {
            return Err(invalid("spawn.attempts must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&spawn.in_front_chance) {
            return Err(invalid(format!(
                "spawn.in_front_chance must be within [0, 1], got {}",
                spawn.in_front_chance
            )));
        }
        let ranges = [
            ("spawn.front_distance", spawn.front_distance),
            ("spawn.height", spawn.height),
            ("spawn.radius", spawn.radius),
            ("spawn.pitch", spawn.pitch),
        ];
        for (name, range) in ranges {
            if !range.is_valid() {
                return Err(invalid(format!(
                    "{name} must satisfy min <= max, got {}..{}",
                    range.min, range.max
                )));
            }
        }

        let mut seen = BTreeSet::new();
        for entry in &self.categories {
            if entry.id < 0 {
                return Err(invalid(format!(
                    "category '{}' has negative id {}",
                    entry.name, entry.id
                )));
            }
            if !seen.insert(entry.id) {
                return Err(invalid(format!("duplicate category id {}", entry.id)));
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> ForageError {
    ForageError::InvalidConfig(message)
}
