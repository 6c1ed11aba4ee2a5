//! Read-only view over the animation registry.
//!
//! The animation engine owns the registry of running animations and the
//! light ownership map. Reporting only ever sees them through
//! [`AnimationRegistry`], which has no mutating methods.

use serde::Serialize;

/// Display name of the activity sensor.
pub const ACTIVITY_SENSOR_NAME: &str = "Activity";

/// Unit reported alongside the active animation count.
pub const ACTIVITY_UNIT: &str = "active animation(s)";

/// Stable unique id of the activity sensor.
pub const ACTIVITY_SENSOR_UNIQUE_ID: &str = "animated_scenes_activity_sensor";

/// Query interface onto an externally owned animation registry.
pub trait AnimationRegistry {
    /// Names of the animations currently running.
    fn active_animations(&self) -> Vec<String>;

    /// Ids of the lights currently owned by a running animation.
    fn active_lights(&self) -> Vec<String>;

    fn active_count(&self) -> usize {
        self.active_animations().len()
    }
}

/// Point-in-time copy of the registry state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivitySnapshot {
    pub count: usize,
    pub active: Vec<String>,
    pub active_lights: Vec<String>,
}

impl ActivitySnapshot {
    /// Copy the registry state; key lists are sorted.
    pub fn capture(registry: &dyn AnimationRegistry) -> Self {
        let mut active = registry.active_animations();
        let mut active_lights = registry.active_lights();
        active.sort();
        active_lights.sort();

        Self {
            count: registry.active_count(),
            active,
            active_lights,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.count == 0
    }
}
