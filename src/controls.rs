//! Interactive controls and how they turn into config changes.

use crate::config::{ConfigChange, VisualizerConfig};
use crate::sort::Algorithm;

pub const SPEED_STEP: u32 = 5;
pub const SIZE_STEP: usize = 10;

/// An input action, independent of the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ToggleRunning,
    Reset,
    SelectAlgorithm(Algorithm),
    FlipDirection,
    SpeedUp,
    SlowDown,
    Grow,
    Shrink,
    Screenshot,
}

impl Control {
    /// The config change this control requests, or None when it doesn't
    /// change the config or is locked during a run.
    ///
    /// Algorithm, direction and size are locked while sorting; speed, pause
    /// and reset are always available.
    pub fn to_change(self, config: &VisualizerConfig) -> Option<ConfigChange> {
        let locked = config.running;
        match self {
            Control::ToggleRunning => Some(ConfigChange::Running(!config.running)),
            Control::Reset => Some(ConfigChange::Reset),
            Control::SpeedUp => Some(ConfigChange::Speed(config.speed.saturating_add(SPEED_STEP))),
            Control::SlowDown => Some(ConfigChange::Speed(config.speed.saturating_sub(SPEED_STEP))),
            Control::SelectAlgorithm(algorithm) if !locked => {
                Some(ConfigChange::Algorithm(algorithm))
            }
            Control::FlipDirection if !locked => Some(ConfigChange::Direction(!config.ascending)),
            Control::Grow if !locked => {
                Some(ConfigChange::ArraySize(config.array_size.saturating_add(SIZE_STEP)))
            }
            Control::Shrink if !locked => {
                Some(ConfigChange::ArraySize(config.array_size.saturating_sub(SIZE_STEP)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_controls_map_to_changes() {
        let config = VisualizerConfig::default();
        assert_eq!(
            Control::ToggleRunning.to_change(&config),
            Some(ConfigChange::Running(true))
        );
        assert_eq!(
            Control::FlipDirection.to_change(&config),
            Some(ConfigChange::Direction(false))
        );
        assert_eq!(Control::Grow.to_change(&config), Some(ConfigChange::ArraySize(60)));
        assert_eq!(Control::SlowDown.to_change(&config), Some(ConfigChange::Speed(45)));
        assert_eq!(Control::Screenshot.to_change(&config), None);
    }

    #[test]
    fn shape_controls_are_locked_while_running() {
        let config = VisualizerConfig {
            running: true,
            ..VisualizerConfig::default()
        };
        assert_eq!(Control::SelectAlgorithm(Algorithm::Merge).to_change(&config), None);
        assert_eq!(Control::FlipDirection.to_change(&config), None);
        assert_eq!(Control::Shrink.to_change(&config), None);
        assert_eq!(Control::SpeedUp.to_change(&config), Some(ConfigChange::Speed(55)));
        assert_eq!(
            Control::ToggleRunning.to_change(&config),
            Some(ConfigChange::Running(false))
        );
    }
}
