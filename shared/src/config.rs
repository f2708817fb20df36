use serde::{Deserialize, Serialize};

/// Playback settings read by the audio side. The simulation core never
/// touches these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explosion loudness, kept within `0.0..=1.0`.
    pub volume: f64,
    pub sound: bool,
}

impl Config {
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn toggle_sound(&mut self) {
        self.sound = !self.sound;
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            volume: 0.3,
            sound: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut config = Config::default();

        config.set_volume(1.7);
        assert_eq!(config.volume, 1.0);

        config.set_volume(-0.4);
        assert_eq!(config.volume, 0.0);

        config.set_volume(0.65);
        assert_eq!(config.volume, 0.65);
    }
}
