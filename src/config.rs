//! Runtime-overridable carousel parameters.
//!
//! The values start from the command line and can then be replaced one at a
//! time from the numeric inputs under the carousel. There is no cross-field
//! validation: a frame size larger than the image list is accepted, and so is
//! a step of zero.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown config field '{0}'")]
    UnknownField(String),

    #[error("value '{value}' for '{field}' is not a number")]
    NotANumber { field: ConfigField, value: String },
}

/// Names of the four overridable parameters, spelled the way the inputs
/// submit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Step,
    FrameSize,
    ItemWidth,
    AnimationDuration,
}

impl ConfigField {
    pub const ALL: [ConfigField; 4] = [
        ConfigField::ItemWidth,
        ConfigField::FrameSize,
        ConfigField::Step,
        ConfigField::AnimationDuration,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConfigField::Step              => "step",
            ConfigField::FrameSize         => "frameSize",
            ConfigField::ItemWidth         => "itemWidth",
            ConfigField::AnimationDuration => "animationDuration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigField::Step              => "Step:",
            ConfigField::FrameSize         => "Frame size:",
            ConfigField::ItemWidth         => "Item width:",
            ConfigField::AnimationDuration => "Animation duration:",
        }
    }

    /// `(min, max)` hints shown next to the input. They are never enforced.
    pub fn bounds(self, image_count: usize) -> (f64, Option<f64>) {
        match self {
            ConfigField::ItemWidth         => (1.0, None),
            ConfigField::FrameSize         => (1.0, Some(image_count as f64)),
            ConfigField::Step              => (1.0, Some(image_count as f64)),
            ConfigField::AnimationDuration => (0.0, None),
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConfigField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step"              => Ok(ConfigField::Step),
            "frameSize"         => Ok(ConfigField::FrameSize),
            "itemWidth"         => Ok(ConfigField::ItemWidth),
            "animationDuration" => Ok(ConfigField::AnimationDuration),
            other               => Err(ConfigError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub step: f64,
    pub frame_size: f64,
    pub item_width: f64,
    /// Total move duration in milliseconds.
    pub animation_duration: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            frame_size: DEFAULT_FRAME_SIZE,
            item_width: DEFAULT_ITEM_WIDTH,
            animation_duration: DEFAULT_ANIMATION_DURATION,
        }
    }
}

impl CarouselConfig {
    pub fn get(&self, field: ConfigField) -> f64 {
        match field {
            ConfigField::Step              => self.step,
            ConfigField::FrameSize         => self.frame_size,
            ConfigField::ItemWidth         => self.item_width,
            ConfigField::AnimationDuration => self.animation_duration,
        }
    }

    pub fn set(&mut self, field: ConfigField, value: f64) {
        let slot = match field {
            ConfigField::Step              => &mut self.step,
            ConfigField::FrameSize         => &mut self.frame_size,
            ConfigField::ItemWidth         => &mut self.item_width,
            ConfigField::AnimationDuration => &mut self.animation_duration,
        };
        *slot = value;
    }

    /// Parses `value` and stores it in the slot named by `name`.
    ///
    /// Anything that does not parse to a finite number is rejected and the
    /// config is left untouched.
    pub fn apply_change(&mut self, name: &str, value: &str) -> Result<ConfigField, ConfigError> {
        let field: ConfigField = name.parse()?;
        let number = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ConfigError::NotANumber { field, value: value.to_string() })?;

        self.set(field, number);
        Ok(field)
    }

    /// Width of the visible frame in pixels.
    pub fn frame_width(&self) -> f64 {
        self.frame_size * self.item_width
    }

    /// Distance covered by one move.
    pub fn move_distance(&self) -> f64 {
        self.item_width * self.step
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn change_updates_only_the_named_field() {
        for field in ConfigField::ALL {
            let mut config = CarouselConfig::default();
            let before = config;

            let changed = config.apply_change(field.name(), "42").unwrap();
            assert_eq!(changed, field);
            assert_eq!(config.get(field), 42.0);

            for other in ConfigField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(config.get(other), before.get(other), "{other} changed");
            }
        }
    }

    #[test]
    fn accepts_fractional_and_padded_values() {
        let mut config = CarouselConfig::default();
        config.apply_change("itemWidth", " 120.5 ").unwrap();
        assert_eq!(config.item_width, 120.5);
    }

    #[test]
    fn rejects_non_numeric_values_without_touching_state() {
        let mut config = CarouselConfig::default();
        let err = config.apply_change("step", "abc").unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber { field: ConfigField::Step, value: "abc".to_string() }
        );
        assert!(config.apply_change("step", "NaN").is_err());
        assert!(config.apply_change("step", "inf").is_err());
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn rejects_unknown_fields() {
        let mut config = CarouselConfig::default();
        let err = config.apply_change("speed", "3").unwrap_err();
        assert_eq!(err, ConfigError::UnknownField("speed".to_string()));
        assert_eq!(config, CarouselConfig::default());
    }

    #[test]
    fn bounds_are_not_enforced() {
        let mut config = CarouselConfig::default();
        config.apply_change("frameSize", "100").unwrap();
        config.apply_change("step", "-2").unwrap();
        assert_eq!(config.frame_size, 100.0);
        assert_eq!(config.step, -2.0);
        assert_eq!(ConfigField::FrameSize.bounds(6), (1.0, Some(6.0)));
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in ConfigField::ALL {
            assert_eq!(field.name().parse::<ConfigField>().unwrap(), field);
        }
    }
}
