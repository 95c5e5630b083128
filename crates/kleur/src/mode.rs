//! Color mode control.
//!
//! The [`ColorMode`] enum determines whether escape sequences are emitted:
//!
//! - `Off` - never colorize
//! - `Auto` - colorize only terminals with a color-capable `TERM` (default)
//! - `Force` - always colorize
//!
//! The mode can be seeded from the `KLEUR_COLOR` environment variable with
//! [`ColorMode::from_env`].

use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::env::{EnvReader, COLOR_VAR};
use crate::ParseModeError;

/// Controls whether decoration emits escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ColorMode {
    /// Never emit escape sequences.
    Off = 0,
    /// Emit escape sequences only for color-capable terminals.
    #[default]
    Auto = 1,
    /// Always emit escape sequences.
    Force = 2,
}

impl ColorMode {
    /// Reads the mode from `KLEUR_COLOR`.
    ///
    /// Returns `Ok(None)` when the variable is unset or empty.
    pub fn from_env(env: &dyn EnvReader) -> Result<Option<Self>, ParseModeError> {
        match env.var(COLOR_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse().map(Some),
            _ => Ok(None),
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => ColorMode::Off,
            2 => ColorMode::Force,
            _ => ColorMode::Auto,
        }
    }
}

impl FromStr for ColorMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "never" => Ok(ColorMode::Off),
            "auto" => Ok(ColorMode::Auto),
            "force" | "always" => Ok(ColorMode::Force),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// A [`ColorMode`] that can be swapped atomically while readers are active.
#[derive(Debug)]
pub struct ModeSwitch(AtomicU8);

impl Default for ModeSwitch {
    fn default() -> Self {
        Self::new(ColorMode::default())
    }
}

impl ModeSwitch {
    /// Creates a switch holding `mode`.
    pub const fn new(mode: ColorMode) -> Self {
        Self(AtomicU8::new(mode as u8))
    }

    /// The currently stored mode.
    pub fn get(&self) -> ColorMode {
        ColorMode::from_u8(self.0.load(Ordering::Relaxed))
    }

    /// Replaces the stored mode.
    pub fn set(&self, mode: ColorMode) {
        self.0.store(mode as u8, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;

    #[test]
    fn test_color_mode_default_is_auto() {
        assert_eq!(ColorMode::default(), ColorMode::Auto);
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!("off".parse::<ColorMode>().unwrap(), ColorMode::Off);
        assert_eq!("Never".parse::<ColorMode>().unwrap(), ColorMode::Off);
        assert_eq!("AUTO".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!(" force ".parse::<ColorMode>().unwrap(), ColorMode::Force);
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Force);
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "rainbow".parse::<ColorMode>().unwrap_err();
        assert_eq!(err, ParseModeError("rainbow".to_string()));
        assert!(err.to_string().contains("rainbow"));
    }

    #[test]
    fn test_from_env_unset() {
        assert_eq!(ColorMode::from_env(&MockEnv::new()).unwrap(), None);
        let blank = MockEnv::new().with_var(COLOR_VAR, "  ");
        assert_eq!(ColorMode::from_env(&blank).unwrap(), None);
    }

    #[test]
    fn test_from_env_set() {
        let env = MockEnv::new().with_var(COLOR_VAR, "always");
        assert_eq!(ColorMode::from_env(&env).unwrap(), Some(ColorMode::Force));

        let bad = MockEnv::new().with_var(COLOR_VAR, "sometimes");
        assert!(ColorMode::from_env(&bad).is_err());
    }

    #[test]
    fn test_switch_round_trips_every_mode() {
        let switch = ModeSwitch::default();
        assert_eq!(switch.get(), ColorMode::Auto);
        for mode in [ColorMode::Off, ColorMode::Force, ColorMode::Auto] {
            switch.set(mode);
            assert_eq!(switch.get(), mode);
        }
    }

    #[test]
    fn test_switch_set_is_idempotent() {
        let switch = ModeSwitch::new(ColorMode::Off);
        switch.set(ColorMode::Force);
        switch.set(ColorMode::Force);
        assert_eq!(switch.get(), ColorMode::Force);
    }
}
