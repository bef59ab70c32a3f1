//! Configuration for the replay.

use crate::constants::{DEFAULT_FRAME_INTERVAL, DEFAULT_MOVE_DURATION};
use crate::error::{ReplayError, Result};
use crate::movelist::ScriptedLine;
use crate::tween::Easing;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub line: ScriptedLine,
    /// Whether the retreat key steps back through the line.
    pub undo_enabled: bool,
    pub move_duration: Duration,
    pub easing: Easing,
    /// How often the front-ends tick the animation.
    pub frame_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line: ScriptedLine::MainLine,
            undo_enabled: true,
            move_duration: DEFAULT_MOVE_DURATION,
            easing: Easing::QuadraticOut,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl Config {
    /// Defaults overridden by `REPLAY_LINE`, `REPLAY_UNDO`, `REPLAY_MOVE_MS`, `REPLAY_FRAME_MS`
    /// and `REPLAY_EASING`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(line) = lookup("REPLAY_LINE") {
            config.line = line.parse()?;
        }
        if let Some(undo) = lookup("REPLAY_UNDO") {
            config.undo_enabled = parse_flag("REPLAY_UNDO", &undo)?;
        }
        if let Some(ms) = lookup("REPLAY_MOVE_MS") {
            config.move_duration = Duration::from_millis(parse_millis("REPLAY_MOVE_MS", &ms)?);
        }
        if let Some(ms) = lookup("REPLAY_FRAME_MS") {
            let ms = parse_millis("REPLAY_FRAME_MS", &ms)?.max(1);
            config.frame_interval = Duration::from_millis(ms);
        }
        if let Some(easing) = lookup("REPLAY_EASING") {
            config.easing = match easing.trim() {
                "linear" => Easing::Linear,
                "quadratic-out" => Easing::QuadraticOut,
                other => {
                    return Err(ReplayError::Config(format!("REPLAY_EASING: unknown easing `{other}`")));
                }
            };
        }
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        other => Err(ReplayError::Config(format!("{key}: expected a boolean, got `{other}`"))),
    }
}

fn parse_millis(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ReplayError::Config(format!("{key}: expected milliseconds, got `{value}`")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.move_duration, Duration::from_millis(500));
        assert!(config.undo_enabled);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("REPLAY_LINE", "shuffle"),
            ("REPLAY_UNDO", "0"),
            ("REPLAY_MOVE_MS", "250"),
            ("REPLAY_FRAME_MS", "0"),
            ("REPLAY_EASING", "linear"),
        ])
        .unwrap();
        assert_eq!(config.line, ScriptedLine::RookShuffle);
        assert!(!config.undo_enabled);
        assert_eq!(config.move_duration, Duration::from_millis(250));
        assert_eq!(config.frame_interval, Duration::from_millis(1));
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(config_from(&[("REPLAY_UNDO", "maybe")]), Err(ReplayError::Config(_))));
        assert!(matches!(config_from(&[("REPLAY_MOVE_MS", "-5")]), Err(ReplayError::Config(_))));
        assert!(matches!(config_from(&[("REPLAY_LINE", "blitz")]), Err(ReplayError::Config(_))));
        assert!(matches!(config_from(&[("REPLAY_EASING", "bounce")]), Err(ReplayError::Config(_))));
    }
}
