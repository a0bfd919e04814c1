use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub initial_position: u32,
    pub tick_period_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            initial_position: 0,
            tick_period_ms: 1_000,
        }
    }
}

/// Defaults, overridden by an optional `covering.toml`, overridden in turn
/// by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("covering.toml") {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings);

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };

    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.bind_addr = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("initial_position")
        .and_then(toml::Value::as_integer)
    {
        if let Ok(parsed) = u32::try_from(v) {
            settings.initial_position = parsed;
        }
    }
    if let Some(v) = file_cfg
        .get("tick_period_ms")
        .and_then(toml::Value::as_integer)
    {
        if let Ok(parsed) = u64::try_from(v) {
            settings.tick_period_ms = parsed;
        }
    }
}

fn apply_env(settings: &mut Settings) {
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("APP__INITIAL_POSITION") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.initial_position = parsed;
        }
    }
    if let Ok(v) = std::env::var("APP__TICK_PERIOD_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.tick_period_ms = parsed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_simulated_device() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "127.0.0.1:3000");
        assert_eq!(settings.initial_position, 0);
        assert_eq!(settings.tick_period_ms, 1_000);
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = Settings::default();
        apply_file(
            &mut settings,
            "bind_addr = \"0.0.0.0:8080\"\ninitial_position = 2500\ntick_period_ms = 250\n",
        );
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
        assert_eq!(settings.initial_position, 2_500);
        assert_eq!(settings.tick_period_ms, 250);
    }

    #[test]
    fn malformed_file_keeps_defaults() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "not [valid toml");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn negative_integers_in_file_are_ignored() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "initial_position = -1\ntick_period_ms = -5\n");
        assert_eq!(settings, Settings::default());
    }
}
