use std::path::Path;

use crate::ai::EvEnumerator;
use crate::error::ConfigError;
use crate::game::{Rules, NUM_PLAYERS};
use crate::simulation::SimulationConfig;

/// Names shown for the two seats.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub names: [String; NUM_PLAYERS],
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            names: ["Alice".to_string(), "Bob".to_string()],
        }
    }
}

/// EV engine settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Spread enumeration across the rayon thread pool.
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { parallel: true }
    }
}

impl EngineConfig {
    pub fn enumerator(&self) -> EvEnumerator {
        EvEnumerator::with_parallel(self.parallel)
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rules: Rules,
    pub players: PlayersConfig,
    pub engine: EngineConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.starting_coins < 0 {
            return Err(ConfigError::Validation(
                "rules.starting_coins must be >= 0".into(),
            ));
        }
        if self.rules.roll_reward < 0 {
            return Err(ConfigError::Validation(
                "rules.roll_reward must be >= 0".into(),
            ));
        }
        if self.rules.hint_cost < 0 {
            return Err(ConfigError::Validation(
                "rules.hint_cost must be >= 0".into(),
            ));
        }

        for name in &self.players.names {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "players.names must not be blank".into(),
                ));
            }
        }
        if self.players.names[0] == self.players.names[1] {
            return Err(ConfigError::Validation(
                "players.names must be distinct".into(),
            ));
        }

        if self.simulation.games == 0 {
            return Err(ConfigError::Validation(
                "simulation.games must be > 0".into(),
            ));
        }
        if self.simulation.log_interval == 0 {
            return Err(ConfigError::Validation(
                "simulation.log_interval must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rules.starting_coins, 3);
        assert_eq!(config.players.names, ["Alice", "Bob"]);
        assert!(config.engine.parallel);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[rules]
hint_cost = 2
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rules.hint_cost, 2);
        // Other fields should be defaults
        assert_eq!(config.rules.roll_reward, 1);
        assert_eq!(config.simulation.games, 100);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.rules, default.rules);
        assert_eq!(config.players, default.players);
        assert_eq!(config.simulation.seed, None);
    }

    #[test]
    fn test_validation_rejects_negative_coins() {
        let mut config = AppConfig::default();
        config.rules.starting_coins = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_negative_hint_cost() {
        let mut config = AppConfig::default();
        config.rules.hint_cost = -3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.names[1] = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.players.names[1] = "Alice".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.simulation.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_log_interval() {
        let mut config = AppConfig::default();
        config.simulation.log_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.simulation.games, 100);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("camel_up.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players]
names = ["Ada", "Grace"]

[engine]
parallel = false

[simulation]
games = 12
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.players.names, ["Ada", "Grace"]);
        assert_eq!(config.engine.enumerator(), EvEnumerator::sequential());
        assert_eq!(config.simulation.games, 12);
        assert_eq!(config.simulation.seed, Some(7));
        // Others are defaults
        assert_eq!(config.rules.starting_coins, 3);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[simulation]\ngames = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::FileRead { .. })
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
