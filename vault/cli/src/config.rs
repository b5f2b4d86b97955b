use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            display: DisplayConfig::default(),
        }
    }
}

/// How values are rounded before they are printed.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Round to two places, keeping more for tiny values. If `false`, round
    /// half up to `decimals` places instead.
    pub adaptive: bool,
    pub decimals: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            adaptive: true,
            decimals: 2,
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, config_parser::parse_config};

    #[test]
    fn parsing_fixture() {
        let cfg: Config = parse_config("fixtures/vault.toml").unwrap();

        assert_eq!(cfg.log_level, "warn");
        assert!(!cfg.display.adaptive);
        assert_eq!(cfg.display.decimals, 6);
    }

    #[test]
    fn defaults_without_a_file() {
        let cfg: Config = parse_config("fixtures/missing.toml").unwrap();

        assert_eq!(cfg.log_level, "info");
        assert!(cfg.display.adaptive);
        assert_eq!(cfg.display.decimals, 2);
    }
}
