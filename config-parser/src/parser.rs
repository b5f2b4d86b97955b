use {
    crate::error::Error,
    config::{Config, Environment, File},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Prefix of environment variables overriding values from the file, e.g.
/// `VAULT__DISPLAY__DECIMALS=6`.
pub const ENV_PREFIX: &str = "VAULT";

/// Load a TOML file at `path`, with `VAULT__`-prefixed environment variables
/// taking precedence. Nested keys are separated by `__`.
///
/// A missing file is not an error; every field then comes from its serde
/// default or from the environment.
pub fn parse_config<D>(path: impl AsRef<Path>) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let env_override = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__");

    let config = Config::builder()
        .add_source(File::from(path.as_ref()).required(false))
        .add_source(env_override)
        .build()?;

    Ok(config.try_deserialize()?)
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, serde::Deserialize, std::io::Write};

    #[derive(Debug, Deserialize)]
    struct TestSettings {
        log_level: String,
        display: Display,
    }

    #[derive(Debug, Deserialize)]
    struct Display {
        adaptive: bool,
        decimals: u32,
    }

    #[test]
    fn parsing_config_file() {
        let config: TestSettings = parse_config("fixtures/config_test1.toml").unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(!config.display.adaptive);
        assert_eq!(config.display.decimals, 4);
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[override_me]\nvalue = \"file\"\nkept = 1").unwrap();

        #[derive(Debug, Deserialize)]
        struct Settings {
            override_me: OverrideMe,
        }

        #[derive(Debug, Deserialize)]
        struct OverrideMe {
            value: String,
            kept: u32,
        }

        std::env::set_var("VAULT__OVERRIDE_ME__VALUE", "env");

        let config: Settings = parse_config(file.path()).unwrap();

        assert_eq!(config.override_me.value, "env");
        assert_eq!(config.override_me.kept, 1);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        #[derive(Debug, Deserialize)]
        struct Settings {
            #[serde(default)]
            log_level: Option<String>,
        }

        let config: Settings = parse_config("fixtures/does_not_exist.toml").unwrap();

        assert!(config.log_level.is_none());
    }
}
