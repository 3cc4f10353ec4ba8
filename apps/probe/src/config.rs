use core_config::{ConfigError, FromEnv};
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
///
/// Composes shared config components from the `core_config` and `database`
/// libraries. URL precedence: CLI flag, then `MONGODB_URL`/`MONGO_URL`, then
/// the localhost default.
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env(cli_url: Option<&str>) -> eyre::Result<Self> {
        let environment = Environment::from_env();

        let mongodb = match cli_url {
            Some(url) => MongoConfig::new(url),
            None => match MongoConfig::from_env() {
                Ok(config) => config,
                // No URL in the environment: fall back to the hardcoded
                // localhost default rather than failing
                Err(ConfigError::MissingEnvVar(_)) => MongoConfig::default(),
                Err(e) => return Err(e.into()),
            },
        }
        .with_app_name("mongo-probe");

        Ok(Self {
            mongodb,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_url_takes_precedence() {
        temp_env::with_var("MONGODB_URL", Some("mongodb://from-env:27017"), || {
            let config = Config::from_env(Some("mongodb://from-cli:27017")).unwrap();
            assert_eq!(config.mongodb.url(), "mongodb://from-cli:27017");
        });
    }

    #[test]
    fn test_env_url_used_without_cli_override() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://from-env:27017")),
                ("MONGO_URL", None),
            ],
            || {
                let config = Config::from_env(None).unwrap();
                assert_eq!(config.mongodb.url(), "mongodb://from-env:27017");
            },
        );
    }

    #[test]
    fn test_defaults_to_localhost() {
        temp_env::with_vars(
            [("MONGODB_URL", None::<&str>), ("MONGO_URL", None::<&str>)],
            || {
                let config = Config::from_env(None).unwrap();
                assert_eq!(config.mongodb.url(), "mongodb://localhost:27017");
            },
        );
    }

    #[test]
    fn test_app_name_is_set() {
        let config = Config::from_env(Some("mongodb://localhost:27017")).unwrap();
        assert_eq!(config.mongodb.app_name, Some("mongo-probe".to_string()));
    }

    #[test]
    fn test_bad_timeout_env_propagates() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", Some("mongodb://localhost:27017")),
                ("MONGODB_CONNECT_TIMEOUT_SECS", Some("nope")),
            ],
            || {
                let result = Config::from_env(None);
                assert!(result.is_err());
            },
        );
    }
}
