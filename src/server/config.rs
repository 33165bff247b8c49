use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => parse_port(value)?,
                Err(_) => DEFAULT_PORT,
            },
            cors_origin: std::env::var("CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}

fn parse_port(value: String) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
        name: "PORT".to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_port() {
        assert_eq!(parse_port("3000".to_string()).unwrap(), 3000);
    }

    #[test]
    fn rejects_non_numeric_port() {
        let result = parse_port("http".to_string());

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, ref value }) if name == "PORT" && value == "http"
        ));
    }
}
