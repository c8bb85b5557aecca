use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;

pub struct Config {
    pub database_url: String,
    pub access_token_secret: String,
    pub stripe_secret_key: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_var("DATABASE_URL")?,
            access_token_secret: require_var("ACCESS_TOKEN_SECRET")?,
            stripe_secret_key: require_var("STRIPE_SECRET_KEY")?,
            port: parse_port(std::env::var("PORT").ok())?,
        })
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_port(value: Option<String>) -> Result<u16, ConfigError> {
    match value {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_when_unset() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn port_parses_when_set() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "not-a-port"));
    }
}
