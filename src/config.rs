//! Runtime Configuration
//! Mission: Load settings once at startup and hand immutable copies to services

use chrono::Duration;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Development fallback for the signing secret. `main` warns when it is used.
pub const DEV_JWT_SECRET: &str = "dev-secret-change-in-production-minimum-32-characters";

pub const MAX_TOKEN_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Crewzy employee directory backend
#[derive(Parser, Debug, Clone)]
#[command(name = "crewzy")]
#[command(about = "Employee directory API with bearer-token authentication")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8000")]
    pub bind_addr: SocketAddr,

    /// Path to the SQLite employee database
    #[arg(long, env = "DATABASE_PATH", default_value = "employees.db")]
    pub database_path: PathBuf,

    /// Symmetric secret used to sign access tokens (HS256)
    #[arg(long, env = "JWT_SECRET", default_value = DEV_JWT_SECRET, hide_env_values = true)]
    pub jwt_secret: String,

    /// Access token lifetime in minutes (1 minute up to one year)
    #[arg(
        long,
        env = "TOKEN_TTL_MINUTES",
        default_value_t = 60,
        value_parser = clap::value_parser!(i64).range(1..=MAX_TOKEN_TTL_MINUTES)
    )]
    pub token_ttl_minutes: i64,

    /// bcrypt work factor for the seeded credential store
    #[arg(long, env = "BCRYPT_COST", default_value_t = bcrypt::DEFAULT_COST)]
    pub bcrypt_cost: u32,
}

impl Config {
    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig {
            jwt_secret: self.jwt_secret.clone(),
            token_ttl: Duration::minutes(self.token_ttl_minutes),
        }
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

/// Token signing settings, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: Duration::minutes(60),
        }
    }

    pub fn with_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["crewzy"]).unwrap();
        assert_eq!(config.bind_addr.port(), 8000);
        assert_eq!(config.token_ttl_minutes, 60);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "crewzy",
            "--bind-addr",
            "127.0.0.1:9100",
            "--jwt-secret",
            "s3cret",
            "--token-ttl-minutes",
            "5",
        ])
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9100);
        assert!(!config.uses_dev_secret());

        let auth = config.auth_config();
        assert_eq!(auth.jwt_secret, "s3cret");
        assert_eq!(auth.token_ttl, Duration::minutes(5));
    }

    #[test]
    fn test_token_ttl_must_be_positive_and_bounded() {
        for bad in ["0", "-5", "525601", "9223372036854775807"] {
            let result = Config::try_parse_from(["crewzy", "--token-ttl-minutes", bad]);
            assert!(result.is_err(), "ttl {bad} should be rejected");
        }

        let max = MAX_TOKEN_TTL_MINUTES.to_string();
        let config = Config::try_parse_from(["crewzy", "--token-ttl-minutes", max.as_str()]).unwrap();
        assert_eq!(config.auth_config().token_ttl, Duration::days(365));
    }
}
