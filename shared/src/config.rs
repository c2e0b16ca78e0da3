use std::env;

use anyhow::{Context, Result};

/// アプリケーション全体の設定。プロセス起動時に一度だけ構築し、
/// 必要なコンポーネントへ明示的に渡す。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub admin: AdminConfig,
    pub port: u16,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: var_or("DATABASE_HOST", "localhost"),
            port: var_or("DATABASE_PORT", "5432")
                .parse()
                .context("DATABASE_PORT must be a port number")?,
            username: var_or("DATABASE_USERNAME", "app"),
            password: var_or("DATABASE_PASSWORD", "passwd"),
            database: var_or("DATABASE_NAME", "gopark"),
        };
        let redis = RedisConfig {
            host: var_or("REDIS_HOST", "localhost"),
            port: var_or("REDIS_PORT", "6379")
                .parse()
                .context("REDIS_PORT must be a port number")?,
        };
        let auth = AuthConfig {
            // セッショントークンの有効期限。既定は 24 時間
            ttl: var_or("AUTH_TOKEN_TTL", "86400")
                .parse()
                .context("AUTH_TOKEN_TTL must be seconds")?,
        };
        let admin = AdminConfig {
            username: env::var("ADMIN_USERNAME").context("ADMIN_USERNAME must be set")?,
            email: env::var("ADMIN_EMAIL").context("ADMIN_EMAIL must be set")?,
            password: env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?,
        };
        let port = var_or("PORT", "8080")
            .parse()
            .context("PORT must be a port number")?;
        Ok(Self {
            database,
            redis,
            auth,
            admin,
            port,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub ttl: u64,
}

/// 管理者アカウントの資格情報。コードに埋め込まず設定から供給する。
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
