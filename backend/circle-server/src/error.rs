use thiserror::Error;

/// Startup failures
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] circle_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] circle_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] circle_auth::AuthError),

    #[error("auth.jwt_secret is not configured")]
    MissingJwtSecret,

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
