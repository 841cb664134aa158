use thiserror::Error;

/// Top-level error type shared by every crate in the workspace.
///
/// Widget callbacks never return it; only loading (config, translations) can fail.
#[derive(Debug, Error)]
pub enum HudError {
    #[error("config error: {0}")]
    Config(String),

    #[error("locale error: {0}")]
    Locale(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = HudError> = std::result::Result<T, E>;
