use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlayerError {
    #[error("no media surface attached")]
    NoSurface,

    #[error("playback request rejected: {0}")]
    PlayRejected(String),

    #[error("media failed to load: {0}")]
    Media(String),

    #[error("unknown video id: {0}")]
    UnknownVideo(String),

    #[error("invalid player config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
