pub type SpinResult<T> = Result<T, SpinError>;

#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    #[error("config error: {0}")]
    Config(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpinError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }
}
