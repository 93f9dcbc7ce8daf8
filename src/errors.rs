use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::framework::config::Error),

    #[error("terminal io failed: {0}")]
    Io(#[from] std::io::Error),
}
