use thiserror::Error;

#[derive(Error, Debug)]
pub enum LampError {
    #[error("unable to open {path}: {reason}")]
    Unavailable { path: String, reason: String },
    #[error("write to lamp failed: {0}")]
    Write(String),
    #[error("read from lamp failed: {0}")]
    Read(String),
}
impl From<std::io::Error> for LampError {
    fn from(e: std::io::Error) -> Self { LampError::Read(e.to_string()) }
}
