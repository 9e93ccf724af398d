use thiserror::Error;

/// StabTerm unified error type
#[derive(Error, Debug)]
pub enum StabTermError {
    #[error("Connection error: {message}")]
    Connect { message: String },

    #[error("Send error: {message}")]
    Send { message: String },

    #[error("Read error: {message}")]
    Read { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {0}")]
    Output(String),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StabTermResult<T> = Result<T, StabTermError>;
