use thiserror::Error;

/// Errors raised while building colors or loading a picker style.
#[derive(Debug, Error)]
pub enum Error {
    #[error("channel {channel} is not finite: {value}")]
    NonFiniteChannel { channel: char, value: f64 },
    #[error("channel {channel} = {value} is outside [0, 1]")]
    ChannelOutOfRange { channel: char, value: f64 },
    #[error("invalid hex color “{0}”")]
    InvalidHex(String),
    #[error("invalid picker style: {0}")]
    Config(#[from] toml::de::Error),
    #[error("picker style field {field} = {value} is invalid: {reason}")]
    InvalidStyle { field: &'static str, value: f64, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
