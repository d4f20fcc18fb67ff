use thiserror::Error;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Logo is {size} bytes, limit is {limit} bytes")]
    LogoTooLarge { size: u64, limit: u64 },

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Media error: {0}")]
    Media(String),
}

pub type Result<T> = std::result::Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KioskError = io_err.into();
        assert!(matches!(err, KioskError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = KioskError::LogoTooLarge { size: 3_000_000, limit: 2_097_152 };
        assert_eq!(err.to_string(), "Logo is 3000000 bytes, limit is 2097152 bytes");

        let err = KioskError::UnknownService("visa-x".to_string());
        assert_eq!(err.to_string(), "Unknown service: visa-x");
    }
}
