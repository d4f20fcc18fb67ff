use std::fs;
use std::path::Path;
use tracing::info;

use crate::constants::LOGO_MAX_BYTES;
use crate::error::{KioskError, Result};
use crate::media;
use crate::settings::AppSettings;

pub const TOO_LARGE_MESSAGE: &str = "File size too large. Please upload an image under 2MB.";

/// Reads an image file into an inline data URL. Oversized files are rejected
/// before anything is read.
pub fn encode_logo(path: &Path) -> Result<String> {
    let size = fs::metadata(path)?.len();
    if size > LOGO_MAX_BYTES {
        return Err(KioskError::LogoTooLarge { size, limit: LOGO_MAX_BYTES });
    }
    let bytes = fs::read(path)?;
    Ok(media::encode_data_url(media::mime_for_path(path), &bytes))
}

/// Stores the logo inline in the settings; on error the settings are untouched.
pub fn apply_logo(settings: &mut AppSettings, path: &Path) -> Result<()> {
    let data_url = encode_logo(path)?;
    info!("Logo loaded from {} ({} bytes encoded)", path.display(), data_url.len());
    settings.logo = Some(data_url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn oversized_logo_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");
        fs::write(&path, vec![0u8; (LOGO_MAX_BYTES + 1) as usize]).unwrap();

        let mut settings = AppSettings::default();
        settings.logo = Some("data:image/png;base64,AAAA".to_string());
        let err = apply_logo(&mut settings, &path).unwrap_err();

        assert!(matches!(err, KioskError::LogoTooLarge { size, .. } if size == LOGO_MAX_BYTES + 1));
        assert_eq!(settings.logo.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn logo_at_limit_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edge.jpg");
        fs::write(&path, vec![7u8; LOGO_MAX_BYTES as usize]).unwrap();

        let mut settings = AppSettings::default();
        apply_logo(&mut settings, &path).unwrap();
        let logo = settings.logo.unwrap();
        assert!(logo.starts_with("data:image/jpeg;base64,"));
        let (_, bytes) = media::decode_data_url(&logo).unwrap();
        assert_eq!(bytes.len() as u64, LOGO_MAX_BYTES);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut settings = AppSettings::default();
        let err = apply_logo(&mut settings, Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, KioskError::Io(_)));
        assert!(settings.logo.is_none());
    }
}
