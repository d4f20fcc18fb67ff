use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

use crate::error::{KioskError, Result};
use crate::media;

type Fetched = (String, Result<(Vec<u8>, String)>);

/// Textures for every media string the slides reference, fetched off the
/// render thread and uploaded to the GPU when ready.
pub struct MediaCache {
    textures: HashMap<String, Texture2D>,
    in_flight: HashSet<String>,
    failed: HashSet<String>,
    tx: Sender<Fetched>,
    rx: Receiver<Fetched>,
}

impl MediaCache {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            textures: HashMap::new(),
            in_flight: HashSet::new(),
            failed: HashSet::new(),
            tx,
            rx,
        }
    }

    pub fn get(&self, source: &str) -> Option<&Texture2D> {
        self.textures.get(source)
    }

    /// Starts a background fetch unless the source is loaded, loading, or known bad.
    pub fn request(&mut self, source: &str) {
        if source.is_empty()
            || self.textures.contains_key(source)
            || self.in_flight.contains(source)
            || self.failed.contains(source)
        {
            return;
        }
        debug!("Fetching media {}", short(source));
        self.in_flight.insert(source.to_string());
        let tx = self.tx.clone();
        let source = source.to_string();
        thread::spawn(move || {
            let fetched = media::fetch_bytes(&source);
            let _ = tx.send((source, fetched));
        });
    }

    /// Uploads whatever finished downloading since the last frame.
    pub fn poll(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        while let Ok((source, fetched)) = self.rx.try_recv() {
            self.in_flight.remove(&source);
            let texture = fetched.and_then(|(bytes, extension)| {
                load_texture_with_exif_rotation(rl, thread, &bytes, &extension)
            });
            match texture {
                Ok(texture) => {
                    self.textures.insert(source, texture);
                }
                Err(e) => {
                    warn!("Could not load media {}: {}", short(&source), e);
                    self.failed.insert(source);
                }
            }
        }
    }
}

fn short(source: &str) -> &str {
    // Data URLs are huge, log only the header
    match source.find(',') {
        Some(i) if source.starts_with("data:") => &source[..i],
        _ => source,
    }
}

// --- Decode Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    file_bytes: &[u8],
    extension: &str,
) -> Result<Texture2D> {
    let mut orientation = 1; // Default: no rotation

    // EXIF is only read reliably for JPEG
    if extension == ".jpg" || extension == ".jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if !values.is_empty() {
                            orientation = values[0];
                        }
                    }
                }
            }
            Err(e) => {
                debug!("No EXIF data, keeping orientation: {}", e);
            }
        }
    }

    let mut image = Image::load_image_from_mem(extension, file_bytes)
        .map_err(|e| KioskError::Media(format!("Failed to decode image: {}", e)))?;

    // 1 = Top-left (Normal)
    // 3 = Bottom-right (180 deg)
    // 6 = Top-right (90 deg clockwise)
    // 8 = Bottom-left (270 deg clockwise / 90 deg counter-clockwise)
    // Others involve flips, ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| KioskError::Media(format!("Failed to create texture: {}", e)))?;

    // Unload the Image data from CPU memory
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_urls_are_shortened_for_logs() {
        assert_eq!(short("data:image/png;base64,AAAABBBB"), "data:image/png;base64");
        assert_eq!(short("https://a.example/x,y.jpg"), "https://a.example/x,y.jpg");
    }
}
