use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: f32 = 0.8;     // Slide enter animation (seconds)
pub const KEN_BURNS_DURATION: f32 = 20.0;     // One background drift sweep (seconds)
pub const REVIEW_INTERVAL: f32 = 5.0;         // Time each testimonial stays up (seconds)

pub const PROGRESS_TICK: Duration = Duration::from_millis(100);
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

pub const MIN_SLIDE_DURATION: f64 = 1.0;      // Seconds
pub const LOGO_MAX_BYTES: u64 = 2 * 1024 * 1024;

pub const CONFIG_DIR_NAME: &str = "signage-kiosk";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const MENU_TARGET: &str = "MENU";
pub const HOME_SERVICE: &str = "hero";
