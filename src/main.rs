use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use raylib::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

mod assistant;
mod catalog;
mod clock;
mod constants;
mod editor;
mod engine;
mod error;
mod gemini;
mod kiosk;
mod logging;
mod logo;
mod media;
mod rotation;
mod settings;
mod slide;
mod slides;
mod state;
mod template;
mod texture_loader;
mod timer;
mod view;

use crate::catalog::SlideKind;
use crate::constants::*;
use crate::engine::KioskEngine;
use crate::error::KioskError;
use crate::gemini::{DEFAULT_MODEL, GeminiClient};
use crate::kiosk::Kiosk;
use crate::settings::{AppSettings, MediaKind, SettingsStore};

/// Storefront signage display
#[derive(Parser)]
#[command(name = "kiosk")]
#[command(version, about = "Full-screen signage display for a typing and visa services storefront")]
struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Gemini API key for the assistant (API_KEY is also accepted)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Alternative Gemini endpoint, e.g. a local proxy
    #[arg(long, env = "GEMINI_BASE_URL")]
    api_base: Option<String>,

    /// Gemini model used by the assistant
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Start in fullscreen
    #[arg(long)]
    fullscreen: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or edit the stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings as JSON
    Show,
    /// Print the settings file path
    Path,
    /// List catalog services with their slide type and state
    Services {
        /// Only show one slide type (standard, golden, kids, hero, ...)
        #[arg(long)]
        kind: Option<String>,
    },
    /// Restore factory defaults
    Reset,
    /// Set one field by its JSON key, e.g. `set slideDuration 8`
    Set { key: String, value: String },
    /// Enable a service slide (appended to the rotation)
    Enable { id: String },
    /// Disable a service slide
    Disable { id: String },
    /// Store an image file (2MB max) as the company logo
    Logo { file: PathBuf },
    /// Remove the company logo
    ClearLogo,
    /// Replace the media of one service
    Override {
        id: String,
        /// Background image URL or data URL; empty clears
        #[arg(long)]
        background: Option<String>,
        /// Feature image; clears any video
        #[arg(long, conflicts_with = "video")]
        image: Option<String>,
        /// Video URL; clears any feature image
        #[arg(long)]
        video: Option<String>,
        /// Drop every override of this service
        #[arg(long, conflicts_with_all = ["background", "image", "video"])]
        clear: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init();

    let store = match &cli.settings {
        Some(path) => SettingsStore::open(path),
        None => SettingsStore::open_default(),
    };

    match cli.command {
        Some(Commands::Settings { action }) => run_settings(store, action),
        None => {
            let api_key = cli.api_key.or_else(|| std::env::var("API_KEY").ok()).unwrap_or_default();
            let mut client = GeminiClient::new(api_key, cli.model);
            if let Some(base) = cli.api_base {
                client = client.with_base_url(base);
            }
            run_display(store, client, cli.fullscreen)
        }
    }
}

fn run_settings(mut store: SettingsStore, action: SettingsAction) -> anyhow::Result<()> {
    let mut settings = store.settings().clone();
    match action {
        SettingsAction::Show => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            return Ok(());
        }
        SettingsAction::Path => {
            println!("{}", store.path().display());
            return Ok(());
        }
        SettingsAction::Services { kind } => {
            let kind = kind.as_deref().map(SlideKind::from_tag);
            for item in catalog::SERVICES.iter().filter(|i| kind.is_none_or(|k| i.kind == k)) {
                let state = if settings.is_enabled(item.id) { "on" } else { "off" };
                println!("{:<20} {:<9} {:<4} {}", item.id, item.kind.tag(), state, item.title);
            }
            return Ok(());
        }
        SettingsAction::Reset => settings = AppSettings::default(),
        SettingsAction::Set { key, value } => settings.set_field(&key, &value)?,
        SettingsAction::Enable { id } => settings.set_enabled(&id, true)?,
        SettingsAction::Disable { id } => settings.set_enabled(&id, false)?,
        SettingsAction::Logo { file } => match logo::apply_logo(&mut settings, &file) {
            Ok(()) => {}
            Err(KioskError::LogoTooLarge { .. }) => bail!(logo::TOO_LARGE_MESSAGE),
            Err(e) => return Err(e).with_context(|| format!("Failed to read logo {}", file.display())),
        },
        SettingsAction::ClearLogo => settings.logo = None,
        SettingsAction::Override { id, background, image, video, clear } => {
            if clear {
                settings.clear_overrides(&id);
            }
            if let Some(value) = background {
                settings.set_background_override(&id, &value)?;
            }
            if let Some(value) = image {
                settings.set_media_override(&id, MediaKind::Image, &value)?;
            }
            if let Some(value) = video {
                settings.set_media_override(&id, MediaKind::Video, &value)?;
            }
        }
    }
    store
        .save(settings)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;
    println!("Saved {}", store.path().display());
    Ok(())
}

fn run_display(store: SettingsStore, client: GeminiClient, fullscreen: bool) -> anyhow::Result<()> {
    if !client.has_api_key() {
        warn!("No API key configured, the assistant will only apologise");
    }
    let kiosk = Kiosk::new(store, Arc::new(client), Instant::now());

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Signage Kiosk")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape closes overlays, it must not quit the kiosk
    rl.set_exit_key(None);
    if fullscreen {
        rl.toggle_fullscreen();
    }

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow::anyhow!("Failed to create render texture: {}", e))?;

    let mut engine = KioskEngine::new(kiosk);
    info!("Display started");

    // --- Main Loop ---
    while !rl.window_should_close() {
        engine.render_frame(&mut rl, &thread, &mut framebuffer);

        // Draw the framebuffer scaled to the window, flipped back upright
        let mut d = rl.begin_drawing(&thread);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;

        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("Display closed");
    Ok(())
}
