//! Screen furniture around the slide: header, progress bar, dock and ticker.

use raylib::prelude::*;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::settings::{AppSettings, NavDockMode};
use super::{Palette, draw_panel, text_width, with_alpha};

pub const HEADER_HEIGHT: i32 = 140;
pub const TICKER_HEIGHT: i32 = 56;

const DOCK_BUTTON_WIDTH: f32 = 150.0;
const DOCK_BUTTON_HEIGHT: f32 = 64.0;
const DOCK_GAP: f32 = 12.0;
const DOCK_MARGIN: f32 = 24.0;
const DOCK_HANDLE_HEIGHT: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockAction {
    Previous,
    TogglePlay,
    Next,
    Home,
    Menu,
    Assistant,
    Settings,
}

impl DockAction {
    pub const ALL: [DockAction; 7] = [
        Self::Previous,
        Self::TogglePlay,
        Self::Next,
        Self::Home,
        Self::Menu,
        Self::Assistant,
        Self::Settings,
    ];

    fn label(&self, playing: bool) -> &'static str {
        match self {
            Self::Previous => "Prev",
            Self::TogglePlay if playing => "Pause",
            Self::TogglePlay => "Play",
            Self::Next => "Next",
            Self::Home => "Home",
            Self::Menu => "Services",
            Self::Assistant => "Ask Us",
            Self::Settings => "Settings",
        }
    }
}

fn bottom_edge(settings: &AppSettings) -> f32 {
    if settings.show_ticker {
        (RENDER_HEIGHT - TICKER_HEIGHT) as f32
    } else {
        RENDER_HEIGHT as f32
    }
}

/// Area the pointer must enter to unfold an auto-hiding dock.
pub fn dock_hover_zone(settings: &AppSettings) -> Rectangle {
    let count = DockAction::ALL.len() as f32;
    let width = count * DOCK_BUTTON_WIDTH + (count - 1.0) * DOCK_GAP + 2.0 * DOCK_GAP;
    let height = DOCK_BUTTON_HEIGHT + 2.0 * DOCK_GAP + DOCK_MARGIN;
    Rectangle::new(
        (RENDER_WIDTH as f32 - width) * 0.5,
        bottom_edge(settings) - height,
        width,
        height,
    )
}

pub fn dock_expanded(settings: &AppSettings, hovered: bool) -> bool {
    match settings.nav_dock_mode {
        NavDockMode::Visible => true,
        NavDockMode::Hidden => false,
        NavDockMode::Auto => hovered,
    }
}

/// Clickable button rectangles; empty while the dock is folded away.
pub fn dock_buttons(settings: &AppSettings, expanded: bool) -> Vec<(DockAction, Rectangle)> {
    if !expanded {
        return Vec::new();
    }
    let zone = dock_hover_zone(settings);
    let y = zone.y + DOCK_GAP;
    DockAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let x = zone.x + DOCK_GAP + i as f32 * (DOCK_BUTTON_WIDTH + DOCK_GAP);
            (*action, Rectangle::new(x, y, DOCK_BUTTON_WIDTH, DOCK_BUTTON_HEIGHT))
        })
        .collect()
}

/// Horizontal position of the ticker text: one right-to-left sweep across
/// the screen every `sweep_seconds`.
pub fn ticker_offset(elapsed: f32, sweep_seconds: f32, text_width: f32) -> f32 {
    let sweep = sweep_seconds.max(1.0);
    let t = (elapsed % sweep) / sweep;
    RENDER_WIDTH as f32 - t * (RENDER_WIDTH as f32 + text_width)
}

/// The default font only carries Latin glyphs.
pub fn renderable(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii() && !c.is_ascii_control())
}

pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|w| w.chars().next())
        .filter(|c| c.is_alphanumeric())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

pub fn draw_header<D: RaylibDraw>(
    d: &mut D,
    settings: &AppSettings,
    palette: &Palette,
    logo: Option<&Texture2D>,
    time: &str,
    date: &str,
) {
    d.draw_rectangle_gradient_v(
        0,
        0,
        RENDER_WIDTH,
        HEADER_HEIGHT,
        with_alpha(Color::BLACK, 0.7),
        with_alpha(Color::BLACK, 0.0),
    );

    let logo_rect = Rectangle::new(48.0, 22.0, 96.0, 96.0);
    match logo {
        Some(texture) => {
            let (w, h) = (texture.width() as f32, texture.height() as f32);
            let side = w.min(h);
            d.draw_texture_pro(
                texture,
                Rectangle::new((w - side) * 0.5, (h - side) * 0.5, side, side),
                logo_rect,
                Vector2::zero(),
                0.0,
                Color::WHITE,
            );
        }
        None => {
            d.draw_rectangle_rounded(logo_rect, 0.3, 8, palette.accent);
            let text = initials(&settings.company_name);
            let size = 44;
            d.draw_text(
                &text,
                (logo_rect.x + logo_rect.width * 0.5) as i32 - text_width(&text, size) / 2,
                (logo_rect.y + logo_rect.height * 0.5) as i32 - size / 2,
                size,
                Color::BLACK,
            );
        }
    }

    d.draw_text(&settings.company_name, 168, 34, 44, Color::WHITE);
    if !settings.company_name_ar.is_empty() && renderable(&settings.company_name_ar) {
        d.draw_text(&settings.company_name_ar, 168, 86, 26, palette.accent);
    }

    let time_size = 60;
    d.draw_text(time, RENDER_WIDTH - 48 - text_width(time, time_size), 26, time_size, Color::WHITE);
    if settings.show_date {
        let date_size = 26;
        d.draw_text(
            date,
            RENDER_WIDTH - 48 - text_width(date, date_size),
            94,
            date_size,
            with_alpha(Color::WHITE, 0.75),
        );
    }
}

pub fn draw_progress_bar<D: RaylibDraw>(d: &mut D, settings: &AppSettings, palette: &Palette, progress: f32) {
    let y = bottom_edge(settings) as i32 - 6;
    d.draw_rectangle(0, y, RENDER_WIDTH, 6, with_alpha(Color::WHITE, 0.15));
    d.draw_rectangle(0, y, (RENDER_WIDTH as f32 * progress.clamp(0.0, 1.0)) as i32, 6, palette.accent);
}

pub fn draw_dock<D: RaylibDraw>(
    d: &mut D,
    settings: &AppSettings,
    palette: &Palette,
    expanded: bool,
    playing: bool,
    pointer: Vector2,
) {
    if settings.nav_dock_mode == NavDockMode::Hidden {
        return;
    }
    let zone = dock_hover_zone(settings);
    if !expanded {
        // Folded auto dock: a small handle hinting where to hover
        let handle = Rectangle::new(
            zone.x + zone.width * 0.35,
            zone.y + zone.height - DOCK_MARGIN - DOCK_HANDLE_HEIGHT,
            zone.width * 0.3,
            DOCK_HANDLE_HEIGHT,
        );
        d.draw_rectangle_rounded(handle, 1.0, 8, with_alpha(Color::WHITE, 0.3));
        return;
    }

    let panel = Rectangle::new(zone.x, zone.y, zone.width, zone.height - DOCK_MARGIN);
    draw_panel(d, panel, settings.enable_blur_effects, Color::BLACK);

    for (action, rect) in dock_buttons(settings, true) {
        let hot = super::contains(&rect, pointer);
        let fill = if hot { palette.accent } else { with_alpha(Color::WHITE, 0.1) };
        let ink = if hot { Color::BLACK } else { Color::WHITE };
        d.draw_rectangle_rounded(rect, 0.35, 8, fill);
        let label = action.label(playing);
        let size = 26;
        d.draw_text(
            label,
            (rect.x + rect.width * 0.5) as i32 - text_width(label, size) / 2,
            (rect.y + rect.height * 0.5) as i32 - size / 2,
            size,
            ink,
        );
    }
}

pub fn draw_ticker<D: RaylibDraw>(d: &mut D, settings: &AppSettings, palette: &Palette, elapsed: f32) {
    let y = RENDER_HEIGHT - TICKER_HEIGHT;
    d.draw_rectangle(0, y, RENDER_WIDTH, TICKER_HEIGHT, with_alpha(Color::BLACK, 0.8));
    d.draw_rectangle(0, y, RENDER_WIDTH, 2, palette.accent);

    let size = 28;
    let width = text_width(&settings.ticker_text, size);
    let x = ticker_offset(elapsed, settings.ticker_speed as f32, width as f32);
    d.draw_text(&settings.ticker_text, x as i32, y + (TICKER_HEIGHT - size) / 2, size, Color::WHITE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_sweeps_right_to_left_once_per_period() {
        let width = 1000.0;
        assert_eq!(ticker_offset(0.0, 25.0, width), RENDER_WIDTH as f32);
        let halfway = ticker_offset(12.5, 25.0, width);
        assert!((halfway - (RENDER_WIDTH as f32 - (RENDER_WIDTH as f32 + width) * 0.5)).abs() < 0.01);
        // Next sweep starts over
        assert_eq!(ticker_offset(25.0, 25.0, width), RENDER_WIDTH as f32);
    }

    #[test]
    fn ticker_survives_zero_speed() {
        assert!(ticker_offset(3.3, 0.0, 100.0).is_finite());
    }

    #[test]
    fn dock_modes() {
        let mut settings = AppSettings::default();
        settings.nav_dock_mode = NavDockMode::Auto;
        assert!(dock_buttons(&settings, dock_expanded(&settings, false)).is_empty());
        assert_eq!(dock_buttons(&settings, dock_expanded(&settings, true)).len(), DockAction::ALL.len());

        settings.nav_dock_mode = NavDockMode::Hidden;
        assert!(!dock_expanded(&settings, true));

        settings.nav_dock_mode = NavDockMode::Visible;
        assert!(dock_expanded(&settings, false));
    }

    #[test]
    fn dock_buttons_sit_inside_the_hover_zone_and_do_not_overlap() {
        let settings = AppSettings::default();
        let zone = dock_hover_zone(&settings);
        let buttons = dock_buttons(&settings, true);
        for (_, rect) in &buttons {
            assert!(super::super::contains(&zone, Vector2::new(rect.x, rect.y)));
            assert!(rect.x + rect.width <= zone.x + zone.width);
        }
        for pair in buttons.windows(2) {
            assert!(pair[0].1.x + pair[0].1.width < pair[1].1.x);
        }
    }

    #[test]
    fn dock_moves_up_when_ticker_is_shown() {
        let mut settings = AppSettings::default();
        settings.show_ticker = false;
        let low = dock_hover_zone(&settings).y;
        settings.show_ticker = true;
        assert_eq!(dock_hover_zone(&settings).y, low - TICKER_HEIGHT as f32);
    }

    #[test]
    fn only_latin_names_are_drawn() {
        assert!(renderable("Al Safa Typing"));
        assert!(!renderable("الصفا للطباعة"));
    }

    #[test]
    fn initials_for_placeholder_logo() {
        assert_eq!(initials("smart typing centre"), "ST");
        assert_eq!(initials(""), "");
    }
}
