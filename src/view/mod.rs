//! Everything that puts pixels into the 1920x1080 framebuffer.
//!
//! Drawing functions take any [`RaylibDraw`] so they work inside texture
//! mode and inside the content camera alike. Layout and colour helpers are
//! plain functions so they can be checked without a window.

pub mod chrome;
pub mod overlays;
pub mod particles;
pub mod slides;

use raylib::prelude::*;

use crate::settings::{AppSettings, Theme};

/// Background gradient and accent colour of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub top: Color,
    pub bottom: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_settings(settings: &AppSettings) -> Self {
        match settings.theme {
            Theme::Wood => Self {
                top: rgb(0x78350f),
                bottom: rgb(0x1c1917),
                accent: rgb(0xfbbf24),
            },
            Theme::Galaxy => Self {
                top: rgb(0x0f172a),
                bottom: rgb(0x581c87),
                accent: rgb(0x22d3ee),
            },
            Theme::Nebula => Self {
                top: rgb(0x312e81),
                bottom: rgb(0x701a75),
                accent: rgb(0xe879f9),
            },
            Theme::Flow => Self {
                top: rgb(0x134e4a),
                bottom: rgb(0x064e3b),
                accent: rgb(0x34d399),
            },
            Theme::Custom => {
                let accent = parse_hex_color(&settings.custom_color).unwrap_or(rgb(0xfbbf24));
                Self { top: Color::BLACK, bottom: darken(accent, 0.25), accent }
            }
        }
    }
}

pub fn rgb(hex: u32) -> Color {
    Color::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

/// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(rgb),
        3 => {
            let long: String = digits.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&long, 16).ok().map(rgb)
        }
        _ => None,
    }
}

/// Same colour with its alpha scaled by `amount` (0..=1).
pub fn with_alpha(color: Color, amount: f32) -> Color {
    let a = (color.a as f32 * amount.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}

fn darken(color: Color, factor: f32) -> Color {
    let f = |c: u8| (c as f32 * factor) as u8;
    Color::new(f(color.r), f(color.g), f(color.b), color.a)
}

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// Greedy word wrap. `measure` returns the pixel width of a candidate line.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };
        if measure(&candidate) > max_width && !line.is_empty() {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn text_width(text: &str, font_size: i32) -> i32 {
    raylib::core::text::measure_text(text, font_size)
}

pub fn draw_text_centered<D: RaylibDraw>(d: &mut D, text: &str, center_x: i32, y: i32, size: i32, color: Color) {
    d.draw_text(text, center_x - text_width(text, size) / 2, y, size, color);
}

/// Draws wrapped text and returns the y just below the last line.
pub fn draw_paragraph<D: RaylibDraw>(
    d: &mut D,
    text: &str,
    x: i32,
    y: i32,
    max_width: i32,
    size: i32,
    color: Color,
) -> i32 {
    let mut y = y;
    for line in wrap_text(text, max_width, |s| text_width(s, size)) {
        d.draw_text(&line, x, y, size, color);
        y += size + size / 3;
    }
    y
}

/// Rounded translucent panel. Without blur effects the panel is drawn
/// nearly opaque instead of glassy.
pub fn draw_panel<D: RaylibDraw>(d: &mut D, rect: Rectangle, glass: bool, tint: Color) {
    let fill = if glass { with_alpha(tint, 0.35) } else { with_alpha(tint, 0.9) };
    d.draw_rectangle_rounded(rect, 0.12, 12, fill);
    d.draw_rectangle_lines_ex(rect, 1.5, with_alpha(Color::WHITE, 0.15));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(parse_hex_color("#fbbf24"), Some(Color::new(0xfb, 0xbf, 0x24, 255)));
        assert_eq!(parse_hex_color("0f172a"), Some(Color::new(0x0f, 0x17, 0x2a, 255)));
        assert_eq!(parse_hex_color("#fa0"), Some(Color::new(0xff, 0xaa, 0x00, 255)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn custom_theme_uses_custom_colour_or_falls_back() {
        let mut settings = AppSettings::default();
        settings.theme = Theme::Custom;
        settings.custom_color = "#22d3ee".to_string();
        assert_eq!(Palette::for_settings(&settings).accent, rgb(0x22d3ee));

        settings.custom_color = "not a colour".to_string();
        assert_eq!(Palette::for_settings(&settings).accent, rgb(0xfbbf24));
    }

    #[test]
    fn alpha_is_scaled_and_clamped() {
        assert_eq!(with_alpha(Color::WHITE, 0.5).a, 128);
        assert_eq!(with_alpha(Color::WHITE, 2.0).a, 255);
        assert_eq!(with_alpha(Color::WHITE, -1.0).a, 0);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let by_chars = |s: &str| s.len() as i32;
        let lines = wrap_text("Fast and reliable visa processing", 12, by_chars);
        assert_eq!(lines, vec!["Fast and", "reliable", "visa", "processing"]);
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let by_chars = |s: &str| s.len() as i32;
        assert_eq!(wrap_text("a supercalifragilistic b", 5, by_chars), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn point_in_rectangle() {
        let r = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        assert!(contains(&r, Vector2::new(10.0, 29.9)));
        assert!(!contains(&r, Vector2::new(30.0, 15.0)));
    }
}
