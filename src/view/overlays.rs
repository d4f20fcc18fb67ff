//! Full-screen and side overlays: services menu, assistant, settings editor.

use raylib::prelude::*;

use crate::assistant::{Assistant, ChatSender};
use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::editor::{EditorRow, SettingsEditor};
use crate::slides::ActiveSlide;
use crate::texture_loader::MediaCache;
use super::{Palette, contains, draw_panel, rgb, text_width, with_alpha, wrap_text};
use super::slides::draw_cover;

const MENU_COLUMNS: usize = 4;
const MENU_TILE_HEIGHT: f32 = 130.0;
const MENU_GAP: f32 = 16.0;
const MENU_TOP: f32 = 150.0;
const MENU_SIDE: f32 = 64.0;

const CHAT_PANEL: Rectangle = Rectangle { x: 1300.0, y: 170.0, width: 560.0, height: 760.0 };
const CHAT_TEXT: i32 = 22;
const CHAT_PLACEHOLDER: &str = "Ask about visas...";

const EDITOR_PANEL: Rectangle = Rectangle { x: 510.0, y: 110.0, width: 900.0, height: 860.0 };
const EDITOR_ROW_HEIGHT: f32 = 48.0;

pub fn menu_close_rect() -> Rectangle {
    Rectangle::new(RENDER_WIDTH as f32 - MENU_SIDE - 64.0, 48.0, 64.0, 64.0)
}

/// Tile rectangles for `count` services, four per row.
pub fn menu_tiles(count: usize) -> Vec<Rectangle> {
    let width = (RENDER_WIDTH as f32 - 2.0 * MENU_SIDE - MENU_GAP * (MENU_COLUMNS as f32 - 1.0))
        / MENU_COLUMNS as f32;
    (0..count)
        .map(|i| {
            let (col, row) = ((i % MENU_COLUMNS) as f32, (i / MENU_COLUMNS) as f32);
            Rectangle::new(
                MENU_SIDE + col * (width + MENU_GAP),
                MENU_TOP + row * (MENU_TILE_HEIGHT + MENU_GAP),
                width,
                MENU_TILE_HEIGHT,
            )
        })
        .collect()
}

/// Index of the menu tile under `point`.
pub fn menu_tile_at(count: usize, point: Vector2) -> Option<usize> {
    menu_tiles(count).iter().position(|r| contains(r, point))
}

pub fn draw_menu<D: RaylibDraw>(
    d: &mut D,
    slides: &[ActiveSlide],
    media: &MediaCache,
    palette: &Palette,
    pointer: Vector2,
) {
    d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, with_alpha(Color::BLACK, 0.95));
    d.draw_rectangle(MENU_SIDE as i32 + 4, 66, 28, 28, palette.accent);
    d.draw_text("Services Menu", MENU_SIDE as i32 + 48, 60, 44, Color::WHITE);
    d.draw_rectangle(MENU_SIDE as i32, 128, RENDER_WIDTH - 2 * MENU_SIDE as i32, 1, with_alpha(Color::WHITE, 0.1));

    let close = menu_close_rect();
    d.draw_circle_v(
        Vector2::new(close.x + close.width * 0.5, close.y + close.height * 0.5),
        close.width * 0.5,
        with_alpha(Color::WHITE, if contains(&close, pointer) { 0.2 } else { 0.1 }),
    );
    d.draw_text("X", close.x as i32 + 22, close.y as i32 + 18, 30, Color::WHITE);

    for (slide, tile) in slides.iter().zip(menu_tiles(slides.len())) {
        let hot = contains(&tile, pointer);
        d.draw_rectangle_rec(tile, rgb(0x18181b));
        if let Some(texture) = media.get(&slide.background_source()) {
            draw_cover(d, texture, tile, with_alpha(Color::WHITE, if hot { 0.7 } else { 0.5 }));
        }
        d.draw_rectangle_gradient_v(
            tile.x as i32,
            tile.y as i32,
            tile.width as i32,
            tile.height as i32,
            with_alpha(Color::BLACK, 0.0),
            Color::BLACK,
        );
        let border = if hot { with_alpha(Color::WHITE, 0.4) } else { with_alpha(Color::WHITE, 0.1) };
        d.draw_rectangle_lines_ex(tile, 1.5, border);
        let title_color = if hot { palette.accent } else { Color::WHITE };
        d.draw_text(slide.item.title, tile.x as i32 + 20, (tile.y + tile.height) as i32 - 42, 24, title_color);
    }
}

pub fn chat_close_rect() -> Rectangle {
    Rectangle::new(CHAT_PANEL.x + CHAT_PANEL.width - 60.0, CHAT_PANEL.y + 20.0, 40.0, 40.0)
}

pub fn chat_send_rect() -> Rectangle {
    Rectangle::new(CHAT_PANEL.x + CHAT_PANEL.width - 84.0, CHAT_PANEL.y + CHAT_PANEL.height - 72.0, 64.0, 52.0)
}

pub fn chat_panel_rect() -> Rectangle {
    CHAT_PANEL
}

pub fn draw_assistant<D: RaylibDraw>(
    d: &mut D,
    assistant: &Assistant,
    palette: &Palette,
    glass: bool,
    elapsed: f32,
) {
    d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, with_alpha(Color::BLACK, 0.5));
    let panel = CHAT_PANEL;
    draw_panel(d, panel, glass, Color::BLACK);

    // Title bar
    let (px, py) = (panel.x as i32, panel.y as i32);
    d.draw_text("Typing Assistant", px + 24, py + 22, 28, Color::WHITE);
    d.draw_circle(px + 32, py + 66, 5.0, Color::GREEN);
    d.draw_text("Online", px + 44, py + 57, 18, with_alpha(Color::WHITE, 0.7));
    let close = chat_close_rect();
    d.draw_text("X", close.x as i32 + 12, close.y as i32 + 8, 26, with_alpha(Color::WHITE, 0.7));
    d.draw_rectangle(px, py + 92, panel.width as i32, 1, with_alpha(Color::WHITE, 0.1));

    // Messages, newest at the bottom; older ones scroll off the top
    let top = py + 104;
    let mut bottom = py + panel.height as i32 - 96;
    let bubble_max = (panel.width * 0.8) as i32;

    if assistant.is_loading() {
        let bubble = Rectangle::new(panel.x + 20.0, (bottom - 48) as f32, 96.0, 44.0);
        d.draw_rectangle_rounded(bubble, 0.5, 8, with_alpha(Color::WHITE, 0.1));
        for i in 0..3 {
            let bounce = ((elapsed * 6.0 - i as f32 * 0.9).sin().max(0.0)) * 6.0;
            d.draw_circle(bubble.x as i32 + 28 + i * 20, bubble.y as i32 + 22 - bounce as i32, 5.0, with_alpha(Color::WHITE, 0.5));
        }
        bottom -= 60;
    }

    for message in assistant.messages().iter().rev() {
        let lines = wrap_text(&message.text, bubble_max - 32, |s| text_width(s, CHAT_TEXT));
        let text_w = lines.iter().map(|l| text_width(l, CHAT_TEXT)).max().unwrap_or(0);
        let height = lines.len() as i32 * (CHAT_TEXT + 6) + 44;
        let y = bottom - height;
        if y < top {
            break;
        }
        let width = (text_w + 32).max(90);
        let (x, fill, ink) = match message.sender {
            ChatSender::User => (px + panel.width as i32 - 20 - width, palette.accent, Color::BLACK),
            ChatSender::Bot => (px + 20, with_alpha(Color::WHITE, 0.1), Color::WHITE),
        };
        d.draw_rectangle_rounded(Rectangle::new(x as f32, y as f32, width as f32, height as f32), 0.25, 8, fill);
        let mut ly = y + 14;
        for line in &lines {
            d.draw_text(line, x + 16, ly, CHAT_TEXT, ink);
            ly += CHAT_TEXT + 6;
        }
        let stamp = message.timestamp.format("%H:%M").to_string();
        d.draw_text(&stamp, x + width - 16 - text_width(&stamp, 14), ly + 2, 14, with_alpha(ink, 0.5));
        bottom = y - 12;
    }

    // Input row
    let input = Rectangle::new(panel.x + 20.0, panel.y + panel.height - 72.0, panel.width - 124.0, 52.0);
    d.draw_rectangle_rounded(input, 0.3, 8, with_alpha(Color::BLACK, 0.5));
    let typed = assistant.input();
    if typed.is_empty() {
        d.draw_text(CHAT_PLACEHOLDER, input.x as i32 + 16, input.y as i32 + 15, CHAT_TEXT, with_alpha(Color::WHITE, 0.3));
    } else {
        // Keep the caret end of long input visible
        let visible = tail_fitting(typed, input.width as i32 - 40);
        d.draw_text(visible, input.x as i32 + 16, input.y as i32 + 15, CHAT_TEXT, Color::WHITE);
    }
    if (elapsed * 2.0) as i32 % 2 == 0 {
        let caret_x = input.x as i32 + 18 + text_width(tail_fitting(typed, input.width as i32 - 40), CHAT_TEXT);
        d.draw_rectangle(caret_x, input.y as i32 + 13, 2, 26, with_alpha(Color::WHITE, 0.8));
    }

    let send = chat_send_rect();
    let can_send = !typed.trim().is_empty() && !assistant.is_loading();
    let fill = if can_send { palette.accent } else { with_alpha(Color::WHITE, 0.1) };
    d.draw_rectangle_rounded(send, 0.3, 8, fill);
    d.draw_text(">", send.x as i32 + 24, send.y as i32 + 12, 30, if can_send { Color::BLACK } else { with_alpha(Color::WHITE, 0.3) });
}

fn tail_fitting(text: &str, max_width: i32) -> &str {
    let mut start = 0;
    while text_width(&text[start..], CHAT_TEXT) > max_width {
        match text[start..].chars().next() {
            Some(c) => start += c.len_utf8(),
            None => break,
        }
    }
    &text[start..]
}

pub fn editor_row_rect(index: usize) -> Rectangle {
    Rectangle::new(
        EDITOR_PANEL.x + 32.0,
        EDITOR_PANEL.y + 100.0 + index as f32 * EDITOR_ROW_HEIGHT,
        EDITOR_PANEL.width - 64.0,
        EDITOR_ROW_HEIGHT - 6.0,
    )
}

/// Row under `point`, if any.
pub fn editor_row_at(point: Vector2) -> Option<usize> {
    (0..EditorRow::ALL.len()).find(|i| contains(&editor_row_rect(*i), point))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorButton {
    Save,
    Reset,
    Cancel,
}

pub fn editor_buttons() -> [(EditorButton, Rectangle); 3] {
    let y = EDITOR_PANEL.y + EDITOR_PANEL.height - 84.0;
    let right = EDITOR_PANEL.x + EDITOR_PANEL.width - 32.0;
    [
        (EditorButton::Save, Rectangle::new(right - 180.0, y, 180.0, 56.0)),
        (EditorButton::Cancel, Rectangle::new(right - 372.0, y, 180.0, 56.0)),
        (EditorButton::Reset, Rectangle::new(EDITOR_PANEL.x + 32.0, y, 220.0, 56.0)),
    ]
}

pub fn editor_button_at(point: Vector2) -> Option<EditorButton> {
    editor_buttons().iter().find(|(_, r)| contains(r, point)).map(|(b, _)| *b)
}

pub fn draw_editor<D: RaylibDraw>(d: &mut D, editor: &SettingsEditor, palette: &Palette, pointer: Vector2) {
    d.draw_rectangle(0, 0, RENDER_WIDTH, RENDER_HEIGHT, with_alpha(Color::BLACK, 0.7));
    draw_panel(d, EDITOR_PANEL, false, rgb(0x18181b));
    let (px, py) = (EDITOR_PANEL.x as i32, EDITOR_PANEL.y as i32);
    d.draw_text("Settings", px + 32, py + 32, 40, Color::WHITE);
    let hint = "Up/Down select, Enter change, S save, Esc cancel";
    d.draw_text(hint, px + EDITOR_PANEL.width as i32 - 32 - text_width(hint, 18), py + 46, 18, with_alpha(Color::WHITE, 0.4));

    let draft = editor.draft();
    for (i, row) in EditorRow::ALL.iter().enumerate() {
        let rect = editor_row_rect(i);
        if i == editor.selected() {
            d.draw_rectangle_rounded(rect, 0.3, 8, with_alpha(palette.accent, 0.25));
        } else if contains(&rect, pointer) {
            d.draw_rectangle_rounded(rect, 0.3, 8, with_alpha(Color::WHITE, 0.06));
        }
        d.draw_text(row.label(), rect.x as i32 + 20, rect.y as i32 + 10, 24, Color::WHITE);
        let value = row.value(draft);
        d.draw_text(&value, (rect.x + rect.width) as i32 - 20 - text_width(&value, 24), rect.y as i32 + 10, 24, palette.accent);
    }

    for (button, rect) in editor_buttons() {
        let (label, fill, ink) = match button {
            EditorButton::Save => ("Save", palette.accent, Color::BLACK),
            EditorButton::Cancel => ("Cancel", with_alpha(Color::WHITE, 0.1), Color::WHITE),
            EditorButton::Reset => ("Factory reset", with_alpha(Color::RED, 0.25), Color::WHITE),
        };
        d.draw_rectangle_rounded(rect, 0.3, 8, fill);
        let w = text_width(label, 24);
        d.draw_text(label, (rect.x + rect.width * 0.5) as i32 - w / 2, rect.y as i32 + 16, 24, ink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_fits_the_whole_catalog() {
        let tiles = menu_tiles(crate::catalog::SERVICES.len());
        let last = tiles.last().unwrap();
        assert!(last.y + last.height <= RENDER_HEIGHT as f32);
        assert!(last.x + last.width <= RENDER_WIDTH as f32);
    }

    #[test]
    fn menu_hit_testing() {
        let tiles = menu_tiles(5);
        let centre = |r: &Rectangle| Vector2::new(r.x + r.width * 0.5, r.y + r.height * 0.5);
        assert_eq!(menu_tile_at(5, centre(&tiles[4])), Some(4));
        assert_eq!(menu_tile_at(5, Vector2::new(1.0, 1.0)), None);
        // Gap between tiles
        assert_eq!(menu_tile_at(5, Vector2::new(tiles[0].x + tiles[0].width + 1.0, tiles[0].y + 10.0)), None);
    }

    #[test]
    fn editor_rows_and_buttons_stay_inside_the_panel() {
        let last = editor_row_rect(EditorRow::ALL.len() - 1);
        let buttons = editor_buttons();
        for (_, rect) in &buttons {
            assert!(rect.y > last.y + last.height);
            assert!(rect.y + rect.height <= EDITOR_PANEL.y + EDITOR_PANEL.height);
        }
        let row = editor_row_rect(3);
        assert_eq!(editor_row_at(Vector2::new(row.x + 5.0, row.y + 5.0)), Some(3));
        let save = buttons[0].1;
        assert_eq!(editor_button_at(Vector2::new(save.x + 1.0, save.y + 1.0)), Some(EditorButton::Save));
    }

    #[test]
    fn chat_controls_are_inside_the_panel() {
        let panel = chat_panel_rect();
        for rect in [chat_close_rect(), chat_send_rect()] {
            assert!(contains(&panel, Vector2::new(rect.x, rect.y)));
            assert!(rect.x + rect.width <= panel.x + panel.width);
            assert!(rect.y + rect.height <= panel.y + panel.height);
        }
    }
}
