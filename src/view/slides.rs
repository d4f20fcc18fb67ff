//! Slide bodies, one function per template.

use raylib::prelude::*;

use crate::catalog::{PARTNERS, SlideKind, TESTIMONIALS};
use crate::constants::{RENDER_WIDTH, REVIEW_INTERVAL};
use crate::settings::AppSettings;
use crate::slides::ActiveSlide;
use crate::template::Template;
use crate::texture_loader::MediaCache;
use super::{Palette, contains, draw_panel, draw_paragraph, draw_text_centered, rgb, text_width, with_alpha};

const BODY: Rectangle = Rectangle { x: 120.0, y: 170.0, width: 1680.0, height: 700.0 };
const PARTNER_COLUMNS: usize = 4;
const CONTACT_MAP: &str =
    "https://images.unsplash.com/photo-1524661135-423995f22d0b?q=80&w=1920&auto=format&fit=crop";

/// What a template needs to draw one slide.
pub struct SlideView<'a> {
    pub slide: &'a ActiveSlide,
    pub settings: &'a AppSettings,
    pub palette: &'a Palette,
    pub media: &'a MediaCache,
    pub logo: Option<&'a Texture2D>,
    pub shown_for: f32,
    pub alpha: f32,
}

impl SlideView<'_> {
    fn ink(&self, color: Color) -> Color {
        with_alpha(color, self.alpha)
    }

    fn glass(&self) -> bool {
        self.settings.enable_blur_effects
    }
}

/// Media a template will ask the cache for, so it can be fetched ahead.
pub fn media_sources(slide: &ActiveSlide) -> Vec<String> {
    let mut sources = vec![slide.background_source()];
    match Template::select(slide.id(), slide.kind()) {
        Template::IdentityCard => sources.push(slide.feature_image()),
        Template::Contact => sources.push(CONTACT_MAP.to_string()),
        _ => {}
    }
    sources
}

pub fn draw_slide<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    match Template::select(view.slide.id(), view.slide.kind()) {
        Template::Hero => draw_hero(d, view),
        Template::GoldenPackage => draw_golden(d, view),
        Template::IdentityCard => draw_identity_card(d, view),
        Template::PartnerGrid => draw_partners(d, view),
        Template::Contact => draw_contact(d, view),
        Template::ReviewsCarousel => draw_reviews(d, view),
        Template::Standard => draw_standard(d, view),
    }
}

/// The "Explore Services" button on the hero slide.
pub fn hero_cta_rect() -> Rectangle {
    Rectangle::new(RENDER_WIDTH as f32 * 0.5 - 200.0, 770.0, 400.0, 72.0)
}

pub fn review_index(shown_for: f32) -> usize {
    (shown_for.max(0.0) / REVIEW_INTERVAL) as usize % TESTIMONIALS.len()
}

/// Cell `index` of a grid laid over `area`, row-major.
pub fn grid_cell(index: usize, columns: usize, rows: usize, area: Rectangle, gap: f32) -> Rectangle {
    let w = (area.width - gap * (columns as f32 - 1.0)) / columns as f32;
    let h = (area.height - gap * (rows as f32 - 1.0)) / rows as f32;
    let (col, row) = (index % columns, index / columns);
    Rectangle::new(area.x + col as f32 * (w + gap), area.y + row as f32 * (h + gap), w, h)
}

/// Draws `texture` filling `dest`, cropped to keep its aspect ratio.
pub fn draw_cover<D: RaylibDraw>(d: &mut D, texture: &Texture2D, dest: Rectangle, tint: Color) {
    let (tw, th) = (texture.width() as f32, texture.height() as f32);
    let dest_ratio = dest.width / dest.height;
    let (sw, sh) = if tw / th > dest_ratio { (th * dest_ratio, th) } else { (tw, tw / dest_ratio) };
    let source = Rectangle::new((tw - sw) * 0.5, (th - sh) * 0.5, sw, sh);
    d.draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, tint);
}

fn draw_hero<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    let cx = RENDER_WIDTH / 2;
    let bob = (view.shown_for * std::f32::consts::TAU / 6.0).sin() * 15.0;

    // Floating logo disc with two slow rings
    let center = Vector2::new(cx as f32, 340.0 + bob);
    let ring = view.shown_for * 0.4;
    for (radius, speed) in [(160.0, 1.0), (145.0, -0.75)] {
        let start = ring * speed * 57.3;
        d.draw_ring(center, radius, radius + 2.0, start, start + 90.0, 24, view.ink(with_alpha(Color::WHITE, 0.3)));
        d.draw_ring(center, radius, radius + 1.0, start + 90.0, start + 360.0, 48, view.ink(with_alpha(Color::WHITE, 0.06)));
    }
    d.draw_circle_v(center, 128.0, view.ink(with_alpha(Color::BLACK, 0.4)));
    match view.logo {
        Some(logo) => {
            let side = 180.0;
            let dest = Rectangle::new(center.x - side * 0.5, center.y - side * 0.5, side, side);
            draw_cover(d, logo, dest, view.ink(Color::WHITE));
        }
        None => {
            let initials = super::chrome::initials(&view.settings.company_name);
            draw_text_centered(d, &initials, cx, center.y as i32 - 40, 80, view.ink(with_alpha(Color::WHITE, 0.8)));
        }
    }

    draw_text_centered(d, "WELCOME TO", cx, 520, 30, view.ink(with_alpha(Color::WHITE, 0.6)));
    draw_text_centered(d, &view.settings.company_name.to_uppercase(), cx, 565, 88, view.ink(view.palette.accent));
    draw_text_centered(d, view.slide.item.description, cx, 670, 36, view.ink(Color::WHITE));

    // Bottom bar: contact, optional call to action, location
    let bar = Rectangle::new(cx as f32 - 700.0, 760.0, 1400.0, 92.0);
    draw_panel(d, bar, view.glass(), view.ink(Color::BLACK));
    let muted = view.ink(with_alpha(Color::WHITE, 0.4));
    d.draw_text("CONTACT", bar.x as i32 + 40, bar.y as i32 + 18, 18, muted);
    d.draw_text(&view.settings.contact_phone, bar.x as i32 + 40, bar.y as i32 + 44, 28, view.ink(Color::WHITE));
    let loc_w = text_width(&view.settings.location, 28).max(text_width("LOCATION", 18));
    let right = (bar.x + bar.width) as i32 - 40;
    d.draw_text("LOCATION", right - loc_w, bar.y as i32 + 18, 18, muted);
    d.draw_text(&view.settings.location, right - loc_w, bar.y as i32 + 44, 28, view.ink(Color::WHITE));

    if view.settings.show_hero_cta {
        let cta = hero_cta_rect();
        d.draw_rectangle_rounded(cta, 1.0, 16, view.ink(Color::WHITE));
        draw_text_centered(d, "EXPLORE SERVICES", cx, (cta.y + cta.height * 0.5) as i32 - 14, 28, view.ink(Color::BLACK));
    }
}

fn draw_golden<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    let item = view.slide.item;
    let accent = view.palette.accent;
    let x = BODY.x as i32;

    let badge = "PREMIUM SERVICE";
    let badge_rect = Rectangle::new(BODY.x, BODY.y + 20.0, (text_width(badge, 22) + 32) as f32, 40.0);
    d.draw_rectangle_rounded(badge_rect, 0.2, 6, view.ink(with_alpha(Color::WHITE, 0.1)));
    d.draw_text(badge, x + 16, BODY.y as i32 + 29, 22, view.ink(accent));

    d.draw_text(item.title, x, BODY.y as i32 + 90, 76, view.ink(rgb(0xfffbeb)));
    let mut y = draw_paragraph(d, item.description, x, BODY.y as i32 + 190, 820, 32, view.ink(with_alpha(Color::WHITE, 0.8)));

    y += 30;
    for (i, feature) in item.features.iter().enumerate() {
        let fx = x + (i % 2) as i32 * 420;
        let fy = y + (i / 2) as i32 * 52;
        d.draw_circle(fx + 14, fy + 14, 14.0, view.ink(Color::WHITE));
        d.draw_text("v", fx + 9, fy + 2, 22, view.ink(Color::BLACK));
        d.draw_text(feature, fx + 40, fy + 2, 24, view.ink(with_alpha(Color::WHITE, 0.9)));
    }

    // Residency card
    let card = Rectangle::new(1060.0, 300.0, 640.0, 404.0);
    let (cx, cy, cw, ch) = (card.x as i32, card.y as i32, card.width as i32, card.height as i32);
    d.draw_rectangle_gradient_h(cx, cy, cw, ch, view.ink(accent), view.ink(Color::BLACK));
    d.draw_rectangle_rounded(
        Rectangle::new(card.x + 8.0, card.y + 8.0, card.width - 16.0, card.height - 16.0),
        0.08,
        12,
        view.ink(with_alpha(Color::BLACK, 0.8)),
    );
    d.draw_rectangle_rounded(Rectangle::new(card.x + 40.0, card.y + 40.0, 64.0, 48.0), 0.2, 6, view.ink(rgb(0xeab308)));
    let title = "GOLDEN VISA";
    d.draw_text(title, cx + cw - 40 - text_width(title, 28), cy + 40, 28, view.ink(accent));
    let sub = "UAE RESIDENCY";
    d.draw_text(sub, cx + cw - 40 - text_width(sub, 16), cy + 74, 16, view.ink(with_alpha(Color::WHITE, 0.4)));
    d.draw_text("10", cx + 50, cy + ch - 200, 160, view.ink(accent));
    d.draw_text("YEARS", cx + 260, cy + ch - 130, 40, view.ink(with_alpha(Color::WHITE, 0.9)));
    d.draw_text("Self-Sponsored", cx + 260, cy + ch - 84, 20, view.ink(with_alpha(Color::WHITE, 0.4)));
}

fn draw_identity_card<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    let item = view.slide.item;
    let sky = rgb(0x38bdf8);
    let panel = Rectangle::new(BODY.x + 60.0, BODY.y + 10.0, BODY.width - 120.0, BODY.height - 20.0);
    draw_panel(d, panel, view.glass(), view.ink(rgb(0x0a0a0a)));

    let x = panel.x as i32 + 70;
    let mut y = panel.y as i32 + 70;
    d.draw_text("FEDERAL AUTHORITY", x, y, 20, view.ink(with_alpha(Color::WHITE, 0.6)));
    y += 50;
    d.draw_text("Emirates ID", x, y, 72, view.ink(Color::WHITE));
    d.draw_text("Services", x, y + 78, 72, view.ink(sky));
    y += 180;
    let blurb = format!("{}. We handle applications, renewals, and replacements with express typing.", item.description.trim_end_matches('.'));
    y = draw_paragraph(d, &blurb, x, y, 640, 26, view.ink(with_alpha(Color::WHITE, 0.8)));
    y += 24;
    for feature in item.features {
        d.draw_rectangle_rounded(Rectangle::new(x as f32, y as f32 + 10.0, 40.0, 5.0), 1.0, 4, view.ink(sky));
        d.draw_text(feature, x + 56, y, 26, view.ink(Color::WHITE));
        y += 44;
    }

    // The card itself floats on the right
    let float = (view.shown_for * std::f32::consts::TAU / 8.0).sin() * 15.0;
    let card = Rectangle::new(panel.x + panel.width - 700.0, panel.y + 150.0 + float, 600.0, 380.0);
    d.draw_rectangle_rounded(card, 0.08, 12, view.ink(rgb(0x1e293b)));
    if let Some(texture) = view.media.get(&view.slide.feature_image()) {
        draw_cover(d, texture, card, view.ink(Color::WHITE));
    }
    let strip = Rectangle::new(card.x + 24.0, card.y + card.height * 0.62, card.width - 48.0, card.height * 0.3);
    d.draw_rectangle_rounded(strip, 0.2, 8, view.ink(with_alpha(Color::BLACK, 0.55)));
    d.draw_text("ID NUMBER", strip.x as i32 + 24, strip.y as i32 + 22, 16, view.ink(with_alpha(Color::WHITE, 0.5)));
    d.draw_text("784-1234-56789-1", strip.x as i32 + 24, strip.y as i32 + 48, 30, view.ink(Color::WHITE));
    d.draw_circle((strip.x + strip.width) as i32 - 44, (strip.y + strip.height * 0.5) as i32, 16.0, view.ink(rgb(0x4ade80)));
}

fn draw_standard<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    let item = view.slide.item;
    // Kids slides swap the theme accent for a brighter one
    let accent = if item.kind == SlideKind::Kids { rgb(0xf472b6) } else { view.palette.accent };
    let bob = (view.shown_for * std::f32::consts::TAU / 6.0).sin() * 8.0;

    let panel = Rectangle::new(BODY.x, BODY.y + bob, BODY.width, BODY.height);
    draw_panel(d, panel, view.glass(), view.ink(rgb(0x0a0a0a)));

    let x = panel.x as i32 + 64;
    let mut y = panel.y as i32 + 56;
    d.draw_rectangle_rounded(Rectangle::new(x as f32, y as f32, 84.0, 84.0), 0.3, 8, view.ink(with_alpha(Color::WHITE, 0.06)));
    let glyph: String = item.icon.chars().take(2).collect();
    draw_text_centered(d, &glyph, x + 42, y + 24, 36, view.ink(accent));
    d.draw_text(item.title, x + 110, y, 52, view.ink(Color::WHITE));
    if let Some(details) = &item.details {
        let time = format!("TIME: {}", details.processing_time);
        d.draw_text(&time, x + 110, y + 60, 22, view.ink(accent));
    }

    y += 120;
    d.draw_rectangle(x, y, 4, 96, view.ink(with_alpha(Color::WHITE, 0.2)));
    y = draw_paragraph(d, item.description, x + 20, y, 760, 28, view.ink(with_alpha(Color::WHITE, 0.8))).max(y + 96) + 28;

    match &item.details {
        Some(details) => {
            d.draw_text("DOCUMENTS REQUIRED", x, y, 20, view.ink(with_alpha(Color::WHITE, 0.5)));
            y += 36;
            for req in details.requirements {
                d.draw_circle(x + 6, y + 11, 4.0, view.ink(with_alpha(Color::WHITE, 0.4)));
                d.draw_text(req, x + 24, y, 22, view.ink(with_alpha(Color::WHITE, 0.9)));
                y += 34;
            }
        }
        None => {
            for (i, feature) in item.features.iter().enumerate() {
                let cell = Rectangle::new(
                    (x + (i % 2) as i32 * 400) as f32,
                    (y + (i / 2) as i32 * 72) as f32,
                    384.0,
                    60.0,
                );
                d.draw_rectangle_rounded(cell, 0.3, 8, view.ink(with_alpha(Color::BLACK, 0.2)));
                d.draw_text("v", cell.x as i32 + 18, cell.y as i32 + 16, 26, view.ink(accent));
                d.draw_text(feature, cell.x as i32 + 52, cell.y as i32 + 18, 22, view.ink(with_alpha(Color::WHITE, 0.9)));
            }
        }
    }

    let image = Rectangle::new(panel.x + panel.width - 620.0, panel.y + 60.0, 560.0, 480.0);
    d.draw_rectangle_rounded(image, 0.1, 10, view.ink(with_alpha(Color::WHITE, 0.05)));
    if let Some(texture) = view.media.get(&view.slide.background_source()) {
        draw_cover(d, texture, image, view.ink(Color::WHITE));
    }
    d.draw_rectangle_gradient_v(
        image.x as i32,
        (image.y + image.height * 0.5) as i32,
        image.width as i32,
        (image.height * 0.5) as i32,
        view.ink(with_alpha(Color::BLACK, 0.0)),
        view.ink(with_alpha(Color::BLACK, 0.8)),
    );
    if view.slide.video_url.is_some() {
        d.draw_text("VIDEO", image.x as i32 + 24, (image.y + image.height) as i32 - 44, 24, view.ink(Color::WHITE));
    }

    // Key features as pills when the requirements took the left column
    if item.details.is_some() {
        let mut px = image.x as i32;
        let py = (image.y + image.height) as i32 + 24;
        for feature in item.features.iter().take(4) {
            let w = text_width(feature, 16) + 24;
            if px + w > (image.x + image.width) as i32 {
                break;
            }
            d.draw_rectangle_rounded(Rectangle::new(px as f32, py as f32, w as f32, 30.0), 0.3, 6, view.ink(with_alpha(Color::WHITE, 0.06)));
            d.draw_text(feature, px + 12, py + 7, 16, view.ink(with_alpha(Color::WHITE, 0.6)));
            px += w + 8;
        }
    }
}

fn draw_partners<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    draw_text_centered(d, "GOVERNMENT PARTNERS", RENDER_WIDTH / 2, BODY.y as i32 + 10, 44, view.ink(Color::WHITE));

    let rows = PARTNERS.len().div_ceil(PARTNER_COLUMNS);
    let area = Rectangle::new(BODY.x + 80.0, BODY.y + 90.0, BODY.width - 160.0, BODY.height - 100.0);
    let name_color = match view.settings.theme {
        crate::settings::Theme::Custom => view.palette.accent,
        _ => with_alpha(Color::WHITE, 0.85),
    };
    for (i, partner) in PARTNERS.iter().enumerate() {
        let cell = grid_cell(i, PARTNER_COLUMNS, rows, area, 24.0);
        draw_panel(d, cell, view.glass(), view.ink(with_alpha(Color::WHITE, 0.15)));
        let cx = (cell.x + cell.width * 0.5) as i32;
        let cy = (cell.y + cell.height * 0.5) as i32;
        draw_text_centered(d, partner.name, cx, cy - 26, 34, view.ink(name_color));
        draw_text_centered(d, &partner.sub.to_uppercase(), cx, cy + 16, 16, view.ink(with_alpha(Color::WHITE, 0.4)));
    }
}

fn draw_contact<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    let settings = view.settings;
    let accent = view.palette.accent;

    let map = Rectangle::new(BODY.x, BODY.y + 20.0, BODY.width * 0.58, BODY.height - 40.0);
    d.draw_rectangle_rounded(map, 0.06, 10, view.ink(rgb(0x1e293b)));
    if let Some(texture) = view.media.get(CONTACT_MAP) {
        draw_cover(d, texture, map, view.ink(with_alpha(Color::WHITE, 0.7)));
    }
    let pin_y = map.y + map.height * 0.45 + (view.shown_for * std::f32::consts::TAU / 3.0).sin() * 10.0;
    let pin = Vector2::new(map.x + map.width * 0.5, pin_y);
    let pulse = (view.shown_for % 2.0) / 2.0;
    d.draw_circle_v(pin, 24.0 + pulse * 60.0, view.ink(with_alpha(accent, 0.4 * (1.0 - pulse))));
    d.draw_circle_v(pin, 22.0, view.ink(accent));
    d.draw_circle_v(pin, 8.0, view.ink(Color::BLACK));

    let address = Rectangle::new(map.x + 32.0, map.y + map.height - 124.0, map.width - 64.0, 92.0);
    draw_panel(d, address, view.glass(), view.ink(Color::BLACK));
    d.draw_text("CURRENT LOCATION", address.x as i32 + 28, address.y as i32 + 18, 16, view.ink(with_alpha(Color::WHITE, 0.5)));
    d.draw_text(&settings.location, address.x as i32 + 28, address.y as i32 + 44, 28, view.ink(Color::WHITE));

    let info = Rectangle::new(map.x + map.width + 32.0, map.y, BODY.width - map.width - 32.0, map.height);
    draw_panel(d, info, view.glass(), view.ink(with_alpha(Color::WHITE, 0.15)));
    let x = info.x as i32 + 48;
    let mut y = info.y as i32 + 48;
    d.draw_text("Visit Us", x, y, 52, view.ink(Color::WHITE));
    d.draw_text("We are open 7 days a week", x, y + 62, 22, view.ink(with_alpha(Color::WHITE, 0.6)));
    y += 130;

    let rows: [(&str, &[&str], i32, Color); 4] = [
        ("PHONE SUPPORT", &[settings.contact_phone.as_str()], 30, accent),
        ("WHATSAPP", &[settings.contact_whatsapp.as_str()], 26, Color::WHITE),
        ("EMAIL INQUIRY", &[settings.contact_email.as_str()], 24, Color::WHITE),
        (
            "WORKING HOURS",
            &["Sat-Thu: 9am-1pm & 5pm-10pm", "Fri: 9am-12pm & 5pm-10pm"],
            22,
            Color::WHITE,
        ),
    ];
    for (label, lines, size, color) in rows {
        if lines.iter().all(|l| l.is_empty()) {
            continue;
        }
        d.draw_text(label, x, y, 16, view.ink(with_alpha(Color::WHITE, 0.4)));
        y += 26;
        for line in lines {
            d.draw_text(line, x, y, size, view.ink(color));
            y += size + 8;
        }
        y += 18;
    }
}

fn draw_reviews<D: RaylibDraw>(d: &mut D, view: &SlideView) {
    let cx = RENDER_WIDTH / 2;
    draw_text_centered(d, "CUSTOMER STORIES", cx, BODY.y as i32 + 20, 44, view.ink(Color::WHITE));
    d.draw_rectangle(cx - 48, BODY.y as i32 + 76, 96, 4, view.ink(with_alpha(Color::WHITE, 0.5)));

    let index = review_index(view.shown_for);
    let review = &TESTIMONIALS[index];
    // Each review fades in and out within its interval
    let phase = (view.shown_for.max(0.0) % REVIEW_INTERVAL) / REVIEW_INTERVAL;
    let fade = (phase / 0.1).min((1.0 - phase) / 0.1).clamp(0.0, 1.0);
    let ink = |c: Color| view.ink(with_alpha(c, fade));

    let card = Rectangle::new(cx as f32 - 560.0, BODY.y + 130.0, 1120.0, 440.0);
    draw_panel(d, card, view.glass(), ink(with_alpha(Color::WHITE, 0.2)));
    d.draw_text("\"", cx - 14, card.y as i32 + 30, 80, ink(with_alpha(Color::WHITE, 0.5)));

    let quote = format!("\"{}\"", review.text);
    let mut y = card.y as i32 + 120;
    for line in super::wrap_text(&quote, 960, |s| text_width(s, 36)) {
        draw_text_centered(d, &line, cx, y, 36, ink(Color::WHITE));
        y += 50;
    }

    let stars = review.rating as i32;
    let star_y = card.y + card.height - 130.0;
    for i in 0..stars {
        let sx = cx as f32 + (i as f32 - (stars - 1) as f32 * 0.5) * 34.0;
        draw_star(d, Vector2::new(sx, star_y), 13.0, ink(rgb(0xfbbf24)));
    }
    draw_text_centered(d, &review.name.to_uppercase(), cx, card.y as i32 + card.height as i32 - 100, 30, ink(Color::WHITE));
    draw_text_centered(d, review.role, cx, card.y as i32 + card.height as i32 - 60, 20, ink(with_alpha(Color::WHITE, 0.5)));

    // Indicators
    let total = TESTIMONIALS.len() as i32;
    let mut x = cx - (total * 16 + 24) / 2;
    for i in 0..total {
        let width = if i as usize == index { 32 } else { 8 };
        let color = if i as usize == index { Color::WHITE } else { with_alpha(Color::WHITE, 0.2) };
        d.draw_rectangle_rounded(Rectangle::new(x as f32, card.y + card.height + 30.0, width as f32, 8.0), 1.0, 4, view.ink(color));
        x += width + 8;
    }
}

fn draw_star<D: RaylibDraw>(d: &mut D, center: Vector2, radius: f32, color: Color) {
    d.draw_poly(center, 5, radius, -90.0, color);
    let points: Vec<Vector2> = (0..5)
        .map(|i| {
            let angle = (-90.0 + i as f32 * 72.0).to_radians();
            Vector2::new(center.x + angle.cos() * radius * 1.6, center.y + angle.sin() * radius * 1.6)
        })
        .collect();
    for i in 0..5 {
        let left = (-90.0 + i as f32 * 72.0 - 36.0).to_radians();
        let right = (-90.0 + i as f32 * 72.0 + 36.0).to_radians();
        let a = Vector2::new(center.x + left.cos() * radius * 0.8, center.y + left.sin() * radius * 0.8);
        let b = Vector2::new(center.x + right.cos() * radius * 0.8, center.y + right.sin() * radius * 0.8);
        // Counter-clockwise winding
        d.draw_triangle(points[i], a, b, color);
    }
}

/// True when `point` hits the hero call to action on `slide`.
pub fn hits_hero_cta(slide: &ActiveSlide, settings: &AppSettings, point: Vector2) -> bool {
    settings.show_hero_cta
        && Template::select(slide.id(), slide.kind()) == Template::Hero
        && contains(&hero_cta_rect(), point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn slide(id: &str) -> ActiveSlide {
        ActiveSlide::merge(catalog::find(id).unwrap(), None)
    }

    #[test]
    fn reviews_rotate_every_interval() {
        assert_eq!(review_index(0.0), 0);
        assert_eq!(review_index(REVIEW_INTERVAL - 0.01), 0);
        assert_eq!(review_index(REVIEW_INTERVAL), 1);
        assert_eq!(review_index(REVIEW_INTERVAL * TESTIMONIALS.len() as f32), 0);
    }

    #[test]
    fn partner_grid_fills_rows_left_to_right() {
        let area = Rectangle::new(0.0, 0.0, 430.0, 210.0);
        let first = grid_cell(0, 4, 2, area, 10.0);
        let fifth = grid_cell(4, 4, 2, area, 10.0);
        assert_eq!(first.width, 100.0);
        assert_eq!(first.height, 100.0);
        assert_eq!(fifth.x, 0.0);
        assert_eq!(fifth.y, 110.0);
        let last = grid_cell(7, 4, 2, area, 10.0);
        assert_eq!(last.x + last.width, 430.0);
    }

    #[test]
    fn hero_cta_only_when_enabled_and_on_hero() {
        let mut settings = AppSettings::default();
        let hit = Vector2::new(RENDER_WIDTH as f32 * 0.5, 800.0);
        settings.show_hero_cta = true;
        assert!(hits_hero_cta(&slide("hero"), &settings, hit));
        assert!(!hits_hero_cta(&slide("golden-visa"), &settings, hit));
        settings.show_hero_cta = false;
        assert!(!hits_hero_cta(&slide("hero"), &settings, hit));
    }

    #[test]
    fn identity_card_prefetches_its_card_image() {
        let sources = media_sources(&slide("emirates-id"));
        assert_eq!(sources.len(), 2);
        assert!(sources.contains(&slide("emirates-id").feature_image()));
        assert_eq!(media_sources(&slide("golden-visa")).len(), 1);
    }
}
