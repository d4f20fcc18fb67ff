use rand::rngs::ThreadRng;
use raylib::prelude::*;
use std::time::Instant;
use tracing::{error, info};

use crate::constants::*;
use crate::editor::SettingsEditor;
use crate::kiosk::Kiosk;
use crate::slide::SlideTransition;
use crate::template::Template;
use crate::texture_loader::MediaCache;
use crate::view::chrome::{self, DockAction};
use crate::view::overlays::{self, EditorButton};
use crate::view::particles::Particles;
use crate::view::slides::{self as slide_view, SlideView};
use crate::view::{Palette, contains, draw_text_centered, with_alpha};

/// Drives the kiosk from the raylib frame loop: input, timers, media and drawing.
pub struct KioskEngine {
    kiosk: Kiosk,
    media: MediaCache,
    transition: SlideTransition,
    particles: Particles,
    editor: Option<SettingsEditor>,

    shown_slide: Option<&'static str>,
    elapsed: f32,
    pointer: Vector2,
    dock_hovered: bool,
    rng: ThreadRng,
}

impl KioskEngine {
    pub fn new(kiosk: Kiosk) -> Self {
        let mut rng = rand::rng();
        let transition = SlideTransition::new(kiosk.settings().transition_effect);
        Self {
            particles: Particles::new(&mut rng),
            kiosk,
            media: MediaCache::new(),
            transition,
            editor: None,
            shown_slide: None,
            elapsed: 0.0,
            pointer: Vector2::zero(),
            dock_hovered: false,
            rng,
        }
    }

    pub fn render_frame(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        let dt = rl.get_frame_time();
        let now = Instant::now();

        // Mouse position in framebuffer coordinates
        let mouse = rl.get_mouse_position();
        self.pointer = Vector2::new(
            mouse.x * RENDER_WIDTH as f32 / rl.get_screen_width().max(1) as f32,
            mouse.y * RENDER_HEIGHT as f32 / rl.get_screen_height().max(1) as f32,
        );
        self.dock_hovered = contains(&chrome::dock_hover_zone(self.kiosk.settings()), self.pointer);

        self.handle_input(rl, now);
        self.kiosk.update(now, &mut self.rng);
        self.sync_slide();
        self.request_media();
        self.media.poll(rl, thread);

        self.transition.update(dt);
        if self.kiosk.settings().enable_particles {
            self.particles.update(dt);
        }
        self.elapsed += dt;

        if self.kiosk.settings().hide_cursor != rl.is_cursor_hidden() {
            if self.kiosk.settings().hide_cursor {
                rl.hide_cursor();
            } else {
                rl.show_cursor();
            }
        }

        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            self.draw(&mut d);
        });
    }

    /// Starts a fresh enter transition whenever a different slide comes up.
    fn sync_slide(&mut self) {
        let current = self.kiosk.current_slide().map(|s| s.id());
        if current != self.shown_slide {
            self.shown_slide = current;
            self.transition = SlideTransition::new(self.kiosk.settings().transition_effect);
        }
    }

    fn request_media(&mut self) {
        let slides = self.kiosk.slides();
        if !slides.is_empty() {
            let index = self.kiosk.rotation().index();
            // Current slide plus the one after it
            for slide in [&slides[index], &slides[(index + 1) % slides.len()]] {
                for source in slide_view::media_sources(slide) {
                    self.media.request(&source);
                }
            }
        }
        if self.kiosk.show_menu {
            for slide in slides {
                self.media.request(&slide.background_source());
            }
        }
        if let Some(logo) = self.kiosk.settings().logo.as_deref() {
            self.media.request(logo);
        }
    }

    fn handle_input(&mut self, rl: &mut RaylibHandle, now: Instant) {
        let clicked = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

        if rl.is_key_pressed(KeyboardKey::KEY_F11) {
            rl.toggle_fullscreen();
        }

        if self.editor.is_some() {
            self.handle_editor_input(rl, clicked, now);
        } else if self.kiosk.show_assistant {
            self.handle_assistant_input(rl, clicked);
        } else if self.kiosk.show_menu {
            self.handle_menu_input(rl, clicked);
        } else {
            self.handle_display_input(rl, clicked, now);
        }
    }

    fn handle_display_input(&mut self, rl: &mut RaylibHandle, clicked: bool, now: Instant) {
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            self.kiosk.toggle_play(now);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            self.kiosk.next(now, &mut self.rng);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            self.kiosk.previous(now, &mut self.rng);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_HOME) {
            self.kiosk.jump_to_service(HOME_SERVICE);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_M) {
            self.kiosk.jump_to_service(MENU_TARGET);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_A) {
            self.kiosk.show_assistant = true;
        }
        if rl.is_key_pressed(KeyboardKey::KEY_E) {
            self.open_editor();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            match self.kiosk.toggle_shuffle(now) {
                Ok(()) => info!("Shuffle {}", if self.kiosk.rotation().is_shuffle() { "on" } else { "off" }),
                Err(e) => error!("Could not save shuffle setting: {}", e),
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F5) {
            self.kiosk.reload_settings(now);
        }

        if !clicked {
            return;
        }
        let settings = self.kiosk.settings();
        let expanded = chrome::dock_expanded(settings, self.dock_hovered);
        let action = chrome::dock_buttons(settings, expanded)
            .into_iter()
            .find(|(_, rect)| contains(rect, self.pointer))
            .map(|(action, _)| action);
        if let Some(action) = action {
            self.dock_action(action, now);
            return;
        }
        let on_cta = self
            .kiosk
            .current_slide()
            .is_some_and(|slide| slide_view::hits_hero_cta(slide, settings, self.pointer));
        if on_cta {
            self.kiosk.jump_to_service(MENU_TARGET);
        }
    }

    fn dock_action(&mut self, action: DockAction, now: Instant) {
        match action {
            DockAction::Previous => self.kiosk.previous(now, &mut self.rng),
            DockAction::TogglePlay => self.kiosk.toggle_play(now),
            DockAction::Next => self.kiosk.next(now, &mut self.rng),
            DockAction::Home => {
                self.kiosk.jump_to_service(HOME_SERVICE);
            }
            DockAction::Menu => {
                self.kiosk.jump_to_service(MENU_TARGET);
            }
            DockAction::Assistant => self.kiosk.show_assistant = true,
            DockAction::Settings => self.open_editor(),
        }
    }

    fn open_editor(&mut self) {
        self.editor = Some(SettingsEditor::new(self.kiosk.settings()));
    }

    fn handle_menu_input(&mut self, rl: &mut RaylibHandle, clicked: bool) {
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) || rl.is_key_pressed(KeyboardKey::KEY_M) {
            self.kiosk.show_menu = false;
            return;
        }
        if !clicked {
            return;
        }
        if contains(&overlays::menu_close_rect(), self.pointer) {
            self.kiosk.show_menu = false;
            return;
        }
        let id = overlays::menu_tile_at(self.kiosk.slides().len(), self.pointer)
            .map(|i| self.kiosk.slides()[i].id());
        if let Some(id) = id {
            self.kiosk.jump_to_service(id);
        }
    }

    fn handle_assistant_input(&mut self, rl: &mut RaylibHandle, clicked: bool) {
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            self.kiosk.show_assistant = false;
            return;
        }
        while let Some(c) = rl.get_char_pressed() {
            self.kiosk.assistant_mut().push_char(c);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            self.kiosk.assistant_mut().pop_char();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_KP_ENTER) {
            self.kiosk.submit_question();
        }

        if clicked {
            if contains(&overlays::chat_send_rect(), self.pointer) {
                self.kiosk.submit_question();
            } else if contains(&overlays::chat_close_rect(), self.pointer)
                || !contains(&overlays::chat_panel_rect(), self.pointer)
            {
                self.kiosk.show_assistant = false;
            }
        }
    }

    fn handle_editor_input(&mut self, rl: &mut RaylibHandle, clicked: bool, now: Instant) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
            editor.select_next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_UP) {
            editor.select_previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) || rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            editor.activate_selected();
        }

        let mut button = None;
        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            button = Some(EditorButton::Save);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            button = Some(EditorButton::Cancel);
        }
        if clicked {
            if let Some(row) = overlays::editor_row_at(self.pointer) {
                editor.activate(row);
            }
            button = overlays::editor_button_at(self.pointer).or(button);
        }

        match button {
            Some(EditorButton::Reset) => editor.reset(),
            Some(EditorButton::Cancel) => self.editor = None,
            Some(EditorButton::Save) => {
                if let Some(editor) = self.editor.take() {
                    if let Err(e) = self.kiosk.save_settings(editor.into_draft(), now) {
                        error!("Could not save settings: {}", e);
                    }
                }
            }
            None => {}
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D) {
        let settings = self.kiosk.settings();
        let palette = Palette::for_settings(settings);
        let (w, h) = (RENDER_WIDTH, RENDER_HEIGHT);

        d.clear_background(Color::BLACK);
        d.draw_rectangle_gradient_v(0, 0, w, h, palette.top, palette.bottom);

        let logo = settings.logo.as_deref().and_then(|l| self.media.get(l));

        match self.kiosk.current_slide() {
            None => {
                d.draw_rectangle(0, 0, w, h, with_alpha(Color::BLACK, settings.overlay_opacity));
                draw_text_centered(d, "No slides enabled.", w / 2, h / 2 - 20, 40, with_alpha(Color::WHITE, 0.7));
            }
            Some(slide) => {
                // Background photo with a slow Ken Burns drift
                if let Some(texture) = self.media.get(&slide.background_source()) {
                    let source = self.transition.background_source(texture.width() as f32, texture.height() as f32);
                    d.draw_texture_pro(
                        texture,
                        source,
                        Rectangle::new(0.0, 0.0, w as f32, h as f32),
                        Vector2::zero(),
                        0.0,
                        with_alpha(Color::WHITE, 0.4 * self.transition.opacity),
                    );
                }
                d.draw_rectangle(0, 0, w, h, with_alpha(Color::BLACK, settings.overlay_opacity));

                let template = Template::select(slide.id(), slide.kind());
                if template == Template::Hero && settings.enable_particles {
                    self.particles.draw(d, palette.accent);
                }

                let view = SlideView {
                    slide,
                    settings,
                    palette: &palette,
                    media: &self.media,
                    logo,
                    shown_for: self.transition.shown_for(),
                    alpha: self.transition.opacity,
                };
                let mut content = d.begin_mode2D(self.transition.camera());
                slide_view::draw_slide(&mut content, &view);
            }
        }

        let clock = self.kiosk.clock();
        chrome::draw_header(d, settings, &palette, logo, &clock.time(settings.clock_format), &clock.date());

        let rotation = self.kiosk.rotation();
        if settings.show_progress_bar && rotation.is_playing() && rotation.len() > 0 {
            chrome::draw_progress_bar(d, settings, &palette, rotation.progress());
        }
        let overlay_open = self.kiosk.show_menu || self.kiosk.show_assistant || self.editor.is_some();
        if !overlay_open {
            let expanded = chrome::dock_expanded(settings, self.dock_hovered);
            chrome::draw_dock(d, settings, &palette, expanded, rotation.is_playing(), self.pointer);
        }
        if settings.show_ticker {
            chrome::draw_ticker(d, settings, &palette, self.elapsed);
        }

        if self.kiosk.show_menu {
            overlays::draw_menu(d, self.kiosk.slides(), &self.media, &palette, self.pointer);
        }
        if self.kiosk.show_assistant {
            overlays::draw_assistant(d, self.kiosk.assistant(), &palette, settings.enable_blur_effects, self.elapsed);
        }
        if let Some(editor) = &self.editor {
            overlays::draw_editor(d, editor, &palette, self.pointer);
        }
    }
}
