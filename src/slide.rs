use rand::Rng;
use raylib::prelude::*;
use crate::constants::*;
use crate::settings::TransitionEffect;
use crate::state::TransitionState;

/// Animation state of the slide currently on screen: the enter transition
/// for the content and a slow Ken Burns drift for the background photo.
pub struct SlideTransition {
    pub state: TransitionState,

    animation_timer: f32,

    pub opacity: f32,
    pub offset_x: f32,
    pub scale: f32,

    tween_opacity: ease::Tween,
    tween_offset_x: ease::Tween,
    tween_scale: ease::Tween,

    // Ken Burns effect parameters for the background
    ken_burns_timer: f32,
    ken_burns_pan_direction: i32,
    ken_burns_end_pan: Vector2,
}

impl SlideTransition {
    pub fn new(effect: TransitionEffect) -> Self {
        let (start_offset, start_scale) = match effect {
            TransitionEffect::Fade => (0.0, 1.0),
            TransitionEffect::Slide => (100.0, 1.0),
            TransitionEffect::Zoom => (0.0, 0.95),
        };

        // Randomly choose a panning direction: left-to-right, right-to-left, top-to-bottom, or bottom-to-top
        let ken_burns_pan_direction = rand::rng().random_range(0..4);
        let ken_burns_end_pan = match ken_burns_pan_direction {
            0 => Vector2::new( 0.05, 0.0),
            1 => Vector2::new(-0.05, 0.0),
            2 => Vector2::new( 0.0,  0.05),
            _ => Vector2::new( 0.0, -0.05),
        };

        Self {
            state: TransitionState::Entering,
            animation_timer: 0.0,

            opacity: 0.0,
            offset_x: start_offset,
            scale: start_scale,

            tween_opacity:  ease::Tween::new(ease::cubic_out, 0.0, 1.0, TRANSITION_DURATION),
            tween_offset_x: ease::Tween::new(ease::cubic_out, start_offset, 0.0, TRANSITION_DURATION),
            tween_scale:    ease::Tween::new(ease::cubic_out, start_scale, 1.0, TRANSITION_DURATION),

            ken_burns_timer: 0.0,
            ken_burns_pan_direction,
            ken_burns_end_pan,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.ken_burns_timer += dt;

        if self.state != TransitionState::Entering {
            return;
        }

        self.opacity  = self.tween_opacity.apply(dt);
        self.offset_x = self.tween_offset_x.apply(dt);
        self.scale    = self.tween_scale.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= TRANSITION_DURATION {
            self.state = TransitionState::Displaying;
            self.opacity = 1.0;
            self.offset_x = 0.0;
            self.scale = 1.0;
        }
    }

    /// Content camera: zoom around the screen centre, shifted by the slide offset.
    pub fn camera(&self) -> Camera2D {
        let center = Vector2::new(RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 * 0.5);
        Camera2D {
            offset: Vector2::new(center.x + self.offset_x, center.y),
            target: center,
            rotation: 0.0,
            zoom: self.scale,
        }
    }

    /// Source rectangle of the background texture for the current drift.
    pub fn background_source(&self, tex_width: f32, tex_height: f32) -> Rectangle {
        let t = (self.ken_burns_timer / KEN_BURNS_DURATION).min(1.0);
        let ken_burns_scale = raylib::core::math::lerp(1.0, 0.9, t);
        let pan = Vector2::zero().lerp(self.ken_burns_end_pan, t);

        // Crop to the screen aspect first so the photo is never stretched
        let screen_ratio = RENDER_WIDTH as f32 / RENDER_HEIGHT as f32;
        let (crop_width, crop_height) = if tex_width / tex_height > screen_ratio {
            (tex_height * screen_ratio, tex_height)
        } else {
            (tex_width, tex_width / screen_ratio)
        };

        let width = crop_width * ken_burns_scale;
        let height = crop_height * ken_burns_scale;

        let pan_origin = match self.ken_burns_pan_direction {
            0 => Vector2::new(0.0,                          (tex_height - height) * 0.5), // left-to-right
            1 => Vector2::new(tex_width - width,            (tex_height - height) * 0.5), // right-to-left
            2 => Vector2::new((tex_width - width) * 0.5,    0.0),                         // top-to-bottom
            _ => Vector2::new((tex_width - width) * 0.5,    tex_height - height),         // bottom-to-top
        };

        let x = (pan_origin.x + pan.x * tex_width).clamp(0.0, (tex_width - width).max(0.0));
        let y = (pan_origin.y + pan.y * tex_height).clamp(0.0, (tex_height - height).max(0.0));
        Rectangle::new(x, y, width, height)
    }

    /// Seconds since this slide appeared.
    pub fn shown_for(&self) -> f32 {
        self.ken_burns_timer
    }
}
