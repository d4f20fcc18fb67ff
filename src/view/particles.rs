use rand::Rng;
use raylib::prelude::*;

use crate::constants::{RENDER_HEIGHT, RENDER_WIDTH};
use super::with_alpha;

const PARTICLE_COUNT: usize = 60;

struct Particle {
    position: Vector2,
    velocity: Vector2,
    radius: f32,
    alpha: f32,
}

/// Slow drifting dots behind the hero slide.
pub struct Particles {
    particles: Vec<Particle>,
}

impl Particles {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let particles = (0..PARTICLE_COUNT).map(|_| spawn(rng)).collect();
        Self { particles }
    }

    pub fn update(&mut self, dt: f32) {
        let (w, h) = (RENDER_WIDTH as f32, RENDER_HEIGHT as f32);
        for p in self.particles.iter_mut() {
            p.position = p.position + p.velocity * dt;
            // Wrap around the edges
            p.position.x = wrap(p.position.x, w);
            p.position.y = wrap(p.position.y, h);
        }
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, tint: Color) {
        for p in &self.particles {
            d.draw_circle_v(p.position, p.radius, with_alpha(tint, p.alpha));
        }
    }
}

fn wrap(value: f32, limit: f32) -> f32 {
    let v = value.rem_euclid(limit);
    // rem_euclid can round up to exactly `limit` for tiny negatives
    if v >= limit { 0.0 } else { v }
}

fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Particle {
    Particle {
        position: Vector2::new(
            rng.random_range(0.0..RENDER_WIDTH as f32),
            rng.random_range(0.0..RENDER_HEIGHT as f32),
        ),
        velocity: Vector2::new(rng.random_range(-15.0..15.0), rng.random_range(-40.0..-5.0)),
        radius: rng.random_range(1.0..4.0),
        alpha: rng.random_range(0.15..0.6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn particles_stay_on_screen() {
        let mut particles = Particles::new(&mut StdRng::seed_from_u64(3));
        for _ in 0..600 {
            particles.update(0.5);
        }
        for p in &particles.particles {
            assert!((0.0..RENDER_WIDTH as f32).contains(&p.position.x));
            assert!((0.0..RENDER_HEIGHT as f32).contains(&p.position.y));
        }
    }
}
