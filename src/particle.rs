use cgmath::prelude::*;

use crate::color::Hsla;

/// One shooting star. Kinematics are fixed at spawn; only `age` and
/// `position` change afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: cgmath::Vector2<f32>,
    pub velocity: cgmath::Vector2<f32>,
    pub length: f32,
    pub lifetime: f32,
    pub age: f32,
    pub stroke_width: f32,
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub twinkle_rate: f32,
}

impl Particle {
    /// Moves the particle forward by `dt` seconds. The step is cut short at the
    /// end of life so `age` never passes `lifetime` and position stays on the
    /// line `spawn + velocity * age`.
    pub fn advance(&mut self, dt: f32) {
        let remaining = (self.lifetime - self.age).max(0.0);
        let step = dt.clamp(0.0, remaining);
        self.position += self.velocity * step;
        self.age = if step >= remaining {
            self.lifetime
        } else {
            self.age + step
        };
    }

    pub fn progress(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 1.0;
        }
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    /// Opacity multiplier: a linear ramp in over the first `fade_in` of life
    /// times a linear ramp out over the whole life.
    pub fn fade(&self, fade_in: f32) -> f32 {
        let p = self.progress();
        let ramp_in = if p < fade_in { p / fade_in } else { 1.0 };
        (1.0 - p) * ramp_in
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Point `length` behind the head, opposite to the direction of travel.
    pub fn tail(&self) -> cgmath::Vector2<f32> {
        let speed = self.velocity.magnitude();
        if speed <= f32::EPSILON {
            return self.position;
        }
        self.position - self.velocity / speed * self.length
    }

    pub fn base_color(&self) -> Hsla {
        Hsla::new(self.hue, self.saturation, self.lightness, 1.0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_particle() -> Particle {
        Particle {
            position: cgmath::vec2(500.0, 500.0),
            velocity: cgmath::vec2(-50.0, 50.0),
            length: 100.0,
            lifetime: 1.0,
            age: 0.0,
            stroke_width: 1.0,
            hue: 266.0,
            saturation: 80.0,
            lightness: 75.0,
            twinkle_rate: 1.0,
        }
    }

    #[test]
    fn advance_is_linear() {
        let mut particle = sample_particle();
        particle.advance(0.5);

        assert!((particle.position.x - 475.0).abs() < 1e-4);
        assert!((particle.position.y - 525.0).abs() < 1e-4);
        assert_eq!(particle.age, 0.5);

        particle.advance(0.5);
        assert_eq!(particle.age, 1.0);
        assert!(particle.is_dead());
        assert_eq!(particle.fade(0.12), 0.0);
    }

    #[test]
    fn advance_stops_at_end_of_life() {
        let mut particle = sample_particle();
        particle.advance(0.8);
        particle.advance(0.8);

        assert_eq!(particle.age, particle.lifetime);
        assert!((particle.position.x - 450.0).abs() < 1e-3);
        assert!((particle.position.y - 550.0).abs() < 1e-3);
    }

    #[test]
    fn fade_curve_shape() {
        let mut particle = sample_particle();
        assert_eq!(particle.fade(0.12), 0.0);

        particle.age = 0.06;
        assert!((particle.fade(0.12) - 0.94 * 0.5).abs() < 1e-5);

        particle.age = 0.5;
        assert!((particle.fade(0.12) - 0.5).abs() < 1e-6);

        let mut last = 0.0;
        for step in 1..=11 {
            particle.age = step as f32 * 0.01;
            let fade = particle.fade(0.12);
            assert!(fade > last, "fade-in not increasing at {}", particle.age);
            last = fade;
        }

        particle.age = 0.125;
        let peak = particle.fade(0.12);
        assert!(peak > last && (peak - 0.875).abs() < 1e-5);
        last = peak;

        for step in 13..=100 {
            particle.age = step as f32 * 0.01;
            let fade = particle.fade(0.12);
            assert!(fade <= last, "fade-out not decreasing at {}", particle.age);
            last = fade;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn tail_trails_behind_velocity() {
        let particle = sample_particle();
        let tail = particle.tail();
        let offset = tail - particle.position;

        assert!((offset.magnitude() - 100.0).abs() < 1e-3);
        assert!(offset.x > 0.0 && offset.y < 0.0);
    }
}
