use crate::rng::RandomSource;

/// Closed interval a random parameter is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut impl RandomSource) -> f32 {
        self.min + rng.next_unit() * (self.max - self.min)
    }

    pub fn contains(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Entry region as fractions of the backing surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRegion {
    pub x: Span,
    pub y: Span,
}

/// Every tunable of the field. The defaults are the shipped look and are not
/// meant to be changed at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub spawn_interval_ms: f64,
    pub spawn_jitter: Span,

    pub from_top_probability: f32,
    pub from_top: SpawnRegion,
    pub from_right: SpawnRegion,

    /// Degrees counter-clockwise from +x with y pointing up.
    pub travel_angle_deg: f32,
    pub base_speed: f32,
    pub speed_scale: Span,
    pub base_trail_length: f32,
    pub trail_length_scale: Span,
    pub lifetime: Span,
    pub stroke_width: Span,
    pub twinkle_rate: Span,

    pub hue: Span,
    pub saturation: Span,
    pub lightness: Span,

    /// Fraction of the lifetime spent fading in.
    pub fade_in: f32,
    pub max_frame_dt: f32,
    pub max_scale: f32,
    /// Reap once the head is below this multiple of the surface height.
    pub bottom_margin: f32,

    pub head_alpha: f32,
    pub trail_shadow_alpha: f32,
    pub trail_blur: f32,
    pub tail_lightness_drop: f32,
    pub tail_lightness_floor: f32,

    pub sparkle_radius: f32,
    pub sparkle_alpha: f32,
    pub sparkle_blur: f32,
    pub sparkle_lightness_boost: f32,
    pub sparkle_lightness_ceiling: f32,
    /// Milliseconds per radian of sparkle phase at twinkle rate 1.
    pub sparkle_period_ms: f64,

    pub glow_center: (f32, f32),
    pub glow_radius: f32,
    pub glow_rgb: [u8; 3],
    pub glow_alpha: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: 8,
            spawn_interval_ms: 900.0,
            spawn_jitter: Span::new(0.7, 1.3),

            from_top_probability: 0.45,
            from_top: SpawnRegion {
                x: Span::new(0.55, 1.05),
                y: Span::new(-0.15, 0.25),
            },
            from_right: SpawnRegion {
                x: Span::new(0.75, 1.10),
                y: Span::new(-0.10, 0.45),
            },

            travel_angle_deg: 210.0,
            base_speed: 900.0,
            speed_scale: Span::new(0.65, 1.05),
            base_trail_length: 180.0,
            trail_length_scale: Span::new(0.65, 1.10),
            lifetime: Span::new(0.85, 1.35),
            stroke_width: Span::new(1.0, 1.8),
            twinkle_rate: Span::new(0.7, 1.2),

            hue: Span::new(255.0, 278.0),
            saturation: Span::new(70.0, 90.0),
            lightness: Span::new(65.0, 88.0),

            fade_in: 0.12,
            max_frame_dt: 0.033,
            max_scale: 2.0,
            bottom_margin: 1.35,

            head_alpha: 0.50,
            trail_shadow_alpha: 0.35,
            trail_blur: 12.0,
            tail_lightness_drop: 25.0,
            tail_lightness_floor: 30.0,

            sparkle_radius: 2.2,
            sparkle_alpha: 0.25,
            sparkle_blur: 10.0,
            sparkle_lightness_boost: 10.0,
            sparkle_lightness_ceiling: 96.0,
            sparkle_period_ms: 120.0,

            glow_center: (0.5, 0.18),
            glow_radius: 0.7,
            glow_rgb: [185, 140, 255],
            glow_alpha: 0.10,
        }
    }
}

impl FieldConfig {
    /// Slowest gap between two spawns with free capacity.
    pub fn max_spawn_gap_ms(&self) -> f64 {
        self.spawn_interval_ms * self.spawn_jitter.max as f64
    }

    /// Fastest gap between two spawns.
    pub fn min_spawn_gap_ms(&self) -> f64 {
        self.spawn_interval_ms * self.spawn_jitter.min as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    #[test]
    fn span_sample_maps_unit_interval() {
        let span = Span::new(10.0, 20.0);
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.999]);

        assert_eq!(span.sample(&mut rng), 10.0);
        assert_eq!(span.sample(&mut rng), 15.0);
        assert!(span.sample(&mut rng) < 20.0);
    }

    #[test]
    fn spawn_gap_bounds() {
        let config = FieldConfig::default();
        assert!((config.min_spawn_gap_ms() - 630.0).abs() < 1e-3);
        assert!((config.max_spawn_gap_ms() - 1170.0).abs() < 1e-3);
    }
}
