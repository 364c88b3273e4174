use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::error::{FieldError, FieldResult};
use crate::paint::{Canvas, Glow, RadialGlow, Sparkle, TrailStroke};
use crate::particle::Particle;
use crate::rng::RandomSource;
use crate::store::ParticleStore;
use crate::surface::{FieldSurface, Viewport};

/// What one call to [`StarField::frame`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub dt: f32,
    pub spawned: bool,
    pub drawn: usize,
    pub reaped: usize,
    /// The frame only cleared the surface; nothing moved.
    pub frozen: bool,
}

/// A shooting-star field: particle store, surface state and the per-frame
/// step. The host calls [`StarField::frame`] once per display refresh.
#[derive(Clone, Debug)]
pub struct StarField {
    config: FieldConfig,
    surface: FieldSurface,
    store: ParticleStore,
}

impl Default for StarField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl StarField {
    pub fn new(config: FieldConfig) -> Self {
        Self {
            surface: FieldSurface::new(config.max_scale),
            store: ParticleStore::with_capacity(config.max_particles),
            config,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn surface(&self) -> &FieldSurface {
        &self.surface
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    pub fn resize(&mut self, viewport: Viewport) -> FieldResult<()> {
        if let Err(err) = self.surface.resize(viewport) {
            log::warn!("ignoring resize: {err}");
            return Err(err);
        }
        let (w, h) = self.surface.pixel_size();
        log::info!(
            "field resized to {}x{} logical, {w}x{h} backing at scale {}",
            viewport.width,
            viewport.height,
            self.surface.scale()
        );
        Ok(())
    }

    /// Flips the enabled flag and returns the new state. A field without a
    /// surface stays off.
    pub fn toggle(&mut self) -> bool {
        let target = !self.surface.enabled;
        match self.set_enabled(target) {
            Ok(enabled) => enabled,
            Err(err) => {
                log::warn!("cannot enable star field: {err}");
                false
            }
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) -> FieldResult<bool> {
        if enabled && !self.surface.available {
            return Err(FieldError::SurfaceUnavailable);
        }
        if self.surface.enabled != enabled {
            log::info!("star field {}", if enabled { "enabled" } else { "disabled" });
        }
        self.surface.enabled = enabled;
        Ok(enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.surface.is_enabled()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        self.surface.reduced_motion = reduced;
    }

    /// The host lost its drawing surface. The field stays dark from here on.
    pub fn mark_unavailable(&mut self) {
        if self.surface.available {
            log::warn!("{}; star field disabled", FieldError::SurfaceUnavailable);
        }
        self.surface.available = false;
        self.surface.enabled = false;
    }

    /// Runs one frame at monotonic time `now_ms`.
    pub fn frame(
        &mut self,
        now_ms: f64,
        canvas: &mut impl Canvas,
        rng: &mut impl RandomSource,
    ) -> FrameReport {
        let (w, h) = (self.surface.width(), self.surface.height());

        if !self.surface.is_live() {
            if self.surface.available {
                canvas.clear(w, h);
            }
            return FrameReport {
                frozen: true,
                ..FrameReport::default()
            };
        }

        let dt = match self.surface.last_frame_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, self.config.max_frame_dt),
            None => 0.0,
        };
        self.surface.last_frame_ms = Some(now_ms);

        canvas.clear(w, h);
        canvas.radial_glow(&self.backdrop());

        let spawned = self.store.try_spawn(now_ms, &self.surface, &self.config, rng);

        let config = &self.config;
        let scale = self.surface.scale();
        let particles = self.store.particles_mut();
        for particle in particles.iter_mut().rev() {
            particle.advance(dt);
            let (trail, sparkle) = Self::shapes(particle, now_ms, scale, config);
            canvas.trail(&trail);
            canvas.sparkle(&sparkle);
        }
        let drawn = particles.len();

        let reaped = self.store.reap(&self.surface, &self.config);
        canvas.reset_blur();

        FrameReport {
            dt,
            spawned,
            drawn,
            reaped,
            frozen: false,
        }
    }

    /// The static haze behind the stars.
    pub fn backdrop(&self) -> RadialGlow {
        let (w, h) = (self.surface.width(), self.surface.height());
        let [r, g, b] = self.config.glow_rgb;
        RadialGlow {
            center: (w * self.config.glow_center.0, h * self.config.glow_center.1),
            radius: w.max(h) * self.config.glow_radius,
            inner: Rgba {
                r,
                g,
                b,
                alpha: self.config.glow_alpha,
            },
            outer: Rgba {
                r: 0,
                g: 0,
                b: 0,
                alpha: 0.0,
            },
        }
    }

    fn shapes(
        particle: &Particle,
        now_ms: f64,
        scale: f32,
        config: &FieldConfig,
    ) -> (TrailStroke, Sparkle) {
        let fade = particle.fade(config.fade_in);
        let base = particle.base_color();
        let head = (particle.position.x, particle.position.y);
        let tail = particle.tail();

        let tail_lightness =
            (particle.lightness - config.tail_lightness_drop).max(config.tail_lightness_floor);
        let trail = TrailStroke {
            head,
            tail: (tail.x, tail.y),
            width: particle.stroke_width,
            head_color: base.with_alpha(config.head_alpha * fade),
            tail_color: base.with_lightness(tail_lightness).with_alpha(0.0),
            glow: Glow {
                color: base.with_alpha(config.trail_shadow_alpha * fade),
                blur: config.trail_blur * scale,
            },
        };

        let sparkle_lightness = (particle.lightness + config.sparkle_lightness_boost)
            .min(config.sparkle_lightness_ceiling);
        let sparkle = Sparkle {
            center: head,
            radius: config.sparkle_radius * scale,
            color: base
                .with_lightness(sparkle_lightness)
                .with_alpha(config.sparkle_alpha * twinkle(particle, now_ms, config) * fade),
            glow: Glow {
                color: base.with_alpha(config.trail_shadow_alpha * fade),
                blur: config.sparkle_blur * scale,
            },
        };

        (trail, sparkle)
    }
}

/// Head brightness oscillation in `[0.2, 1.0]`.
fn twinkle(particle: &Particle, now_ms: f64, config: &FieldConfig) -> f32 {
    let phase = (now_ms / config.sparkle_period_ms) * particle.twinkle_rate as f64;
    0.6 + 0.4 * phase.sin() as f32
}
