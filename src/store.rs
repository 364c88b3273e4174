use cgmath::prelude::*;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::rng::RandomSource;
use crate::surface::FieldSurface;

/// The live set of shooting stars and the spawn clock.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
    last_spawn_ms: f64,
}

impl ParticleStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            last_spawn_ms: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Inserts a particle as-is, bypassing the spawn clock. Returns false when
    /// the store is full.
    pub fn insert(&mut self, particle: Particle, config: &FieldConfig) -> bool {
        if self.particles.len() >= config.max_particles {
            return false;
        }
        self.particles.push(particle);
        true
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.last_spawn_ms = 0.0;
    }

    /// Spawns one particle when there is room and the jittered interval since
    /// the previous spawn has elapsed.
    pub fn try_spawn(
        &mut self,
        now_ms: f64,
        surface: &FieldSurface,
        config: &FieldConfig,
        rng: &mut impl RandomSource,
    ) -> bool {
        if self.particles.len() >= config.max_particles {
            return false;
        }

        let interval = config.spawn_interval_ms * config.spawn_jitter.sample(rng) as f64;
        if now_ms - self.last_spawn_ms <= interval {
            return false;
        }

        let particle = Self::sample_particle(surface, config, rng);
        log::debug!(
            "spawned star at ({:.0}, {:.0}), life {:.2}s, {} live",
            particle.position.x,
            particle.position.y,
            particle.lifetime,
            self.particles.len() + 1
        );
        self.particles.push(particle);
        self.last_spawn_ms = now_ms;
        true
    }

    fn sample_particle(
        surface: &FieldSurface,
        config: &FieldConfig,
        rng: &mut impl RandomSource,
    ) -> Particle {
        let (w, h) = (surface.width(), surface.height());
        let scale = surface.scale();

        let region = if rng.next_unit() < config.from_top_probability {
            &config.from_top
        } else {
            &config.from_right
        };
        let x = region.x.sample(rng) * w;
        let y = region.y.sample(rng) * h;

        let speed = config.base_speed * config.speed_scale.sample(rng) * scale;
        let length = config.base_trail_length * config.trail_length_scale.sample(rng) * scale;
        let lifetime = config.lifetime.sample(rng);
        let stroke_width = config.stroke_width.sample(rng) * scale;

        let hue = config.hue.sample(rng);
        let saturation = config.saturation.sample(rng);
        let lightness = config.lightness.sample(rng);

        let direction = Self::travel_direction(config);

        Particle {
            position: cgmath::vec2(x, y),
            velocity: direction * speed,
            length,
            lifetime,
            age: 0.0,
            stroke_width,
            hue,
            saturation,
            lightness,
            twinkle_rate: config.twinkle_rate.sample(rng),
        }
    }

    /// Dead, or far enough off-screen that nothing of the trail can show.
    pub fn is_expired(particle: &Particle, surface: &FieldSurface, config: &FieldConfig) -> bool {
        particle.is_dead()
            || particle.position.x < -particle.length
            || particle.position.y > config.bottom_margin * surface.height()
    }

    /// Removes expired particles and returns how many went.
    pub fn reap(&mut self, surface: &FieldSurface, config: &FieldConfig) -> usize {
        let mut reaped = 0;
        for i in (0..self.particles.len()).rev() {
            if Self::is_expired(&self.particles[i], surface, config) {
                self.particles.remove(i);
                reaped += 1;
            }
        }
        if reaped > 0 {
            log::trace!("reaped {reaped} stars, {} live", self.particles.len());
        }
        reaped
    }

    /// Unit direction of travel in surface coordinates. The configured angle
    /// is measured with y up, so 210 degrees heads down and to the left.
    pub fn travel_direction(config: &FieldConfig) -> cgmath::Vector2<f32> {
        let angle: cgmath::Rad<f32> = cgmath::Deg(config.travel_angle_deg).into();
        cgmath::vec2(angle.0.cos(), -angle.0.sin()).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::tests::sample_particle;
    use crate::rng::SequenceSource;
    use crate::surface::Viewport;
    use rand::{SeedableRng, rngs::StdRng};

    fn surface(width: f32, height: f32) -> FieldSurface {
        let mut surface = FieldSurface::new(2.0);
        surface.resize(Viewport::new(width, height, 1.0)).unwrap();
        surface
    }

    #[test]
    fn spawn_waits_for_interval() {
        let config = FieldConfig::default();
        let surface = surface(1000.0, 800.0);
        let mut store = ParticleStore::default();
        let mut rng = SequenceSource::constant(0.5);

        assert!(!store.try_spawn(800.0, &surface, &config, &mut rng));
        assert!(!store.try_spawn(899.0, &surface, &config, &mut rng));
        assert!(store.try_spawn(901.0, &surface, &config, &mut rng));
        assert_eq!(store.len(), 1);
        assert_eq!(store.last_spawn_ms(), 901.0);

        assert!(!store.try_spawn(1500.0, &surface, &config, &mut rng));
        assert!(store.try_spawn(1802.0, &surface, &config, &mut rng));
    }

    #[test]
    fn spawn_respects_capacity() {
        let config = FieldConfig::default();
        let surface = surface(1000.0, 800.0);
        let mut store = ParticleStore::default();
        let mut rng = StdRng::seed_from_u64(3);

        let mut now = 0.0;
        for _ in 0..100 {
            now += 2000.0;
            store.try_spawn(now, &surface, &config, &mut rng);
            assert!(store.len() <= config.max_particles);
        }
        assert_eq!(store.len(), config.max_particles);

        let last = store.last_spawn_ms();
        assert!(!store.try_spawn(now + 5000.0, &surface, &config, &mut rng));
        assert_eq!(store.last_spawn_ms(), last);
    }

    #[test]
    fn spawned_parameters_fall_in_ranges() {
        let config = FieldConfig::default();
        let mut surface = FieldSurface::new(2.0);
        surface.resize(Viewport::new(800.0, 600.0, 2.0)).unwrap();
        let (w, h) = (surface.width(), surface.height());
        let mut rng = StdRng::seed_from_u64(11);
        let direction = ParticleStore::travel_direction(&config);

        for _ in 0..500 {
            let p = ParticleStore::sample_particle(&surface, &config, &mut rng);
            assert!(p.position.x >= 0.55 * w && p.position.x <= 1.10 * w);
            assert!(p.position.y >= -0.15 * h && p.position.y <= 0.45 * h);

            let speed = p.velocity.magnitude();
            assert!(speed >= 900.0 * 0.65 * 2.0 - 1e-2 && speed <= 900.0 * 1.05 * 2.0 + 1e-2);
            assert!((p.velocity / speed - direction).magnitude() < 1e-4);
            assert!(p.velocity.x < 0.0 && p.velocity.y > 0.0);

            assert!(p.length >= 180.0 * 0.65 * 2.0 - 1e-2 && p.length <= 180.0 * 1.10 * 2.0 + 1e-2);
            assert!(config.lifetime.contains(p.lifetime));
            assert!(p.stroke_width >= 2.0 && p.stroke_width <= 3.6 + 1e-4);
            assert!(config.hue.contains(p.hue));
            assert!(config.saturation.contains(p.saturation));
            assert!(config.lightness.contains(p.lightness));
            assert!(config.twinkle_rate.contains(p.twinkle_rate));
            assert_eq!(p.age, 0.0);
        }
    }

    #[test]
    fn region_choice_follows_first_draw() {
        let config = FieldConfig::default();
        let surface = surface(1000.0, 1000.0);

        let mut from_top = SequenceSource::new(vec![0.1, 0.0, 0.0]);
        let p = ParticleStore::sample_particle(&surface, &config, &mut from_top);
        assert!((p.position.x - 550.0).abs() < 1e-2);
        assert!((p.position.y + 150.0).abs() < 1e-2);

        let mut from_right = SequenceSource::new(vec![0.9, 0.0, 0.0]);
        let p = ParticleStore::sample_particle(&surface, &config, &mut from_right);
        assert!((p.position.x - 750.0).abs() < 1e-2);
        assert!((p.position.y + 100.0).abs() < 1e-2);

        let mut just_below = SequenceSource::new(vec![0.44, 0.0, 0.0]);
        let p = ParticleStore::sample_particle(&surface, &config, &mut just_below);
        assert!((p.position.x - 550.0).abs() < 1e-2);

        let mut just_above = SequenceSource::new(vec![0.46, 0.0, 0.0]);
        let p = ParticleStore::sample_particle(&surface, &config, &mut just_above);
        assert!((p.position.x - 750.0).abs() < 1e-2);
    }

    #[test]
    fn reap_removes_every_expired_neighbour() {
        let config = FieldConfig::default();
        let surface = surface(1000.0, 1000.0);
        let mut store = ParticleStore::default();

        let mut dead = sample_particle();
        dead.age = dead.lifetime;
        let mut off_left = sample_particle();
        off_left.position.x = -150.0;
        let mut off_bottom = sample_particle();
        off_bottom.position.y = 1400.0;
        let alive = sample_particle();

        for p in [dead, dead, alive, off_left, off_bottom, dead] {
            assert!(store.insert(p, &config));
        }

        assert_eq!(store.reap(&surface, &config), 5);
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next(), Some(&alive));
    }

    #[test]
    fn clear_resets_spawn_clock() {
        let config = FieldConfig::default();
        let surface = surface(1000.0, 800.0);
        let mut store = ParticleStore::default();
        let mut rng = SequenceSource::constant(0.0);

        assert!(store.try_spawn(5000.0, &surface, &config, &mut rng));
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.last_spawn_ms(), 0.0);
        assert!(store.try_spawn(700.0, &surface, &config, &mut rng));
    }

    #[test]
    fn left_margin_is_one_trail_length() {
        let config = FieldConfig::default();
        let surface = surface(1000.0, 1000.0);
        let mut particle = sample_particle();

        particle.position.x = -99.0;
        assert!(!ParticleStore::is_expired(&particle, &surface, &config));
        particle.position.x = -101.0;
        assert!(ParticleStore::is_expired(&particle, &surface, &config));
    }
}
