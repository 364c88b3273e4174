//! Shooting-star particle field.
//!
//! A small set of linearly moving particles with gradient trails, drawn over a
//! static radial haze. [`StarField`] owns all state; a host drives it by
//! calling [`StarField::frame`] once per display refresh with a monotonic
//! timestamp, a [`Canvas`] to paint into and a [`RandomSource`].

pub mod color;
pub mod config;
pub mod error;
pub mod field;
pub mod paint;
pub mod particle;
pub mod rng;
pub mod store;
pub mod surface;

pub use color::{Hsla, Rgba};
pub use config::{FieldConfig, Span, SpawnRegion};
pub use error::{FieldError, FieldResult};
pub use field::{FrameReport, StarField};
pub use paint::{Canvas, DrawCommand, DrawList, Glow, RadialGlow, Sparkle, TrailStroke};
pub use particle::Particle;
pub use rng::{RandomSource, SequenceSource};
pub use store::ParticleStore;
pub use surface::{FieldSurface, Viewport};
