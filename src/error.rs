//! Error types for the star field.
//!
//! The field is decorative, so none of these are fatal to the host. They exist
//! so callers can log why the field went dark.

/// Errors reported by [`crate::StarField`] and [`crate::FieldSurface`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The host reported a logical size that cannot back a surface.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport {
        /// Logical width as reported.
        width: f32,
        /// Logical height as reported.
        height: f32,
    },

    /// The drawing surface was lost or never existed.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
}

pub type FieldResult<T> = Result<T, FieldError>;
