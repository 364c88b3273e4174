use crate::error::{FieldError, FieldResult};

/// What the host knows about its window: logical (CSS-like) size and the
/// device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

/// Size, scale and run flags of the drawing surface. One per field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSurface {
    logical_width: f32,
    logical_height: f32,
    scale: f32,
    pixel_width: u32,
    pixel_height: u32,
    max_scale: f32,
    pub(crate) enabled: bool,
    pub(crate) available: bool,
    pub(crate) reduced_motion: bool,
    pub(crate) last_frame_ms: Option<f64>,
}

impl FieldSurface {
    pub fn new(max_scale: f32) -> Self {
        Self {
            logical_width: 0.0,
            logical_height: 0.0,
            scale: 1.0,
            pixel_width: 0,
            pixel_height: 0,
            max_scale,
            enabled: true,
            available: true,
            reduced_motion: false,
            last_frame_ms: None,
        }
    }

    /// Re-derives size and scale from the viewport. A bad viewport leaves the
    /// previous state untouched.
    pub fn resize(&mut self, viewport: Viewport) -> FieldResult<()> {
        let Viewport {
            width,
            height,
            device_pixel_ratio,
        } = viewport;

        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(FieldError::InvalidViewport { width, height });
        }

        let ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };

        self.scale = ratio.min(self.max_scale);
        self.logical_width = width;
        self.logical_height = height;
        self.pixel_width = (width * self.scale).floor() as u32;
        self.pixel_height = (height * self.scale).floor() as u32;
        Ok(())
    }

    /// Backing surface width in device pixels.
    pub fn width(&self) -> f32 {
        self.pixel_width as f32
    }

    /// Backing surface height in device pixels.
    pub fn height(&self) -> f32 {
        self.pixel_height as f32
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        (self.pixel_width, self.pixel_height)
    }

    pub fn logical_size(&self) -> (f32, f32) {
        (self.logical_width, self.logical_height)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Converts a device-pixel coordinate to logical units.
    pub fn to_logical(&self, device: f32) -> f32 {
        device / self.scale
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// True when frames should paint and advance particles.
    pub fn is_live(&self) -> bool {
        self.enabled && self.available && !self.reduced_motion
    }
}
