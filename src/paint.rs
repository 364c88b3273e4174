use crate::color::{Hsla, Rgba};

/// Soft shadow painted behind a primitive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Hsla,
    pub blur: f32,
}

/// Radial gradient filling the whole surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGlow {
    pub center: (f32, f32),
    pub radius: f32,
    pub inner: Rgba,
    pub outer: Rgba,
}

/// Round-capped line with a linear gradient from `head` to `tail`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailStroke {
    pub head: (f32, f32),
    pub tail: (f32, f32),
    pub width: f32,
    pub head_color: Hsla,
    pub tail_color: Hsla,
    pub glow: Glow,
}

/// Filled circle at a particle's head.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub center: (f32, f32),
    pub radius: f32,
    pub color: Hsla,
    pub glow: Glow,
}

/// Drawing target for the field. Coordinates are backing-surface pixels.
pub trait Canvas {
    fn clear(&mut self, width: f32, height: f32);
    fn radial_glow(&mut self, glow: &RadialGlow);
    fn trail(&mut self, stroke: &TrailStroke);
    fn sparkle(&mut self, sparkle: &Sparkle);
    /// Drops any shadow state left by the last primitive.
    fn reset_blur(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    RadialGlow(RadialGlow),
    Trail(TrailStroke),
    Sparkle(Sparkle),
    ResetBlur,
}

/// Canvas that records what it was asked to draw.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trails(&self) -> impl Iterator<Item = &TrailStroke> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Trail(stroke) => Some(stroke),
            _ => None,
        })
    }

    pub fn sparkles(&self) -> impl Iterator<Item = &Sparkle> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Sparkle(sparkle) => Some(sparkle),
            _ => None,
        })
    }

    /// Replays the recorded commands onto another canvas.
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for command in &self.commands {
            match command {
                DrawCommand::Clear { width, height } => canvas.clear(*width, *height),
                DrawCommand::RadialGlow(glow) => canvas.radial_glow(glow),
                DrawCommand::Trail(stroke) => canvas.trail(stroke),
                DrawCommand::Sparkle(sparkle) => canvas.sparkle(sparkle),
                DrawCommand::ResetBlur => canvas.reset_blur(),
            }
        }
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn radial_glow(&mut self, glow: &RadialGlow) {
        self.commands.push(DrawCommand::RadialGlow(*glow));
    }

    fn trail(&mut self, stroke: &TrailStroke) {
        self.commands.push(DrawCommand::Trail(*stroke));
    }

    fn sparkle(&mut self, sparkle: &Sparkle) {
        self.commands.push(DrawCommand::Sparkle(*sparkle));
    }

    fn reset_blur(&mut self) {
        self.commands.push(DrawCommand::ResetBlur);
    }
}
