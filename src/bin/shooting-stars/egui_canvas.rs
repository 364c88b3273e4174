use eframe::egui::{self, Color32, Painter, Pos2};
use shooting_stars::{Canvas, Hsla, RadialGlow, Rgba, Sparkle, TrailStroke};

const GLOW_SEGMENTS: u32 = 48;
const GLOW_LAYERS: usize = 3;

/// Paints field primitives with an egui painter. Field coordinates are
/// backing pixels; egui works in points, so everything is divided by the
/// field scale and offset to the panel origin.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
    scale: f32,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2, scale: f32) -> Self {
        Self {
            painter,
            origin,
            scale: scale.max(f32::EPSILON),
        }
    }

    fn to_screen(&self, (x, y): (f32, f32)) -> Pos2 {
        self.origin + egui::vec2(x / self.scale, y / self.scale)
    }

    fn gradient_quad(
        &self,
        from: Pos2,
        to: Pos2,
        width: f32,
        from_color: Color32,
        to_color: Color32,
    ) {
        let dir = to - from;
        let length = dir.length();
        if length <= f32::EPSILON {
            return;
        }
        let normal = egui::vec2(-dir.y, dir.x) / length * (width * 0.5);

        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(from + normal, from_color);
        mesh.colored_vertex(from - normal, from_color);
        mesh.colored_vertex(to + normal, to_color);
        mesh.colored_vertex(to - normal, to_color);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(1, 3, 2);
        self.painter.add(egui::Shape::mesh(mesh));
    }
}

fn hsla(color: &Hsla) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn rgba(color: &Rgba) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl Canvas for EguiCanvas<'_> {
    fn clear(&mut self, _width: f32, _height: f32) {
        // egui starts every frame from an empty layer
    }

    fn radial_glow(&mut self, glow: &RadialGlow) {
        let center = self.to_screen(glow.center);
        let radius = glow.radius / self.scale;
        let inner = rgba(&glow.inner);
        let outer = rgba(&glow.outer);

        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(center, inner);
        for i in 0..GLOW_SEGMENTS {
            let angle = i as f32 / GLOW_SEGMENTS as f32 * std::f32::consts::TAU;
            mesh.colored_vertex(center + egui::vec2(angle.cos(), angle.sin()) * radius, outer);
        }
        for i in 0..GLOW_SEGMENTS {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % GLOW_SEGMENTS);
        }
        self.painter.add(egui::Shape::mesh(mesh));
    }

    fn trail(&mut self, stroke: &TrailStroke) {
        let head = self.to_screen(stroke.head);
        let tail = self.to_screen(stroke.tail);
        let width = stroke.width / self.scale;

        // Blur is approximated by widening translucent copies underneath.
        let blur = stroke.glow.blur / self.scale;
        let glow_head = hsla(&stroke.glow.color);
        for layer in 1..=GLOW_LAYERS {
            let spread = width + blur * layer as f32 / GLOW_LAYERS as f32;
            self.gradient_quad(
                head,
                tail,
                spread,
                glow_head.linear_multiply(1.0 / (layer as f32 + 1.0)),
                Color32::TRANSPARENT,
            );
        }

        let head_color = hsla(&stroke.head_color);
        self.gradient_quad(head, tail, width, head_color, hsla(&stroke.tail_color));
        self.painter.circle_filled(head, width * 0.5, head_color);
    }

    fn sparkle(&mut self, sparkle: &Sparkle) {
        let center = self.to_screen(sparkle.center);
        let radius = sparkle.radius / self.scale;
        let blur = sparkle.glow.blur / self.scale;

        let glow = hsla(&sparkle.glow.color);
        for layer in (1..=GLOW_LAYERS).rev() {
            let spread = radius + blur * layer as f32 / GLOW_LAYERS as f32;
            self.painter
                .circle_filled(center, spread, glow.linear_multiply(0.25 / layer as f32));
        }
        self.painter.circle_filled(center, radius, hsla(&sparkle.color));
    }

    fn reset_blur(&mut self) {}
}
