mod egui_canvas;

use clap::Parser;
use eframe::egui;
use egui_canvas::EguiCanvas;
use rand::{SeedableRng, rngs::StdRng};
use shooting_stars::{DrawList, FrameReport, StarField, Viewport};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(11, 9, 22);

#[derive(Parser, Debug, Clone)]
#[command(name = "shooting-stars", about = "Decorative shooting-star background")]
struct Args {
    /// Honour a reduced-motion preference: the field only clears.
    #[arg(long)]
    reduced_motion: bool,

    /// Start with the field switched off.
    #[arg(long)]
    paused: bool,

    /// Initial window width in points.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 720.0)]
    height: f32,
}

struct StarFieldApp {
    field: StarField,
    rng: StdRng,
    draw_list: DrawList,
    started: std::time::Instant,
    last_frame_time: std::time::Instant,
    viewport: Option<Viewport>,
    last_report: FrameReport,
}

impl StarFieldApp {
    fn new(cc: &eframe::CreationContext, args: &Args) -> Self {
        let mut field = StarField::default();

        if cc.wgpu_render_state.is_none() {
            field.mark_unavailable();
        } else if args.paused {
            field.toggle();
        }
        field.set_reduced_motion(args.reduced_motion);

        let now = std::time::Instant::now();
        Self {
            field,
            rng: StdRng::from_entropy(),
            draw_list: DrawList::new(),
            started: now,
            last_frame_time: now,
            viewport: None,
            last_report: FrameReport::default(),
        }
    }

    fn toggle_label(&self) -> &'static str {
        if self.field.is_enabled() {
            "Toggle Background FX"
        } else {
            "Enable Background FX"
        }
    }

    fn render_ui_panel(&mut self, ui: &mut egui::Ui, frame_time: f32) {
        ui.label(format!("FPS: {:.1}", 1.0 / frame_time.max(f32::EPSILON)));
        ui.label(format!("Frame Time: {:.3}ms", frame_time * 1000.0));
        ui.label(format!(
            "Live Stars: {}/{}",
            self.field.store().len(),
            self.field.config().max_particles
        ));
        ui.label(format!("Step: {:.1}ms", self.last_report.dt * 1000.0));

        let (w, h) = self.field.surface().pixel_size();
        ui.label(format!("Surface: {w}x{h} @{:.2}", self.field.surface().scale()));

        ui.separator();

        if ui
            .add_enabled(
                self.field.surface().is_available(),
                egui::Button::new(self.toggle_label()),
            )
            .clicked()
        {
            self.field.toggle();
        }

        let mut reduced_motion = self.field.surface().reduced_motion();
        if ui.checkbox(&mut reduced_motion, "Reduce motion").changed() {
            self.field.set_reduced_motion(reduced_motion);
        }
    }

    fn sync_viewport(&mut self, rect: egui::Rect, pixels_per_point: f32) {
        let viewport = Viewport::new(rect.width(), rect.height(), pixels_per_point);
        if self.viewport == Some(viewport) {
            return;
        }
        // A rejected size keeps the previous surface; retry next frame.
        if self.field.resize(viewport).is_ok() {
            self.viewport = Some(viewport);
        }
    }
}

impl eframe::App for StarFieldApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let current_time = std::time::Instant::now();
        let frame_time = current_time.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        egui::SidePanel::left("Control Panel").show(ctx, |ui| {
            self.render_ui_panel(ui, frame_time);
            ui.allocate_space(ui.available_size());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                self.sync_viewport(rect, ctx.pixels_per_point());

                let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
                self.draw_list.commands.clear();
                self.last_report = self.field.frame(now_ms, &mut self.draw_list, &mut self.rng);

                let painter = ui.painter_at(rect);
                let mut canvas = EguiCanvas::new(&painter, rect.min, self.field.surface().scale());
                self.draw_list.replay(&mut canvas);
            });

        ctx.request_repaint();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("starting shooting-stars with {args:?}");

    let options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        initial_window_size: Some(egui::vec2(args.width, args.height)),
        ..Default::default()
    };

    eframe::run_native(
        "Shooting Stars",
        options,
        Box::new(move |cc| Box::new(StarFieldApp::new(cc, &args))),
    )
    .map_err(|err| anyhow::anyhow!("window event loop failed: {err}"))
}
