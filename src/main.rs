//! Shape-Canvas.
//!
//! Interaktiver 2D-Canvas mit perspektivischer Projektion, selektierbaren
//! Primitiven und einem Drei-Griff-Range-Slider, gebaut auf egui + eframe.

use eframe::egui;
use shape_canvas::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Shape-Canvas v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 800.0])
                .with_title("Shape-Canvas"),
            ..Default::default()
        };

        eframe::run_native(
            "Shape-Canvas",
            options,
            Box::new(|_cc| Ok(Box::new(CanvasApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CanvasApp {
    state: AppState,
    controller: AppController,
    flicker: ui::FlickerState,
}

impl CanvasApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.slider.set_style(editor_options.slider_style());
        for instance in &mut state.scene.shapes {
            instance.flicker = editor_options.flicker_selection;
        }
        state.options = editor_options;

        state.slider.add_change_listener(|current, left, right| {
            log::info!("Slider-Werte: current={current} left={left} right={right}");
            Ok(())
        });
        state.slider.load();

        Self {
            state,
            controller: AppController::new(),
            flicker: ui::FlickerState::new(),
        }
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.flicker.advance(ctx.input(|i| i.stable_dt));

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl CanvasApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_slider_panel(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui_inner| {
                let (rect, response) = ui_inner
                    .allocate_exact_size(ui_inner.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(ui::collect_viewport_events(
                    ui_inner,
                    &response,
                    viewport_size,
                    &self.state.view.projection,
                ));

                ui::paint_scene(
                    ui_inner.painter(),
                    rect,
                    &self.state.scene,
                    &self.state.view.projection,
                    &self.state.options,
                    self.flicker.visible(),
                );
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || self.state.slider.take_repaint() {
            ctx.request_repaint();
        }

        // Blinkender Rahmen braucht periodische Frames
        let flicker_active =
            self.state.options.flicker_selection && self.state.scene.selected.is_some();
        if flicker_active {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
