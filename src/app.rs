/// Demo host that embeds the button and the status legend in an eframe window
use chrono::{DateTime, Local};
use eframe::egui;

use crate::config::Config;
use crate::ui::{Button, Icon, Node, StatusInfo, Tone};

pub struct FlowboardApp {
    pub config: Config,
    pub run_count: u32,
    pub last_run: Option<DateTime<Local>>,
    pub style_initialized: bool,
}

impl FlowboardApp {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            run_count: 0,
            last_run: None,
            style_initialized: false,
        }
    }

    fn init_style(&mut self, ctx: &egui::Context) {
        if self.style_initialized {
            return;
        }
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(8.0, 10.0);
        });
        self.style_initialized = true;
    }

    /// Draws one frame of the panel contents
    pub fn draw(&mut self, ui: &mut egui::Ui) {
        ui.heading(&self.config.title);

        let mut clicked = false;
        ui.horizontal(|ui| {
            Button::new("Run")
                .children(Node::List(vec![
                    Node::text(" "),
                    Node::icon(Icon::PlayCircle, Tone::Blue),
                ]))
                .on_click(|| clicked = true)
                .show(ui);

            // No handler: renders but does nothing
            Button::new("Inspect").show(ui);
        });
        if clicked {
            self.record_run();
        }

        let status = match self.last_run {
            Some(at) => format!("Runs: {} (last at {})", self.run_count, at.format("%H:%M:%S")),
            None => "Runs: 0".to_string(),
        };
        ui.label(status);

        ui.separator();
        StatusInfo.show(ui);
    }

    fn record_run(&mut self) {
        self.run_count += 1;
        self.last_run = Some(Local::now());
        log::info!("▶ Run requested (#{})", self.run_count);
    }
}

impl eframe::App for FlowboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.init_style(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            log::info!("Escape pressed, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| self.draw(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_recorded_with_timestamp() {
        let mut app = FlowboardApp::new(Config::default());
        assert_eq!(app.run_count, 0);
        assert!(app.last_run.is_none());

        app.record_run();
        app.record_run();
        assert_eq!(app.run_count, 2);
        assert!(app.last_run.is_some());
    }

    #[test]
    fn draws_headless_without_runs() {
        let ctx = egui::Context::default();
        let mut app = FlowboardApp::new(Config::default());
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| app.draw(ui));
            });
        }
        assert_eq!(app.run_count, 0);
    }
}
