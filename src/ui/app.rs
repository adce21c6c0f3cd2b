use super::panels::{ControlAction, LeftPanel, MainPanel};
use super::services::ConfigBridge;
use super::state::AppState;
use crate::config::AppConfig;
use crate::engines::generation::GenerationEngine;
use std::time::Instant;

pub struct StrevoApp {
    state: AppState,
    engine: GenerationEngine,
    left_panel: LeftPanel,
    main_panel: MainPanel,
}

impl StrevoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig, engine: GenerationEngine) -> Self {
        Self {
            state: AppState::from_config(config),
            engine,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
        }
    }

    fn advance(&mut self, now: Instant) {
        match self.engine.tick(now) {
            Ok(Some(report)) => self.state.apply_report(&report, now),
            Ok(None) => {}
            Err(e) => {
                log::error!("Generation step failed: {}", e);
                self.engine.stop();
                self.state.status_message = format!("Error: {}", e);
            }
        }
    }

    fn handle_action(&mut self, action: ControlAction, now: Instant) {
        match action {
            ControlAction::Start => {
                let config = ConfigBridge::to_evolution_config(&self.state);
                match self.engine.start(&config, now) {
                    Ok(run_state) => {
                        self.state.last_error = None;
                        self.state.clear_highlights();
                        self.state.mark_changed(self.engine.changed_indices().iter().copied(), now);
                        self.state.status_message = format!("Started: {}", run_state);
                    }
                    Err(e) => self.state.last_error = Some(e.to_string()),
                }
            }
            ControlAction::Stop => {
                self.engine.stop();
                self.state.status_message = format!("Stopped at generation {}", self.engine.generation());
            }
        }
    }
}

impl eframe::App for StrevoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.advance(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.heading("Genetic Algorithm - String Evolution");
        });

        let mut action = None;
        egui::SidePanel::left("left_panel")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                action = self.left_panel.show(ui, &mut self.state, self.engine.run_state());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state, &self.engine, now);
        });

        if let Some(action) = action {
            self.handle_action(action, now);
        }

        // Wake up for the next generation or the next expiring highlight.
        let wake = [self.engine.next_tick_in(now), self.state.prune_highlights(now)]
            .into_iter()
            .flatten()
            .min();
        if let Some(wait) = wake {
            ctx.request_repaint_after(wait);
        }
    }
}
