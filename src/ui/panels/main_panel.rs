use crate::engines::generation::GenerationEngine;
use crate::ui::state::AppState;
use crate::ui::widgets::PopulationGrid;
use std::time::Instant;

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState, engine: &GenerationEngine, now: Instant) {
        ui.heading("Simulation");
        ui.separator();

        egui::Grid::new("run_info").num_columns(2).show(ui, |ui| {
            ui.label("Generation:");
            ui.label(engine.generation().to_string());
            ui.end_row();

            ui.label("Target:");
            let target = engine
                .target()
                .map_or_else(|| state.target_input.clone(), |t| t.to_string());
            ui.monospace(target);
            ui.end_row();

            ui.label("Best Individual:");
            let best = engine.best_individual().map(|b| b.to_string()).unwrap_or_default();
            ui.monospace(format!("{} ({})", best, engine.best_fitness()));
            ui.end_row();

            ui.label("Mutation Rate:");
            let rate = engine.mutation_rate().unwrap_or(state.mutation_rate);
            ui.label(format!("{:.0}%", rate * 100.0));
            ui.end_row();

            ui.label("State:");
            ui.label(engine.run_state().to_string());
            ui.end_row();
        });

        ui.label(&state.status_message);
        ui.separator();

        ui.heading("Population");
        if engine.population().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No population yet. Click 'Start Simulation' to begin.");
            });
        } else {
            egui::ScrollArea::vertical().show(ui, |ui| {
                PopulationGrid::show(ui, engine.population(), state, now);
            });
        }
    }
}
