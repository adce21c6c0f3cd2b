use crate::types::Individual;
use crate::ui::state::AppState;
use std::time::Instant;

pub struct PopulationGrid;

impl PopulationGrid {
    pub fn show(ui: &mut egui::Ui, population: &[Individual], state: &AppState, now: Instant) {
        ui.horizontal_wrapped(|ui| {
            for (idx, individual) in population.iter().enumerate() {
                let mut text = egui::RichText::new(individual.to_string()).monospace();
                if state.is_highlighted(idx, now) {
                    text = text
                        .background_color(egui::Color32::from_rgb(255, 230, 120))
                        .color(egui::Color32::BLACK);
                }
                ui.label(text);
            }
        });
    }
}
