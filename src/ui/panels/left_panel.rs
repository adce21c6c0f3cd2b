use crate::types::RunState;
use crate::ui::services::ConfigBridge;
use crate::ui::state::AppState;

/// Request from the control buttons, carried out by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Stop,
}

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, run_state: RunState) -> Option<ControlAction> {
        ui.heading("Configuration");
        ui.separator();

        ui.add_enabled_ui(!run_state.is_running(), |ui| {
            Self::show_evolution_config(ui, state);
        });

        ui.separator();

        Self::show_control_buttons(ui, state, run_state)
    }

    fn show_evolution_config(ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Target String:");
            if ui.text_edit_singleline(&mut state.target_input).changed() {
                state.target_input = ConfigBridge::sanitize_target(&state.target_input);
            }
        });

        let (min_pop, max_pop) = Self::bounds(state, "population_size", 2.0, 10000.0);
        ui.horizontal(|ui| {
            ui.label("Population:");
            ui.add(
                egui::DragValue::new(&mut state.population_size)
                    .range(min_pop as usize..=max_pop as usize)
                    .speed(2),
            );
        });

        let (min_rate, max_rate) = Self::bounds(state, "mutation_rate", 0.0, 1.0);
        ui.horizontal(|ui| {
            ui.label("Mutation Rate:");
            ui.add(
                egui::Slider::new(&mut state.mutation_rate, min_rate..=max_rate)
                    .step_by(0.01)
                    .show_value(false),
            );
            ui.label(format!("{:.0}%", state.mutation_rate * 100.0));
        });
    }

    fn bounds(state: &AppState, field: &str, min: f64, max: f64) -> (f64, f64) {
        state
            .manifest
            .field(field)
            .map_or((min, max), |f| (f.min.unwrap_or(min), f.max.unwrap_or(max)))
    }

    fn show_control_buttons(ui: &mut egui::Ui, state: &mut AppState, run_state: RunState) -> Option<ControlAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            if run_state.is_running() {
                if ui.button("⏹ Stop Simulation").clicked() {
                    action = Some(ControlAction::Stop);
                }
                return;
            }

            let validation_error = ConfigBridge::validate_inputs(state).err();
            let start_button = ui.add_enabled(validation_error.is_none(), egui::Button::new("▶ Start Simulation"));
            if start_button.clicked() {
                action = Some(ControlAction::Start);
            }

            if let Some(error) = validation_error.or_else(|| state.last_error.clone()) {
                ui.colored_label(egui::Color32::RED, error);
            }
        });

        action
    }
}
