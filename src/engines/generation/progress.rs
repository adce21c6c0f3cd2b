use super::engine::GenerationReport;
use crate::types::RunState;
use std::sync::mpsc::Sender;

pub trait ProgressCallback: Send {
    fn on_run_started(&mut self, target: &str, population_size: usize);
    fn on_generation_complete(&mut self, report: &GenerationReport);
    fn on_run_finished(&mut self, state: RunState, generation: usize);
}

/// Reports progress through the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgressCallback;

impl ProgressCallback for LogProgressCallback {
    fn on_run_started(&mut self, target: &str, population_size: usize) {
        log::info!("Run started: target {:?}, population {}", target, population_size);
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        log::debug!(
            "Generation {} complete. Best: {} (fitness {}), {} changed",
            report.generation,
            report.best,
            report.best_fitness,
            report.changed_indices.len()
        );
    }

    fn on_run_finished(&mut self, state: RunState, generation: usize) {
        log::info!("Run finished at generation {}: {}", generation, state);
    }
}

pub enum ProgressMessage {
    RunStarted { target: String, population_size: usize },
    GenerationComplete(GenerationReport),
    RunFinished { state: RunState, generation: usize },
}

/// Forwards progress over a channel.
pub struct ChannelProgressCallback {
    sender: Sender<ProgressMessage>,
}

impl ChannelProgressCallback {
    pub fn new(sender: Sender<ProgressMessage>) -> Self {
        Self { sender }
    }
}

impl ProgressCallback for ChannelProgressCallback {
    fn on_run_started(&mut self, target: &str, population_size: usize) {
        let _ = self.sender.send(ProgressMessage::RunStarted {
            target: target.to_string(),
            population_size,
        });
    }

    fn on_generation_complete(&mut self, report: &GenerationReport) {
        let _ = self.sender.send(ProgressMessage::GenerationComplete(report.clone()));
    }

    fn on_run_finished(&mut self, state: RunState, generation: usize) {
        let _ = self.sender.send(ProgressMessage::RunFinished { state, generation });
    }
}
