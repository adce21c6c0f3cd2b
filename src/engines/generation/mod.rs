pub mod operators;
pub mod fitness;
pub mod schedule;
pub mod progress;
pub mod engine;

pub use engine::{GenerationEngine, GenerationReport};
pub use fitness::{best_index, score, score_population};
pub use operators::{crossover, crossover_at, generate_population, mutate, roulette_selection, select};
pub use progress::{ChannelProgressCallback, LogProgressCallback, ProgressCallback, ProgressMessage};
pub use schedule::TickSchedule;
