pub mod population_grid;

pub use population_grid::PopulationGrid;
