//! Arena generation from configuration to finished tile grid

use rand::{Rng, rngs::StdRng};

use crate::algorithm::border::synthesize_border;
use crate::algorithm::codes::apply_path_codes;
use crate::algorithm::growth::{GrowthOutcome, grow_path_observed};
use crate::algorithm::spawn::select_spawn_points;
use crate::io::configuration::GenerationConfig;
use crate::io::error::{Result, invalid_parameter};
use crate::math::probability::RandomSelector;
use crate::spatial::Grid;

/// A generated arena and the record of how each path grew
#[derive(Clone, Debug)]
pub struct Generation {
    /// Finished grid of tile codes
    pub grid: Grid,
    /// One entry per selected spawn point, in growth order
    pub outcomes: Vec<GrowthOutcome>,
}

impl Generation {
    /// Paths that placed at least their spawn cell
    pub fn paths_grown(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.path.is_empty())
            .count()
    }

    /// Total obstacle cells placed across all paths
    pub fn cells_placed(&self) -> usize {
        self.outcomes.iter().map(|outcome| outcome.path.len()).sum()
    }
}

/// Build a bordered arena and grow obstacle paths into it
///
/// # Errors
///
/// Returns an error if the configuration fails validation; growth itself
/// never fails
pub fn generate<R: Rng>(
    config: &GenerationConfig,
    random: &mut RandomSelector<R>,
) -> Result<Generation> {
    generate_observed(config, random, &mut |_| {})
}

/// Same as [`generate`], calling `observer` after every placed obstacle cell
///
/// # Errors
///
/// Returns an error if the configuration fails validation
pub fn generate_observed<R: Rng>(
    config: &GenerationConfig,
    random: &mut RandomSelector<R>,
    observer: &mut dyn FnMut(&Grid),
) -> Result<Generation> {
    config.validate()?;

    let mut grid = synthesize_border(
        config.inner_width,
        config.inner_height,
        config.border_thickness,
    )?;
    let interior = grid
        .interior(config.border_thickness)
        .ok_or_else(|| invalid_parameter("inner_width", &config.inner_width, &"no interior"))?;

    let spawn_points = select_spawn_points(&interior, config.path_count, random);

    let mut outcomes = Vec::with_capacity(spawn_points.len());
    for spawn in spawn_points {
        let outcome = grow_path_observed(&mut grid, &interior, spawn, config, random, observer);
        apply_path_codes(&mut grid, &outcome.path, spawn.direction);
        outcomes.push(outcome);
    }

    let generation = Generation { grid, outcomes };
    log::info!(
        "Generated {}x{} arena: {} of {} paths grown, {} obstacle cells",
        generation.grid.width(),
        generation.grid.height(),
        generation.paths_grown(),
        config.path_count,
        generation.cells_placed()
    );

    Ok(generation)
}

/// Reusable generator owning its configuration and random source
pub struct ArenaGenerator<R = StdRng> {
    config: GenerationConfig,
    random: RandomSelector<R>,
}

impl ArenaGenerator<StdRng> {
    /// Create a generator seeded for reproducible output
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: GenerationConfig, seed: u64) -> Result<Self> {
        Self::with_random(config, RandomSelector::new(seed))
    }
}

impl<R: Rng> ArenaGenerator<R> {
    /// Create a generator drawing from an existing random source
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_random(config: GenerationConfig, random: RandomSelector<R>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, random })
    }

    /// Configuration used for every arena
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate the next arena from the shared random stream
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails validation
    pub fn generate(&mut self) -> Result<Generation> {
        generate(&self.config, &mut self.random)
    }
}
