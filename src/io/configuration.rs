//! Generation constants, classifier bounds and runtime configuration

use crate::io::error::{Result, check_dimension, invalid_parameter};
use crate::spatial::grid::OutOfBounds;

// Layout of the generated arena
/// Default width of the playable interior
pub const DEFAULT_INNER_WIDTH: usize = 10;
/// Default height of the playable interior
pub const DEFAULT_INNER_HEIGHT: usize = 15;
/// Only supported border thickness
pub const BORDER_THICKNESS: usize = 1;

// Path growth
/// Default number of obstacle paths
pub const DEFAULT_PATH_COUNT: usize = 5;
/// Default upper bound on path length (exclusive for the drawn length)
pub const DEFAULT_MAX_PATH_LENGTH: usize = 5;
/// Smallest maximum path length that still allows one body step
pub const MIN_MAX_PATH_LENGTH: usize = 2;
/// Default probability of turning after each step
pub const DEFAULT_TURN_CHANCE: f64 = 0.5;
/// Default step interval of forced turns (0 disables)
pub const DEFAULT_GUARANTEED_TURN_STEP: usize = 3;

// Corner-exclusion margin, shared by spawn selection and growth
/// Cells kept free of paths at each end of every edge
pub const CORNER_OFFSET: usize = 3;
/// Minimum Manhattan distance between accepted spawn points
pub const MIN_SPAWN_SEPARATION: usize = 4;

// Safety limits for grids accepted by either pipeline
/// Smallest accepted map dimension
pub const MIN_MAP_DIMENSION: usize = 3;
/// Largest accepted map dimension
pub const MAX_MAP_DIMENSION: usize = 1000;

// Render metadata carried by layout files
/// Tile edge in pixels when a layout does not specify one
pub const DEFAULT_TILE_SIZE: u32 = 64;
/// Smallest accepted tile edge in pixels
pub const MIN_TILE_SIZE: u32 = 8;
/// Largest accepted tile edge in pixels
pub const MAX_TILE_SIZE: u32 = 512;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Parameters for one arena generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Columns of the playable interior
    pub inner_width: usize,
    /// Rows of the playable interior
    pub inner_height: usize,
    /// Border ring thickness; only 1 is supported
    pub border_thickness: usize,
    /// Requested number of obstacle paths
    pub path_count: usize,
    /// Path length is drawn from `1..max_path_length`
    pub max_path_length: usize,
    /// Probability of turning after each placed cell
    pub turn_chance: f64,
    /// Force a turn every this many steps (0 disables)
    pub guaranteed_turn_step: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            inner_width: DEFAULT_INNER_WIDTH,
            inner_height: DEFAULT_INNER_HEIGHT,
            border_thickness: BORDER_THICKNESS,
            path_count: DEFAULT_PATH_COUNT,
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            turn_chance: DEFAULT_TURN_CHANCE,
            guaranteed_turn_step: DEFAULT_GUARANTEED_TURN_STEP,
        }
    }
}

impl GenerationConfig {
    /// Smallest interior side that leaves room between the corner margins
    pub const MIN_INNER_DIMENSION: usize = 2 * CORNER_OFFSET + 1;

    /// Total grid width including the border
    pub const fn total_width(&self) -> usize {
        self.inner_width + 2 * self.border_thickness
    }

    /// Total grid height including the border
    pub const fn total_height(&self) -> usize {
        self.inner_height + 2 * self.border_thickness
    }

    /// Check every parameter before any grid is built
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The border thickness is not 1
    /// - The interior is too small for the corner-exclusion margins
    /// - The full grid exceeds the maximum map dimension
    /// - The maximum path length is below 2
    /// - The turn chance is not a probability
    pub fn validate(&self) -> Result<()> {
        if self.border_thickness != BORDER_THICKNESS {
            return Err(invalid_parameter(
                "border_thickness",
                &self.border_thickness,
                &"only a single-cell border ring is supported",
            ));
        }

        check_dimension(
            "width",
            self.inner_width,
            Self::MIN_INNER_DIMENSION,
            MAX_MAP_DIMENSION - 2 * BORDER_THICKNESS,
        )?;
        check_dimension(
            "height",
            self.inner_height,
            Self::MIN_INNER_DIMENSION,
            MAX_MAP_DIMENSION - 2 * BORDER_THICKNESS,
        )?;

        if self.max_path_length < MIN_MAX_PATH_LENGTH {
            return Err(invalid_parameter(
                "max_path_length",
                &self.max_path_length,
                &format!("must be at least {MIN_MAX_PATH_LENGTH}"),
            ));
        }

        if !(0.0..=1.0).contains(&self.turn_chance) {
            return Err(invalid_parameter(
                "turn_chance",
                &self.turn_chance,
                &"must lie in [0, 1]",
            ));
        }

        Ok(())
    }
}

/// Parameters for one classification pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// Derive codes from neighbour patterns; otherwise pass codes through
    pub context_aware: bool,
    /// How cells outside the grid read during pattern extraction
    ///
    /// Ring cells are classified by position and every other cell has all eight
    /// neighbours inside the grid, so a full pass reads the same either way.
    /// The policy only matters to callers extracting patterns at the ring.
    pub out_of_bounds: OutOfBounds,
    /// Smallest accepted width
    pub min_width: usize,
    /// Smallest accepted height
    pub min_height: usize,
    /// Largest accepted width
    pub max_width: usize,
    /// Largest accepted height
    pub max_height: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            context_aware: true,
            out_of_bounds: OutOfBounds::Wall,
            min_width: MIN_MAP_DIMENSION,
            min_height: MIN_MAP_DIMENSION,
            max_width: MAX_MAP_DIMENSION,
            max_height: MAX_MAP_DIMENSION,
        }
    }
}

impl ClassifierConfig {
    /// Passthrough configuration that keeps input codes unchanged
    pub fn legacy() -> Self {
        Self {
            context_aware: false,
            ..Self::default()
        }
    }
}
