//! Command-line interface for arena generation and layout classification

use crate::algorithm::executor::generate_observed;
use crate::analysis::classifier::{Classification, classify};
use crate::analysis::statistics::GridStatistics;
use crate::io::configuration::{
    BORDER_THICKNESS, ClassifierConfig, DEFAULT_GUARANTEED_TURN_STEP, DEFAULT_INNER_HEIGHT,
    DEFAULT_INNER_WIDTH, DEFAULT_MAX_PATH_LENGTH, DEFAULT_PATH_COUNT, DEFAULT_SEED,
    DEFAULT_TURN_CHANCE, GenerationConfig,
};
use crate::io::error::Result;
use crate::io::layout::MapLayout;
use crate::io::progress::ProgressManager;
use crate::math::probability::RandomSelector;
use crate::spatial::Grid;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "arenatile")]
#[command(
    author,
    version,
    about = "Generate bordered arenas and classify wall layouts into tile codes"
)]
/// Command-line arguments for the arena tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Generate arenas with obstacle paths growing from the border
    Generate(GenerateArgs),
    /// Classify a binary layout into directional tile codes
    Classify(ClassifyArgs),
}

/// Arguments of the `generate` subcommand
#[derive(Args)]
pub struct GenerateArgs {
    /// Interior width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_INNER_WIDTH)]
    pub width: usize,

    /// Interior height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_INNER_HEIGHT)]
    pub height: usize,

    /// Border ring thickness
    #[arg(short, long, default_value_t = BORDER_THICKNESS)]
    pub border: usize,

    /// Number of obstacle paths to attempt
    #[arg(short, long, default_value_t = DEFAULT_PATH_COUNT)]
    pub paths: usize,

    /// Upper bound on path length
    #[arg(short = 'l', long, default_value_t = DEFAULT_MAX_PATH_LENGTH)]
    pub max_length: usize,

    /// Probability of turning after each step
    #[arg(short, long, default_value_t = DEFAULT_TURN_CHANCE)]
    pub turn_chance: f64,

    /// Force a turn every this many steps (0 disables)
    #[arg(long, default_value_t = DEFAULT_GUARANTEED_TURN_STEP)]
    pub turn_step: usize,

    /// Random seed of the first arena; later arenas use the following seeds
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of arenas to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Write JSON layouts instead of printing codes
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print code counts and connectivity for each arena
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateArgs {
    /// Generation parameters described by the flags
    pub const fn config(&self) -> GenerationConfig {
        GenerationConfig {
            inner_width: self.width,
            inner_height: self.height,
            border_thickness: self.border,
            path_count: self.paths,
            max_path_length: self.max_length,
            turn_chance: self.turn_chance,
            guaranteed_turn_step: self.turn_step,
        }
    }

    /// Seed of the arena at `index` within the batch
    pub const fn seed_for(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }

    /// Where the arena at `index` is written, if anywhere
    ///
    /// A single arena goes to the given file; batches insert the seed before
    /// the extension.
    pub fn output_path(&self, index: usize) -> Option<PathBuf> {
        let output = self.output.as_ref()?;
        if self.count <= 1 {
            return Some(output.clone());
        }

        let stem = output.file_stem().unwrap_or_default().to_string_lossy();
        let extension = output
            .extension()
            .map_or_else(|| "json".into(), |ext| ext.to_string_lossy());
        let name = format!("{stem}_{}.{extension}", self.seed_for(index));

        Some(output.parent().map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name)))
    }
}

/// Arguments of the `classify` subcommand
#[derive(Args)]
pub struct ClassifyArgs {
    /// JSON layout with rows of `0` and `1`
    #[arg(value_name = "LAYOUT")]
    pub input: PathBuf,

    /// Pass codes through unchanged instead of classifying
    #[arg(long)]
    pub legacy: bool,

    /// Write the classified layout instead of printing it
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print code counts and connectivity of the result
    #[arg(long)]
    pub stats: bool,

    /// Suppress warnings about unmatched cells
    #[arg(short, long)]
    pub quiet: bool,
}

impl ClassifyArgs {
    /// Classifier parameters described by the flags
    pub fn config(&self) -> ClassifierConfig {
        if self.legacy {
            ClassifierConfig::legacy()
        } else {
            ClassifierConfig::default()
        }
    }
}

/// Runs one parsed command line
pub struct CommandProcessor {
    cli: Cli,
}

impl CommandProcessor {
    /// Create a processor for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if parameters are invalid or a layout cannot be read,
    /// classified or written
    pub fn process(&self) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => run_generate(args),
            Command::Classify(args) => run_classify(args),
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let mut progress = (!args.quiet && args.count > 1).then(ProgressManager::new);
    if let Some(ref mut pm) = progress {
        pm.initialize(args.count);
    }

    for index in 0..args.count {
        let seed = args.seed_for(index);
        let mut random = RandomSelector::new(seed);

        if let Some(ref mut pm) = progress {
            pm.start_arena(
                index,
                format!("seed {seed}"),
                config.path_count.saturating_mul(config.max_path_length),
            );
        }

        let generation = generate_observed(&config, &mut random, &mut |_| {
            if let Some(ref mut pm) = progress {
                pm.cell_placed(index);
            }
        })?;

        if let Some(ref mut pm) = progress {
            pm.complete_arena(index);
        }

        match args.output_path(index) {
            Some(path) => MapLayout::from_grid(&generation.grid)
                .with_name(format!("arena-{seed}"))
                .write(&path)?,
            None => print_grid(&generation.grid),
        }

        if args.stats {
            print_statistics(&generation.grid);
        }
    }

    if let Some(ref pm) = progress {
        pm.finish();
    }

    Ok(())
}

fn run_classify(args: &ClassifyArgs) -> Result<()> {
    let layout = MapLayout::read(&args.input)?;
    let grid = layout.to_grid()?;
    let classification = classify(&grid, &args.config())?;

    // Allow print for user feedback on incomplete tile coverage
    #[allow(clippy::print_stderr)]
    if classification.unmatched > 0 && !args.quiet {
        eprintln!(
            "{}: {} cell(s) had no matching tile and were drawn as junctions",
            args.input.display(),
            classification.unmatched
        );
    }

    match &args.output {
        Some(path) => write_classified(&layout, &classification, path)?,
        None => print_classification(&classification),
    }

    if args.stats {
        print_statistics(&classification.grid);
    }

    Ok(())
}

fn write_classified(source: &MapLayout, classification: &Classification, path: &Path) -> Result<()> {
    MapLayout {
        name: source.name.clone(),
        version: source.version.clone(),
        tile_size: source.tile_size,
        ..MapLayout::from_classification(classification)
    }
    .write(path)
}

// Allow print for the command's primary output
#[allow(clippy::print_stdout)]
fn print_grid(grid: &Grid) {
    println!("{grid}");
}

// Allow print for the command's primary output
#[allow(clippy::print_stdout)]
fn print_classification(classification: &Classification) {
    println!("{}", classification.grid);

    let mut rotated: Vec<_> = classification.rotations.iter().collect();
    rotated.sort_by_key(|&(&[x, y], _)| (y, x));
    for ([x, y], rotation) in rotated {
        println!(
            "({x}, {y}) {} rotated {}°",
            classification.grid.get(*x, *y),
            rotation.degrees()
        );
    }
}

// Allow print for the requested statistics
#[allow(clippy::print_stdout)]
fn print_statistics(grid: &Grid) {
    println!("{}", GridStatistics::collect(grid));
}
