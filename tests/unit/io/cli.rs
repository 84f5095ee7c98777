//! Tests for command-line parsing and command dispatch

#[cfg(test)]
mod tests {
    use arenatile::io::cli::{Cli, Command, CommandProcessor};
    use arenatile::io::configuration::{DEFAULT_SEED, GenerationConfig};
    use arenatile::io::layout::MapLayout;
    use arenatile::spatial::Cell;
    use clap::Parser;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests generate defaults match the library defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_generate_defaults() {
        let cli = Cli::parse_from(["arenatile", "generate"]);
        let Command::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };

        assert_eq!(args.config(), GenerationConfig::default());
        assert_eq!(args.seed, DEFAULT_SEED);
        assert_eq!(args.count, 1);
        assert!(args.output.is_none());
        assert!(!args.quiet);
    }

    // Tests long and short flags for generation parameters
    // Verified by changing short flag definitions
    #[test]
    fn test_generate_flags() {
        let cli = Cli::parse_from([
            "arenatile", "generate", "-w", "20", "-H", "9", "--paths", "8", "-l", "6",
            "--turn-chance", "0.25", "--turn-step", "0", "-s", "7", "-n", "3", "-q",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("Expected generate command");
        };

        let config = args.config();
        assert_eq!((config.inner_width, config.inner_height), (20, 9));
        assert_eq!(config.path_count, 8);
        assert_eq!(config.max_path_length, 6);
        assert!((config.turn_chance - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.guaranteed_turn_step, 0);
        assert_eq!(args.seed_for(2), 9);
        assert!(args.quiet);
    }

    // Tests batch output names carry the seed of each arena
    // Verified by reusing the first seed for every file
    #[test]
    fn test_generate_output_paths() {
        let single = Cli::parse_from(["arenatile", "generate", "-o", "out/arena.json"]);
        let Command::Generate(args) = single.command else {
            panic!("Expected generate command");
        };
        assert_eq!(args.output_path(0), Some(PathBuf::from("out/arena.json")));

        let batch = Cli::parse_from(["arenatile", "generate", "-o", "out/arena.json", "-n", "2"]);
        let Command::Generate(args) = batch.command else {
            panic!("Expected generate command");
        };
        assert_eq!(args.output_path(0), Some(PathBuf::from("out/arena_42.json")));
        assert_eq!(args.output_path(1), Some(PathBuf::from("out/arena_43.json")));
    }

    // Tests classify arguments and the legacy switch
    #[test]
    fn test_classify_args() {
        let cli = Cli::parse_from(["arenatile", "classify", "map.json", "--legacy"]);
        let Command::Classify(args) = cli.command else {
            panic!("Expected classify command");
        };

        assert_eq!(args.input, PathBuf::from("map.json"));
        assert!(!args.config().context_aware);
        assert!(args.output.is_none());
    }

    // Tests generate then classify through files end to end
    #[test]
    fn test_process_generate_and_classify_files() {
        let dir = TempDir::new().unwrap();
        let arena = dir.path().join("arena.json");
        let classified = dir.path().join("classified.json");

        let generate = Cli::parse_from([
            "arenatile".into(),
            "generate".into(),
            "--quiet".into(),
            "--output".into(),
            arena.clone().into_os_string(),
        ]);
        CommandProcessor::new(generate).process().unwrap();

        let layout = MapLayout::read(&arena).unwrap();
        assert_eq!(layout.name.as_deref(), Some("arena-42"));
        let grid = layout.to_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (12, 17));

        // Classification takes raw walls, so write the binary form back out
        MapLayout::from_grid(&grid.to_binary()).write(&arena).unwrap();

        let classify = Cli::parse_from([
            "arenatile".into(),
            "classify".into(),
            arena.into_os_string(),
            "--quiet".into(),
            "--output".into(),
            classified.clone().into_os_string(),
        ]);
        CommandProcessor::new(classify).process().unwrap();

        let result = MapLayout::read(&classified).unwrap().to_grid().unwrap();
        assert_eq!(result.get(0, 0), Cell::CornerUpperLeft);
        assert_eq!(result.count(|cell| cell == Cell::Wall), 0);
        assert_eq!(result.to_binary(), grid.to_binary());
    }

    // Tests a batch with an enormous path count still tracks progress and writes every arena
    // Verified by multiplying the progress capacity without saturation
    #[test]
    fn test_process_batch_with_huge_path_count() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("arena.json");
        let paths = usize::MAX.to_string();

        let cli = Cli::parse_from([
            "arenatile".into(),
            "generate".into(),
            "--paths".into(),
            paths.into(),
            "-n".into(),
            "2".into(),
            "--output".into(),
            output.into_os_string(),
        ]);
        CommandProcessor::new(cli).process().unwrap();

        for seed in [DEFAULT_SEED, DEFAULT_SEED + 1] {
            let layout = MapLayout::read(&dir.path().join(format!("arena_{seed}.json"))).unwrap();
            assert_eq!(layout.name, Some(format!("arena-{seed}")));
        }
    }

    // Tests invalid generation flags surface as errors
    #[test]
    fn test_process_rejects_invalid_border() {
        let cli = Cli::parse_from(["arenatile", "generate", "--border", "2", "-q"]);
        assert!(CommandProcessor::new(cli).process().is_err());
    }
}
