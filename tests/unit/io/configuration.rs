//! Tests for generation constants and configuration validation

#[cfg(test)]
mod tests {
    use arenatile::MapError;
    use arenatile::io::configuration::{
        BORDER_THICKNESS, CORNER_OFFSET, ClassifierConfig, DEFAULT_SEED, GenerationConfig,
        MAX_MAP_DIMENSION, MIN_MAP_DIMENSION, MIN_SPAWN_SEPARATION,
    };
    use arenatile::spatial::grid::OutOfBounds;

    // Tests the default arena parameters
    // Verified by changing constant values
    #[test]
    fn test_generation_defaults() {
        let config = GenerationConfig::default();
        assert_eq!((config.inner_width, config.inner_height), (10, 15));
        assert_eq!(config.border_thickness, BORDER_THICKNESS);
        assert_eq!(config.path_count, 5);
        assert_eq!(config.max_path_length, 5);
        assert!((config.turn_chance - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.guaranteed_turn_step, 3);
        assert_eq!((config.total_width(), config.total_height()), (12, 17));
        assert!(config.validate().is_ok());
    }

    // Tests layout constants shared by spawn selection and growth
    #[test]
    fn test_layout_constants() {
        assert_eq!(CORNER_OFFSET, 3);
        assert_eq!(MIN_SPAWN_SEPARATION, 4);
        assert_eq!(GenerationConfig::MIN_INNER_DIMENSION, 7);
        assert_eq!((MIN_MAP_DIMENSION, MAX_MAP_DIMENSION), (3, 1000));
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests the boundaries of each validated parameter
    // Verified by making the interior bound exclusive
    #[test]
    fn test_validate_boundaries() {
        let base = GenerationConfig::default();

        let smallest = GenerationConfig {
            inner_width: 7,
            inner_height: 7,
            max_path_length: 2,
            turn_chance: 1.0,
            ..base
        };
        assert!(smallest.validate().is_ok());

        let largest = GenerationConfig {
            inner_width: 998,
            inner_height: 998,
            turn_chance: 0.0,
            ..base
        };
        assert!(largest.validate().is_ok());

        let too_wide = GenerationConfig {
            inner_width: 999,
            ..base
        };
        assert!(matches!(
            too_wide.validate(),
            Err(MapError::DimensionOutOfRange { axis: "width", .. })
        ));

        let too_short = GenerationConfig {
            inner_height: 6,
            ..base
        };
        assert!(matches!(
            too_short.validate(),
            Err(MapError::DimensionOutOfRange { axis: "height", .. })
        ));

        let negative = GenerationConfig {
            turn_chance: -0.1,
            ..base
        };
        assert!(negative.validate().is_err());

        let not_a_number = GenerationConfig {
            turn_chance: f64::NAN,
            ..base
        };
        assert!(not_a_number.validate().is_err());
    }

    // Tests classifier defaults and the legacy preset
    #[test]
    fn test_classifier_config() {
        let config = ClassifierConfig::default();
        assert!(config.context_aware);
        assert_eq!(config.out_of_bounds, OutOfBounds::Wall);
        assert_eq!((config.min_width, config.max_width), (3, 1000));
        assert_eq!((config.min_height, config.max_height), (3, 1000));

        let legacy = ClassifierConfig::legacy();
        assert!(!legacy.context_aware);
        assert_eq!(legacy.max_width, config.max_width);
    }
}
