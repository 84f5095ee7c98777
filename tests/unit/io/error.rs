//! Tests for error messages and source chaining

#[cfg(test)]
mod tests {
    use arenatile::MapError;
    use arenatile::io::error::{check_dimension, invalid_parameter};
    use std::error::Error;

    // Tests file system errors keep their underlying cause
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MapError::FileSystem {
            path: "/tmp/layout.json".into(),
            operation: "read layout",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/layout.json"));

        let plain = invalid_parameter("turn_chance", &2.0, &"must lie in [0, 1]");
        assert!(plain.source().is_none());
    }

    // Tests parameter errors name the parameter, value and reason
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("max_path_length", &1, &"must be at least 2").to_string();
        assert!(message.contains("max_path_length"));
        assert!(message.contains("'1'"));
        assert!(message.contains("must be at least 2"));
    }

    // Tests structural errors point at the offending row or cell
    #[test]
    fn test_structural_error_messages() {
        let ragged = MapError::NonRectangular {
            row: 4,
            expected: 12,
            found: 11,
        };
        assert!(ragged.to_string().contains("Row 4"));
        assert!(ragged.to_string().contains("expected 12, got 11"));

        let cell = MapError::InvalidCell {
            x: 3,
            y: 7,
            value: "os".to_string(),
        };
        assert!(cell.to_string().contains("(3, 7)"));
        assert!(cell.to_string().contains("'os'"));

        let code = MapError::UnknownCode {
            x: 0,
            y: 2,
            code: "zz".to_string(),
        };
        assert!(code.to_string().contains("unknown tile code 'zz'"));
    }

    // Tests dimension checks include both bounds
    #[test]
    fn test_dimension_range_message() {
        assert!(check_dimension("width", 1000, 3, 1000).is_ok());

        let error = check_dimension("width", 1001, 3, 1000).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Map width 1001 is outside the range 3..=1000"
        );
    }

    // Tests plain I/O errors convert into file system errors
    #[test]
    fn test_from_io_error() {
        let error: MapError = std::io::Error::other("disk full").into();
        assert!(matches!(error, MapError::FileSystem { .. }));
    }
}
