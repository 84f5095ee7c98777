//! Tests for the turn and junction table

#[cfg(test)]
mod tests {
    use arenatile::analysis::turns::lookup_turn;
    use arenatile::spatial::{Cell, Rotation};

    // Tests every L turn with its rotation
    // Verified by swapping two rotation entries
    #[test]
    fn test_l_turns() {
        assert_eq!(
            lookup_turn((true, true, false, false)),
            Some((Cell::TurnTopRight, Rotation::Deg0))
        );
        assert_eq!(
            lookup_turn((false, true, true, false)),
            Some((Cell::TurnBottomRight, Rotation::Deg90))
        );
        assert_eq!(
            lookup_turn((false, false, true, true)),
            Some((Cell::TurnBottomLeft, Rotation::Deg180))
        );
        assert_eq!(
            lookup_turn((true, false, false, true)),
            Some((Cell::TurnTopLeft, Rotation::Deg270))
        );
    }

    // Tests the three T junctions with tiles
    #[test]
    fn test_t_junctions() {
        assert_eq!(
            lookup_turn((false, true, true, true)),
            Some((Cell::TeeDown, Rotation::Deg0))
        );
        assert_eq!(
            lookup_turn((true, false, true, true)),
            Some((Cell::TeeLeft, Rotation::Deg90))
        );
        assert_eq!(
            lookup_turn((true, true, true, false)),
            Some((Cell::TeeRight, Rotation::Deg270))
        );
        assert_eq!(lookup_turn((true, true, false, true)), None);
    }

    // Tests straight, single, empty and full patterns are not turns
    #[test]
    fn test_non_turn_patterns() {
        let mut matched = 0;
        for bits in 0..16_u8 {
            let pattern = (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0);
            let count = bits.count_ones();
            let straight = pattern == (true, false, true, false) || pattern == (false, true, false, true);

            match lookup_turn(pattern) {
                Some((cell, _)) => {
                    matched += 1;
                    assert!(cell.is_turn());
                    assert!((2..=3).contains(&count) && !straight);
                }
                None => assert!(count != 2 || straight),
            }
        }
        assert_eq!(matched, 7);
    }
}
