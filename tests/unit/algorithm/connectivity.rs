//! Tests for region flood fill and isolation checks

#[cfg(test)]
mod tests {
    use crate::binary;
    use arenatile::algorithm::connectivity::{
        empty_regions, is_connected, reachable_empty, would_not_isolate,
    };
    use arenatile::spatial::Cell;
    use arenatile::spatial::grid::BoundingBox;

    fn whole(width: usize, height: usize) -> BoundingBox {
        BoundingBox {
            min: [0, 0],
            max: [width - 1, height - 1],
        }
    }

    // Tests reachability stops at walls and the region edge
    #[test]
    fn test_reachable_empty_counts_component() {
        let grid = binary(&["..#..", "..#..", "..#.."]);
        assert_eq!(reachable_empty(&grid, &whole(5, 3), [0, 0]), 6);
        assert_eq!(reachable_empty(&grid, &whole(5, 3), [4, 2]), 6);
        assert_eq!(reachable_empty(&grid, &whole(5, 3), [2, 0]), 0);

        let left_half = BoundingBox {
            min: [0, 0],
            max: [0, 2],
        };
        assert_eq!(reachable_empty(&grid, &left_half, [0, 0]), 3);
    }

    // Tests connectivity across split, joined and full regions
    // Verified by comparing against the reachable count only
    #[test]
    fn test_is_connected() {
        assert!(!is_connected(&binary(&["..#..", "..#..", "..#.."]), &whole(5, 3)));
        assert!(is_connected(&binary(&["..#..", ".....", "..#.."]), &whole(5, 3)));
        assert!(is_connected(&binary(&["###", "###"]), &whole(3, 2)));
    }

    // Tests diagonal contact does not connect areas
    #[test]
    fn test_diagonal_cells_are_separate() {
        let grid = binary(&[".#", "#."]);
        assert!(!is_connected(&grid, &whole(2, 2)));
        assert_eq!(empty_regions(&grid, &whole(2, 2)), vec![1, 1]);
    }

    // Tests region sizes are listed in order of their first cell
    #[test]
    fn test_empty_regions_sizes() {
        let grid = binary(&["..#.", "###.", "#..."]);
        assert_eq!(empty_regions(&grid, &whole(4, 3)), vec![2, 5]);
        assert!(empty_regions(&binary(&["##"]), &whole(2, 1)).is_empty());
    }

    // Tests the speculative wall is reverted whatever the answer
    // Verified by leaving the speculative wall in place
    #[test]
    fn test_would_not_isolate_reverts() {
        let mut grid = binary(&["...", "#.#", "..."]);
        let region = whole(3, 3);

        assert!(!would_not_isolate(&mut grid, &region, 1, 1));
        assert_eq!(grid.get(1, 1), Cell::Empty);

        assert!(would_not_isolate(&mut grid, &region, 0, 0));
        assert_eq!(grid.get(0, 0), Cell::Empty);
    }

    // Tests filling the last empty cell keeps the region connected
    #[test]
    fn test_last_empty_cell() {
        let mut grid = binary(&["#.", "##"]);
        assert!(would_not_isolate(&mut grid, &whole(2, 2), 1, 0));
    }
}
