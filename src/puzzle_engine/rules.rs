use std::ops::RangeInclusive;

use crate::puzzle_engine::models::{Difficulty, TriangleRule};

// ---------------------------------------------------------------------------
// Triangle math
// ---------------------------------------------------------------------------

/// Accepted range for a triangle's center value.
pub const CENTER_RANGE: RangeInclusive<i64> = 1..=999;

impl TriangleRule {
    /// Rule variants available at each difficulty tier.
    pub fn for_difficulty(difficulty: Difficulty) -> &'static [TriangleRule] {
        match difficulty {
            Difficulty::Easy   => &[TriangleRule::SumMinusRight, TriangleRule::SumAll],
            Difficulty::Medium => &[TriangleRule::ProductPlusRight, TriangleRule::AbsDiffTimesLeft],
            Difficulty::Hard   => &[TriangleRule::DoubledSum, TriangleRule::ProductMinusDoubleLeft],
        }
    }

    pub fn apply(self, top: i64, left: i64, right: i64) -> i64 {
        match self {
            TriangleRule::SumMinusRight          => (top + left) - right,
            TriangleRule::SumAll                 => top + left + right,
            TriangleRule::ProductPlusRight       => (top * left) + right,
            TriangleRule::AbsDiffTimesLeft       => (top - right).abs() * left,
            TriangleRule::DoubledSum             => (top + left + right) * 2,
            TriangleRule::ProductMinusDoubleLeft => (top * right) - (left * 2),
        }
    }

    /// The rule with the corner values substituted, e.g. `"(7 + 5) - 3 = 9"`.
    pub fn worked(self, top: i64, left: i64, right: i64) -> String {
        let center = self.apply(top, left, right);
        match self {
            TriangleRule::SumMinusRight          => format!("({top} + {left}) - {right} = {center}"),
            TriangleRule::SumAll                 => format!("{top} + {left} + {right} = {center}"),
            TriangleRule::ProductPlusRight       => format!("({top} x {left}) + {right} = {center}"),
            TriangleRule::AbsDiffTimesLeft       => format!("|{top} - {right}| x {left} = {center}"),
            TriangleRule::DoubledSum             => format!("({top} + {left} + {right}) x 2 = {center}"),
            TriangleRule::ProductMinusDoubleLeft => format!("({top} x {right}) - ({left} x 2) = {center}"),
        }
    }
}

/// Inclusive range the three corner values are drawn from.
pub fn corner_range(difficulty: Difficulty) -> (i64, i64) {
    match difficulty {
        Difficulty::Easy   => (2, 9),
        Difficulty::Medium => (4, 15),
        Difficulty::Hard   => (10, 50),
    }
}

// ---------------------------------------------------------------------------
// Matrix rotation
// ---------------------------------------------------------------------------

/// Quarter turns added per cell.
pub fn rotation_step(difficulty: Difficulty) -> i8 {
    match difficulty {
        Difficulty::Easy   => 1,
        Difficulty::Medium => -1,
        Difficulty::Hard   => 2,
    }
}

/// Rotation state of the cell at reading-order `index`, always in 0..=3.
pub fn rotation_state(base: i8, index: usize, step: i8) -> i8 {
    (base as i64 + index as i64 * step as i64).rem_euclid(4) as i8
}

// ---------------------------------------------------------------------------
// Cube folding
// ---------------------------------------------------------------------------

/// Face pairs that can never be visible at the same time on a folded cube.
pub const OPPOSITE_FACES: [(usize, usize); 3] = [(0, 5), (1, 3), (2, 4)];

/// The eight corners of the cube: one face from each opposite pair.
pub const CUBE_CORNERS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 1, 4],
    [0, 3, 2],
    [0, 3, 4],
    [5, 1, 2],
    [5, 1, 4],
    [5, 3, 2],
    [5, 3, 4],
];

/// How many opposite pairs the three faces contain.
pub fn opposite_pairs_in(faces: &[usize; 3]) -> usize {
    OPPOSITE_FACES
        .iter()
        .filter(|(a, b)| faces.contains(a) && faces.contains(b))
        .count()
}

// ---------------------------------------------------------------------------
// Analytic geometry
// ---------------------------------------------------------------------------

/// `(a, b, c)` with `a² + b² = c²`.
pub const PYTHAGOREAN_TRIPLES: [(i64, i64, i64); 4] = [(3, 4, 5), (6, 8, 10), (5, 12, 13), (8, 15, 17)];

/// Medium keeps to the two small triples; Hard (and anything above Easy) uses all four.
pub fn triples_for(difficulty: Difficulty) -> &'static [(i64, i64, i64)] {
    match difficulty {
        Difficulty::Medium => &PYTHAGOREAN_TRIPLES[..2],
        _                  => &PYTHAGOREAN_TRIPLES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_rules_compute_expected_centers() {
        assert_eq!(TriangleRule::SumMinusRight.apply(7, 5, 3), 9);
        assert_eq!(TriangleRule::AbsDiffTimesLeft.apply(4, 6, 9), 30);
        assert_eq!(TriangleRule::ProductMinusDoubleLeft.apply(10, 20, 30), 260);
        assert_eq!(TriangleRule::SumMinusRight.worked(7, 5, 3), "(7 + 5) - 3 = 9");
    }

    #[test]
    fn each_difficulty_has_two_rule_variants() {
        for d in Difficulty::ALL {
            assert_eq!(TriangleRule::for_difficulty(d).len(), 2);
        }
    }

    #[test]
    fn rotation_state_wraps_negative_steps() {
        assert_eq!(rotation_state(0, 1, -1), 3);
        assert_eq!(rotation_state(2, 8, -1), 2);
        assert_eq!(rotation_state(3, 4, 2), 3);
        for i in 0..9 {
            assert!((0..4).contains(&rotation_state(1, i, -1)));
        }
    }

    #[test]
    fn cube_corners_hold_no_opposite_pair() {
        for corner in CUBE_CORNERS {
            assert_eq!(opposite_pairs_in(&corner), 0, "corner {corner:?}");
        }
        assert_eq!(opposite_pairs_in(&[0, 5, 2]), 1);
        assert_eq!(opposite_pairs_in(&[1, 3, 4]), 1);
    }

    #[test]
    fn triples_are_pythagorean() {
        for (a, b, c) in PYTHAGOREAN_TRIPLES {
            assert_eq!(a * a + b * b, c * c);
        }
        assert_eq!(triples_for(Difficulty::Medium).len(), 2);
        assert_eq!(triples_for(Difficulty::Hard).len(), 4);
    }
}
