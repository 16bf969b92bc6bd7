use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Finishing place shared by everyone on the same total.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub rank: usize,
    pub tied: bool,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tied {
            write!(f, "T{}", self.rank)
        } else {
            write!(f, "{}", self.rank)
        }
    }
}

/// Ranks cup points, highest first. Returned positions line up with `points`.
#[must_use]
pub fn rank_by_points(points: &[i32]) -> Vec<Position> {
    rank_ordered(points, |a, b| b.cmp(a))
}

/// Ranks scores to par, lowest first.
#[must_use]
pub fn rank_by_score(scores: &[i32]) -> Vec<Position> {
    rank_ordered(scores, Ord::cmp)
}

/// Indices of `values` in finishing order, best first. Stable for equal values.
pub(crate) fn finishing_order(
    values: &[i32],
    order: impl Fn(&i32, &i32) -> Ordering,
) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| order(&values[a], &values[b]));
    idx
}

fn rank_ordered(values: &[i32], order: impl Fn(&i32, &i32) -> Ordering) -> Vec<Position> {
    let idx = finishing_order(values, order);
    let mut positions = vec![Position { rank: 0, tied: false }; values.len()];

    // rank is the count of strictly better entries plus one
    let mut better = 0;
    for block in idx.chunk_by(|&a, &b| values[a] == values[b]) {
        let tied = block.len() > 1;
        for &i in block {
            positions[i] = Position {
                rank: better + 1,
                tied,
            };
        }
        better += block.len();
    }
    positions
}
