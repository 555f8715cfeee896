use pathviz_core::Pos;

/// Octile distance between two positions:
/// `(√2 − 1) · min(dr, dc) + max(dr, dc)`.
///
/// Never exceeds the Manhattan distance, so it stays admissible for
/// four-way unit-cost moves.
#[inline]
pub fn octile(a: Pos, b: Pos) -> f64 {
    let dr = f64::from((a.row - b.row).abs());
    let dc = f64::from((a.col - b.col).abs());
    (std::f64::consts::SQRT_2 - 1.0) * dr.min(dc) + dr.max(dc)
}

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
