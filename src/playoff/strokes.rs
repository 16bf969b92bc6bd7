use super::PlayoffConfig;

/// Starting strokes for a rank-sorted bracket, highest points first.
///
/// The leader starts at `-max_strokes` and the floor card at even par, with
/// everyone in between interpolated linearly on points. `floor_index` caps
/// which card sets the floor; without it the last card does. Cards tied on
/// points share the mean of the strokes they span.
#[must_use]
pub fn allocate_strokes(points: &[i32], floor_index: Option<usize>, max_strokes: f64) -> Vec<f64> {
    let Some(last) = points.len().checked_sub(1) else {
        return vec![];
    };
    let top = f64::from(points[0]);
    let floor = f64::from(points[floor_index.map_or(last, |f| f.min(last))]);
    let spread = top - floor;
    if last == 0 || spread == 0.0 {
        return vec![0.0; points.len()];
    }

    let raw: Vec<f64> = points
        .iter()
        .map(|&p| -max_strokes * (f64::from(p) - floor) / spread)
        .collect();

    let mut strokes = Vec::with_capacity(points.len());
    let mut start = 0;
    for block in points.chunk_by(|a, b| a == b) {
        let span = &raw[start..start + block.len()];
        let mean = span.iter().sum::<f64>() / span.len() as f64;
        strokes.extend(std::iter::repeat_n(round_tenth(mean), block.len()));
        start += block.len();
    }
    strokes
}

/// Gold floors on the bracket's own last member.
#[must_use]
pub fn gold_strokes(points: &[i32], config: &PlayoffConfig) -> Vec<f64> {
    allocate_strokes(points, None, config.max_strokes)
}

/// Silver floors on `silver_floor_index` once the bracket runs past it.
#[must_use]
pub fn silver_strokes(points: &[i32], config: &PlayoffConfig) -> Vec<f64> {
    allocate_strokes(points, Some(config.silver_floor_index), config.max_strokes)
}

fn round_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // no "-0.0" in reports
    if rounded == 0.0 { 0.0 } else { rounded }
}
