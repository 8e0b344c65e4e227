//! Projection of a count series onto a small inline chart.
//!
//! The polyline form feeds SVG `points` attributes; the block form is for
//! terminals.

pub const DEFAULT_WIDTH: f64 = 90.0;
pub const DEFAULT_HEIGHT: f64 = 24.0;

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Largest value in the series, never below 1.
fn scale(values: &[f64]) -> f64 {
    values.iter().copied().fold(1.0, f64::max)
}

/// Maps `values` into a `width` x `height` box with y growing downwards.
///
/// The series maximum touches the top edge and zero sits on the bottom edge.
/// Points are spread evenly from x = 0 to x = `width`; a lone point is
/// placed at x = `width`.
pub fn project(values: &[f64], width: f64, height: f64) -> Vec<Point> {
    if values.is_empty() {
        return Vec::new();
    }

    let max = scale(values);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Point {
            x: if values.len() > 1 { i as f64 * step } else { width },
            y: height - (v / max) * height,
        })
        .collect()
}

/// `"x,y x,y ..."`, ready for a `<polyline points=...>` attribute.
pub fn polyline(values: &[f64], width: f64, height: f64) -> String {
    project(values, width, height)
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blocks(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = scale(values);
    values
        .iter()
        .map(|&v| {
            let level = ((v.max(0.0) / max) * (BLOCKS.len() - 1) as f64).round() as usize;
            BLOCKS[level.min(BLOCKS.len() - 1)]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_projects_to_nothing() {
        assert!(project(&[], DEFAULT_WIDTH, DEFAULT_HEIGHT).is_empty());
        assert_eq!(polyline(&[], DEFAULT_WIDTH, DEFAULT_HEIGHT), "");
        assert_eq!(blocks(&[]), "");
    }

    #[test]
    fn single_point_sits_on_right_edge() {
        assert_eq!(polyline(&[5.0], 90.0, 24.0), "90,0");
        assert_eq!(polyline(&[5.0], 90.0, 60.0), "90,0");
        assert_eq!(polyline(&[0.0], 40.0, 10.0), "40,10");
    }

    #[test]
    fn all_zero_series_lies_on_bottom_edge() {
        let points = project(&[0.0, 0.0, 0.0], 90.0, 24.0);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.y == 24.0));
        assert_eq!(polyline(&[0.0, 0.0, 0.0], 90.0, 24.0), "0,24 45,24 90,24");
    }

    #[test]
    fn scales_by_series_maximum() {
        let points = project(&[1.0, 2.0, 4.0], 90.0, 24.0);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![0.0, 45.0, 90.0]);
        assert_eq!(ys, vec![18.0, 12.0, 0.0]);
        assert_eq!(polyline(&[1.0, 2.0, 4.0], 90.0, 24.0), "0,18 45,12 90,0");
    }

    #[test]
    fn fractional_coordinates_keep_their_fraction() {
        assert_eq!(polyline(&[2.0, 1.0, 2.0, 0.0, 2.0], 90.0, 24.0), "0,0 22.5,12 45,0 67.5,24 90,0");
    }

    #[test]
    fn values_below_one_use_floor_of_one() {
        assert_eq!(polyline(&[0.5, 0.0], 10.0, 10.0), "0,5 10,10");
    }

    #[test]
    fn blocks_follow_the_same_scale() {
        assert_eq!(blocks(&[0.0, 7.0, 14.0]), "▁▅█");
        assert_eq!(blocks(&[0.0, 0.0]), "▁▁");
    }
}
