//! Sparkline layout for the result history.
//!
//! Maps results onto a small logical canvas. The horizontal position comes
//! from the result's rank, the vertical one from its value relative to the
//! whole history. Coordinates use a top-left origin, so larger results get a
//! smaller `y`.

/// Values the vertical range always covers, whatever the history holds
pub const RANGE_FLOOR: u32 = 0;
pub const RANGE_CEILING: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkCanvas {
    pub width: f64,
    pub height: f64,
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for SparkCanvas {
    fn default() -> Self {
        Self {
            width: 220.0,
            height: 44.0,
            margin_x: 9.0,
            margin_top: 6.0,
            margin_bottom: 12.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparklinePoint {
    pub x: f64,
    pub y: f64,
}

pub fn layout(history: &[u32]) -> Vec<SparklinePoint> {
    layout_in(&SparkCanvas::default(), history)
}

pub fn layout_in(canvas: &SparkCanvas, history: &[u32]) -> Vec<SparklinePoint> {
    let Some(&hist_max) = history.iter().max() else {
        return Vec::new();
    };
    let hist_min = history.iter().copied().min().unwrap_or(RANGE_FLOOR);

    let lo = f64::from(hist_min.min(RANGE_FLOOR));
    let hi = f64::from(hist_max.max(RANGE_CEILING));
    let value_span = match hi - lo {
        d if d > 0.0 => d,
        _ => 1.0,
    };
    let rank_span = history.len().saturating_sub(1).max(1) as f64;

    let plot_width = canvas.width - 2.0 * canvas.margin_x;
    let plot_height = canvas.height - canvas.margin_top - canvas.margin_bottom;
    let baseline = canvas.height - canvas.margin_bottom;

    history
        .iter()
        .enumerate()
        .map(|(idx, &value)| SparklinePoint {
            x: idx as f64 / rank_span * plot_width + canvas.margin_x,
            y: baseline - (f64::from(value) - lo) / value_span * plot_height,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_points() {
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn single_entry_is_finite() {
        let points = layout(&[15]);
        assert_eq!(points.len(), 1);
        let p = points[0];
        assert!(p.x.is_finite() && p.y.is_finite());
        assert_eq!(p.x, 9.0);
        // 15 is halfway through the 0..30 range
        assert_eq!(p.y, 32.0 - 13.0);
    }

    #[test]
    fn three_points_span_the_canvas() {
        let points = layout(&[10, 20, 30]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].x, 9.0);
        assert_eq!(points[2].x, 211.0);
        assert!(points[0].x < points[1].x && points[1].x < points[2].x);
        assert!(points[0].y > points[1].y && points[1].y > points[2].y);
        // 30 is the implicit ceiling, so it sits on the top margin
        assert_eq!(points[2].y, 6.0);
    }

    #[test]
    fn range_grows_past_ceiling() {
        let points = layout(&[5, 40]);
        assert_eq!(points[1].y, 6.0);
        assert_eq!(points[0].y, 32.0 - 5.0 / 40.0 * 26.0);
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn zero_results_sit_on_baseline() {
        let points = layout(&[0, 0]);
        assert!(points.iter().all(|p| p.y == 32.0));
    }

    #[test]
    fn equal_values_share_a_height() {
        let points = layout(&[30, 30, 30]);
        assert!(points.iter().all(|p| p.y.is_finite() && p.y == 6.0));
    }

    #[test]
    fn custom_canvas() {
        let canvas = SparkCanvas {
            width: 100.0,
            height: 20.0,
            margin_x: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
        };
        let points = layout_in(&canvas, &[0, 30]);
        assert_eq!(points[0], SparklinePoint { x: 0.0, y: 20.0 });
        assert_eq!(points[1], SparklinePoint { x: 100.0, y: 0.0 });
    }
}
