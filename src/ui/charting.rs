use breathetrack::sparkline::{layout_in, SparkCanvas};
use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line, Points},
        Paragraph, Widget,
    },
};

pub const EMPTY_HISTORY_MESSAGE: &str = "No test results yet.";

/// Sparkline points in canvas-widget space, where y grows upwards
pub fn canvas_coords(canvas: &SparkCanvas, history: &[u32]) -> Vec<(f64, f64)> {
    layout_in(canvas, history)
        .into_iter()
        .map(|p| (p.x, canvas.height - p.y))
        .collect()
}

/// Draw the result trend as a line-and-dot sparkline
pub fn render_sparkline(
    history: &[u32],
    line_color: Color,
    dot_color: Color,
    area: Rect,
    buf: &mut Buffer,
) {
    if history.is_empty() {
        Paragraph::new(EMPTY_HISTORY_MESSAGE)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .render(area, buf);
        return;
    }

    let spark = SparkCanvas::default();
    let coords = canvas_coords(&spark, history);

    Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, spark.width])
        .y_bounds([0.0, spark.height])
        .paint(|ctx| {
            for (&(x1, y1), &(x2, y2)) in coords.iter().tuple_windows() {
                ctx.draw(&Line::new(x1, y1, x2, y2, line_color));
            }
            ctx.layer();
            ctx.draw(&Points {
                coords: &coords,
                color: dot_color,
            });
        })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_coords_flip_y() {
        let spark = SparkCanvas::default();
        let coords = canvas_coords(&spark, &[0, 30]);
        // zero sits on the bottom margin, the ceiling on the top one
        assert_eq!(coords, vec![(9.0, 12.0), (211.0, 38.0)]);
    }

    #[test]
    fn test_canvas_coords_empty() {
        assert!(canvas_coords(&SparkCanvas::default(), &[]).is_empty());
    }

    #[test]
    fn test_render_placeholder_when_empty() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        render_sparkline(&[], Color::Blue, Color::Green, area, &mut buf);
        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains(EMPTY_HISTORY_MESSAGE));
    }

    #[test]
    fn test_render_draws_points() {
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        render_sparkline(&[5, 20, 40], Color::Blue, Color::Green, area, &mut buf);
        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(!content.trim().is_empty());
        assert!(!content.contains(EMPTY_HISTORY_MESSAGE));
    }
}
