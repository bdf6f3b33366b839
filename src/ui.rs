pub mod charting;
pub mod screen;

use breathetrack::util::format_time;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

const COLOR_PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xD2);
const COLOR_ACCENT: Color = Color::Rgb(0x43, 0xA0, 0x47);

const HELP_TITLE: &str = "What is a BOLT Test?";
const HELP_INTRO: &str = "The Body Oxygen Level Test (BOLT) assesses respiratory health by timing your natural breath-hold after a normal exhale. Better scores reflect improved functional breathing.";
const HELP_STEPS: [&str; 4] = [
    "Take a normal, relaxed breath in and out.",
    "Hold your nose after exhaling.",
    "Start timer, release hold when you feel the first natural need to breathe.",
    "Your score (in seconds) is your BOLT result.",
];

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = self.controller.view();

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let primary_bold_style = bold_style.fg(COLOR_PRIMARY);
        let accent_bold_style = bold_style.fg(COLOR_ACCENT);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(1), // padding
                Constraint::Length(2), // instructions
                Constraint::Length(1), // timer
                Constraint::Length(1), // hint
                Constraint::Length(3), // start/stop control
                Constraint::Length(1), // started at
                Constraint::Length(1), // padding
                Constraint::Length(1), // latest result
                Constraint::Length(1), // history summary
                Constraint::Length(1), // padding
                Constraint::Length(1), // chart title
                Constraint::Min(2),    // sparkline
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Line::from(vec![
            Span::styled("BreatheTrack", primary_bold_style),
            Span::styled(format!("   {}", self.controller.phase()), dim_style),
        ]))
        .render(chunks[0], buf);

        Paragraph::new(vec![
            Line::from("Prepare for the BOLT test:"),
            Line::styled(
                "Breathe out normally, press Start Test and hold your breath.",
                dim_style,
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[2], buf);

        let shown_secs = if view.active { view.elapsed_seconds } else { 0 };
        Paragraph::new(Span::styled(format_time(shown_secs), primary_bold_style))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        let hint = match (view.active, view.capped) {
            (true, true) => "Maximum reached. Press space to stop.",
            (true, false) => "Release when you feel the first urge to breathe.",
            (false, _) => "Your timer will begin counting up (in seconds).",
        };
        Paragraph::new(Span::styled(hint, dim_style))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);

        let (label, control_color) = if view.active {
            ("Stop Test", COLOR_ACCENT)
        } else {
            ("Start Test", COLOR_PRIMARY)
        };
        Paragraph::new(Span::styled(label, bold_style.fg(Color::White)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(control_color)),
            )
            .style(Style::default().bg(control_color))
            .render(chunks[5], buf);

        if let Some(started_at) = view.started_at {
            Paragraph::new(Span::styled(
                format!("started {}", started_at.format("%H:%M:%S")),
                italic_style,
            ))
            .alignment(Alignment::Center)
            .render(chunks[6], buf);
        }

        let latest = view
            .history
            .latest()
            .map(|secs| format!("{secs} s"))
            .unwrap_or_else(|| "--".to_string());
        Paragraph::new(Line::from(vec![
            Span::styled("Latest BOLT Result: ", dim_style),
            Span::styled(latest, accent_bold_style),
        ]))
        .alignment(Alignment::Center)
        .render(chunks[8], buf);

        if let Some(summary) = view.history.summary() {
            Paragraph::new(Span::styled(
                summary,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center)
            .render(chunks[9], buf);
        }

        Paragraph::new(Span::styled("Progress Over Time", dim_style)).render(chunks[11], buf);

        charting::render_sparkline(
            view.history.as_slice(),
            COLOR_PRIMARY,
            COLOR_ACCENT,
            chunks[12],
            buf,
        );

        Paragraph::new(Span::styled(
            "(space) start/stop / (?) help / (q)uit",
            italic_style,
        ))
        .render(chunks[13], buf);
    }
}

/// Draw the BOLT explanation as a centered overlay
pub fn render_help(f: &mut Frame) {
    let area = centered_rect(f.area(), 70, 14);

    let mut lines = vec![Line::from(HELP_INTRO), Line::from("")];
    lines.extend(HELP_STEPS.iter().map(|step| Line::from(format!("• {step}"))));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "(esc) close",
        Style::default().add_modifier(Modifier::ITALIC),
    ));

    let help = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_PRIMARY))
                .title(Span::styled(
                    HELP_TITLE,
                    Style::default()
                        .fg(COLOR_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
        );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}

/// Rect of `percent_x` of the width and `height` rows, centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(Rect::new(0, 0, 100, 40), 70, 14);
        assert_eq!(rect.width, 70);
        assert_eq!(rect.height, 14);
        assert_eq!(rect.x, 15);
        assert_eq!(rect.y, 13);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let rect = centered_rect(Rect::new(0, 0, 20, 5), 70, 14);
        assert!(rect.height <= 5);
        assert!(rect.width <= 20);
    }
}
