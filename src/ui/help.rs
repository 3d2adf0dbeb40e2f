use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::helpers::format_interval;
use super::theme::Theme;
use crate::app::App;

pub fn build_help_text(app: &App) -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Global"));
    lines.extend(section_lines(&["q: Quit", "?: Toggle help", "esc: Close help / Quit"]));

    lines.push(Line::from(""));
    lines.push(section_title("Flicker"));
    lines.extend(section_lines(&["space: Pick a new color now", "s: Stop flickering"]));

    lines.push(Line::from(""));
    lines.push(section_title("Session"));
    let mode = match app.flicker.interval() {
        Some(interval) => format!("New color every {}", format_interval(interval)),
        None => "Steady color".to_string(),
    };
    let palette = format!("{} colors in palette", app.flicker.palette().len());
    lines.extend(section_lines(&[mode.as_str(), palette.as_str()]));

    Text::from(lines)
}

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Theme::secondary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(items: &[&str]) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|item| {
            Line::from(Span::styled(
                format!("  - {item}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
