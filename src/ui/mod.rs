mod help;
mod helpers;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use theme::Theme;

use helpers::{contrast_color, format_interval, hex_to_color};

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  ColorFlicker  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            palette_label(app),
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(header, layout[0]);

    render_color_panel(frame, app, layout[1]);

    let footer = Paragraph::new(Text::from(vec![status_line(app), keybinds_line()]))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary())),
        );
    frame.render_widget(footer, layout[2]);

    if app.show_help {
        render_help_popup(frame, app);
    }
}

fn palette_label(app: &App) -> String {
    let palette = app.flicker.palette();
    match palette.len() {
        _ if palette.is_cyberpunk() => "cyberpunk palette".to_string(),
        1 => "1 color".to_string(),
        n => format!("{n} colors"),
    }
}

fn render_color_panel(frame: &mut Frame, app: &App, area: Rect) {
    let color = app.flicker.current_color();
    let background = hex_to_color(color).unwrap_or(Color::Reset);
    let foreground = contrast_color(background);

    let padding = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::from(""); usize::from(padding)];
    lines.push(Line::from(Span::styled(
        color.to_uppercase(),
        Style::default().fg(foreground).add_modifier(Modifier::BOLD),
    )));

    let panel = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .style(Style::default().bg(background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(foreground).bg(background)),
        );
    frame.render_widget(panel, area);
}

fn status_line(app: &App) -> Line<'static> {
    let color = app.flicker.current_color().to_string();
    let swatch = hex_to_color(&color).unwrap_or(Theme::text());

    let mode = match app.flicker.interval() {
        Some(interval) => Span::styled(
            format!("flickering every {}", format_interval(interval)),
            Style::default().fg(Theme::active()),
        ),
        None => Span::styled("steady", Style::default().fg(Theme::steady())),
    };

    let mut spans = vec![
        Span::styled("● ", Style::default().fg(swatch)),
        Span::styled(
            color,
            Style::default()
                .fg(Theme::text())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        mode,
        Span::raw("  "),
        Span::styled("picks: ", Style::default().fg(Theme::dim())),
        Span::styled(
            app.flicker.pick_count().to_string(),
            Style::default().fg(Theme::accent()),
        ),
    ];
    if let Some(changed) = app.last_change {
        spans.push(Span::styled(
            format!("  changed {}", changed.format("%H:%M:%S")),
            Style::default().fg(Theme::dim()),
        ));
    }
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(Theme::secondary()),
        ));
    }
    Line::from(spans)
}

fn keybinds_line() -> Line<'static> {
    Line::from(Span::styled(
        "space: New color  s: Stop  ?: Help  q: Quit",
        Style::default().fg(Theme::dim()),
    ))
}

fn render_help_popup(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(help::build_help_text(app))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Help "),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(popup_layout[1])[1]
}
