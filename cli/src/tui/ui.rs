use habitchart_core::activity_to_bucket;
use habitchart_core::month::capitalize;
use habitchart_core::Report;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;

const CELL: &str = "■";
const DAYS_PER_LINE: usize = 7;
const MONTHS_PER_ROW: usize = 4;
const HELP: &str = "←/→ day  ↑/↓ month  [/] year  t theme  q quit";

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Calendar
            Constraint::Length(1), // Tooltip / help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    if let Some(error) = &app.error {
        let message = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Could not load {}", app.year()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(error.as_str()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(message, main_chunks[1]);
    } else if app.result.is_empty() {
        f.render_widget(
            Paragraph::new(format!("No data for {}", app.year())).alignment(Alignment::Center),
            main_chunks[1],
        );
    } else {
        draw_calendar(f, app, main_chunks[1]);
    }

    draw_footer(f, app, main_chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let accent = app.theme.accent();
    let muted = Style::default().fg(Color::DarkGray);

    let prev = if app.year_at(-1).is_some() { Style::default() } else { muted };
    let next = if app.year_at(1).is_some() { Style::default() } else { muted };

    let mut spans = vec![
        Span::styled("HABITS CHART", Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(" < ", prev),
        Span::styled(app.year().to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" > ", next),
    ];
    if app.error.is_none() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("{} habits done", app.result.meta.total_yes_count),
            Style::default().fg(accent),
        ));
    }
    spans.push(Span::styled(format!("   theme: {}", app.theme.name()), muted));
    let line = Line::from(spans);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let reports = &app.result.reports;
    let rows = reports.len().div_ceil(MONTHS_PER_ROW);

    let row_height = reports
        .iter()
        .map(|r| r.data.len().div_ceil(DAYS_PER_LINE).max(1) as u16 + 2)
        .max()
        .unwrap_or(3);

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(row_height); rows])
        .split(area);

    for (row, row_area) in row_chunks.iter().enumerate() {
        let col_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, MONTHS_PER_ROW as u32); MONTHS_PER_ROW])
            .split(*row_area);

        for (col, cell_area) in col_chunks.iter().enumerate() {
            let index = row * MONTHS_PER_ROW + col;
            if let Some(report) = reports.get(index) {
                draw_month(f, app, report, index, *cell_area);
            }
        }
    }
}

fn draw_month(f: &mut Frame, app: &App, report: &Report, index: usize, area: Rect) {
    let is_selected_month = index == app.month;

    let lines: Vec<Line> = report
        .data
        .chunks(DAYS_PER_LINE)
        .enumerate()
        .map(|(line_no, days)| {
            let spans: Vec<Span> = days
                .iter()
                .enumerate()
                .map(|(i, record)| {
                    let day_index = line_no * DAYS_PER_LINE + i;
                    let color = app.theme.color(activity_to_bucket(&record.activity));
                    let mut style = Style::default().fg(color);
                    if is_selected_month && day_index == app.day {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    Span::styled(format!("{} ", CELL), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let border = if is_selected_month {
        Style::default().fg(app.theme.accent())
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", capitalize(report.month())))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let tooltip = app.tooltip().unwrap_or_default();
    let width = area.width as usize;

    // Drop the key help first when the line does not fit.
    let mut spans = vec![Span::styled(
        tooltip.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if tooltip.width() + HELP.width() + 4 <= width {
        spans.push(Span::raw("    "));
        spans.push(Span::styled(HELP, Style::default().fg(Color::DarkGray)));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(footer, area);
}
