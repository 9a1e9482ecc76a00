//! TUI rendering for Loka using ratatui.

mod input;
pub mod screens;
mod theme;

pub use input::{InputPump, handle_events, handle_key};
pub use theme::{Glyphs, Palette, gauge, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use loka_engine::{App, COMMUNITY_STATS, FounderProfile, LedgerEvent, View};

const GAUGE_WIDTH: usize = 30;
const LEDGER_ROWS: usize = 8;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0], &palette, &glyphs);
    draw_body(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

fn view_title(app: &App) -> &'static str {
    match app.view() {
        View::Unmapped(step) => app
            .store()
            .current_step_info()
            .filter(|def| def.id == step)
            .map_or(step.as_str(), |def| def.title),
        view => view.title(),
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let title = view_title(app);
    let tokens = format!("{} {} tokens", glyphs.token, app.store().balance());
    let gap = usize::from(area.width)
        .saturating_sub(title.width() + tokens.width() + 1)
        .max(1);
    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(title, styles::title(palette)),
        Span::raw(" ".repeat(gap)),
        Span::styled(tokens, styles::tokens(palette)),
    ]));
    frame.render_widget(header, area);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let info = info_lines(app, palette, glyphs);
    let info_height = u16::try_from(info.len() + 2).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(info_height), Constraint::Min(3)])
        .split(area);

    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));
    frame.render_widget(
        Paragraph::new(info)
            .block(info_block)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let options = screens::options(app);
    let selected = app.selection().clamped(options.len());
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("{} {}", glyphs.selected, option.label),
                    styles::option_selected(palette),
                ))
            } else {
                Line::from(Span::styled(
                    format!("{} {}", glyphs.unselected, option.label),
                    Style::default().fg(palette.text_secondary),
                ))
            }
        })
        .collect();
    let options_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .title(" Choose ")
        .padding(Padding::horizontal(1));
    frame.render_widget(Paragraph::new(lines).block(options_block), chunks[1]);
}

/// Founder and startup rows for the dashboard; nothing until a first answer.
fn profile_lines(
    profile: &FounderProfile,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    if profile.is_empty() {
        return Vec::new();
    }
    let muted = Style::default().fg(palette.text_muted);
    let text = Style::default().fg(palette.text_primary);
    let separator = format!(" {} ", glyphs.separator);

    let mut founder = vec![profile.founder_type()];
    if profile.stage.is_some() {
        founder.push(profile.stage());
    }
    let mut startup: Vec<&str> = Vec::new();
    if profile.domain.is_some() {
        startup.push(profile.domain());
    } else if let Some(idea) = profile.idea_status() {
        startup.push(idea);
    }
    startup.extend(profile.team_status());
    startup.extend(profile.funding_status());
    if startup.is_empty() {
        startup.push(profile.domain());
    }

    vec![
        Line::from(vec![
            Span::styled("Founder       ", muted),
            Span::styled(founder.join(separator.as_str()), text),
        ]),
        Line::from(vec![
            Span::styled("Startup       ", muted),
            Span::styled(startup.join(separator.as_str()), text),
        ]),
    ]
}

fn info_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let store = app.store();
    let muted = Style::default().fg(palette.text_muted);
    let text = Style::default().fg(palette.text_primary);
    match app.view() {
        View::Dashboard => {
            let summary = store.progress_summary();
            let step = summary
                .title
                .map_or_else(|| summary.current_step.to_string(), str::to_string);
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Current step  ", muted),
                    Span::styled(step, text),
                ]),
                Line::from(vec![
                    Span::styled("Progress      ", muted),
                    Span::styled(
                        gauge(summary.percentage, GAUGE_WIDTH, glyphs),
                        Style::default().fg(palette.success),
                    ),
                    Span::styled(format!(" {}%", summary.percentage), text),
                ]),
                Line::from(vec![
                    Span::styled("Completed     ", muted),
                    Span::styled(format!("{}/{}", summary.completed, summary.total), text),
                ]),
                Line::from(vec![
                    Span::styled("Tokens        ", muted),
                    Span::styled(
                        format!(
                            "{} available {} {} spent",
                            summary.tokens_available, glyphs.separator, summary.tokens_spent
                        ),
                        Style::default().fg(palette.token),
                    ),
                ]),
            ];
            lines.extend(profile_lines(&store.founder_profile(), palette, glyphs));
            lines
        }
        View::Leaderboard => {
            let stats = COMMUNITY_STATS;
            vec![
                stat_line("Total founders", stats.total_founders.to_string(), palette),
                stat_line("Validated ideas", stats.validated_ideas.to_string(), palette),
                stat_line("Funds raised", format!("{}M", stats.funds_raised), palette),
                stat_line(
                    "Founders with guidance",
                    stats.founders_with_guidance.to_string(),
                    palette,
                ),
            ]
        }
        View::ProgressTracking => ledger_lines(app, palette, glyphs),
        View::Unmapped(step) => match store.current_step_info() {
            Some(def) if def.id == step => vec![Line::styled(def.description, text)],
            _ => vec![Line::styled(step.to_string(), text)],
        },
        _ => {
            let mut lines = Vec::new();
            if let Some(def) = store.current_step_info() {
                lines.push(Line::styled(def.description, text));
            }
            for (field, message) in store.errors() {
                lines.push(Line::styled(
                    format!("{} {field}: {message}", glyphs.bullet),
                    Style::default().fg(palette.error),
                ));
            }
            if lines.is_empty() {
                lines.push(Line::styled(app.view().title(), text));
            }
            lines
        }
    }
}

fn stat_line(label: &str, value: String, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<24}"), Style::default().fg(palette.text_muted)),
        Span::styled(value, Style::default().fg(palette.accent)),
    ])
}

fn ledger_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let entries = app.store().ledger().entries();
    if entries.is_empty() {
        return vec![Line::styled(
            "No token activity yet",
            Style::default().fg(palette.text_muted),
        )];
    }
    entries
        .iter()
        .rev()
        .take(LEDGER_ROWS)
        .map(|entry| {
            let (mark, color) = match entry.event {
                LedgerEvent::Earned { .. } => (glyphs.earned, palette.success),
                LedgerEvent::Spent { .. } => (glyphs.spent, palette.error),
            };
            Line::from(vec![
                Span::styled(format!("{mark} {:>4} ", entry.amount), Style::default().fg(color)),
                Span::styled(
                    entry.label().to_string(),
                    Style::default().fg(palette.text_primary),
                ),
            ])
        })
        .collect()
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in [
        ("↑↓", "move"),
        ("Enter", "choose"),
        ("Esc", "back"),
        ("r", "reset"),
        ("q", "quit"),
    ] {
        let key = if app.ui_options().ascii_only && key == "↑↓" {
            "j/k"
        } else {
            key
        };
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {label}  "), styles::key_hint(palette)));
    }
    if let Some(message) = app.status_message() {
        spans.push(Span::styled(
            format!("{} ", glyphs.separator),
            styles::key_hint(palette),
        ));
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(palette.text_secondary),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
