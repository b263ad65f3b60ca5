use crate::application::{App, Focus, Overlay, SubmissionPhase};
use crate::domain::content::{BENEFITS, PERKS, SKILLS};
use crate::domain::Field;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

const FIELD_HEIGHT: u16 = 3;
const INTERESTS_HEIGHT: u16 = 5;
const BUTTON_HEIGHT: u16 = 3;
const DISCLAIMER_HEIGHT: u16 = 3;

/// Total height of the form column, used to clamp manual scrolling.
pub const FORM_ROWS: u16 =
    4 * FIELD_HEIGHT + INTERESTS_HEIGHT + BUTTON_HEIGHT + DISCLAIMER_HEIGHT;

pub fn render_ui(f: &mut Frame, app: &App) {
    if app.phase == SubmissionPhase::Submitted {
        render_confirmation(f, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_form(f, app, chunks[1]);
    render_status_bar(f, app, chunks[2]);

    match app.overlay {
        Some(Overlay::Help) => render_popup(f, "Key Reference", &help_lines(), app.overlay_scroll),
        Some(Overlay::Skills) => render_popup(
            f,
            "Skills You Will Master",
            &skills_lines(),
            app.overlay_scroll,
        ),
        Some(Overlay::Perks) => render_popup(
            f,
            "Program Perks & Benefits",
            &perks_lines(),
            app.overlay_scroll,
        ),
        None => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "GramTech Labs · Skill Development Program",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Learn Skills. Work on Projects. Earn Stipend.",
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            "Now Hiring: 5 Positions Available · Part-Time · Remote - Lucknow",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Join our technical skill development program in Lucknow (Rural). Freshers & beginners encouraged!",
            Style::default().fg(Color::Gray),
        )),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, area);
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

enum FormRow {
    Input(Field),
    Button,
    Disclaimer,
}

fn form_rows() -> Vec<(FormRow, u16)> {
    let mut rows = Vec::new();
    for field in Field::ALL {
        let height = if field == Field::Interests {
            INTERESTS_HEIGHT
        } else {
            FIELD_HEIGHT
        };
        rows.push((FormRow::Input(field), height));
    }
    rows.push((FormRow::Button, BUTTON_HEIGHT));
    rows.push((FormRow::Disclaimer, DISCLAIMER_HEIGHT));
    rows
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let column = centered_column(area, 72);

    // Manual viewport: rows are laid out on a virtual column and only the
    // fully visible ones are drawn, offset by the scroll position.
    let mut y = column.y as i32 - app.scroll as i32;
    for (row, height) in form_rows() {
        let top = y;
        y += height as i32;

        if top < column.y as i32 || y > (column.y + column.height) as i32 {
            continue;
        }

        let rect = Rect::new(column.x, top as u16, column.width, height);
        match row {
            FormRow::Input(field) => render_input(f, app, field, rect),
            FormRow::Button => render_submit_button(f, app, rect),
            FormRow::Disclaimer => render_disclaimer(f, rect),
        }
    }
}

fn render_input(f: &mut Frame, app: &App, field: Field, area: Rect) {
    let focused = app.focus == Focus::Field(field);
    let value = app.form.field(field);

    let title = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = if value.is_empty() {
        Paragraph::new(field.placeholder()).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value).style(Style::default().fg(Color::White))
    };

    f.render_widget(
        text.block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .wrap(Wrap { trim: false }),
        area,
    );

    if focused && app.phase == SubmissionPhase::Editing && area.width > 2 && area.height > 2 {
        let before_cursor = &value[..app.cursor_position.min(value.len())];
        let row = before_cursor.matches('\n').count() as u16;
        let col = before_cursor
            .rsplit('\n')
            .next()
            .map(|line| line.chars().count())
            .unwrap_or(0) as u16;

        let x = area.x + 1 + col;
        let cursor_y = area.y + 1 + row;
        if x < area.x + area.width - 1 && cursor_y < area.y + area.height - 1 {
            f.set_cursor_position((x, cursor_y));
        }
    }
}

fn render_submit_button(f: &mut Frame, app: &App, area: Rect) {
    let (label, style) = match app.phase {
        SubmissionPhase::Submitting => (
            format!(
                "{} Processing Application...",
                SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()]
            ),
            Style::default().fg(Color::DarkGray),
        ),
        _ if !app.can_submit() => (
            "Submit Application".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        _ if app.focus == Focus::Submit => (
            "Submit Application →".to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        _ => (
            "Submit Application".to_string(),
            Style::default().fg(Color::LightBlue),
        ),
    };

    let border_style = if app.focus == Focus::Submit {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    f.render_widget(button, area);
}

fn render_disclaimer(f: &mut Frame, area: Rect) {
    let note = Paragraph::new(
        "By applying, you agree to join the skill development program. \
         Selected students will receive an official stipend and certificate.",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });
    f.render_widget(note, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.phase {
        SubmissionPhase::Submitting => format!(
            "{} Processing Application... hang tight",
            SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()]
        ),
        _ => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "Tab/↓: next field | Enter: next / submit | F1: help | F2: skills | F3: perks | Ctrl+Q: quit"
                    .to_string()
            }
        }
    };

    let style = match app.phase {
        SubmissionPhase::Submitting => Style::default().fg(Color::Yellow),
        _ if app.status_message.is_some() => Style::default().fg(Color::Red),
        _ => Style::default(),
    };

    let bar = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(bar, area);
}

fn render_confirmation(f: &mut Frame, app: &App) {
    let area = f.area();
    let width = area.width.min(64);
    let height = area.height.min(16);
    let card = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, card);

    let message = app.feedback.as_deref().unwrap_or_default();

    let mut lines = vec![
        Line::from(Span::styled(
            "✔ Application Received!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Thank you, {}. We've received your application for the GramTech Labs Skill Development Program.",
            app.form.name
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Personal Note from GramTech",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    lines.push(Line::from(Span::styled(
        format!("\"{}\"", message),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to close",
        Style::default().fg(Color::DarkGray),
    )));

    let confirmation = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    f.render_widget(confirmation, card);
}

fn render_popup(f: &mut Frame, title: &str, lines: &[Line], scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let visible_height = popup_area.height.saturating_sub(2) as usize;
    let start = scroll.min(lines.len().saturating_sub(visible_height));
    let end = (start + visible_height).min(lines.len());

    let popup = Paragraph::new(lines[start..end].to_vec())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} (↑↓ scroll, Esc close)", title))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(popup, popup_area);
}

fn skills_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for skill in SKILLS {
        lines.push(Line::from(Span::styled(
            format!("• {}", skill.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", skill.description)));
        lines.push(Line::from(""));
    }
    lines
}

fn perks_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for benefit in BENEFITS {
        lines.push(Line::from(Span::styled(
            format!("• {}", benefit.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", benefit.description)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "WHAT WE PROVIDE",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for perk in PERKS {
        lines.push(Line::from(format!("  ✓ {}", perk.label)));
    }
    lines
}

fn help_lines() -> Vec<Line<'static>> {
    [
        "Tab / Down       Next field",
        "Shift+Tab / Up   Previous field",
        "Enter            Next field; submit from the button",
        "                 (inserts a newline in the interest box)",
        "PgUp / PgDn      Scroll the form",
        "F1               This reference",
        "F2               Skills You Will Master",
        "F3               Program Perks & Benefits",
        "Ctrl+Q / Ctrl+C  Quit",
        "",
        "Fields marked * are required. Your details are used once to",
        "prepare a personal note and are never stored.",
    ]
    .into_iter()
    .map(Line::from)
    .collect()
}
