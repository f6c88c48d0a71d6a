//! Frame rendering for the editor form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{AppView, Focus, InputState};
use crate::controller::Notice;

pub fn draw_app(frame: &mut Frame, view: &AppView) {
    let banner_height = match view.notice {
        Some(Notice::Diagnostic(report)) => {
            let raw_lines = report
                .raw
                .as_deref()
                .map(|raw| raw.lines().count().min(8) as u16)
                .unwrap_or(0);
            4 + raw_lines
        }
        _ => 1,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(banner_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        " slackedit - edit a Slack bot message by permalink",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    draw_input(
        frame,
        rows[1],
        "Message URL",
        view.url_input,
        view.focus == Focus::Url,
    );

    draw_message_panes(frame, rows[2], view);
    draw_banner(frame, rows[3], view.notice);

    let hints = if view.state.loaded_text().is_some() {
        " Ctrl-s update • Tab focus • Esc new URL • Ctrl-c quit"
    } else {
        " Enter fetch • Esc clear • Ctrl-c quit"
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        rows[4],
    );
}

fn draw_message_panes(frame: &mut Frame, area: Rect, view: &AppView) {
    let Some(current_text) = view.state.loaded_text() else {
        let placeholder = Paragraph::new(
            "Paste a Slack message permalink above and press Enter to load the message.",
        )
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Message"));
        frame.render_widget(placeholder, area);
        return;
    };

    let panes = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let current = Paragraph::new(current_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Current message"));
    frame.render_widget(current, panes[0]);

    draw_input(
        frame,
        panes[1],
        "New message",
        view.editor_input,
        view.focus == Focus::Editor,
    );
}

fn draw_input(frame: &mut Frame, area: Rect, title: &str, input: &InputState, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(styled_input(input, focused))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title.to_string()),
        );
    frame.render_widget(widget, area);
}

/// Render the buffer with the cursor cell reversed when the field has focus.
fn styled_input<'a>(input: &'a InputState, focused: bool) -> Text<'a> {
    if !focused {
        return Text::raw(input.text());
    }

    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    let cursor = input.cursor();
    let mut lines: Vec<Line<'a>> = Vec::new();
    let mut offset = 0usize;

    for raw_line in input.text().split('\n') {
        let line_start = offset;
        let line_end = offset + raw_line.len();

        if cursor >= line_start && cursor <= line_end {
            let local = cursor - line_start;
            let mut spans = vec![Span::raw(&raw_line[..local])];
            match raw_line[local..].chars().next() {
                Some(ch) => {
                    let ch_end = local + ch.len_utf8();
                    spans.push(Span::styled(&raw_line[local..ch_end], cursor_style));
                    spans.push(Span::raw(&raw_line[ch_end..]));
                }
                None => spans.push(Span::styled(" ", cursor_style)),
            }
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(raw_line));
        }

        offset = line_end + 1;
    }

    Text::from(lines)
}

fn draw_banner(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let widget = match notice {
        None => Paragraph::new(" Ready.").style(Style::default().fg(Color::DarkGray)),
        Some(Notice::Info(message)) => {
            Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Green))
        }
        Some(Notice::Error(message)) => {
            Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Red))
        }
        Some(Notice::Diagnostic(report)) => {
            let mut lines = vec![
                Line::from(Span::styled(
                    format!(" Error: {}", report.code),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!(" Needed permission: {}", report.needed)),
                Line::from(format!(" Provided scopes: {}", report.provided)),
            ];
            if let Some(raw) = report.raw.as_deref() {
                lines.push(Line::from(" Raw response:"));
                for raw_line in raw.lines() {
                    lines.push(Line::from(format!("   {raw_line}")));
                }
            }
            Paragraph::new(Text::from(lines))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
        }
    };
    frame.render_widget(widget, area);
}
