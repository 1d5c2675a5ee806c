use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::RenderState;
use crate::ui::keymap::HELP_LINES;
use crate::ui::theme::colors;

const ELLIPSIS: char = '…';

const KEYPAD_ROWS: &[&str] = &[
    "  c    ⌫    %    /  ",
    "  7    8    9    x  ",
    "  4    5    6    -  ",
    "  1    2    3    +  ",
    "  n    0    .    =  ",
];

/// Keep the tail of `text` that fits in `width` columns, marking a cut with `…`.
pub fn fit_tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut used = 1; // ellipsis
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    std::iter::once(ELLIPSIS).chain(kept.into_iter().rev()).collect()
}

/// Keep the head of `text` that fits in `width` columns, marking a cut with `…`.
pub fn fit_head(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut kept = String::new();
    let mut used = 1; // ellipsis
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(c);
    }
    kept.push(ELLIPSIS);
    kept
}

pub fn render_trace_line(trace: &str, width: u16) -> Paragraph<'static> {
    Paragraph::new(fit_tail(trace, width as usize))
        .alignment(Alignment::Right)
        .style(Style::default().fg(colors::dimmed()).bg(colors::surface()))
}

pub fn render_result_line(result: &str, width: u16) -> Paragraph<'static> {
    Paragraph::new(fit_head(result, width as usize))
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(colors::accent())
                .bg(colors::surface())
                .add_modifier(Modifier::BOLD),
        )
}

pub fn render_keypad() -> Paragraph<'static> {
    let lines: Vec<Line> = KEYPAD_ROWS
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(colors::text()))))
        .collect();
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(colors::background()))
}

pub fn render_help() -> Paragraph<'static> {
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", keys),
                    Style::default()
                        .fg(colors::accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(colors::text())),
            ])
        })
        .collect();
    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" keys ")
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_status_line(state: &RenderState) -> Line<'static> {
    let message = state
        .status
        .clone()
        .unwrap_or_else(|| "? for help".to_string());
    Line::from(vec![
        Span::styled(
            state.mode.label(),
            Style::default().fg(colors::background()).bg(colors::accent()),
        ),
        Span::styled(
            format!(" {} ", state.engine_state.label()),
            Style::default().fg(colors::text()).bg(colors::surface()),
        ),
        Span::styled(format!(" {}", message), Style::default().fg(colors::dimmed())),
    ])
}

/// Draw the whole calculator into `frame`.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_display(frame, chunks[0], state);

    if state.show_help() {
        frame.render_widget(render_help(), chunks[1]);
    } else {
        frame.render_widget(render_keypad(), chunks[1]);
    }

    frame.render_widget(render_status_line(state), chunks[2]);
}

fn draw_display(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" abacus ")
        .border_style(Style::default().fg(colors::dimmed()))
        .style(Style::default().bg(colors::surface()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(render_trace_line(&state.trace, rows[0].width), rows[0]);
    frame.render_widget(render_result_line(&state.result, rows[1].width), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mode::AppMode;
    use crate::engine::EngineState;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(state: &RenderState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn evaluated_state() -> RenderState {
        RenderState {
            mode: AppMode::Calculating,
            trace: "12 + 3".to_string(),
            result: "15".to_string(),
            engine_state: EngineState::AfterEquals,
            status: None,
        }
    }

    #[test]
    fn test_fit_tail_short_text_unchanged() {
        assert_eq!(fit_tail("12 + 3", 10), "12 + 3");
        assert_eq!(fit_tail("", 0), "");
    }

    #[test]
    fn test_fit_tail_keeps_end() {
        assert_eq!(fit_tail("123456789", 5), "…6789");
        assert_eq!(fit_tail("123", 0), "");
    }

    #[test]
    fn test_fit_head_keeps_start() {
        assert_eq!(fit_head("15", 10), "15");
        assert_eq!(fit_head("1,234,567,890", 6), "1,234…");
        assert_eq!(fit_head("123", 0), "");
    }

    #[test]
    fn test_draw_shows_trace_and_result() {
        let rows = screen(&evaluated_state());
        assert!(rows[1].trim_end().ends_with("12 + 3│"), "row: {:?}", rows[1]);
        assert!(rows[2].trim_end().ends_with("15│"), "row: {:?}", rows[2]);
    }

    #[test]
    fn test_draw_status_line() {
        let rows = screen(&evaluated_state());
        let last = rows.last().unwrap();
        assert!(last.contains("CALC"));
        assert!(last.contains("RESULT"));
        assert!(last.contains("? for help"));
    }

    #[test]
    fn test_draw_status_message() {
        let mut state = evaluated_state();
        state.status = Some("Copied 15".to_string());
        let rows = screen(&state);
        assert!(rows.last().unwrap().contains("Copied 15"));
    }

    #[test]
    fn test_draw_keypad_and_help() {
        let rows = screen(&evaluated_state());
        assert!(rows.iter().any(|row| row.contains("7    8    9    x")));

        let mut state = evaluated_state();
        state.mode = AppMode::Help;
        let rows = screen(&state);
        assert!(rows.iter().any(|row| row.contains("copy result")));
    }

    #[test]
    fn test_draw_truncates_long_trace() {
        let mut state = evaluated_state();
        state.trace = "1 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9 + 10 + 11".to_string();
        let rows = screen(&state);
        assert!(rows[1].contains('…'));
        assert!(rows[1].contains("10 + 11"));
    }

    #[test]
    fn test_draw_truncates_long_result_keeping_leading_digits() {
        let mut state = evaluated_state();
        state.result = "123,456,789,012,345,678,901,234,567,890,123".to_string();
        let rows = screen(&state);
        assert!(rows[2].contains("│123,456,789"), "row: {:?}", rows[2]);
        assert!(rows[2].contains('…'));
    }
}
