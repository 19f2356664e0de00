//! Draw the settings panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::Panel;
use super::constants::ACCENT;

pub(crate) fn draw(f: &mut Frame, panel: &mut Panel, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled("New file directory: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            panel.stored_display(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(header, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(format!(" {} ", panel.browse_dir.display()));

    let items: Vec<ListItem> = if let Some(ref err) = panel.read_error {
        vec![ListItem::new(format!(" {}", err)).style(Style::default().fg(Color::Red))]
    } else if panel.entries.is_empty() {
        vec![ListItem::new(" (no subdirectories)").style(Style::default().fg(Color::DarkGray))]
    } else {
        panel
            .entries
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if i == panel.selected_index {
                    Style::default().fg(Color::Black).bg(ACCENT)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" {}/", name)).style(style)
            })
            .collect()
    };
    if panel.read_error.is_none() && !panel.entries.is_empty() {
        panel.list_state.select(Some(panel.selected_index));
    } else {
        panel.list_state.select(None);
    }
    let list = List::new(items).block(block);
    f.render_stateful_widget(list, chunks[1], &mut panel.list_state);

    if let Some(ref status) = panel.status {
        let color = if status.starts_with("Saved") {
            ACCENT
        } else {
            Color::Red
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(color),
            ))),
            chunks[2],
        );
    }

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("↑↓ ", Style::default().fg(Color::DarkGray)),
        Span::raw("move  "),
        Span::styled("Enter ", Style::default().fg(Color::DarkGray)),
        Span::raw("open  "),
        Span::styled("Backspace ", Style::default().fg(Color::DarkGray)),
        Span::raw("up  "),
        Span::styled("s ", Style::default().fg(Color::DarkGray)),
        Span::raw("save here  "),
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
        Span::raw("quit"),
    ]));
    f.render_widget(hint, chunks[3]);
}
