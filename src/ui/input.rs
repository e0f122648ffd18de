//! Input box rendering.
//!
//! Displays the search and new-todo boxes with their drafts.

use crate::app::{App, UiMode};
use crate::input::TextInput;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the search box.
pub fn render_search(app: &App, area: Rect, buf: &mut Buffer) {
    render_input(
        &app.search_input,
        "Search (press '/')",
        app.mode == UiMode::Search,
        area,
        buf,
    );
}

/// Render the new-todo box.
pub fn render_new_todo(app: &App, area: Rect, buf: &mut Buffer) {
    render_input(
        &app.new_todo_input,
        "New todo (press 'n')",
        app.mode == UiMode::NewTodo,
        area,
        buf,
    );
}

/// Render one input box.
///
/// # Arguments
/// * `input` - Draft to display
/// * `title` - Block title
/// * `is_active` - Whether the box has focus
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the placeholder while the draft is empty. The focused box is
/// highlighted and shows a cursor.
fn render_input(input: &TextInput, title: &str, is_active: bool, area: Rect, buf: &mut Buffer) {
    let text = if input.is_empty() {
        Span::styled(input.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            input.value(),
            Style::default().fg(if is_active { Color::White } else { Color::Gray }),
        )
    };

    let line = Line::from(vec![
        text,
        Span::styled(
            if is_active { "_" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use crate::todo::{CompletionScope, TodoStore};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let app = App::new(TodoStore::default(), Notifier::default(), CompletionScope::FullStore);
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        render_search(&app, area, &mut buf);
        assert!(buffer_text(&buf).contains("Search todos"));
    }

    #[test]
    fn test_draft_shown() {
        let mut app = App::new(
            TodoStore::default(),
            Notifier::default(),
            CompletionScope::FullStore,
        );
        app.enter_mode(UiMode::NewTodo);
        app.new_todo_input.push('m');
        app.new_todo_input.push('e');
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        render_new_todo(&app, area, &mut buf);
        assert!(buffer_text(&buf).contains("me_"));
    }
}
