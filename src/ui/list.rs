//! Todo list widget rendering.
//!
//! Displays the filtered view, one row per todo, with per-row complete and
//! delete affordances that can be clicked.

use crate::app::App;
use crate::todo::Todo;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

const MARKER_WIDTH: usize = 4;
const TIME_WIDTH: usize = 6;
const ACTIONS_WIDTH: u16 = 8;

/// Per-row action reachable by mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Complete,
    Delete,
}

/// Result of mapping a click onto the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    /// Row index in the filtered view
    pub index: usize,
    /// Affordance under the cursor, if any
    pub action: Option<RowAction>,
}

/// Compute the visible slice of rows.
///
/// # Arguments
/// * `selected` - Selected row index
/// * `len` - Number of rows
/// * `height` - Rows that fit in the list, borders excluded
///
/// # Returns
/// * `(usize, usize)` - Start (inclusive) and end (exclusive) row indices
///
/// # Details
/// Keeps the selection centered where possible without scrolling past the end.
pub fn visible_window(selected: usize, len: usize, height: u16) -> (usize, usize) {
    let visible = (height as usize).max(1);
    let center = visible / 2;
    let max_scroll = len.saturating_sub(visible);
    let start = selected.saturating_sub(center).min(max_scroll);
    (start, (start + visible).min(len))
}

/// Map a mouse position to a row and affordance.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area the list was rendered in
/// * `column` - Mouse column
/// * `row` - Mouse row
///
/// # Returns
/// * `Option<RowHit>` - The hit row, or None outside the rows
pub fn hit_test(app: &App, area: Rect, column: u16, row: u16) -> Option<RowHit> {
    if area.width < 2 || area.height < 2 {
        return None;
    }
    let right = area.x + area.width - 1;
    let bottom = area.y + area.height - 1;
    if column <= area.x || column >= right || row <= area.y || row >= bottom {
        return None;
    }

    let len = app.filtered_todos.len();
    let (start, _) = visible_window(app.selected_index, len, area.height - 2);
    let index = start + (row - area.y - 1) as usize;
    if index >= len {
        return None;
    }

    // Rows narrower than their fixed columns overflow and push the affordances out of view.
    let inner_width = (area.width - 2) as usize;
    let action = if inner_width < MARKER_WIDTH + TIME_WIDTH + ACTIONS_WIDTH as usize {
        None
    } else {
        let actions_start = right.saturating_sub(ACTIONS_WIDTH);
        match column.checked_sub(actions_start) {
            Some(1..=3) => Some(RowAction::Complete),
            Some(5..=7) => Some(RowAction::Delete),
            _ => None,
        }
    };

    Some(RowHit { index, action })
}

/// Render the todo list widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Each row shows a completion marker, the title (crossed out once completed),
/// the creation (or completion) time and the `[✔]` / `[✖]` affordances at the right edge.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let todos = &app.filtered_todos;
    let title = format!("Todos ({}/{})", todos.len(), app.store.len());

    if todos.is_empty() {
        let message = if app.store.is_empty() {
            "No todos yet, press 'n' to add one"
        } else {
            "No todos to display"
        };
        let list = List::new(vec![ListItem::new(message)])
            .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(todos.len().saturating_sub(1));
    let (start, end) = visible_window(selected_index, todos.len(), area.height.saturating_sub(2));
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = todos[start..end]
        .iter()
        .enumerate()
        .map(|(offset, todo)| {
            let is_selected = start + offset == selected_index;
            ListItem::new(row_line(todo, inner_width, is_selected))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(selected_index - start));

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD));

    StatefulWidget::render(list, area, buf, &mut list_state);
}

fn row_line(todo: &Todo, width: usize, is_selected: bool) -> Line<'static> {
    let title_width = width.saturating_sub(MARKER_WIDTH + TIME_WIDTH + ACTIONS_WIDTH as usize);
    let title = truncate(&todo.title, title_width);
    let padding = title_width.saturating_sub(display_width(&title));

    let marker = if todo.is_completed { "[x] " } else { "[ ] " };
    let title_style = if todo.is_completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(if is_selected { Color::Yellow } else { Color::White })
    };

    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(title, title_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(
            format!(" {}", todo.format_time()),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" "),
        Span::styled("[✔]", Style::default().fg(Color::Green)),
        Span::raw(" "),
        Span::styled("[✖]", Style::default().fg(Color::Red)),
    ])
}

/// Terminal cells taken by `text`; wide glyphs count twice.
fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Cut `text` to at most `max` cells, ending with `…` when shortened.
fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    let mut glyph = [0u8; 4];
    for ch in text.chars() {
        let width = display_width(ch.encode_utf8(&mut glyph));
        if used + width > max - 1 {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use crate::todo::{CompletionScope, TodoStore};

    fn app_with(count: usize) -> App {
        App::new(
            TodoStore::with_titles((1..=count).map(|n| format!("todo #{}", n))),
            Notifier::default(),
            CompletionScope::FullStore,
        )
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_visible_window_scrolls_to_selection() {
        assert_eq!(visible_window(0, 3, 10), (0, 3));
        assert_eq!(visible_window(5, 20, 4), (3, 7));
        assert_eq!(visible_window(19, 20, 4), (16, 20));
        assert_eq!(visible_window(0, 0, 0), (0, 0));
    }

    #[test]
    fn test_hit_test_rows_and_actions() {
        let app = app_with(3);
        let area = Rect::new(0, 0, 40, 10);

        // Right border is column 39; affordances occupy columns 31..39.
        assert_eq!(
            hit_test(&app, area, 5, 2),
            Some(RowHit { index: 1, action: None })
        );
        assert_eq!(
            hit_test(&app, area, 33, 1),
            Some(RowHit { index: 0, action: Some(RowAction::Complete) })
        );
        assert_eq!(
            hit_test(&app, area, 37, 3),
            Some(RowHit { index: 2, action: Some(RowAction::Delete) })
        );
    }

    #[test]
    fn test_hit_test_outside_rows() {
        let app = app_with(3);
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(hit_test(&app, area, 0, 1), None);
        assert_eq!(hit_test(&app, area, 5, 0), None);
        assert_eq!(hit_test(&app, area, 5, 5), None);
    }

    #[test]
    fn test_render_rows_and_counts() {
        let mut app = app_with(3);
        app.complete_todo(crate::todo::TodoId(2)).unwrap();
        app.search("#2");
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        render_list(&app, area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Todos (1/3)"));
        assert!(text.contains("[x] todo #2"));
        assert!(text.contains("[✔] [✖]"));
    }

    #[test]
    fn test_render_empty_view() {
        let mut app = app_with(2);
        app.search("nothing");
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        render_list(&app, area, &mut buf);
        assert!(buffer_text(&buf).contains("No todos to display"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 5), "a lo…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("買い物リスト", 5), "買い…");
        assert_eq!(truncate("買い物", 6), "買い物");
    }

    #[test]
    fn test_wide_title_keeps_affordances_aligned() {
        let app = App::new(
            TodoStore::with_titles(["買い物リストを作成する"]),
            Notifier::default(),
            CompletionScope::FullStore,
        );
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        render_list(&app, area, &mut buf);

        // Inner width 38 leaves 20 cells for the title.
        let shown = truncate("買い物リストを作成する", 20);
        assert!(display_width(&shown) <= 20);
        assert!(shown.ends_with('…'));

        let right = area.x + area.width - 1;
        assert_eq!(buf[(right - 7, 1)].symbol(), "[");
        assert_eq!(buf[(right - 6, 1)].symbol(), "✔");
        assert_eq!(buf[(right - 3, 1)].symbol(), "[");
        assert_eq!(buf[(right - 2, 1)].symbol(), "✖");
        assert_eq!(buf[(right - 1, 1)].symbol(), "]");

        assert_eq!(
            hit_test(&app, area, right - 6, 1),
            Some(RowHit { index: 0, action: Some(RowAction::Complete) })
        );
        assert_eq!(
            hit_test(&app, area, right - 2, 1),
            Some(RowHit { index: 0, action: Some(RowAction::Delete) })
        );
    }

    #[test]
    fn test_hit_test_narrow_list_has_no_actions() {
        let app = app_with(1);
        let area = Rect::new(0, 0, 15, 4);
        assert_eq!(
            hit_test(&app, area, 12, 1),
            Some(RowHit { index: 0, action: None })
        );
    }
}
