//! Notification overlay rendering.
//!
//! Draws live toasts stacked in the top-right corner, newest at the bottom.

use crate::app::App;
use crate::notify::ToastKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 3;

/// Compute the screen rectangles of the live toasts, oldest first.
///
/// # Details
/// Toasts that would not fit below the previous ones are left out, so the
/// result may be shorter than the notifier queue. Mouse handling uses the same
/// rectangles to keep clicks on a toast away from the rows underneath.
pub fn toast_areas(app: &App, area: Rect) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;

    (0..app.notifier.toasts().count())
        .map(|slot| Rect::new(x, area.y + slot as u16 * TOAST_HEIGHT, width, TOAST_HEIGHT))
        .take_while(|rect| rect.y + TOAST_HEIGHT <= area.y + area.height)
        .collect()
}

/// Render the toast overlay on top of whatever is already in `area`.
pub fn render_toasts(app: &App, area: Rect, buf: &mut Buffer) {
    if app.notifier.is_empty() {
        return;
    }

    for (rect, toast) in toast_areas(app, area).into_iter().zip(app.notifier.toasts()) {
        let (color, label) = match toast.kind {
            ToastKind::Success => (Color::Green, "✔"),
            ToastKind::Error => (Color::Red, "✖"),
        };

        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", label), Style::default().fg(color)),
            Span::raw(toast.message.as_str()),
        ]))
        .block(
            Block::default()
                .title(toast.format_time())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        Widget::render(Clear, rect, buf);
        Widget::render(paragraph, rect, buf);
    }
}
