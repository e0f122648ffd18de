//! UI components module.
//!
//! Contains ratatui widgets for displaying the application interface.

pub mod input;
pub mod list;
pub mod toasts;

pub use input::{render_new_todo, render_search};
pub use list::{RowAction, hit_test, render_list};
pub use toasts::{render_toasts, toast_areas};
