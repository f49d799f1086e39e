//! User interface components.
//!
//! This module contains the rendering logic: the table header widget and
//! the theme it draws with.

pub mod components;
pub mod theme;

pub use components::{ColumnLayout, ColumnWidth, HeaderCell, LayoutError, TableHeader};
pub use theme::Theme;
