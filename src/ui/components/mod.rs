//! Reusable UI components.

mod table_header;

pub use table_header::{
    ColumnLayout, ColumnWidth, HeaderCell, LayoutError, TableHeader, DEFAULT_COLUMN_SPACING,
};
