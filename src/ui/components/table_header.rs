//! Table header strip component.
//!
//! [`TableHeader`] lays out a single row of titled columns across a
//! horizontal strip of the terminal grid. Columns are either fixed-width
//! (caller-pinned) or flexible (sized by dividing the remaining space
//! evenly), and a collaborating body component can read the resolved
//! widths through [`ColumnLayout`] to align its own cell boundaries.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use thiserror::Error;
use tracing::trace;

use crate::ui::theme::Theme;

/// Default gap between adjacent columns, in terminal cells.
pub const DEFAULT_COLUMN_SPACING: u16 = 0;

/// Errors that can occur while laying out header columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Every column is fixed-width, so there is nothing to size.
    #[error("header has no flexible columns to size")]
    NoFlexibleColumns,

    /// The fixed columns plus reserved spacing leave no room for the
    /// flexible columns.
    #[error(
        "insufficient width {width} for {fixed_count} fixed columns spanning {fixed_total} cells plus column spacing"
    )]
    InsufficientWidth {
        /// The total width the header was asked to fill.
        width: u16,
        /// Number of fixed-width columns.
        fixed_count: usize,
        /// Combined declared width of the fixed columns.
        fixed_total: u32,
    },
}

/// Width policy declared when a column is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Caller-specified width, excluded from the even-division calculation.
    Fixed(u16),
    /// Width computed by dividing the remaining space evenly among all
    /// flexible columns.
    Flex,
}

/// Capability exposed by header-like widgets so a body component can align
/// its cell boundaries with the header's columns.
pub trait ColumnLayout {
    /// Resolved per-column widths, in render order.
    fn column_widths(&self) -> &[u16];
}

/// A single titled cell in the header strip.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    title: String,
    declared: ColumnWidth,
    area: Rect,
    style: Style,
}

impl HeaderCell {
    fn new(title: String, declared: ColumnWidth, height: u16, theme: &Theme) -> Self {
        let width = match declared {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Flex => 0,
        };
        Self {
            title,
            declared,
            area: Rect::new(0, 0, width, height),
            style: Style::default().fg(Color::White).bg(theme.header_bg),
        }
    }

    /// The column title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The width policy this column was added with.
    pub fn declared_width(&self) -> ColumnWidth {
        self.declared
    }

    /// The cell's bounding box. Flexible cells have zero width until the
    /// owning header's first layout pass.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Render this cell into its own buffer. Titles longer than the cell
    /// are truncated.
    fn buffer(&self) -> Buffer {
        let mut buf = Buffer::empty(self.area);
        buf.set_style(self.area, self.style);
        buf.set_stringn(
            self.area.x,
            self.area.y,
            &self.title,
            self.area.width as usize,
            self.style,
        );
        buf
    }
}

/// A one-row tabular header for a text-mode dashboard.
///
/// Columns are appended with [`add_column`](TableHeader::add_column) (flexible)
/// or [`add_fixed_width_column`](TableHeader::add_fixed_width_column), in the
/// order they should render. After all columns are added, the owning view
/// positions the header with [`set_x`](TableHeader::set_x) /
/// [`set_y`](TableHeader::set_y) and sizes it with
/// [`set_width`](TableHeader::set_width) — typically on every terminal
/// resize. [`buffer`](TableHeader::buffer) then produces a drawable snapshot
/// for the frame compositor.
///
/// The theme is shared by reference and must outlive the header.
#[derive(Debug)]
pub struct TableHeader<'a> {
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    column_spacing: u16,
    columns: Vec<HeaderCell>,
    theme: &'a Theme,
    column_widths: Vec<u16>,
}

impl<'a> TableHeader<'a> {
    /// Create a header of height 1 that draws with the given theme.
    /// Position and width stay zero until set.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 1,
            column_spacing: DEFAULT_COLUMN_SPACING,
            columns: Vec::new(),
            theme,
            column_widths: Vec::new(),
        }
    }

    /// Set the gap inserted between adjacent columns.
    pub fn with_spacing(mut self, spacing: u16) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// This header's height in rows.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Append a flexible column. Its width is computed on the next
    /// [`set_width`](TableHeader::set_width).
    pub fn add_column(&mut self, title: impl Into<String>) {
        self.columns.push(HeaderCell::new(
            title.into(),
            ColumnWidth::Flex,
            self.height,
            self.theme,
        ));
    }

    /// Append a column whose width is pinned to `width` cells and excluded
    /// from the even-division calculation.
    pub fn add_fixed_width_column(&mut self, title: impl Into<String>, width: u16) {
        self.columns.push(HeaderCell::new(
            title.into(),
            ColumnWidth::Fixed(width),
            self.height,
            self.theme,
        ));
    }

    /// Lay the header out to fill `width` cells.
    ///
    /// Each flexible column receives the floor-divided share of the space
    /// left after reserving the fixed widths plus one spacing gap per
    /// flexible column; the division remainder is dropped, not absorbed by
    /// the last column. Columns are then positioned left to right starting
    /// at the header's x anchor, and every column's resolved width is
    /// recorded for [`column_widths`](TableHeader::column_widths).
    ///
    /// Call [`set_x`](TableHeader::set_x) first: the anchor is read here,
    /// so a later `set_x` has no effect until the next `set_width`.
    ///
    /// On error the previous column layout and recorded widths are left
    /// untouched.
    pub fn set_width(&mut self, width: u16) -> Result<(), LayoutError> {
        self.width = width;
        let flex_width = self.calc_column_width()?;
        trace!(
            width,
            flex_width,
            columns = self.columns.len(),
            "laying out header columns"
        );

        self.column_widths.clear();
        let mut x = self.x;
        for cell in &mut self.columns {
            cell.area.x = x;
            if cell.declared == ColumnWidth::Flex {
                cell.area.width = flex_width;
            }
            x = x
                .saturating_add(cell.area.width)
                .saturating_add(self.column_spacing);
            self.column_widths.push(cell.area.width);
        }
        Ok(())
    }

    /// Set the x anchor used as the starting cursor by the next
    /// [`set_width`](TableHeader::set_width). Columns that are already laid
    /// out keep their positions until then.
    pub fn set_x(&mut self, x: u16) {
        self.x = x;
    }

    /// Move the header and every column to row `y`, effective immediately.
    pub fn set_y(&mut self, y: u16) {
        for cell in &mut self.columns {
            cell.area.y = y;
        }
        self.y = y;
    }

    /// Snapshot the header as a drawable buffer covering its own area.
    ///
    /// Cells are rendered independently and merged in column order, so on
    /// overlap a later column overwrites an earlier one.
    pub fn buffer(&self) -> Buffer {
        let mut buf = Buffer::empty(Rect::new(self.x, self.y, self.width, self.height));
        for cell in &self.columns {
            buf.merge(&cell.buffer());
        }
        buf
    }

    /// Total number of columns, fixed and flexible.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The columns in render order.
    pub fn columns(&self) -> &[HeaderCell] {
        &self.columns
    }

    /// Resolved per-column widths recorded by the most recent
    /// [`set_width`](TableHeader::set_width) call. Empty before the first
    /// layout pass.
    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    /// Shared width for flexible columns under the current header width.
    fn calc_column_width(&self) -> Result<u16, LayoutError> {
        let flex_count = self
            .columns
            .iter()
            .filter(|c| c.declared == ColumnWidth::Flex)
            .count();
        if flex_count == 0 {
            return Err(LayoutError::NoFlexibleColumns);
        }

        let fixed_total: u32 = self
            .columns
            .iter()
            .map(|c| match c.declared {
                ColumnWidth::Fixed(w) => u32::from(w),
                ColumnWidth::Flex => 0,
            })
            .sum();
        let reserved = fixed_total + u32::from(self.column_spacing) * flex_count as u32;
        let share = (i64::from(self.width) - i64::from(reserved)) / flex_count as i64;
        if share <= 0 {
            return Err(LayoutError::InsufficientWidth {
                width: self.width,
                fixed_count: self.columns.len() - flex_count,
                fixed_total,
            });
        }
        Ok(share as u16)
    }
}

impl ColumnLayout for TableHeader<'_> {
    fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with(theme: &Theme, spacing: u16) -> TableHeader<'_> {
        TableHeader::new(theme).with_spacing(spacing)
    }

    #[test]
    fn test_all_flex_columns_share_width_equally() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_column("A");
        header.add_column("B");
        header.add_column("C");
        header.add_column("D");

        header.set_width(41).unwrap();

        // (41 - 1*4) / 4 = 9
        assert_eq!(header.column_widths(), &[9, 9, 9, 9]);
        let consumed: u16 = header.column_widths().iter().sum::<u16>() + 1 * 4;
        assert!(consumed <= 41);
    }

    #[test]
    fn test_mixed_fixed_and_flex_widths() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_fixed_width_column("ID", 10);
        header.add_column("NAME");
        header.add_fixed_width_column("STATUS", 20);
        header.add_column("IMAGE");

        header.set_width(100).unwrap();

        // Flexible share: (100 - 1*2 - 30) / 2 = 34.
        assert_eq!(header.column_widths(), &[10, 34, 20, 34]);
    }

    #[test]
    fn test_truncating_division_drops_remainder() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_column("A");
        header.add_column("B");
        header.add_column("C");

        header.set_width(10).unwrap();

        // (10 - 1*3) / 3 = 2; the leftover cell is dropped, not given to
        // the last column.
        assert_eq!(header.column_widths(), &[2, 2, 2]);
        let consumed: u16 = header.column_widths().iter().sum::<u16>() + 1 * 3;
        assert!(consumed <= 10);
    }

    #[test]
    fn test_set_x_anchors_first_column() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_fixed_width_column("ID", 10);
        header.add_column("NAME");

        header.set_x(5);
        header.set_width(50).unwrap();

        assert_eq!(header.columns()[0].area().x, 5);
        assert_eq!(header.columns()[1].area().x, 5 + 10 + 1);
    }

    #[test]
    fn test_set_x_after_set_width_waits_for_next_pass() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 0);
        header.add_column("NAME");

        header.set_width(20).unwrap();
        assert_eq!(header.columns()[0].area().x, 0);

        header.set_x(7);
        assert_eq!(header.columns()[0].area().x, 0);

        header.set_width(20).unwrap();
        assert_eq!(header.columns()[0].area().x, 7);
    }

    #[test]
    fn test_set_y_propagates_immediately() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 0);
        header.add_column("NAME");
        header.add_fixed_width_column("ID", 8);

        header.set_y(3);

        assert!(header.columns().iter().all(|c| c.area().y == 3));
    }

    #[test]
    fn test_repeated_set_width_is_idempotent() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_fixed_width_column("ID", 10);
        header.add_column("NAME");
        header.add_column("IMAGE");

        header.set_width(80).unwrap();
        let first: Vec<u16> = header.column_widths().to_vec();
        header.set_width(80).unwrap();

        assert_eq!(header.column_widths(), first.as_slice());
        assert_eq!(header.column_widths().len(), header.column_count());
    }

    #[test]
    fn test_no_flexible_columns_is_an_error() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_fixed_width_column("ID", 10);
        header.add_fixed_width_column("STATUS", 20);

        assert_eq!(header.set_width(50), Err(LayoutError::NoFlexibleColumns));
    }

    #[test]
    fn test_insufficient_width_is_an_error() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_fixed_width_column("ID", 30);
        header.add_column("NAME");

        // 30 fixed + 1 spacing leaves nothing: a zero share is an error too.
        assert_eq!(
            header.set_width(31),
            Err(LayoutError::InsufficientWidth {
                width: 31,
                fixed_count: 1,
                fixed_total: 30,
            })
        );
    }

    #[test]
    fn test_error_leaves_previous_layout_intact() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 1);
        header.add_fixed_width_column("ID", 30);
        header.add_column("NAME");

        header.set_width(100).unwrap();
        let laid_out: Vec<u16> = header.column_widths().to_vec();

        assert!(header.set_width(10).is_err());
        assert_eq!(header.column_widths(), laid_out.as_slice());
    }

    #[test]
    fn test_column_count_covers_both_kinds() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 0);
        header.add_column("NAME");
        header.add_fixed_width_column("ID", 12);
        header.add_column("IMAGE");

        assert_eq!(header.column_count(), 3);
        assert_eq!(header.columns()[0].declared_width(), ColumnWidth::Flex);
        assert_eq!(header.columns()[1].declared_width(), ColumnWidth::Fixed(12));
        assert_eq!(header.columns()[1].title(), "ID");
    }

    #[test]
    fn test_buffer_composites_columns_in_order() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 0);
        header.add_column("AB");
        header.add_column("CD");

        header.set_width(8).unwrap();
        let buf = header.buffer();

        let mut expected = Buffer::with_lines(["AB  CD  "]);
        expected.set_style(
            expected.area,
            Style::default().fg(Color::White).bg(theme.header_bg),
        );
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_buffer_truncates_long_titles() {
        let theme = Theme::default();
        let mut header = header_with(&theme, 0);
        header.add_fixed_width_column("CONTAINER", 4);
        header.add_column("X");

        header.set_width(8).unwrap();
        let buf = header.buffer();

        let mut expected = Buffer::with_lines(["CONTX   "]);
        expected.set_style(
            expected.area,
            Style::default().fg(Color::White).bg(theme.header_bg),
        );
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_column_layout_trait_exposes_widths() {
        fn widths_of(layout: &dyn ColumnLayout) -> Vec<u16> {
            layout.column_widths().to_vec()
        }

        let theme = Theme::default();
        let mut header = header_with(&theme, 0);
        header.add_column("A");
        header.add_column("B");
        header.set_width(10).unwrap();

        assert_eq!(widths_of(&header), vec![5, 5]);
    }
}
