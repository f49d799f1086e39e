//! Table header layout and rendering for terminal dashboards.
//!
//! The crate's centerpiece is [`TableHeader`], a one-row strip of titled
//! columns. Fixed-width columns keep their declared width; flexible columns
//! split the remaining space evenly. A body component reads the resolved
//! widths through [`ColumnLayout`] so its cell boundaries line up with the
//! header's.
//!
//! ```
//! use gridhead::{TableHeader, Theme};
//!
//! let theme = Theme::default();
//! let mut header = TableHeader::new(&theme).with_spacing(1);
//! header.add_fixed_width_column("ID", 12);
//! header.add_column("NAME");
//! header.add_column("IMAGE");
//!
//! header.set_width(80)?;
//! assert_eq!(header.column_widths().len(), header.column_count());
//! # Ok::<(), gridhead::LayoutError>(())
//! ```

pub mod config;
pub mod logging;
pub mod ui;

pub use config::{Config, ConfigError, ThemeConfig};
pub use ui::components::{ColumnLayout, ColumnWidth, HeaderCell, LayoutError, TableHeader};
pub use ui::theme::Theme;
