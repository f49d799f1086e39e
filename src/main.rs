//! Demo dashboard for the gridhead table header.
//!
//! Renders a container-style table whose body cells align with the header
//! through the [`ColumnLayout`] capability. The header is re-laid out on
//! every terminal resize, which is the widget's intended usage pattern.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, buffer::Buffer, layout::Rect, style::Style, Terminal};
use tracing::{debug, info};

use gridhead::{ColumnLayout, Config, TableHeader, Theme};

/// Sample rows rendered beneath the header.
const SAMPLE_ROWS: &[[&str; 4]] = &[
    ["c0ffee12d9a1", "web", "nginx:1.27", "Up"],
    ["badc0de4a011", "api", "rust:1.79-slim", "Up"],
    ["f00dfeed5522", "db", "postgres:16", "Exited"],
];

/// Render a sample dashboard using the gridhead table header.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Gap between adjacent columns, overriding the configured value.
    #[arg(long)]
    spacing: Option<u16>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gridhead::logging::init()?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let theme = Theme::from_config(&config.theme)?;
    let spacing = args.spacing.unwrap_or(config.column_spacing);
    debug!(spacing, "building header");

    let mut header = TableHeader::new(&theme).with_spacing(spacing);
    header.add_fixed_width_column("ID", 12);
    header.add_column("NAME");
    header.add_column("IMAGE");
    header.add_fixed_width_column("STATUS", 10);

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut header, spacing, &theme);
    restore_terminal(&mut terminal)?;
    gridhead::logging::shutdown();
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    header: &mut TableHeader<'_>,
    spacing: u16,
    theme: &Theme,
) -> anyhow::Result<()> {
    loop {
        let mut layout_result = Ok(());
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            buf.set_style(area, Style::default().fg(theme.fg).bg(theme.bg));

            header.set_x(area.x);
            header.set_y(area.y);
            layout_result = header.set_width(area.width);
            if layout_result.is_err() {
                return;
            }
            composite(buf, &header.buffer());

            let body = Rect {
                y: area.y + header.height(),
                height: area.height.saturating_sub(header.height()),
                ..area
            };
            render_rows(buf, header, body, spacing, Style::default().fg(theme.fg));

            if body.height > 1 {
                buf.set_stringn(
                    area.x,
                    area.bottom() - 1,
                    "q: quit",
                    area.width as usize,
                    Style::default().fg(theme.highlight),
                );
            }
        })?;
        layout_result.context("failed to lay out the header")?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("quit requested");
                    return Ok(());
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(());
                }
                _ => {}
            },
            Event::Resize(width, height) => {
                debug!(width, height, "terminal resized");
            }
            _ => {}
        }
    }
}

/// Composite a widget snapshot into the frame buffer, clipping cells that
/// fall outside the frame area.
fn composite(buf: &mut Buffer, snapshot: &Buffer) {
    let area = buf.area.intersection(snapshot.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let (Some(dst), Some(src)) = (buf.cell_mut((x, y)), snapshot.cell((x, y))) {
                *dst = src.clone();
            }
        }
    }
}

/// Render the sample body rows, aligning each cell with the header columns.
fn render_rows(buf: &mut Buffer, layout: &dyn ColumnLayout, body: Rect, spacing: u16, style: Style) {
    for (i, row) in SAMPLE_ROWS.iter().enumerate() {
        let y = body.y + i as u16;
        if y >= body.bottom() {
            break;
        }
        let mut x = body.x;
        for (text, width) in row.iter().zip(layout.column_widths()) {
            buf.set_stringn(x, y, text, *width as usize, style);
            x = x.saturating_add(*width).saturating_add(spacing);
        }
    }
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter the alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
