// File: crates/bracket-cli/src/main.rs
// Summary: Bracket spacing calculator. Computes even spacing for a span and renders the schematic to PNG.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bracket_core::{theme, DiagramOptions, Outcome, RenderOptions, SpacingRequest, SpacingSession};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bracket_cli::batch::{load_requests_csv, row_output_path};
use bracket_cli::config::{
    clear_config_flags, global_config_path, load_config_flags, local_override_path, save_config_flags,
    ConfigFlags,
};
use bracket_cli::export::write_positions_csv;
use bracket_cli::interactive;

const DEFAULT_OUT: &str = "target/out/bracket_spacing.png";

/// Even spacing between mounting brackets along a span
#[derive(Parser, Debug)]
#[command(name = "bracket-spacing", version, about, long_about = None)]
struct Cli {
    /// Length between the outer brackets, in meters
    #[arg(long, default_value_t = 14.879, allow_negative_numbers = true)]
    span_m: f64,

    /// First/end bracket offset, in millimeters
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    offset_mm: f64,

    /// Number of brackets
    #[arg(long, default_value_t = 19)]
    brackets: u32,

    /// PNG output path
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Also write the bracket positions as CSV (per row as `<stem>_<row>.csv` in batch mode)
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Read requests (span_m, offset_mm, brackets) from a CSV file and render one PNG per row
    #[arg(long, value_name = "PATH", conflicts_with = "interactive")]
    batch: Option<PathBuf>,

    /// Read `span_m offset_mm brackets` lines from stdin, recomputing on each line
    #[arg(short, long)]
    interactive: bool,

    /// Color theme (light, dark, solarized-light, high-contrast-dark)
    #[arg(long)]
    theme: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Skip all text in the diagram
    #[arg(long)]
    no_labels: bool,

    /// Label offset dimensions with the configured offset instead of "200 mm"
    #[arg(long)]
    label_actual_offset: bool,

    /// Save current display flags as defaults in .bracketrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .bracketrc
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn config_flags(&self) -> ConfigFlags {
        ConfigFlags {
            no_labels: self.no_labels,
            label_actual_offset: self.label_actual_offset,
            theme: self.theme.clone(),
            width: self.width,
            height: self.height,
            out: self.out.clone(),
        }
    }

    fn request(&self) -> SpacingRequest {
        SpacingRequest::new(self.span_m, self.offset_mm, self.brackets)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let local_path = local_override_path();
    if cli.clear {
        clear_config_flags(&local_path)?;
        info!(path = %local_path.display(), "cleared saved defaults");
        return Ok(());
    }

    let cli_flags = cli.config_flags();
    if cli.save {
        save_config_flags(&local_path, &cli_flags)?;
        info!(path = %local_path.display(), "saved defaults");
    }

    let file_flags = load_config_flags(&global_config_path())?
        .union(&load_config_flags(&local_path)?);
    let flags = file_flags.union(&cli_flags);

    let opts = render_options(&flags);
    let diagram_opts = DiagramOptions { label_actual_offset: flags.label_actual_offset };
    let out = flags.out.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT));
    let mut session = SpacingSession::new(diagram_opts);

    if let Some(batch) = &cli.batch {
        return run_batch(&mut session, batch, &out, cli.csv.as_deref(), &opts);
    }

    if cli.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        return interactive::run(&mut session, stdin.lock(), stdout.lock(), |outcome| {
            render(outcome, &opts, &out, cli.csv.as_deref())
        });
    }

    let outcome = session.trigger(cli.request())?;
    println!("{}", outcome.summary());
    render(outcome, &opts, &out, cli.csv.as_deref())
}

fn render_options(flags: &ConfigFlags) -> RenderOptions {
    let mut opts = RenderOptions::default();
    if let Some(name) = &flags.theme {
        opts.theme = theme::find(name);
        if !opts.theme.name.eq_ignore_ascii_case(name) {
            warn!(theme = %name, fallback = opts.theme.name, "unknown theme");
        }
    }
    if let Some(w) = flags.width {
        opts.width = w;
    }
    if let Some(h) = flags.height {
        opts.height = h;
    }
    opts.draw_labels = !flags.no_labels;
    opts
}

fn render(outcome: &Outcome, opts: &RenderOptions, out: &Path, csv: Option<&Path>) -> Result<()> {
    outcome
        .diagram
        .render_to_png(opts, out)
        .with_context(|| format!("rendering diagram to {}", out.display()))?;
    println!("Wrote {}", out.display());
    if let Some(csv) = csv {
        write_positions_csv(&outcome.result, csv)?;
        println!("Wrote {}", csv.display());
    }
    Ok(())
}

fn run_batch(
    session: &mut SpacingSession,
    path: &Path,
    out: &Path,
    csv: Option<&Path>,
    opts: &RenderOptions,
) -> Result<()> {
    let rows = load_requests_csv(path)
        .with_context(|| format!("failed to load batch '{}'", path.display()))?;
    info!(rows = rows.len(), path = %path.display(), "loaded batch");
    if rows.is_empty() {
        anyhow::bail!("no requests loaded, check headers/delimiter.");
    }

    let mut failed = 0usize;
    for row in rows {
        match session.trigger(row.request) {
            Ok(outcome) => {
                println!("row {}: {}", row.row, outcome.summary());
                let png = row_output_path(out, row.row, "png");
                outcome.diagram.render_to_png(opts, &png)?;
                println!("Wrote {}", png.display());
                if let Some(csv) = csv {
                    let csv = row_output_path(csv, row.row, "csv");
                    write_positions_csv(&outcome.result, &csv)?;
                    println!("Wrote {}", csv.display());
                }
            }
            Err(e) => {
                failed += 1;
                warn!(row = row.row, reason = e.reason(), "skipping invalid request");
            }
        }
    }
    if failed > 0 {
        warn!(failed, "some batch rows were invalid");
    }
    Ok(())
}
