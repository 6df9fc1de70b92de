use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridroute_cli::output::{print_footer, print_logo, OutputFormat};
use gridroute_cli::terminal::Palette;
use gridroute_lib::heuristic::{DEFAULT_CELL_SIZE, DEFAULT_GRID_COLUMNS};
use gridroute_lib::VertexId;

mod commands;

use commands::search::{handle_search_command, AlgorithmChoice, SearchCommandArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Compare uniform-cost and A* shortest paths on a region-tagged graph"
)]
struct Cli {
    /// Graph file, or a directory containing graph.txt. Defaults to $GRIDROUTE_GRAPH.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Which searches to run.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Both)]
    algorithm: AlgorithmChoice,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Source vertex, overriding the file's `S` line.
    #[arg(long = "from")]
    from: Option<VertexId>,

    /// Destination vertex, overriding the file's `D` line.
    #[arg(long = "to")]
    to: Option<VertexId>,

    /// Number of region columns in the heuristic grid.
    #[arg(long, default_value_t = DEFAULT_GRID_COLUMNS)]
    grid_columns: u32,

    /// Width of one region cell in distance units.
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    cell_size: f64,

    /// Suppress the banner and timing footer.
    #[arg(long)]
    no_logo: bool,
}

impl Cli {
    fn search_args(&self, palette: Palette) -> SearchCommandArgs {
        SearchCommandArgs {
            graph: self.graph.clone(),
            algorithm: self.algorithm,
            format: self.format,
            from: self.from,
            to: self.to,
            grid_columns: self.grid_columns,
            cell_size: self.cell_size,
            palette,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();
    let palette = Palette::from_env();

    let decorate = !cli.no_logo && cli.format.allows_decoration();
    if decorate {
        print_logo(&palette);
    }

    handle_search_command(&cli.search_args(palette))?;

    if decorate {
        print_footer(started.elapsed(), &palette);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
