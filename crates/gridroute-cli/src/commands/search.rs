//! Search command handler: load a graph file and run one or both searches on it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use gridroute_lib::{
    load_problem, plan_route, resolve_graph_path, RegionGridHeuristic, RouteRequest,
    RouteSummary, SearchAlgorithm, VertexId,
};

use gridroute_cli::output::{format_summaries, OutputFormat};
use gridroute_cli::terminal::Palette;

/// Which searches to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmChoice {
    /// Uniform-cost search followed by A*.
    #[default]
    Both,
    /// Uniform-cost search only.
    Ucs,
    /// A* search only.
    AStar,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [SearchAlgorithm] {
        match self {
            AlgorithmChoice::Both => &SearchAlgorithm::ALL,
            AlgorithmChoice::Ucs => &[SearchAlgorithm::UniformCost],
            AlgorithmChoice::AStar => &[SearchAlgorithm::AStar],
        }
    }
}

/// Arguments for the search command.
#[derive(Debug, Clone)]
pub struct SearchCommandArgs {
    /// Graph file or directory; `None` defers to `GRIDROUTE_GRAPH`.
    pub graph: Option<PathBuf>,
    pub algorithm: AlgorithmChoice,
    pub format: OutputFormat,
    /// Source override; defaults to the file's `S` line.
    pub from: Option<VertexId>,
    /// Destination override; defaults to the file's `D` line.
    pub to: Option<VertexId>,
    pub grid_columns: u32,
    pub cell_size: f64,
    /// Colours for the pretty view.
    pub palette: Palette,
}

impl SearchCommandArgs {
    fn heuristic(&self) -> Result<RegionGridHeuristic> {
        RegionGridHeuristic::new(self.grid_columns, self.cell_size)
            .context("invalid --grid-columns/--cell-size")
    }
}

/// Handle the search command.
pub fn handle_search_command(args: &SearchCommandArgs) -> Result<()> {
    let heuristic = args.heuristic()?;
    let path = resolve_graph_path(args.graph.as_deref())
        .context("failed to locate the graph file")?;
    let problem = load_problem(&path)
        .with_context(|| format!("failed to load graph from {}", path.display()))?;

    let source = args.from.unwrap_or(problem.source);
    let goal = args.to.unwrap_or(problem.goal);

    let mut summaries = Vec::with_capacity(args.algorithm.algorithms().len());
    for &algorithm in args.algorithm.algorithms() {
        let request = RouteRequest::new(source, goal, algorithm).with_heuristic(heuristic);
        let plan = plan_route(&problem.graph, &request)
            .with_context(|| format!("{algorithm} search from {source} to {goal} failed"))?;
        info!(
            %algorithm,
            found = plan.is_found(),
            cost = plan.cost,
            expanded = plan.expanded,
            "search finished"
        );
        summaries.push(RouteSummary::from_plan(&plan));
    }

    let rendered = format_summaries(&summaries, args.format, &args.palette)?;
    print!("{rendered}");
    Ok(())
}
