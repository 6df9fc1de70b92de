use std::fmt::Write;

use serde::Serialize;

use crate::graph::{VertexId, Weight};
use crate::routing::{RoutePlan, SearchAlgorithm};

/// Text shown in place of a path when the goal is unreachable.
pub const NO_SOLUTION: &str = "no solution";

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    RichText,
}

/// Structured representation of a search result that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: SearchAlgorithm,
    pub source: VertexId,
    pub goal: VertexId,
    pub found: bool,
    pub path: Vec<VertexId>,
    pub cost: Weight,
    pub hops: usize,
    pub expanded: usize,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            algorithm: plan.algorithm,
            source: plan.source,
            goal: plan.goal,
            found: plan.is_found(),
            path: plan.steps.clone(),
            cost: plan.cost,
            hops: plan.hop_count(),
            expanded: plan.expanded,
        }
    }

    /// The path as `[a, b, c]`, or `no solution` when empty.
    pub fn solution_text(&self) -> String {
        if !self.found {
            return NO_SOLUTION.to_string();
        }
        let joined = self
            .path
            .iter()
            .map(VertexId::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{joined}]")
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{}", self.algorithm.label());
        let _ = writeln!(buffer, "\tsolution: {}", self.solution_text());
        let _ = writeln!(buffer, "\tcost: {}", self.cost);
        let _ = writeln!(buffer, "\t{} nodes visited", self.expanded);
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**{}** _{} → {}_ (algorithm: `{}`)",
            self.algorithm.label(),
            self.source,
            self.goal,
            self.algorithm
        );
        if self.found {
            let joined = self
                .path
                .iter()
                .map(|id| format!("`{id}`"))
                .collect::<Vec<_>>()
                .join(" → ");
            let _ = writeln!(buffer, "* path: {joined}");
            let _ = writeln!(buffer, "* cost: **{}** over {} hops", self.cost, self.hops);
        } else {
            let _ = writeln!(buffer, "* path: _{NO_SOLUTION}_");
        }
        let _ = writeln!(buffer, "* expanded: {}", self.expanded);
        buffer
    }
}
