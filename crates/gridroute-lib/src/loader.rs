//! Line-based graph file loader.
//!
//! The format has three sections:
//!
//! ```text
//! # vertices: id,region
//! 1,0
//! 2,1
//!
//! # edges: from,to,distance
//! 1,2,50
//!
//! S,1
//! D,2
//! ```
//!
//! Lines starting with `#` are comments in the vertex and edge sections, and
//! a blank line closes each of those sections. In the final section only
//! `S,<id>` and `D,<id>` lines are meaningful; everything else is ignored.

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::graph::{Graph, Region, VertexId, Weight};

/// A loaded graph together with the endpoints of the query to run on it.
#[derive(Debug, Clone)]
pub struct RouteProblem {
    pub graph: Graph,
    pub source: VertexId,
    pub goal: VertexId,
}

impl FromStr for RouteProblem {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        parse_problem(input)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Vertices,
    Edges,
    Endpoints,
}

/// Read and parse a graph file from disk.
pub fn load_problem(path: impl AsRef<Path>) -> Result<RouteProblem> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => Error::GraphFileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(error),
    })?;

    let problem = parse_problem(&contents)?;
    info!(
        path = %path.display(),
        vertices = problem.graph.len(),
        edges = problem.graph.edge_count(),
        source = problem.source,
        goal = problem.goal,
        "loaded graph"
    );
    Ok(problem)
}

/// Parse graph file contents.
///
/// Construction stops at the first malformed line; a partially built graph
/// is never returned.
pub fn parse_problem(input: &str) -> Result<RouteProblem> {
    let mut graph = Graph::new();
    let mut section = Section::Vertices;
    let mut source: Option<(VertexId, usize)> = None;
    let mut goal: Option<(VertexId, usize)> = None;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();

        match section {
            Section::Vertices | Section::Edges => {
                if line.starts_with('#') {
                    continue;
                }
                if line.is_empty() {
                    section = if section == Section::Vertices {
                        Section::Edges
                    } else {
                        Section::Endpoints
                    };
                    continue;
                }

                if section == Section::Vertices {
                    let (id, region) = parse_vertex(line, line_no)?;
                    graph
                        .add_vertex(id, region)
                        .map_err(|error| error.at_line(line_no))?;
                } else {
                    let (from, to, weight) = parse_edge(line, line_no)?;
                    graph
                        .add_edge(from, to, weight)
                        .map_err(|error| error.at_line(line_no))?;
                }
            }
            Section::Endpoints => {
                let mut fields = line.split(',').map(str::trim);
                let slot = match fields.next() {
                    Some("S") => &mut source,
                    Some("D") => &mut goal,
                    _ => continue,
                };
                let value = fields.next().ok_or_else(|| Error::Parse {
                    line: line_no,
                    message: "endpoint line is missing a vertex id".to_string(),
                })?;
                let id = parse_field::<VertexId>(value, "vertex id", line_no)?;
                if slot.is_some() {
                    warn!(line = line_no, "endpoint designated more than once; last one wins");
                }
                *slot = Some((id, line_no));
            }
        }
    }

    let (source, source_line) = source.ok_or(Error::MissingEndpoint { marker: "source" })?;
    let (goal, goal_line) = goal.ok_or(Error::MissingEndpoint {
        marker: "destination",
    })?;

    for (id, line_no) in [(source, source_line), (goal, goal_line)] {
        if !graph.contains(id) {
            return Err(Error::UnknownVertex { id }.at_line(line_no));
        }
    }

    Ok(RouteProblem {
        graph,
        source,
        goal,
    })
}

fn parse_vertex(line: &str, line_no: usize) -> Result<(VertexId, Region)> {
    let fields = split_fields(line, 2, "id,region", line_no)?;
    let id = parse_field::<VertexId>(fields[0], "vertex id", line_no)?;
    let region = parse_field::<Region>(fields[1], "region", line_no)?;
    Ok((id, region))
}

fn parse_edge(line: &str, line_no: usize) -> Result<(VertexId, VertexId, Weight)> {
    let fields = split_fields(line, 3, "from,to,distance", line_no)?;
    let from = parse_field::<VertexId>(fields[0], "vertex id", line_no)?;
    let to = parse_field::<VertexId>(fields[1], "vertex id", line_no)?;
    let distance = parse_field::<i64>(fields[2], "distance", line_no)?;
    let weight = Weight::try_from(distance).map_err(|_| Error::Parse {
        line: line_no,
        message: format!("edge distance must be non-negative, got {distance}"),
    })?;
    Ok((from, to, weight))
}

fn split_fields<'a>(
    line: &'a str,
    expected: usize,
    layout: &str,
    line_no: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != expected {
        return Err(Error::Parse {
            line: line_no,
            message: format!(
                "expected {expected} fields ({layout}), found {}",
                fields.len()
            ),
        });
    }
    Ok(fields)
}

fn parse_field<T: FromStr>(value: &str, what: &str, line_no: usize) -> Result<T> {
    value.parse::<T>().map_err(|_| Error::Parse {
        line: line_no,
        message: format!("invalid {what} '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# id,region
1,0
2,1
3,11

# from,to,distance
1,2,50
2,3,50

S,1
D,3
";

    #[test]
    fn parses_all_sections() {
        let problem = parse_problem(SAMPLE).expect("valid sample");
        assert_eq!(problem.graph.len(), 3);
        assert_eq!(problem.graph.edge_count(), 2);
        assert_eq!(problem.source, 1);
        assert_eq!(problem.goal, 3);
        assert_eq!(problem.graph.region(3), Some(11));
    }

    #[test]
    fn accepts_crlf_and_padding() {
        let input = "1, 0\r\n2 ,5\r\n\r\n1,2, 7\r\n\r\nS, 1\r\nD,2\r\n";
        let problem: RouteProblem = input.parse().expect("crlf input");
        assert_eq!(problem.graph.neighbours(1)[0].weight, 7);
        assert_eq!(problem.goal, 2);
    }

    #[test]
    fn edge_section_may_end_at_eof() {
        let input = "1,0\n2,0\n\n1,2,3\n";
        let error = parse_problem(input).expect_err("no endpoints");
        assert!(matches!(error, Error::MissingEndpoint { marker: "source" }));
    }

    #[test]
    fn negative_distance_is_rejected_with_line() {
        let input = "1,0\n2,0\n\n1,2,-4\n\nS,1\nD,2\n";
        let error = parse_problem(input).expect_err("negative distance");
        match error {
            Error::Parse { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("non-negative"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_vertex_is_rejected() {
        let input = "1,0\n1,4\n\n\nS,1\nD,1\n";
        let error = parse_problem(input).expect_err("duplicate vertex");
        let message = error.to_string();
        assert!(message.starts_with("line 2:"), "{message}");
        assert!(message.contains("already exists"), "{message}");
    }

    #[test]
    fn edge_to_unknown_vertex_is_rejected() {
        let input = "1,0\n\n1,9,4\n\nS,1\nD,1\n";
        let error = parse_problem(input).expect_err("unknown vertex");
        assert_eq!(error.to_string(), "line 3: unknown vertex 9");
    }

    #[test]
    fn endpoint_must_exist() {
        let input = "1,0\n\n\nS,1\nD,2\n";
        let error = parse_problem(input).expect_err("unknown goal");
        assert_eq!(error.to_string(), "line 5: unknown vertex 2");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let error = parse_problem("1,0,3\n").expect_err("three fields");
        assert!(error.to_string().contains("expected 2 fields"));
    }

    #[test]
    fn last_endpoint_wins() {
        let input = "1,0\n2,0\n\n\nS,1\nS,2\nD,1\n";
        let problem = parse_problem(input).expect("valid");
        assert_eq!(problem.source, 2);
    }
}
