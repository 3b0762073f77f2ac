use std::io::BufRead;

use log::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Parses a textual graph description into a [`Graph`].
///
/// Blank lines and lines starting with `#` are ignored. The first significant
/// line is a header `n m d`: vertex count, edge count, and a directedness flag
/// (`0` undirected, anything else directed). Up to `m` following significant
/// lines are edges `u v`; if the input ends early the edges read so far are
/// used without complaint.
///
/// # Example
/// ```
/// use hampath::graph::builder;
///
/// let input = [
///     "# a triangle",
///     "3 3 0",
///     "1 2",
///     "2 3",
///     "1 3",
/// ];
/// let g = builder::from_lines(input).unwrap();
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.neighbors(2), &[1, 3]);
/// ```
pub fn from_lines<I, S>(lines: I) -> Result<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let significant: Vec<String> = lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect();

    let mut it = significant.iter();
    let header = it.next().ok_or(GraphError::EmptyInput)?;
    let (n, m, directed) = parse_header(header)?;

    let mut graph = Graph::new(n, directed);
    let mut read = 0usize;
    for _ in 0..m {
        let Some(line) = it.next() else { break };
        let (u, v) = parse_edge(line, n)?;
        graph.add_edge(u, v)?;
        read += 1;
    }

    debug!(
        "built graph: n={}, directed={}, {} of {} declared edges",
        n, directed, read, m
    );
    Ok(graph)
}

/// Reads a graph description to end-of-input from `reader`.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    from_lines(lines)
}

fn parse_header(header: &str) -> Result<(usize, usize, bool)> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(GraphError::invalid_header(format!(
            "expected at least 3 fields `n m d`, got {:?}",
            header
        )));
    }
    let n: usize = fields[0].parse().map_err(|_| {
        GraphError::invalid_header(format!("vertex count {:?} is not a non-negative integer", fields[0]))
    })?;
    let m: usize = fields[1].parse().map_err(|_| {
        GraphError::invalid_header(format!("edge count {:?} is not a non-negative integer", fields[1]))
    })?;
    let d: i64 = fields[2].parse().map_err(|_| {
        GraphError::invalid_header(format!("directedness flag {:?} is not an integer", fields[2]))
    })?;
    Ok((n, m, d != 0))
}

fn parse_edge(line: &str, n: usize) -> Result<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(GraphError::invalid_edge(format!(
            "expected `u v`, got {:?}",
            line
        )));
    }
    let u = parse_endpoint(fields[0], line, n)?;
    let v = parse_endpoint(fields[1], line, n)?;
    Ok((u, v))
}

fn parse_endpoint(field: &str, line: &str, n: usize) -> Result<usize> {
    let value: i64 = field.parse().map_err(|_| {
        GraphError::invalid_edge(format!("endpoint {:?} in {:?} is not an integer", field, line))
    })?;
    if value < 1 || value > n as i64 {
        return Err(GraphError::VertexOutOfRange { vertex: value, n });
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_undirected_graph() {
        let g = from_lines(["3 2 0", "1 2", "2 3"]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert!(!g.is_directed());
        assert_eq!(g.neighbors(1), &[2]);
        assert_eq!(g.neighbors(2), &[1, 3]);
        assert_eq!(g.neighbors(3), &[2]);
    }

    #[test]
    fn test_parses_directed_graph() {
        let g = from_lines(["3 2 1", "1 2", "2 3"]).unwrap();
        assert!(g.is_directed());
        assert_eq!(g.neighbors(1), &[2]);
        assert_eq!(g.neighbors(2), &[3]);
        assert!(g.neighbors(3).is_empty());
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let g = from_lines(["# header comment", "", "  ", "2 1 0", "# edge next", "1 2"]).unwrap();
        assert_eq!(g.neighbors(1), &[2]);
    }

    #[test]
    fn test_empty_input() {
        let lines: [&str; 0] = [];
        assert!(matches!(from_lines(lines), Err(GraphError::EmptyInput)));
        assert!(matches!(
            from_lines(["# only comments", "   "]),
            Err(GraphError::EmptyInput)
        ));
    }

    #[test]
    fn test_short_header_is_rejected() {
        assert!(matches!(
            from_lines(["3 2"]),
            Err(GraphError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_non_integer_header_is_rejected() {
        assert!(matches!(
            from_lines(["three 2 0"]),
            Err(GraphError::InvalidHeader(_))
        ));
        assert!(matches!(
            from_lines(["3 2 x"]),
            Err(GraphError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_fewer_edge_lines_than_declared() {
        // m says 5 but only one edge is present; that's fine.
        let g = from_lines(["3 5 0", "1 2"]).unwrap();
        assert_eq!(g.neighbors(1), &[2]);
        assert!(g.neighbors(3).is_empty());
    }

    #[test]
    fn test_malformed_edge_line() {
        assert!(matches!(
            from_lines(["2 1 0", "1"]),
            Err(GraphError::InvalidEdge(_))
        ));
        assert!(matches!(
            from_lines(["2 1 0", "1 2 3"]),
            Err(GraphError::InvalidEdge(_))
        ));
        assert!(matches!(
            from_lines(["2 1 0", "1 b"]),
            Err(GraphError::InvalidEdge(_))
        ));
    }

    #[test]
    fn test_edge_endpoint_out_of_range() {
        assert!(matches!(
            from_lines(["2 1 0", "1 5"]),
            Err(GraphError::VertexOutOfRange { vertex: 5, n: 2 })
        ));
        assert!(matches!(
            from_lines(["2 1 0", "-1 2"]),
            Err(GraphError::VertexOutOfRange { vertex: -1, n: 2 })
        ));
    }

    #[test]
    fn test_duplicate_edges_survive_parsing() {
        let g = from_lines(["2 2 0", "1 2", "1 2"]).unwrap();
        assert_eq!(g.neighbors(1), &[2, 2]);
        assert_eq!(g.neighbors(2), &[1, 1]);
    }

    #[test]
    fn test_from_reader() {
        let input = b"3 2 0\n1 2\n2 3\n" as &[u8];
        let g = from_reader(input).unwrap();
        assert_eq!(g.neighbors(2), &[1, 3]);
    }
}
