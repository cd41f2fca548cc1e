//! Problem input parsing
//!
//! Problem instances arrive as a whitespace-separated stream of integers:
//! `n m` followed by `m` edges for the independent-set search variant, and
//! `n m k` followed by `m` edges for the clique and coloring variants.

use super::Graph;
use std::io::Read;
use thiserror::Error;

/// Fatal errors raised while reading a problem instance. Malformed input is
/// never recovered from.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read problem input: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected an integer for {what}, found '{token}'")]
    InvalidToken { what: &'static str, token: String },

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEnd(&'static str),

    #[error("vertex {vertex} out of range 1..={max}")]
    VertexOutOfRange { vertex: usize, max: usize },

    #[error("edge ({u}, {v}) is a self-loop")]
    SelfLoop { u: usize, v: usize },
}

/// Read an `(n, m, edges...)` instance, used by the independent-set search.
pub fn read_search_instance<R: Read>(reader: R) -> Result<Graph, ParseError> {
    let mut tokens = TokenStream::new(reader)?;
    let n = tokens.next_value("vertex count")?;
    let m = tokens.next_value("edge count")?;
    read_edges(&mut tokens, n, m)
}

/// Read an `(n, m, k, edges...)` instance, used by the clique and coloring
/// variants. Returns the graph and the problem parameter `k`.
pub fn read_sized_instance<R: Read>(reader: R) -> Result<(Graph, usize), ParseError> {
    let mut tokens = TokenStream::new(reader)?;
    let n = tokens.next_value("vertex count")?;
    let m = tokens.next_value("edge count")?;
    let k = tokens.next_value("problem parameter")?;
    let graph = read_edges(&mut tokens, n, m)?;
    Ok((graph, k))
}

fn read_edges(tokens: &mut TokenStream, n: usize, m: usize) -> Result<Graph, ParseError> {
    let mut graph = Graph::new(n);
    for _ in 0..m {
        let u = tokens.next_value("edge endpoint")?;
        let v = tokens.next_value("edge endpoint")?;
        for vertex in [u, v] {
            if vertex == 0 || vertex > n {
                return Err(ParseError::VertexOutOfRange { vertex, max: n });
            }
        }
        if u == v {
            return Err(ParseError::SelfLoop { u, v });
        }
        // Bounds already checked, so add_edge cannot fail here.
        let _ = graph.add_edge(u, v);
    }
    Ok(graph)
}

/// Whitespace-separated integer tokens pulled from a reader.
struct TokenStream {
    tokens: std::vec::IntoIter<String>,
}

impl TokenStream {
    fn new<R: Read>(mut reader: R) -> Result<Self, ParseError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        let tokens: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        Ok(Self {
            tokens: tokens.into_iter(),
        })
    }

    fn next_value(&mut self, what: &'static str) -> Result<usize, ParseError> {
        let token = self
            .tokens
            .next()
            .ok_or(ParseError::UnexpectedEnd(what))?;
        token
            .parse()
            .map_err(|_| ParseError::InvalidToken { what, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_search_instance() {
        let input = "4 3\n1 2\n2 3\n3 4\n";
        let graph = read_search_instance(input.as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.is_adjacent(2, 3));
        assert!(!graph.is_adjacent(1, 4));
    }

    #[test]
    fn test_read_sized_instance() {
        let input = "3 1 2\n1 2\n";
        let (graph, k) = read_sized_instance(input.as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(k, 2);
    }

    #[test]
    fn test_whitespace_shape_is_irrelevant() {
        let input = "3   1 2 1\t2";
        let (graph, k) = read_sized_instance(input.as_bytes()).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(k, 2);
    }

    #[test]
    fn test_non_numeric_token_is_fatal() {
        let result = read_search_instance("4 x".as_bytes());
        assert!(matches!(
            result,
            Err(ParseError::InvalidToken { token, .. }) if token == "x"
        ));
    }

    #[test]
    fn test_truncated_input_is_fatal() {
        let result = read_search_instance("4 2 1 2".as_bytes());
        assert!(matches!(result, Err(ParseError::UnexpectedEnd(_))));
    }

    #[test]
    fn test_out_of_range_vertex_is_fatal() {
        let result = read_search_instance("3 1 1 7".as_bytes());
        assert!(matches!(
            result,
            Err(ParseError::VertexOutOfRange { vertex: 7, max: 3 })
        ));
    }

    #[test]
    fn test_self_loop_is_fatal() {
        let result = read_search_instance("3 1 2 2".as_bytes());
        assert!(matches!(result, Err(ParseError::SelfLoop { u: 2, v: 2 })));
    }
}
