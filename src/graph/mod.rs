//! Undirected graph model and problem input parsing

pub mod io;
pub mod model;

pub use io::{read_search_instance, read_sized_instance, ParseError};
pub use model::Graph;
