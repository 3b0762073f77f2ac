pub mod error;
pub mod graph;

pub use error::{GraphError, Result};
pub use graph::{builder, hamiltonian, Graph};
