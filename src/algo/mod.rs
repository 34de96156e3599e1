pub mod tabular;

pub use tabular::ExpectedSarsaAgent;
