pub mod linear_chain;

pub use linear_chain::{LinearChain, StateNode};
