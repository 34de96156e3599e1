//! Tabular Expected-SARSA learning on a linear chain of states
//!
//! An agent starts at one end of a [`LinearChain`](gym::LinearChain) and learns, episode by
//! episode, that advancing is the only way to reach the reward at the other end.
//!
//! ```
//! use chain_sarsa::{
//!     agent::Agent,
//!     algo::tabular::{ExpectedSarsaAgent, ExpectedSarsaAgentConfig},
//!     gym::LinearChain,
//!     record::StepRecord,
//! };
//!
//! let env = LinearChain::new(5)?;
//! let mut agent = ExpectedSarsaAgent::new(ExpectedSarsaAgentConfig::default())?;
//! let mut records: Vec<StepRecord<LinearChain>> = Vec::new();
//! let summaries = agent.traverse(&env, 0, &mut records)?;
//! assert_eq!(summaries.len(), 25);
//! # Ok::<(), chain_sarsa::error::Error>(())
//! ```

/// The agent contract shared by learning rules
pub mod agent;

/// Implemented RL algorithms
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Environment
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// Environments to learn in
pub mod gym;

/// Per-step records and where they go
pub mod record;

mod util;
