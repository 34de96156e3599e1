use crate::error::Result;

/// The outcome of taking an action in a state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<S> {
    /// The state the agent ends up in
    pub next_state: S,
    /// The reward received for the transition
    pub reward: f64,
    /// Whether `next_state` ends the episode
    pub terminal: bool,
}

/// Represents a Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// The environment itself is read-only once constructed: the agent owns its notion
/// of the current state and asks the environment to resolve transitions from it.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// The state every episode starts from
    fn initial_state(&self) -> Self::State;

    /// Resolve taking `action` in `state`
    ///
    /// Fails if the action leads nowhere from `state`.
    fn step(&self, state: &Self::State, action: &Self::Action) -> Result<Transition<Self::State>>;
}

/// An environment whose action set is finite and known up front
pub trait DiscreteActionSpace: Environment {
    /// All actions an agent may choose from, in a fixed order
    ///
    /// Value estimates are indexed by position in this list.
    fn actions(&self) -> Vec<Self::Action>;
}
