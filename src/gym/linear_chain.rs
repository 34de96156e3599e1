use crate::{
    env::{DiscreteActionSpace, Environment, Transition},
    error::{Error, Result},
};

/// A single point in the chain
///
/// Neighbors are stored as identities into the owning [`LinearChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateNode {
    identity: usize,
    has_reward: bool,
    previous: Option<usize>,
    next: Option<usize>,
}

impl StateNode {
    fn new(identity: usize) -> Self {
        Self {
            identity,
            has_reward: false,
            previous: None,
            next: None,
        }
    }

    pub fn identity(&self) -> usize {
        self.identity
    }

    /// Only the last node of a chain carries the reward
    pub fn has_reward(&self) -> bool {
        self.has_reward
    }

    /// The node behind this one, absent for the first node
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    /// The node in front of this one, absent for the last node
    pub fn next(&self) -> Option<usize> {
        self.next
    }
}

/// A one-dimensional path of states with a reward at the far end
///
/// The agent starts at node 0. Action `1` advances to the next node; any other
/// action sends the agent back to the start. Stepping onto the last node pays
/// [`LinearChain::REWARD`] and ends the episode.
///
/// The action set is every state identity, `0..size`, so only one action in
/// `size` advances. This mirrors the environment's reward rule as-is; callers
/// that want a binary advance/reset choice can restrict the actions they offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearChain {
    nodes: Vec<StateNode>,
}

impl LinearChain {
    /// Reward for reaching the last node
    pub const REWARD: f64 = 100.0;

    /// The only action that moves the agent forward
    pub const ADVANCE: usize = 1;

    /// Build a chain of `num_of_states` nodes
    ///
    /// Fails with [`Error::EnvironmentTooSmall`] if `num_of_states < 2`.
    pub fn new(num_of_states: usize) -> Result<Self> {
        if num_of_states < 2 {
            log::warn!("refusing to build a chain of {num_of_states} states");
            return Err(Error::EnvironmentTooSmall {
                size: num_of_states,
            });
        }

        let mut nodes = (0..num_of_states).map(StateNode::new).collect::<Vec<_>>();
        let last = num_of_states - 1;
        for node in nodes.iter_mut() {
            let i = node.identity;
            if i > 0 {
                node.previous = Some(i - 1);
            }
            if i < last {
                node.next = Some(i + 1);
            } else {
                node.has_reward = true;
            }
        }

        Ok(Self { nodes })
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[StateNode] {
        &self.nodes
    }

    pub fn node(&self, identity: usize) -> Option<&StateNode> {
        self.nodes.get(identity)
    }

    /// Node 0, where every episode begins
    pub fn starting_node(&self) -> &StateNode {
        &self.nodes[0]
    }

    /// Resolve taking `action` from the node `state`
    ///
    /// Fails with [`Error::UndefinedTransition`] when advancing from the last node
    /// or when `state` is not part of the chain.
    pub fn act(&self, state: usize, action: usize) -> Result<Transition<usize>> {
        let undefined = || Error::UndefinedTransition { state, action };
        let current = self.node(state).ok_or_else(undefined)?;

        let next = if action == Self::ADVANCE {
            let next = current.next.ok_or_else(undefined)?;
            log::trace!("agent moved to node {next}");
            &self.nodes[next]
        } else {
            log::trace!("agent moved to starting state");
            self.starting_node()
        };

        let (reward, terminal) = if next.has_reward {
            (Self::REWARD, true)
        } else {
            (0.0, false)
        };

        Ok(Transition {
            next_state: next.identity,
            reward,
            terminal,
        })
    }
}

impl Environment for LinearChain {
    type State = usize;
    type Action = usize;

    fn initial_state(&self) -> Self::State {
        self.starting_node().identity
    }

    fn step(&self, state: &Self::State, action: &Self::Action) -> Result<Transition<usize>> {
        self.act(*state, *action)
    }
}

impl DiscreteActionSpace for LinearChain {
    fn actions(&self) -> Vec<Self::Action> {
        self.nodes.iter().map(StateNode::identity).collect()
    }
}
