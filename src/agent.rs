use crate::{env::Environment, error::Result, record::RecordSink};

/// How a single episode went
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    /// 1-based episode number
    pub episode: usize,
    pub total_reward: f64,
    /// Steps taken before the episode ended
    pub steps: usize,
    /// Whether the episode ended on a terminal state rather than by running out of steps
    pub reached_terminal: bool,
}

/// An agent that can be sent through an environment
///
/// Agents track where they currently are and whether they hold the reward; the
/// learning rule decides how they move.
pub trait Agent<E: Environment> {
    /// Run every configured episode in `env`, feeding one record per step into `sink`
    ///
    /// `index` identifies this agent in the emitted records. Configuration problems
    /// are reported before the first episode starts.
    fn traverse<S>(&mut self, env: &E, index: usize, sink: &mut S) -> Result<Vec<EpisodeSummary>>
    where
        S: RecordSink<E> + ?Sized;

    /// Mark whether the agent holds the reward
    fn set_reward(&mut self, reward: bool);

    /// Move the agent's notion of where it is; `None` means outside any environment
    fn set_current_state(&mut self, state: Option<E::State>);
}
