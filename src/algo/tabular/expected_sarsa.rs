use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    agent::{Agent, EpisodeSummary},
    decay::{self, Decay},
    ensure_interval,
    env::{DiscreteActionSpace, Environment, Transition},
    error::{Error, Result},
    exploration::EpsilonGreedy,
    record::{RecordSink, StepRecord},
    util::argmax,
};

use super::{Hashable, QTable};

/// Configuration for the [`ExpectedSarsaAgent`]
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedSarsaAgentConfig {
    /// Exploration probability, in `[0,1]`
    ///
    /// **Default**: `0.1`
    pub epsilon: f64,
    /// Discount factor, in `[0,1]`
    ///
    /// **Default**: `0.9`
    pub gamma: f64,
    /// Learning rate for each episode; episode `e` uses `decaying_alphas[e]`
    ///
    /// Must have at least `number_of_episodes` entries, each in `[0,1]`.
    ///
    /// **Default**: linear decay from `1.0` to `0.1` over the default episode count
    pub decaying_alphas: Vec<f64>,
    /// **Default**: `25`
    pub number_of_episodes: usize,
    /// Step budget per episode
    ///
    /// **Default**: `50`
    pub number_of_steps: usize,
    /// Chance of surging forward from the start
    ///
    /// Carried for agent variants that move stochastically; the Expected-SARSA rule
    /// does not use it.
    ///
    /// **Default**: `0.1`
    pub probability_of_surge: f64,
}

impl Default for ExpectedSarsaAgentConfig {
    fn default() -> Self {
        let number_of_episodes = 25;
        Self {
            epsilon: 0.1,
            gamma: 0.9,
            decaying_alphas: decay::Linear::spanning(number_of_episodes, 1.0, 0.1)
                .unwrap()
                .schedule(number_of_episodes),
            number_of_episodes,
            number_of_steps: 50,
            probability_of_surge: 0.1,
        }
    }
}

/// A tabular agent learning with Expected SARSA
///
/// After each step the estimate for the state-action pair just taken moves toward
///
/// r + γ [ (1 - ε) Q(s', a<sup>*</sup>) + (ε / |A|) Σ<sub>a</sub> Q(s', a) ]
///
/// where a<sup>*</sup> is the greedy action in the next state. The target blends the
/// greedy value with the average over all actions instead of using the action the
/// policy happens to take next.
///
/// ### Generics
/// - `E` - The [`Environment`] in which the agent will learn
///     - The action space must be discrete; value estimates are indexed by position in [`DiscreteActionSpace::actions`]
///     - States are used as [`HashMap`](std::collections::HashMap) keys, so they must be [`Hashable`]
/// - `R` - The random source driving exploration
pub struct ExpectedSarsaAgent<E, R = StdRng>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    R: Rng,
{
    q_table: QTable<E::State>,
    exploration: EpsilonGreedy,
    gamma: f64,
    decaying_alphas: Vec<f64>,
    number_of_episodes: usize,
    number_of_steps: usize,
    probability_of_surge: f64,
    current_state: Option<E::State>,
    reward: bool,
    rng: R,
}

impl<E> ExpectedSarsaAgent<E>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
{
    /// Initialize a new agent with an entropy-seeded random source
    pub fn new(config: ExpectedSarsaAgentConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<E, R> ExpectedSarsaAgent<E, R>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    R: Rng,
{
    /// Initialize a new agent driven by the given random source
    ///
    /// Fails if `epsilon`, `gamma`, `probability_of_surge` or any learning rate is not
    /// in the interval `[0,1]`
    pub fn with_rng(config: ExpectedSarsaAgentConfig, rng: R) -> Result<Self> {
        let ExpectedSarsaAgentConfig {
            epsilon,
            gamma,
            decaying_alphas,
            number_of_episodes,
            number_of_steps,
            probability_of_surge,
        } = config;

        ensure_interval!(gamma, 0.0, 1.0);
        ensure_interval!(probability_of_surge, 0.0, 1.0);
        for &alpha in &decaying_alphas {
            ensure_interval!(alpha, 0.0, 1.0);
        }

        Ok(Self {
            q_table: QTable::new(0),
            exploration: EpsilonGreedy::new(epsilon)?,
            gamma,
            decaying_alphas,
            number_of_episodes,
            number_of_steps,
            probability_of_surge,
            current_state: None,
            reward: false,
            rng,
        })
    }

    /// Start from a previously learned table instead of an empty one
    ///
    /// The table is kept by [`traverse`](Agent::traverse) as long as its width matches
    /// the environment's action set.
    pub fn with_q_table(mut self, q_table: QTable<E::State>) -> Self {
        self.q_table = q_table;
        self
    }

    pub fn q_table(&self) -> &QTable<E::State> {
        &self.q_table
    }

    pub fn into_q_table(self) -> QTable<E::State> {
        self.q_table
    }

    pub fn epsilon(&self) -> f64 {
        self.exploration.epsilon()
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    pub fn probability_of_surge(&self) -> f64 {
        self.probability_of_surge
    }

    pub fn current_state(&self) -> Option<E::State> {
        self.current_state
    }

    pub fn has_reward(&self) -> bool {
        self.reward
    }

    /// Choose an action in `state` with the epsilon-greedy policy
    ///
    /// **Returns** the action's index in the action set, or `None` if the set is empty
    pub fn choose_action(&mut self, state: E::State) -> Option<usize> {
        let values = self.q_table.values(state);
        self.exploration.choose_action(values, &mut self.rng)
    }

    /// Expected value of `state` under the epsilon-greedy policy
    fn expected_return(&mut self, state: E::State) -> f64 {
        let epsilon = self.exploration.epsilon();
        let values = self.q_table.values(state);
        if values.is_empty() {
            return 0.0;
        }
        let best = argmax(values).map_or(0.0, |a| values[a]);
        let sum: f64 = values.iter().sum();
        (1.0 - epsilon) * best + (epsilon / values.len() as f64) * sum
    }

    /// Apply one Expected-SARSA update to `(state, action)`
    ///
    /// **Returns** the new estimate
    pub fn learn(
        &mut self,
        state: E::State,
        action: usize,
        reward: f64,
        next_state: E::State,
        alpha: f64,
    ) -> f64 {
        let target = reward + self.gamma * self.expected_return(next_state);
        let q_value = self.q_table.value(state, action);
        let update = q_value + alpha * (target - q_value);
        self.q_table.update(state, action, update);
        update
    }

    fn validate(&self, actions: &[E::Action]) -> Result<()> {
        if actions.is_empty() {
            log::warn!("cannot traverse an environment without actions");
            return Err(Error::EmptyActionSet);
        }
        if self.decaying_alphas.len() < self.number_of_episodes {
            log::warn!(
                "{} learning rates configured for {} episodes",
                self.decaying_alphas.len(),
                self.number_of_episodes
            );
            return Err(Error::ScheduleTooShort {
                episodes: self.number_of_episodes,
                alphas: self.decaying_alphas.len(),
            });
        }
        Ok(())
    }
}

impl<E, R> Agent<E> for ExpectedSarsaAgent<E, R>
where
    E: Environment + DiscreteActionSpace,
    E::State: Hashable,
    E::Action: Clone,
    R: Rng,
{
    fn traverse<S>(&mut self, env: &E, index: usize, sink: &mut S) -> Result<Vec<EpisodeSummary>>
    where
        S: RecordSink<E> + ?Sized,
    {
        let actions = env.actions();
        self.validate(&actions)?;
        if self.q_table.num_actions() != actions.len() {
            self.q_table = QTable::new(actions.len());
        }

        log::info!(
            "expected SARSA agent {index}: {} episodes of up to {} steps over {} actions",
            self.number_of_episodes,
            self.number_of_steps,
            actions.len()
        );

        let mut time = 0;
        let mut summaries = Vec::with_capacity(self.number_of_episodes);

        for episode in 0..self.number_of_episodes {
            let alpha = *self
                .decaying_alphas
                .get(episode)
                .ok_or(Error::MissingLearningRate { episode })?;

            let mut state = env.initial_state();
            self.set_current_state(Some(state));
            self.set_reward(false);

            let mut total_reward = 0.0;
            let mut steps = 0;
            let mut reached_terminal = false;

            for _ in 0..self.number_of_steps {
                time += 1;
                steps += 1;

                let action = self.choose_action(state).ok_or(Error::EmptyActionSet)?;
                let Transition {
                    next_state,
                    reward,
                    terminal,
                } = env.step(&state, &actions[action])?;
                total_reward += reward;

                self.learn(state, action, reward, next_state, alpha);
                state = next_state;
                self.set_current_state(Some(state));

                sink.record(StepRecord {
                    episode: episode + 1,
                    state,
                    total_reward,
                    time,
                    action: actions[action].clone(),
                    agent_index: index,
                })?;

                if terminal {
                    log::debug!("agent {index} obtained the reward");
                    self.set_reward(true);
                    reached_terminal = true;
                    break;
                }
            }

            log::info!(
                "Episode {}: reward = {total_reward}, steps = {steps}",
                episode + 1
            );
            summaries.push(EpisodeSummary {
                episode: episode + 1,
                total_reward,
                steps,
                reached_terminal,
            });
        }

        Ok(summaries)
    }

    fn set_reward(&mut self, reward: bool) {
        self.reward = reward;
    }

    fn set_current_state(&mut self, state: Option<E::State>) {
        self.current_state = state;
    }
}
