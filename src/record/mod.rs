use crate::{env::Environment, error::Result};

mod csv_sink;

pub use csv_sink::CsvRecordSink;

/// What happened on a single step of a traversal
pub struct StepRecord<E: Environment> {
    /// 1-based episode number
    pub episode: usize,
    /// The state the agent moved into
    pub state: E::State,
    /// Reward accumulated so far in the episode
    pub total_reward: f64,
    /// 1-based step counter across the whole run
    pub time: usize,
    /// The action that was taken
    pub action: E::Action,
    /// Which agent produced the record
    pub agent_index: usize,
}

impl<E: Environment> Clone for StepRecord<E>
where
    E::State: Clone,
    E::Action: Clone,
{
    fn clone(&self) -> Self {
        Self {
            episode: self.episode,
            state: self.state.clone(),
            total_reward: self.total_reward,
            time: self.time,
            action: self.action.clone(),
            agent_index: self.agent_index,
        }
    }
}

/// Append-only destination for step records, fed in the order they are produced
pub trait RecordSink<E: Environment> {
    fn record(&mut self, record: StepRecord<E>) -> Result<()>;
}

impl<E: Environment> RecordSink<E> for Vec<StepRecord<E>> {
    fn record(&mut self, record: StepRecord<E>) -> Result<()> {
        self.push(record);
        Ok(())
    }
}

impl<E: Environment, S: RecordSink<E> + ?Sized> RecordSink<E> for &mut S {
    fn record(&mut self, record: StepRecord<E>) -> Result<()> {
        (**self).record(record)
    }
}

#[cfg(test)]
mod tests {
    use crate::env::tests::MockEnv;

    use super::*;

    fn push_through<S: RecordSink<MockEnv>>(mut sink: S) {
        sink.record(StepRecord {
            episode: 1,
            state: 0,
            total_reward: 0.0,
            time: 1,
            action: false,
            agent_index: 3,
        })
        .unwrap();
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut records: Vec<StepRecord<MockEnv>> = Vec::new();
        push_through(&mut records);
        records
            .record(StepRecord {
                episode: 1,
                state: 1,
                total_reward: 1.0,
                time: 2,
                action: true,
                agent_index: 3,
            })
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].time, 1);
        assert_eq!(records[1].state, 1);
        assert!(records[1].action);
        assert_eq!(records[1].clone().total_reward, 1.0);
    }
}
