//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette, one FIFO queue per `(port, method)` pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Index a loaded cassette for replay.
    #[must_use]
    pub fn new(cassette: Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        let mut interactions = cassette.interactions;
        interactions.sort_by_key(|i| i.seq);
        for interaction in interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction);
        }
        Self { queues }
    }

    /// Take the next recorded interaction for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns a message if nothing was recorded for the pair, or if every
    /// recorded interaction has already been served.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        let Some(queue) = self.queues.get_mut(&(port.to_string(), method.to_string())) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(format!(
                "Cassette has no interactions for {port}::{method}. Recorded: [{}]",
                available.join(", ")
            ));
        };
        queue
            .pop_front()
            .ok_or_else(|| format!("Cassette exhausted for {port}::{method}"))
    }

    /// Interactions not yet served, across all pairs.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }
}
