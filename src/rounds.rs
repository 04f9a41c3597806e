//! In-memory round store: opaque token -> chosen answer.
//!
//! Ephemeral by design: rounds live for the process lifetime, with no expiry
//! sweep and no persistence across restarts. One token maps to one immutable
//! answer for its lifetime, so lock-guarded map operations are all the
//! concurrency control the store needs.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::ROUND_TOKEN_LEN;

/// One open round: the chosen answer and when the round started.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub answer_index: usize,
    pub opened_at: Instant,
}

#[derive(Debug, Default)]
pub struct RoundStore {
    rounds: RwLock<HashMap<String, Round>>,
}

impl RoundStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a round for the given answer and return its freshly minted token.
    pub fn open(&self, answer_index: usize) -> String {
        let token = mint_token();
        let round = Round {
            answer_index,
            opened_at: Instant::now(),
        };
        self.rounds
            .write()
            .expect("round store lock poisoned")
            .insert(token.clone(), round);
        token
    }

    /// Look up the answer index for a token, if such a round exists.
    pub fn answer_index(&self, token: &str) -> Option<usize> {
        self.rounds
            .read()
            .expect("round store lock poisoned")
            .get(token)
            .map(|round| round.answer_index)
    }

    pub fn len(&self) -> usize {
        self.rounds.read().expect("round store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 12 random alphanumerics; opaque, unguessable enough for a round handle.
fn mint_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ROUND_TOKEN_LEN)
        .map(char::from)
        .collect()
}
