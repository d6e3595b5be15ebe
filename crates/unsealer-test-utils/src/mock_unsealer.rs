// SPDX-FileCopyrightText: 2026 Unsealer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock unseal backend for deterministic testing.
//!
//! `MockUnsealer` implements `Unsealer` with pre-configured outcomes and
//! records every key it receives, so tests can assert how many attempts were
//! made and in what order without a vault binary.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use unsealer_core::{UnsealError, UnsealKey, UnsealOutput, Unsealer};

/// A scripted outcome for one unseal call.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// The attempt ran and exited with `exit_code`.
    Exit { exit_code: i32, stderr: String },
    /// The backend could not be started.
    SpawnFailure,
}

impl MockOutcome {
    pub fn accepted() -> Self {
        MockOutcome::Exit {
            exit_code: 0,
            stderr: String::new(),
        }
    }

    pub fn rejected(exit_code: i32, stderr: impl Into<String>) -> Self {
        MockOutcome::Exit {
            exit_code,
            stderr: stderr.into(),
        }
    }
}

/// A mock unseal backend that replays scripted outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty every
/// attempt is accepted.
pub struct MockUnsealer {
    outcomes: Arc<Mutex<VecDeque<MockOutcome>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockUnsealer {
    /// Create a mock that accepts every key.
    pub fn new() -> Self {
        Self::with_outcomes(Vec::new())
    }

    /// Create a mock pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::from(outcomes))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Keys received so far, in call order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn next_outcome(&self) -> MockOutcome {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(MockOutcome::accepted)
    }
}

impl Default for MockUnsealer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Unsealer for MockUnsealer {
    fn name(&self) -> &str {
        "mock-unsealer"
    }

    async fn unseal(&self, key: &UnsealKey) -> Result<UnsealOutput, UnsealError> {
        self.calls.lock().await.push(key.expose().to_string());

        match self.next_outcome().await {
            MockOutcome::Exit { exit_code, stderr } => Ok(UnsealOutput {
                exit_code,
                stdout: String::new(),
                stderr,
            }),
            MockOutcome::SpawnFailure => Err(UnsealError::ProcessSpawn {
                binary: "mock-vault".to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_queue_accepts() {
        let mock = MockUnsealer::new();
        let out = mock.unseal(&UnsealKey::new("a")).await.unwrap();
        assert!(out.success());
        assert_eq!(mock.calls().await, vec!["a"]);
    }

    #[tokio::test]
    async fn outcomes_replay_in_order() {
        let mock = MockUnsealer::with_outcomes(vec![
            MockOutcome::rejected(1, "bad"),
            MockOutcome::SpawnFailure,
        ]);
        let first = mock.unseal(&UnsealKey::new("a")).await.unwrap();
        assert_eq!(first.exit_code, 1);
        assert_eq!(first.stderr, "bad");
        assert!(mock.unseal(&UnsealKey::new("b")).await.is_err());
        assert_eq!(mock.call_count().await, 2);
    }
}
