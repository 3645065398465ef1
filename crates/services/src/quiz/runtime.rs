use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use quiz_core::Intent;

use super::controller::QuizController;
use super::view::QuizSnapshot;

const INTENT_BUFFER: usize = 32;

impl QuizController {
    /// Drive the session until the intent channel closes.
    ///
    /// User intents and countdown ticks are serialized through this loop, so a
    /// tick can never interleave with an answer. Every processed intent
    /// publishes a fresh snapshot.
    pub async fn run(
        mut self,
        mut intents: mpsc::Receiver<Intent>,
        snapshots: watch::Sender<QuizSnapshot>,
    ) -> Self {
        snapshots.send_replace(self.snapshot());
        loop {
            let intent = tokio::select! {
                biased;
                received = intents.recv() => match received {
                    Some(intent) => intent,
                    None => break,
                },
                () = self.next_tick() => Intent::Tick,
            };
            let snapshot = self.dispatch(intent).await;
            snapshots.send_replace(snapshot);
        }
        log::debug!("intent channel closed, quiz loop stopping");
        self
    }

    /// Move the controller onto its own task and return a handle to it.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn(self) -> QuizHandle {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(self.snapshot());
        let task = tokio::spawn(self.run(intent_rx, snapshot_tx));
        QuizHandle {
            intents: intent_tx,
            snapshots: snapshot_rx,
            task,
        }
    }
}

/// Front end to a spawned quiz loop.
#[derive(Debug)]
pub struct QuizHandle {
    intents: mpsc::Sender<Intent>,
    snapshots: watch::Receiver<QuizSnapshot>,
    task: JoinHandle<QuizController>,
}

impl QuizHandle {
    /// Queue an intent. Returns `false` if the loop has stopped.
    pub async fn send(&self, intent: Intent) -> bool {
        self.intents.send(intent).await.is_ok()
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.snapshots.clone()
    }

    /// Close the intent channel and wait for the loop to hand back the
    /// controller.
    ///
    /// # Errors
    ///
    /// Returns the join error if the loop task panicked or was aborted.
    pub async fn shutdown(self) -> Result<QuizController, tokio::task::JoinError> {
        drop(self.intents);
        self.task.await
    }
}
