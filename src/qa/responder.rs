//! Query responder — the append-only transcript and the submit state machine.
//!
//! Per submitted question: Idle → Pending (user message appended, loading
//! flag up) → Idle (assistant message appended after the simulated latency).
//! A submit arriving while a question is in flight is rejected.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{Mutex, RwLock, broadcast};
use tracing::{debug, info};

use crate::error::QueryError;

use super::bank::{Answer, AnswerBank};
use super::model::{Message, TranscriptEvent};

/// Event broadcast capacity.
const EVENT_CAPACITY: usize = 256;

/// Where answers come from.
///
/// The seam where a real retrieval backend would plug in; the demo ships
/// [`CannedAnswerSource`].
#[async_trait]
pub trait AnswerSource: Send + Sync {
    /// Produce the answer for a non-empty question.
    async fn answer(&self, question: &str) -> Result<Answer, QueryError>;
}

/// Responder tuning.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    /// Simulated retrieval latency before an answer is produced.
    pub response_delay: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            response_delay: Duration::from_millis(1500),
        }
    }
}

/// Canned answers behind a simulated delay — the stand-in retrieval backend.
pub struct CannedAnswerSource {
    bank: AnswerBank,
    config: ResponderConfig,
    rng: Mutex<StdRng>,
}

impl CannedAnswerSource {
    /// Create a source seeded from entropy.
    pub fn new(bank: AnswerBank, config: ResponderConfig) -> Self {
        Self {
            bank,
            config,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a source with a pinned RNG seed so the random fallback is
    /// deterministic.
    pub fn with_seed(bank: AnswerBank, config: ResponderConfig, seed: u64) -> Self {
        Self {
            bank,
            config,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl AnswerSource for CannedAnswerSource {
    async fn answer(&self, question: &str) -> Result<Answer, QueryError> {
        tokio::time::sleep(self.config.response_delay).await;
        let mut rng = self.rng.lock().await;
        Ok(self.bank.select(question, &mut *rng).clone())
    }
}

/// Owns the transcript and serializes question/answer exchanges.
pub struct QueryResponder {
    source: Arc<dyn AnswerSource>,
    transcript: RwLock<Vec<Message>>,
    pending: AtomicBool,
    tx: broadcast::Sender<TranscriptEvent>,
}

impl QueryResponder {
    /// Create a responder with an empty transcript.
    pub fn new(source: Arc<dyn AnswerSource>) -> Arc<Self> {
        Self::build(source, Vec::new())
    }

    /// Create a responder whose transcript opens with a system greeting.
    pub fn with_greeting(source: Arc<dyn AnswerSource>, greeting: impl Into<String>) -> Arc<Self> {
        Self::build(source, vec![Message::system(greeting)])
    }

    fn build(source: Arc<dyn AnswerSource>, transcript: Vec<Message>) -> Arc<Self> {
        let (tx, _rx) = broadcast::channel(EVENT_CAPACITY);
        Arc::new(Self {
            source,
            transcript: RwLock::new(transcript),
            pending: AtomicBool::new(false),
            tx,
        })
    }

    /// Subscribe to transcript events. Each observer calls this.
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEvent> {
        self.tx.subscribe()
    }

    /// Whether a question is currently awaiting its answer.
    pub fn is_loading(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Snapshot of the transcript, oldest first.
    pub async fn transcript(&self) -> Vec<Message> {
        self.transcript.read().await.clone()
    }

    /// Number of messages in the transcript.
    pub async fn message_count(&self) -> usize {
        self.transcript.read().await.len()
    }

    /// Submit a question.
    ///
    /// Appends the user message immediately, raises the loading flag, awaits
    /// the answer source, appends exactly one assistant message with the
    /// answer's content and sources, and returns it.
    ///
    /// Empty or whitespace-only text is rejected with
    /// [`QueryError::EmptyQuestion`]; a submit while another question is in
    /// flight is rejected with [`QueryError::AnswerPending`]. Neither
    /// rejection touches the transcript.
    pub async fn submit(&self, text: &str) -> Result<Message, QueryError> {
        let question = text.trim();
        if question.is_empty() {
            debug!("Rejected empty question");
            return Err(QueryError::EmptyQuestion);
        }

        if self.pending.swap(true, Ordering::SeqCst) {
            debug!("Rejected question while another is in flight");
            return Err(QueryError::AnswerPending);
        }

        let asked = Message::user(question);
        info!(id = %asked.id, "Question submitted");
        self.append(asked).await;

        let answer = match self.source.answer(question).await {
            Ok(answer) => answer,
            Err(e) => {
                self.pending.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        let reply = Message::assistant(answer.content).with_sources(answer.sources);
        self.append(reply.clone()).await;
        self.pending.store(false, Ordering::SeqCst);
        info!(id = %reply.id, sources = reply.sources.len(), "Answer appended");

        Ok(reply)
    }

    async fn append(&self, message: Message) {
        {
            let mut transcript = self.transcript.write().await;
            transcript.push(message.clone());
        }
        // Broadcast — ok if no receivers are listening yet
        let _ = self.tx.send(TranscriptEvent::MessageAppended { message });
    }
}
