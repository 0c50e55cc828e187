//! Q&A over the RFP document — canned answers, keyword matching, transcript.

pub mod bank;
pub mod model;
pub mod responder;

pub use bank::{Answer, AnswerBank, QuestionSuggestion, default_bank, suggested_questions};
pub use model::{Message, Role, SourceRef, TranscriptEvent};
pub use responder::{AnswerSource, CannedAnswerSource, QueryResponder, ResponderConfig};
