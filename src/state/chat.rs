//! Chat Session
//!
//! Explicit state machine for the chat page: a linear transcript of messages
//! plus the submission lifecycle `Idle -> Sending -> Streaming -> Idle`. The
//! transcript is append-only except for the single in-flight streaming
//! message, whose content is replaced after every decoded fragment.

use chrono::{DateTime, Local};
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api;
use crate::api::stream::{FragmentDecoder, StreamEvent, StreamReader};

/// Seeded into every new transcript.
pub const WELCOME_TEXT: &str = "Hello! I'm your Campus Admin AI Assistant. I can help you \
add students, manage records, and answer questions about student data. Try asking me to \
'add a new student' or 'show me student statistics'.";

/// Shown when the blocking chat call fails.
pub const CHAT_FAILURE_TEXT: &str = "Sorry, I encountered an error. Please try again.";

/// Shown when the stream fails before any fragment arrived.
pub const STREAM_FAILURE_TEXT: &str =
    "Sorry, I encountered an error with streaming. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    /// Set when a streamed reply was cut short by a transport failure, so a
    /// partial answer is distinguishable from a complete one.
    pub truncated: bool,
}

/// Submission lifecycle. A new submission is only accepted from `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatPhase {
    Idle,
    /// Request issued, no stream established yet (covers the whole blocking
    /// call in non-streaming mode).
    Sending,
    /// Chunked response open, fragments being applied.
    Streaming,
}

/// Per-page chat state. Cloning shares the same session.
#[derive(Clone)]
pub struct ChatSession {
    pub messages: RwSignal<Vec<Message>>,
    pub phase: RwSignal<ChatPhase>,
    /// Whether submissions use the streaming endpoint.
    pub streaming_mode: RwSignal<bool>,
    reader: Rc<RefCell<Option<StreamReader>>>,
    cancelled: Rc<Cell<bool>>,
    next_id: Rc<Cell<u64>>,
}

/// What a transport read did to the in-flight reply.
#[derive(Clone, Debug, PartialEq, Eq)]
enum StreamOutcome {
    /// Keep reading.
    Continue,
    /// `[DONE]` sentinel seen. Remaining transport bytes are irrelevant.
    Done,
    /// Transport closed without the sentinel; any buffered unterminated line
    /// has been flushed into the content.
    Closed,
    /// Read cancelled locally. Buffered bytes that never formed a complete
    /// line are dropped, so no update lands after the cancel.
    Cancelled,
    /// Transport failed before any fragment was applied.
    Failed,
    /// Transport failed after partial content was applied.
    Truncated,
}

/// Accumulates decoded fragments from a sequence of transport reads. Pure so
/// the termination rules are testable without a browser transport; the async
/// reader loop in [`ChatSession::run_stream`] just feeds it.
struct StreamProgress {
    decoder: FragmentDecoder,
    content: String,
}

impl StreamProgress {
    fn new() -> Self {
        Self {
            decoder: FragmentDecoder::new(),
            content: String::new(),
        }
    }

    fn content(&self) -> &str {
        &self.content
    }

    /// Apply one read result. `cancelled` is whether the user stopped the
    /// stream, which turns the resulting end-of-transport into a no-op
    /// instead of a final flush.
    fn step(&mut self, read: Result<Option<Vec<u8>>, String>, cancelled: bool) -> StreamOutcome {
        match read {
            Ok(Some(bytes)) => {
                for event in self.decoder.push(&bytes) {
                    match event {
                        StreamEvent::Fragment(text) => self.content.push_str(&text),
                        StreamEvent::Done => return StreamOutcome::Done,
                    }
                }
                StreamOutcome::Continue
            }
            Ok(None) => {
                if cancelled {
                    return StreamOutcome::Cancelled;
                }
                for event in self.decoder.finish() {
                    if let StreamEvent::Fragment(text) = event {
                        self.content.push_str(&text);
                    }
                }
                StreamOutcome::Closed
            }
            Err(_) => {
                if self.content.is_empty() {
                    StreamOutcome::Failed
                } else {
                    StreamOutcome::Truncated
                }
            }
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let session = Self {
            messages: create_rw_signal(Vec::new()),
            phase: create_rw_signal(ChatPhase::Idle),
            streaming_mode: create_rw_signal(false),
            reader: Rc::new(RefCell::new(None)),
            cancelled: Rc::new(Cell::new(false)),
            next_id: Rc::new(Cell::new(0)),
        };
        session.push_message(WELCOME_TEXT.to_string(), Sender::Assistant);
        session
    }

    /// Submit a user message. Ignored while a request is outstanding or when
    /// the trimmed input is empty.
    pub fn submit(&self, input: &str) {
        let text = input.trim();
        if text.is_empty() || self.phase.get_untracked() != ChatPhase::Idle {
            return;
        }

        if self.streaming_mode.get_untracked() {
            self.send_streaming(text.to_string());
        } else {
            self.send_blocking(text.to_string());
        }
    }

    /// Stop the in-flight stream. Already-applied partial content stays, but
    /// nothing further is applied, not even bytes already buffered.
    pub fn cancel_stream(&self) {
        if let Some(reader) = self.reader.borrow().as_ref() {
            self.cancelled.set(true);
            reader.cancel();
        }
    }

    fn send_blocking(&self, message: String) {
        self.phase.set(ChatPhase::Sending);
        self.push_message(message.clone(), Sender::User);

        let session = self.clone();
        spawn_local(async move {
            match api::send_chat(&message).await {
                Ok(reply) => {
                    session.push_message(reply, Sender::Assistant);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Chat error: {}", e).into());
                    session.push_message(CHAT_FAILURE_TEXT.to_string(), Sender::Assistant);
                }
            }
            session.phase.set(ChatPhase::Idle);
        });
    }

    fn send_streaming(&self, message: String) {
        self.phase.set(ChatPhase::Sending);
        self.push_message(message.clone(), Sender::User);
        let placeholder = self.push_message(String::new(), Sender::Assistant);

        let session = self.clone();
        spawn_local(async move {
            session.run_stream(&message, placeholder).await;
            session.reader.borrow_mut().take();
            session.phase.set(ChatPhase::Idle);
        });
    }

    /// Drive one streamed response into the placeholder message.
    async fn run_stream(&self, message: &str, placeholder: u64) {
        let reader = match api::stream::open_chat_stream(message).await {
            Ok(reader) => reader,
            Err(e) => {
                web_sys::console::error_1(&format!("Streaming error: {}", e).into());
                self.set_content(placeholder, STREAM_FAILURE_TEXT);
                return;
            }
        };

        *self.reader.borrow_mut() = Some(reader.clone());
        self.cancelled.set(false);
        self.phase.set(ChatPhase::Streaming);

        let mut progress = StreamProgress::new();
        let mut applied = 0;

        loop {
            let read = reader.next_chunk().await;
            if let Err(e) = &read {
                web_sys::console::error_1(&format!("Streaming error: {}", e).into());
            }

            let outcome = progress.step(read, self.cancelled.get());
            if progress.content().len() > applied {
                applied = progress.content().len();
                self.set_content(placeholder, progress.content());
            }

            match outcome {
                StreamOutcome::Continue => {}
                StreamOutcome::Done => {
                    // Sentinel ends the stream even if more bytes remain
                    // unread on the transport.
                    reader.cancel();
                    break;
                }
                StreamOutcome::Closed | StreamOutcome::Cancelled => break,
                StreamOutcome::Failed => {
                    self.set_content(placeholder, STREAM_FAILURE_TEXT);
                    break;
                }
                StreamOutcome::Truncated => {
                    // Keep the partial text, but mark the reply so a cut
                    // answer does not look complete.
                    self.mark_truncated(placeholder);
                    break;
                }
            }
        }
    }

    fn push_message(&self, content: String, sender: Sender) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.messages.update(|messages| {
            messages.push(Message {
                id,
                content,
                sender,
                timestamp: Local::now(),
                truncated: false,
            });
        });
        id
    }

    fn set_content(&self, id: u64, content: &str) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.content = content.to_string();
            }
        });
    }

    fn mark_truncated(&self, id: u64) {
        self.messages.update(|messages| {
            if let Some(message) = messages.iter_mut().find(|m| m.id == id) {
                message.truncated = true;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_before_any_fragment_reports_failed() {
        let mut progress = StreamProgress::new();

        let outcome = progress.step(Err("network error".to_string()), false);

        assert_eq!(outcome, StreamOutcome::Failed);
        assert_eq!(progress.content(), "");
    }

    #[test]
    fn failure_after_fragments_keeps_partial_content() {
        let mut progress = StreamProgress::new();

        assert_eq!(
            progress.step(Ok(Some(b"data: Hello, \ndata: world\n".to_vec())), false),
            StreamOutcome::Continue
        );
        let outcome = progress.step(Err("connection reset".to_string()), false);

        assert_eq!(outcome, StreamOutcome::Truncated);
        assert_eq!(progress.content(), "Hello, world");
    }

    #[test]
    fn cancel_discards_buffered_unterminated_line() {
        let mut progress = StreamProgress::new();

        // An incomplete line has produced no fragment yet; stopping the
        // stream must not flush it afterwards.
        assert_eq!(
            progress.step(Ok(Some(b"data: Hel".to_vec())), false),
            StreamOutcome::Continue
        );
        let outcome = progress.step(Ok(None), true);

        assert_eq!(outcome, StreamOutcome::Cancelled);
        assert_eq!(progress.content(), "");
    }

    #[test]
    fn cancel_after_fragments_keeps_applied_content() {
        let mut progress = StreamProgress::new();

        progress.step(Ok(Some(b"data: partial answer\ndata: tail".to_vec())), false);
        let outcome = progress.step(Ok(None), true);

        assert_eq!(outcome, StreamOutcome::Cancelled);
        assert_eq!(progress.content(), "partial answer");
    }

    #[test]
    fn clean_close_flushes_unterminated_line() {
        let mut progress = StreamProgress::new();

        progress.step(Ok(Some(b"data: Hel".to_vec())), false);
        let outcome = progress.step(Ok(None), false);

        assert_eq!(outcome, StreamOutcome::Closed);
        assert_eq!(progress.content(), "Hel");
    }

    #[test]
    fn sentinel_ends_stream_before_later_fragments() {
        let mut progress = StreamProgress::new();

        let outcome = progress.step(
            Ok(Some(b"data: Hi\ndata: [DONE]\ndata: late\n".to_vec())),
            false,
        );

        assert_eq!(outcome, StreamOutcome::Done);
        assert_eq!(progress.content(), "Hi");
    }
}
