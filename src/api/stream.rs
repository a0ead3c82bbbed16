//! Chat Stream Consumer
//!
//! Turns the chunked `POST /chat/stream` response into an ordered sequence of
//! text fragments. The wire format is one marked line per fragment:
//!
//! ```text
//! data: <fragment>
//! ```
//!
//! with the literal payload `[DONE]` as the end-of-stream sentinel. Decoding
//! is split from transport: [`FragmentDecoder`] is a pure byte-buffering line
//! splitter the chat session feeds from [`StreamReader`] chunks, so fragment
//! extraction is testable without a browser.

use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

/// Marker prefix identifying a fragment-bearing line.
pub const DATA_PREFIX: &str = "data: ";

/// Reserved payload signalling end of stream; never displayed.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One decoded unit of the chunked response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment to append to the in-flight assistant message.
    Fragment(String),
    /// The completion sentinel was observed; stop reading.
    Done,
}

/// Incremental decoder for the chunked chat response.
///
/// Bytes are buffered until a line boundary so that lines (and multi-byte
/// UTF-8 sequences inside them) split across transport chunks reassemble
/// correctly. Fragments come out in exact arrival order.
#[derive(Debug, Default)]
pub struct FragmentDecoder {
    buf: Vec<u8>,
}

impl FragmentDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk, returning every event completed by it.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<StreamEvent> {
        self.buf.extend_from_slice(bytes);

        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            // Drop the newline itself before decoding
            let line = String::from_utf8_lossy(&line[..line.len() - 1]);
            if let Some(event) = Self::parse_line(&line) {
                events.push(event);
            }
        }
        events
    }

    /// Flush a trailing line left unterminated when the transport ends.
    pub fn finish(&mut self) -> Vec<StreamEvent> {
        if self.buf.is_empty() {
            return Vec::new();
        }
        let line = String::from_utf8_lossy(&std::mem::take(&mut self.buf)).into_owned();
        Self::parse_line(&line).into_iter().collect()
    }

    /// Parse a single line; lines without the marker are ignored.
    fn parse_line(line: &str) -> Option<StreamEvent> {
        let payload = line.trim_end_matches('\r').strip_prefix(DATA_PREFIX)?.trim();
        if payload.is_empty() {
            None
        } else if payload == DONE_SENTINEL {
            Some(StreamEvent::Done)
        } else {
            Some(StreamEvent::Fragment(payload.to_string()))
        }
    }
}

/// Handle to the in-flight chunked response body.
///
/// Cloning shares the same underlying browser reader, so the chat page can
/// keep a handle for cancellation while the read loop owns another.
#[derive(Clone)]
pub struct StreamReader {
    inner: ReadableStreamDefaultReader,
}

impl StreamReader {
    /// Read the next chunk of raw bytes. `Ok(None)` means the transport is
    /// done (no more bytes, or the reader was cancelled).
    pub async fn next_chunk(&self) -> Result<Option<Vec<u8>>, String> {
        let result = JsFuture::from(self.inner.read())
            .await
            .map_err(|e| format!("Stream read error: {:?}", e))?;

        let done = js_sys::Reflect::get(&result, &JsValue::from_str("done"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        if done {
            return Ok(None);
        }

        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|e| format!("Stream read error: {:?}", e))?;
        Ok(Some(js_sys::Uint8Array::new(&value).to_vec()))
    }

    /// Cancel the in-flight read. The next pending `next_chunk` resolves as
    /// done; no further bytes are delivered.
    pub fn cancel(&self) {
        let _ = self.inner.cancel();
    }
}

/// Open the streaming chat endpoint and hand back a reader over its body.
pub async fn open_chat_stream(message: &str) -> Result<StreamReader, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest {
        message: String,
    }

    let api_base = super::client::get_api_base();

    let response = Request::post(&format!("{}/chat/stream", api_base))
        .json(&ChatRequest {
            message: message.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: status {}", response.status()));
    }

    let body = response
        .body()
        .ok_or_else(|| "No response body available".to_string())?;

    let reader = body
        .get_reader()
        .unchecked_into::<ReadableStreamDefaultReader>();

    Ok(StreamReader { inner: reader })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(events: &[StreamEvent]) -> String {
        events
            .iter()
            .map_while(|e| match e {
                StreamEvent::Fragment(text) => Some(text.as_str()),
                StreamEvent::Done => None,
            })
            .collect()
    }

    #[test]
    fn fragments_concatenate_in_delivery_order() {
        let mut decoder = FragmentDecoder::new();
        let mut events = decoder.push(b"data: Hel\n");
        events.extend(decoder.push(b"data: lo!\ndata: [DONE]\n"));

        assert_eq!(
            events,
            vec![
                StreamEvent::Fragment("Hel".to_string()),
                StreamEvent::Fragment("lo!".to_string()),
                StreamEvent::Done,
            ]
        );
        assert_eq!(fragments(&events), "Hello!");
    }

    #[test]
    fn sentinel_is_not_part_of_content() {
        let mut decoder = FragmentDecoder::new();
        let events = decoder.push(b"data: hi\ndata: [DONE]\ndata: late\n");
        // Everything decodes, but the consumer stops at Done: content
        // excludes both the sentinel and anything after it.
        assert_eq!(events[1], StreamEvent::Done);
        assert_eq!(fragments(&events), "hi");
    }

    #[test]
    fn line_split_across_chunks_reassembles() {
        let mut decoder = FragmentDecoder::new();
        assert!(decoder.push(b"da").is_empty());
        assert!(decoder.push(b"ta: Hel").is_empty());
        let events = decoder.push(b"lo\n");
        assert_eq!(events, vec![StreamEvent::Fragment("Hello".to_string())]);
    }

    #[test]
    fn multibyte_utf8_split_across_chunks_reassembles() {
        let bytes = "data: héllo\n".as_bytes();
        // Split inside the two-byte 'é'
        let split = bytes.iter().position(|&b| b == 0xc3).unwrap() + 1;

        let mut decoder = FragmentDecoder::new();
        assert!(decoder.push(&bytes[..split]).is_empty());
        let events = decoder.push(&bytes[split..]);
        assert_eq!(events, vec![StreamEvent::Fragment("héllo".to_string())]);
    }

    #[test]
    fn unmarked_and_empty_lines_are_ignored() {
        let mut decoder = FragmentDecoder::new();
        let events = decoder.push(b"\nnoise\ndata: \ndata: ok\n");
        assert_eq!(events, vec![StreamEvent::Fragment("ok".to_string())]);
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let mut decoder = FragmentDecoder::new();
        let events = decoder.push(b"data: one\r\ndata: [DONE]\r\n");
        assert_eq!(
            events,
            vec![StreamEvent::Fragment("one".to_string()), StreamEvent::Done]
        );
    }

    #[test]
    fn finish_flushes_unterminated_trailing_line() {
        let mut decoder = FragmentDecoder::new();
        assert!(decoder.push(b"data: tail").is_empty());
        assert_eq!(
            decoder.finish(),
            vec![StreamEvent::Fragment("tail".to_string())]
        );
        // A second finish is a no-op
        assert!(decoder.finish().is_empty());
    }

    #[test]
    fn finish_on_clean_stream_is_empty() {
        let mut decoder = FragmentDecoder::new();
        decoder.push(b"data: all\n");
        assert!(decoder.finish().is_empty());
    }
}
