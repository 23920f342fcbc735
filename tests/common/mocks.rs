use async_trait::async_trait;
use plantcare_smoke::{
    Error, Result,
    api::{ChatBackend, ChatTurn},
};
use std::sync::{Arc, Mutex};

/// Scripted chat backend for driving the runner without a socket.
/// Replies are consumed front-to-back, one per question. Tests that
/// need the recorded requests clone the `requests` handle before the
/// mock moves into the runner.
#[derive(Debug)]
pub struct MockChatBackend {
    pub replies: Arc<Mutex<Vec<Result<String>>>>,
    pub requests: Arc<Mutex<Vec<(String, Vec<ChatTurn>)>>>,
}

impl MockChatBackend {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_replies(self, replies: Vec<Result<String>>) -> Self {
        *self.replies.lock().unwrap() = replies;
        self
    }
}

#[async_trait]
impl ChatBackend for MockChatBackend {
    async fn send_chat(&self, message: &str, history: &[ChatTurn]) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((message.to_string(), history.to_vec()));

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::backend("No more scripted replies"));
        }

        replies.remove(0)
    }
}
