use crate::client::AssistantClient;

/// Fixed text stored as the answer when the assistant cannot be reached or
/// its response cannot be decoded.
pub const FALLBACK_ANSWER: &str = "Failed to get an answer from the assistant.";

/// One question/answer cycle with the assistant endpoint.
///
/// Overlapping asks are not serialized: each `begin` marks the exchange
/// pending, each `settle` stores an answer and clears the flag, and whichever
/// settlement happens last owns the displayed answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AskExchange {
    question: String,
    answer: String,
    pending: bool,
}

impl AskExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outgoing question and mark the exchange pending. Empty
    /// questions are accepted; they are forwarded as-is.
    pub fn begin(&mut self, question: impl Into<String>) {
        self.question = question.into();
        self.pending = true;
    }

    /// Store an answer and clear the pending flag, whatever the outcome of
    /// the request was.
    pub fn settle(&mut self, answer: impl Into<String>) {
        self.answer = answer.into();
        self.pending = false;
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    /// Drive one full cycle: begin, forward the question, settle with the
    /// client's answer or with `FALLBACK_ANSWER` on any failure. The pending
    /// flag is cleared on every path out of this method.
    pub async fn ask(&mut self, client: &dyn AssistantClient, question: &str) -> &str {
        self.begin(question);

        match client.ask(question).await {
            Ok(answer) => self.settle(answer),
            Err(error) => {
                tracing::warn!(error = %error, "assistant request failed");
                self.settle(FALLBACK_ANSWER);
            }
        }

        self.answer()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{anyhow, Result};
    use async_trait::async_trait;

    use crate::client::AssistantClient;

    use super::{AskExchange, FALLBACK_ANSWER};

    struct CannedClient {
        reply: &'static str,
        questions: Mutex<Vec<String>>,
    }

    impl CannedClient {
        fn new(reply: &'static str) -> Self {
            Self { reply, questions: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl AssistantClient for CannedClient {
        async fn ask(&self, question: &str) -> Result<String> {
            self.questions.lock().expect("question log lock").push(question.to_string());
            Ok(self.reply.to_string())
        }
    }

    struct UnreachableClient;

    #[async_trait]
    impl AssistantClient for UnreachableClient {
        async fn ask(&self, _question: &str) -> Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    #[tokio::test]
    async fn successful_ask_stores_the_answer_and_clears_pending() {
        let client = CannedClient::new("Alice covers CRM.");
        let mut exchange = AskExchange::new();

        let answer = exchange.ask(&client, "who covers CRM?").await.to_string();

        assert_eq!(answer, "Alice covers CRM.");
        assert_eq!(exchange.question(), "who covers CRM?");
        assert!(!exchange.is_pending());
    }

    #[tokio::test]
    async fn failed_ask_stores_the_fallback_and_clears_pending() {
        let mut exchange = AskExchange::new();

        let answer = exchange.ask(&UnreachableClient, "hi").await.to_string();

        assert_eq!(answer, FALLBACK_ANSWER);
        assert!(!exchange.is_pending(), "pending must clear even when the request fails");
    }

    #[tokio::test]
    async fn empty_questions_are_forwarded_unchanged() {
        let client = CannedClient::new("ask me something");
        let mut exchange = AskExchange::new();

        exchange.ask(&client, "").await;

        let seen = client.questions.lock().expect("question log lock").clone();
        assert_eq!(seen, vec![String::new()]);
    }

    #[test]
    fn overlapping_settlements_let_the_last_response_win() {
        let mut exchange = AskExchange::new();

        exchange.begin("first");
        exchange.begin("second");

        // Responses may land in either order; the later one owns the display.
        exchange.settle("answer to first");
        assert!(!exchange.is_pending());
        exchange.settle("answer to second");

        assert_eq!(exchange.answer(), "answer to second");
        assert_eq!(exchange.question(), "second");
        assert!(!exchange.is_pending());
    }

    #[test]
    fn a_fresh_exchange_has_no_answer_and_is_not_pending() {
        let exchange = AskExchange::new();
        assert!(!exchange.has_answer());
        assert!(!exchange.is_pending());
    }
}
