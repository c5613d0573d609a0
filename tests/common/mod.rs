#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use tokio::sync::Notify;
use trivia_client::error::ApiError;
use trivia_client::{Answer, AnswerResult, ScoringClient};

/// 按顺序返回预设响应的判分客户端，并记录每次请求
pub struct StubScoringClient {
    responses: Mutex<VecDeque<Result<Vec<AnswerResult>, ApiError>>>,
    calls: Mutex<Vec<Vec<Answer>>>,
    gate: Option<Notify>,
}

impl StubScoringClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// 请求会一直挂起，直到 `release()` 被调用
    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Self::new()
        }
    }

    pub fn respond(self, results: Vec<AnswerResult>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(results));
        self
    }

    pub fn fail_with_status(self, status: u16) -> Self {
        self.responses.lock().unwrap().push_back(Err(ApiError::BadStatus {
            endpoint: "/checkanswers".to_string(),
            status,
        }));
        self
    }

    pub fn fail_with_network_error(self) -> Self {
        self.responses.lock().unwrap().push_back(Err(ApiError::RequestFailed {
            endpoint: "/checkanswers".to_string(),
            source: Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        }));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<Vec<Answer>> {
        self.calls.lock().unwrap().clone()
    }
}

impl ScoringClient for StubScoringClient {
    async fn check_answers(&self, answers: &[Answer]) -> Result<Vec<AnswerResult>, ApiError> {
        self.calls.lock().unwrap().push(answers.to_vec());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// 生成 N 条结果，前 K 条答对
pub fn scored_results(correct: usize, total: usize) -> Vec<AnswerResult> {
    (0..total)
        .map(|i| AnswerResult::new(format!("q{}", i + 1), i < correct, format!("answer {}", i + 1)))
        .collect()
}
