//! Scripted `Api` double shared by the controller tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::http::{Api, Method};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    Mutate(String, Value, Method),
    Delete(String),
}

/// Replays queued responses in order and records every call.
#[derive(Default)]
pub struct FakeApi {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Result<Value, ApiError>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn ok(self, value: Value) -> Self {
        self.respond(Ok(value))
    }

    pub fn status(self, status: u16) -> Self {
        self.respond(Err(ApiError::Status {
            status,
            body: String::new(),
        }))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, call: Call) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }
}

#[async_trait]
impl Api for FakeApi {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        self.next(Call::Get(url.to_string()))
    }

    async fn mutate(&self, url: &str, body: Value, method: Method) -> Result<Value, ApiError> {
        self.next(Call::Mutate(url.to_string(), body, method))
    }

    async fn delete(&self, url: &str) -> Result<(), ApiError> {
        self.next(Call::Delete(url.to_string())).map(|_| ())
    }
}
