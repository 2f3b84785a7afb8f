use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::services::api::{ApiError, Backend, RegistrationForm, Role};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(RegistrationForm),
    GetById(Role, i64),
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Created(i64),
    Entity(Value),
    Err(ApiError),
}

/// Scripted [`Backend`] for tests: responses are served in order, and a
/// scripted call body, when present, is asserted against the actual call.
#[derive(Debug)]
pub struct MockBackend {
    responses: Mutex<VecDeque<(Option<Call>, MockResponse)>>,
    calls: Mutex<Vec<Call>>,
}

impl MockBackend {
    pub fn new(responses: Vec<(Option<Call>, MockResponse)>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("Failed to unlock").clone()
    }

    fn respond(&self, call: Call) -> MockResponse {
        self.calls.lock().expect("Failed to unlock").push(call.clone());
        let (expected, response) = self
            .responses
            .lock()
            .expect("Failed to unlock")
            .pop_front()
            .expect("Mock backend must have all calls scripted in the right order");
        if let Some(expected) = expected {
            assert_eq!(expected, call);
        }
        response
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn create(&self, form: &RegistrationForm) -> Result<i64, ApiError> {
        match self.respond(Call::Create(form.clone())) {
            MockResponse::Created(id) => Ok(id),
            MockResponse::Err(e) => Err(e),
            response => panic!("Unexpected scripted response for create: {:?}", response),
        }
    }

    async fn get_by_id(&self, role: Role, id: i64) -> Result<Value, ApiError> {
        match self.respond(Call::GetById(role, id)) {
            MockResponse::Entity(entity) => Ok(entity),
            MockResponse::Err(e) => Err(e),
            response => panic!("Unexpected scripted response for get_by_id: {:?}", response),
        }
    }
}
