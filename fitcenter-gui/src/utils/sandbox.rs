use iced::futures::StreamExt;
use iced::Task;

use iced_runtime::{task::into_stream, Action};

use crate::login::{LoginPanel, Message};
use crate::services::api::Role;

/// Drives a [`LoginPanel`] through its update loop, feeding produced
/// messages back in and recording the session hand-offs the parent would
/// consume.
pub struct Sandbox {
    panel: LoginPanel,
    authenticated: Vec<(Role, i64)>,
}

impl Sandbox {
    pub fn new(panel: LoginPanel) -> Self {
        Self {
            panel,
            authenticated: Vec::new(),
        }
    }

    pub fn panel(&self) -> &LoginPanel {
        &self.panel
    }

    /// Hand-offs recorded so far, in order.
    pub fn authenticated(&self) -> Vec<(Role, i64)> {
        self.authenticated.clone()
    }

    pub async fn update(mut self, message: Message) -> Self {
        let task = self.feed(message);
        self.drive(task).await
    }

    pub async fn drive(mut self, task: Task<Message>) -> Self {
        let mut tasks = vec![task];
        while let Some(task) = tasks.pop() {
            if let Some(mut stream) = into_stream(task) {
                while let Some(action) = stream.next().await {
                    if let Action::Output(msg) = action {
                        tasks.push(self.feed(msg));
                    }
                }
            }
        }
        self
    }

    fn feed(&mut self, message: Message) -> Task<Message> {
        if let Message::Authenticated(role, id) = &message {
            self.authenticated.push((*role, *id));
        }
        self.panel.update(message)
    }
}
