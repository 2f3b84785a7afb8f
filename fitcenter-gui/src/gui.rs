use std::sync::Arc;

use iced::Task;
use tracing::{error, info};

use fitcenter_ui::widget::Element;

use crate::{
    app::{self, App},
    config::Config,
    login::{self, LoginPanel},
    services::api::{Backend, HttpBackend},
};

pub struct GUI {
    state: State,
    backend: Arc<dyn Backend>,
}

enum State {
    Login(Box<LoginPanel>),
    App(Box<App>),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Login(Box<login::Message>),
    App(Box<app::Message>),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

impl GUI {
    pub fn new(config: Config) -> (GUI, Task<Message>) {
        let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(config.backend_api_url()));
        (
            Self {
                state: State::Login(Box::new(LoginPanel::new(backend.clone()))),
                backend,
            },
            Task::perform(ctrl_c(), |_| Message::CtrlC),
        )
    }

    pub fn title(&self) -> String {
        match &self.state {
            State::Login(..) => "Fitness Center".to_string(),
            State::App(app) => format!("Fitness Center - {}", app.role()),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC) => {
                self.stop();
                iced::exit()
            }
            (State::Login(panel), Message::Login(msg)) => match *msg {
                login::Message::Authenticated(role, id) => {
                    panel.stop();
                    let (app, task) = App::new(role, id);
                    self.state = State::App(Box::new(app));
                    task.map(|msg| Message::App(Box::new(msg)))
                }
                msg => panel.update(msg).map(|msg| Message::Login(Box::new(msg))),
            },
            (State::App(app), Message::App(msg)) => match *msg {
                app::Message::Disconnect => {
                    app.stop();
                    self.state = State::Login(Box::new(LoginPanel::new(self.backend.clone())));
                    Task::none()
                }
            },
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.state {
            State::Login(panel) => panel.view().map(|msg| Message::Login(Box::new(msg))),
            State::App(app) => app.view().map(|msg| Message::App(Box::new(msg))),
        }
    }

    fn stop(&mut self) {
        match &mut self.state {
            State::Login(panel) => panel.stop(),
            State::App(app) => app.stop(),
        }
    }
}
