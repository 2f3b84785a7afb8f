use iced::alignment::{Horizontal, Vertical};
use iced::{Length, Task};
use tracing::info;

use fitcenter_ui::{
    component::{button, card, text::*},
    theme,
    widget::*,
};

use crate::services::api::Role;

/// The authenticated session screen. The login panel hands over here once
/// the backend has confirmed the identity.
pub struct App {
    role: Role,
    id: i64,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Terminal message, consumed by the parent to return to the login
    /// panel.
    Disconnect,
}

impl App {
    pub fn new(role: Role, id: i64) -> (Self, Task<Message>) {
        info!("Session started for {} #{}", role, id);
        (Self { role, id }, Task::none())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn stop(&mut self) {
        info!("Session closed for {} #{}", self.role, self.id);
    }

    pub fn update(&mut self, _message: Message) -> Task<Message> {
        // Disconnect is intercepted by the parent.
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        Container::new(
            card::simple(
                Column::new()
                    .spacing(20)
                    .align_x(iced::Alignment::Center)
                    .push(h3(format!("Welcome, {}!", self.role)))
                    .push(
                        p1_regular(format!("You are signed in with ID {}", self.id))
                            .style(theme::text::secondary),
                    )
                    .push(
                        button::secondary(None, "Disconnect")
                            .on_press(Message::Disconnect)
                            .width(Length::Fixed(200.0)),
                    ),
            )
            .max_width(500),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(20)
        .into()
    }
}
