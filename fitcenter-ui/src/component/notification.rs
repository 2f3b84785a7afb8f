use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn pending<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::notification::pending)
}

pub fn error<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::notification::error)
}

pub fn success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(text::p2_regular(message))
        .padding(10)
        .width(Length::Fill)
        .style(theme::notification::success)
}
