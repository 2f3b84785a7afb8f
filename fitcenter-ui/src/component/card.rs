use crate::{theme, widget::*};

pub fn simple<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content).padding(15).style(theme::card::simple)
}
