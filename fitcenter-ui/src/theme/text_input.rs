use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{palette::TextInputPalette, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    let input = &theme.colors.text_inputs.primary;
    match status {
        Status::Disabled => field(&input.disabled),
        _ => field(&input.active),
    }
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    let input = &theme.colors.text_inputs.invalid;
    match status {
        Status::Disabled => field(&input.disabled),
        _ => field(&input.active),
    }
}

// Form fields are squarer than the pill-shaped buttons.
fn field(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: if let Some(color) = p.border {
            Border {
                radius: 10.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}
