use iced::{
    widget::pick_list::{Catalog, Status, Style, StyleFn},
    Border,
};

use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> <Self as Catalog>::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &<Self as Catalog>::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, _status: Status) -> Style {
    Style {
        text_color: theme.colors.text.primary,
        placeholder_color: theme.colors.text_inputs.primary.active.placeholder,
        background: theme.colors.text_inputs.primary.active.background.into(),
        border: if let Some(color) = theme.colors.text_inputs.primary.active.border {
            Border {
                radius: 10.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                ..Default::default()
            }
        },
        handle_color: theme.colors.text.secondary,
    }
}
