use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub card: ContainerPalette,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub warning: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
    pub accent: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub card: Button,
    pub card_selected: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub pending: ContainerPalette,
    pub error: ContainerPalette,
    pub success: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_1,
                foreground: color::WHITE,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_4,
                warning: color::ORANGE,
                success: color::GREEN,
                error: color::RED,
                accent: color::TEAL,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::TEAL,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_TEAL,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_TEAL,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_2,
                        text: color::GREY_4,
                        border: None,
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::TEAL,
                        border: color::TEAL.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::TEAL,
                        border: color::TEAL.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::DARK_TEAL,
                        border: color::DARK_TEAL.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_3,
                        border: color::GREY_2.into(),
                    }),
                },
                card: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                card_selected: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_TEAL,
                        text: color::LIGHT_BLACK,
                        border: color::TEAL.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            card: ContainerPalette {
                background: color::WHITE,
                text: None,
                border: color::GREY_2.into(),
            },
            notifications: Notifications {
                pending: ContainerPalette {
                    background: color::GREY_1,
                    text: color::GREY_4.into(),
                    border: color::GREY_2.into(),
                },
                error: ContainerPalette {
                    background: color::TRANSPARENT_RED,
                    text: color::RED.into(),
                    border: color::RED.into(),
                },
                success: ContainerPalette {
                    background: color::TRANSPARENT_GREEN,
                    text: color::GREEN.into(),
                    border: color::GREEN.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_4,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::TRANSPARENT_TEAL,
                        border: color::GREY_2.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::TRANSPARENT_TEAL,
                        border: color::GREY_2.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_4,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::TRANSPARENT_TEAL,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::TRANSPARENT_TEAL,
                        border: color::RED.into(),
                    },
                },
            },
        }
    }
}
