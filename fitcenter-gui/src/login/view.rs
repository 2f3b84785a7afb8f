use iced::alignment::{Horizontal, Vertical};
use iced::widget::pick_list;
use iced::Length;

use fitcenter_ui::{
    component::{button, card, form, notification, text::*},
    theme,
    widget::*,
};

use crate::services::api::{Role, ROLES};

use super::fields::{Field, FormStore, GENDERS};
use super::{Mode, Status, ViewMessage};

pub fn panel<'a>(
    mode: Mode,
    forms: &'a FormStore,
    id_input: &'a form::Value<String>,
    status: &'a Status,
) -> Element<'a, ViewMessage> {
    let selected = mode.role();

    let mut roles = Row::new().spacing(10);
    for role in ROLES {
        roles = roles.push(role_card(role, selected == Some(role)));
    }

    let mut content = Column::new()
        .spacing(20)
        .push(
            Column::new()
                .spacing(5)
                .align_x(iced::Alignment::Center)
                .width(Length::Fill)
                .push(h2("Fitness Center Management"))
                .push(
                    p1_regular("Select your role and enter your ID to continue")
                        .style(theme::text::secondary),
                ),
        )
        .push(roles);

    match mode {
        Mode::Idle => {}
        Mode::Register(role) => {
            content = content.push(registration_form(role, forms, status));
        }
        Mode::Login(role) => {
            content = content.push(login_form(role, id_input, status));
        }
    }

    Container::new(card::simple(content).max_width(500))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(20)
        .into()
}

fn role_card<'a>(role: Role, selected: bool) -> Element<'a, ViewMessage> {
    Button::new(
        Column::new()
            .spacing(5)
            .align_x(iced::Alignment::Center)
            .push(h4_bold(role.display_name()))
            .push(p2_regular(role.tagline()).style(theme::text::secondary)),
    )
    .style(if selected {
        theme::button::card_selected
    } else {
        theme::button::card
    })
    .padding(10)
    .width(Length::Fill)
    .on_press(ViewMessage::SelectRole(role))
    .into()
}

fn registration_form<'a>(
    role: Role,
    forms: &'a FormStore,
    status: &'a Status,
) -> Column<'a, ViewMessage> {
    let pending = *status == Status::Pending;

    let mut content = Column::new().spacing(10).push(
        h5_medium(format!("Register as {}", role.display_name())).style(theme::text::accent),
    );

    content = match role {
        Role::Member => content
            .push(labeled(
                "Name *",
                form::Form::new_trimmed("Name", &forms.member.name, |v| {
                    ViewMessage::FieldEdited(Field::Name, v)
                })
                .warning("Required")
                .padding(10),
            ))
            .push(labeled(
                "Email *",
                form::Form::new_trimmed("Email", &forms.member.email, |v| {
                    ViewMessage::FieldEdited(Field::Email, v)
                })
                .warning("Required")
                .padding(10),
            ))
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        labeled(
                            "Date of Birth",
                            form::Form::new("YYYY-MM-DD", &forms.member.date_of_birth, |v| {
                                ViewMessage::FieldEdited(Field::DateOfBirth, v)
                            })
                            .padding(10),
                        )
                        .width(Length::FillPortion(1)),
                    )
                    .push(
                        Column::new()
                            .spacing(5)
                            .width(Length::FillPortion(1))
                            .push(p2_regular("Gender").style(theme::text::secondary))
                            .push(
                                pick_list(
                                    &GENDERS[..],
                                    forms.member.gender,
                                    ViewMessage::GenderSelected,
                                )
                                .placeholder("Select...")
                                .padding(10)
                                .width(Length::Fill),
                            ),
                    ),
            )
            .push(labeled(
                "Phone",
                form::Form::new("(optional)", &forms.member.phone, |v| {
                    ViewMessage::FieldEdited(Field::Phone, v)
                })
                .padding(10),
            )),
        Role::Trainer => content
            .push(labeled(
                "Name *",
                form::Form::new_trimmed("Name", &forms.trainer.name, |v| {
                    ViewMessage::FieldEdited(Field::Name, v)
                })
                .warning("Required")
                .padding(10),
            ))
            .push(labeled(
                "Email *",
                form::Form::new_trimmed("Email", &forms.trainer.email, |v| {
                    ViewMessage::FieldEdited(Field::Email, v)
                })
                .warning("Required")
                .padding(10),
            ))
            .push(labeled(
                "Specialization",
                form::Form::new("e.g. strength, yoga", &forms.trainer.specialization, |v| {
                    ViewMessage::FieldEdited(Field::Specialization, v)
                })
                .padding(10),
            ))
            .push(labeled(
                "Phone",
                form::Form::new("(optional)", &forms.trainer.phone, |v| {
                    ViewMessage::FieldEdited(Field::Phone, v)
                })
                .padding(10),
            )),
        Role::Admin => content
            .push(labeled(
                "Name *",
                form::Form::new_trimmed("Name", &forms.admin.name, |v| {
                    ViewMessage::FieldEdited(Field::Name, v)
                })
                .warning("Required")
                .padding(10),
            ))
            .push(labeled(
                "Email *",
                form::Form::new_trimmed("Email", &forms.admin.email, |v| {
                    ViewMessage::FieldEdited(Field::Email, v)
                })
                .warning("Required")
                .padding(10),
            ))
            .push(labeled(
                "Role",
                form::Form::new("e.g. manager", &forms.admin.staff_role, |v| {
                    ViewMessage::FieldEdited(Field::StaffRole, v)
                })
                .padding(10),
            )),
    };

    content.push_maybe(alert(status)).push(
        Row::new()
            .spacing(10)
            .push(
                button::primary(None, if pending { "Registering..." } else { "Register" })
                    .on_press_maybe((!pending).then_some(ViewMessage::SubmitRegistration))
                    .width(Length::FillPortion(2)),
            )
            .push(
                button::secondary(None, "Login Instead")
                    .on_press_maybe((!pending).then_some(ViewMessage::ToggleMode))
                    .width(Length::FillPortion(1)),
            ),
    )
}

fn login_form<'a>(
    role: Role,
    id_input: &'a form::Value<String>,
    status: &'a Status,
) -> Column<'a, ViewMessage> {
    let pending = *status == Status::Pending;

    Column::new()
        .spacing(10)
        .push(labeled(
            format!("{} ID:", role.display_name()),
            form::Form::new_trimmed(
                &format!("Enter {} ID", role.api_path()),
                id_input,
                ViewMessage::IdEdited,
            )
            .padding(10),
        ))
        .push(
            Button::new(
                text(format!("New {}? Register Here", role.display_name()))
                    .align_x(iced::Alignment::Center)
                    .width(Length::Fill),
            )
            .style(theme::button::secondary)
            .on_press_maybe((!pending).then_some(ViewMessage::ToggleMode))
            .width(Length::Fill),
        )
        .push_maybe(alert(status))
        .push(
            // Submitting an empty ID is allowed, the update logic answers it
            // with a prompt to fill one in.
            button::primary(None, if pending { "Logging in..." } else { "Login" })
                .on_press_maybe((!pending).then_some(ViewMessage::SubmitLogin))
                .width(Length::Fill),
        )
        .push(
            caption(match role {
                Role::Member => {
                    "New members can register above. Existing members can login with their ID."
                }
                _ => "Use Swagger docs to create users first, then login with their IDs",
            })
            .style(theme::text::secondary)
            .align_x(iced::Alignment::Center)
            .width(Length::Fill),
        )
}

fn labeled<'a>(
    label: impl std::fmt::Display,
    input: impl Into<Element<'a, ViewMessage>>,
) -> Column<'a, ViewMessage> {
    Column::new()
        .spacing(5)
        .push(p2_regular(label.to_string()).style(theme::text::secondary))
        .push(input)
}

fn alert<'a>(status: &'a Status) -> Option<Container<'a, ViewMessage>> {
    match status {
        Status::Pending => Some(notification::pending("Contacting the backend...")),
        Status::Error(message) => Some(notification::error(message)),
        Status::Success(message) => Some(notification::success(message)),
        Status::Idle => None,
    }
}
