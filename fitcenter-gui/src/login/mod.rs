pub mod fields;
mod view;

use std::sync::Arc;
use std::time::Duration;

use iced::Task;
use tracing::{info, warn};

use fitcenter_ui::{component::form, widget::Element};

use crate::services::api::{ApiError, Backend, Role};

pub use fields::{Field, FormStore, Gender, GENDERS};

/// How long the registration success message stays on screen before the
/// session hand-off.
pub const AUTH_HANDOFF_DELAY: Duration = Duration::from_millis(1500);

/// What the panel is currently presenting. A login control or a
/// registration form always belong to a chosen role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Login(Role),
    Register(Role),
}

impl Mode {
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Idle => None,
            Self::Login(role) | Self::Register(role) => Some(*role),
        }
    }
}

/// Outcome of the last submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Pending,
    Error(String),
    Success(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    Registered(u64, Role, Result<i64, ApiError>),
    LookedUp(u64, Role, i64, Result<serde_json::Value, ApiError>),
    HandOffElapsed(u64, Role, i64),
    /// Terminal message, consumed by the parent to start a session.
    Authenticated(Role, i64),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    SelectRole(Role),
    ToggleMode,
    IdEdited(String),
    FieldEdited(Field, String),
    GenderSelected(Gender),
    SubmitRegistration,
    SubmitLogin,
}

pub struct LoginPanel {
    backend: Arc<dyn Backend>,
    mode: Mode,
    forms: FormStore,
    id_input: form::Value<String>,
    status: Status,
    // Bumped whenever pending completions and scheduled hand-offs must be
    // discarded: role/mode switch, new submission, teardown. Completions
    // carry the epoch they were issued under and are dropped on mismatch.
    epoch: u64,
}

impl LoginPanel {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            mode: Mode::Idle,
            forms: FormStore::default(),
            id_input: form::Value::default(),
            status: Status::Idle,
            epoch: 0,
        }
    }

    /// Invalidate any in-flight completion or scheduled hand-off. Called by
    /// the parent before dropping the panel.
    pub fn stop(&mut self) {
        self.epoch += 1;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(msg) => self.update_view(msg),
            Message::Registered(epoch, role, res) => {
                if epoch != self.epoch {
                    return Task::none();
                }
                match res {
                    Ok(id) => {
                        info!("Registered a new {} with id {}", role, id);
                        self.status = Status::Success(format!(
                            "{} created successfully! Your ID is {}",
                            role, id
                        ));
                        let epoch = self.epoch;
                        Task::perform(tokio::time::sleep(AUTH_HANDOFF_DELAY), move |_| {
                            Message::HandOffElapsed(epoch, role, id)
                        })
                    }
                    Err(ApiError::Conflict(detail)) => {
                        self.status = Status::Error(detail.unwrap_or_else(|| {
                            "Registration failed. Email may already exist.".to_string()
                        }));
                        Task::none()
                    }
                    Err(e) => {
                        warn!("Registration request failed: {}", e);
                        self.status = Status::Error(
                            "Failed to register. Please check your backend is running."
                                .to_string(),
                        );
                        Task::none()
                    }
                }
            }
            Message::LookedUp(epoch, role, id, res) => {
                if epoch != self.epoch {
                    return Task::none();
                }
                match res {
                    Ok(_) => {
                        self.status = Status::Idle;
                        self.epoch += 1;
                        Task::done(Message::Authenticated(role, id))
                    }
                    Err(ApiError::NotFound) => {
                        self.status = Status::Error(not_found_message(role, &id.to_string()));
                        Task::none()
                    }
                    Err(e) => {
                        warn!("Login request failed: {}", e);
                        self.status = Status::Error(
                            "Failed to login. Please check your backend is running.".to_string(),
                        );
                        Task::none()
                    }
                }
            }
            Message::HandOffElapsed(epoch, role, id) => {
                if epoch != self.epoch {
                    return Task::none();
                }
                self.epoch += 1;
                Task::done(Message::Authenticated(role, id))
            }
            // Consumed by the parent.
            Message::Authenticated(..) => Task::none(),
        }
    }

    fn update_view(&mut self, message: ViewMessage) -> Task<Message> {
        match message {
            ViewMessage::SelectRole(role) => {
                // Registration is the entry point for a freshly selected
                // role. Transient state never survives a role switch.
                self.epoch += 1;
                self.mode = Mode::Register(role);
                self.status = Status::Idle;
                Task::none()
            }
            ViewMessage::ToggleMode => {
                self.epoch += 1;
                self.status = Status::Idle;
                self.mode = match self.mode {
                    Mode::Idle => Mode::Idle,
                    Mode::Login(role) => Mode::Register(role),
                    Mode::Register(role) => Mode::Login(role),
                };
                Task::none()
            }
            ViewMessage::IdEdited(value) => {
                self.id_input.value = value;
                self.id_input.valid = true;
                Task::none()
            }
            ViewMessage::FieldEdited(field, value) => {
                if let Some(role) = self.mode.role() {
                    self.forms.edit(role, field, value);
                }
                Task::none()
            }
            ViewMessage::GenderSelected(gender) => {
                self.forms.select_gender(gender);
                Task::none()
            }
            ViewMessage::SubmitRegistration => {
                let role = match self.mode {
                    Mode::Register(role) => role,
                    _ => return Task::none(),
                };
                if self.status == Status::Pending {
                    return Task::none();
                }

                let (name, email) = self.forms.required(role);
                if name.is_empty() || email.is_empty() {
                    self.forms.flag_missing_required(role);
                    self.status = Status::Error("Name and email are required".to_string());
                    return Task::none();
                }

                self.epoch += 1;
                self.status = Status::Pending;
                let epoch = self.epoch;
                let backend = self.backend.clone();
                let payload = self.forms.payload(role);
                Task::perform(
                    async move { backend.create(&payload).await },
                    move |res| Message::Registered(epoch, role, res),
                )
            }
            ViewMessage::SubmitLogin => {
                let role = match self.mode {
                    Mode::Login(role) => role,
                    _ => return Task::none(),
                };
                if self.status == Status::Pending {
                    return Task::none();
                }

                let raw = self.id_input.value.trim().to_string();
                if raw.is_empty() {
                    self.id_input.valid = false;
                    self.status =
                        Status::Error("Please select a role and enter an ID".to_string());
                    return Task::none();
                }

                self.epoch += 1;
                match raw.parse::<i64>() {
                    Ok(id) => {
                        self.status = Status::Pending;
                        let epoch = self.epoch;
                        let backend = self.backend.clone();
                        Task::perform(
                            async move { backend.get_by_id(role, id).await },
                            move |res| Message::LookedUp(epoch, role, id, res),
                        )
                    }
                    Err(_) => {
                        // A non-numeric identifier cannot match any record,
                        // so it resolves to the not-found outcome without a
                        // round-trip.
                        self.status = Status::Error(not_found_message(role, &raw));
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        view::panel(self.mode, &self.forms, &self.id_input, &self.status).map(Message::View)
    }
}

fn not_found_message(role: Role, id: &str) -> String {
    format!(
        "{} with ID {} not found. Please create one first or use an existing ID.",
        role, id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::RegistrationForm;
    use crate::utils::{
        mock::{Call, MockBackend, MockResponse},
        sandbox::Sandbox,
    };
    use iced_runtime::task::into_stream;
    use serde_json::json;

    fn panel_with(backend: &Arc<MockBackend>) -> LoginPanel {
        LoginPanel::new(backend.clone() as Arc<dyn Backend>)
    }

    fn edit(field: Field, value: &str) -> Message {
        Message::View(ViewMessage::FieldEdited(field, value.to_string()))
    }

    #[test]
    fn selecting_a_role_lands_on_registration() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        for role in crate::services::api::ROLES {
            let _ = panel.update(Message::View(ViewMessage::SelectRole(role)));
            assert_eq!(Mode::Register(role), panel.mode);
            assert_eq!(Status::Idle, panel.status);
        }
    }

    #[test]
    fn registration_requires_name_and_email() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Member)));
        let _ = panel.update(edit(Field::Name, "Alice"));
        let task = panel.update(Message::View(ViewMessage::SubmitRegistration));

        assert!(into_stream(task).is_none());
        assert_eq!(
            Status::Error("Name and email are required".to_string()),
            panel.status
        );
        assert!(panel.forms.member.name.valid);
        assert!(!panel.forms.member.email.valid);
        assert!(backend.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn successful_registration_hands_off_after_delay() {
        let backend = Arc::new(MockBackend::new(vec![(
            Some(Call::Create(RegistrationForm::Member {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                date_of_birth: "".to_string(),
                gender: "".to_string(),
                phone: "".to_string(),
            })),
            MockResponse::Created(42),
        )]));
        let mut sandbox = Sandbox::new(panel_with(&backend));

        sandbox = sandbox
            .update(Message::View(ViewMessage::SelectRole(Role::Member)))
            .await
            .update(edit(Field::Name, "Alice"))
            .await
            .update(edit(Field::Email, "alice@example.com"))
            .await
            .update(Message::View(ViewMessage::SubmitRegistration))
            .await;

        assert_eq!(vec![(Role::Member, 42)], sandbox.authenticated());
        assert_eq!(
            &Status::Success("Member created successfully! Your ID is 42".to_string()),
            &sandbox.panel().status,
        );
    }

    #[tokio::test]
    async fn duplicate_email_surfaces_the_backend_detail() {
        let backend = Arc::new(MockBackend::new(vec![(
            None,
            MockResponse::Err(ApiError::Conflict(Some(
                "Email already registered".to_string(),
            ))),
        )]));
        let mut sandbox = Sandbox::new(panel_with(&backend));

        sandbox = sandbox
            .update(Message::View(ViewMessage::SelectRole(Role::Trainer)))
            .await
            .update(edit(Field::Name, "Bob"))
            .await
            .update(edit(Field::Email, "bob@example.com"))
            .await
            .update(Message::View(ViewMessage::SubmitRegistration))
            .await;

        assert!(sandbox.authenticated().is_empty());
        assert_eq!(
            &Status::Error("Email already registered".to_string()),
            &sandbox.panel().status,
        );
    }

    #[tokio::test]
    async fn unreachable_backend_reports_a_transport_error() {
        let backend = Arc::new(MockBackend::new(vec![(
            None,
            MockResponse::Err(ApiError::Transport("connection refused".to_string())),
        )]));
        let mut sandbox = Sandbox::new(panel_with(&backend));

        sandbox = sandbox
            .update(Message::View(ViewMessage::SelectRole(Role::Admin)))
            .await
            .update(edit(Field::Name, "Carol"))
            .await
            .update(edit(Field::Email, "carol@example.com"))
            .await
            .update(Message::View(ViewMessage::SubmitRegistration))
            .await;

        assert_eq!(
            &Status::Error(
                "Failed to register. Please check your backend is running.".to_string()
            ),
            &sandbox.panel().status,
        );
    }

    #[tokio::test]
    async fn successful_login_hands_off_immediately() {
        let backend = Arc::new(MockBackend::new(vec![(
            Some(Call::GetById(Role::Member, 7)),
            MockResponse::Entity(json!({"member_id": 7, "name": "Alice"})),
        )]));
        let mut sandbox = Sandbox::new(panel_with(&backend));

        sandbox = sandbox
            .update(Message::View(ViewMessage::SelectRole(Role::Member)))
            .await
            .update(Message::View(ViewMessage::ToggleMode))
            .await
            .update(Message::View(ViewMessage::IdEdited("7".to_string())))
            .await
            .update(Message::View(ViewMessage::SubmitLogin))
            .await;

        assert_eq!(vec![(Role::Member, 7)], sandbox.authenticated());
        assert_eq!(&Status::Idle, &sandbox.panel().status);
    }

    #[tokio::test]
    async fn login_not_found_names_the_role_and_id() {
        let backend = Arc::new(MockBackend::new(vec![(
            Some(Call::GetById(Role::Trainer, 7)),
            MockResponse::Err(ApiError::NotFound),
        )]));
        let mut sandbox = Sandbox::new(panel_with(&backend));

        sandbox = sandbox
            .update(Message::View(ViewMessage::SelectRole(Role::Trainer)))
            .await
            .update(Message::View(ViewMessage::ToggleMode))
            .await
            .update(Message::View(ViewMessage::IdEdited("7".to_string())))
            .await
            .update(Message::View(ViewMessage::SubmitLogin))
            .await;

        assert!(sandbox.authenticated().is_empty());
        assert_eq!(
            &Status::Error(
                "Trainer with ID 7 not found. Please create one first or use an existing ID."
                    .to_string()
            ),
            &sandbox.panel().status,
        );
    }

    #[test]
    fn login_with_empty_id_never_calls_the_backend() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Admin)));
        let _ = panel.update(Message::View(ViewMessage::ToggleMode));
        let task = panel.update(Message::View(ViewMessage::SubmitLogin));

        assert!(into_stream(task).is_none());
        assert_eq!(
            Status::Error("Please select a role and enter an ID".to_string()),
            panel.status
        );
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn login_with_non_numeric_id_resolves_to_not_found_locally() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Member)));
        let _ = panel.update(Message::View(ViewMessage::ToggleMode));
        let _ = panel.update(Message::View(ViewMessage::IdEdited("abc".to_string())));
        let task = panel.update(Message::View(ViewMessage::SubmitLogin));

        assert!(into_stream(task).is_none());
        assert_eq!(
            Status::Error(
                "Member with ID abc not found. Please create one first or use an existing ID."
                    .to_string()
            ),
            panel.status
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn form_values_survive_mode_toggles() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Trainer)));
        let _ = panel.update(edit(Field::Name, "Bob"));
        let _ = panel.update(edit(Field::Specialization, "yoga"));
        let _ = panel.update(Message::View(ViewMessage::ToggleMode));
        assert_eq!(Mode::Login(Role::Trainer), panel.mode);
        let _ = panel.update(Message::View(ViewMessage::ToggleMode));
        assert_eq!(Mode::Register(Role::Trainer), panel.mode);

        assert_eq!("Bob", panel.forms.trainer.name.value);
        assert_eq!("yoga", panel.forms.trainer.specialization.value);
    }

    #[tokio::test]
    async fn at_most_one_submission_in_flight() {
        let backend = Arc::new(MockBackend::new(vec![(
            None,
            MockResponse::Err(ApiError::Transport("connection refused".to_string())),
        )]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Member)));
        let _ = panel.update(edit(Field::Name, "Alice"));
        let _ = panel.update(edit(Field::Email, "alice@example.com"));

        let first = panel.update(Message::View(ViewMessage::SubmitRegistration));
        assert_eq!(Status::Pending, panel.status);
        let second = panel.update(Message::View(ViewMessage::SubmitRegistration));
        assert!(into_stream(second).is_none());

        let mut sandbox = Sandbox::new(panel);
        sandbox = sandbox.drive(first).await;
        assert_eq!(1, backend.calls().len());
        assert!(sandbox.authenticated().is_empty());
    }

    #[test]
    fn switching_role_clears_any_displayed_message() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Member)));
        let _ = panel.update(Message::View(ViewMessage::SubmitRegistration));
        assert!(matches!(panel.status, Status::Error(..)));

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Admin)));
        assert_eq!(Status::Idle, panel.status);
    }

    #[tokio::test]
    async fn stale_hand_off_is_suppressed_after_a_role_switch() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Member)));
        let _ = panel.update(edit(Field::Name, "Alice"));
        let _ = panel.update(edit(Field::Email, "alice@example.com"));

        // The success message is displayed and the hand-off is scheduled.
        let epoch = panel.epoch + 1;
        let _ = panel.update(Message::View(ViewMessage::SubmitRegistration));
        let _ = panel.update(Message::Registered(epoch, Role::Member, Ok(42)));
        assert!(matches!(panel.status, Status::Success(..)));

        // The user switches role before the timer fires: the hand-off must
        // be dropped.
        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Admin)));
        let task = panel.update(Message::HandOffElapsed(epoch, Role::Member, 42));
        assert!(into_stream(task).is_none());
    }

    #[test]
    fn stale_completion_is_suppressed_after_teardown() {
        let backend = Arc::new(MockBackend::new(vec![]));
        let mut panel = panel_with(&backend);

        let _ = panel.update(Message::View(ViewMessage::SelectRole(Role::Member)));
        let _ = panel.update(Message::View(ViewMessage::ToggleMode));
        let _ = panel.update(Message::View(ViewMessage::IdEdited("7".to_string())));

        let epoch = panel.epoch + 1;
        let _ = panel.update(Message::View(ViewMessage::SubmitLogin));
        panel.stop();

        let task = panel.update(Message::LookedUp(
            epoch,
            Role::Member,
            7,
            Ok(json!({"member_id": 7})),
        ));
        assert!(into_stream(task).is_none());
    }
}
