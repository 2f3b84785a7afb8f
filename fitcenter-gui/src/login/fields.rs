use std::fmt;

use fitcenter_ui::component::form;

use crate::services::api::{RegistrationForm, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

pub const GENDERS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// The text fields appearing in at least one role's registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    DateOfBirth,
    Phone,
    Specialization,
    StaffRole,
}

#[derive(Debug, Clone, Default)]
pub struct MemberFields {
    pub name: form::Value<String>,
    pub email: form::Value<String>,
    pub date_of_birth: form::Value<String>,
    pub gender: Option<Gender>,
    pub phone: form::Value<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TrainerFields {
    pub name: form::Value<String>,
    pub email: form::Value<String>,
    pub specialization: form::Value<String>,
    pub phone: form::Value<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AdminFields {
    pub name: form::Value<String>,
    pub email: form::Value<String>,
    pub staff_role: form::Value<String>,
}

/// One independent field record per role. Edits under one role never
/// touch another role's record, and records survive mode toggles.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    pub member: MemberFields,
    pub trainer: TrainerFields,
    pub admin: AdminFields,
}

impl FormStore {
    /// Replace one field of the given role's record. Editing a field marks
    /// it valid again. A field that does not belong to the role's schema is
    /// ignored.
    pub fn edit(&mut self, role: Role, field: Field, value: String) {
        if let Some(slot) = self.slot_mut(role, field) {
            slot.value = value;
            slot.valid = true;
        }
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.member.gender = Some(gender);
    }

    fn slot_mut(&mut self, role: Role, field: Field) -> Option<&mut form::Value<String>> {
        match (role, field) {
            (Role::Member, Field::Name) => Some(&mut self.member.name),
            (Role::Member, Field::Email) => Some(&mut self.member.email),
            (Role::Member, Field::DateOfBirth) => Some(&mut self.member.date_of_birth),
            (Role::Member, Field::Phone) => Some(&mut self.member.phone),
            (Role::Trainer, Field::Name) => Some(&mut self.trainer.name),
            (Role::Trainer, Field::Email) => Some(&mut self.trainer.email),
            (Role::Trainer, Field::Specialization) => Some(&mut self.trainer.specialization),
            (Role::Trainer, Field::Phone) => Some(&mut self.trainer.phone),
            (Role::Admin, Field::Name) => Some(&mut self.admin.name),
            (Role::Admin, Field::Email) => Some(&mut self.admin.email),
            (Role::Admin, Field::StaffRole) => Some(&mut self.admin.staff_role),
            _ => None,
        }
    }

    /// Required fields of the given role's record: (name, email).
    pub fn required(&self, role: Role) -> (&str, &str) {
        match role {
            Role::Member => (&self.member.name.value, &self.member.email.value),
            Role::Trainer => (&self.trainer.name.value, &self.trainer.email.value),
            Role::Admin => (&self.admin.name.value, &self.admin.email.value),
        }
    }

    /// Mark empty required fields of the given role's record as invalid.
    pub fn flag_missing_required(&mut self, role: Role) {
        for field in [Field::Name, Field::Email] {
            if let Some(slot) = self.slot_mut(role, field) {
                slot.valid = !slot.value.is_empty();
            }
        }
    }

    /// Build the full payload for the given role, optional fields included
    /// as empty strings.
    pub fn payload(&self, role: Role) -> RegistrationForm {
        match role {
            Role::Member => RegistrationForm::Member {
                name: self.member.name.value.clone(),
                email: self.member.email.value.clone(),
                date_of_birth: self.member.date_of_birth.value.clone(),
                gender: self
                    .member
                    .gender
                    .map(|g| g.to_string())
                    .unwrap_or_default(),
                phone: self.member.phone.value.clone(),
            },
            Role::Trainer => RegistrationForm::Trainer {
                name: self.trainer.name.value.clone(),
                email: self.trainer.email.value.clone(),
                specialization: self.trainer.specialization.value.clone(),
                phone: self.trainer.phone.value.clone(),
            },
            Role::Admin => RegistrationForm::Admin {
                name: self.admin.name.value.clone(),
                email: self.admin.email.value.clone(),
                role: self.admin.staff_role.value.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_are_scoped_to_one_role() {
        let mut store = FormStore::default();
        store.edit(Role::Member, Field::Name, "Alice".to_string());
        store.edit(Role::Trainer, Field::Name, "Bob".to_string());

        assert_eq!("Alice", store.member.name.value);
        assert_eq!("Bob", store.trainer.name.value);
        assert_eq!("", store.admin.name.value);
    }

    #[test]
    fn fields_outside_the_role_schema_are_ignored() {
        let mut store = FormStore::default();
        store.edit(Role::Admin, Field::Specialization, "yoga".to_string());
        store.edit(Role::Member, Field::StaffRole, "manager".to_string());

        assert_eq!("", store.trainer.specialization.value);
        assert_eq!("", store.admin.staff_role.value);
    }

    #[test]
    fn flag_missing_required_marks_empty_fields() {
        let mut store = FormStore::default();
        store.edit(Role::Trainer, Field::Name, "Bob".to_string());
        store.flag_missing_required(Role::Trainer);

        assert!(store.trainer.name.valid);
        assert!(!store.trainer.email.valid);
    }

    #[test]
    fn payload_carries_optional_fields_as_empty_strings() {
        let mut store = FormStore::default();
        store.edit(Role::Member, Field::Name, "Alice".to_string());
        store.edit(Role::Member, Field::Email, "alice@example.com".to_string());

        assert_eq!(
            RegistrationForm::Member {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                date_of_birth: "".to_string(),
                gender: "".to_string(),
                phone: "".to_string(),
            },
            store.payload(Role::Member)
        );
    }
}
