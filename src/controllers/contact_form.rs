use std::str::FromStr;

use log::{info, warn};
use thiserror::Error;

use crate::notification::Notification;

pub const MISSING_FIELDS_TITLE: &str = "Campos obrigatórios";
pub const MISSING_FIELDS_BODY: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const SENT_TITLE: &str = "Mensagem enviada!";
pub const SENT_BODY: &str = "Entraremos em contato em breve. Obrigado!";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown contact form field: {0}")]
    UnknownField(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, FormField::Phone)
    }
}

impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

impl SubmitOutcome {
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Accepted => Notification::info(SENT_TITLE, SENT_BODY),
            SubmitOutcome::Rejected => Notification::error(MISSING_FIELDS_TITLE, MISSING_FIELDS_BODY),
        }
    }
}

/// Contact form values. Unset fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Sets the field named by an input's `name` attribute.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<FormField>().map_err(|e| {
            warn!("Ignoring input for {}", e);
            e
        })?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        FormField::ALL
            .into_iter()
            .filter(|field| field.is_required())
            .all(|field| !self.get(field).trim().is_empty())
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    /// Validates the required fields; an accepted form is cleared, a rejected
    /// one is left as typed.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_complete() {
            info!("Contact form rejected: required fields missing");
            return SubmitOutcome::Rejected;
        }
        info!("Contact form accepted");
        self.reset();
        SubmitOutcome::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;

    fn filled(name: &str, email: &str, phone: &str, message: &str) -> FormState {
        FormState {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let base = filled("Ana", "ana@ex.com", "47 9999", "oi");
        for field in FormField::ALL {
            let mut state = base.clone();
            state.set_field(field, "novo valor ✓");
            assert_eq!(state.get(field), "novo valor ✓");
            for other in FormField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(state.get(other), base.get(other));
            }
        }
    }

    #[test]
    fn set_field_by_name_accepts_known_names() {
        let mut state = FormState::default();
        state.set_field_by_name("phone", "+55 47 9210-4490").unwrap();
        assert_eq!(state.phone, "+55 47 9210-4490");
    }

    #[test]
    fn unknown_field_is_rejected_without_touching_state() {
        let mut state = filled("Ana", "ana@ex.com", "", "oi");
        let before = state.clone();
        let err = state.set_field_by_name("company", "ACME").unwrap_err();
        assert_eq!(err, FormError::UnknownField("company".into()));
        assert_eq!(state, before);
    }

    #[test]
    fn field_names_are_case_sensitive() {
        assert!("Name".parse::<FormField>().is_err());
        assert_eq!("message".parse::<FormField>(), Ok(FormField::Message));
    }

    #[test]
    fn missing_name_rejects_and_preserves_input() {
        let mut state = filled("", "x@y.com", "", "hi");
        let before = state.clone();
        let outcome = state.submit();

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(state, before);
        let note = outcome.notification();
        assert_eq!(note.severity, Severity::Error);
        assert_eq!(note.title, MISSING_FIELDS_TITLE);
    }

    #[test]
    fn complete_form_is_accepted_and_cleared() {
        let mut state = filled("Ana", "ana@ex.com", "", "Preciso de orçamento");
        let outcome = state.submit();

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(state, filled("", "", "", ""));
        assert_eq!(outcome.notification(), Notification::info(SENT_TITLE, SENT_BODY));
    }

    #[test]
    fn second_submit_after_success_fails() {
        let mut state = filled("Ana", "ana@ex.com", "", "Preciso de orçamento");
        assert_eq!(state.submit(), SubmitOutcome::Accepted);
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
        assert_eq!(state, FormState::default());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut state = filled("   ", "ana@ex.com", "", "oi");
        assert_eq!(state.submit(), SubmitOutcome::Rejected);

        let mut state = filled("Ana", "\t\n", "", "oi");
        assert_eq!(state.submit(), SubmitOutcome::Rejected);

        let mut state = filled("Ana", "ana@ex.com", "", "  ");
        assert_eq!(state.submit(), SubmitOutcome::Rejected);
    }

    #[test]
    fn phone_is_optional_and_email_format_unchecked() {
        let mut state = filled("Ana", "not-an-email", "   ", "oi");
        assert_eq!(state.submit(), SubmitOutcome::Accepted);
    }
}
