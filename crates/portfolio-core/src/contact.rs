//! Contact Form State
//!
//! Local-only form: nothing is transmitted. A successful submit clears the
//! fields and raises an acknowledgment flag that the page lowers again after
//! a fixed delay. Each submit hands out a ticket; only the latest ticket can
//! lower the flag, so a quick second submit keeps the banner up for its own
//! full delay.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;
use tracing::debug;

/// How long the acknowledgment banner stays up
pub const DEFAULT_ACK_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Subject)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
}

/// Identifies one successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    submitted: bool,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Whether the acknowledgment banner is up
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// First required field that is blank
    pub fn missing_required(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.is_required() && self.value(*f).trim().is_empty())
    }

    /// Accept the form: clear every field and raise the acknowledgment.
    ///
    /// A blank required field leaves the form exactly as it was.
    pub fn submit(&mut self) -> Result<SubmissionTicket, FormError> {
        if let Some(field) = self.missing_required() {
            return Err(FormError::MissingField(field));
        }
        self.values.clear();
        self.submitted = true;
        self.generation += 1;
        debug!(generation = self.generation, "contact form acknowledged");
        Ok(SubmissionTicket(self.generation))
    }

    /// Lower the acknowledgment if `ticket` is still the latest submit.
    pub fn expire(&mut self, ticket: SubmissionTicket) -> bool {
        if ticket.0 != self.generation || !self.submitted {
            return false;
        }
        self.submitted = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Hello");
        form.set(Field::Message, "Nice site");
        form
    }

    #[test]
    fn test_submit_acknowledges_and_clears() {
        let mut form = filled();
        let ticket = form.submit().unwrap();
        assert!(form.is_submitted());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(form.expire(ticket));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_missing_required_field() {
        let mut form = filled();
        form.set(Field::Email, "   ");
        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Email)));
        assert!(!form.is_submitted());
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_subject_is_optional() {
        let mut form = filled();
        form.set(Field::Subject, "");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_stale_ticket_does_not_clear() {
        let mut form = filled();
        let first = form.submit().unwrap();
        form.set(Field::Name, "Grace");
        form.set(Field::Email, "grace@example.com");
        form.set(Field::Message, "Again");
        let second = form.submit().unwrap();

        assert!(!form.expire(first));
        assert!(form.is_submitted());
        assert!(form.expire(second));
        assert!(!form.is_submitted());
        assert!(!form.expire(second));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(FormError::MissingField(Field::Message).to_string(), "Message is required");
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(DEFAULT_ACK_DELAY.as_millis(), 5000);
    }
}
