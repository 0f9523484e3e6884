use yew::NodeRef;

use crate::validation::{run_chain, FieldInput, FieldName, Rule, ValidationError};

/// Raw state of one control as read at validation time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSnapshot {
    pub value: String,
    pub checked: bool,
}

/// Where the validator reads field values from.
pub trait FieldSource {
    /// `None` when the control is not on the page.
    fn read(&self, field: FieldName) -> Option<FieldSnapshot>;
}

/// Decoration of a field. One value per field keeps `error` and `success`
/// mutually exclusive and allows at most one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Pristine,
    Valid,
    Invalid(ValidationError),
}

impl FieldStatus {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            FieldStatus::Pristine => None,
            FieldStatus::Valid => Some("success"),
            FieldStatus::Invalid(_) => Some("error"),
        }
    }

    pub fn error(&self) -> Option<ValidationError> {
        match self {
            FieldStatus::Invalid(err) => Some(*err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: FieldName,
    /// Handle to the rendered control. The page owns the element.
    pub element: NodeRef,
    pub validators: &'static [Rule],
    status: FieldStatus,
}

impl FieldDescriptor {
    fn new(name: FieldName) -> Self {
        Self {
            name,
            element: NodeRef::default(),
            validators: name.rules(),
            status: FieldStatus::Pristine,
        }
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }
}

/// Per-field validation for the demo form.
///
/// Descriptors are created once, in [`FieldName::ALL`] order, and that order
/// is the order `validate_all` walks them in.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValidator {
    fields: Vec<FieldDescriptor>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(FieldDescriptor::new).collect(),
        }
    }

    #[cfg(test)]
    pub fn descriptors(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    pub fn descriptor(&self, name: FieldName) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.name == name)
    }

    pub fn element(&self, name: FieldName) -> NodeRef {
        self.descriptor(name)
            .map(|d| d.element.clone())
            .unwrap_or_default()
    }

    pub fn status(&self, name: FieldName) -> FieldStatus {
        self.descriptor(name)
            .map(FieldDescriptor::status)
            .unwrap_or_default()
    }

    fn descriptor_mut(&mut self, name: FieldName) -> Option<&mut FieldDescriptor> {
        self.fields.iter_mut().find(|d| d.name == name)
    }

    /// Runs the field's chain against its trimmed value and decorates it.
    /// A field whose control is missing is left alone and counts as valid.
    pub fn validate_field(&mut self, name: FieldName, source: &impl FieldSource) -> bool {
        let Some(snapshot) = source.read(name) else {
            log::debug!("field {} not present, skipping", name.id());
            return true;
        };
        let Some(descriptor) = self.descriptor_mut(name) else {
            return true;
        };

        let input = FieldInput {
            value: snapshot.value.trim(),
            checked: snapshot.checked,
        };
        match run_chain(descriptor.validators, &input) {
            Ok(()) => {
                descriptor.status = FieldStatus::Valid;
                true
            }
            Err(err) => {
                log::debug!("field {} invalid ({:?}): {}", name.id(), err.kind(), err);
                descriptor.status = FieldStatus::Invalid(err);
                false
            }
        }
    }

    /// Validates every field. `on_first_failure` is called with the first
    /// failing descriptor only, so the caller can scroll to it and focus it.
    pub fn validate_all<F>(&mut self, source: &impl FieldSource, on_first_failure: F) -> bool
    where
        F: FnOnce(&FieldDescriptor),
    {
        let mut on_first_failure = Some(on_first_failure);
        let mut all_valid = true;
        for index in 0..self.fields.len() {
            let name = self.fields[index].name;
            if self.validate_field(name, source) {
                continue;
            }
            all_valid = false;
            if let Some(callback) = on_first_failure.take() {
                callback(&self.fields[index]);
            }
        }
        all_valid
    }

    pub fn clear_error(&mut self, name: FieldName) {
        if let Some(descriptor) = self.descriptor_mut(name) {
            descriptor.status = FieldStatus::Pristine;
        }
    }

    pub fn reset(&mut self) {
        for descriptor in &mut self.fields {
            descriptor.status = FieldStatus::Pristine;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Page(HashMap<FieldName, FieldSnapshot>);

    impl Page {
        fn with(mut self, field: FieldName, value: &str) -> Self {
            self.0.insert(
                field,
                FieldSnapshot {
                    value: value.to_string(),
                    checked: false,
                },
            );
            self
        }

        fn checked(mut self, field: FieldName, checked: bool) -> Self {
            self.0.insert(
                field,
                FieldSnapshot {
                    value: "on".to_string(),
                    checked,
                },
            );
            self
        }

        fn complete() -> Self {
            Page::default()
                .with(FieldName::Name, "Maria Oliveira")
                .with(FieldName::Email, "maria@lojasol.com.br")
                .with(FieldName::Phone, "(11) 98765-4321")
                .with(FieldName::Company, "Loja Sol")
                .with(FieldName::Stores, "2-5")
                .with(FieldName::Challenge, "Perdemos muitos leads no WhatsApp")
                .checked(FieldName::Agree, true)
        }
    }

    impl FieldSource for Page {
        fn read(&self, field: FieldName) -> Option<FieldSnapshot> {
            self.0.get(&field).cloned()
        }
    }

    #[test]
    fn valid_field_gets_success_and_no_message() {
        let mut validator = FormValidator::new();
        let page = Page::default().with(FieldName::Name, "Jo");
        assert!(validator.validate_field(FieldName::Name, &page));
        assert_eq!(validator.status(FieldName::Name), FieldStatus::Valid);
        assert_eq!(validator.status(FieldName::Name).error(), None);
        assert_eq!(validator.status(FieldName::Name).class(), Some("success"));
    }

    #[test]
    fn first_failing_rule_message_is_shown() {
        let mut validator = FormValidator::new();
        let page = Page::default().with(FieldName::Name, "J");
        assert!(!validator.validate_field(FieldName::Name, &page));
        assert_eq!(
            validator.status(FieldName::Name).error(),
            Some(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn value_is_trimmed_before_checks() {
        let mut validator = FormValidator::new();
        let page = Page::default().with(FieldName::Name, "  J  ");
        assert!(!validator.validate_field(FieldName::Name, &page));
        assert_eq!(
            validator.status(FieldName::Name).error(),
            Some(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn short_email_without_dot_is_rejected() {
        let mut validator = FormValidator::new();
        let page = Page::default().with(FieldName::Email, "a@b");
        assert!(!validator.validate_field(FieldName::Email, &page));
        assert_eq!(
            validator.status(FieldName::Email).error().map(|e| e.to_string()),
            Some("Por favor, insira um email válido".to_string())
        );
    }

    #[test]
    fn challenge_threshold() {
        let mut validator = FormValidator::new();
        let nine = Page::default().with(FieldName::Challenge, "123456789");
        assert!(!validator.validate_field(FieldName::Challenge, &nine));
        assert_eq!(
            validator.status(FieldName::Challenge).error(),
            Some(ValidationError::ChallengeTooShort)
        );

        let ten = Page::default().with(FieldName::Challenge, "1234567890");
        assert!(validator.validate_field(FieldName::Challenge, &ten));
    }

    #[test]
    fn validation_is_idempotent() {
        let mut validator = FormValidator::new();
        let page = Page::default().with(FieldName::Phone, "123");
        let first = validator.validate_field(FieldName::Phone, &page);
        let state = validator.clone();
        let second = validator.validate_field(FieldName::Phone, &page);
        assert_eq!(first, second);
        assert_eq!(state, validator);
    }

    #[test]
    fn missing_control_is_inert() {
        let mut validator = FormValidator::new();
        let page = Page::default();
        assert!(validator.validate_field(FieldName::Company, &page));
        assert_eq!(validator.status(FieldName::Company), FieldStatus::Pristine);
    }

    #[test]
    fn all_valid_passes_without_focus() {
        let mut validator = FormValidator::new();
        let mut focused = Vec::new();
        assert!(validator.validate_all(&Page::complete(), |d| focused.push(d.name)));
        assert!(focused.is_empty());
        assert!(validator
            .descriptors()
            .all(|d| d.status() == FieldStatus::Valid));
    }

    #[test]
    fn unchecked_agreement_fails_the_form() {
        let mut validator = FormValidator::new();
        let page = Page::complete().checked(FieldName::Agree, false);
        let mut focused = None;
        assert!(!validator.validate_all(&page, |d| focused = Some(d.name)));
        assert_eq!(focused, Some(FieldName::Agree));
        assert_eq!(
            validator.status(FieldName::Agree).error(),
            Some(ValidationError::AgreementRequired)
        );
    }

    #[test]
    fn focus_goes_to_first_failure_only_once() {
        let mut validator = FormValidator::new();
        let page = Page::complete()
            .with(FieldName::Email, "nope")
            .with(FieldName::Phone, "12")
            .with(FieldName::Challenge, "curto");
        let mut calls = 0;
        let mut focused = None;
        let ok = validator.validate_all(&page, |d| {
            calls += 1;
            focused = Some(d.name);
        });
        assert!(!ok);
        assert_eq!(calls, 1);
        assert_eq!(focused, Some(FieldName::Email));
        // later failures are still decorated
        assert_eq!(
            validator.status(FieldName::Challenge).error(),
            Some(ValidationError::ChallengeTooShort)
        );
    }

    #[test]
    fn validate_all_agrees_with_individual_fields() {
        let pages = [
            Page::complete(),
            Page::complete().with(FieldName::Stores, " "),
            Page::complete().with(FieldName::Name, "A"),
        ];
        for page in pages {
            let mut each = FormValidator::new();
            let individually = FieldName::ALL
                .into_iter()
                .map(|f| each.validate_field(f, &page))
                .fold(true, |acc, ok| acc && ok);

            let mut all = FormValidator::new();
            assert_eq!(all.validate_all(&page, |_| {}), individually);
            for field in FieldName::ALL {
                assert_eq!(all.status(field), each.status(field));
            }
        }
    }

    #[test]
    fn clear_error_is_idempotent() {
        let mut validator = FormValidator::new();
        let page = Page::default().with(FieldName::Email, "x");
        validator.validate_field(FieldName::Email, &page);

        validator.clear_error(FieldName::Email);
        let once = validator.clone();
        validator.clear_error(FieldName::Email);
        assert_eq!(once, validator);
        assert_eq!(validator.status(FieldName::Email), FieldStatus::Pristine);
        assert_eq!(validator.status(FieldName::Email).class(), None);
    }

    #[test]
    fn descriptors_keep_declaration_order() {
        let validator = FormValidator::new();
        let order: Vec<_> = validator.descriptors().map(|d| d.name).collect();
        assert_eq!(order, FieldName::ALL.to_vec());
    }
}
