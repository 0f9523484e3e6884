use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::validator::{FieldSnapshot, FieldSource, FormValidator};
use crate::validation::{is_valid_email, transform_input, FieldName};

/// Current values of the demo request form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub stores: String,
    pub challenge: String,
    pub agree: bool,
}

impl LeadForm {
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Company => &self.company,
            FieldName::Stores => &self.stores,
            FieldName::Challenge => &self.challenge,
            FieldName::Agree => "",
        }
    }

    /// Stores a typed value, applying the field's input mask first.
    pub fn set(&mut self, field: FieldName, raw: &str) {
        let value = transform_input(field, raw);
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Phone => self.phone = value,
            FieldName::Company => self.company = value,
            FieldName::Stores => self.stores = value,
            FieldName::Challenge => self.challenge = value,
            FieldName::Agree => {}
        }
    }
}

impl FieldSource for LeadForm {
    fn read(&self, field: FieldName) -> Option<FieldSnapshot> {
        let snapshot = if field.is_checkbox() {
            FieldSnapshot {
                value: String::new(),
                checked: self.agree,
            }
        } else {
            FieldSnapshot {
                value: self.value(field).to_string(),
                checked: false,
            }
        };
        Some(snapshot)
    }
}

/// What the simulated backend receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub stores: String,
    pub challenge: String,
    pub timestamp: String,
}

impl LeadSubmission {
    pub fn from_form(form: &LeadForm, now: DateTime<Utc>) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            company: form.company.clone(),
            stores: form.stores.clone(),
            challenge: form.challenge.clone(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Coarse check run right before sending: required text present and email
/// shaped like an email. Returns the offending fields.
pub fn quick_check(form: &LeadForm) -> Vec<FieldName> {
    let mut flagged: Vec<FieldName> = FieldName::REQUIRED_TEXT
        .into_iter()
        .filter(|field| form.value(*field).trim().is_empty())
        .collect();

    if !form.email.is_empty() && !is_valid_email(&form.email) && !flagged.contains(&FieldName::Email) {
        flagged.push(FieldName::Email);
    }
    flagged
}

/// Stages a submit goes through, in this order. A failing stage stops the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStage {
    FieldValidation,
    QuickCheck,
    Submission,
}

pub const SUBMIT_STAGES: [SubmitStage; 3] = [
    SubmitStage::FieldValidation,
    SubmitStage::QuickCheck,
    SubmitStage::Submission,
];

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// `fields` lists what to point the user at, most important first.
    Blocked {
        stage: SubmitStage,
        fields: Vec<FieldName>,
    },
    Proceed(LeadSubmission),
}

impl SubmitDecision {
    #[cfg(test)]
    pub fn stage(&self) -> SubmitStage {
        match self {
            SubmitDecision::Blocked { stage, .. } => *stage,
            SubmitDecision::Proceed(_) => SubmitStage::Submission,
        }
    }
}

pub fn run_submit(validator: &mut FormValidator, form: &LeadForm, now: DateTime<Utc>) -> SubmitDecision {
    let mut fields = Vec::new();
    for stage in SUBMIT_STAGES {
        match stage {
            SubmitStage::FieldValidation => {
                let mut first_invalid = None;
                if !validator.validate_all(form, |d| first_invalid = Some(d.name)) {
                    fields.extend(first_invalid);
                    return SubmitDecision::Blocked { stage, fields };
                }
            }
            SubmitStage::QuickCheck => {
                fields = quick_check(form);
                if !fields.is_empty() {
                    return SubmitDecision::Blocked { stage, fields };
                }
            }
            SubmitStage::Submission => break,
        }
    }
    SubmitDecision::Proceed(LeadSubmission::from_form(form, now))
}
