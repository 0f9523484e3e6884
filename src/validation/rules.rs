use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;
use thiserror::Error;

use super::format::digits_only;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const NAME_LENGTH: RangeInclusive<usize> = 2..=100;
const PHONE_DIGITS: RangeInclusive<usize> = 10..=15;
const CHALLENGE_LENGTH: RangeInclusive<usize> = 10..=1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingValue,
    FormatInvalid,
    OutOfRange,
    NotAcknowledged,
}

/// A single failed check. `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Este campo é obrigatório")]
    Required,
    #[error("Nome deve ter pelo menos 2 caracteres")]
    NameTooShort,
    #[error("Nome deve ter no máximo 100 caracteres")]
    NameTooLong,
    #[error("Por favor, insira um email válido")]
    InvalidEmail,
    #[error("Telefone deve ter pelo menos 10 dígitos")]
    PhoneTooShort,
    #[error("Telefone muito longo")]
    PhoneTooLong,
    #[error("Por favor, descreva melhor seu desafio")]
    ChallengeTooShort,
    #[error("Descrição muito longa (máximo 1000 caracteres)")]
    ChallengeTooLong,
    #[error("Você precisa concordar com os termos")]
    AgreementRequired,
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Required => ErrorKind::MissingValue,
            Self::InvalidEmail => ErrorKind::FormatInvalid,
            Self::NameTooShort
            | Self::NameTooLong
            | Self::PhoneTooShort
            | Self::PhoneTooLong
            | Self::ChallengeTooShort
            | Self::ChallengeTooLong => ErrorKind::OutOfRange,
            Self::AgreementRequired => ErrorKind::NotAcknowledged,
        }
    }
}

/// What a rule gets to look at: the trimmed value and, for checkboxes,
/// whether the box is ticked.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    pub value: &'a str,
    pub checked: bool,
}

impl<'a> FieldInput<'a> {
    #[cfg(test)]
    pub fn text(value: &'a str) -> Self {
        Self { value, checked: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    NameLength,
    EmailFormat,
    PhoneDigits,
    ChallengeLength,
    Agreement,
}

impl Rule {
    pub fn check(self, input: &FieldInput<'_>) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if input.value.trim().is_empty() {
                    Err(ValidationError::Required)
                } else {
                    Ok(())
                }
            }
            Rule::NameLength => within(
                input.value.chars().count(),
                NAME_LENGTH,
                ValidationError::NameTooShort,
                ValidationError::NameTooLong,
            ),
            Rule::EmailFormat => {
                if is_valid_email(input.value) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidEmail)
                }
            }
            Rule::PhoneDigits => within(
                digits_only(input.value).len(),
                PHONE_DIGITS,
                ValidationError::PhoneTooShort,
                ValidationError::PhoneTooLong,
            ),
            Rule::ChallengeLength => within(
                input.value.chars().count(),
                CHALLENGE_LENGTH,
                ValidationError::ChallengeTooShort,
                ValidationError::ChallengeTooLong,
            ),
            Rule::Agreement => {
                if input.checked {
                    Ok(())
                } else {
                    Err(ValidationError::AgreementRequired)
                }
            }
        }
    }
}

fn within(
    len: usize,
    bounds: RangeInclusive<usize>,
    too_short: ValidationError,
    too_long: ValidationError,
) -> Result<(), ValidationError> {
    if len < *bounds.start() {
        Err(too_short)
    } else if len > *bounds.end() {
        Err(too_long)
    } else {
        Ok(())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Runs `rules` in order and stops at the first failure.
pub fn run_chain(rules: &[Rule], input: &FieldInput<'_>) -> Result<(), ValidationError> {
    rules.iter().try_for_each(|rule| rule.check(input))
}
