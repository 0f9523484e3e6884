use std::rc::Rc;

use chrono::Utc;
use yew::Reducible;

use super::submission::{run_submit, LeadForm, LeadSubmission, SubmitDecision, SubmitStage};
use super::validator::FormValidator;
use crate::utils::dismiss::Dismissible;
use crate::validation::FieldName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRequest {
    pub seq: u32,
    pub field: FieldName,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Input(FieldName, String),
    SetAgree(bool),
    Blur(FieldName),
    Submit,
    SubmissionFinished,
    DismissGeneralError(u32),
    ClearHighlight(u32),
    DismissSuccess(u32),
}

/// Everything the demo form renders from. Timers and effects only ever talk
/// to it through [`FormAction`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoFormState {
    pub form: LeadForm,
    pub validator: FormValidator,
    pub general_error: Dismissible,
    /// Fields outlined by the quick pre-submit check.
    pub highlight: Dismissible<Vec<FieldName>>,
    pub success: Dismissible,
    pub focus: Option<FocusRequest>,
    pending: Option<LeadSubmission>,
}

impl DemoFormState {
    pub fn pending_submission(&self) -> Option<&LeadSubmission> {
        self.pending.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_highlighted(&self, field: FieldName) -> bool {
        self.highlight
            .payload()
            .map_or(false, |fields| fields.contains(&field))
    }

    fn request_focus(&mut self, field: FieldName) {
        let seq = self.focus.map_or(1, |f| f.seq.wrapping_add(1));
        self.focus = Some(FocusRequest { seq, field });
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Input(field, raw) => {
                self.form.set(field, &raw);
                self.validator.clear_error(field);
            }
            FormAction::SetAgree(checked) => {
                self.form.agree = checked;
                self.validator.clear_error(FieldName::Agree);
            }
            FormAction::Blur(field) => {
                self.validator.validate_field(field, &self.form);
            }
            FormAction::Submit => self.submit(),
            FormAction::SubmissionFinished => {
                if self.pending.take().is_none() {
                    return;
                }
                self.form = LeadForm::default();
                self.validator.reset();
                self.general_error.close();
                self.highlight.close();
                self.success.show(());
                log::info!("demo request sent");
            }
            FormAction::DismissGeneralError(token) => {
                self.general_error.dismiss(token);
            }
            FormAction::ClearHighlight(token) => {
                self.highlight.dismiss(token);
            }
            FormAction::DismissSuccess(token) => {
                self.success.dismiss(token);
            }
        }
    }

    fn submit(&mut self) {
        if self.is_submitting() {
            log::debug!("submit ignored, already sending");
            return;
        }
        match run_submit(&mut self.validator, &self.form, Utc::now()) {
            SubmitDecision::Proceed(lead) => {
                self.general_error.close();
                self.pending = Some(lead);
            }
            SubmitDecision::Blocked { stage, fields } => {
                log::info!("submit blocked at {:?}: {:?}", stage, fields);
                if stage == SubmitStage::FieldValidation {
                    self.general_error.show(());
                } else {
                    self.highlight.show(fields.clone());
                }
                if let Some(first) = fields.first() {
                    self.request_focus(*first);
                }
            }
        }
    }
}

impl Reducible for DemoFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validator::FieldStatus;
    use crate::validation::ValidationError;

    fn typed(state: &mut DemoFormState, field: FieldName, value: &str) {
        state.apply(FormAction::Input(field, value.to_string()));
    }

    fn complete() -> DemoFormState {
        let mut state = DemoFormState::default();
        typed(&mut state, FieldName::Name, "Fernanda Lima");
        typed(&mut state, FieldName::Email, "fernanda@modafit.com.br");
        typed(&mut state, FieldName::Phone, "21998877665");
        typed(&mut state, FieldName::Company, "ModaFit");
        typed(&mut state, FieldName::Stores, "11+");
        typed(&mut state, FieldName::Challenge, "Equipe demora a retornar contatos");
        state.apply(FormAction::SetAgree(true));
        state
    }

    #[test]
    fn blur_validates_and_input_clears() {
        let mut state = DemoFormState::default();
        typed(&mut state, FieldName::Email, "a@b");
        state.apply(FormAction::Blur(FieldName::Email));
        assert_eq!(
            state.validator.status(FieldName::Email),
            FieldStatus::Invalid(ValidationError::InvalidEmail)
        );

        typed(&mut state, FieldName::Email, "a@b.");
        assert_eq!(state.validator.status(FieldName::Email), FieldStatus::Pristine);
    }

    #[test]
    fn phone_input_is_formatted() {
        let mut state = DemoFormState::default();
        typed(&mut state, FieldName::Phone, "11987654321");
        assert_eq!(state.form.phone, "(11) 98765-4321");
    }

    #[test]
    fn invalid_submit_shows_banner_and_focuses_first_error() {
        let mut state = complete();
        typed(&mut state, FieldName::Phone, "119");
        state.apply(FormAction::SetAgree(false));
        state.apply(FormAction::Submit);

        assert!(state.general_error.is_visible());
        assert!(!state.is_submitting());
        assert_eq!(state.focus.map(|f| f.field), Some(FieldName::Phone));
    }

    #[test]
    fn repeated_failures_issue_new_focus_requests() {
        let mut state = DemoFormState::default();
        state.apply(FormAction::Submit);
        let first = state.focus;
        state.apply(FormAction::Submit);
        assert_ne!(state.focus, first);
        assert_eq!(state.focus.map(|f| f.field), Some(FieldName::Name));
    }

    #[test]
    fn each_blocked_submit_replaces_the_banner() {
        let mut state = DemoFormState::default();
        let mut tokens = Vec::new();
        for _ in 0..3 {
            state.apply(FormAction::Submit);
            tokens.extend(state.general_error.token());
        }
        tokens.dedup();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn general_error_timer_only_closes_its_own_banner() {
        let mut state = DemoFormState::default();
        state.apply(FormAction::Submit);
        let old = state.general_error.token().unwrap();
        state.apply(FormAction::Submit);
        let current = state.general_error.token().unwrap();

        state.apply(FormAction::DismissGeneralError(old));
        assert!(state.general_error.is_visible());
        state.apply(FormAction::DismissGeneralError(current));
        assert!(!state.general_error.is_visible());
    }

    #[test]
    fn valid_submit_goes_pending_then_resets() {
        let mut state = complete();
        state.apply(FormAction::Submit);
        assert!(state.is_submitting());
        assert_eq!(
            state.pending_submission().map(|l| l.email.as_str()),
            Some("fernanda@modafit.com.br")
        );
        assert!(!state.general_error.is_visible());

        // second click while sending is ignored
        let before = state.clone();
        state.apply(FormAction::Submit);
        assert_eq!(state, before);

        state.apply(FormAction::SubmissionFinished);
        assert!(!state.is_submitting());
        assert_eq!(state.form, LeadForm::default());
        assert!(state.success.is_visible());
        assert!(FieldName::ALL
            .into_iter()
            .all(|f| state.validator.status(f) == FieldStatus::Pristine));
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut state = complete();
        let before = state.clone();
        state.apply(FormAction::SubmissionFinished);
        assert_eq!(state, before);
    }

    #[test]
    fn success_banner_dismisses_by_token() {
        let mut state = complete();
        state.apply(FormAction::Submit);
        state.apply(FormAction::SubmissionFinished);
        let token = state.success.token().unwrap();
        state.apply(FormAction::DismissSuccess(token + 1));
        assert!(state.success.is_visible());
        state.apply(FormAction::DismissSuccess(token));
        assert!(!state.success.is_visible());
    }

    #[test]
    fn highlight_clears_by_token() {
        let mut state = DemoFormState::default();
        let token = state.highlight.show(vec![FieldName::Company]);
        assert!(state.is_highlighted(FieldName::Company));
        assert!(!state.is_highlighted(FieldName::Email));
        state.apply(FormAction::ClearHighlight(token));
        assert!(!state.is_highlighted(FieldName::Company));
    }
}
