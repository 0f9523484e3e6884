use super::rules::Rule;

/// The fields of the demo request form, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Company,
    Stores,
    Challenge,
    Agree,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Company,
        FieldName::Stores,
        FieldName::Challenge,
        FieldName::Agree,
    ];

    /// Text fields the quick pre-submit check requires.
    pub const REQUIRED_TEXT: [FieldName; 6] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Company,
        FieldName::Stores,
        FieldName::Challenge,
    ];

    /// DOM id of the control.
    pub fn id(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Company => "company",
            FieldName::Stores => "stores",
            FieldName::Challenge => "challenge",
            FieldName::Agree => "agree",
        }
    }

    pub fn rules(self) -> &'static [Rule] {
        match self {
            FieldName::Name => &[Rule::Required, Rule::NameLength],
            FieldName::Email => &[Rule::Required, Rule::EmailFormat],
            FieldName::Phone => &[Rule::Required, Rule::PhoneDigits],
            FieldName::Company | FieldName::Stores => &[Rule::Required],
            FieldName::Challenge => &[Rule::Required, Rule::ChallengeLength],
            FieldName::Agree => &[Rule::Agreement],
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FieldName::Agree)
    }
}
