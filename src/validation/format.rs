use super::fields::FieldName;

const PHONE_MAX_DIGITS: usize = 11;

pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Progressive `(DD) DDDDD-DDDD` mask for Brazilian phone numbers.
/// Extra digits beyond 11 are dropped; no digits gives an empty string.
pub fn format_phone(value: &str) -> String {
    let digits: Vec<char> = digits_only(value).chars().take(PHONE_MAX_DIGITS).collect();
    if digits.is_empty() {
        return String::new();
    }

    let mut formatted = String::with_capacity(16);
    formatted.push('(');
    formatted.extend(digits.iter().take(2));
    if digits.len() > 2 {
        formatted.push_str(") ");
        formatted.extend(digits.iter().skip(2).take(5));
    }
    if digits.len() > 7 {
        formatted.push('-');
        formatted.extend(digits.iter().skip(7));
    }
    formatted
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c.is_whitespace()
        || (('\u{C0}'..='\u{FF}').contains(&c) && c != '×' && c != '÷')
}

/// Drops everything but letters (accented Latin-1 included) and whitespace.
pub fn filter_name(value: &str) -> String {
    value.chars().filter(|c| is_name_char(*c)).collect()
}

/// Shape applied to a field's raw value on every input event.
pub fn transform_input(field: FieldName, raw: &str) -> String {
    match field {
        FieldName::Name => filter_name(raw),
        FieldName::Phone => format_phone(raw),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_mobile_number() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn formats_progressively() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 98765");
        assert_eq!(format_phone("11987654"), "(11) 98765-4");
    }

    #[test]
    fn non_digit_input_clears_the_field() {
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn truncates_to_eleven_digits() {
        assert_eq!(format_phone("119876543219999"), "(11) 98765-4321");
    }

    #[test]
    fn formatting_is_idempotent() {
        let once = format_phone("11987654321");
        assert_eq!(format_phone(&once), once);

        let partial = format_phone("2134");
        assert_eq!(format_phone(&partial), partial);
    }

    #[test]
    fn stripping_formatted_output_restores_digits() {
        for raw in ["11987654321", "1198", "55 11 98765 4321 000", "(21) 3456-7890"] {
            let expected: String = digits_only(raw).chars().take(11).collect();
            assert_eq!(digits_only(&format_phone(raw)), expected);
        }
    }

    #[test]
    fn name_filter_keeps_letters_accents_and_spaces() {
        assert_eq!(filter_name("João da Silva"), "João da Silva");
        assert_eq!(filter_name("Zé 123 Ñandú!"), "Zé  Ñandú");
        assert_eq!(filter_name("Ana_Beatriz@2"), "AnaBeatriz");
    }

    #[test]
    fn name_filter_drops_math_signs_in_latin1_range() {
        assert_eq!(filter_name("a×b÷c"), "abc");
    }

    #[test]
    fn transform_only_touches_shaped_fields() {
        assert_eq!(transform_input(FieldName::Phone, "11987654321"), "(11) 98765-4321");
        assert_eq!(transform_input(FieldName::Name, "R2D2"), "RD");
        assert_eq!(transform_input(FieldName::Company, "Loja 2 & Cia"), "Loja 2 & Cia");
    }
}
