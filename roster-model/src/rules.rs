//! Per-field validation rules.
//!
//! Each [`FieldRule`] is a required check followed by a full-match pattern
//! check. [`check_field`] evaluates one rule against one raw input string.

use regex_lite::Regex;
use roster_types::Field;
use std::sync::OnceLock;

/// Letters accepted in a full name besides ASCII `a-zA-Z`.
pub const NAME_LETTERS: &str = "ÀÁÂÃÈÉÊÌÍÒÓÔÕÙÚĂĐĨŨƠàáâãèéêìíòóôõùúăđĩũơƯĂẠẢẤẦẨẪẬẮẰẲẴẶẸẺẼỀỀỂưăạảấầẩẫậắằẳẵặẹẻẽềềểếỄỆỈỊỌỎỐỒỔỖỘỚỜỞỠỢỤỦỨỪễệỉịọỏốồổỗộớờởỡợụủứừỬỮỰỲỴÝỶỸửữựỳỵỷỹ";

const EMAIL_PATTERN: &str = r"(?i)^[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$";

fn student_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{6,8}$").expect("student id pattern compiles"))
}

fn full_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"^[a-zA-Z{NAME_LETTERS}\s]{{3,50}}$");
        Regex::new(&pattern).expect("full name pattern compiles")
    })
}

fn phone_number_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{10,11}$").expect("phone number pattern compiles"))
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// A fixed validation rule for one field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    /// Reject empty and whitespace-only values.
    pub required: bool,
    pub required_message: &'static str,
    /// Must match the whole value. Only checked for non-empty input.
    pub pattern: Option<&'static Regex>,
    pub pattern_message: &'static str,
}

impl FieldRule {
    /// The rule for `field`.
    #[must_use]
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::StudentId => Self {
                field,
                required: true,
                required_message: "Mã SV không được để trống",
                pattern: Some(student_id_pattern()),
                pattern_message: "Mã SV phải là số và có độ dài từ 6 đến 8 ký tự",
            },
            Field::FullName => Self {
                field,
                required: true,
                required_message: "Họ tên không được để trống",
                pattern: Some(full_name_pattern()),
                pattern_message: "Họ tên phải là chữ và có độ dài từ 3 đến 50 ký tự",
            },
            Field::PhoneNumber => Self {
                field,
                required: true,
                required_message: "Số điện thoại không được để trống",
                pattern: Some(phone_number_pattern()),
                pattern_message: "Số điện thoại phải là số và có độ dài từ 10 đến 11 ký tự",
            },
            Field::Email => Self {
                field,
                required: true,
                required_message: "Email không được để trống",
                pattern: Some(email_pattern()),
                pattern_message: "Email không hợp lệ",
            },
        }
    }
}

/// Check one raw value against a rule.
///
/// Returns `None` when the value is valid, otherwise the message of the first
/// failing check (required before pattern).
#[must_use]
pub fn check_field(value: &str, rule: &FieldRule) -> Option<&'static str> {
    if value.trim().is_empty() {
        return rule.required.then_some(rule.required_message);
    }
    match rule.pattern {
        Some(re) if !re.is_match(value) => Some(rule.pattern_message),
        _ => None,
    }
}
