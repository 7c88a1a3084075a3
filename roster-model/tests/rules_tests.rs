use proptest::prelude::*;
use roster_model::{FieldRule, check_field};
use roster_types::Field;

fn check(field: Field, value: &str) -> Option<&'static str> {
    check_field(value, &FieldRule::for_field(field))
}

// ── Required check ───────────────────────────────────────────────

#[test]
fn empty_values_fail_with_required_message() {
    assert_eq!(check(Field::StudentId, ""), Some("Mã SV không được để trống"));
    assert_eq!(check(Field::FullName, ""), Some("Họ tên không được để trống"));
    assert_eq!(
        check(Field::PhoneNumber, ""),
        Some("Số điện thoại không được để trống")
    );
    assert_eq!(check(Field::Email, ""), Some("Email không được để trống"));
}

#[test]
fn whitespace_only_counts_as_empty() {
    assert_eq!(check(Field::FullName, "   "), Some("Họ tên không được để trống"));
    assert_eq!(check(Field::StudentId, "\t"), Some("Mã SV không được để trống"));
}

#[test]
fn optional_rule_accepts_empty() {
    let mut rule = FieldRule::for_field(Field::Email);
    rule.required = false;
    assert_eq!(check_field("", &rule), None);
    assert_eq!(check_field("nope", &rule), Some("Email không hợp lệ"));
}

// ── studentId ────────────────────────────────────────────────────

#[test]
fn student_id_accepts_six_to_eight_digits() {
    assert_eq!(check(Field::StudentId, "123456"), None);
    assert_eq!(check(Field::StudentId, "1234567"), None);
    assert_eq!(check(Field::StudentId, "12345678"), None);
}

#[test]
fn student_id_rejects_bad_length_or_letters() {
    let msg = Some("Mã SV phải là số và có độ dài từ 6 đến 8 ký tự");
    assert_eq!(check(Field::StudentId, "12345"), msg);
    assert_eq!(check(Field::StudentId, "123456789"), msg);
    assert_eq!(check(Field::StudentId, "12345a"), msg);
    assert_eq!(check(Field::StudentId, " 123456"), msg);
}

// ── fullName ─────────────────────────────────────────────────────

#[test]
fn full_name_length_bounds() {
    let msg = Some("Họ tên phải là chữ và có độ dài từ 3 đến 50 ký tự");
    assert_eq!(check(Field::FullName, "Ab"), msg);
    assert_eq!(check(Field::FullName, "Anb"), None);
    assert_eq!(check(Field::FullName, &"a".repeat(50)), None);
    assert_eq!(check(Field::FullName, &"a".repeat(51)), msg);
}

#[test]
fn full_name_accepts_vietnamese_letters() {
    assert_eq!(check(Field::FullName, "Nguyễn Văn An"), None);
    assert_eq!(check(Field::FullName, "Đặng Thị Hồng"), None);
    assert_eq!(check(Field::FullName, "Trần Quốc Toản"), None);
}

#[test]
fn full_name_length_counts_characters_not_bytes() {
    // 3 characters, 6+ bytes
    assert_eq!(check(Field::FullName, "Đặn"), None);
    assert_eq!(check(Field::FullName, &"ữ".repeat(50)), None);
}

#[test]
fn full_name_rejects_digits_and_symbols() {
    let msg = Some("Họ tên phải là chữ và có độ dài từ 3 đến 50 ký tự");
    assert_eq!(check(Field::FullName, "An 2"), msg);
    assert_eq!(check(Field::FullName, "An-Nguyen"), msg);
    assert_eq!(check(Field::FullName, "O'Brien"), msg);
}

// ── phoneNumber ──────────────────────────────────────────────────

#[test]
fn phone_number_accepts_ten_or_eleven_digits() {
    assert_eq!(check(Field::PhoneNumber, "0912345678"), None);
    assert_eq!(check(Field::PhoneNumber, "09123456789"), None);
}

#[test]
fn phone_number_rejects_other_shapes() {
    let msg = Some("Số điện thoại phải là số và có độ dài từ 10 đến 11 ký tự");
    assert_eq!(check(Field::PhoneNumber, "091234567"), msg);
    assert_eq!(check(Field::PhoneNumber, "091234567890"), msg);
    assert_eq!(check(Field::PhoneNumber, "+84912345678"), msg);
    assert_eq!(check(Field::PhoneNumber, "0912 345 678"), msg);
}

// ── email ────────────────────────────────────────────────────────

#[test]
fn email_accepts_common_addresses() {
    for ok in [
        "an@x.com",
        "first.last@sub.example.vn",
        "a+tag@mail-server.io",
        "An.Nguyen@Example.COM",
    ] {
        assert_eq!(check(Field::Email, ok), None, "{ok}");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in [
        "an",
        "an@",
        "@x.com",
        "an@x",
        "an@-x.com",
        "an@x-.com",
        "an x@x.com",
        "an@@x.com",
        "a..b@x.com",
    ] {
        assert_eq!(check(Field::Email, bad), Some("Email không hợp lệ"), "{bad}");
    }
}

// ── Determinism ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn check_is_deterministic(value in "\\PC{0,60}", idx in 0usize..4) {
        let field = Field::ALL[idx];
        prop_assert_eq!(check(field, &value), check(field, &value));
    }

    #[test]
    fn digit_ids_in_range_always_pass(value in "[0-9]{6,8}") {
        prop_assert_eq!(check(Field::StudentId, &value), None);
    }
}
