//! Integration tests for pashu-validation

use pashu_validation::*;

#[test]
fn test_digit_count_boundaries() {
    let aadhaar = "1".repeat(AADHAAR_DIGITS);
    let phone = "9".repeat(PHONE_DIGITS);

    assert!(AadhaarNumber::validate(&aadhaar, "aadhaar").is_ok());
    assert!(AadhaarNumber::validate(&aadhaar[1..], "aadhaar").is_err());
    assert!(AadhaarNumber::validate(&format!("{}1", aadhaar), "aadhaar").is_err());

    assert!(PhoneNumber::validate(&phone, "phone").is_ok());
    assert!(PhoneNumber::validate(&phone[1..], "phone").is_err());
    assert!(PhoneNumber::validate(&format!("{}9", phone), "phone").is_err());
}

#[test]
fn test_aadhaar_shaped_phone_is_rejected() {
    let err = PhoneNumber::validate("123456789012", "phone").unwrap_err();
    assert_eq!(err.to_string(), "phone: phone must be exactly 10 digits");
    assert_eq!(err.message_key.as_deref(), Some("invalidPhone"));
}
