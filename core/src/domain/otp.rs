//! One-time-passcode rules: format, randomness, and validity window.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Number of digits in a generated code
pub const OTP_LENGTH: usize = 6;

/// How long a code stays valid after generation
pub const OTP_VALIDITY_MINUTES: i64 = 10;

/// Generates a uniformly random 6-digit code in the 100000..=999999 range
pub fn generate() -> String {
    let code: u32 = rand::thread_rng().gen_range(100_000..=999_999);
    code.to_string()
}

/// Expiry timestamp for a code generated at `now`
pub fn expiry_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::minutes(OTP_VALIDITY_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_codes_are_six_digit_numbers_in_range() {
        for _ in 0..200 {
            let code = generate();
            assert_eq!(code.len(), OTP_LENGTH);
            let value: u32 = code.parse().expect("code must be numeric");
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_codes_vary() {
        let codes: std::collections::HashSet<String> = (0..50).map(|_| generate()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_expiry_window() {
        let now = Utc::now();
        let expiry = expiry_from(now);
        assert_eq!(expiry - now, Duration::minutes(OTP_VALIDITY_MINUTES));
    }
}
