//! Check-digit validation for the individual tax ID (CPF).
//!
//! A span that fails validation is still masked and counted: an
//! invalid-looking ID is still sensitive-shaped data and must not leak.
//! The failure is surfaced separately through `invalid_counts`.

/// Validate the two trailing check digits of an 11-digit tax ID.
///
/// Rejects anything that is not exactly 11 ASCII digits, and the
/// well-known degenerate IDs where all digits are identical.
pub fn validate_tax_id(digits: &str) -> bool {
    if digits.len() != 11 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let d: Vec<u32> = digits.bytes().map(|b| (b - b'0') as u32).collect();

    if d.iter().all(|&x| x == d[0]) {
        return false;
    }

    let sum1: u32 = (0..9).map(|i| d[i] * (10 - i as u32)).sum();
    let check1 = (sum1 * 10 % 11) % 10;
    if check1 != d[9] {
        return false;
    }

    let sum2: u32 = (0..10).map(|i| d[i] * (11 - i as u32)).sum();
    let check2 = (sum2 * 10 % 11) % 10;
    check2 == d[10]
}

#[cfg(test)]
mod tests {
    use super::*;

    // 529.982.247-25 is the classic known-valid CPF.
    const KNOWN_VALID: &str = "52998224725";

    #[test]
    fn known_valid_id_validates() {
        assert!(validate_tax_id(KNOWN_VALID));
    }

    #[test]
    fn any_single_digit_mutation_invalidates() {
        for pos in 0..11 {
            let original = KNOWN_VALID.as_bytes()[pos];
            for replacement in b'0'..=b'9' {
                if replacement == original {
                    continue;
                }
                let mut mutated = KNOWN_VALID.as_bytes().to_vec();
                mutated[pos] = replacement;
                let mutated = String::from_utf8(mutated).unwrap();
                assert!(
                    !validate_tax_id(&mutated),
                    "mutation at {pos} should invalidate: {mutated}"
                );
            }
        }
    }

    #[test]
    fn repeated_digits_rejected() {
        for digit in b'0'..=b'9' {
            let id = String::from_utf8(vec![digit; 11]).unwrap();
            assert!(!validate_tax_id(&id), "{id}");
        }
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!validate_tax_id("5299822472"));
        assert!(!validate_tax_id("529982247255"));
        assert!(!validate_tax_id(""));
    }

    #[test]
    fn non_digit_input_rejected() {
        assert!(!validate_tax_id("529.982.247"));
        assert!(!validate_tax_id("5299822472a"));
    }
}
