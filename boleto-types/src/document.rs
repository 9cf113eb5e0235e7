//! CPF/CNPJ check-digit validation.
//!
//! Brazilian tax identifiers carry two trailing check digits computed with
//! modulo-11 arithmetic over the preceding digits. Both validators are pure
//! predicates: they never panic and never allocate beyond the cleaned copy.

/// Strips every non-digit character from a document string.
pub fn clean(document: &str) -> String {
    document.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validates an individual tax id (CPF, 11 digits).
pub fn is_valid_cpf(cpf: &str) -> bool {
    let cpf = clean(cpf);
    if cpf.len() != 11 {
        return false;
    }

    let digits: Vec<u32> = cpf.chars().filter_map(|c| c.to_digit(10)).collect();

    // Sequences like 111.111.111-11 satisfy the checksum but are not issued
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..9], (2..=10).rev());
    if digits[9] != first {
        return false;
    }

    let second = check_digit(&digits[..10], (2..=11).rev());
    digits[10] == second
}

/// Validates a company tax id (CNPJ, 14 digits).
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let cnpj = clean(cnpj);
    if cnpj.len() != 14 {
        return false;
    }

    let digits: Vec<u32> = cnpj.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let first = check_digit(&digits[..12], FIRST_WEIGHTS.iter().copied());
    if digits[12] != first {
        return false;
    }

    let second = check_digit(&digits[..13], SECOND_WEIGHTS.iter().copied());
    digits[13] == second
}

/// Modulo-11 check digit: remainders below 2 clamp to 0.
fn check_digit(digits: &[u32], weights: impl Iterator<Item = u32>) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { 11 - remainder }
}
