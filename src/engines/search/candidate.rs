/// Splits a candidate into `width` base-10 digits, most significant first.
///
/// Digit `k` (counting from the least significant end) is
/// `(candidate / 10^k) % 10`, so values narrower than `width` come back
/// zero-padded on the left. A fresh vector is returned per candidate; no
/// scratch state is shared between iterations.
pub fn decompose(candidate: u64, width: usize) -> Vec<u8> {
    (0..width)
        .rev()
        .map(|k| ((candidate / 10u64.pow(k as u32)) % 10) as u8)
        .collect()
}

/// Inverse of [`decompose`]: folds digits back into the integer they encode.
pub fn recompose(digits: &[u8]) -> u64 {
    digits
        .iter()
        .fold(0u64, |acc, &digit| acc * 10 + u64::from(digit))
}

pub fn has_zero_digit(digits: &[u8]) -> bool {
    digits.iter().any(|&digit| digit == 0)
}
