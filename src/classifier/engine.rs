use crate::models::ClassificationResult;

use super::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("sum of numeric tokens exceeds {}", u128::MAX)]
    SumOverflow,
}

/// Classify every token and aggregate the numeric and alphabetic ones.
///
/// Rules, applied once per token in input order:
/// - **Numeric** (`^[0-9]+$`): value added to the sum; original text goes to
///   `even_numbers` or `odd_numbers` by parity.
/// - **Alphabetic** (`^[A-Za-z]+$`): uppercased into `alphabets`; each letter,
///   original case, feeds `concat_string`.
/// - **Special**: everything else, verbatim.
///
/// Fails with `InvalidInput` on an empty sequence (before any work) and with
/// `SumOverflow` if a numeric value or the running total leaves `u128`.
pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Result<ClassificationResult, ClassifyError> {
    if tokens.is_empty() {
        return Err(ClassifyError::InvalidInput(
            "Data array must contain at least one element".into(),
        ));
    }

    let mut result = ClassificationResult::default();
    let mut sum: u128 = 0;
    let mut letters: Vec<char> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match TokenKind::of(token) {
            TokenKind::Numeric => {
                let value: u128 = token.parse().map_err(|_| ClassifyError::SumOverflow)?;
                sum = sum.checked_add(value).ok_or(ClassifyError::SumOverflow)?;

                if value % 2 == 0 {
                    result.even_numbers.push(token.to_string());
                } else {
                    result.odd_numbers.push(token.to_string());
                }
            }
            TokenKind::Alphabetic => {
                result.alphabets.push(token.to_ascii_uppercase());
                letters.extend(token.chars());
            }
            TokenKind::Special => {
                result.special_characters.push(token.to_string());
            }
        }
    }

    result.sum = sum.to_string();
    result.concat_string = concat_string(&letters);

    Ok(result)
}

/// Reverse the collected letters, then alternate case starting with upper.
pub fn concat_string(letters: &[char]) -> String {
    letters
        .iter()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
