use serde::Serialize;

/// Output of one classification pass.
///
/// The four token lists partition the input; each keeps input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Numeric tokens with an odd value, in their original string form.
    pub odd_numbers: Vec<String>,
    /// Numeric tokens with an even value, in their original string form.
    pub even_numbers: Vec<String>,
    /// Alphabetic tokens, uppercased.
    pub alphabets: Vec<String>,
    /// Tokens that are neither purely numeric nor purely alphabetic, verbatim.
    pub special_characters: Vec<String>,
    /// Base-10 sum of every numeric token; `"0"` when there are none.
    pub sum: String,
    /// Reversed letters of the alphabetic tokens with alternating case.
    pub concat_string: String,
}

impl ClassificationResult {
    /// Number of input tokens accounted for across the four lists.
    pub fn token_count(&self) -> usize {
        self.odd_numbers.len()
            + self.even_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
    }

    pub fn numeric_count(&self) -> usize {
        self.odd_numbers.len() + self.even_numbers.len()
    }
}
