//! Field-level input validation.
//!
//! # Responsibility
//! - Check one form field value against its declared constraints.
//!
//! # Invariants
//! - Every present constraint is evaluated; results are combined with AND.
//! - Length constraints only apply to text, range constraints only to numbers.
//!   Mismatched constraints are inert, never an error.

/// Raw field value as collected from a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// String form used by the `required` check.
    ///
    /// Whole numbers render without a fractional part (`0` -> `"0"`).
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// A value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Starts a validatable with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input` satisfies all of its constraints.
pub fn validate(input: &Validatable) -> bool {
    let value = &input.value;
    let mut is_valid = true;

    if input.required {
        is_valid = is_valid && !value.to_display_string().trim().is_empty();
    }
    if let (Some(min_length), FieldValue::Text(text)) = (input.min_length, value) {
        is_valid = is_valid && text.chars().count() >= min_length;
    }
    if let (Some(max_length), FieldValue::Text(text)) = (input.max_length, value) {
        is_valid = is_valid && text.chars().count() <= max_length;
    }
    if let (Some(min), FieldValue::Number(number)) = (input.min, value) {
        is_valid = is_valid && *number >= min;
    }
    if let (Some(max), FieldValue::Number(number)) = (input.max, value) {
        is_valid = is_valid && *number <= max;
    }

    is_valid
}

/// Converts raw text into a number the way a form's numeric coercion does.
///
/// Blank input becomes `0`; `0x`/`0o`/`0b` prefixes are integer literals;
/// `Infinity` is the only accepted spelling of infinity. Anything else that
/// is not a decimal literal becomes `NaN`, which fails every `min`/`max`
/// comparison.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix_literal = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_literal {
        return u64::from_str_radix(digits, radix)
            .map(|value| value as f64)
            .unwrap_or(f64::NAN);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rejects `inf`, `nan` and friends, which f64 parsing would otherwise accept.
    let is_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
