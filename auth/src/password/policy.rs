use std::fmt;

use thiserror::Error;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "<>@!#$%^&*()_+[]{}?:;|'./~`=,";

/// A single reason a password is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordViolation {
    TooShort { min: usize },
    NotAlphanumericMixedCase,
    MissingSpecialCharacter,
}

impl fmt::Display for PasswordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordViolation::TooShort { min } => {
                write!(f, "Minimum password length should be {}", min)
            }
            PasswordViolation::NotAlphanumericMixedCase => {
                f.write_str("Password should be alphanumeric with mixed case")
            }
            PasswordViolation::MissingSpecialCharacter => {
                f.write_str("Password should contain a special character")
            }
        }
    }
}

/// Every violation found for a rejected password.
///
/// Displays as one message per line, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_lines(.0))]
pub struct PasswordViolations(pub Vec<PasswordViolation>);

fn join_lines(violations: &[PasswordViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stateless password strength rules.
///
/// A password must be at least `min_length` characters, contain an ASCII
/// lowercase letter, an ASCII uppercase letter and a digit, and contain at
/// least one character from [`SPECIAL_CHARACTERS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub const DEFAULT_MIN_LENGTH: usize = 8;

    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check a password against every rule.
    ///
    /// # Returns
    /// All violations found; empty when the password is acceptable
    pub fn evaluate(&self, password: &str) -> Vec<PasswordViolation> {
        let mut violations = Vec::new();

        if password.chars().count() < self.min_length {
            violations.push(PasswordViolation::TooShort {
                min: self.min_length,
            });
        }

        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            violations.push(PasswordViolation::NotAlphanumericMixedCase);
        }

        if !password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)) {
            violations.push(PasswordViolation::MissingSpecialCharacter);
        }

        violations
    }

    /// Check a password and fail with every violation found.
    ///
    /// # Errors
    /// * `PasswordViolations` - At least one rule is not met
    pub fn validate(&self, password: &str) -> Result<(), PasswordViolations> {
        let violations = self.evaluate(password);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PasswordViolations(violations))
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::with_min_length(Self::DEFAULT_MIN_LENGTH)
    }
}
