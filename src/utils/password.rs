//! Random password generation and strength labelling.

use rand::Rng;

/// Characters a generated password is drawn from.
pub const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";

pub const DEFAULT_PASSWORD_LENGTH: i64 = 12;

/// Strength label derived purely from length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    /// `<8` Weak, `<12` Moderate, `<16` Strong, otherwise Very Strong.
    pub fn for_length(length: i64) -> Self {
        match length {
            i64::MIN..=7 => Self::Weak,
            8..=11 => Self::Moderate,
            12..=15 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

/// Draws `length` characters uniformly from [`PASSWORD_CHARSET`].
pub fn generate_password(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| PASSWORD_CHARSET[rng.random_range(0..PASSWORD_CHARSET.len())] as char)
        .collect()
}
