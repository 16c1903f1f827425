//! Base64 encoding and decoding of UTF-8 text.

use base64::{
    Engine as _,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use std::str::FromStr;

/// Standard alphabet; decoding accepts input with or without padding.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Action {
    Encode,
    Decode,
}

impl Base64Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Action must be encode or decode")]
pub struct UnknownAction;

impl FromStr for Base64Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "encode" => Ok(Self::Encode),
            "decode" => Ok(Self::Decode),
            _ => Err(UnknownAction),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Base64Error {
    #[error("malformed base64: {0}")]
    Malformed(#[from] base64::DecodeError),
    #[error("decoded bytes are not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Encodes or decodes `text` according to `action`.
///
/// # Errors
///
/// Decoding fails on malformed base64 or when the decoded bytes are not UTF-8.
pub fn transcode(action: Base64Action, text: &str) -> Result<String, Base64Error> {
    match action {
        Base64Action::Encode => Ok(LENIENT.encode(text.as_bytes())),
        Base64Action::Decode => {
            let bytes = LENIENT.decode(text.trim())?;
            Ok(String::from_utf8(bytes)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_value() {
        assert_eq!(
            transcode(Base64Action::Encode, "Hello World!").unwrap(),
            "SGVsbG8gV29ybGQh"
        );
    }

    #[test]
    fn test_round_trip() {
        let encoded = transcode(Base64Action::Encode, "Hello World!").unwrap();
        let decoded = transcode(Base64Action::Decode, &encoded).unwrap();

        assert_eq!(decoded, "Hello World!");
    }

    #[test]
    fn test_decode_without_padding() {
        assert_eq!(transcode(Base64Action::Decode, "aGk").unwrap(), "hi");
        assert_eq!(transcode(Base64Action::Decode, "aGk=").unwrap(), "hi");
    }

    #[test]
    fn test_decode_malformed() {
        let result = transcode(Base64Action::Decode, "not base64!!");
        assert!(matches!(result, Err(Base64Error::Malformed(_))));
    }

    #[test]
    fn test_decode_non_utf8() {
        // 0xff 0xfe
        let result = transcode(Base64Action::Decode, "//4=");
        assert!(matches!(result, Err(Base64Error::NotUtf8(_))));
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("encode".parse::<Base64Action>().unwrap(), Base64Action::Encode);
        assert_eq!("decode".parse::<Base64Action>().unwrap(), Base64Action::Decode);
        assert!("rot13".parse::<Base64Action>().is_err());
    }
}
