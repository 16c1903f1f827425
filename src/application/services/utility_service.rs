//! Stateless utility operations.

use chrono::{Local, SecondsFormat, Utc};
use serde_json::json;
use tracing::debug;

use crate::domain::output::{
    Base64Result, HashDigests, HashResult, JsonToolResult, PasswordResult, TimeResult, UuidBatch,
};
use crate::error::AppError;
use crate::utils::base64_codec::{self, Base64Action};
use crate::utils::hashing::{self, DEFAULT_BCRYPT_COST, HashAlgorithm};
use crate::utils::json_tool::{self, JsonAction};
use crate::utils::password::{Strength, generate_password};
use crate::utils::{id_generator, qr, time_convert};

/// Upper bounds applied to numeric inputs.
///
/// Values above a bound are clamped, never rejected.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum UUID count and password length.
    pub max_batch_size: usize,
    /// Maximum QR image side in pixels.
    pub max_qr_size: u32,
    pub bcrypt_cost: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_batch_size: 10_000,
            max_qr_size: 2048,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

/// Service implementing the stateless operations.
///
/// Every method is a pure function of its arguments, apart from the
/// intentional randomness of UUIDs, passwords and bcrypt salts.
#[derive(Debug, Clone, Default)]
pub struct UtilityService {
    limits: Limits,
}

impl UtilityService {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Generates `count` UUIDs. Negative counts yield an empty list.
    pub fn generate_ids(&self, count: i64) -> UuidBatch {
        let count = self.clamp_batch(count);
        debug!(count, "Generating UUIDs");

        UuidBatch {
            uuids: id_generator::generate_uuids(count),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Computes md5, sha256 and sha512 digests, plus bcrypt when requested.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if bcrypt hashing fails.
    pub async fn compute_hash(
        &self,
        text: String,
        algorithm: HashAlgorithm,
    ) -> Result<HashResult, AppError> {
        let bcrypt = if algorithm.is_salted() {
            let input = text.clone();
            let cost = self.limits.bcrypt_cost;

            let hashed = tokio::task::spawn_blocking(move || hashing::bcrypt_hash(&input, cost))
                .await
                .map_err(|e| hash_failed(e.to_string()))?
                .map_err(|e| hash_failed(e.to_string()))?;
            Some(hashed)
        } else {
            None
        };

        Ok(HashResult {
            hashes: HashDigests {
                md5: hashing::md5_hex(&text),
                sha256: hashing::sha256_hex(&text),
                sha512: hashing::sha512_hex(&text),
                bcrypt,
            },
            original: text,
        })
    }

    /// Encodes or decodes base64.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on malformed base64 input.
    pub fn transcode_base64(
        &self,
        action: Base64Action,
        text: String,
    ) -> Result<Base64Result, AppError> {
        let result = base64_codec::transcode(action, &text).map_err(|e| {
            AppError::bad_request("Invalid base64 string", json!({ "reason": e.to_string() }))
        })?;

        Ok(Base64Result {
            action: action.as_str().to_string(),
            original: text,
            result,
        })
    }

    /// Renders a QR code PNG. `size` is clamped to `1..=max_qr_size`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the text cannot be encoded.
    pub fn render_qr(&self, text: &str, size: i64) -> Result<Vec<u8>, AppError> {
        let size = size.clamp(1, i64::from(self.limits.max_qr_size)) as u32;

        qr::render_png(text, size).map_err(|e| {
            AppError::internal("QR generation failed", json!({ "reason": e.to_string() }))
        })
    }

    /// Describes the current instant in several formats.
    pub fn convert_time(&self) -> TimeResult {
        time_convert::describe_instant(Utc::now(), &Local)
    }

    /// Generates a password. The strength label follows the requested
    /// `length`; negative lengths produce an empty password.
    pub fn generate_password(&self, length: i64) -> PasswordResult {
        let length = length.min(self.limits.max_batch_size as i64);

        PasswordResult {
            password: generate_password(length.max(0) as usize),
            length,
            strength: Strength::for_length(length).label(),
        }
    }

    /// Validates or pretty-prints JSON. Parse failures are reported in the
    /// result rather than as an error.
    pub fn json_tool(&self, action: JsonAction, input: String) -> JsonToolResult {
        match action {
            JsonAction::Validate => match json_tool::validate(&input) {
                Ok(()) => JsonToolResult::Validated {
                    valid: true,
                    message: "Valid JSON".to_string(),
                },
                Err(e) => JsonToolResult::invalid(e.to_string()),
            },
            JsonAction::Format => match json_tool::pretty(&input) {
                Ok(formatted) => JsonToolResult::Formatted {
                    original: input,
                    formatted,
                    valid: true,
                },
                Err(e) => JsonToolResult::invalid(e.to_string()),
            },
        }
    }

    fn clamp_batch(&self, count: i64) -> usize {
        count.clamp(0, self.limits.max_batch_size as i64) as usize
    }
}

fn hash_failed(reason: String) -> AppError {
    AppError::internal("Hash generation failed", json!({ "reason": reason }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::PASSWORD_CHARSET;
    use std::collections::HashSet;

    fn service() -> UtilityService {
        UtilityService::new(Limits {
            bcrypt_cost: 4,
            ..Limits::default()
        })
    }

    #[test]
    fn test_generate_ids_exact_count_and_distinct() {
        let batch = service().generate_ids(1000);
        let unique: HashSet<_> = batch.uuids.iter().collect();

        assert_eq!(batch.uuids.len(), 1000);
        assert_eq!(unique.len(), 1000);
        assert!(batch.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_generate_ids_negative_count_is_empty() {
        assert!(service().generate_ids(-5).uuids.is_empty());
    }

    #[test]
    fn test_generate_ids_clamped() {
        let svc = UtilityService::new(Limits {
            max_batch_size: 10,
            ..Limits::default()
        });
        assert_eq!(svc.generate_ids(1_000_000).uuids.len(), 10);
    }

    #[tokio::test]
    async fn test_compute_hash_sha256() {
        let result = service()
            .compute_hash("hello world".to_string(), HashAlgorithm::Sha256)
            .await
            .unwrap();

        assert_eq!(result.original, "hello world");
        assert_eq!(
            result.hashes.sha256,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert!(result.hashes.bcrypt.is_none());
    }

    #[tokio::test]
    async fn test_compute_hash_bcrypt() {
        let result = service()
            .compute_hash("secret".to_string(), HashAlgorithm::Bcrypt)
            .await
            .unwrap();

        let hash = result.hashes.bcrypt.unwrap();
        assert!(bcrypt::verify("secret", &hash).unwrap());
        assert_eq!(result.hashes.md5.len(), 32);
    }

    #[test]
    fn test_base64_round_trip() {
        let svc = service();
        let encoded = svc
            .transcode_base64(Base64Action::Encode, "Hello World!".to_string())
            .unwrap();
        let decoded = svc
            .transcode_base64(Base64Action::Decode, encoded.result.clone())
            .unwrap();

        assert_eq!(encoded.action, "encode");
        assert_eq!(decoded.result, "Hello World!");
    }

    #[test]
    fn test_base64_malformed_is_validation_error() {
        let result = service().transcode_base64(Base64Action::Decode, "%%%".to_string());
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[test]
    fn test_render_qr_negative_size_clamped() {
        let png = service().render_qr("Hello World", -50).unwrap();
        assert!(!png.is_empty());
    }

    #[test]
    fn test_password_very_strong() {
        let result = service().generate_password(20);

        assert_eq!(result.password.len(), 20);
        assert_eq!(result.length, 20);
        assert_eq!(result.strength, "Very Strong");
        assert!(result.password.bytes().all(|b| PASSWORD_CHARSET.contains(&b)));
    }

    #[test]
    fn test_password_weak() {
        let result = service().generate_password(6);

        assert_eq!(result.password.len(), 6);
        assert_eq!(result.strength, "Weak");
    }

    #[test]
    fn test_password_negative_length() {
        let result = service().generate_password(-3);

        assert!(result.password.is_empty());
        assert_eq!(result.length, -3);
        assert_eq!(result.strength, "Weak");
    }

    #[test]
    fn test_json_validate() {
        let svc = service();

        assert!(
            svc.json_tool(JsonAction::Validate, r#"{"a":1}"#.to_string())
                .is_valid()
        );

        match svc.json_tool(JsonAction::Validate, "{bad".to_string()) {
            JsonToolResult::Invalid { valid, error } => {
                assert!(!valid);
                assert!(!error.is_empty());
            }
            other => panic!("expected invalid result, got {:?}", other),
        }
    }

    #[test]
    fn test_json_format() {
        match service().json_tool(JsonAction::Format, r#"{"a":1}"#.to_string()) {
            JsonToolResult::Formatted {
                original,
                formatted,
                valid,
            } => {
                assert!(valid);
                assert_eq!(original, r#"{"a":1}"#);
                assert_eq!(formatted, "{\n  \"a\": 1\n}");
            }
            other => panic!("expected formatted result, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_time_consistent() {
        let result = service().convert_time();

        assert!(result.unix > 1_700_000_000);
        assert!(result.iso.ends_with('Z'));
        assert!(result.utc.ends_with("GMT"));
    }
}
