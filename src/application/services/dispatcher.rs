//! Maps named operation requests onto the services that execute them.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::{LinkService, UtilityService};
use crate::domain::operation::Operation;
use crate::domain::output::OperationOutput;
use crate::error::AppError;
use crate::utils::base64_codec::Base64Action;
use crate::utils::hashing::HashAlgorithm;
use crate::utils::json_tool::JsonAction;

/// A fully validated request for one operation.
///
/// Numeric fields are already coerced; see [`crate::utils::coerce`].
#[derive(Debug, Clone, PartialEq)]
pub enum OperationRequest {
    GenerateIds { count: i64 },
    ComputeHash { text: String, algorithm: HashAlgorithm },
    Base64 { action: Base64Action, text: String },
    RenderQr { text: String, size: i64 },
    ConvertTime,
    GeneratePassword { length: i64 },
    JsonTool { action: JsonAction, json: String },
    Shorten { url: String },
    Resolve { id: String },
    LinkStats { id: String },
}

impl OperationRequest {
    /// The operation this request invokes.
    pub fn operation(&self) -> Operation {
        match self {
            Self::GenerateIds { .. } => Operation::Uuid,
            Self::ComputeHash { .. } => Operation::Hash,
            Self::Base64 { .. } => Operation::Base64,
            Self::RenderQr { .. } => Operation::QrCode,
            Self::ConvertTime => Operation::Time,
            Self::GeneratePassword { .. } => Operation::Password,
            Self::JsonTool { .. } => Operation::Json,
            Self::Shorten { .. } => Operation::Shorten,
            Self::Resolve { .. } | Self::LinkStats { .. } => Operation::Redirect,
        }
    }
}

/// Executes operation requests and wraps results in [`OperationOutput`].
pub struct Dispatcher {
    utilities: UtilityService,
    links: Arc<LinkService>,
}

impl Dispatcher {
    pub fn new(utilities: UtilityService, links: Arc<LinkService>) -> Self {
        Self { utilities, links }
    }

    pub fn links(&self) -> &LinkService {
        &self.links
    }

    /// Runs a single operation.
    ///
    /// # Errors
    ///
    /// Propagates the [`AppError`] of the underlying operation.
    pub async fn dispatch(&self, request: OperationRequest) -> Result<OperationOutput, AppError> {
        debug!(operation = %request.operation(), "Dispatching operation");

        let output = match request {
            OperationRequest::GenerateIds { count } => {
                OperationOutput::Uuids(self.utilities.generate_ids(count))
            }
            OperationRequest::ComputeHash { text, algorithm } => {
                OperationOutput::Hash(self.utilities.compute_hash(text, algorithm).await?)
            }
            OperationRequest::Base64 { action, text } => {
                OperationOutput::Base64(self.utilities.transcode_base64(action, text)?)
            }
            OperationRequest::RenderQr { text, size } => {
                OperationOutput::QrImage(self.utilities.render_qr(&text, size)?)
            }
            OperationRequest::ConvertTime => OperationOutput::Time(self.utilities.convert_time()),
            OperationRequest::GeneratePassword { length } => {
                OperationOutput::Password(self.utilities.generate_password(length))
            }
            OperationRequest::JsonTool { action, json } => {
                OperationOutput::Json(self.utilities.json_tool(action, json))
            }
            OperationRequest::Shorten { url } => {
                OperationOutput::Shortened(self.links.shorten(url).await?)
            }
            OperationRequest::Resolve { id } => {
                OperationOutput::Redirect(self.links.resolve(&id).await?)
            }
            OperationRequest::LinkStats { id } => {
                OperationOutput::LinkStats(self.links.stats(&id).await?)
            }
        };

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::MemoryLinkStore;

    fn dispatcher() -> Dispatcher {
        let links = LinkService::new(Arc::new(MemoryLinkStore::new()), "http://localhost:3000");
        Dispatcher::new(UtilityService::default(), Arc::new(links))
    }

    #[tokio::test]
    async fn test_dispatch_uuid() {
        let output = dispatcher()
            .dispatch(OperationRequest::GenerateIds { count: 3 })
            .await
            .unwrap();

        match output {
            OperationOutput::Uuids(batch) => assert_eq!(batch.uuids.len(), 3),
            other => panic!("unexpected output {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_shorten_then_resolve_counts_clicks() {
        let dispatcher = dispatcher();

        let id = match dispatcher
            .dispatch(OperationRequest::Shorten {
                url: "https://example.com".to_string(),
            })
            .await
            .unwrap()
        {
            OperationOutput::Shortened(result) => result.short_id,
            other => panic!("unexpected output {:?}", other),
        };

        for expected in 1..=2 {
            let output = dispatcher
                .dispatch(OperationRequest::Resolve { id: id.clone() })
                .await
                .unwrap();
            assert!(matches!(output, OperationOutput::Redirect(ref url) if url == "https://example.com"));

            let stats = dispatcher.links().stats(&id).await.unwrap();
            assert_eq!(stats.click_count, expected);
        }
    }

    #[tokio::test]
    async fn test_resolve_unknown_id() {
        let result = dispatcher()
            .dispatch(OperationRequest::Resolve {
                id: "doesnotexist".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_request_operation_names() {
        assert_eq!(OperationRequest::ConvertTime.operation(), Operation::Time);
        assert_eq!(
            OperationRequest::Resolve { id: "x".to_string() }.operation(),
            Operation::Redirect
        );
    }
}
