use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use thiserror::Error;

/// Rejection for an externally supplied identifier that is not a valid
/// 24-character hex ObjectId. Always a client error, never a server fault.
#[derive(Debug, Error)]
#[error("invalid identifier: {raw:?}")]
pub struct InvalidIdentifier {
    raw: String,
}

impl From<InvalidIdentifier> for AppError {
    fn from(_: InvalidIdentifier) -> Self {
        AppError::BadRequest(anyhow::anyhow!("Invalid ID format"))
    }
}

/// Parse the external string form of a record identifier into the store's
/// native ObjectId. No side effects.
pub fn parse(raw: &str) -> Result<ObjectId, InvalidIdentifier> {
    ObjectId::parse_str(raw).map_err(|_| InvalidIdentifier {
        raw: raw.to_string(),
    })
}
