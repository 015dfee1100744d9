use uuid::Uuid;

use crate::server::error::AppError;

/// Parses a UUID path segment.
///
/// # Arguments
/// - `value` - The raw path segment
/// - `name` - Human-readable name of the identifier, used in the error message
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(AppError::BadRequest)` - The segment is not a valid UUID
pub fn parse_uuid(value: &str, name: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| AppError::BadRequest(format!("invalid {name}")))
}
