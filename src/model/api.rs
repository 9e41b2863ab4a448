use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat error payload returned by every non-validation failure.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub error: String,
}

/// Validation failure payload carrying a field -> violations map.
///
/// `details` keys are the camelCase wire names of the offending fields so the
/// form can attach each message to its input.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ValidationErrorDto {
    pub error: String,
    #[serde(default)]
    pub details: BTreeMap<String, Vec<String>>,
}

/// Acknowledgement returned by successful writes.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AckDto {
    pub ok: bool,
}
