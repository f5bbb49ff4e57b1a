use crate::areas::CatalogError;
use crate::services::auth::AuthError;
use crate::services::contacts::ContactError;

#[derive(thiserror::Error, Debug)]
#[error("{kind} not found: {id}")]
pub struct NotFound {
    pub kind: &'static str,
    pub id: String,
}

pub fn not_found(kind: &'static str, id: &str) -> anyhow::Error {
    NotFound {
        kind,
        id: id.to_string(),
    }
    .into()
}

/// Stable code for the JSON error envelope.
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(auth) = err.downcast_ref::<AuthError>() {
        return match auth {
            AuthError::NotSignedIn => "AUTH_REQUIRED",
            AuthError::MissingCredentials => "VALIDATION",
            AuthError::Failed => "AUTH_FAILED",
        };
    }
    if err.downcast_ref::<ContactError>().is_some() {
        return "VALIDATION";
    }
    if err.downcast_ref::<NotFound>().is_some() {
        return "NOT_FOUND";
    }
    if err.downcast_ref::<CatalogError>().is_some() {
        return "INVALID_CATALOG";
    }
    "INTERNAL"
}
