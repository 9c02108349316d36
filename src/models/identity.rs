use serde::Serialize;

/// Account identity echoed in every successful response.
///
/// Supplied by configuration; never derived from the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    pub roll_number: String,
}
