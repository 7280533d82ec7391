use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `data` of a successful login. Fields other than the token are kept but
/// not interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
