use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ADMIN_ROLE_ID: i64 = 1;

/// Claims read from the token payload.
///
/// Informational only: nothing here is verified, so it may drive what the
/// UI shows but never what the server allows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity {
    claims: Map<String, Value>,
}

impl Identity {
    pub fn new(claims: Map<String, Value>) -> Self {
        Identity { claims }
    }

    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Numeric role claim. `1` and `1.0` read the same; strings do not count.
    pub fn role_id(&self) -> Option<i64> {
        let role = self.claims.get("role_id")?;
        role.as_i64().or_else(|| {
            role.as_f64()
                .filter(|r| r.fract() == 0.0 && r.abs() <= i64::MAX as f64)
                .map(|r| r as i64)
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.claims.get("name").and_then(Value::as_str)
    }

    pub fn email(&self) -> Option<&str> {
        self.claims.get("email").and_then(Value::as_str)
    }

    /// Best label for greeting the user.
    pub fn display_name(&self) -> &str {
        self.name().or_else(|| self.email()).unwrap_or("there")
    }
}

pub fn is_admin(identity: Option<&Identity>) -> bool {
    identity.and_then(Identity::role_id) == Some(ADMIN_ROLE_ID)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity(value: Value) -> Identity {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn admin_only_for_role_one() {
        assert!(is_admin(Some(&identity(json!({"role_id": 1})))));
        assert!(!is_admin(Some(&identity(json!({"role_id": 2})))));
        assert!(!is_admin(Some(&identity(json!({"role_id": "1"})))));
        assert!(!is_admin(Some(&identity(json!({})))));
        assert!(!is_admin(None));
    }

    #[test]
    fn float_role_claim_reads_as_integer() {
        assert!(is_admin(Some(&identity(json!({"role_id": 1.0})))));
        assert_eq!(identity(json!({"role_id": 2.0})).role_id(), Some(2));
        assert!(!is_admin(Some(&identity(json!({"role_id": 1.5})))));
    }

    #[test]
    fn keeps_unknown_claims() {
        let id = identity(json!({"role_id": 2, "name": "Asha", "iat": 1700000000}));
        assert_eq!(id.name(), Some("Asha"));
        assert_eq!(id.claims()["iat"], json!(1700000000));
        assert_eq!(
            serde_json::to_value(&id).unwrap(),
            json!({"role_id": 2, "name": "Asha", "iat": 1700000000})
        );
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(identity(json!({"email": "a@b.com"})).display_name(), "a@b.com");
        assert_eq!(Identity::default().display_name(), "there");
    }
}
