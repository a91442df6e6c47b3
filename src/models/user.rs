//! User records as exchanged with the directory API.

use serde::{Deserialize, Serialize};

/// Server-assigned user identifier.
pub type UserId = u64;

/// A user record returned by the API.
///
/// The API returns many more fields (address, phone, website); only the
/// ones the client works with are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Company,
}

/// The company a user belongs to; its name doubles as the department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Department label for display, `N/A` when the company has no name.
    pub fn department(&self) -> &str {
        if self.company.name.is_empty() {
            "N/A"
        } else {
            &self.company.name
        }
    }
}

/// Request body for creating or replacing a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
    pub company: Company,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_shape_ignoring_extra_fields() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough"},
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.email, "Sincere@april.biz");
        assert_eq!(user.department(), "Romaguera-Crona");
    }

    #[test]
    fn missing_company_falls_back_to_na() {
        let user: User = serde_json::from_str(r#"{"id": 11, "name": "New"}"#).unwrap();
        assert_eq!(user.company, Company::default());
        assert_eq!(user.department(), "N/A");
    }

    #[test]
    fn payload_omits_missing_id() {
        let payload = UserPayload {
            id: None,
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            company: Company { name: "Eng".into() },
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["company"]["name"], "Eng");
    }
}
