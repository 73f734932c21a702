use serde::{Deserialize, Serialize};

use crate::domain::common::{has_text, Entity, EntityId};
use crate::shared::validation::{is_valid_email, is_valid_mobile};

/// Attendant (staff member) as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendant {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Attendant {
    pub fn from_dto(id: EntityId, dto: AttendantDto) -> Self {
        Self {
            id,
            name: dto.name,
            address: dto.address,
            mobile: dto.mobile,
            email: dto.email,
            comments: dto.comments,
        }
    }

    /// Listed in the quick contact panel when reachable by mail or phone
    pub fn has_contact(&self) -> bool {
        has_text(&self.email) || has_text(&self.mobile)
    }
}

impl Entity for Attendant {
    type Payload = AttendantDto;

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn to_payload(&self) -> AttendantDto {
        AttendantDto {
            name: self.name.clone(),
            address: self.address.clone(),
            mobile: self.mobile.clone(),
            email: self.email.clone(),
            comments: self.comments.clone(),
        }
    }

    fn collection_name() -> &'static str {
        "attendants"
    }

    fn element_name() -> &'static str {
        "Attendant"
    }

    fn list_name() -> &'static str {
        "Attendants"
    }
}

/// Body of create and full-replace update requests
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendantDto {
    pub name: String,
    pub address: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub comments: Option<String>,
}

impl AttendantDto {
    /// Name is required; email and mobile are checked only when present
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Attendant name is required".into());
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) {
            if !is_valid_email(email) {
                return Err("Please enter a valid email address".into());
            }
        }
        if let Some(mobile) = self.mobile.as_deref().filter(|m| !m.is_empty()) {
            if !is_valid_mobile(mobile) {
                return Err("Please enter a valid mobile number (7-15 digits)".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_requires_name() {
        let dto = AttendantDto::default();
        assert_eq!(dto.validate(), Err("Attendant name is required".to_string()));
    }

    #[test]
    fn test_validate_optional_formats() {
        let base = AttendantDto {
            name: "Sam".into(),
            ..Default::default()
        };
        assert!(base.validate().is_ok());

        let bad_email = AttendantDto {
            email: Some("sam@".into()),
            ..base.clone()
        };
        assert_eq!(
            bad_email.validate(),
            Err("Please enter a valid email address".to_string())
        );

        let bad_mobile = AttendantDto {
            mobile: Some("12ab".into()),
            ..base.clone()
        };
        assert_eq!(
            bad_mobile.validate(),
            Err("Please enter a valid mobile number (7-15 digits)".to_string())
        );

        let good = AttendantDto {
            email: Some("sam@example.com".into()),
            mobile: Some("+64 21 555 0101".into()),
            ..base
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_record_tolerates_missing_optionals() {
        let a: Attendant = serde_json::from_value(json!({"id": 1, "name": "Sam"})).unwrap();
        assert_eq!(a.email, None);
        assert!(!a.has_contact());
    }

    #[test]
    fn test_full_replace_payload_serializes_nulls() {
        let value = serde_json::to_value(AttendantDto {
            name: "Sam".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"name": "Sam", "address": null, "mobile": null, "email": null, "comments": null})
        );
    }
}
