use contracts::domain::a002_attendant::{Attendant, AttendantDto};
use contracts::domain::common::normalize_optional;

use crate::shared::crud_page::CrudEntity;

/// Attendant form as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendantForm {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub comments: String,
}

impl AttendantForm {
    pub fn from_attendant(a: &Attendant) -> Self {
        Self {
            name: a.name.clone(),
            address: a.address.clone().unwrap_or_default(),
            mobile: a.mobile.clone().unwrap_or_default(),
            email: a.email.clone().unwrap_or_default(),
            comments: a.comments.clone().unwrap_or_default(),
        }
    }

    /// Trimmed payload; blank optional fields are sent as `null`
    ///
    /// Email and mobile are checked as typed, before trimming, so
    /// `" a@b.co"` is rejected.
    pub fn to_dto(&self) -> Result<AttendantDto, String> {
        let as_typed = AttendantDto {
            name: self.name.clone(),
            mobile: Some(self.mobile.clone()),
            email: Some(self.email.clone()),
            ..Default::default()
        };
        as_typed.validate()?;

        let dto = AttendantDto {
            name: self.name.trim().to_string(),
            address: normalize_optional(&self.address),
            mobile: normalize_optional(&self.mobile),
            email: normalize_optional(&self.email),
            comments: normalize_optional(&self.comments),
        };
        Ok(dto)
    }
}

impl CrudEntity for Attendant {
    type Form = AttendantForm;

    fn to_form(&self) -> AttendantForm {
        AttendantForm::from_attendant(self)
    }

    fn form_to_payload(form: &AttendantForm) -> Result<AttendantDto, String> {
        form.to_dto()
    }
}
