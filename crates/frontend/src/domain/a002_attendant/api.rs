use contracts::domain::a002_attendant::Attendant;
use contracts::shared::api_error::ApiError;

use crate::shared::http::{GlooTransport, Transport};
use crate::shared::resource::{segment, ResourceService};

/// `/attendants` resource
pub type AttendantService<T = GlooTransport> = ResourceService<Attendant, T>;

impl<T: Transport> ResourceService<Attendant, T> {
    /// `GET /attendants/email/{email}`, 404 when nobody has that address
    pub async fn by_email(&self, email: &str) -> Result<Attendant, ApiError> {
        let path = format!("{}/email/{}", Self::collection_path(), segment(email));
        self.client().get(&path).await
    }
}
