//! Generic REST resource service
//!
//! One instance per entity. Every method is a single pass-through call to
//! the API client: no validation, caching or transformation beyond shaping
//! the request.

use contracts::domain::common::{Entity, EntityId};
use contracts::shared::api_error::ApiError;
use std::marker::PhantomData;

use crate::shared::http::{ApiClient, GlooTransport, Transport};

/// What a submitted form turns into
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<P> {
    Create(P),
    /// Full replace of the record with the given id
    Update(EntityId, P),
}

impl<P> Submission<P> {
    pub fn is_update(&self) -> bool {
        matches!(self, Submission::Update(..))
    }
}

pub struct ResourceService<E, T = GlooTransport> {
    client: ApiClient<T>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, T: Clone> Clone for ResourceService<E, T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity, T: Transport> ResourceService<E, T> {
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// `/products`
    pub fn collection_path() -> String {
        format!("/{}", E::collection_name())
    }

    /// `/products/{id}`
    pub fn item_path(id: EntityId) -> String {
        format!("/{}/{}", E::collection_name(), id)
    }

    pub async fn list_all(&self) -> Result<Vec<E>, ApiError> {
        self.client.get(&Self::collection_path()).await
    }

    /// A missing id surfaces as `ApiError::Http { status: 404, .. }`
    pub async fn get_by_id(&self, id: EntityId) -> Result<E, ApiError> {
        self.client.get(&Self::item_path(id)).await
    }

    /// The server assigns the id of the created record
    pub async fn create(&self, payload: &E::Payload) -> Result<E, ApiError> {
        self.client.post(&Self::collection_path(), payload).await
    }

    /// Full replace: fields absent from the payload are cleared on the server
    pub async fn update(&self, id: EntityId, payload: &E::Payload) -> Result<E, ApiError> {
        self.client.put(&Self::item_path(id), payload).await
    }

    /// Fails upward when the id no longer exists
    pub async fn delete(&self, id: EntityId) -> Result<(), ApiError> {
        self.client.delete(&Self::item_path(id)).await
    }

    /// Server-side name match; matching rules belong to the server
    pub async fn search(&self, keyword: &str) -> Result<Vec<E>, ApiError> {
        let path = format!("{}/search", Self::collection_path());
        self.client.get_with_query(&path, &[("keyword", keyword)]).await
    }

    pub async fn submit(&self, submission: &Submission<E::Payload>) -> Result<E, ApiError> {
        match submission {
            Submission::Create(payload) => self.create(payload).await,
            Submission::Update(id, payload) => self.update(*id, payload).await,
        }
    }
}

/// Path segment with reserved characters escaped
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
