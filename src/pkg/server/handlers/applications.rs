use std::sync::Arc;

use axum::{
    extract::{FromRequest, Path, Request, State},
    http::StatusCode,
    Extension, Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    errors::Error,
    pkg::{
        internal::{
            adaptors::applications::{
                mutators::ApplicationMutator, selectors::ApplicationSelector,
                spec::ApplicationEntry,
            },
            auth::Identity,
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct CreateApplicationInput {
    pub company: String,
    pub role: String,
    pub status: String,
    pub source: String,
    pub applied_date: String,
    pub notes: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateApplicationInput {
    pub status: String,
    pub notes: String,
    pub applied_date: String,
}

/// Like `axum::Json` but every rejection becomes a plain 400 instead of
/// axum's mixed 400/415/422 defaults.
pub struct StrictJson<T>(pub T);

impl<S, T> FromRequest<S> for StrictJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(Error::Decode)?;
        Ok(StrictJson(value))
    }
}

pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<Arc<Identity>>,
    StrictJson(input): StrictJson<CreateApplicationInput>,
) -> Result<(StatusCode, Json<ApplicationEntry>)> {
    let application = ApplicationMutator::new(&state.db_pool)
        .create(&identity.user_id, input)
        .await?;
    Ok((StatusCode::CREATED, Json(application)))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<Arc<Identity>>,
) -> Result<Json<Vec<ApplicationEntry>>> {
    let applications = ApplicationSelector::new(&state.db_pool)
        .get_for_user(&identity.user_id)
        .await?;
    Ok(Json(applications))
}

pub async fn get(
    State(state): State<AppState>,
    Extension(identity): Extension<Arc<Identity>>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationEntry>> {
    let application = ApplicationSelector::new(&state.db_pool)
        .get_by_id(&identity.user_id, &id)
        .await?
        .ok_or(Error::NotFound)?;
    Ok(Json(application))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(identity): Extension<Arc<Identity>>,
    Path(id): Path<String>,
    StrictJson(input): StrictJson<UpdateApplicationInput>,
) -> Result<Json<ApplicationEntry>> {
    let application = ApplicationMutator::new(&state.db_pool)
        .update(&identity.user_id, &id, input)
        .await?
        .ok_or(Error::NotFound)?;
    Ok(Json(application))
}

pub async fn delete(
    State(state): State<AppState>,
    Extension(identity): Extension<Arc<Identity>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let deleted = ApplicationMutator::new(&state.db_pool)
        .delete(&identity.user_id, &id)
        .await?;
    if !deleted {
        return Err(Error::NotFound);
    }
    Ok(StatusCode::NO_CONTENT)
}
