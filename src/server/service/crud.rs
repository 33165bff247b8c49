//! Generic create/read/update/delete service.

use axum::http::StatusCode;

use crate::{
    model::api::ServiceResponse,
    server::{
        data::CrudRepository, error::AppError, model::IntoDto,
        util::parse::ensure_positive_id,
    },
};

/// Response DTO of a single record of `R`.
pub type RecordDto<R> = <<R as CrudRepository>::Record as IntoDto>::Dto;

/// Response DTO of the collection returned by `R::find_all`.
pub type CollectionDto<R> = Vec<<<R as CrudRepository>::Tree as IntoDto>::Dto>;

#[derive(Debug, Clone, Copy)]
enum Operation {
    Create,
    FindAll,
    FindById,
    Update,
    Delete,
}

impl Operation {
    fn success_message<R: CrudRepository>(self) -> String {
        match self {
            Self::Create => format!("{} successfully created", R::RESOURCE),
            Self::FindAll => format!("{} successfully found", R::COLLECTION),
            Self::FindById => format!("{} successfully found", R::RESOURCE),
            Self::Update => format!("{} successfully updated", R::RESOURCE),
            Self::Delete => format!("{} successfully deleted", R::RESOURCE),
        }
    }

    /// Generic message returned instead of the underlying store error.
    fn failure_message<R: CrudRepository>(self) -> String {
        let resource = R::RESOURCE.to_lowercase();
        match self {
            Self::Create => format!("An error occurred while creating the {resource}"),
            Self::FindAll => format!(
                "An error occurred while retrieving {}",
                R::COLLECTION.to_lowercase()
            ),
            Self::FindById => format!("An error occurred while finding {resource}"),
            Self::Update => format!("An error occurred while updating the {resource}"),
            Self::Delete => format!("An error occurred while deleting the {resource}"),
        }
    }
}

/// Service applying the shared rules for one resource on top of its repository.
///
/// - Identifiers must be positive, otherwise 400.
/// - `update` and `delete` first check the record exists, otherwise 404.
/// - `find_all` reports an empty table as 404 rather than an empty success.
/// - Any store error is logged inside the operation's span and becomes a 500 with a
///   generic message.
pub struct CrudService<R> {
    repo: R,
}

impl<R: CrudRepository> CrudService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a record.
    ///
    /// # Returns
    /// - 201 with the created record
    /// - 500 if the store rejects the insert, e.g. an unknown parent ID
    #[tracing::instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn create(&self, param: R::Create) -> ServiceResponse<RecordDto<R>> {
        let result = self.repo.create(param).await.map_err(AppError::from);

        respond::<R, _>(Operation::Create, StatusCode::CREATED, result)
    }

    /// Gets every record, with children nested for resources that own any.
    ///
    /// # Returns
    /// - 200 with the records
    /// - 404 when there are none
    /// - 500 on store error
    #[tracing::instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn find_all(&self) -> ServiceResponse<CollectionDto<R>> {
        let result = match self.repo.find_all().await {
            Ok(records) if records.is_empty() => {
                Err(AppError::NotFound(format!("No {} found", R::COLLECTION)))
            }
            Ok(records) => Ok(records),
            Err(err) => Err(err.into()),
        };

        respond::<R, _>(Operation::FindAll, StatusCode::OK, result)
    }

    /// Gets one record by ID.
    ///
    /// # Returns
    /// - 200 with the record
    /// - 400 for a non-positive ID
    /// - 404 when no record has this ID
    /// - 500 on store error
    #[tracing::instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn find_by_id(&self, id: i32) -> ServiceResponse<RecordDto<R>> {
        let result = self.try_find_by_id(id).await;

        respond::<R, _>(Operation::FindById, StatusCode::OK, result)
    }

    /// Overwrites the scalar fields of an existing record.
    ///
    /// # Returns
    /// - 200 with the updated record
    /// - 400 for a non-positive ID
    /// - 404 when no record has this ID
    /// - 500 on store error
    #[tracing::instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn update(&self, id: i32, param: R::Update) -> ServiceResponse<RecordDto<R>> {
        let result = self.try_update(id, param).await;

        respond::<R, _>(Operation::Update, StatusCode::OK, result)
    }

    /// Deletes an existing record.
    ///
    /// # Returns
    /// - 200 with the record as it was before deletion
    /// - 400 for a non-positive ID
    /// - 404 when no record has this ID
    /// - 500 on store error
    #[tracing::instrument(skip(self), fields(resource = R::RESOURCE))]
    pub async fn delete(&self, id: i32) -> ServiceResponse<RecordDto<R>> {
        let result = self.try_delete(id).await;

        respond::<R, _>(Operation::Delete, StatusCode::OK, result)
    }

    // The `ensure_positive_id` guards cover callers that reach the service without the
    // `PathId` extractor, such as other services and tests.
    async fn try_find_by_id(&self, id: i32) -> Result<R::Record, AppError> {
        let id = ensure_positive_id(id.into())?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<R>())
    }

    async fn try_update(&self, id: i32, param: R::Update) -> Result<R::Record, AppError> {
        let id = ensure_positive_id(id.into())?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(not_found::<R>());
        }

        Ok(self.repo.update(id, param).await?)
    }

    async fn try_delete(&self, id: i32) -> Result<R::Record, AppError> {
        let id = ensure_positive_id(id.into())?;

        let Some(record) = self.repo.find_by_id(id).await? else {
            return Err(not_found::<R>());
        };

        self.repo.delete(id).await?;

        Ok(record)
    }
}

fn not_found<R: CrudRepository>() -> AppError {
    AppError::NotFound(format!("{} not found", R::RESOURCE))
}

/// Wraps an operation's outcome in an envelope.
fn respond<R, T>(
    operation: Operation,
    status: StatusCode,
    result: Result<T, AppError>,
) -> ServiceResponse<T::Dto>
where
    R: CrudRepository,
    T: IntoDto,
{
    match result {
        Ok(record) => ServiceResponse::success(
            status,
            operation.success_message::<R>(),
            record.into_dto(),
        ),
        Err(err) => err.into_service_response(&operation.failure_message::<R>()),
    }
}

#[cfg(test)]
mod test;
