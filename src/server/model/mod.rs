//! Domain models and operation parameters used inside the server.
//!
//! Repositories convert SeaORM entity models into these types at the data layer boundary,
//! so entity models never leak into services or controllers. Controllers build the
//! parameter types from request DTOs and convert domain models back into response DTOs.

pub mod board;
pub mod card;
pub mod list;

/// Conversion from a domain model into its response DTO.
pub trait IntoDto {
    type Dto;

    fn into_dto(self) -> Self::Dto;
}

impl<T: IntoDto> IntoDto for Vec<T> {
    type Dto = Vec<T::Dto>;

    fn into_dto(self) -> Self::Dto {
        self.into_iter().map(IntoDto::into_dto).collect()
    }
}
