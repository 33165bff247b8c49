//! Business logic layer.
//!
//! All three resources share one implementation, `CrudService`, parameterized over the
//! repository. Services never return errors: every outcome becomes a `ServiceResponse`
//! envelope that controllers write out verbatim.

pub mod crud;

use crate::server::data::{board::BoardRepository, card::CardRepository, list::ListRepository};

pub use crud::CrudService;

pub type BoardService<'a> = CrudService<BoardRepository<'a>>;
pub type ListService<'a> = CrudService<ListRepository<'a>>;
pub type CardService<'a> = CrudService<CardRepository<'a>>;
