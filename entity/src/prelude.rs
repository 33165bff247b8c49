pub use super::board::Entity as Board;
pub use super::card::Entity as Card;
pub use super::list::Entity as List;
