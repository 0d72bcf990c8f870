pub mod card_repository;
pub mod list_repository;

pub use card_repository::CardRepository;
pub use list_repository::ListRepository;
