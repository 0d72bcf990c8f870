pub mod card;
pub mod ids;
pub mod list;
pub mod ordering;

pub use card::{Card, CardPatch, CardStatus};
pub use ids::{CardId, IdAllocator, ListId};
pub use list::{List, ListPatch};
pub use ordering::{Positioned, TailPlacement};
