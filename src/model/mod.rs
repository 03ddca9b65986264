//! Pure data structures implementing the [`Entity`](crate::framework::Entity) trait,
//! plus the snapshot types they render to.

pub mod ids;
pub mod info;
pub mod item;
pub mod member;

pub use ids::*;
pub use info::*;
pub use item::*;
pub use member::*;
