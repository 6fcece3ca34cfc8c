pub mod ids;
pub mod todo;

pub use ids::TodoId;
pub use todo::{Todo, TodoPatch};
