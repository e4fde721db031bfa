pub mod resolvers;
pub mod types;

pub use resolvers::{PostMutation, PostQuery};
pub use types::Post;
