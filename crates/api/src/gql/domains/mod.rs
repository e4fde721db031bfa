// Each domain contains: mod.rs, resolvers.rs and (when it declares types) types.rs

pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod subscriptions;
pub mod users;
