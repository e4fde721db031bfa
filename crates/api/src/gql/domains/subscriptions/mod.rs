//! Subscription edges: "user follows author". Reads go through the
//! `userSubscribedTo` / `subscribedToUser` fields on `User`.

pub mod resolvers;

pub use resolvers::SubscriptionMutation;
