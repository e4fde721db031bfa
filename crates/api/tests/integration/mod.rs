mod member_types;
mod profiles;
mod subscriptions;
mod users;
