pub mod member_types;
pub mod posts;
pub mod profiles;
pub mod subscriptions;
pub mod users;

pub use posts::{CreatePostData, UpdatePostData};
pub use profiles::{CreateProfileData, UpdateProfileData};
pub use users::{CreateUserData, UpdateUserData};
