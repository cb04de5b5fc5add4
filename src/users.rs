mod api_ext;
mod database_ext;
mod user;
mod user_id;

pub use self::{
    api_ext::{UserSignupParams, UserUpdateParams},
    user::User,
    user_id::UserId,
};
