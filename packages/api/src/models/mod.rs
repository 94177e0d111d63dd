//! Identity models returned by the auth API.

mod user;

pub use user::AuthUser;
