pub mod actuators;
pub mod auth;
pub mod sensors;
pub mod users;

pub use self::auth::model::LoginRequest;
pub use self::users::model::User;
