pub mod avatars;
pub mod shared;
pub mod signin;
pub mod signout;
pub mod status;
