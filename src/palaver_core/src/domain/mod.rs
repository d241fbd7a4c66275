pub mod message;
pub mod password;
pub mod session;
pub mod token;
pub mod user;
pub mod username;
