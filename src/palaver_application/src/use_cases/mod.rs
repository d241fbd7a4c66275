pub mod get_profile;
pub mod login;
pub mod logout;
pub mod message_board;
pub mod register;
