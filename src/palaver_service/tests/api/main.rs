mod health;
mod helpers;
mod login;
mod logout;
mod messages;
mod profile;
mod register;
mod session_flow;
