//! Framework-agnostic chat API handlers.
//!
//! Framework routes extract the request data, call one of these handlers with a
//! response builder, and return whatever the builder produces. Every outcome,
//! errors included, is rendered here, so status codes and bodies are identical
//! across frameworks.

pub mod credentials;
pub mod error;
pub mod login;
pub mod logout;
pub mod messages;
pub mod profile;
pub mod register;

pub use credentials::CredentialsForm;
pub use error::HandlerError;
pub use login::handle_login;
pub use logout::handle_logout;
pub use messages::{
    MessageBody, PageQuery, handle_delete_message, handle_edit_message, handle_list_messages,
    handle_post_message,
};
pub use profile::handle_get_profile;
pub use register::handle_register;
