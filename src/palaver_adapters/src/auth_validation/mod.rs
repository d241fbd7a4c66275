pub mod session_validator;

pub use session_validator::{
    SessionAuthConfig, SessionAuthError, SessionValidator, create_csrf_cookie,
    create_removal_cookie, create_session_cookie, extract_csrf_token, extract_session_token,
};
