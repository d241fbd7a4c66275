pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    get_profile::{GetProfileUseCase, ProfileError},
    login::{IssuedSession, LoginError, LoginUseCase},
    logout::{LogoutError, LogoutUseCase},
    message_board::{MessageBoardError, MessageBoardUseCase},
    register::{RegisterError, RegisterUseCase},
};
