// Re-export HTTP traits from palaver_core for convenience
pub use palaver_core::{AuthResponseBuilder, AuthResponseHelpers};
