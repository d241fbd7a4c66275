use async_trait::async_trait;

/// Decides whether a request may reach a protected route.
///
/// Validators only see the request parts (headers, method, URI, extensions),
/// never the body, so they work with non-`Sync` body types.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The principal handed to protected handlers on success.
    type Principal: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Extracts the credentials from the request and resolves them to a principal.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, do not match a live
    /// session, or the backing store fails.
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Principal, Self::Error>;
}
