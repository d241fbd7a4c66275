use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use palaver_adapters::{
    auth_validation::{SessionAuthConfig, SessionValidator},
    config::AllowedOrigins,
};
use palaver_axum::{
    middleware::require_session,
    routes::{
        delete_message, edit_message, get_profile, health, list_messages, login, logout,
        post_message, register,
    },
};
use palaver_core::{MessageStore, PasswordHasher, UserStore};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// The chat API: registration, login, logout, profiles and the message board.
pub struct ChatService {
    router: Router,
}

impl ChatService {
    /// Builds every route over the given stores.
    ///
    /// Stores are `Clone` handles onto shared state (`Arc<RwLock<..>>` or a
    /// connection pool), so each route gets only the pieces it needs.
    /// `/auth/logout` and every `/messages` route run behind the session gate.
    pub fn new<U, M, H>(
        user_store: U,
        message_store: M,
        hasher: H,
        auth_config: SessionAuthConfig,
    ) -> Self
    where
        U: UserStore + Clone + 'static,
        M: MessageStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let validator = SessionValidator::new(user_store.clone(), auth_config.clone());

        let protected: Router = Router::new()
            // Logout needs the user store and cookie names
            .route("/auth/logout", post(logout::<U>))
            .with_state((user_store.clone(), auth_config.clone()))
            // The message board only needs the message store
            .route("/messages", get(list_messages::<M>).post(post_message::<M>))
            .route(
                "/messages/{id}",
                patch(edit_message::<M>).delete(delete_message::<M>),
            )
            .with_state(message_store)
            .route_layer(from_fn_with_state(
                validator,
                require_session::<SessionValidator<U>>,
            ));

        let public: Router = Router::new()
            .route("/auth/register", post(register::<U, H>))
            .with_state((user_store.clone(), hasher.clone()))
            .route("/auth/login", post(login::<U, H>))
            .with_state((user_store.clone(), hasher, auth_config))
            .route("/users/{id}", get(get_profile::<U>))
            .with_state(user_store)
            .route("/health", get(health));

        Self {
            router: public.merge(protected),
        }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Converts the service into a router that can be mounted on another router.
    ///
    /// With an allow-list, cross-origin browsers may call the API with
    /// credentials from exactly those origins.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::HeaderName::from_static("x-csrf-token"),
                ])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serves the API on `listener` until the process stops.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Chat service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
