use fake::{Fake, faker::internet::en::Username};
use palaver_adapters::{
    auth_validation::SessionAuthConfig,
    crypto::Argon2PasswordHasher,
    persistence::{HashMapMessageStore, HashMapUserStore},
};
use palaver_service::ChatService;
use reqwest::header::{COOKIE, SET_COOKIE};

pub const PASSWORD: &str = "password1";

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

/// The cookie/header pair a browser would send after logging in.
#[derive(Debug, Clone)]
pub struct TestSession {
    pub session_token: String,
    pub csrf_token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = ChatService::new(
            HashMapUserStore::new(),
            HashMapMessageStore::new(),
            Argon2PasswordHasher::new(),
            SessionAuthConfig {
                cookie_secure: false,
                ..SessionAuthConfig::default()
            },
        );

        tokio::spawn(service.run_standalone(listener, None));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn post_register(&self, username: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/register", self.address))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, username: &str, password: &str) -> reqwest::Response {
        self.http_client
            .post(format!("{}/auth/login", self.address))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self, session: &TestSession) -> reqwest::Response {
        self.authorized(
            self.http_client.post(format!("{}/auth/logout", self.address)),
            session,
        )
        .send()
        .await
        .expect("Failed to execute request")
    }

    pub async fn get_messages(&self, session: &TestSession, query: &str) -> reqwest::Response {
        self.authorized(
            self.http_client
                .get(format!("{}/messages?{query}", self.address)),
            session,
        )
        .send()
        .await
        .expect("Failed to execute request")
    }

    pub async fn post_message(&self, session: &TestSession, text: &str) -> reqwest::Response {
        self.authorized(
            self.http_client.post(format!("{}/messages", self.address)),
            session,
        )
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .expect("Failed to execute request")
    }

    pub async fn patch_message(
        &self,
        session: &TestSession,
        id: &str,
        text: &str,
    ) -> reqwest::Response {
        self.authorized(
            self.http_client
                .patch(format!("{}/messages/{id}", self.address)),
            session,
        )
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .expect("Failed to execute request")
    }

    pub async fn delete_message(&self, session: &TestSession, id: &str) -> reqwest::Response {
        self.authorized(
            self.http_client
                .delete(format!("{}/messages/{id}", self.address)),
            session,
        )
        .send()
        .await
        .expect("Failed to execute request")
    }

    pub async fn get_profile(&self, id: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/users/{id}", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers a fresh user and logs in once.
    pub async fn signed_in_user(&self) -> (String, TestSession) {
        let username = random_username();
        assert_eq!(self.post_register(&username, PASSWORD).await.status(), 201);
        let response = self.post_login(&username, PASSWORD).await;
        assert_eq!(response.status(), 200);
        (username, session_from(&response))
    }

    fn authorized(
        &self,
        request: reqwest::RequestBuilder,
        session: &TestSession,
    ) -> reqwest::RequestBuilder {
        request
            .header(COOKIE, format!("session_token={}", session.session_token))
            .header("X-CSRF-Token", &session.csrf_token)
    }
}

pub fn random_username() -> String {
    let name: String = Username().fake();
    format!("member_{name}")
}

/// Every `Set-Cookie` header of the response, unparsed.
pub fn set_cookies(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// The full `Set-Cookie` line for `name`.
pub fn set_cookie(response: &reqwest::Response, name: &str) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .find(|cookie| cookie.starts_with(&format!("{name}=")))
}

pub fn cookie_value(response: &reqwest::Response, name: &str) -> Option<String> {
    let cookie = set_cookie(response, name)?;
    let pair = cookie.split(';').next()?;
    pair.split_once('=').map(|(_, value)| value.to_string())
}

pub fn session_from(response: &reqwest::Response) -> TestSession {
    TestSession {
        session_token: cookie_value(response, "session_token").expect("No session cookie"),
        csrf_token: cookie_value(response, "csrf_token").expect("No CSRF cookie"),
    }
}
