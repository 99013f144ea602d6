use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use store::models::{
    parse_questions, AiAlert, AiQuestion, AlertsPayload, Credentials, DiaryEntry, ErrorBody,
    LoginReply, NewEntry, PreferenceAnswer, ProfileUpdate, ReflectionReply, ReflectionRequest,
    SummaryData, UserProfile,
};
use store::Session;

use crate::error::ApiError;

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_ORIGIN: &str = "http://localhost:8080";

/// Turn a configured base into an absolute URL.
///
/// A relative base such as `/api` is joined to the page origin in the browser
/// and to `http://localhost:8080` elsewhere. Trailing slashes are dropped.
pub fn resolve_base_url(base: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.starts_with("http://") || base.starts_with("https://") {
        return base.to_string();
    }
    let path = if base.starts_with('/') || base.is_empty() {
        base.to_string()
    } else {
        format!("/{base}")
    };
    format!("{}{}", page_origin(), path)
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> String {
    NATIVE_ORIGIN.to_string()
}

/// Authenticated JSON client for the diary API.
#[derive(Clone, Debug)]
pub struct DiaryClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl DiaryClient {
    pub fn new(base_url: impl AsRef<str>, session: Session) -> Self {
        Self {
            http: Client::new(),
            base_url: resolve_base_url(base_url.as_ref()),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Forget the stored token. The server keeps no session state to revoke.
    pub fn logout(&self) {
        tracing::info!("signing out");
        self.session.clear();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send an authenticated request and hand back the raw response.
    ///
    /// A 401 clears the session and becomes [`ApiError::Unauthorized`]; every
    /// other status is returned untouched for the caller to inspect.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Response, ApiError> {
        self.dispatch(method, path, body).await
    }

    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        tracing::debug!("{method} {path}");
        let mut request = self.request(method.clone(), path);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("{method} {path} answered 401, clearing session");
            self.session.clear();
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.dispatch::<()>(Method::GET, path, None).await?;
        Ok(ok_or_rejected(response).await?.json().await?)
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = self.dispatch(Method::POST, path, Some(body)).await?;
        ok_or_rejected(response).await
    }

    /// Unauthenticated POST for `/login` and `/register`.
    async fn post_public<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        tracing::debug!("POST {path}");
        let response = self.request(Method::POST, path).json(body).send().await?;
        ok_or_rejected(response).await
    }

    pub async fn list_entries(&self) -> Result<Vec<DiaryEntry>, ApiError> {
        self.get("/entries").await
    }

    pub async fn get_entry(&self, id: i64) -> Result<DiaryEntry, ApiError> {
        self.get(&format!("/entries/{id}")).await
    }

    pub async fn create_entry(&self, entry: &NewEntry) -> Result<(), ApiError> {
        self.post("/entries", entry).await?;
        Ok(())
    }

    pub async fn delete_entry(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/entries/{id}");
        let response = self.dispatch::<()>(Method::DELETE, &path, None).await?;
        ok_or_rejected(response).await?;
        Ok(())
    }

    pub async fn unlock_entry(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/entries/{id}/unlock");
        let response = self.dispatch::<()>(Method::POST, &path, None).await?;
        ok_or_rejected(response).await?;
        Ok(())
    }

    /// Submit a reflection and return the server's reply text.
    pub async fn respond(&self, id: i64, request: &ReflectionRequest) -> Result<String, ApiError> {
        let reply: ReflectionReply = self
            .post(&format!("/entries/{id}/respond"), request)
            .await?
            .json()
            .await?;
        Ok(reply.ai_response)
    }

    pub async fn summary(&self) -> Result<SummaryData, ApiError> {
        self.get("/summary").await
    }

    pub async fn ai_questions(&self) -> Result<Vec<AiQuestion>, ApiError> {
        let payload: Value = self.get("/ai/questions").await?;
        Ok(parse_questions(&payload))
    }

    pub async fn ai_alerts(&self) -> Result<Vec<AiAlert>, ApiError> {
        let payload: AlertsPayload = self.get("/ai/alerts").await?;
        Ok(payload.alerts)
    }

    pub async fn answer_question(&self, answer: &PreferenceAnswer) -> Result<(), ApiError> {
        self.post("/preferences", answer).await?;
        Ok(())
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.post("/profile", update).await?;
        Ok(())
    }

    /// Sign in and persist the returned token.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginReply, ApiError> {
        let reply: LoginReply = self.post_public("/login", credentials).await?.json().await?;
        self.session.store_token(&reply.token);
        tracing::info!("signed in as {}", reply.username);
        Ok(reply)
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.post_public("/register", credentials).await?;
        Ok(())
    }
}

async fn ok_or_rejected(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .map(|body| body.error)
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    tracing::warn!("request rejected with {status}: {message}");
    Err(ApiError::Rejected { status, message })
}
