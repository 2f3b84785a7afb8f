use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::debug;

use super::{ApiError, Backend, RegistrationForm, Role};

/// [`Backend`] implementation talking to the REST API over HTTP.
///
/// The backend exposes one endpoint family per role: `POST /<role>/` to
/// create an entity and `GET /<role>/<id>` to fetch one.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn check_success(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Only a 400 carries a body we care about.
        let body = if status == StatusCode::BAD_REQUEST {
            response.json::<Value>().await.ok()
        } else {
            None
        };
        Err(classify(status, body.as_ref()))
    }
}

/// Map a non-success status to the error taxonomy: 400 carries an optional
/// `detail` string from the backend, 404 is a plain not-found, anything else
/// is reported as a transport failure.
fn classify(status: StatusCode, body: Option<&Value>) -> ApiError {
    match status {
        StatusCode::BAD_REQUEST => {
            let detail = body.and_then(|body| body.get("detail")?.as_str().map(|s| s.to_string()));
            ApiError::Conflict(detail)
        }
        StatusCode::NOT_FOUND => ApiError::NotFound,
        status => ApiError::Transport(format!("unexpected status code: {}", status)),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Transport(error.to_string())
    }
}

#[async_trait::async_trait]
impl Backend for HttpBackend {
    async fn create(&self, form: &RegistrationForm) -> Result<i64, ApiError> {
        let role = form.role();
        let url = format!("{}/{}/", self.base_url, role.api_path());
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(form)
            .send()
            .await?;
        let body: Value = self.check_success(response).await?.json().await?;

        body.get(role.id_field())
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                ApiError::Transport(format!("response is missing the {} field", role.id_field()))
            })
    }

    async fn get_by_id(&self, role: Role, id: i64) -> Result<Value, ApiError> {
        let url = format!("{}/{}/{}", self.base_url, role.api_path(), id);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        Ok(self.check_success(response).await?.json().await?)
    }
}
