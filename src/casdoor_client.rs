use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::settings::Settings;
use log::{debug, trace};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

const API_PREFIX: &str = "/api/";
const FILE_FIELD: &str = "file";
const TEXT_PLAIN_UTF8: &str = "text/plain;charset=UTF-8";

#[derive(Clone)]
pub struct CasdoorClient {
    pub(crate) http_client: Client,
    pub(crate) settings: Settings,
}

impl CasdoorClient {
    pub fn new(mut settings: Settings) -> Result<Self> {
        let trimmed_len = settings.endpoint.trim_end_matches('/').len();
        settings.endpoint.truncate(trimmed_len);

        // Create the underlying http client, will be reused for every call
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        trace!(
            "Created client for '{}' (organization '{}')",
            settings.endpoint,
            settings.organization_name
        );

        Ok(CasdoorClient {
            http_client,
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds `<endpoint>/api/<action>?<query>`.
    ///
    /// Actions which already start with `/` are taken as a path relative to the endpoint.
    /// Every query value is form-url-encoded, so `admin/foo` becomes `admin%2Ffoo`.
    pub fn build_url(&self, action: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = if action.starts_with('/') {
            Url::parse(&format!("{}{}", self.settings.endpoint, action))?
        } else {
            Url::parse(&format!("{}{}{}", self.settings.endpoint, API_PREFIX, action))?
        };

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    /// Performs an authenticated GET and decodes the envelope, whatever its status.
    pub async fn get_envelope(&self, url: Url) -> Result<Envelope> {
        debug!("GET {}", url.path());
        self.request_json(self.http_client.get(url)).await
    }

    /// Performs an authenticated GET and decodes the `data` of an `ok` envelope.
    pub async fn get_data<T>(&self, action: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(action, query)?;
        self.get_envelope(url).await?.into_data()
    }

    /// Performs an authenticated POST and decodes the envelope, whatever its status.
    pub async fn post_envelope(
        &self,
        action: &str,
        query: &[(&str, &str)],
        body: Vec<u8>,
        is_file: bool,
    ) -> Result<Envelope> {
        self.post_json(action, query, body, is_file).await
    }

    /// Performs an authenticated POST and decodes the whole body into `R`.
    ///
    /// With `is_file` the body is sent as a multipart form holding a single `file` field,
    /// otherwise it is sent verbatim as UTF-8 text.
    pub async fn post_json<R>(
        &self,
        action: &str,
        query: &[(&str, &str)],
        body: Vec<u8>,
        is_file: bool,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.build_url(action, query)?;
        debug!("POST {} ({} bytes, multipart: {})", url.path(), body.len(), is_file);

        let request = self.http_client.post(url);
        let request = if is_file {
            let part = Part::bytes(body).file_name(FILE_FIELD);
            request.multipart(Form::new().part(FILE_FIELD, part))
        } else {
            request.header(CONTENT_TYPE, TEXT_PLAIN_UTF8).body(body)
        };

        self.request_json(request).await
    }

    async fn request_json<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        // Every call carries the application credentials
        let request = request.basic_auth(
            &self.settings.client_id,
            Some(&self.settings.client_secret),
        );

        // Execute the request
        let response = request.send().await?;
        let status_code = response.status();
        let body = response.bytes().await?;
        trace!(
            "Response (CODE={}): {}",
            status_code.as_u16(),
            String::from_utf8_lossy(&body)
        );

        // The server answers errors with an envelope as well, only give up on
        // the status code when the body is not json
        match serde_json::from_slice(&body) {
            Ok(decoded) => Ok(decoded),
            Err(err) if status_code.is_success() => Err(Error::Decode(err)),
            Err(_) => Err(Error::Transport(
                format!("Unsupported status code (CODE={})", status_code.as_u16()).into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str) -> CasdoorClient {
        let settings = Settings::new(endpoint, "id", "secret", "", "built-in", "app-built-in");
        CasdoorClient::new(settings).unwrap()
    }

    #[test]
    fn build_url_encodes_the_id() {
        let url = client("http://localhost:8000")
            .build_url("get-role", &[("id", "admin/foo")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/get-role?id=admin%2Ffoo"
        );
    }

    #[test]
    fn build_url_without_query_has_no_question_mark() {
        let url = client("http://localhost:8000")
            .build_url("get-roles", &[])
            .unwrap();

        assert_eq!(url.as_str(), "http://localhost:8000/api/get-roles");
    }

    #[test]
    fn build_url_keeps_absolute_paths() {
        let url = client("http://localhost:8000/")
            .build_url("/api/login/oauth/logout", &[("state", "app")])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/login/oauth/logout?state=app"
        );
    }

    #[test]
    fn build_url_encodes_every_value() {
        let url = client("http://localhost:8000")
            .build_url("get-user", &[("owner", "built-in"), ("email", "a+b@c.d")])
            .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.query(), Some("owner=built-in&email=a%2Bb%40c.d"));
        assert_eq!(pairs[1], ("email".to_string(), "a+b@c.d".to_string()));
    }

    #[test]
    fn unparseable_endpoint_is_a_url_error() {
        let err = client("not a url").build_url("get-roles", &[]).unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }
}
