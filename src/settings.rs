use serde::Deserialize;
use std::time::Duration;

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub client_id: String,
    pub client_secret: String,
    /// PEM encoded certificate (or public key) used to verify access tokens locally
    pub certificate: String,
    pub organization_name: String,
    pub application_name: String,
    /// Upper bound for every request made with these settings
    #[serde(
        default,
        rename = "timeout_secs",
        deserialize_with = "crate::de::optional_seconds"
    )]
    pub timeout: Option<Duration>,
}

impl Settings {
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        certificate: impl Into<String>,
        organization_name: impl Into<String>,
        application_name: impl Into<String>,
    ) -> Self {
        Settings {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            certificate: certificate.into(),
            organization_name: organization_name.into(),
            application_name: application_name.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_without_timeout() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "endpoint": "http://localhost:8000",
                "client_id": "id",
                "client_secret": "secret",
                "certificate": "",
                "organization_name": "built-in",
                "application_name": "app-built-in"
            }"#,
        )
        .unwrap();

        assert_eq!(settings.organization_name, "built-in");
        assert!(settings.timeout().is_none());
    }

    #[test]
    fn sub_second_timeout_is_kept() {
        let settings = Settings::new("e", "i", "s", "c", "o", "a")
            .with_timeout(Duration::from_millis(200));

        assert_eq!(settings.timeout(), Some(Duration::from_millis(200)));
    }

    #[test]
    fn timeout_is_read_in_seconds() {
        let settings: Settings = serde_json::from_str(
            r#"{
                "endpoint": "http://localhost:8000",
                "client_id": "id",
                "client_secret": "secret",
                "certificate": "",
                "organization_name": "built-in",
                "application_name": "app-built-in",
                "timeout_secs": 5
            }"#,
        )
        .unwrap();

        assert_eq!(settings.timeout(), Some(Duration::from_secs(5)));
    }
}
