use crate::casdoor_client::CasdoorClient;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// A file stored by the server, as returned after an upload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub owner: String,
    pub name: String,
    pub created_time: String,

    pub user: String,
    pub provider: String,
    pub application: String,
    pub tag: String,
    pub parent: String,
    pub file_name: String,
    pub file_type: String,
    pub file_format: String,
    pub file_size: i64,
    pub url: String,
    pub description: String,
}

/// Where an uploaded file ended up.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadedResource {
    pub file_url: String,
    pub name: String,
}

impl CasdoorClient {
    /// Uploads `file_bytes` for `user`, stored under `full_file_path`.
    pub async fn upload_resource(
        &self,
        user: &str,
        tag: &str,
        parent: &str,
        full_file_path: &str,
        file_bytes: Vec<u8>,
    ) -> Result<UploadedResource> {
        let query = [
            ("owner", self.settings.organization_name.as_str()),
            ("user", user),
            ("application", self.settings.application_name.as_str()),
            ("tag", tag),
            ("parent", parent),
            ("fullFilePath", full_file_path),
        ];

        let envelope = self
            .post_envelope("upload-resource", &query, file_bytes, true)
            .await?
            .into_ok()?;

        let uploaded = UploadedResource {
            file_url: serde_json::from_value(envelope.data)?,
            name: serde_json::from_value(envelope.data2)?,
        };
        debug!("Uploaded '{}' to {}", uploaded.name, uploaded.file_url);
        Ok(uploaded)
    }

    pub async fn delete_resource(&self, name: &str) -> Result<bool> {
        let resource = Resource {
            owner: self.settings.organization_name.clone(),
            name: name.to_string(),
            ..Resource::default()
        };
        let body = serde_json::to_vec(&resource)?;

        let envelope = self
            .post_envelope("delete-resource", &[], body, false)
            .await?
            .into_ok()?;
        Ok(envelope.is_affected())
    }
}
