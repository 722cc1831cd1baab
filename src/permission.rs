use crate::casdoor_client::CasdoorClient;
use crate::entity::impl_entity;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Permission {
    pub owner: String,
    pub name: String,
    pub created_time: String,
    pub display_name: String,
    pub description: String,

    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub users: Vec<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub roles: Vec<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub domains: Vec<String>,

    pub model: String,
    pub adapter: String,
    pub resource_type: String,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub resources: Vec<String>,
    #[serde(deserialize_with = "crate::de::null_as_default")]
    pub actions: Vec<String>,
    /// `Allow` or `Deny`
    pub effect: String,
    pub is_enabled: bool,

    pub submitter: String,
    pub approver: String,
    pub approve_time: String,
    pub state: String,
}

impl_entity!(Permission, "permission", "permissions");

impl CasdoorClient {
    pub async fn get_permissions(&self) -> Result<Vec<Permission>> {
        self.get_entities().await
    }

    pub async fn get_permission(&self, name: &str) -> Result<Option<Permission>> {
        self.get_entity(name).await
    }

    pub async fn add_permission(&self, permission: &Permission) -> Result<bool> {
        self.add_entity(permission).await
    }

    pub async fn update_permission(&self, permission: &Permission) -> Result<bool> {
        self.update_entity(permission).await
    }

    pub async fn update_permission_columns(
        &self,
        permission: &Permission,
        columns: &[&str],
    ) -> Result<bool> {
        self.update_entity_columns(permission, columns).await
    }

    pub async fn delete_permission(&self, permission: &Permission) -> Result<bool> {
        self.delete_entity(permission).await
    }
}
