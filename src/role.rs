use crate::casdoor_client::CasdoorClient;
use crate::entity::impl_entity;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
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
    pub is_enabled: bool,
}

impl_entity!(Role, "role", "roles");

impl CasdoorClient {
    pub async fn get_roles(&self) -> Result<Vec<Role>> {
        self.get_entities().await
    }

    pub async fn get_role(&self, name: &str) -> Result<Option<Role>> {
        self.get_entity(name).await
    }

    pub async fn add_role(&self, role: &Role) -> Result<bool> {
        self.add_entity(role).await
    }

    pub async fn update_role(&self, role: &Role) -> Result<bool> {
        self.update_entity(role).await
    }

    pub async fn update_role_columns(&self, role: &Role, columns: &[&str]) -> Result<bool> {
        self.update_entity_columns(role, columns).await
    }

    pub async fn delete_role(&self, role: &Role) -> Result<bool> {
        self.delete_entity(role).await
    }
}
