//! Create, read, update and delete for every record kind the server stores.
//!
//! A kind only has to describe its action names and how it is identified, the
//! [`CasdoorClient`] methods in this module do the rest. The typed wrappers in
//! [`user`](crate::user), [`role`](crate::role) and [`permission`](crate::permission)
//! are thin aliases of these.

use crate::casdoor_client::CasdoorClient;
use crate::error::Result;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record identified by `<owner>/<name>`.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Singular action suffix, `role` in `get-role`.
    const KIND: &'static str;
    /// Plural action suffix, `roles` in `get-roles`.
    const KIND_PLURAL: &'static str;

    fn owner(&self) -> &str;
    fn name(&self) -> &str;
    fn set_owner(&mut self, owner: String);

    fn id(&self) -> String {
        format!("{}/{}", self.owner(), self.name())
    }
}

macro_rules! impl_entity {
    ($entity:ty, $kind:literal, $plural:literal) => {
        impl $crate::entity::Entity for $entity {
            const KIND: &'static str = $kind;
            const KIND_PLURAL: &'static str = $plural;

            fn owner(&self) -> &str {
                &self.owner
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn set_owner(&mut self, owner: String) {
                self.owner = owner;
            }
        }
    };
}

pub(crate) use impl_entity;

impl CasdoorClient {
    /// Every record of kind `E` in the configured organization, in server order.
    pub async fn get_entities<E: Entity>(&self) -> Result<Vec<E>> {
        let action = format!("get-{}", E::KIND_PLURAL);
        let entities: Option<Vec<E>> = self
            .get_data(&action, &[("owner", self.settings.organization_name.as_str())])
            .await?;

        Ok(entities.unwrap_or_default())
    }

    /// The record called `name` in the configured organization, `None` when it does not exist.
    pub async fn get_entity<E: Entity>(&self, name: &str) -> Result<Option<E>> {
        let action = format!("get-{}", E::KIND);
        let id = format!("{}/{}", self.settings.organization_name, name);

        self.get_data(&action, &[("id", id.as_str())]).await
    }

    pub async fn add_entity<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.modify_entity("add", entity, &[]).await
    }

    pub async fn update_entity<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.modify_entity("update", entity, &[]).await
    }

    /// Updates only the listed (json) fields of the record.
    pub async fn update_entity_columns<E: Entity>(
        &self,
        entity: &E,
        columns: &[&str],
    ) -> Result<bool> {
        self.modify_entity("update", entity, columns).await
    }

    pub async fn delete_entity<E: Entity>(&self, entity: &E) -> Result<bool> {
        self.modify_entity("delete", entity, &[]).await
    }

    async fn modify_entity<E: Entity>(
        &self,
        verb: &str,
        entity: &E,
        columns: &[&str],
    ) -> Result<bool> {
        let action = format!("{}-{}", verb, E::KIND);
        let id = entity.id();
        let columns = columns.join(",");

        let mut query = vec![("id", id.as_str())];
        if !columns.is_empty() {
            query.push(("columns", columns.as_str()));
        }

        // Records always land in the organization of this client
        let mut entity = entity.clone();
        entity.set_owner(self.settings.organization_name.clone());
        let body = serde_json::to_vec(&entity)?;

        let envelope = self
            .post_envelope(&action, &query, body, false)
            .await?
            .into_ok()?;

        let affected = envelope.is_affected();
        debug!("{} {}: affected = {}", action, id, affected);
        Ok(affected)
    }
}
