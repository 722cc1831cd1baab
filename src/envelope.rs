use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

const STATUS_OK: &str = "ok";
const AFFECTED: &str = "Affected";

/// Uniform wrapper the server puts around every response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Envelope {
    pub status: String,
    pub msg: String,
    pub data: Value,
    pub data2: Value,
}

impl Envelope {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Turns a non `ok` status into [`Error::Api`].
    pub fn into_ok(self) -> Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(Error::Api {
                status: self.status,
                msg: self.msg,
            })
        }
    }

    /// Decodes `data` into `T`, a JSON `null` is handed to `T` as is so
    /// `Option<T>` reports absence.
    pub fn into_data<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_value(self.into_ok()?.data)?)
    }

    pub fn is_affected(&self) -> bool {
        self.data.as_str() == Some(AFFECTED)
    }
}
