//! Request bodies and the string-to-boolean rule used at the boundary.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use catalog_types::{ItemPatch, NewItem};

use crate::error::ApiError;

/// Only a case-insensitive `"true"` is true. Everything else, typos and
/// the empty string included, is false.
pub fn coerce_flag(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Text(String),
}

/// Availability as sent by clients: a JSON boolean or a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "RawFlag")]
pub struct Flag(pub bool);

impl From<RawFlag> for Flag {
    fn from(raw: RawFlag) -> Self {
        match raw {
            RawFlag::Bool(b) => Flag(b),
            RawFlag::Text(s) => Flag(coerce_flag(&s)),
        }
    }
}

/// `POST /items` body. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub category: String,
    pub available: Flag,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem::new(req.name, req.category, req.available.0)
    }
}

/// `PUT /items/{id}` body. Omitted fields keep their stored value; unknown
/// keys, `id` included, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub available: Option<Flag>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        ItemPatch {
            name: req.name,
            category: req.category,
            available: req.available.map(|f| f.0),
        }
    }
}

/// Parses a request body that must be a JSON object.
pub(crate) fn parse_object<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;
    if !value.is_object() {
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".into(),
        ));
    }
    serde_json::from_value(value).map_err(|e| ApiError::BadRequest(format!("invalid item: {e}")))
}
