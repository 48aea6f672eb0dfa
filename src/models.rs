//! Frontend Models
//!
//! Data structures matching backend entities (camelCase JSON).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Owner summary embedded in list responses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OwnerRef {
    pub name: String,
}

/// `_count` block sent by the list endpoints
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemTally {
    #[serde(default)]
    pub items: u32,
}

/// Inventory data structure (matches backend)
///
/// List endpoints and the detail endpoint send slightly different shapes,
/// so everything beyond the identity fields is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: String,
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
    #[serde(default)]
    pub write_users: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub item_count: Option<u32>,
    #[serde(default, rename = "_count")]
    pub tally: Option<ItemTally>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub numbering_pattern: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Inventory {
    /// Number of items, whichever shape the backend sent
    pub fn item_count(&self) -> u32 {
        self.item_count
            .or_else(|| self.tally.as_ref().map(|t| t.items))
            .unwrap_or(0)
    }

    pub fn owner_name(&self) -> &str {
        self.owner.as_ref().map(|o| o.name.as_str()).unwrap_or("")
    }

    /// Owner or listed write user
    pub fn can_edit(&self, user_id: &str) -> bool {
        self.owner_id == user_id || self.write_users.iter().any(|u| u == user_id)
    }
}

/// Column types an inventory schema supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    String,
    Number,
    Date,
    Boolean,
    Enum,
}

impl FieldType {
    pub const ALL: [FieldType; 5] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Date,
        FieldType::Boolean,
        FieldType::Enum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Enum => "enum",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "boolean" => FieldType::Boolean,
            "enum" => FieldType::Enum,
            _ => FieldType::String,
        }
    }
}

/// Field definition (one column of an inventory's item schema)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub inventory_id: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub position: i32,
}

/// Body for `POST fields/many`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateField {
    pub name: String,
    pub inventory_id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub options: Vec<String>,
    pub position: i32,
}

/// Numbering record; `counter` is owned by the server
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Numbering {
    #[serde(default)]
    pub id: String,
    pub inventory_id: String,
    pub pattern: String,
    #[serde(default)]
    pub counter: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub inventory_id: String,
    pub inv_number: String,
    #[serde(default)]
    pub data: Map<String, Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

/// One row of `inventory-access/{id}/all`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessEntry {
    pub user: UserRef,
}

/// Body for `POST inventories/`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInventory {
    pub code: String,
    pub name: String,
    pub description: String,
    pub owner_id: String,
    pub is_public: bool,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}
