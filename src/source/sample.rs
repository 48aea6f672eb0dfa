//! Bundled Sample Data
//!
//! In-memory stand-in for the backend. Creating inventories and fields
//! only changes this copy.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;

use crate::api::{FetchError, FetchResult};
use crate::dashboard::{compute_tag_cloud, latest, top_popular};
use crate::models::{
    AccessEntry, CreateField, CreateInventory, Field, Inventory, Item, Numbering, OwnerRef, UserRef,
};
use super::InventorySource;

const SAMPLE_JSON: &str = include_str!("sample_data.json");

/// Pattern given to inventories created locally
const DEFAULT_PATTERN: &str = "{CODE}-{YYYY}-{SEQ:5}";

#[derive(Debug, Default, Deserialize)]
struct SampleData {
    #[serde(default)]
    users: Vec<UserRef>,
    #[serde(default)]
    inventories: Vec<Inventory>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    numberings: Vec<Numbering>,
    #[serde(default)]
    access: HashMap<String, Vec<AccessEntry>>,
    #[serde(skip)]
    next_id: u32,
}

impl SampleData {
    fn fresh_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn user_name(&self, user_id: &str) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "You".to_string())
    }
}

pub struct SampleSource {
    data: Mutex<SampleData>,
}

impl SampleSource {
    pub fn new() -> Self {
        Self::from_json(SAMPLE_JSON)
    }

    /// Unparseable data is logged and leaves the source empty
    pub fn from_json(json: &str) -> Self {
        let data = match serde_json::from_str::<SampleData>(json) {
            Ok(data) => data,
            Err(e) => {
                log::error!("[SAMPLE] could not parse sample data: {}", e);
                SampleData::default()
            }
        };
        Self { data: Mutex::new(data) }
    }

    fn lock(&self) -> MutexGuard<'_, SampleData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found() -> FetchError {
    FetchError::Status(404)
}

#[async_trait(?Send)]
impl InventorySource for SampleSource {
    async fn top5(&self) -> FetchResult<Vec<Inventory>> {
        Ok(top_popular(&self.lock().inventories, 5))
    }

    async fn all_inventories(&self) -> FetchResult<Vec<Inventory>> {
        let data = self.lock();
        Ok(latest(&data.inventories, data.inventories.len()))
    }

    async fn tags(&self) -> FetchResult<Vec<String>> {
        let cloud = compute_tag_cloud(&self.lock().inventories);
        Ok(cloud.into_iter().map(|t| t.tag).collect())
    }

    async fn inventories_of(&self, user_id: &str) -> FetchResult<Vec<Inventory>> {
        Ok(self
            .lock()
            .inventories
            .iter()
            .filter(|inv| inv.owner_id == user_id)
            .cloned()
            .collect())
    }

    async fn inventory(&self, id: &str) -> FetchResult<Inventory> {
        let data = self.lock();
        let mut inv = data
            .inventories
            .iter()
            .find(|inv| inv.id == id)
            .cloned()
            .ok_or_else(not_found)?;
        inv.fields = data.fields.iter().filter(|f| f.inventory_id == id).cloned().collect();
        Ok(inv)
    }

    async fn create_inventory(&self, req: &CreateInventory) -> FetchResult<Inventory> {
        let mut data = self.lock();
        let id = data.fresh_id("inv");
        let now = Utc::now();
        let inv = Inventory {
            id: id.clone(),
            code: req.code.clone(),
            name: req.name.clone(),
            description: Some(req.description.clone()),
            image: req.image.clone(),
            owner_id: req.owner_id.clone(),
            owner: Some(OwnerRef { name: data.user_name(&req.owner_id) }),
            item_count: Some(0),
            created_at: Some(now),
            updated_at: Some(now),
            numbering_pattern: Some(DEFAULT_PATTERN.to_string()),
            is_public: req.is_public,
            ..Default::default()
        };
        let numbering_id = data.fresh_id("num");
        data.numberings.push(Numbering {
            id: numbering_id,
            inventory_id: id,
            pattern: DEFAULT_PATTERN.to_string(),
            counter: 0,
        });
        data.inventories.push(inv.clone());
        Ok(inv)
    }

    async fn fields(&self, inventory_id: &str) -> FetchResult<Vec<Field>> {
        let mut fields: Vec<Field> = self
            .lock()
            .fields
            .iter()
            .filter(|f| f.inventory_id == inventory_id)
            .cloned()
            .collect();
        fields.sort_by_key(|f| f.position);
        Ok(fields)
    }

    async fn create_fields(&self, req: &[CreateField]) -> FetchResult<Vec<Field>> {
        let mut data = self.lock();
        let mut created = Vec::with_capacity(req.len());
        for f in req {
            let field = Field {
                id: data.fresh_id("field"),
                inventory_id: f.inventory_id.clone(),
                key: f.key.clone(),
                name: f.name.clone(),
                field_type: f.field_type,
                required: f.required,
                options: f.options.clone(),
                position: f.position,
            };
            data.fields.push(field.clone());
            created.push(field);
        }
        Ok(created)
    }

    async fn items(&self, inventory_id: &str) -> FetchResult<Vec<Item>> {
        Ok(self
            .lock()
            .items
            .iter()
            .filter(|it| it.inventory_id == inventory_id)
            .cloned()
            .collect())
    }

    async fn numbering(&self, inventory_id: &str) -> FetchResult<Numbering> {
        self.lock()
            .numberings
            .iter()
            .find(|n| n.inventory_id == inventory_id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn access(&self, inventory_id: &str) -> FetchResult<Vec<AccessEntry>> {
        Ok(self.lock().access.get(inventory_id).cloned().unwrap_or_default())
    }
}
