//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Inventory;

/// Home page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Most popular inventories
    pub top5: Vec<Inventory>,
    /// Every inventory, newest first
    pub inventories: Vec<Inventory>,
    /// Tag names for the cloud
    pub tags: Vec<String>,
    /// Tag currently filtering the list
    pub active_tag: Option<String>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}
