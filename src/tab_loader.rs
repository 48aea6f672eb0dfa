//! Inventory Tab Loading
//!
//! Four independent fetches per inventory page. The tab shell only needs
//! the inventory and its numbering; fields and access fill in whenever
//! they arrive.

use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::stream::{FuturesUnordered, Stream, StreamExt};

use crate::api::FetchResult;
use crate::cancel::CancelToken;
use crate::models::{AccessEntry, Field, Inventory, Numbering};
use crate::source::InventorySource;

/// One finished fetch
#[derive(Debug, Clone, PartialEq)]
pub enum TabUpdate {
    Inventory(FetchResult<Inventory>),
    Numbering(FetchResult<Numbering>),
    Fields(FetchResult<Vec<Field>>),
    Access(FetchResult<Vec<AccessEntry>>),
}

/// What the tab container has received so far
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabState {
    pub inventory: Option<Inventory>,
    pub numbering: Option<Numbering>,
    pub fields: Vec<Field>,
    pub access: Vec<AccessEntry>,
}

/// Data required before any tab renders
#[derive(Debug, Clone, PartialEq)]
pub struct TabShell {
    pub inventory: Inventory,
    pub numbering: Numbering,
}

impl TabState {
    /// Store a finished fetch. Failures are logged and leave the slice untouched.
    pub fn apply(&mut self, update: TabUpdate) {
        match update {
            TabUpdate::Inventory(Ok(inv)) => self.inventory = Some(inv),
            TabUpdate::Numbering(Ok(numbering)) => self.numbering = Some(numbering),
            TabUpdate::Fields(Ok(fields)) => self.fields = fields,
            TabUpdate::Access(Ok(access)) => self.access = access,
            TabUpdate::Inventory(Err(e)) => log::error!("[TABS] error when loading inventory: {}", e),
            TabUpdate::Numbering(Err(e)) => log::error!("[TABS] error when loading numbering: {}", e),
            TabUpdate::Fields(Err(e)) => log::error!("[TABS] error when loading fields: {}", e),
            TabUpdate::Access(Err(e)) => log::error!("[TABS] error when loading access: {}", e),
        }
    }

    /// `Some` once both inventory and numbering are present
    pub fn shell(&self) -> Option<TabShell> {
        match (&self.inventory, &self.numbering) {
            (Some(inventory), Some(numbering)) => Some(TabShell {
                inventory: inventory.clone(),
                numbering: numbering.clone(),
            }),
            _ => None,
        }
    }
}

/// Issue all four fetches at once; updates come out in completion order
pub fn load_inventory_tab(
    source: Arc<dyn InventorySource>,
    inventory_id: String,
) -> impl Stream<Item = TabUpdate> + Unpin {
    let pending: FuturesUnordered<LocalBoxFuture<'static, TabUpdate>> = FuturesUnordered::new();

    let (src, id) = (source.clone(), inventory_id.clone());
    pending.push(async move { TabUpdate::Fields(src.fields(&id).await) }.boxed_local());

    let (src, id) = (source.clone(), inventory_id.clone());
    pending.push(async move { TabUpdate::Numbering(src.numbering(&id).await) }.boxed_local());

    let (src, id) = (source.clone(), inventory_id.clone());
    pending.push(async move { TabUpdate::Inventory(src.inventory(&id).await) }.boxed_local());

    pending.push(async move { TabUpdate::Access(source.access(&inventory_id).await) }.boxed_local());
    pending
}

/// Refetch only the field list
pub async fn reload_fields(source: Arc<dyn InventorySource>, inventory_id: String) -> TabUpdate {
    TabUpdate::Fields(source.fields(&inventory_id).await)
}

/// Feed updates to `apply` until the stream ends or the token is cancelled
pub async fn pump<S>(mut updates: S, token: &CancelToken, mut apply: impl FnMut(TabUpdate))
where
    S: Stream<Item = TabUpdate> + Unpin,
{
    while let Some(update) = updates.next().await {
        if token.is_cancelled() {
            log::debug!("[TABS] view gone, dropping remaining updates");
            return;
        }
        apply(update);
    }
}
