//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::models::Inventory;
use crate::source::InventorySource;

/// Pages reachable inside the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    MyInventories,
    Inventory(String),
}

/// The signed-in user, established once at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into() }
    }

    pub fn can_edit(&self, inv: &Inventory) -> bool {
        inv.can_edit(&self.user_id)
    }
}

/// App-wide signals and services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Previously visited pages, most recent last
    history: RwSignal<Vec<Route>>,
    pub session: Session,
    source: Arc<dyn InventorySource>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        session: Session,
        source: Arc<dyn InventorySource>,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            history: RwSignal::new(Vec::new()),
            session,
            source,
        }
    }

    /// Data source shared by every page
    pub fn source(&self) -> Arc<dyn InventorySource> {
        self.source.clone()
    }

    pub fn navigate(&self, to: Route) {
        let from = self.route.get_untracked();
        if from == to {
            return;
        }
        self.history.update(|h| h.push(from));
        self.set_route.set(to);
    }

    /// Go to the previous page (home if there is none)
    pub fn back(&self) {
        let mut previous = None;
        self.history.update(|h| previous = h.pop());
        self.set_route.set(previous.unwrap_or(Route::Home));
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
