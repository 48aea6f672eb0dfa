//! UI Components
//!
//! Pages, tables and the per-inventory tabs.

mod navbar;
mod inventories_table;
mod tag_cloud;
mod home_page;
mod my_inventories_page;
mod inventory_tabs;
mod items_tab;
mod fields_tab;
mod discussion_tab;
mod general_settings_tab;
mod numbering_tab;
mod access_tab;

pub use navbar::Navbar;
pub use inventories_table::{InventoriesTable, InventoryCell};
pub use tag_cloud::TagCloud;
pub use home_page::HomePage;
pub use my_inventories_page::MyInventoriesPage;
pub use inventory_tabs::InventoryTabs;
pub use items_tab::ItemsTab;
pub use fields_tab::FieldsTab;
pub use discussion_tab::DiscussionTab;
pub use general_settings_tab::GeneralSettingsTab;
pub use numbering_tab::NumberingTab;
pub use access_tab::AccessTab;
