//! List Filtering & Sorting
//!
//! Search box + sort key + direction over an in-memory collection.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Inventory, Item};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "desc" => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A comparable value pulled out of a record for one sort key
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    Time(DateTime<Utc>),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Number(_) => 0,
            SortValue::Text(_) => 1,
            SortValue::Time(_) => 2,
        }
    }

    /// Total order: values of different kinds order by kind
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Records that can be shown through a [`ListView`]
pub trait Listable: Serialize + Clone {
    type Key: Copy + PartialEq;

    /// `None` sorts after every present value when ascending (first when descending)
    fn sort_value(&self, key: Self::Key) -> Option<SortValue>;
}

/// Compare two records by key in ascending order.
///
/// Missing values tie with each other and sort after present ones.
pub fn compare_by<T: Listable>(a: &T, b: &T, key: T::Key) -> Ordering {
    match (a.sort_value(key), b.sort_value(key)) {
        (Some(x), Some(y)) => x.compare(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Query, sort key and direction for one table
#[derive(Clone)]
pub struct ListView<T: Listable> {
    query: String,
    keys: Vec<T::Key>,
    sort_key: Option<T::Key>,
    direction: SortDirection,
    selector: Option<fn(&T) -> String>,
}

impl<T: Listable> ListView<T> {
    /// Sort key starts at the first declared key
    pub fn new(keys: Vec<T::Key>) -> Self {
        let sort_key = keys.first().copied();
        Self {
            query: String::new(),
            keys,
            sort_key,
            direction: SortDirection::Asc,
            selector: None,
        }
    }

    /// Text the query is matched against (defaults to the JSON form)
    pub fn with_selector(mut self, selector: fn(&T) -> String) -> Self {
        self.selector = Some(selector);
        self
    }

    /// Keep rows in input order until a key is chosen
    pub fn unsorted(mut self) -> Self {
        self.sort_key = None;
        self
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn sort_key(&self) -> Option<T::Key> {
        self.sort_key
    }

    /// Keys not declared for this view are ignored
    pub fn set_sort_key(&mut self, key: T::Key) {
        if self.keys.contains(&key) {
            self.sort_key = Some(key);
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
    }

    pub fn matches(&self, row: &T) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = match self.selector {
            Some(select) => select(row),
            None => serde_json::to_string(row).unwrap_or_default(),
        };
        haystack.to_lowercase().contains(&needle)
    }

    /// Filtered and sorted copy of `rows`; equal keys keep their input order
    pub fn apply(&self, rows: &[T]) -> Vec<T> {
        let mut out: Vec<T> = rows.iter().filter(|row| self.matches(row)).cloned().collect();
        if let Some(key) = self.sort_key {
            out.sort_by(|a, b| {
                let ord = compare_by(a, b, key);
                match self.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        out
    }
}

// ========================
// Keys for the app's tables
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventorySortKey {
    Updated,
    Name,
    Items,
}

impl InventorySortKey {
    pub const ALL: [InventorySortKey; 3] = [
        InventorySortKey::Updated,
        InventorySortKey::Name,
        InventorySortKey::Items,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InventorySortKey::Updated => "updatedAt",
            InventorySortKey::Name => "name",
            InventorySortKey::Items => "itemCount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InventorySortKey::Updated => "Sort: Updated",
            InventorySortKey::Name => "Sort: Name",
            InventorySortKey::Items => "Sort: Items",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl Listable for Inventory {
    type Key = InventorySortKey;

    fn sort_value(&self, key: InventorySortKey) -> Option<SortValue> {
        match key {
            InventorySortKey::Updated => self.updated_at.map(SortValue::Time),
            InventorySortKey::Name => Some(SortValue::Text(self.name.clone())),
            InventorySortKey::Items => Some(SortValue::Number(self.item_count() as f64)),
        }
    }
}

/// Search text for the "My inventories" table
pub fn inventory_search_text(inv: &Inventory) -> String {
    format!("{} {} {}", inv.name, inv.code, inv.description.as_deref().unwrap_or(""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSortKey {
    Created,
    Number,
}

impl Listable for Item {
    type Key = ItemSortKey;

    fn sort_value(&self, key: ItemSortKey) -> Option<SortValue> {
        match key {
            ItemSortKey::Created => Some(SortValue::Time(self.created_at)),
            ItemSortKey::Number => Some(SortValue::Text(self.inv_number.clone())),
        }
    }
}

/// Search text for the items tab: number plus the raw data payload
pub fn item_search_text(item: &Item) -> String {
    format!(
        "{} {}",
        item.inv_number,
        serde_json::to_string(&item.data).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Row {
        id: u32,
        name: String,
        score: Option<f64>,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum RowKey {
        Score,
        Name,
    }

    impl Listable for Row {
        type Key = RowKey;

        fn sort_value(&self, key: RowKey) -> Option<SortValue> {
            match key {
                RowKey::Score => self.score.map(SortValue::Number),
                RowKey::Name => Some(SortValue::Text(self.name.clone())),
            }
        }
    }

    fn row(id: u32, name: &str, score: Option<f64>) -> Row {
        Row { id, name: name.to_string(), score }
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, "Monitors", Some(2.0)),
            row(2, "cameras", Some(1.0)),
            row(3, "Laptops", Some(2.0)),
            row(4, "Books", None),
        ]
    }

    #[test]
    fn test_default_key_is_first_declared() {
        let view = ListView::<Row>::new(vec![RowKey::Name, RowKey::Score]);
        assert_eq!(view.sort_key(), Some(RowKey::Name));
        assert_eq!(view.direction(), SortDirection::Asc);
    }

    #[test]
    fn test_empty_query_keeps_ties_in_order() {
        let view = ListView::<Row>::new(vec![RowKey::Score]);
        // 1 and 3 tie on 2.0; the missing score goes last
        let out = view.apply(&sample());
        assert_eq!(out.len(), 4);
        assert_eq!(ids(&out), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_descending_reverses_without_breaking_stability() {
        let view = ListView::<Row>::new(vec![RowKey::Score]).with_direction(SortDirection::Desc);
        assert_eq!(ids(&view.apply(&sample())), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let view = ListView::<Row>::new(vec![RowKey::Name]);
        assert_eq!(ids(&view.apply(&sample())), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_query_matches_serialized_row() {
        let mut view = ListView::<Row>::new(vec![RowKey::Name]);
        view.set_query("  LAPTOP ");
        assert_eq!(ids(&view.apply(&sample())), vec![3]);
    }

    #[test]
    fn test_query_with_selector() {
        let mut view = ListView::<Row>::new(vec![RowKey::Name]).with_selector(|r| r.name.clone());
        view.set_query("id");
        assert!(view.apply(&sample()).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let mut view = ListView::<Row>::new(vec![RowKey::Name]);
        view.set_query("zzz-nothing");
        assert_eq!(view.apply(&sample()), Vec::<Row>::new());
    }

    #[test]
    fn test_undeclared_key_ignored() {
        let mut view = ListView::<Row>::new(vec![RowKey::Name]);
        view.set_sort_key(RowKey::Score);
        assert_eq!(view.sort_key(), Some(RowKey::Name));
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let mut view = ListView::<Row>::new(vec![RowKey::Name]).unsorted();
        assert_eq!(view.sort_key(), None);
        assert_eq!(ids(&view.apply(&sample())), vec![1, 2, 3, 4]);
        view.set_sort_key(RowKey::Name);
        assert_eq!(ids(&view.apply(&sample())), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_direction_round_trip_strings() {
        assert_eq!(SortDirection::from_str("desc"), SortDirection::Desc);
        assert_eq!(SortDirection::from_str("anything"), SortDirection::Asc);
        assert_eq!(SortDirection::Desc.toggle(), SortDirection::Asc);
        assert_eq!(InventorySortKey::from_str("itemCount"), Some(InventorySortKey::Items));
    }

    #[test]
    fn test_item_search_text_covers_data() {
        let item: Item = serde_json::from_str(
            r#"{"id":"i1","inventoryId":"1","invNumber":"LAP-2025-00001","data":{"brand":"Lenovo"},"createdAt":"2025-08-21T09:00:00Z"}"#,
        )
        .unwrap();
        let mut view = ListView::<Item>::new(vec![ItemSortKey::Created]).with_selector(item_search_text);
        view.set_query("lenovo");
        assert_eq!(view.apply(&[item.clone()]).len(), 1);
        view.set_query("lap-2025");
        assert_eq!(view.apply(&[item]).len(), 1);
    }
}
