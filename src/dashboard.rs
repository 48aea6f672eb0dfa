//! Dashboard Derivations
//!
//! Tag cloud, latest and most popular lists for the home page.

use std::collections::HashMap;

use crate::models::{Inventory, TagCount};

/// Count tags across inventories, most used first (ties keep first-seen order)
pub fn compute_tag_cloud(list: &[Inventory]) -> Vec<TagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();
    for tag in list.iter().flat_map(|inv| inv.tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push(TagCount { tag: tag.clone(), count: 1 });
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Newest `n` inventories by creation time
pub fn latest(list: &[Inventory], n: usize) -> Vec<Inventory> {
    let mut out = list.to_vec();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out.truncate(n);
    out
}

/// `n` inventories with the most items
pub fn top_popular(list: &[Inventory], n: usize) -> Vec<Inventory> {
    let mut out = list.to_vec();
    out.sort_by(|a, b| b.item_count().cmp(&a.item_count()));
    out.truncate(n);
    out
}

/// Inventories carrying `tag`
pub fn with_tag(list: &[Inventory], tag: &str) -> Vec<Inventory> {
    list.iter()
        .filter(|inv| inv.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}
