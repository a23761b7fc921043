use serde::{Deserialize, Serialize};

use crate::Item;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemAddition {
    pub key: String,
    pub value: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemChange {
    pub key: String,
    pub old_value: String,
    pub new_value: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemRemoval {
    pub key: String,
    pub value: String,
}

/// Changes that turn the items currently in a store into the desired items.
///
/// A key appears in at most one of the three lists. Additions follow the order of
/// the desired items, changes and removals the order of the current items.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemListDiff {
    #[serde(rename = "added")]
    pub additions: Vec<ItemAddition>,
    #[serde(rename = "updated")]
    pub changes: Vec<ItemChange>,
    #[serde(rename = "deleted")]
    pub removals: Vec<ItemRemoval>,
}

impl ItemListDiff {
    /// Items to write in one upsert batch: additions first, then changes with their new values.
    pub fn put_list(&self) -> Vec<Item> {
        self.additions
            .iter()
            .map(|a| Item::new(&a.key, &a.value))
            .chain(self.changes.iter().map(|c| Item::new(&c.key, &c.new_value)))
            .collect()
    }

    pub fn delete_list(&self) -> Vec<String> {
        self.removals.iter().map(|r| r.key.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.changes.is_empty() && self.removals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ItemListDiff {
        ItemListDiff {
            additions: vec![
                ItemAddition {
                    key: "key1".to_string(),
                    value: "value1".to_string(),
                },
                ItemAddition {
                    key: "key2".to_string(),
                    value: "value2".to_string(),
                },
            ],
            changes: vec![ItemChange {
                key: "key3".to_string(),
                old_value: "value3".to_string(),
                new_value: "v3".to_string(),
            }],
            removals: vec![ItemRemoval {
                key: "key4".to_string(),
                value: "value4".to_string(),
            }],
        }
    }

    #[test]
    fn test_put_list() {
        let diff = sample();

        assert_eq!(
            diff.put_list(),
            vec![
                Item::new("key1", "value1"),
                Item::new("key2", "value2"),
                Item::new("key3", "v3"),
            ]
        );
        assert_eq!(
            diff.put_list().len(),
            diff.additions.len() + diff.changes.len()
        );
    }

    #[test]
    fn test_delete_list() {
        assert_eq!(sample().delete_list(), vec!["key4".to_string()]);
    }

    #[test]
    fn test_empty_diff_lists_are_empty() {
        let diff = ItemListDiff::default();

        assert!(diff.is_empty());
        assert_eq!(diff.put_list(), Vec::<Item>::new());
        assert_eq!(diff.delete_list(), Vec::<String>::new());
    }

    #[test]
    fn test_serialized_section_names() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["added"][0]["key"], "key1");
        assert_eq!(json["updated"][0]["old_value"], "value3");
        assert_eq!(json["deleted"][0]["key"], "key4");
    }
}
