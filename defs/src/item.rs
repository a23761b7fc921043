use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub value: String,
}

impl Item {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Item {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Items of a key value store, kept in insertion order and indexed by key.
///
/// The order and the index live in the same map, so a lookup can never see a key
/// that iteration does not, or the other way around. At most one item exists per
/// key: appending an item whose key is already present replaces the stored item
/// (the later one wins) while the key keeps the position of its first insertion.
#[derive(Clone, Debug, Default)]
pub struct ItemList {
    items: IndexMap<String, Item>,
}

impl ItemList {
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let mut list = ItemList::default();
        for item in items {
            list.append(item);
        }
        list
    }

    pub fn append(&mut self, item: Item) {
        self.items.insert(item.key.clone(), item);
    }

    pub fn get(&self, key: &str) -> Option<&Item> {
        self.items.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    pub fn to_vec(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// IndexMap equality ignores order, but two lists that render differently are not equal.
impl PartialEq for ItemList {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.iter().eq(other.iter())
    }
}

impl Eq for ItemList {}

impl FromIterator<Item> for ItemList {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        ItemList::new(iter)
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        ItemList::new(items)
    }
}

impl From<Option<Vec<Item>>> for ItemList {
    fn from(items: Option<Vec<Item>>) -> Self {
        ItemList::new(items.unwrap_or_default())
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a Item;
    type IntoIter = indexmap::map::Values<'a, String, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

impl Serialize for ItemList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.values())
    }
}
