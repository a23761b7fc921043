use kvs_defs::{ItemAddition, ItemChange, ItemList, ItemListDiff, ItemRemoval};

/// Compares the items currently in a store (`before`) with the desired items (`after`).
///
/// Keys only in `after` are additions and keys in both with different values are
/// changes. Keys only in `before` are removals when `include_deletes` is set and are
/// left out of the result otherwise. Values are compared as exact strings. An absent
/// list is treated as empty.
pub fn diff_items(
    before: Option<&ItemList>,
    after: Option<&ItemList>,
    include_deletes: bool,
) -> ItemListDiff {
    let empty = ItemList::default();
    let before = before.unwrap_or(&empty);
    let after = after.unwrap_or(&empty);

    let mut diff = ItemListDiff::default();

    for b in before {
        match after.get(&b.key) {
            None => {
                if include_deletes {
                    diff.removals.push(ItemRemoval {
                        key: b.key.clone(),
                        value: b.value.clone(),
                    });
                }
            }
            Some(a) if a.value != b.value => {
                diff.changes.push(ItemChange {
                    key: b.key.clone(),
                    old_value: b.value.clone(),
                    new_value: a.value.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for a in after {
        if !before.contains_key(&a.key) {
            diff.additions.push(ItemAddition {
                key: a.key.clone(),
                value: a.value.clone(),
            });
        }
    }

    diff
}
