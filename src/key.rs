use crate::item::Item;
use crate::itemizer::Itemizer;

/// Resolves a list of labels, in any order, to the canonical item sequence of
/// the itemset they name. Labels the catalog has never seen are skipped and
/// repeated labels collapse.
pub fn canonical_items<S: AsRef<str>>(itemizer: &Itemizer, labels: &[S]) -> Vec<Item> {
    let mut items: Vec<Item> = labels
        .iter()
        .filter_map(|label| itemizer.lookup(label.as_ref()))
        .collect();
    items.sort();
    items.dedup();
    items
}

/// Renders items as their space-separated labels, in the order given.
pub fn key_string(itemizer: &Itemizer, items: &[Item]) -> String {
    items
        .iter()
        .map(|&item| itemizer.str_of(item))
        .collect::<Vec<&str>>()
        .join(" ")
}

/// The canonical string key for a list of labels.
pub fn canonical_key<S: AsRef<str>>(itemizer: &Itemizer, labels: &[S]) -> String {
    key_string(itemizer, &canonical_items(itemizer, labels))
}
