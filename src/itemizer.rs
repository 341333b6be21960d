use crate::item::Item;
use fnv::FnvHashMap;

/// Maps item labels to codes. Codes are assigned in the order labels are
/// first seen, and that order is the canonical item order for the lifetime
/// of a trained model.
#[derive(Clone, Debug)]
pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }

    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        debug_assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }

    /// Like `id_of`, but never assigns a code to an unseen label.
    pub fn lookup(&self, item: &str) -> Option<Item> {
        self.item_str_to_id.get(item).cloned()
    }

    /// Label of an item this itemizer assigned. Code 0 is never assigned.
    pub fn str_of(&self, id: Item) -> &str {
        debug_assert!(id.as_index() > 0, "item code 0 has no label");
        &self.item_id_to_str[id.as_index() - 1]
    }

    pub fn len(&self) -> usize {
        self.item_id_to_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.item_id_to_str.is_empty()
    }

    /// Labels in canonical order.
    pub fn labels(&self) -> &[String] {
        &self.item_id_to_str
    }

    /// Every assigned item, in canonical order.
    pub fn items(&self) -> impl Iterator<Item = Item> {
        (1..=self.item_id_to_str.len() as u32).map(Item::with_id)
    }
}

impl Default for Itemizer {
    fn default() -> Itemizer {
        Itemizer::new()
    }
}

/// Assigns codes to every label, scanning transactions in order and items
/// left to right, and rewrites each transaction as a row of codes. Rows keep
/// the length and item order of their source transaction.
pub fn compress<T, S>(transactions: &[T]) -> (Itemizer, Vec<Vec<Item>>)
where
    T: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut itemizer = Itemizer::new();
    let matrix = transactions
        .iter()
        .map(|transaction| {
            transaction
                .as_ref()
                .iter()
                .map(|label| itemizer.id_of(label.as_ref()))
                .collect::<Vec<Item>>()
        })
        .collect();
    (itemizer, matrix)
}

#[cfg(test)]
mod tests {
    use super::{compress, Itemizer};
    use crate::item::Item;

    #[test]
    fn test_id_of_assigns_in_first_seen_order() {
        let mut itemizer = Itemizer::new();
        assert_eq!(itemizer.id_of("milk"), Item::with_id(1));
        assert_eq!(itemizer.id_of("bread"), Item::with_id(2));
        assert_eq!(itemizer.id_of("milk"), Item::with_id(1));
        assert_eq!(itemizer.str_of(Item::with_id(2)), "bread");
        assert_eq!(itemizer.lookup("jam"), None);
        assert_eq!(itemizer.len(), 2);
    }

    #[test]
    fn test_default_starts_at_one() {
        let mut itemizer = Itemizer::default();
        assert_eq!(itemizer.id_of("milk"), Item::with_id(1));
        assert_eq!(itemizer.str_of(Item::with_id(1)), "milk");
    }

    #[test]
    #[should_panic(expected = "item code 0 has no label")]
    #[cfg(debug_assertions)]
    fn test_str_of_code_zero() {
        let mut itemizer = Itemizer::new();
        itemizer.id_of("milk");
        itemizer.str_of(Item::with_id(0));
    }

    #[test]
    fn test_compress() {
        let transactions = vec![
            vec!["apple", "beer", "rice", "肉"],
            vec!["apple", "beer", "rice"],
            vec!["apple", "beer"],
            vec!["apple", "pear"],
            vec!["milk", "beer", "rice", "肉"],
            vec!["milk", "beer", "rice"],
            vec!["milk", "beer"],
            vec!["milk", "pear"],
        ];
        let (itemizer, matrix) = compress(&transactions);
        assert_eq!(itemizer.len(), 6);
        assert_eq!(
            itemizer.labels(),
            &["apple", "beer", "rice", "肉", "pear", "milk"]
        );
        assert_eq!(matrix.len(), transactions.len());
        for (row, transaction) in matrix.iter().zip(transactions.iter()) {
            assert_eq!(row.len(), transaction.len());
            for (&item, &label) in row.iter().zip(transaction.iter()) {
                assert_eq!(itemizer.str_of(item), label);
            }
        }
        let ids: Vec<u32> = matrix[4].iter().map(|i| i.id()).collect();
        assert_eq!(ids, vec![6, 2, 3, 4]);
    }

    #[test]
    fn test_compress_empty() {
        let transactions: Vec<Vec<String>> = vec![vec![], vec![]];
        let (itemizer, matrix) = compress(&transactions);
        assert!(itemizer.is_empty());
        assert_eq!(matrix, vec![Vec::<Item>::new(), vec![]]);
    }
}
