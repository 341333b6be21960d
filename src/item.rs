/// An item code. Codes are handed out by the `Itemizer` starting at 1 in
/// first-seen order, so ordering items by code gives the canonical order.
#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
}
