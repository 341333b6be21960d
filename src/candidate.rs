// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::vec_sets::union;
use itertools::Itertools;

/// An itemset waiting to be counted. Items are held in canonical order, so
/// two candidates over the same set of items compare equal.
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Candidate {
    items: Vec<Item>,
}

impl Candidate {
    pub fn singleton(item: Item) -> Candidate {
        Candidate { items: vec![item] }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    // Extends this itemset by one item not already a member.
    fn extend(&self, item: Item) -> Candidate {
        debug_assert!(!self.contains(item));
        Candidate {
            items: union(&self.items, &[item]),
        }
    }
}

/// The first level: one singleton candidate per item in the catalog.
pub fn seed(itemizer: &Itemizer) -> Vec<Candidate> {
    itemizer.items().map(Candidate::singleton).collect()
}

/// Builds the next level by extending every survivor with every singleton it
/// does not already contain. Growth orders that reach the same set of items
/// yield a single candidate; the first one generated is kept.
pub fn grow(singletons: &[Item], survivors: &[Candidate]) -> Vec<Candidate> {
    survivors
        .iter()
        .flat_map(|survivor| {
            singletons
                .iter()
                .filter(move |&&item| !survivor.contains(item))
                .map(move |&item| survivor.extend(item))
        })
        .unique()
        .collect()
}
