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

use crate::candidate::Candidate;
use crate::item::Item;
use crate::threshold::Threshold;
use crossbeam::channel;
use tracing::trace;

/// Number of transactions that contain every item of `items`.
pub fn containment_count(items: &[Item], transactions: &[Vec<Item>]) -> u32 {
    transactions
        .iter()
        .filter(|row| items.iter().all(|item| row.contains(item)))
        .count() as u32
}

/// Counts every candidate of a level against the transactions, one task per
/// candidate, and returns the candidates that pass `threshold` with their
/// counts. Tasks only read the transactions and report through a channel;
/// the channel is drained once the scope has joined every task.
pub fn count_level(
    candidates: Vec<Candidate>,
    transactions: &[Vec<Item>],
    threshold: Threshold,
) -> Vec<(Candidate, u32)> {
    let (sender, receiver) = channel::unbounded();
    rayon::scope(|s| {
        for candidate in candidates {
            let sender = sender.clone();
            s.spawn(move |_| {
                let count = containment_count(candidate.items(), transactions);
                if threshold.passes(count) {
                    // The receiver outlives the scope, so this cannot fail.
                    let _ = sender.send((candidate, count));
                } else {
                    trace!(size = candidate.len(), count, "pruned candidate");
                }
            });
        }
    });
    drop(sender);
    let mut survivors: Vec<(Candidate, u32)> = receiver.into_iter().collect();
    // Task completion order is arbitrary.
    survivors.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    survivors
}
