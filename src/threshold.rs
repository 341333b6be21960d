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

/// Minimum absolute count an itemset needs to be kept. Itemsets that never
/// occur are dropped whatever the threshold, so the default of zero keeps
/// everything seen at least once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Threshold {
    pub min_count: u32,
}

impl Threshold {
    pub fn new(min_count: u32) -> Threshold {
        Threshold { min_count }
    }

    /// Converts a relative support in [0,1] to the smallest count over
    /// `num_transactions` transactions whose support is at least `min_support`.
    pub fn from_support(min_support: f64, num_transactions: usize) -> Threshold {
        // Products like 0.29 * 100 land just below the integer they denote.
        let exact = min_support * num_transactions as f64;
        let min_count = (exact - 1e-9).ceil().max(0.0) as u32;
        Threshold { min_count }
    }

    pub fn passes(&self, count: u32) -> bool {
        count != 0 && count >= self.min_count
    }
}
