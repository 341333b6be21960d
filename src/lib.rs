//! Frequent itemset mining with level-wise Apriori candidate generation.
//!
//! Transactions are lists of item labels. Training assigns each label a code
//! in first-seen order, then grows itemsets one item at a time, counting each
//! level's candidates in parallel and keeping those that meet the threshold.
//! The resulting `Model` answers support, confidence and lift queries for
//! labels given in any order.
//!
//! ```
//! use apriori::{train, Threshold};
//!
//! let transactions = vec![
//!     vec!["apple", "beer"],
//!     vec!["apple", "pear"],
//!     vec!["milk", "beer"],
//! ];
//! let model = train(&transactions, Threshold::default());
//! assert_eq!(model.support(&["beer", "apple"]), Some(1.0 / 3.0));
//! assert_eq!(model.confidence(&["apple"], &["beer"]), Some(0.5));
//! ```

pub mod candidate;
pub mod error;
pub mod item;
pub mod itemizer;
pub mod key;
pub mod model;
pub mod rule;
pub mod support_counter;
pub mod threshold;
pub mod transaction_reader;
mod vec_sets;

pub use error::{Error, Result};
pub use item::Item;
pub use itemizer::{compress, Itemizer};
pub use model::{or_not_found, train, Model, NOT_FOUND};
pub use rule::{generate_rules, Rule};
pub use threshold::Threshold;
pub use transaction_reader::read_transactions;
