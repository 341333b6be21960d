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

use crate::error::{Error, Result};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

pub type Transaction = Vec<String>;

/// Loads transactions from `path`. Files ending in `.json` hold an array of
/// arrays of labels; any other file holds one comma separated transaction per
/// line. Empty transactions (`[]`, or a blank line) are kept in both formats,
/// since they count toward the total every support is divided by.
pub fn read_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    let transactions = if is_json {
        read_json(path)?
    } else {
        read_csv(path)?
    };
    debug!(
        path = %path.display(),
        transactions = transactions.len(),
        "read transactions"
    );
    Ok(transactions)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(BufReader::new(file))
}

fn read_json(path: &Path) -> Result<Vec<Transaction>> {
    serde_json::from_reader(open(path)?).map_err(|source| Error::Json {
        path: path.display().to_string(),
        source,
    })
}

fn read_csv(path: &Path) -> Result<Vec<Transaction>> {
    let mut transactions = vec![];
    for line in open(path)?.lines() {
        let line = line.map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        transactions.push(parse_line(&line));
    }
    Ok(transactions)
}

fn parse_line(line: &str) -> Transaction {
    line.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_line, read_transactions};
    use crate::error::Error;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_line() {
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("", vec![]),
            ("a", vec!["a"]),
            ("a,b", vec!["a", "b"]),
            (" a , b ,c ", vec!["a", "b", "c"]),
            ("a,,b,", vec!["a", "b"]),
        ];
        for (line, expected) in cases {
            assert_eq!(parse_line(line), expected);
        }
    }

    #[test]
    fn test_read_csv() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "apple,beer\n\nmilk, pear\n").unwrap();
        let transactions = read_transactions(file.path()).unwrap();
        assert_eq!(
            transactions,
            vec![vec!["apple", "beer"], vec![], vec!["milk", "pear"]]
        );
    }

    #[test]
    fn test_empty_transactions_count_in_both_formats() {
        let mut csv = Builder::new().suffix(".csv").tempfile().unwrap();
        write!(csv, "apple

apple,beer
").unwrap();
        let mut json = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"[["apple"],[],["apple","beer"]]"#).unwrap();
        assert_eq!(
            read_transactions(csv.path()).unwrap(),
            read_transactions(json.path()).unwrap()
        );
    }

    #[test]
    fn test_read_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[["apple","beer"],["肉"],[]]"#).unwrap();
        let transactions = read_transactions(file.path()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[1], vec!["肉"]);
        assert!(transactions[2].is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[["apple", 3]]"#).unwrap();
        match read_transactions(file.path()) {
            Err(Error::Json { .. }) => {}
            other => panic!("expected a json error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        match read_transactions("/nonexistent/transactions.csv") {
            Err(Error::Io { .. }) => {}
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
