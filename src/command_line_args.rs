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

use std::env;
use std::io;
use std::process;

use apriori::{Error, Result, Threshold};
use argparse::{ArgumentParser, Store, StoreOption};

pub struct Arguments {
    pub input_file_path: String,
    pub output_rules_path: String,
    pub min_count: Option<u32>,
    pub min_support: Option<f64>,
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
}

impl Arguments {
    fn empty() -> Arguments {
        Arguments {
            input_file_path: String::new(),
            output_rules_path: String::new(),
            min_count: None,
            min_support: None,
            min_confidence: 0.0,
            min_lift: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_count.is_some() && self.min_support.is_some() {
            return Err(Error::InvalidArgument(
                "pass at most one of --min-count and --min-support".to_owned(),
            ));
        }
        if let Some(min_support) = self.min_support {
            if !(0.0..=1.0).contains(&min_support) {
                return Err(Error::InvalidArgument(
                    "minimum itemset support must be in range [0,1]".to_owned(),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(Error::InvalidArgument(
                "minimum rule confidence must be in range [0,1]".to_owned(),
            ));
        }
        if let Some(min_lift) = self.min_lift {
            if min_lift < 0.0 {
                return Err(Error::InvalidArgument(
                    "minimum rule lift must be non-negative".to_owned(),
                ));
            }
        }
        Ok(())
    }

    /// The training threshold once the number of transactions is known.
    pub fn threshold(&self, num_transactions: usize) -> Threshold {
        match (self.min_count, self.min_support) {
            (Some(min_count), _) => Threshold::new(min_count),
            (None, Some(min_support)) => Threshold::from_support(min_support, num_transactions),
            (None, None) => Threshold::default(),
        }
    }
}

pub fn parse_args_or_exit() -> Arguments {
    let mut args = Arguments::empty();

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Parallel Apriori frequent itemset and rule miner.");

        parser
            .refer(&mut args.input_file_path)
            .add_option(
                &["--input"],
                Store,
                "Input transactions: a JSON array of arrays of labels (.json), \
                 or one comma separated transaction per line.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.output_rules_path)
            .add_option(
                &["--output"],
                Store,
                "File path in which to store output rules. \
                 Format: antecedent => consequent, confidence, lift, support.",
            )
            .metavar("file_path")
            .required();

        parser
            .refer(&mut args.min_count)
            .add_option(
                &["--min-count"],
                StoreOption,
                "Minimum number of transactions an itemset must appear in.",
            )
            .metavar("count");

        parser
            .refer(&mut args.min_support)
            .add_option(
                &["--min-support"],
                StoreOption,
                "Minimum itemset support threshold, in range [0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.min_confidence)
            .add_option(
                &["--min-confidence"],
                Store,
                "Minimum rule confidence threshold, in range [0,1].",
            )
            .metavar("threshold");

        parser
            .refer(&mut args.min_lift)
            .add_option(
                &["--min-lift"],
                StoreOption,
                "Minimum rule lift, computed from raw counts.",
            )
            .metavar("threshold");

        if env::args().count() == 1 {
            let _ = parser.print_help("Usage:", &mut io::stderr());
            process::exit(1);
        }

        if let Err(code) = parser.parse_args() {
            process::exit(code);
        }
    }

    if let Err(err) = args.validate() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    args
}

#[cfg(test)]
mod tests {
    use super::Arguments;
    use apriori::Threshold;

    #[test]
    fn test_validate() {
        let mut args = Arguments::empty();
        assert!(args.validate().is_ok());
        args.min_confidence = 1.5;
        assert!(args.validate().is_err());
        args.min_confidence = 0.5;
        args.min_support = Some(0.2);
        assert!(args.validate().is_ok());
        args.min_count = Some(3);
        assert!(args.validate().is_err());
        args.min_support = None;
        args.min_lift = Some(-1.0);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_threshold() {
        let mut args = Arguments::empty();
        assert_eq!(args.threshold(10), Threshold::default());
        args.min_support = Some(0.5);
        assert_eq!(args.threshold(10), Threshold::new(5));
        args.min_support = None;
        args.min_count = Some(2);
        assert_eq!(args.threshold(10), Threshold::new(2));
    }
}
