mod command_line_args;

use apriori::{generate_rules, read_transactions, train};
use command_line_args::{parse_args_or_exit, Arguments};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::process;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn mine_apriori(args: &Arguments) -> Result<(), Box<dyn Error>> {
    println!("Mining data set: {}", args.input_file_path);
    let start = Instant::now();

    let timer = Instant::now();
    let transactions = read_transactions(&args.input_file_path)?;
    println!(
        "Read {} transactions in {} seconds.",
        transactions.len(),
        timer.elapsed().as_secs()
    );

    let threshold = args.threshold(transactions.len());
    println!(
        "Mining itemsets occurring in at least {} transactions...",
        threshold.min_count.max(1)
    );
    let timer = Instant::now();
    let model = train(&transactions, threshold);
    println!(
        "Apriori generated {} frequent itemsets in {} seconds.",
        model.len(),
        timer.elapsed().as_secs()
    );

    println!("Generating rules...");
    let timer = Instant::now();
    let rules = generate_rules(
        &model,
        args.min_confidence,
        args.min_lift.unwrap_or(0.0),
    );
    println!(
        "Generated {} rules in {} seconds.",
        rules.len(),
        timer.elapsed().as_secs()
    );

    {
        let mut output = BufWriter::new(File::create(&args.output_rules_path)?);
        writeln!(output, "Antecedent=>Consequent,Confidence,Lift,Support")?;
        for rule in &rules {
            writeln!(
                output,
                "{},{},{},{}",
                rule.to_string(&model),
                rule.confidence,
                rule.lift,
                rule.support
            )?;
        }
        output.flush()?;
    }

    println!("Total runtime: {} seconds", start.elapsed().as_secs());

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let arguments = parse_args_or_exit();

    if let Err(err) = mine_apriori(&arguments) {
        println!("Error: {}", err);
        process::exit(1);
    }
}
