use std::path::PathBuf;

use chrono::Utc;
use clap::{ArgGroup, Parser, Subcommand};

mod bmi;
mod data;
mod models;
mod portion;
mod report;

use models::{BmiSubject, DogAssessment};

#[derive(Parser)]
#[command(name = "kennel-feeding-audit")]
#[command(about = "Feeding portion audit for kennel dog records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess every dog and print the full portion audit
    #[command(group(
        ArgGroup::new("source")
            .args(["csv", "json"])
            .multiple(false)
    ))]
    Audit {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Report whether one owner's dog eats too much or too little
    #[command(group(
        ArgGroup::new("source")
            .args(["csv", "json"])
            .multiple(false)
    ))]
    Lookup {
        #[arg(long)]
        owner: String,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Write a markdown feeding report
    #[command(group(
        ArgGroup::new("source")
            .args(["csv", "json"])
            .multiple(false)
    ))]
    Report {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Write the audit summary as JSON
    #[command(group(
        ArgGroup::new("source")
            .args(["csv", "json"])
            .multiple(false)
    ))]
    Export {
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
        #[arg(long, default_value = "audit.json")]
        out: PathBuf,
    },
    /// Compare two subjects given as NAME:MASS_KG:HEIGHT_M
    Bmi {
        #[arg(value_parser = bmi::parse_subject)]
        first: BmiSubject,
        #[arg(value_parser = bmi::parse_subject)]
        second: BmiSubject,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Audit { csv, json } => {
            let records = data::load_records(csv.as_deref(), json.as_deref())?;
            let assessed = portion::assess_dogs(records)?;

            if assessed.is_empty() {
                println!("No dog records to assess.");
                return Ok(());
            }

            print_audit(&assessed);
        }
        Commands::Lookup { owner, csv, json } => {
            let records = data::load_records(csv.as_deref(), json.as_deref())?;
            let assessed = portion::assess_dogs(records)?;

            match portion::find_by_owner(&assessed, &owner) {
                Some(dog) => println!(
                    "{owner}'s dog is eating {}",
                    dog.verdict().description()
                ),
                None => println!("No dog found for owner {owner}."),
            }
        }
        Commands::Report { csv, json, out } => {
            let source = source_label(csv.as_deref(), json.as_deref());
            let records = data::load_records(csv.as_deref(), json.as_deref())?;
            let assessed = portion::assess_dogs(records)?;
            let report = report::build_report(&source, Utc::now().date_naive(), &assessed);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { csv, json, out } => {
            let records = data::load_records(csv.as_deref(), json.as_deref())?;
            let assessed = portion::assess_dogs(records)?;
            let summary = portion::summarize(&assessed);
            let payload = serde_json::to_string_pretty(&summary)?;
            std::fs::write(&out, payload)?;
            println!("Audit summary written to {}.", out.display());
        }
        Commands::Bmi { first, second } => {
            println!("{}", bmi::compare(&first, &second)?);
        }
    }

    Ok(())
}

fn source_label(csv: Option<&std::path::Path>, json: Option<&std::path::Path>) -> String {
    csv.or(json)
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "sample data".to_string())
}

fn print_audit(assessed: &[DogAssessment]) {
    println!("Assessed portions:");
    for dog in assessed {
        println!(
            "- {}: {} kg, eating {} g of a recommended {} g ({})",
            dog.owners.join(", "),
            dog.weight_kg,
            dog.current_food,
            dog.recommended_food,
            dog.verdict().description()
        );
    }

    let groups = portion::owners_by_verdict(assessed);
    if groups.eat_too_much.is_empty() {
        println!("No dogs eat too much.");
    } else {
        println!("{}'s dogs eat too much!", groups.eat_too_much.join(" and "));
    }
    if groups.eat_too_little.is_empty() {
        println!("No dogs eat too little.");
    } else {
        println!(
            "{}'s dogs eat too little!",
            groups.eat_too_little.join(" and ")
        );
    }

    println!(
        "Any dog eating exactly the recommended portion: {}",
        portion::any_exact_portion(assessed)
    );
    println!(
        "Any dog eating an okay amount: {}",
        portion::any_okay_portion(assessed)
    );

    let okay = portion::okay_portion_dogs(assessed);
    if okay.is_empty() {
        println!("No dogs are eating an okay amount.");
    } else {
        println!("Dogs eating an okay amount:");
        for dog in okay.iter() {
            println!(
                "- {}: {} g against a recommended {} g",
                dog.owners.join(", "),
                dog.current_food,
                dog.recommended_food
            );
        }
    }

    println!("Dogs by recommended portion (ascending):");
    for dog in portion::sorted_by_recommended(assessed) {
        println!(
            "- {}: {} g recommended",
            dog.owners.join(", "),
            dog.recommended_food
        );
    }
}
