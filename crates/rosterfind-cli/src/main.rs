//! rosterfind — CLI for the rosterfind-core ordered-probe search engine
//!
//! The roster behind the lookup form only answers one numeric key at a
//! time. This binary drives the core engine's binary search over the key
//! range, using Arabic collation to pick a direction after every probe.
//!
//! Usage examples
//! --------------
//!
//! - Find a person (first + father's name) with the default key bounds
//!   $ rosterfind --url https://roster.example/lookup find احمد علي
//!
//! - Restrict the key range and emit JSON
//!   $ rosterfind --url ... --low 45001 --high 45900 find احمد علي --json
//!
//! - Check the ordering assumption before trusting `find`
//!   $ rosterfind --url ... audit --samples 60
//!
//! - Operator helpers, no network involved
//!   $ rosterfind compare "احمد علي" "باسم عمر"
//!   $ rosterfind normalize "أَحمد عَلي الحسن"
//!
//! Logging is controlled with RUST_LOG (per-attempt progress at info,
//! key comparisons at debug).
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use rosterfind_core::{
    audit, name_key, normalize, Alphabet, Collator, HttpProbe, HttpProbeConfig, ResultReporter,
    SearchConfig, SearchEngine, SearchOutcome, SearchRequest, TextReporter,
};
use std::cmp::Ordering;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rosterfind=info,rosterfind_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let alphabet = Alphabet::arabic();

    match args.command {
        Commands::Find {
            first,
            last,
            results_dir,
            json,
            no_report,
            pause_ms,
            retries,
            timeout_secs,
        } => {
            let url = args.url.context("--url is required for find")?;

            let mut probe_config = HttpProbeConfig::new(url);
            probe_config.timeout = Duration::from_secs(timeout_secs);
            let mut probe = HttpProbe::new(probe_config)?;

            let request = SearchRequest::new(first, last).with_bounds(args.low, args.high);
            let engine = SearchEngine::new(alphabet).with_config(SearchConfig {
                probe_retries: retries,
                pause: Duration::from_millis(pause_ms),
            });

            let outcome = engine.run(&mut probe, &request)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                print_summary(&request, &outcome);
            }

            if !no_report {
                let reporter = TextReporter::new(&results_dir);
                let path = reporter.report(&request, &outcome)?;
                println!("Report written to {}", path.display());
            }
        }

        Commands::Audit { samples } => {
            let url = args.url.context("--url is required for audit")?;
            let mut probe = HttpProbe::new(HttpProbeConfig::new(url))?;

            let report = audit::scan(&mut probe, alphabet, args.low, args.high, samples)?;
            println!("Audit of keys {}-{}:", args.low, args.high);
            println!("  Probed: {}", report.probed);
            println!("  Records: {}", report.records);
            println!("  Empty slots: {}", report.empty);
            if report.is_monotonic() {
                println!("  Ordering: consistent — binary search is trustworthy here");
            } else {
                println!("  Ordering: {} inversion(s) found:", report.inversions.len());
                for inv in &report.inversions {
                    println!(
                        "    key {} ({}) comes after key {} ({})",
                        inv.key, inv.name, inv.prev_key, inv.prev_name
                    );
                }
                eprintln!("Binary search may skip records on this roster.");
            }
        }

        Commands::Compare { name1, name2 } => {
            let collator = Collator::new(alphabet);
            match collator.compare(&name1, &name2) {
                Ordering::Less => println!("{name1} sorts before {name2}"),
                Ordering::Greater => println!("{name1} sorts after {name2}"),
                Ordering::Equal => println!("{name1} and {name2} collate as equal"),
            }
        }

        Commands::Normalize { name } => {
            let canonical = normalize(&name);
            println!("Canonical: {canonical}");
            println!("Match key: {}", name_key(&canonical));
        }
    }

    Ok(())
}

fn print_summary(request: &SearchRequest, outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found(found) => {
            println!("FOUND after {} probe(s) in {:.1}s", found.attempts, found.elapsed.as_secs_f64());
            println!("  Full name: {}", found.full_name);
            println!("  Displayed ID: {}", found.display_key);
            println!("  Probed key: {}", found.probed_key);
        }
        SearchOutcome::Exhausted { attempts, elapsed } => {
            println!(
                "NOT FOUND: range {}-{} exhausted after {} probe(s) in {:.1}s",
                request.low,
                request.high,
                attempts,
                elapsed.as_secs_f64()
            );
            println!("Possible reasons:");
            println!("  - the name is spelled differently on the roster");
            println!("  - the record's key lies outside {}-{}", request.low, request.high);
            println!("  - the record does not exist");
        }
        SearchOutcome::Cancelled { attempts, elapsed } => {
            println!(
                "CANCELLED after {} probe(s) in {:.1}s",
                attempts,
                elapsed.as_secs_f64()
            );
        }
    }
}
