//! Styled console output: headings and one line per probe.

use colored::Colorize;
use curlstress_core::probe::ProbeOutcome;
use curlstress_core::report;
use curlstress_core::runner::Reporter;
use std::io::{self, Write};

pub fn h1(text: &str) {
    println!("{}", text.yellow().bold().underline());
}

pub fn h2(text: &str) {
    println!("{}", text.yellow().bold());
}

/// Outcome text styled green (success) or white on red (failure).
pub fn styled_outcome(outcome: &ProbeOutcome) -> String {
    let text = report::describe(outcome);
    if outcome.is_success() {
        text.green().to_string()
    } else {
        text.white().on_red().to_string()
    }
}

/// `Reporter` printing `## Iteration i` per cycle and `- <url> - <outcome>` per probe.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn cycle_started(&mut self, cycle: u64) {
        h2(&format!("## Iteration {}", cycle));
    }

    fn probe_started(&mut self, url: &str) {
        print!("- {} - ", url);
        let _ = io::stdout().flush();
    }

    fn probe_finished(&mut self, _url: &str, outcome: &ProbeOutcome) {
        println!("{}", styled_outcome(outcome));
    }
}
