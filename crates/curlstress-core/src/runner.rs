//! Cycle driver: probe every URL, in order, `cycles` times.
//!
//! Strictly sequential. Each outcome goes to the `Reporter` as soon as it is
//! produced and is not kept afterwards.

use crate::probe::{ProbeOutcome, Prober};

/// Receives driver events in order.
pub trait Reporter {
    /// A new pass over the URL list begins (0-based).
    fn cycle_started(&mut self, cycle: u64);
    /// Called right before the probe is issued.
    fn probe_started(&mut self, url: &str);
    fn probe_finished(&mut self, url: &str, outcome: &ProbeOutcome);
}

/// Runs `cycles` passes over `urls` and returns the number of probes issued.
///
/// One probe completes before the next begins; a failed probe never stops
/// the run.
pub fn run_cycles<P, R>(urls: &[String], cycles: u64, prober: &P, reporter: &mut R) -> u64
where
    P: Prober + ?Sized,
    R: Reporter + ?Sized,
{
    let mut issued = 0u64;
    for cycle in 0..cycles {
        tracing::info!(cycle, urls = urls.len(), "cycle started");
        reporter.cycle_started(cycle);
        for url in urls {
            reporter.probe_started(url);
            let outcome = prober.probe(url);
            reporter.probe_finished(url, &outcome);
            issued += 1;
        }
    }
    issued
}
