//! Shortest job first, non-preemptive.
//!
//! At each decision point the eligible process with the minimum burst time
//! runs to completion. Ties break by earliest arrival, then declared order.

use crate::models::Process;

use super::cpu::{next_arrival, Cpu};

pub(super) fn run(procs: &mut [Process], cpu: &mut Cpu) {
    let total = procs.len();
    let mut completed = 0;

    while completed < total {
        match select(procs, cpu.now()) {
            Some(i) => {
                let burst = procs[i].burst_time;
                cpu.dispatch(&mut procs[i], burst);
                cpu.complete(&mut procs[i]);
                completed += 1;
            }
            None => match next_arrival(procs) {
                Some(t) => cpu.idle_until(t),
                None => break,
            },
        }
    }
}

/// Minimum burst among arrived, incomplete processes. Only a strictly
/// shorter burst (or an equal burst with a strictly earlier arrival)
/// displaces the current pick, so the first declared index wins full ties.
fn select(procs: &[Process], now: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in procs.iter().enumerate() {
        if p.arrival_time > now || p.is_complete() {
            continue;
        }
        best = match best {
            None => Some(i),
            Some(j) => {
                let shorter = p.burst_time < procs[j].burst_time;
                let earlier_tie =
                    p.burst_time == procs[j].burst_time && p.arrival_time < procs[j].arrival_time;
                if shorter || earlier_tie {
                    Some(i)
                } else {
                    Some(j)
                }
            }
        };
    }
    best
}
