//! Shortest remaining time first, preemptive.
//!
//! The choice is re-evaluated every time unit against live remaining
//! times. Ties have no secondary rule: the first declared index holding
//! the minimum wins, which keeps repeated runs identical.

use crate::models::Process;

use super::cpu::{next_arrival, Cpu};

pub(super) fn run(procs: &mut [Process], cpu: &mut Cpu) {
    let total = procs.len();
    let mut completed = 0;

    while completed < total {
        match select(procs, cpu.now()) {
            Some(i) => {
                cpu.dispatch(&mut procs[i], 1);
                if procs[i].remaining_time == 0 {
                    cpu.complete(&mut procs[i]);
                    completed += 1;
                }
            }
            None => match next_arrival(procs) {
                Some(t) => cpu.idle_until(t),
                None => break,
            },
        }
    }
}

/// First arrived, incomplete process with the minimum remaining time.
fn select(procs: &[Process], now: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in procs.iter().enumerate() {
        if p.arrival_time > now || p.is_complete() {
            continue;
        }
        match best {
            Some(j) if procs[j].remaining_time <= p.remaining_time => {}
            _ => best = Some(i),
        }
    }
    best
}
