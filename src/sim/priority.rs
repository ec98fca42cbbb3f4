//! Priority scheduling, both variants.
//!
//! Lower priority value = more urgent. The non-preemptive variant commits
//! to a full burst once dispatched; the preemptive variant re-scans the
//! whole eligible set every time unit. Both break priority ties by
//! earliest arrival, then declared order.
//!
//! A process tied on priority with the one currently running is allowed to
//! take the CPU if it arrived earlier; the running process gets no special
//! preference. Exact ties can therefore cost a context switch that a
//! production scheduler might avoid.

use crate::models::Process;

use super::cpu::{next_arrival, Cpu};

/// Non-preemptive: the chosen process runs to completion in one block,
/// even if a more urgent process arrives mid-burst.
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

/// Preemptive: one time unit per dispatch, re-selecting each unit.
pub(super) fn run_preemptive(procs: &mut [Process], cpu: &mut Cpu) {
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

/// Most urgent arrived, incomplete process: minimum priority value,
/// ties by earliest arrival, remaining ties by declared order.
fn select(procs: &[Process], now: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in procs.iter().enumerate() {
        if p.arrival_time > now || p.is_complete() {
            continue;
        }
        best = match best {
            None => Some(i),
            Some(j) => {
                let more_urgent = p.priority < procs[j].priority;
                let earlier_tie =
                    p.priority == procs[j].priority && p.arrival_time < procs[j].arrival_time;
                if more_urgent || earlier_tie {
                    Some(i)
                } else {
                    Some(j)
                }
            }
        };
    }
    best
}
