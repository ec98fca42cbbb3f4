//! Round robin.
//!
//! A FIFO ready queue with a fixed quantum. Each process enters the queue
//! exactly once, at the first instant its arrival time is reached; a
//! `visited` marker guards against re-admission. Arrivals that land during
//! a slice are enqueued before the preempted process re-enters, so a
//! process exhausting its quantum lines up behind everything that arrived
//! while it ran.

use std::collections::VecDeque;

use crate::models::Process;

use super::cpu::Cpu;

pub(super) fn run(procs: &mut [Process], quantum: i64, cpu: &mut Cpu) {
    let total = procs.len();
    let mut completed = 0;
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut visited = vec![false; procs.len()];

    enqueue_arrivals(procs, cpu.now(), cpu, &mut queue, &mut visited);

    while completed < total {
        let Some(i) = queue.pop_front() else {
            // Queue drained with work left: jump to the next arrival.
            let next = (0..procs.len())
                .filter(|&i| !visited[i])
                .map(|i| procs[i].arrival_time)
                .min();
            match next {
                Some(t) => {
                    cpu.idle_until(t);
                    enqueue_arrivals(procs, t, cpu, &mut queue, &mut visited);
                }
                None => break,
            }
            continue;
        };

        let slice = quantum.min(procs[i].remaining_time);
        cpu.dispatch(&mut procs[i], slice);

        // Arrival scan runs before any requeueing decision.
        enqueue_arrivals(procs, cpu.now(), cpu, &mut queue, &mut visited);

        if procs[i].remaining_time == 0 {
            cpu.complete(&mut procs[i]);
            completed += 1;
        } else {
            cpu.log(format!("{} quantum expired, requeued", procs[i].id));
            queue.push_back(i);
        }
    }
}

/// Admits every unvisited process with `arrival_time <= up_to`, in
/// ascending arrival order (declared order breaks ties, since the sort
/// is stable over index order).
fn enqueue_arrivals(
    procs: &[Process],
    up_to: i64,
    cpu: &mut Cpu,
    queue: &mut VecDeque<usize>,
    visited: &mut [bool],
) {
    let mut arrivals: Vec<usize> = (0..procs.len())
        .filter(|&i| !visited[i] && procs[i].arrival_time <= up_to)
        .collect();
    arrivals.sort_by_key(|&i| procs[i].arrival_time);

    for i in arrivals {
        visited[i] = true;
        queue.push_back(i);
        cpu.log_at(
            procs[i].arrival_time,
            format!("{} entered the ready queue", procs[i].id),
        );
    }
}
