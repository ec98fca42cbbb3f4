//! First-come-first-served.
//!
//! Non-preemptive: processes run to completion in arrival order, one
//! timeline block each. Equal arrivals keep their declared order: the
//! index sort is stable, so submission order is the tie-break.

use crate::models::Process;

use super::cpu::Cpu;

pub(super) fn run(procs: &mut [Process], cpu: &mut Cpu) {
    let mut order: Vec<usize> = (0..procs.len()).collect();
    order.sort_by_key(|&i| procs[i].arrival_time);

    for &i in &order {
        if procs[i].arrival_time > cpu.now() {
            cpu.idle_until(procs[i].arrival_time);
        }
        let burst = procs[i].burst_time;
        cpu.dispatch(&mut procs[i], burst);
        cpu.complete(&mut procs[i]);
    }
}
