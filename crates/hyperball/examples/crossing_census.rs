//! Exit-edge census for straight geodesic runs.
//!
//! Purpose
//! - Sweep start headings from the disk center, walk each ray until it
//!   crosses the boundary, and tally which edge it exits through and which
//!   it re-enters; a quick visual check that the gluing tables route every
//!   direction somewhere sensible.
//! - Also times the runs, as a ballpark for the per-tick engine cost.

use std::f64::consts::TAU;
use std::time::Instant;

use hyperball::prelude::*;

const HEADINGS: usize = 64;
const STEP: f64 = 0.03;
const MAX_TICKS: usize = 200;

fn main() {
    let (domain, gluing) = genus2_octagon().expect("octagon preset");
    let mut exits = vec![0usize; domain.sides()];
    let mut entries = vec![0usize; domain.sides()];
    let mut grazes = 0usize;

    let started = Instant::now();
    for k in 0..HEADINGS {
        let heading = TAU * k as f64 / HEADINGS as f64;
        let mut position = Point::origin();
        let mut direction = heading;
        let mut crossed = false;
        for _ in 0..MAX_TICKS {
            let step = advance(&domain, &gluing, position, direction, STEP);
            position = step.position;
            direction = step.direction;
            if let Some(crossing) = step.crossing {
                exits[crossing.exit.0] += 1;
                entries[crossing.entry.0] += 1;
                crossed = true;
                break;
            }
        }
        if !crossed {
            grazes += 1;
        }
    }
    let elapsed = started.elapsed().as_secs_f64() * 1e3;

    println!("headings={HEADINGS} step={STEP} max_ticks={MAX_TICKS}");
    println!("edge  exits  entries  pair  mirror");
    for e in 0..domain.sides() {
        println!(
            "{:>4}  {:>5}  {:>7}  {:>4}  {:>6}",
            e,
            exits[e],
            entries[e],
            gluing.pair(EdgeId(e)).0,
            gluing.mirror_for(EdgeId(e)),
        );
    }
    println!("rays without a crossing: {grazes}");
    println!("total time: {elapsed:.2} ms");
}
