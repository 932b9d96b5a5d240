use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use hyperball::prelude::*;
use hyperball::sim::rand::{ReplayToken, TurnCfg, TurnSampler};

mod report;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Headless driver for the hyperball surface walker")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Surface {
    Octagon,
    Hexagon,
}

#[derive(Subcommand)]
enum Action {
    /// Tick a preset surface and write the trajectory as JSON
    Run {
        #[arg(long, value_enum, default_value = "octagon")]
        surface: Surface,
        #[arg(long, default_value_t = 200)]
        ticks: usize,
        /// Turn script, e.g. "L@12,R@40" (quarter turns before those ticks)
        #[arg(long)]
        turns: Option<String>,
        #[arg(long)]
        out: String,
    },
    /// Seeded random-turn soak run; checks invariants, tallies crossings
    Soak {
        #[arg(long, value_enum, default_value = "octagon")]
        surface: Surface,
        #[arg(long, default_value_t = 10_000)]
        ticks: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 0.02)]
        turn_prob: f64,
    },
    /// Validate gluing tables (preset or explicit) and print the pairing
    Validate {
        #[arg(long, value_enum, default_value = "octagon")]
        surface: Surface,
        /// Comma-separated pair table overriding the preset
        #[arg(long)]
        pair: Option<String>,
        /// Comma-separated mirror table overriding the preset
        #[arg(long)]
        mirror: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run {
            surface,
            ticks,
            turns,
            out,
        } => run(surface, ticks, turns, out),
        Action::Soak {
            surface,
            ticks,
            seed,
            turn_prob,
        } => soak(surface, ticks, seed, turn_prob),
        Action::Validate {
            surface,
            pair,
            mirror,
        } => validate(surface, pair, mirror),
    }
}

fn build_sim(surface: Surface) -> Result<Simulation> {
    let sim = match surface {
        Surface::Octagon => Simulation::octagon(),
        Surface::Hexagon => Simulation::hexagon(),
    }?;
    Ok(sim)
}

#[derive(Serialize)]
struct CrossingRecord {
    exit: usize,
    entry: usize,
}

#[derive(Serialize)]
struct TickRecord {
    tick: usize,
    x: f64,
    y: f64,
    direction: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    crossing: Option<CrossingRecord>,
}

fn run(surface: Surface, ticks: usize, turns: Option<String>, out: String) -> Result<()> {
    tracing::info!(?surface, ticks, out, "run");
    let sim = build_sim(surface)?;
    let script = turns.as_deref().map(parse_turns).transpose()?.unwrap_or_default();

    let mut ball = sim.initialize();
    let mut trajectory: Vec<TickRecord> = Vec::with_capacity(ticks);
    let mut crossings = 0usize;
    for tick in 0..ticks {
        for &(at, turn) in &script {
            if at == tick {
                sim.turn(&mut ball, turn);
            }
        }
        let step = sim.tick(&mut ball);
        if step.crossing.is_some() {
            crossings += 1;
        }
        trajectory.push(TickRecord {
            tick,
            x: step.position.x(),
            y: step.position.y(),
            direction: step.direction,
            crossing: step.crossing.map(|c| CrossingRecord {
                exit: c.exit.0,
                entry: c.entry.0,
            }),
        });
    }

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&trajectory)?)?;
    report::write_summary(
        out_path,
        json!({
            "surface": format!("{surface:?}"),
            "ticks": ticks,
            "scripted_turns": script.len(),
            "crossings": crossings,
            "final_trail_len": ball.trail().len(),
        }),
    )?;
    tracing::info!(crossings, "run_complete");
    Ok(())
}

fn soak(surface: Surface, ticks: usize, seed: u64, turn_prob: f64) -> Result<()> {
    tracing::info!(?surface, ticks, seed, turn_prob, "soak");
    let sim = build_sim(surface)?;
    let radius = sim.domain().cfg().radius;
    let mut ball = sim.initialize();
    let mut sampler = TurnSampler::new(TurnCfg { turn_prob }, ReplayToken::new(seed, 0));

    let mut census = vec![0usize; sim.domain().sides()];
    let mut turns_taken = 0usize;
    for tick in 0..ticks {
        if let Some(t) = sampler.draw() {
            sim.turn(&mut ball, t);
            turns_taken += 1;
        }
        let step = sim.tick(&mut ball);
        if let Some(c) = step.crossing {
            census[c.exit.0] += 1;
        }
        let r = ball.head().hyperbolic_radius();
        if r >= radius + 1e-6 {
            bail!("tick {tick}: head escaped the polygon (hyperbolic radius {r})");
        }
    }
    let expected_len = sim.cfg().start_len;
    if ball.trail().len() != expected_len {
        bail!(
            "trail length drifted without growth: {} (expected {expected_len})",
            ball.trail().len()
        );
    }
    tracing::info!(turns_taken, "soak_complete");

    println!("exit-edge crossings over {ticks} ticks (seed {seed}):");
    for (e, count) in census.iter().enumerate() {
        println!("{e:>4}  {count}");
    }
    println!("total: {}", census.iter().sum::<usize>());
    Ok(())
}

fn validate(surface: Surface, pair: Option<String>, mirror: Option<String>) -> Result<()> {
    let (domain, preset) = match surface {
        Surface::Octagon => genus2_octagon(),
        Surface::Hexagon => hexagon_quotient(),
    }?;
    let gluing = match (pair, mirror) {
        (None, None) => preset,
        (Some(p), Some(m)) => Gluing::new(parse_table(&p)?, parse_table(&m)?)
            .context("gluing tables rejected")?,
        _ => bail!("--pair and --mirror must be given together"),
    };
    if gluing.sides() != domain.sides() {
        bail!(
            "gluing covers {} edges but the {surface:?} domain has {}",
            gluing.sides(),
            domain.sides()
        );
    }

    println!(
        "{surface:?}: {} sides, circumradius {}",
        domain.sides(),
        domain.cfg().radius
    );
    println!("edge  pair  mirror  mirror_angle");
    for e in 0..domain.sides() {
        let m = gluing.mirror_for(EdgeId(e));
        println!(
            "{:>4}  {:>4}  {:>6}  {:>12.6}",
            e,
            gluing.pair(EdgeId(e)).0,
            m,
            domain.mirror_angle(m)
        );
    }
    Ok(())
}

/// Parse "L@12,R@40" into (tick, turn) pairs.
fn parse_turns(script: &str) -> Result<Vec<(usize, Turn)>> {
    script
        .split(',')
        .map(|item| {
            let item = item.trim();
            let (side, at) = item
                .split_once('@')
                .with_context(|| format!("turn {item:?} is not of the form L@tick"))?;
            let turn = match side {
                "L" | "l" => Turn::Left,
                "R" | "r" => Turn::Right,
                other => bail!("unknown turn side {other:?} (expected L or R)"),
            };
            let tick: usize = at
                .parse()
                .with_context(|| format!("bad tick number {at:?} in {item:?}"))?;
            Ok((tick, turn))
        })
        .collect()
}

/// Parse a comma-separated index table.
fn parse_table(table: &str) -> Result<Vec<usize>> {
    table
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<usize>()
                .with_context(|| format!("bad edge index {item:?}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_turns_accepts_mixed_case_and_spaces() {
        let script = parse_turns("L@12, r@40").unwrap();
        assert_eq!(script, vec![(12, Turn::Left), (40, Turn::Right)]);
        assert!(parse_turns("U@3").is_err());
        assert!(parse_turns("L12").is_err());
    }

    #[test]
    fn parse_table_roundtrips_preset() {
        assert_eq!(
            parse_table("6,7,4,5, 2,3,0,1").unwrap(),
            vec![6, 7, 4, 5, 2, 3, 0, 1]
        );
        assert!(parse_table("1,x").is_err());
    }
}
