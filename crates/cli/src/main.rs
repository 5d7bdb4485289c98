use anyhow::{anyhow, bail, Result};
use clap::{Args, Parser, Subcommand};
use flightplan::api::{
    all_planners, draw_strike_pairs, hold_solutions, planner_by_name, planner_names, Airbase,
    FlightPlanner, MapBounds, Point, Theater,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{OutputFormat, PlanDto};
use provenance::Payload;

const DEFAULT_PLANNER: &str = "2.2.x rev 2";

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Strike flight-path planner")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Origin/target selection. Falls back to the demo theater (Anapa → Mozdok).
#[derive(Args, Clone)]
struct PairArgs {
    /// Scenario JSON: {"from": airbase, "to": airbase}
    #[arg(long, conflicts_with_all = ["from", "to"])]
    scenario: Option<PathBuf>,
    /// Origin airbase position in pixels, `x,y`
    #[arg(long, value_parser = io::parse_point, allow_hyphen_values = true)]
    from: Option<Point>,
    /// Target airbase position in pixels, `x,y`
    #[arg(long, value_parser = io::parse_point, allow_hyphen_values = true)]
    to: Option<Point>,
}

impl PairArgs {
    fn resolve(&self) -> Result<(Airbase, Airbase)> {
        if let Some(path) = &self.scenario {
            return io::load_scenario(path);
        }
        let (from, to) = Theater::default_strike();
        Ok((
            self.from.map_or(from, |p| from.moved_to(p)),
            self.to.map_or(to, |p| to.moved_to(p)),
        ))
    }
}

#[derive(Subcommand)]
enum Action {
    /// List planner names
    List,
    /// Plan one strike and print or write the waypoints
    Plan {
        #[arg(long, default_value = DEFAULT_PLANNER)]
        planner: String,
        #[command(flatten)]
        pair: PairArgs,
        /// Output file (.json, .csv or .parquet); a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run every planner on the same airbase pair
    Compare {
        #[command(flatten)]
        pair: PairArgs,
    },
    /// Plan every airbase pair of a csv (from_x, from_y, to_x, to_y)
    Batch {
        #[arg(long, default_value = DEFAULT_PLANNER)]
        planner: String,
        #[arg(long)]
        input: PathBuf,
        /// Output table (.csv or .parquet)
        #[arg(long)]
        out: PathBuf,
    },
    /// Classify hold-point solutions over random airbase pairs
    Sweep {
        #[arg(long, default_value_t = 1000)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Optional per-pair table (.csv or .parquet)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON on stdout stays pipeable.
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::List => list(),
        Action::Plan {
            planner,
            pair,
            out,
            json,
        } => plan(&planner, &pair, out.as_deref(), json, cmd.tag),
        Action::Compare { pair } => compare(&pair),
        Action::Batch {
            planner,
            input,
            out,
        } => batch(&planner, &input, &out, cmd.tag),
        Action::Sweep { count, seed, out } => sweep(count, seed, out.as_deref(), cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn lookup(name: &str) -> Result<Box<dyn FlightPlanner>> {
    planner_by_name(name).ok_or_else(|| {
        anyhow!(
            "unknown planner `{name}` (available: {})",
            planner_names().join(", ")
        )
    })
}

fn list() -> Result<()> {
    for name in planner_names() {
        println!("{name}");
    }
    Ok(())
}

fn plan(
    planner: &str,
    pair: &PairArgs,
    out: Option<&Path>,
    as_json: bool,
    tag: Option<String>,
) -> Result<()> {
    let planner = lookup(planner)?;
    let (from, to) = pair.resolve()?;
    tracing::info!(
        planner = planner.name(),
        from = %from.position,
        to = %to.position,
        tag = ?tag,
        "plan"
    );
    let flight_plan = planner.strike(&from, &to);
    let dto = PlanDto::new(planner.name(), &flight_plan);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        println!("{:>3}  {:<10} {:>10} {:>10}", "#", "kind", "x", "y");
        for wp in &dto.waypoints {
            println!("{:>3}  {:<10} {:>10.2} {:>10.2}", wp.index, wp.kind, wp.x, wp.y);
        }
        println!("length: {:.1} nm", dto.length_nm);
    }

    if let Some(out) = out {
        match OutputFormat::from_path(out)? {
            OutputFormat::Json => io::write_json(&dto, out)?,
            _ => io::write_table(&mut io::waypoint_frame([&flight_plan])?, out)?,
        }
        let payload = Payload::new(
            tag,
            json!({
                "from": io::PointDto::from(from.position),
                "to": io::PointDto::from(to.position),
            }),
        )
        .with_planners([planner.name()]);
        let sidecar = provenance::write_sidecar(out, payload)?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "written");
    }
    Ok(())
}

fn compare(pair: &PairArgs) -> Result<()> {
    let (from, to) = pair.resolve()?;
    tracing::info!(from = %from.position, to = %to.position, "compare");
    let plans: BTreeMap<&str, PlanDto> = all_planners()
        .iter()
        .map(|p| (p.name(), PlanDto::new(p.name(), &p.strike(&from, &to))))
        .collect();
    println!("{}", serde_json::to_string_pretty(&plans)?);
    Ok(())
}

fn batch(planner: &str, input: &Path, out: &Path, tag: Option<String>) -> Result<()> {
    let planner = lookup(planner)?;
    if OutputFormat::from_path(out)? == OutputFormat::Json {
        bail!("batch output must be .csv or .parquet");
    }
    let pairs = io::read_pairs(input)?;
    tracing::info!(
        planner = planner.name(),
        input = %input.display(),
        pairs = pairs.len(),
        "batch"
    );
    let plans: Vec<_> = pairs
        .iter()
        .map(|(from, to)| planner.strike(from, to))
        .collect();
    let mut df = io::waypoint_frame(&plans)?;
    io::write_table(&mut df, out)?;
    let payload = Payload::new(
        tag,
        json!({ "input": input.to_string_lossy(), "pairs": pairs.len() }),
    )
    .with_planners([planner.name()]);
    provenance::write_sidecar(out, payload)?;
    tracing::info!(rows = df.height(), out = %out.display(), "written");
    Ok(())
}

fn sweep(count: u64, seed: u64, out: Option<&Path>, tag: Option<String>) -> Result<()> {
    tracing::info!(count, seed, "sweep");
    let pairs = draw_strike_pairs(MapBounds::default(), seed, count);
    let mut tally: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let (mut planners, mut kinds, mut indices) = (Vec::new(), Vec::new(), Vec::new());
    for (index, (from, to)) in pairs.iter().enumerate() {
        for (name, solution) in hold_solutions(from, to) {
            *tally.entry((name, solution.as_str())).or_default() += 1;
            planners.push(name);
            kinds.push(solution.as_str());
            indices.push(index as u64);
        }
    }
    for ((planner, kind), n) in &tally {
        tracing::info!(planner, kind, n, "hold_solutions");
    }

    if let Some(out) = out {
        let mut df = polars::df!(
            "index" => indices,
            "planner" => planners,
            "hold" => kinds
        )?;
        io::write_table(&mut df, out)?;
        let payload = Payload::new(tag, json!({ "count": count, "seed": seed }))
            .with_planners(planner_names());
        provenance::write_sidecar(out, payload)?;
    }
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(tag, json!({})).with_planners(planner_names());
    println!("{}", serde_json::to_string_pretty(&payload.to_json())?);
    Ok(())
}
