//! Scenario input and plan output: JSON documents and polars tables.

use anyhow::{bail, Context, Result};
use flightplan::api::{Airbase, FlightPlan, Point};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct PointDto {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for PointDto {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<PointDto> for Point {
    fn from(p: PointDto) -> Self {
        Point::new(p.x, p.y)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct AirbaseDto {
    pub position: PointDto,
    #[serde(default)]
    pub friendly: bool,
}

impl From<AirbaseDto> for Airbase {
    fn from(a: AirbaseDto) -> Self {
        Airbase::new(a.position.into(), a.friendly)
    }
}

/// `{"from": airbase, "to": airbase}`
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ScenarioDto {
    pub from: AirbaseDto,
    pub to: AirbaseDto,
}

#[derive(Clone, Debug, Serialize)]
pub struct WaypointDto {
    pub index: usize,
    pub kind: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct PlanDto {
    pub planner: &'static str,
    pub length_nm: f64,
    pub waypoints: Vec<WaypointDto>,
}

impl PlanDto {
    pub fn new(planner: &'static str, plan: &FlightPlan) -> Self {
        let waypoints = plan
            .iter()
            .enumerate()
            .map(|(index, (kind, p))| WaypointDto {
                index,
                kind: kind.as_str(),
                x: p.x,
                y: p.y,
            })
            .collect();
        Self {
            planner,
            length_nm: plan.length_nm(),
            waypoints,
        }
    }
}

pub fn load_scenario(path: &Path) -> Result<(Airbase, Airbase)> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: ScenarioDto = serde_json::from_slice(&raw)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok((doc.from.into(), doc.to.into()))
}

/// Parse `x,y` pixel coordinates.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate `{v}`: {e}"))
    };
    let p = Point::new(parse(x)?, parse(y)?);
    if !p.is_finite() {
        return Err(format!("coordinates must be finite, got `{s}`"));
    }
    Ok(p)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Csv,
    Parquet,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            Some("parquet") => Ok(Self::Parquet),
            other => bail!(
                "unsupported output extension {:?} for {} (json, csv, parquet)",
                other,
                path.display()
            ),
        }
    }
}

/// One row per waypoint: `row, index, kind, x, y`. `row` numbers the plans.
pub fn waypoint_frame<'a, I>(plans: I) -> PolarsResult<DataFrame>
where
    I: IntoIterator<Item = &'a FlightPlan>,
{
    let (mut rows, mut idx, mut kinds, mut xs, mut ys) =
        (Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new());
    for (row, plan) in plans.into_iter().enumerate() {
        for (i, (kind, p)) in plan.iter().enumerate() {
            rows.push(row as u32);
            idx.push(i as u32);
            kinds.push(kind.as_str());
            xs.push(p.x);
            ys.push(p.y);
        }
    }
    polars::df!(
        "row" => rows,
        "index" => idx,
        "kind" => kinds,
        "x" => xs,
        "y" => ys
    )
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Write a table as csv or parquet, picked by extension.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let format = OutputFormat::from_path(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        OutputFormat::Csv => {
            CsvWriter::new(&mut file).finish(df)?;
        }
        OutputFormat::Parquet => {
            ParquetWriter::new(file).finish(df)?;
        }
        OutputFormat::Json => bail!("tables are written as csv or parquet, not json"),
    }
    Ok(())
}

pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}

/// Read airbase pairs from a csv with columns `from_x, from_y, to_x, to_y` (pixels).
pub fn read_pairs(path: &Path) -> Result<Vec<(Airbase, Airbase)>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("from_x").cast(DataType::Float64),
            col("from_y").cast(DataType::Float64),
            col("to_x").cast(DataType::Float64),
            col("to_y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading pairs from {}", path.display()))?;

    let column = |name: &str| -> Result<Vec<f64>> {
        df.column(name)?
            .f64()?
            .into_iter()
            .enumerate()
            .map(|(i, v)| v.with_context(|| format!("row {i}: missing {name}")))
            .collect()
    };
    let (fx, fy, tx, ty) = (
        column("from_x")?,
        column("from_y")?,
        column("to_x")?,
        column("to_y")?,
    );
    Ok((0..df.height())
        .map(|i| {
            (
                Airbase::friendly(Point::new(fx[i], fy[i])),
                Airbase::hostile(Point::new(tx[i], ty[i])),
            )
        })
        .collect())
}
