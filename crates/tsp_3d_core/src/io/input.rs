use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use tsp_3d_derive::KvDisplay;

use crate::{Error, Result, SolverOptions, Waypoint, constants::RECORD_FIELDS};

const STDIN_SOURCE: &str = "stdin";
const MEMORY_SOURCE: &str = "memory";

/// Waypoints loaded for one run, in input order.
#[derive(Clone, Debug, KvDisplay)]
pub struct SolverInput {
    pub(crate) source: String,
    #[kv(fmt = "len")]
    pub(crate) points: Vec<Waypoint>,
}

impl SolverInput {
    pub fn new(points: &[Waypoint]) -> Self {
        Self {
            source: MEMORY_SOURCE.to_string(),
            points: points.to_vec(),
        }
    }

    /// Reads waypoints from `--input`, or stdin for `-`.
    pub fn from_options(options: &SolverOptions) -> Result<Self> {
        let (source, text) = match options.input_path() {
            Some(path) => (path.display().to_string(), read_file(path)?),
            None => (STDIN_SOURCE.to_string(), read_stdin()?),
        };
        Ok(Self {
            source,
            points: parse_waypoints(&text),
        })
    }

    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    pub fn n(&self) -> usize {
        self.points.len()
    }

    pub fn get_point(&self, idx: usize) -> Waypoint {
        self.points[idx]
    }
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::unavailable("read", path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses `id x y z` records until the first token that does not parse.
///
/// Everything before that token is kept and a trailing partial record is
/// dropped. Non-finite coordinates count as unparsable.
pub(crate) fn parse_waypoints(input: &str) -> Vec<Waypoint> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut points = Vec::with_capacity(tokens.len() / RECORD_FIELDS);

    for (record_idx, record) in tokens.chunks(RECORD_FIELDS).enumerate() {
        match parse_record(record) {
            Ok(point) => points.push(point),
            Err(field) => {
                let token_idx = record_idx * RECORD_FIELDS + field;
                match record.get(field) {
                    Some(tok) => log::warn!(
                        "input: stopped at token {} ({tok:?}), kept {} waypoints",
                        token_idx + 1,
                        points.len()
                    ),
                    None => log::warn!(
                        "input: truncated record after token {token_idx}, kept {} waypoints",
                        points.len()
                    ),
                }
                break;
            }
        }
    }

    log::debug!("input: parsed {} waypoints", points.len());
    points
}

/// On failure returns the offset of the first bad field; an offset equal to
/// `record.len()` means the record is incomplete.
fn parse_record(record: &[&str]) -> std::result::Result<Waypoint, usize> {
    let id: i64 = field(record, 0)?;
    let x = coordinate(record, 1)?;
    let y = coordinate(record, 2)?;
    let z = coordinate(record, 3)?;
    Ok(Waypoint::new(id, x, y, z))
}

fn field<T: std::str::FromStr>(record: &[&str], idx: usize) -> std::result::Result<T, usize> {
    record
        .get(idx)
        .ok_or(record.len())?
        .parse()
        .map_err(|_| idx)
}

fn coordinate(record: &[&str], idx: usize) -> std::result::Result<f64, usize> {
    let value: f64 = field(record, idx)?;
    if value.is_finite() { Ok(value) } else { Err(idx) }
}
