use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::{Error, Result, Tour, Waypoint};

/// How the tour cost is rendered.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CostFormat {
    /// Shortest representation that parses back to the same `f64`.
    #[default]
    Shortest,
    /// Fixed number of decimals.
    Fixed(usize),
}

impl CostFormat {
    pub fn from_decimals(decimals: Option<usize>) -> Self {
        decimals.map_or(Self::Shortest, Self::Fixed)
    }

    fn write(self, f: &mut fmt::Formatter<'_>, cost: f64) -> fmt::Result {
        match self {
            Self::Shortest => f.write_str(ryu::Buffer::new().format(cost)),
            Self::Fixed(decimals) => write!(f, "{cost:.decimals$}"),
        }
    }
}

/// One output line: the external ids in tour order, the first id again to
/// close the cycle, then the cost.
#[derive(Clone, Copy, Debug)]
pub struct TourOutput<'a> {
    points: &'a [Waypoint],
    tour: &'a Tour,
    cost_format: CostFormat,
}

impl<'a> TourOutput<'a> {
    pub fn new(points: &'a [Waypoint], tour: &'a Tour, cost_format: CostFormat) -> Self {
        Self {
            points,
            tour,
            cost_format,
        }
    }
}

impl fmt::Display for TourOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &node in self.tour.order() {
            write!(f, "{} ", self.points[node].id)?;
        }
        if let Some(first) = self.tour.first() {
            write!(f, "{} ", self.points[first].id)?;
        }
        self.cost_format.write(f, self.tour.cost())
    }
}

/// Writes `line` plus a newline to `path`, or stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, line: &impl fmt::Display) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::unavailable("create", path, e))?;
            let mut out = BufWriter::new(file);
            writeln!(out, "{line}")
                .and_then(|()| out.flush())
                .map_err(|e| Error::unavailable("write", path, e))?;
            log::debug!("output: wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{line}")?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::{CostFormat, TourOutput, write_output};
    use crate::{Error, Tour, Waypoint};

    fn points() -> Vec<Waypoint> {
        vec![
            Waypoint::new(7, 0.0, 0.0, 0.0),
            Waypoint::new(3, 3.0, 0.0, 0.0),
            Waypoint::new(11, 3.0, 4.0, 0.0),
        ]
    }

    #[test]
    fn line_repeats_first_id_and_ends_with_cost() {
        let points = points();
        let tour = Tour::new(vec![1, 2, 0], 12.0);
        let line = TourOutput::new(&points, &tour, CostFormat::Shortest).to_string();
        assert_eq!(line, "3 11 7 3 12.0");
    }

    #[test]
    fn fixed_format_rounds_cost() {
        let points = points();
        let tour = Tour::new(vec![0, 1, 2], 12.3456);
        let line = TourOutput::new(&points, &tour, CostFormat::Fixed(2)).to_string();
        assert_eq!(line, "7 3 11 7 12.35");
    }

    #[test]
    fn single_point_closes_onto_itself() {
        let points = points();
        let tour = Tour::trivial(1);
        let line = TourOutput::new(&points[..1], &tour, CostFormat::Shortest).to_string();
        assert_eq!(line, "7 7 0.0");
    }

    #[test]
    fn empty_tour_writes_only_the_cost() {
        let tour = Tour::trivial(0);
        let line = TourOutput::new(&[], &tour, CostFormat::Fixed(0)).to_string();
        assert_eq!(line, "0");
    }

    #[test]
    fn empty_tour_uses_the_default_cost_format() {
        let tour = Tour::trivial(0);
        let line = TourOutput::new(&[], &tour, CostFormat::from_decimals(None)).to_string();
        assert_eq!(line, "0.0");
    }

    #[test]
    fn from_decimals_maps_none_to_shortest() {
        assert_eq!(CostFormat::from_decimals(None), CostFormat::Shortest);
        assert_eq!(CostFormat::from_decimals(Some(4)), CostFormat::Fixed(4));
    }

    #[test]
    fn write_output_creates_file_with_trailing_newline() {
        let dir = env::temp_dir().join(format!("tsp-3d-output-{}", process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("path.txt");

        write_output(Some(path.as_path()), &"1 2 1 4.0").expect("write output");
        assert_eq!(
            fs::read_to_string(&path).expect("read back"),
            "1 2 1 4.0\n"
        );

        fs::remove_dir_all(&dir).expect("cleanup temp dir");
    }

    #[test]
    fn write_output_reports_unwritable_sink() {
        let path = env::temp_dir()
            .join(format!("tsp-3d-missing-{}", process::id()))
            .join("nested")
            .join("path.txt");

        let err = write_output(Some(path.as_path()), &"x").expect_err("missing dir should fail");
        assert!(matches!(err, Error::Unavailable { action: "create", .. }));
    }
}
