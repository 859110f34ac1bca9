//! Plain-text rendering of simulation results.
//!
//! Used by the command-line front end: a KPI table for comparisons and an
//! ASCII chart of the head path, one row per head stop.

use std::fmt;

use crate::dispatching::Comparison;
use crate::metrics::SeekKpi;
use crate::models::{Cylinder, SeekResult};

/// Chart width in character cells (excluding the label column).
pub const DEFAULT_CHART_WIDTH: usize = 60;

const SERVICED: char = '*';
const WAYPOINT: char = '+';
const START: char = 'o';

/// Summary line plus head-movement chart for one result.
pub struct ResultReport<'a> {
    pub result: &'a SeekResult,
    pub head: Cylinder,
    pub disk_size: u32,
    pub width: usize,
}

/// KPI table for every algorithm in a comparison.
pub struct ComparisonReport<'a> {
    pub comparison: &'a Comparison,
    pub head: Cylinder,
}

impl<'a> ResultReport<'a> {
    pub fn new(result: &'a SeekResult, head: Cylinder, disk_size: u32) -> Self {
        Self {
            result,
            head,
            disk_size,
            width: DEFAULT_CHART_WIDTH,
        }
    }

    /// Column of `cylinder` in a chart `width` cells wide.
    fn column(&self, cylinder: Cylinder) -> usize {
        let last = self.disk_size.saturating_sub(1).max(1) as u64;
        let cells = self.width.max(1) as u64 - 1;
        (u64::from(cylinder) * cells / last) as usize
    }

    fn row(&self, f: &mut fmt::Formatter<'_>, cylinder: Cylinder, marker: char) -> fmt::Result {
        let col = self.column(cylinder);
        writeln!(f, "{cylinder:>6} |{}{marker}", " ".repeat(col))
    }
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(
            f,
            "{}: total seek {} cylinders, average {:.2} over {} requests",
            r.algorithm(),
            r.total_seek_time(),
            r.average_seek_time(),
            r.request_count()
        )?;
        writeln!(f, "order: {}", join(r.seek_sequence()))?;
        writeln!(f)?;

        self.row(f, self.head, START)?;
        let mut serviced = r.seek_sequence().iter().peekable();
        for &stop in r.head_path() {
            // Waypoints never coincide with the next serviced request.
            let marker = if serviced.peek() == Some(&&stop) {
                serviced.next();
                SERVICED
            } else {
                WAYPOINT
            };
            self.row(f, stop, marker)?;
        }
        writeln!(
            f,
            "       {START} start   {SERVICED} serviced   {WAYPOINT} edge/wrap"
        )
    }
}

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8} {:>8} {:>9} {:>8} {:>9}  order",
            "ALGO", "TOTAL", "AVERAGE", "MAX", "REVERSALS"
        )?;
        for r in self.comparison.iter() {
            let kpi = SeekKpi::calculate(self.head, r);
            writeln!(
                f,
                "{:<8} {:>8} {:>9.2} {:>8} {:>9}  {}",
                r.algorithm().name(),
                kpi.total_seek_time,
                kpi.average_seek_time,
                kpi.max_seek,
                kpi.reversals,
                join(r.seek_sequence())
            )?;
        }
        if let Some(best) = self.comparison.best() {
            writeln!(
                f,
                "\nlowest total seek: {} ({})",
                best.algorithm(),
                best.total_seek_time()
            )?;
        }
        Ok(())
    }
}

fn join(cylinders: &[Cylinder]) -> String {
    cylinders
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
