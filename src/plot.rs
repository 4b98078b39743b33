//! Gnuplot scripts of scalar fields over the plane
//!
//! The script draws a surface from inline data: a header of `set` directives,
//! one block of `x y z` lines per scan-line with blank lines in between, and the
//! `e` marker closing the data.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::{Result, SvrError};
use crate::sample::Point;

/// Largest number of points accepted on each axis
pub const MAX_POINTS_PER_AXIS: usize = 10_000;

/// Regular grid, identical on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGrid {
    min: f64,
    step: f64,
    npoints: usize,
}

impl PlotGrid {
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || max < min {
            return Err(SvrError::InvalidPlotGrid(format!(
                "range [{}, {}] is empty",
                min, max
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(SvrError::InvalidPlotGrid(format!(
                "step should be positive, but is {}",
                step
            )));
        }

        let intervals = ((max - min) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_POINTS_PER_AXIS as f64 {
            return Err(SvrError::InvalidPlotGrid(format!(
                "step {} over [{}, {}] gives more than {} points per axis",
                step, min, max, MAX_POINTS_PER_AXIS
            )));
        }

        Ok(PlotGrid {
            min,
            step,
            npoints: intervals as usize + 1,
        })
    }

    /// The unit square `[-1, 1]` sampled every `0.04`
    pub fn unit() -> Self {
        PlotGrid {
            min: -1.0,
            step: 0.04,
            npoints: 51,
        }
    }

    /// Number of points on each axis, both bounds included
    pub fn npoints(&self) -> usize {
        self.npoints
    }

    pub fn coords(&self) -> impl Iterator<Item = f64> {
        let PlotGrid { min, step, .. } = *self;
        (0..self.npoints()).map(move |i| min + i as f64 * step)
    }
}

/// Write a gnuplot script of `field` evaluated over `grid`
pub fn write_plot<W, F>(mut writer: W, title: &str, grid: &PlotGrid, mut field: F) -> io::Result<()>
where
    W: Write,
    F: FnMut(&Point) -> f64,
{
    writeln!(writer, "set hidden3d")?;
    writeln!(writer, "set title \"{}\"", title.replace('"', "\\\""))?;
    writeln!(writer, "set view 41,45")?;
    writeln!(writer, "set xlabel \"x\"")?;
    writeln!(writer, "set ylabel \"y\"")?;
    writeln!(writer, "set zlabel \"z\"")?;
    writeln!(writer, "set ticslevel 0")?;
    writeln!(writer, "splot '-' using 1:2:3 with lines notitle")?;

    for (row, x) in grid.coords().enumerate() {
        if row > 0 {
            writeln!(writer)?;
        }
        for y in grid.coords() {
            let z = field(&Point::new(x, y));
            writeln!(writer, "{} {} {}", x, y, z)?;
        }
    }
    writeln!(writer, "e")?;

    writer.flush()
}

/// Create `path` and write the script of `field` into it
pub fn write_plot_file<P, F>(path: P, title: &str, grid: &PlotGrid, field: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&Point) -> f64,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    write_plot(BufWriter::new(file), title, grid, field)?;
    info!("gnuplot file \"{}\" generated", path.display());

    Ok(())
}
