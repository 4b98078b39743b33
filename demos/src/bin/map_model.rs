//! Learn a height map from a table of `z x y` samples
//!
//! The samples are loaded from a text file, optionally down-sampled, and an
//! epsilon-SVR is fitted on them. The model is saved, loaded back and scored
//! again on a second table, or on the training samples when none is given.
//!
//! ```bash
//! $ cargo run --release --bin map-model -- dataset_100 --downsample 50
//! $ gnuplot -p mapmodel.plot
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use linfa::ParamGuard;
use log::{error, info};
use svrkit::plot::write_plot_file;
use svrkit::{risk, PlanarEncoder, PlotGrid, Predictor, SvrLearner, SvrParams};
use svrkit_datasets::{load, LoaderParams};
use svrkit_demos::{init_logging, parse_args, report_risk};

#[derive(Parser)]
#[command(version, about = "Fit an epsilon-SVR on a table of z x y samples")]
struct Cli {
    /// Text file with one `z x y` sample per line
    #[arg(value_name = "DATA_FILE")]
    data_file: PathBuf,
    /// Keep only every STRIDE-th sample of the data file
    #[arg(long, value_name = "STRIDE")]
    downsample: Option<usize>,
    /// Where the down-sampled copy is written
    #[arg(long, value_name = "PATH", requires = "downsample")]
    side_file: Option<PathBuf>,
    /// Second table used to score the reloaded model
    #[arg(long, value_name = "PATH")]
    validation: Option<PathBuf>,
    /// Directory receiving the plot script and the model
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Number of cross-validation folds
    #[arg(long, default_value_t = 10)]
    folds: usize,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut params = LoaderParams::new();
    if let Some(stride) = cli.downsample {
        params = params.downsample(stride);
    }
    if let Some(side_file) = &cli.side_file {
        params = params.side_file(side_file);
    }

    let mut samples = load(&cli.data_file, &params)?;
    println!("There are {} samples", samples.len());

    let learner = SvrLearner::new(SvrParams::new().check()?);
    info!("learning...");
    let f = learner.fit(&samples)?;

    let grid = PlotGrid::new(-5.0, 5.0, 0.1)?;
    let out = &cli.output_dir;
    write_plot_file(out.join("mapmodel.plot"), "SVM model of the 3D map", &grid, |p| {
        f.predict(p)
    })?;

    println!();
    println!("There are {} support vectors.", f.nsupport());

    let empirical = risk::empirical(&f, &samples)?;
    report_risk("Empirical quadratic risk", empirical);

    let estimation = risk::cross_validation(&learner, &samples, cli.folds)?;
    report_risk("Real quadratic risk estimation", estimation.mean());

    let model = out.join("f.pred");
    f.save(&model)?;
    let g = Predictor::load(&model, PlanarEncoder)?;

    samples = match &cli.validation {
        Some(path) => load(path, &LoaderParams::new())?,
        None => {
            info!("no validation table given, scoring the training samples");
            samples
        }
    };
    let reloaded = risk::empirical(&g, &samples)?;
    report_risk("Empirical risk (loaded predictor)", reloaded);

    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = match parse_args::<Cli>() {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
