//! Learn a noisy synthetic function of the plane
//!
//! Samples are drawn from `exp(-2.5 r) cos(8 sqrt(r))` plus uniform noise, an
//! epsilon-SVR is fitted on them and its risk is estimated. The model is then
//! saved, loaded back and scored on freshly drawn samples.
//!
//! ```bash
//! $ cargo run --release --bin noisy-oracle -- 500
//! $ gnuplot -p prediction.plot
//! ```

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use linfa::ParamGuard;
use log::{error, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use svrkit::plot::write_plot_file;
use svrkit::{risk, PlanarEncoder, PlotGrid, Predictor, SvrLearner, SvrParams};
use svrkit_datasets::generate::Oracle;
use svrkit_demos::{init_logging, parse_args, report_risk, sample_count};

#[derive(Parser)]
#[command(version, about = "Fit an epsilon-SVR on samples of a noisy oracle")]
struct Cli {
    /// Number of samples to draw, at least 50 are used
    #[arg(value_name = "SAMPLE_COUNT", allow_negative_numbers = true)]
    sample_count: i64,
    /// Seed of the random generator, drawn from the OS if omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Half-width of the uniform noise added to the oracle
    #[arg(long, default_value_t = Oracle::DEFAULT_NOISE_LEVEL)]
    noise_level: f64,
    /// Directory receiving the plot scripts and the model
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Number of cross-validation folds
    #[arg(long, default_value_t = 10)]
    folds: usize,
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let nsamples = sample_count(cli.sample_count);
    if !cli.noise_level.is_finite() || cli.noise_level < 0.0 {
        return Err(format!("noise level must be non-negative, got {}", cli.noise_level).into());
    }

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let oracle = Oracle::new(cli.noise_level);
    let clean = Oracle::clean();

    let mut samples = oracle.samples(nsamples, &mut rng);

    let learner = SvrLearner::new(SvrParams::new().check()?);
    info!("learning...");
    let f = learner.fit(&samples)?;

    let grid = PlotGrid::unit();
    let out = &cli.output_dir;
    write_plot_file(out.join("clean-oracle.plot"), "Clean oracle", &grid, |p| {
        clean.observe(p, &mut rng)
    })?;
    write_plot_file(out.join("oracle.plot"), "Oracle", &grid, |p| {
        oracle.observe(p, &mut rng)
    })?;
    write_plot_file(out.join("prediction.plot"), "SVM prediction", &grid, |p| {
        f.predict(p)
    })?;

    println!();
    println!("There are {} support vectors.", f.nsupport());

    let empirical = risk::empirical(&f, &samples)?;
    report_risk("Empirical quadratic risk", empirical);

    let estimation = risk::cross_validation(&learner, &samples, cli.folds)?;
    report_risk("Real quadratic risk estimation", estimation.mean());
    println!("{:>34} : {}", "noise standard deviation", oracle.noise_std_dev());

    let model = out.join("f.pred");
    f.save(&model)?;
    let g = Predictor::load(&model, PlanarEncoder)?;

    samples = oracle.samples(nsamples, &mut rng);
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
