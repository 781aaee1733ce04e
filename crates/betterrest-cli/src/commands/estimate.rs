//! Bedtime estimate command.
//!
//! Flags left out fall back to the form defaults in the config file. A config
//! that fails to load is an estimation failure like any other.

use clap::Args;

use betterrest_core::{
    describe_result, BedtimeReport, CaffeineIntake, ClockStyle, Config, CoreError, SleepGoal,
    WakeTime, FALLBACK_MESSAGE,
};

#[derive(Args)]
pub struct EstimateArgs {
    /// Wake-up time (HH:MM)
    #[arg(long)]
    wake: Option<String>,
    /// Desired amount of sleep in hours (4-12)
    #[arg(long)]
    sleep: Option<f64>,
    /// Daily coffee intake in cups (0-20)
    #[arg(long)]
    coffee: Option<u32>,
    /// Clock style for the bedtime (24h or 12h)
    #[arg(long)]
    clock: Option<ClockStyle>,
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: EstimateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = Config::load()
        .map_err(CoreError::from)
        .and_then(|config| {
            let clock = args.clock.unwrap_or(config.display.clock);
            build_report(&args, &config).map(|report| (report, clock))
        });

    match outcome {
        Ok((report, clock)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", describe_result(Ok(report.bedtime), clock));
            }
            Ok(())
        }
        Err(e) => {
            println!("{FALLBACK_MESSAGE}");
            Err(e.into())
        }
    }
}

fn build_report(args: &EstimateArgs, config: &Config) -> Result<BedtimeReport, CoreError> {
    let wake: WakeTime = match &args.wake {
        Some(text) => text.parse()?,
        None => config.wake_time()?,
    };
    let sleep = match args.sleep {
        Some(hours) => SleepGoal::new(hours)?,
        None => config.sleep_goal()?,
    };
    let coffee = match args.coffee {
        Some(cups) => CaffeineIntake::new(cups)?,
        None => config.caffeine()?,
    };

    tracing::info!(wake = %wake, sleep = %sleep, coffee = %coffee, "estimating bedtime");

    let estimator = config.estimator()?;
    estimator.report(wake, sleep, coffee)
}
