use env_logger::{Builder, Env};
use structopt::StructOpt;

use flow_configs::ExperimentCatalog;
use flow_core::ProjectPaths;
use flow_simulate::{Flags, Runner};

fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let flags = Flags::from_args();
    let runner = Runner::new(ExperimentCatalog::default(), ProjectPaths::from_env());
    let summary = runner.run(&flags)?;
    log::info!("{} finished {} run(s), {} steps", summary.exp_tag, summary.num_runs(), summary.total_steps);
    Ok(())
}
