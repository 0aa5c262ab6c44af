use structopt::StructOpt;

use flow_experiment::RunOptions;

#[derive(StructOpt, Debug, Clone, PartialEq)]
#[structopt(
    name = "simulate",
    about = "Run a flow simulation.",
    after_help = "Example: simulate ring --num_runs 3 --no_render"
)]
pub struct Flags {
    /// Name of the experiment configuration, e.g. `highway` or
    /// `non_rl.highway`.
    pub exp_config: String,

    /// Number of simulations to run.
    #[structopt(long = "num_runs", default_value = "1")]
    pub num_runs: usize,

    /// Run without rendering.
    #[structopt(long = "no_render")]
    pub no_render: bool,

    /// Run on Aimsun instead of SUMO.
    #[structopt(long = "aimsun")]
    pub aimsun: bool,

    /// Write emission output and the configuration JSON.
    #[structopt(long = "gen_emission")]
    pub gen_emission: bool,

    /// Connect to SUMO through libsumo.
    #[structopt(long = "libsumo")]
    pub libsumo: bool,

    /// Partition to store the output under on S3 (`default` when given
    /// without a value).  Implies `--gen_emission`.
    #[structopt(long = "to_aws")]
    pub to_aws: Option<Option<String>>,

    /// Queries the upload pipeline should run.  Defaults to `all`.
    #[structopt(long = "only_query")]
    pub only_query: Option<Vec<String>>,

    /// Mark this run as a baseline.
    #[structopt(long = "is_baseline")]
    pub is_baseline: bool,
}

impl Flags {
    /// Upload partition, if uploading was requested.
    pub fn to_aws(&self) -> Option<String> {
        self.to_aws
            .as_ref()
            .map(|name| name.clone().unwrap_or_else(|| "default".to_owned()))
    }

    pub fn gen_emission(&self) -> bool {
        self.gen_emission || self.to_aws.is_some()
    }

    pub fn only_query(&self) -> Vec<String> {
        match &self.only_query {
            Some(queries) if !queries.is_empty() => queries.clone(),
            _ => vec!["all".to_owned()],
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            convert_to_csv: self.gen_emission(),
            to_aws:         self.to_aws(),
            only_query:     self.only_query(),
            is_baseline:    self.is_baseline,
        }
    }
}
