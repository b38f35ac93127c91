use clap::Parser;
use ppfcalc_cli::args::Args;
use ppfcalc_cli::config::Config;
use ppfcalc_cli::{init_tracing, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let output = run(&args, &config)?;
    print!("{}", output);
    Ok(())
}
