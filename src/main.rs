//! strct · demo driver
//!
//! Runs a set of samples through the text operations and prints one JSON
//! report per sample on stdout.
//!
//! Important env variables:
//!   STRCT_CONFIG_PATH : path to TOML config (samples + options); built-in seeds otherwise
//!   LOG_LEVEL         : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT        : "pretty" (default) or "json"

mod telemetry;

use std::process::ExitCode;

use tracing::{info, instrument};

use strct::config::{load_config_from_env, DriverConfig};
use strct::logic::run_sample;
use strct::seeds::seed_samples;
use strct::util::trunc_for_log;

#[instrument(level = "info", skip_all)]
fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
  telemetry::init_tracing();

  let cfg = load_config_from_env().unwrap_or_default();
  let samples = if cfg.samples.is_empty() {
    info!(target: "strct", "No samples configured; using built-in seeds");
    seed_samples()
  } else {
    cfg.samples.clone()
  };

  let failures = run_all(&cfg, &samples)?;
  info!(target: "strct", total = samples.len(), failures, "Done");

  if cfg.fail_on_error && failures > 0 {
    return Ok(ExitCode::FAILURE);
  }
  Ok(ExitCode::SUCCESS)
}

fn run_all(cfg: &DriverConfig, samples: &[strct::domain::Sample]) -> Result<usize, serde_json::Error> {
  let mut failures = 0;
  for sample in samples {
    info!(target: "strct", op = sample.op.name(), text = %trunc_for_log(&sample.text, cfg.max_log_len), "Running sample");
    let report = run_sample(sample);
    if report.error.is_some() {
      failures += 1;
    }
    println!("{}", serde_json::to_string(&report)?);
  }
  Ok(failures)
}
