//! Visokos - Leap Year Checker
//!
//! Проверка високосных лет через сервер или командную строку

// coverage_attribute включается только при установленном cfg coverage_nightly
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use visokos::adapter::config::Config;
use visokos::driver::{Args, YearCheckWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = YearCheckWorkflow::new(config);

    workflow.execute(args).await
}
