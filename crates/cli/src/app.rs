// crates/cli/src/app.rs
use advcounter_engine::{FileOpener, collect_report};
use advcounter_shared_kernel::TextReport;

use crate::args::Args;
use crate::config::RunConfig;
use crate::error::Result;
use crate::logging;
use crate::settings::IniConfig;

/// Opens the input described by `config` and computes its report.
pub fn analyze(config: &RunConfig, opener: &dyn FileOpener) -> Result<TextReport> {
    let mut engine = config.driver.build(config.precision);
    let mut source = opener.open(&config.input, &config.encoding)?;

    let report = collect_report(engine.as_mut(), &mut source)?;
    log::info!(
        "{}: {} lines, {} words (driver={}, precision={})",
        config.input.display(),
        report.lines,
        report.words,
        engine.name(),
        engine.precision()
    );
    Ok(report)
}

/// Full invocation: configuration, logging, analysis.
pub fn run(args: Args, opener: &dyn FileOpener) -> Result<(RunConfig, TextReport)> {
    let provider = IniConfig::load(&args.config)?;
    let config = RunConfig::resolve(args, &provider)?;
    logging::init(&config.log_file, config.log_level)?;

    let report = analyze(&config, opener)?;
    Ok((config, report))
}
