use advcounter_cli::args::Args;
use advcounter_cli::{app, presentation};
use advcounter_engine::FsOpener;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // 4つの統計値がすべて揃ってから出力する
    let outcome = app::run(args, &FsOpener)
        .and_then(|(config, report)| presentation::print_report(&report, config.format));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
