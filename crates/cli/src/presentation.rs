// crates/cli/src/presentation.rs
use advcounter_shared_kernel::TextReport;

use crate::error::Result;
use crate::options::OutputFormat;

/// Shortest round-trip form, always with a decimal part (`4.0`, `3.67`).
pub fn format_average(value: f64) -> String {
    format!("{value:?}")
}

pub fn render(report: &TextReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
    }
}

/// Placeholder printed when the document holds no letters.
const NO_LETTERS: &str = "None";

fn render_text(report: &TextReport) -> String {
    let letters = report
        .most_common_display()
        .unwrap_or_else(|| NO_LETTERS.to_string());

    format!(
        "number of lines {}\n\
         number of words {}\n\
         most common letter {letters}\n\
         average letter per word {}\n",
        report.lines,
        report.words,
        format_average(report.avg_letters_per_word)
    )
}

pub fn print_report(report: &TextReport, format: OutputFormat) -> Result<()> {
    print!("{}", render(report, format)?);
    Ok(())
}
