use std::io::Read;
use std::process::ExitCode;

use clap::Parser;

use statline::input::parse_sample;
use statline::Summary;

/// Compute descriptive statistics from a comma-separated list of numbers.
#[derive(Parser, Debug)]
#[command(name = "statline", version, about)]
struct Args {
    /// Comma-separated numbers, e.g. "1, 2, 3, 4". Reads stdin when omitted.
    numbers: Option<String>,

    /// Emit the summary as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("statline: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, String> {
    let text = match &args.numbers {
        Some(numbers) => numbers.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {e}"))?;
            buf
        }
    };

    let sample = parse_sample(&text);
    let summary = Summary::compute(&sample).map_err(|e| e.to_string())?;

    if args.json {
        let mut json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("cannot serialize summary: {e}"))?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(summary.report())
    }
}
