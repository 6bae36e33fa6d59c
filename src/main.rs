use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{
    env, fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use japanese_numerals::{
    report::{write_report, ConversionRecord, ReportFormat},
    to_number_from_value,
    utility::{
        encoding::decode,
        input::{parse_json_values, split_lines},
    },
    ConvertOptions, VERSION,
};

enum Input {
    Args(Vec<String>),
    File(PathBuf),
    Stdin,
}

struct Args {
    input: Input,
    encoding: String,
    json: bool,
    options: ConvertOptions,
    format: ReportFormat,
    progress: bool,
}

fn usage(opts: &getopts::Options) -> String {
    let brief = format!(
        "japanese-numerals {}\nUsage: japanese-numerals [options] [NUMERAL...]",
        VERSION
    );
    opts.usage(&brief)
}

// None なら usage を表示して終わる
fn get_args(args: &[String]) -> Result<Option<Args>> {
    let mut opts = getopts::Options::new();
    opts.optopt("f", "file", "read numerals from FILE, one per line", "FILE");
    opts.optopt("e", "encoding", "encoding of the input (default: utf-8)", "LABEL");
    opts.optflag("j", "json", "read the input as a JSON array");
    opts.optopt("c", "config", "read conversion options from a JSON file", "FILE");
    opts.optflag("", "no-validation", "accept uncommon writing such as 一十");
    opts.optflag("", "no-daiji", "reject daiji such as 壱 and 拾");
    opts.optopt("o", "output", "text, json or csv (default: text)", "FORMAT");
    opts.optflag("p", "progress", "show a progress bar");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", usage(&opts));
        return Ok(None);
    }

    let mut options = match matches.opt_str("c") {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Invalid config: {}", path))?
        }
        None => ConvertOptions::default(),
    };
    // フラグは設定ファイルより優先する
    if matches.opt_present("no-validation") {
        options.enable_validation = false;
    }
    if matches.opt_present("no-daiji") {
        options.accept_daiji = false;
    }

    let input = match matches.opt_str("f") {
        Some(path) => {
            ensure!(
                matches.free.is_empty(),
                "NUMERAL arguments cannot be used with --file"
            );
            Input::File(PathBuf::from(path))
        }
        None if matches.opt_present("j") => {
            ensure!(
                matches.free.is_empty(),
                "NUMERAL arguments cannot be used with --json"
            );
            Input::Stdin
        }
        None if matches.free.is_empty() => Input::Stdin,
        None => Input::Args(matches.free.clone()),
    };

    let format = match matches.opt_str("o") {
        Some(name) => ReportFormat::of(&name)?,
        None => ReportFormat::Text,
    };

    Ok(Some(Args {
        input,
        encoding: matches.opt_str("e").unwrap_or_else(|| "utf-8".to_owned()),
        json: matches.opt_present("j"),
        options,
        format,
        progress: matches.opt_present("p"),
    }))
}

fn read_input(args: &Args) -> Result<Vec<serde_json::Value>> {
    let text = match &args.input {
        Input::Args(numerals) => {
            return Ok(numerals
                .iter()
                .map(|s| serde_json::Value::String(s.clone()))
                .collect())
        }
        Input::File(path) => {
            ensure!(path.exists(), "File not found: {}", path.display());
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            decode(&bytes, &args.encoding)?
        }
        Input::Stdin => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read stdin")?;
            decode(&bytes, &args.encoding)?
        }
    };

    if args.json {
        parse_json_values(&text)
    } else {
        Ok(split_lines(&text)
            .into_iter()
            .map(serde_json::Value::String)
            .collect())
    }
}

fn convert_all(values: &[serde_json::Value], args: &Args) -> Vec<ConversionRecord> {
    let pb = if args.progress {
        create_progress_bar(values.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    values
        .iter()
        .progress_with(pb)
        .map(|value| {
            let input = match value {
                serde_json::Value::String(s) => s.clone(),
                value => value.to_string(),
            };
            let result = to_number_from_value(value, &args.options);
            if let Err(e) = &result {
                debug!(input = %input, kind = e.kind().as_str(), "conversion failed");
            }
            ConversionRecord::new(input, &result)
        })
        .collect()
}

// 変換できなかった入力の数を返す
fn run<W: Write>(args: &Args, out: W) -> Result<usize> {
    let values = read_input(args)?;
    let records = convert_all(&values, args);

    write_report(out, &records, args.format)?;

    let failed = records.iter().filter(|r| !r.is_ok()).count();
    if 0 < failed {
        warn!(failed, total = records.len(), "some inputs could not be converted");
    }

    Ok(failed)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match get_args(&args)? {
        Some(args) => args,
        None => return Ok(ExitCode::SUCCESS),
    };

    let failed = run(&args, io::stdout().lock())?;
    if 0 < failed {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
