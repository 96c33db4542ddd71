//! Command line of the `zn_tuning` binary.

use std::path::PathBuf;

use zn_tuning_shared::Field;

use crate::config::{OutputFormat, TuningCtx};
use crate::error::AppError;
use crate::form::FormFields;

pub const USAGE: &str = "\
Usage: zn_tuning [OPTIONS] [ΔMV [ΔPV [L [T]]]]
       zn_tuning help

Ziegler-Nichols open-loop PID tuning from a step test.
Values not given fall back to the configured defaults (10.0 5.0 5.0 20.0).

Options:
  --config <FILE>     JSON settings file
  --format <FORMAT>   table, labels or json
  --log-dir <DIR>     also write logs to <DIR>/<op_name>.log
  -h, --help          show this message";

/// What the binary was asked to do
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Print usage and the test procedure
    Help,
    Run(RunArgs),
}

/// Arguments of a calculation run
#[derive(Debug, Default, PartialEq)]
pub struct RunArgs {
    pub config: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub log_dir: Option<PathBuf>,

    /// Field text given positionally, in form order
    pub values: Vec<String>,
}

impl RunArgs {
    /// Override settings with anything given on the command line
    pub fn apply(&self, ctx: &mut TuningCtx) {
        if let Some(format) = self.format {
            ctx.format = format;
        }
        if let Some(log_dir) = &self.log_dir {
            ctx.log_dir = Some(log_dir.clone());
        }
    }

    /// Form text: positional values over the configured defaults
    pub fn form(&self, defaults: &FormFields) -> FormFields {
        let mut form = defaults.clone();
        for (field, text) in Field::ALL.into_iter().zip(self.values.iter()) {
            form.set(field, text);
        }

        form
    }
}

fn flag_value<'a>(
    flag: &str,
    iter: &mut impl Iterator<Item = &'a str>,
) -> Result<String, AppError> {
    iter.next()
        .map(str::to_owned)
        .ok_or_else(|| AppError::Usage(format!("Missing value for `{flag}`\n\n{USAGE}")))
}

/// Parse arguments, not including the program name
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, AppError> {
    let mut run = RunArgs::default();
    let mut iter = args.iter().map(|s| s.as_ref());

    while let Some(arg) = iter.next() {
        match arg {
            "help" | "-h" | "--help" => return Ok(Command::Help),
            "--config" => run.config = Some(flag_value(arg, &mut iter)?.into()),
            "--log-dir" => run.log_dir = Some(flag_value(arg, &mut iter)?.into()),
            "--format" => run.format = Some(flag_value(arg, &mut iter)?.parse()?),
            flag if flag.starts_with("--") => {
                return Err(AppError::Usage(format!(
                    "Unrecognized option `{flag}`\n\n{USAGE}"
                )));
            }
            // Anything else, including negative numbers, is a field value
            value => run.values.push(value.to_owned()),
        }
    }

    if run.values.len() > Field::ALL.len() {
        return Err(AppError::Usage(format!(
            "Expected at most {} values, got {}\n\n{USAGE}",
            Field::ALL.len(),
            run.values.len()
        )));
    }

    Ok(Command::Run(run))
}
