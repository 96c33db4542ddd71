//! Command-line front end: one calculation per invocation.

use std::process::ExitCode;

use tracing::info;

use zn_tuning::cli::{self, Command, USAGE};
use zn_tuning::{
    AppError, Frontend, JsonRenderer, LabelRenderer, OutputFormat, TableRenderer, TuningCalculator,
    TuningCtx, TuningError, TuningResult, ZieglerNichols, help, logging,
};

/// Exit status for a refused tuning request
const EXIT_REFUSED: u8 = 1;

/// Exit status for usage, config or logging failures
const EXIT_APP_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(EXIT_APP_ERROR)
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, AppError> {
    let run_args = match cli::parse_args(args)? {
        Command::Help => {
            println!("{USAGE}\n");
            print!("{}", help::procedure_text());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Run(run_args) => run_args,
    };

    let mut ctx = match &run_args.config {
        Some(path) => TuningCtx::load(path)?,
        None => TuningCtx::default(),
    };
    run_args.apply(&mut ctx);

    let guards = logging::init_logging(ctx.log_dir.as_deref(), &ctx.op_name)?;
    if let Some(path) = guards.log_path() {
        info!("Logging to {path:?}");
    }
    if let Some(path) = &run_args.config {
        info!(?path, "Loaded config");
    }

    let calculator = ZieglerNichols;
    info!(
        op_name = %ctx.op_name,
        calculator = calculator.name(),
        format = ?ctx.format,
        "Starting tuning run"
    );
    let form = run_args.form(&ctx.defaults);

    let outcome = match ctx.format {
        OutputFormat::Table => {
            let mut frontend = Frontend::new(&calculator, form, TableRenderer::new());
            let outcome = frontend.submit();
            print!("{}", frontend.renderer().output());
            outcome
        }
        OutputFormat::Labels => {
            let mut frontend = Frontend::new(&calculator, form, LabelRenderer::new());
            let outcome = frontend.submit();
            println!("{}", frontend.renderer());
            outcome
        }
        OutputFormat::Json => {
            let mut frontend = Frontend::new(&calculator, form, JsonRenderer::new());
            let outcome = frontend.submit();
            println!("{}", frontend.renderer().output());
            outcome
        }
    };

    Ok(exit_code(&outcome))
}

fn exit_code(outcome: &Result<TuningResult, TuningError>) -> ExitCode {
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_REFUSED),
    }
}
