//! Console driver: asks for a substrate, a height and a target impedance, then prints the
//! trace width that realizes it.

mod telemetry;

use std::io::{self, BufRead, Write};

use tracing::{info, instrument};

use crate::errors::MicrostripError;
use crate::math::Scalar;
use crate::microstrip::{Design, Microstrip, Substrate};
use crate::units::{Impedance, Length};

/// Runs one interactive session on the process's stdin and stdout.
///
/// # Errors
///
/// Fails on unreadable or non-numeric input and on any domain error from the estimator.
pub fn run() -> color_eyre::Result<()> {
    telemetry::init_subscriber(telemetry::get_subscriber("warn"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Prompts on `output`, reads three numbers from `input` and writes the estimated ratio and
/// width in millimeters. Returns the synthesized design.
///
/// # Errors
///
/// [`MicrostripError::Input`] for non-numeric or missing input, [`MicrostripError::Domain`]
/// when the values fall outside the formulas' domain, [`MicrostripError::Io`] on console failure.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<Design, MicrostripError> {
    let epsilon_r = prompt(
        &mut input,
        &mut output,
        "Enter the substrate relative permittivity (epsilon_r)",
    )?;
    let height_mm = prompt(&mut input, &mut output, "Enter the substrate height (mm)")?;
    let z0 = prompt(
        &mut input,
        &mut output,
        "Enter the desired characteristic impedance (ohms)",
    )?;
    info!(epsilon_r, height_mm, z0, "sizing microstrip");

    let design = Microstrip::synthesize(
        Substrate::new(epsilon_r)?,
        Length::from_millimeters(height_mm),
        Impedance::new(z0),
    )?;

    writeln!(output, "Estimated width / height ratio: {}", design.estimate.ratio)?;
    writeln!(output, "Width = {} (mm)", design.line.width().millimeters())?;
    output.flush()?;
    Ok(design)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Scalar, MicrostripError> {
    writeln!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(MicrostripError::Input(format!(
            "input ended before answering \"{message}\""
        )));
    }
    let trimmed = line.trim();
    trimmed
        .parse::<Scalar>()
        .map_err(|_| MicrostripError::Input(format!("`{trimmed}` is not a number")))
}
