use microstrip::prelude::*;

fn main() -> Result<(), DomainError> {
    // 1.6 mm FR-4 board, a few common target impedances.
    let height = Length::from_millimeters(1.6);
    let targets = [25.0_f64, 35.4, 50.0, 75.0, 100.0];

    println!(
        "Z0_target(ohm), regime, w/h, width, eps_r, eps_eff, Z0_check(ohm), lambda_g@1GHz(mm)"
    );
    for z0 in targets {
        let design = Microstrip::synthesize(Substrate::fr4(), height, Impedance::new(z0))?;
        let params = design.line.analyze()?;
        let lambda = params.guided_wavelength(1.0e9)?;
        println!(
            "{:.1}, {:?}, {:.4}, {}, {}, {:.4}, {:.2}, {:.2}",
            z0,
            design.estimate.regime,
            design.estimate.ratio,
            design.line.width(),
            design.line.substrate().relative_permittivity(),
            params.effective_permittivity,
            params.characteristic_impedance.value(),
            lambda.millimeters(),
        );
    }
    Ok(())
}
