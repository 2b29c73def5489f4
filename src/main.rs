use std::{
    io::{self, Write},
    process::ExitCode,
    time::Instant,
};

use log::info;

use tsp_3d_core::{
    Error, Result, SolverInput, SolverOptions, TourOutput, logging, solve_tour, write_output,
};

fn main() -> ExitCode {
    finish(run(), &mut io::stdout(), &mut io::stderr())
}

/// Usage goes to `out`; any other error is reported once on `err`.
fn finish(result: Result<()>, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(usage)) => {
            let _ = writeln!(out, "{usage}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let now = Instant::now();
    let options = SolverOptions::from_args()?;
    logging::init_logger(&options)?;
    let input = SolverInput::from_options(&options)?;

    info!("input: {input}");
    info!("options: {options}");

    let solution = solve_tour(&input, &options)?;
    solution.tour.validate(input.n())?;

    let line = TourOutput::new(input.points(), &solution.tour, options.cost_format());
    write_output(options.output_path(), &line)?;

    info!(
        "output: n={} strategy={} cost={} time={:.2}s",
        input.n(),
        solution.strategy,
        solution.tour.cost(),
        now.elapsed().as_secs_f32()
    );

    solution.tour.metrics(input.points());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::finish;
    use tsp_3d_core::{Error, SolverOptions};

    #[test]
    fn failures_are_reported_once_on_stderr() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        finish(
            Err(Error::invalid_input("held-karp-max must be <= 20, got 64")),
            &mut out,
            &mut err,
        );

        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).expect("utf8"),
            "error: invalid input: held-karp-max must be <= 20, got 64\n"
        );
    }

    #[test]
    fn usage_goes_to_stdout() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        finish(Err(Error::Usage(SolverOptions::usage())), &mut out, &mut err);

        assert!(err.is_empty());
        assert!(String::from_utf8(out).expect("utf8").contains("--strategy"));
    }

    #[test]
    fn success_prints_nothing() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        finish(Ok(()), &mut out, &mut err);

        assert!(out.is_empty() && err.is_empty());
    }
}
