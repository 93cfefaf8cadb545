use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    io::{self, BufRead, IsTerminal},
    process::ExitCode,
};
use symbolic_rs::{
    compute::tree::{Step, Termination},
    simplify_str,
    Options,
    OptionsBuilder,
    Output,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: symbolic [--steps] [--eval] [--limit <n>] [--digits <n>] [expression]

Simplifies the given expression. Without an expression, reads one expression per line from stdin,
or starts an interactive session if stdin is a terminal.

options:
    --steps        print every important intermediate form
    --eval         print the numeric value of the result, if it has no unknowns
    --limit <n>    give up after <n> important steps (default 1000)
    --digits <n>   keep up to <n> decimal digits of number literals (default 6, at most 17)";

/// Parses the command-line arguments into the options and the expression to simplify, if any.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<(Options, Option<String>), String> {
    let mut builder = OptionsBuilder::new();
    let mut expression = Vec::new();

    fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
        let value = value.ok_or_else(|| format!("missing value for `{}`", flag))?;
        value.parse().map_err(|_| format!("invalid value for `{}`: `{}`", flag, value))
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--steps" => builder = builder.stepwise(true),
            "--eval" => builder = builder.evaluate(true),
            "--limit" => builder = builder.step_limit(number("--limit", args.next())?),
            "--digits" => builder = builder.digits(number("--digits", args.next())?),
            "--" => expression.extend(args.by_ref()),
            flag if flag.starts_with("--") => return Err(format!("unknown option `{}`", flag)),
            _ => expression.push(arg),
        }
    }

    let expression = (!expression.is_empty()).then(|| expression.join(" "));
    Ok((builder.build(), expression))
}

/// Simplifies the given input and prints the result, or reports the errors to stderr. Returns
/// false if the input could not be simplified.
fn simplify_print(input: &str, options: &Options) -> bool {
    let result = match simplify_str(input, options) {
        Ok(result) => result,
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input", input) {
                eprintln!("{}", io_err);
            }
            return false;
        },
    };

    for diagnostic in &result.diagnostics {
        if let Err(io_err) = diagnostic.report_to_stderr("input", input) {
            eprintln!("{}", io_err);
        }
    }

    match &result.output {
        Output::Simplified(form) => println!("{}", form),
        Output::Steps(steps) => {
            for (i, step) in steps.iter().enumerate() {
                match step {
                    Step::Form(form) => println!("{:>4}. {}", i + 1, form),
                    Step::StepLimitExceeded => println!("      ({})", step),
                }
            }
        },
    }

    if let Some(value) = result.value {
        println!("= {}", value);
    }

    if result.termination == Termination::StepLimitExceeded && !options.stepwise {
        eprintln!("warning: gave up after {} steps; the result may not be fully simplified", options.step_limit);
    }

    true
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let (options, expression) = match parse_args(std::env::args().skip(1)) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, USAGE);
            return ExitCode::from(2);
        },
    };

    if let Some(expression) = expression {
        // simplify the expression given on the command line
        return if simplify_print(&expression, &options) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    if !io::stdin().is_terminal() {
        // read one expression per line from stdin
        let mut success = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            };
            if !line.trim().is_empty() {
                success &= simplify_print(&line, &options);
            }
        }

        return if success { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    // run the repl / interactive mode
    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, options: &Options) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        simplify_print(&input, options);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, &options) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn args(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn flags_and_expression() {
        let (options, expression) = parse_args(args(&["--steps", "--limit", "5", "1", "+", "x"])).unwrap();
        assert_eq!(options, OptionsBuilder::new().stepwise(true).step_limit(5).build());
        assert_eq!(expression.as_deref(), Some("1 + x"));
    }

    #[test]
    fn no_expression() {
        let (options, expression) = parse_args(args(&["--eval", "--digits", "3"])).unwrap();
        assert_eq!(options, OptionsBuilder::new().evaluate(true).digits(3).build());
        assert_eq!(expression, None);
    }

    #[test]
    fn negative_expression_after_separator() {
        let (_, expression) = parse_args(args(&["--", "--x"])).unwrap();
        assert_eq!(expression.as_deref(), Some("--x"));
    }

    #[test]
    fn bad_flags() {
        assert!(parse_args(args(&["--limit"])).is_err());
        assert!(parse_args(args(&["--digits", "many"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
    }
}
