use anyhow::{Context, Result};
use clap::Parser;
use distval::{MetricValue, Registry};

/// Compute a distance metric over a list of numbers
#[derive(Debug, Parser)]
#[command(name = "distval")]
struct Command {
    /// Distance metric: euclidean, manhattan, or cosine
    #[arg(short, long)]
    metric: String,

    /// Numbers to compute the distance for
    #[arg(short, long, num_args = 1.., allow_negative_numbers = true)]
    numbers: Vec<String>,

    /// Numbers given without -n, appended after those given with it
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Also print the running totals per metric
    #[arg(long)]
    totals: bool,

    /// Verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Command::parse();

    let default_level = if cmd.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    for line in run(&cmd, Registry::global())? {
        println!("{line}");
    }

    Ok(())
}

// Lines to print on success. Any error ends the process with a non-zero status.
fn run(cmd: &Command, registry: &Registry) -> Result<Vec<String>> {
    let tokens: Vec<&str> = cmd
        .numbers
        .iter()
        .chain(cmd.values.iter())
        .map(String::as_str)
        .collect();

    let mut value = MetricValue::parse(&cmd.metric, &tokens)
        .with_context(|| format!("invalid input for metric '{}'", cmd.metric))?;
    value
        .compute_in(registry)
        .with_context(|| format!("failed to compute {}", value.compact()))?;
    log::debug!("computed in {:?}", value.elapsed());

    let mut lines = vec![value.to_string()];
    if cmd.totals {
        lines.extend(
            registry
                .totals()
                .into_iter()
                .map(|(kind, total)| format!("{kind}: {total}")),
        );
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use distval::MetricError;

    fn run_args(args: &[&str]) -> Result<Vec<String>> {
        let cmd = Command::try_parse_from(std::iter::once("distval").chain(args.iter().copied()))?;
        run(&cmd, &Registry::new())
    }

    fn root_cause(args: &[&str]) -> MetricError {
        run_args(args)
            .unwrap_err()
            .downcast::<MetricError>()
            .unwrap()
    }

    #[test]
    fn test_prints_display_form() {
        let lines = run_args(&["-m", "cosine", "-n", "8", "9"]).unwrap();
        assert_eq!(
            lines,
            vec!["The cosine distance for the set of numbers [8, 9] is 0.664"]
        );
    }

    #[test]
    fn test_negative_and_positional_numbers() {
        let lines = run_args(&["-m", "manhattan", "-n", "-1", "2", "--", "-5"]).unwrap();
        assert_eq!(
            lines[0],
            "The manhattan distance for the set of numbers [-1, 2, -5] is 8"
        );
        let lines = run_args(&["-m", "manhattan", "1", "2", "3"]).unwrap();
        assert!(lines[0].ends_with("is 6"));
    }

    #[test]
    fn test_totals_flag() {
        let lines = run_args(&["-m", "manhattan", "-n", "1", "0", "--totals"]).unwrap();
        assert_eq!(lines, vec![
            "The manhattan distance for the set of numbers [1, 0] is 1".to_string(),
            "manhattan: 1".to_string(),
        ]);
    }

    #[test]
    fn test_invalid_metric_fails() {
        assert_eq!(
            root_cause(&["-m", "foo", "-n", "1"]),
            MetricError::InvalidMetric("foo".to_string())
        );
        let message = format!("{:#}", run_args(&["-m", "foo", "-n", "1"]).unwrap_err());
        assert!(message.contains("unknown metric 'foo'"), "{message}");
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(root_cause(&["-m", "cosine"]), MetricError::EmptyInput);
    }

    #[test]
    fn test_invalid_value_fails() {
        assert_eq!(
            root_cause(&["-m", "euclidean", "-n", "1", "abc"]),
            MetricError::InvalidValue("abc".to_string())
        );
    }

    #[test]
    fn test_degenerate_cosine_fails() {
        assert!(matches!(
            root_cause(&["-m", "cosine", "-n", "4"]),
            MetricError::ComputationError(_)
        ));
    }

    #[test]
    fn test_missing_metric_is_usage_error() {
        assert!(Command::try_parse_from(["distval", "-n", "1"]).is_err());
    }
}
