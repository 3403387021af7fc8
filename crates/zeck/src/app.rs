//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::debug;

use zeck_cli::presenter::{CliPresenter, JsonPresenter, Presenter};
use zeck_core::{ZeckError, ZeckendorfValue};

use crate::config::{AppConfig, Command};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        zeck_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(command) = &config.command else {
        return Err(ZeckError::Config("no command given (try --help)".into()).into());
    };

    let presenter: Box<dyn Presenter> = if config.json {
        Box::new(JsonPresenter)
    } else {
        Box::new(CliPresenter::new(config.verbose, config.quiet))
    };

    let output = execute(config, command, presenter.as_ref())?;
    println!("{output}");
    Ok(())
}

/// Execute one command and return the rendered output.
pub fn execute(
    config: &AppConfig,
    command: &Command,
    presenter: &dyn Presenter,
) -> Result<String> {
    match command {
        Command::Encode { values } => {
            let values = parse_operands(config, values)?;
            debug!(count = values.len(), "Encoding operands");
            Ok(presenter.render_encoding(&values))
        }
        Command::Add { values } => {
            let values = parse_operands(config, values)?;
            let sum: ZeckendorfValue = values.iter().sum();
            debug!(count = values.len(), digits = sum.digits().len(), "Added operands");
            Ok(presenter.render_sum(&values, &sum))
        }
        Command::Compare { a, b } => {
            let a = parse_operand(config, a)?;
            let b = parse_operand(config, b)?;
            let ordering = a.cmp(&b);
            debug!(?ordering, "Compared operands");
            Ok(presenter.render_comparison(&a, &b, ordering))
        }
    }
}

fn parse_operands(config: &AppConfig, operands: &[String]) -> Result<Vec<ZeckendorfValue>> {
    operands
        .iter()
        .map(|operand| parse_operand(config, operand))
        .collect()
}

fn parse_operand(config: &AppConfig, operand: &str) -> Result<ZeckendorfValue> {
    config.check_operand(operand)?;
    operand
        .parse::<ZeckendorfValue>()
        .with_context(|| format!("cannot read operand {operand:?}"))
}
