//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};
use zeck_core::ZeckError;

/// Default limit on the decimal digits of a single operand.
pub const DEFAULT_MAX_DIGITS: usize = 100_000;

/// zeck: integers in the Zeckendorf (Fibonacci) numeral system.
#[derive(Parser, Debug)]
#[command(name = "zeck", version, about, arg_required_else_help = true)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Emit a JSON report instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (full decimals and Fibonacci decompositions).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Reject operands with more decimal digits than this.
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_MAX_DIGITS,
        env = "ZECK_MAX_DIGITS"
    )]
    pub max_digits: usize,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Operations on decimal operands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the Zeckendorf digits of each value.
    Encode {
        /// Signed decimal integers.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Add all values using Zeckendorf arithmetic.
    Add {
        /// Signed decimal integers.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Compare two values.
    Compare {
        /// Left operand.
        #[arg(allow_negative_numbers = true)]
        a: String,
        /// Right operand.
        #[arg(allow_negative_numbers = true)]
        b: String,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Check an operand against the configured digit limit before parsing.
    pub fn check_operand(&self, operand: &str) -> Result<(), ZeckError> {
        let digits = operand.strip_prefix('-').unwrap_or(operand).len();
        if self.max_digits > 0 && digits > self.max_digits {
            return Err(ZeckError::Config(format!(
                "operand has {digits} digits, limit is {} (--max-digits)",
                self.max_digits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn parse_add_with_negative_operands() {
        let config = parse(&["zeck", "add", "5", "-3", "-10"]);
        assert_eq!(
            config.command,
            Some(Command::Add {
                values: vec!["5".into(), "-3".into(), "-10".into()]
            })
        );
        assert_eq!(config.max_digits, DEFAULT_MAX_DIGITS);
    }

    #[test]
    fn parse_compare_and_global_flags() {
        let config = parse(&["zeck", "compare", "-5", "5", "--json"]);
        assert!(config.json);
        assert_eq!(
            config.command,
            Some(Command::Compare {
                a: "-5".into(),
                b: "5".into()
            })
        );
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(AppConfig::try_parse_from(["zeck", "-q", "-v", "encode", "1"]).is_err());
    }

    #[test]
    fn add_requires_operands() {
        assert!(AppConfig::try_parse_from(["zeck", "add"]).is_err());
    }

    #[test]
    fn completion_covers_real_commands() {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        let mut buf = Vec::new();
        zeck_cli::completion::generate_completion(
            &mut cmd,
            clap_complete::Shell::Bash,
            &mut buf,
        );
        let script = String::from_utf8(buf).unwrap();
        for word in ["encode", "add", "compare", "--json", "--max-digits", "--quiet"] {
            assert!(script.contains(word), "completion lacks {word}");
        }
    }

    #[test]
    fn operand_limit() {
        let config = parse(&["zeck", "--max-digits", "3", "encode", "1"]);
        assert!(config.check_operand("-999").is_ok());
        assert!(matches!(
            config.check_operand("1000"),
            Err(ZeckError::Config(_))
        ));

        let unlimited = parse(&["zeck", "--max-digits", "0", "encode", "1"]);
        assert!(unlimited.check_operand(&"9".repeat(500)).is_ok());
    }
}
