//! Result presenters for the `zeck` binary.

use std::cmp::Ordering;

use zeck_core::ZeckendorfValue;

use crate::output::{
    format_decomposition, format_digits, format_ordering, format_result, Report, ValueReport,
};

/// Renders the outcome of each CLI operation.
pub trait Presenter {
    /// Zeckendorf form of each value.
    fn render_encoding(&self, values: &[ZeckendorfValue]) -> String;

    /// Sum of `operands`.
    fn render_sum(&self, operands: &[ZeckendorfValue], sum: &ZeckendorfValue) -> String;

    /// Ordering of `a` relative to `b`.
    fn render_comparison(
        &self,
        a: &ZeckendorfValue,
        b: &ZeckendorfValue,
        ordering: Ordering,
    ) -> String;
}

/// Human-readable presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn render_value(&self, value: &ZeckendorfValue) -> String {
        let mut line = format!(
            "{} -> {} {}",
            format_result(&value.to_bigint(), self.verbose),
            value.sign(),
            format_digits(value.digits())
        );
        if self.verbose {
            line.push_str("\n  ");
            line.push_str(&format_decomposition(value));
        }
        line
    }
}

impl Presenter for CliPresenter {
    fn render_encoding(&self, values: &[ZeckendorfValue]) -> String {
        values
            .iter()
            .map(|value| {
                if self.quiet {
                    format_digits(value.digits())
                } else {
                    self.render_value(value)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_sum(&self, operands: &[ZeckendorfValue], sum: &ZeckendorfValue) -> String {
        if self.quiet {
            return sum.to_string();
        }
        let mut lines: Vec<String> = operands.iter().map(|v| self.render_value(v)).collect();
        lines.push(format!("{:-<40}", ""));
        lines.push(self.render_value(sum));
        lines.join("\n")
    }

    fn render_comparison(
        &self,
        a: &ZeckendorfValue,
        b: &ZeckendorfValue,
        ordering: Ordering,
    ) -> String {
        if self.quiet {
            return format_ordering(ordering).to_string();
        }
        format!(
            "{} {} {}",
            format_result(&a.to_bigint(), self.verbose),
            format_ordering(ordering),
            format_result(&b.to_bigint(), self.verbose)
        )
    }
}

/// Machine-readable presenter emitting one JSON document per operation.
pub struct JsonPresenter;

impl JsonPresenter {
    fn render(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to serialize report");
            String::from("{}")
        })
    }
}

impl Presenter for JsonPresenter {
    fn render_encoding(&self, values: &[ZeckendorfValue]) -> String {
        Self::render(&Report {
            operation: "encode",
            operands: values.iter().map(ValueReport::from).collect(),
            result: None,
            ordering: None,
        })
    }

    fn render_sum(&self, operands: &[ZeckendorfValue], sum: &ZeckendorfValue) -> String {
        Self::render(&Report {
            operation: "add",
            operands: operands.iter().map(ValueReport::from).collect(),
            result: Some(ValueReport::from(sum)),
            ordering: None,
        })
    }

    fn render_comparison(
        &self,
        a: &ZeckendorfValue,
        b: &ZeckendorfValue,
        ordering: Ordering,
    ) -> String {
        Self::render(&Report {
            operation: "compare",
            operands: vec![ValueReport::from(a), ValueReport::from(b)],
            result: None,
            ordering: Some(format_ordering(ordering)),
        })
    }
}
