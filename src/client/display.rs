//! Metric formatting
//!
//! Pure functions of the last chat response. Missing or non-numeric
//! provider fields are "unknown" and render as a placeholder, never as zero.

use crate::models::ChatResponse;
use serde_json::Value;
use std::fmt;

/// Placeholder for unknown values
pub const PLACEHOLDER: &str = "—";

/// Provider usage metrics, read leniently from the relayed JSON
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageMetrics {
    pub total_time: Option<f64>,
    pub queue_time: Option<f64>,
    pub prompt_time: Option<f64>,
    pub completion_time: Option<f64>,
    pub prompt_tokens: Option<u64>,
    pub completion_tokens: Option<u64>,
    pub total_tokens: Option<u64>,
    pub reasoning_tokens: Option<u64>,
}

impl UsageMetrics {
    /// Read the known fields out of an opaque usage object
    pub fn from_value(usage: &Value) -> Self {
        let seconds = |key: &str| usage.get(key).and_then(Value::as_f64);
        let tokens = |key: &str| usage.get(key).and_then(Value::as_u64);

        Self {
            total_time: seconds("total_time"),
            queue_time: seconds("queue_time"),
            prompt_time: seconds("prompt_time"),
            completion_time: seconds("completion_time"),
            prompt_tokens: tokens("prompt_tokens"),
            completion_tokens: tokens("completion_tokens"),
            total_tokens: tokens("total_tokens"),
            reasoning_tokens: usage
                .get("completion_tokens_details")
                .and_then(|d| d.get("reasoning_tokens"))
                .and_then(Value::as_u64),
        }
    }

    /// Completion tokens per second
    pub fn output_speed(&self) -> Option<f64> {
        throughput(self.completion_tokens, self.completion_time)
    }

    /// Total tokens per second
    pub fn total_speed(&self) -> Option<f64> {
        throughput(self.total_tokens, self.total_time)
    }
}

/// Format seconds with millisecond precision, e.g. `0.123 s`
pub fn fmt_seconds(seconds: Option<f64>) -> String {
    match seconds {
        Some(s) if s.is_finite() => format!("{:.3} s", s),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format a token count with thousands separators, e.g. `1,234`
pub fn fmt_tokens(tokens: Option<u64>) -> String {
    match tokens {
        Some(n) => group_thousands(n),
        None => PLACEHOLDER.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Tokens per second; undefined unless both operands are known and time is positive
pub fn throughput(tokens: Option<u64>, seconds: Option<f64>) -> Option<f64> {
    match (tokens, seconds) {
        (Some(t), Some(s)) if s > 0.0 && s.is_finite() => Some(t as f64 / s),
        _ => None,
    }
}

/// Wall time not accounted for by the provider, clamped at zero
pub fn overhead_ms(wall_time_ms: Option<u64>, total_time: Option<f64>) -> Option<f64> {
    match (wall_time_ms, total_time) {
        (Some(wall), Some(total)) if total.is_finite() => {
            Some((wall as f64 - total * 1000.0).max(0.0))
        }
        _ => None,
    }
}

/// Metrics panel shown under a response
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsPanel {
    pub wall_time_ms: Option<u64>,
    pub usage: Option<UsageMetrics>,
    pub request_id: Option<String>,
}

impl MetricsPanel {
    /// Build the panel for a response
    pub fn from_response(response: &ChatResponse) -> Self {
        Self {
            wall_time_ms: Some(response.wall_time_ms),
            usage: response.usage.as_ref().map(UsageMetrics::from_value),
            request_id: response.request_id.clone().filter(|id| !id.is_empty()),
        }
    }

    /// Rendered `(label, value)` rows in display order
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let usage = self.usage.clone().unwrap_or_default();
        let mut rows = vec![(
            "Wall time",
            format!(
                "{} ms",
                self.wall_time_ms
                    .map(|ms| ms.to_string())
                    .unwrap_or_else(|| PLACEHOLDER.to_string())
            ),
        )];

        rows.push(("total_time", fmt_seconds(usage.total_time)));
        rows.push(("queue_time", fmt_seconds(usage.queue_time)));
        rows.push(("prompt_time", fmt_seconds(usage.prompt_time)));
        rows.push(("completion_time", fmt_seconds(usage.completion_time)));

        if let Some(overhead) = overhead_ms(self.wall_time_ms, usage.total_time) {
            rows.push(("Overhead (wall - Groq)", format!("{} ms", overhead.round() as u64)));
        }

        rows.push(("prompt_tokens", fmt_tokens(usage.prompt_tokens)));
        rows.push(("completion_tokens", fmt_tokens(usage.completion_tokens)));
        rows.push(("total_tokens", fmt_tokens(usage.total_tokens)));

        if usage.reasoning_tokens.is_some() {
            rows.push(("reasoning_tokens", fmt_tokens(usage.reasoning_tokens)));
        }
        if let Some(speed) = usage.output_speed() {
            rows.push(("Output speed", format!("{:.1} tok/s", speed)));
        }
        if let Some(speed) = usage.total_speed() {
            rows.push(("Total speed", format!("{:.1} tok/s", speed)));
        }
        if let Some(id) = &self.request_id {
            rows.push(("Request ID", id.clone()));
        }

        rows
    }

    /// Value of a row by label
    pub fn row(&self, label: &str) -> Option<String> {
        self.rows()
            .into_iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v)
    }
}

impl fmt::Display for MetricsPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fmt_seconds() {
        assert_eq!(fmt_seconds(Some(0.1234)), "0.123 s");
        assert_eq!(fmt_seconds(Some(2.0)), "2.000 s");
        assert_eq!(fmt_seconds(None), "—");
        assert_eq!(fmt_seconds(Some(f64::NAN)), "—");
    }

    #[test]
    fn test_fmt_tokens() {
        assert_eq!(fmt_tokens(Some(0)), "0");
        assert_eq!(fmt_tokens(Some(999)), "999");
        assert_eq!(fmt_tokens(Some(1_000)), "1,000");
        assert_eq!(fmt_tokens(Some(1_234_567)), "1,234,567");
        assert_eq!(fmt_tokens(None), "—");
    }

    #[test]
    fn test_throughput() {
        assert_eq!(throughput(Some(120), Some(2.0)), Some(60.0));
        assert_eq!(throughput(Some(120), Some(0.0)), None);
        assert_eq!(throughput(Some(120), Some(-1.0)), None);
        assert_eq!(throughput(None, Some(2.0)), None);
        assert_eq!(throughput(Some(120), None), None);
    }

    #[test]
    fn test_overhead() {
        assert_eq!(overhead_ms(Some(500), Some(0.45)).map(f64::round), Some(50.0));
        assert_eq!(overhead_ms(Some(500), Some(0.6)), Some(0.0));
        assert_eq!(overhead_ms(None, Some(0.45)), None);
        assert_eq!(overhead_ms(Some(500), None), None);
    }

    #[test]
    fn test_usage_from_value_is_lenient() {
        let usage = UsageMetrics::from_value(&json!({
            "total_time": 0.5,
            "queue_time": "fast",
            "prompt_tokens": 10,
            "completion_tokens_details": {"reasoning_tokens": 7}
        }));

        assert_eq!(usage.total_time, Some(0.5));
        assert_eq!(usage.queue_time, None);
        assert_eq!(usage.prompt_tokens, Some(10));
        assert_eq!(usage.completion_tokens, None);
        assert_eq!(usage.reasoning_tokens, Some(7));
    }

    #[test]
    fn test_panel_rows() {
        let response = ChatResponse {
            model: "a-model".to_string(),
            text: "hi".to_string(),
            wall_time_ms: 500,
            usage: Some(json!({
                "total_time": 0.45,
                "completion_time": 2.0,
                "completion_tokens": 120,
                "total_tokens": 1500
            })),
            request_id: Some("req_1".to_string()),
        };

        let panel = MetricsPanel::from_response(&response);
        assert_eq!(panel.row("Wall time").as_deref(), Some("500 ms"));
        assert_eq!(panel.row("Overhead (wall - Groq)").as_deref(), Some("50 ms"));
        assert_eq!(panel.row("Output speed").as_deref(), Some("60.0 tok/s"));
        assert_eq!(panel.row("Total speed").as_deref(), Some("3333.3 tok/s"));
        assert_eq!(panel.row("total_tokens").as_deref(), Some("1,500"));
        assert_eq!(panel.row("prompt_tokens").as_deref(), Some("—"));
        assert_eq!(panel.row("queue_time").as_deref(), Some("—"));
        assert_eq!(panel.row("Request ID").as_deref(), Some("req_1"));
        assert!(panel.row("reasoning_tokens").is_none());
    }

    #[test]
    fn test_panel_without_usage() {
        let response = ChatResponse {
            model: "a-model".to_string(),
            text: String::new(),
            wall_time_ms: 12,
            usage: None,
            request_id: None,
        };

        let panel = MetricsPanel::from_response(&response);
        assert_eq!(panel.row("total_time").as_deref(), Some("—"));
        assert!(panel.row("Overhead (wall - Groq)").is_none());
        assert!(panel.row("Output speed").is_none());
        assert!(panel.row("Request ID").is_none());
        assert!(panel.to_string().starts_with("Wall time: 12 ms\n"));
    }
}
