//! Console values a lesson prints, kept in print order.

use std::fmt;

use serde::{Deserialize, Serialize};
use statlab_core::ConfidenceInterval;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportValue {
    Scalar {
        #[serde(with = "lenient")]
        value: f64,
    },
    Interval {
        #[serde(with = "lenient")]
        level: f64,
        #[serde(with = "lenient")]
        lower: f64,
        #[serde(with = "lenient")]
        upper: f64,
    },
    Series {
        #[serde(with = "lenient::seq")]
        values: Vec<f64>,
    },
    Table {
        columns: Vec<String>,
        #[serde(with = "lenient::rows")]
        rows: Vec<Vec<f64>>,
    },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub label: String,
    pub value: ReportValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonReport {
    pub entries: Vec<ReportEntry>,
}

impl LessonReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, label: impl Into<String>, value: ReportValue) -> &mut Self {
        self.entries.push(ReportEntry {
            label: label.into(),
            value,
        });
        self
    }

    pub fn scalar(&mut self, label: impl Into<String>, value: f64) -> &mut Self {
        self.push(label, ReportValue::Scalar { value })
    }

    pub fn interval(&mut self, label: impl Into<String>, ci: &ConfidenceInterval) -> &mut Self {
        self.push(
            label,
            ReportValue::Interval {
                level: ci.level,
                lower: ci.lower,
                upper: ci.upper,
            },
        )
    }

    pub fn series(&mut self, label: impl Into<String>, values: Vec<f64>) -> &mut Self {
        self.push(label, ReportValue::Series { values })
    }

    pub fn table(
        &mut self,
        label: impl Into<String>,
        columns: &[&str],
        rows: Vec<Vec<f64>>,
    ) -> &mut Self {
        let columns = columns.iter().map(|c| c.to_string()).collect();
        self.push(label, ReportValue::Table { columns, rows })
    }

    pub fn text(&mut self, label: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.push(label, ReportValue::Text { text: text.into() })
    }

    pub fn get(&self, label: &str) -> Option<&ReportValue> {
        self.entries.iter().find(|e| e.label == label).map(|e| &e.value)
    }

    /// The scalar stored under `label`, if there is one.
    pub fn scalar_value(&self, label: &str) -> Option<f64> {
        match self.get(label) {
            Some(ReportValue::Scalar { value }) => Some(*value),
            _ => None,
        }
    }
}

// ─── Non-finite numbers ─────────────────────────────────────────────

/// Report numbers in JSON: finite values as numbers, `inf`, `-inf` and `NaN`
/// as strings. Reading also accepts `null` (as `NaN`).
mod lenient {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy)]
    struct Number(f64);

    impl Serialize for Number {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.0.is_finite() {
                serializer.serialize_f64(self.0)
            } else {
                serializer.serialize_str(&self.0.to_string())
            }
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(Option<f64>),
        Text(String),
    }

    impl<'de> Deserialize<'de> for Number {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            match Repr::deserialize(deserializer)? {
                Repr::Number(v) => Ok(Number(v.unwrap_or(f64::NAN))),
                Repr::Text(text) => text
                    .parse()
                    .map(Number)
                    .map_err(|_| de::Error::custom(format!("`{text}` is not a number"))),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        Number(*value).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Number::deserialize(deserializer).map(|n| n.0)
    }

    pub mod seq {
        use super::*;

        pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(values.iter().map(|&v| Number(v)))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
            let numbers = Vec::<Number>::deserialize(deserializer)?;
            Ok(numbers.into_iter().map(|n| n.0).collect())
        }
    }

    pub mod rows {
        use super::*;

        pub fn serialize<S: Serializer>(rows: &[Vec<f64>], serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(
                rows.iter()
                    .map(|row| row.iter().map(|&v| Number(v)).collect::<Vec<_>>()),
            )
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Vec<f64>>, D::Error> {
            let rows = Vec::<Vec<Number>>::deserialize(deserializer)?;
            Ok(rows
                .into_iter()
                .map(|row| row.into_iter().map(|n| n.0).collect())
                .collect())
        }
    }
}

/// Four significant decimals, integers without a fraction.
fn fmt_num(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.4}")
    }
}

impl fmt::Display for ReportValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportValue::Scalar { value } => write!(f, "{}", fmt_num(*value)),
            ReportValue::Interval { level, lower, upper } => write!(
                f,
                "[{}, {}] ({}%)",
                fmt_num(*lower),
                fmt_num(*upper),
                fmt_num(*level)
            ),
            ReportValue::Series { values } => {
                let parts: Vec<String> = values.iter().map(|v| fmt_num(*v)).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            ReportValue::Table { columns, rows } => {
                write!(f, "\n    {}", columns.join("\t"))?;
                for row in rows {
                    let cells: Vec<String> = row.iter().map(|v| fmt_num(*v)).collect();
                    write!(f, "\n    {}", cells.join("\t"))?;
                }
                Ok(())
            }
            ReportValue::Text { text } => f.write_str(text),
        }
    }
}

impl fmt::Display for LessonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.label, entry.value)?;
        }
        Ok(())
    }
}
