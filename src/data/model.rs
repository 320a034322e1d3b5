use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Value – a single cell in a column
// ---------------------------------------------------------------------------

/// Tokens that load as a missing value (the pandas default NA set).
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A dynamically-typed cell mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl Value {
    /// Guess the type of a raw CSV field.
    pub fn parse(raw: &str) -> Value {
        if MISSING_TOKENS.contains(&raw) {
            return Value::Null;
        }
        let trimmed = raw.trim();
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Integer(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            // Any spelling of NaN is a missing value, not a number.
            return if f.is_nan() { Value::Null } else { Value::Float(f) };
        }
        match trimmed {
            "True" | "true" | "TRUE" => Value::Bool(true),
            "False" | "false" | "FALSE" => Value::Bool(false),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Interpret the value as an `f64` when it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Null => write!(f, "<null>"),
        }
    }
}

// ---------------------------------------------------------------------------
// Column – name plus the dtype inferred at load time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Text,
    /// Only missing values; Pandas reads these as float64.
    Empty,
}

impl ColumnKind {
    /// Infer a column's kind from all of its cells.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a Value>) -> ColumnKind {
        let mut kind = ColumnKind::Empty;
        for cell in cells {
            let cell_kind = match cell {
                Value::Null => continue,
                Value::Integer(_) => ColumnKind::Integer,
                Value::Float(_) => ColumnKind::Float,
                Value::Bool(_) => ColumnKind::Boolean,
                Value::Text(_) => ColumnKind::Text,
            };
            kind = match (kind, cell_kind) {
                (ColumnKind::Empty, k) => k,
                (a, b) if a == b => a,
                (ColumnKind::Integer, ColumnKind::Float) | (ColumnKind::Float, ColumnKind::Integer) => {
                    ColumnKind::Float
                }
                _ => return ColumnKind::Text,
            };
        }
        kind
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float | ColumnKind::Empty)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// A precondition failure when a step looks up a column by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("column '{0}' not found in the dataset")]
    Missing(String),

    #[error("column '{0}' is not numeric")]
    NotNumeric(String),
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// One row; `values[i]` belongs to `Dataset::columns[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub values: Vec<Value>,
}

impl Record {
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(Value::is_null)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with column kinds inferred from its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Columns in header order.
    pub columns: Vec<Column>,
    /// All rows, each padded to `columns.len()`.
    pub records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset from header names and raw text fields.
    ///
    /// Short rows are padded with [`Value::Null`]; callers reject long rows.
    pub fn from_text_rows<S, R, F>(headers: &[S], rows: R) -> Self
    where
        S: AsRef<str>,
        R: IntoIterator<Item = Vec<F>>,
        F: AsRef<str>,
    {
        let width = headers.len();
        let records: Vec<Record> = rows
            .into_iter()
            .map(|fields| {
                let mut values: Vec<Value> =
                    fields.iter().take(width).map(|f| Value::parse(f.as_ref())).collect();
                values.resize(width, Value::Null);
                Record { values }
            })
            .collect();

        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| Column {
                name: name.as_ref().to_string(),
                kind: ColumnKind::infer(records.iter().map(|r| &r.values[idx])),
            })
            .collect();

        Dataset { columns, records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first column with this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Check that every named column exists.
    pub fn require_columns(&self, names: &[&str]) -> Result<(), ColumnError> {
        match names.iter().find(|n| !self.has_column(n)) {
            Some(missing) => Err(ColumnError::Missing(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Index of a column that must exist and be numeric.
    pub fn numeric_index(&self, name: &str) -> Result<usize, ColumnError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ColumnError::Missing(name.to_string()))?;
        if !self.columns[idx].kind.is_numeric() {
            return Err(ColumnError::NotNumeric(name.to_string()));
        }
        Ok(idx)
    }

    /// Non-missing values of a numeric column, in row order.
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>, ColumnError> {
        let idx = self.numeric_index(name)?;
        Ok(self.records.iter().filter_map(|r| r.values[idx].as_f64()).collect())
    }

    /// Indices of all numeric columns, in header order.
    pub fn numeric_columns(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind.is_numeric())
            .map(|(i, _)| i)
            .collect()
    }
}
