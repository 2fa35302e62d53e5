use std::fmt;

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Shape or range violations when building a matrix or a series set.
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("matrix has {labels} row labels but {rows} value rows")]
    RowCount { labels: usize, rows: usize },

    #[error("row {row} has {len} values, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    #[error("value {value} at ({row}, {col}) is outside [-1, 1]")]
    OutOfRange { row: usize, col: usize, value: f64 },

    #[error("series '{name}' has {len} values but the age axis has {expected}")]
    SeriesLength { name: String, len: usize, expected: usize },
}

// ---------------------------------------------------------------------------
// CorrelationMatrix – biomarker × disease grid
// ---------------------------------------------------------------------------

/// Rectangular grid of correlation coefficients with row/column labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct CorrelationMatrix {
    rows: Vec<String>,
    cols: Vec<String>,
    values: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawMatrix {
    rows: Vec<String>,
    cols: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl TryFrom<RawMatrix> for CorrelationMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, Self::Error> {
        CorrelationMatrix::new(raw.rows, raw.cols, raw.values)
    }
}

impl CorrelationMatrix {
    /// Build a matrix, checking that the grid matches the labels and that
    /// every value is a coefficient in [-1, 1].
    pub fn new(
        rows: Vec<String>,
        cols: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        if rows.len() != values.len() {
            return Err(MatrixError::RowCount {
                labels: rows.len(),
                rows: values.len(),
            });
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != cols.len() {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: cols.len(),
                });
            }
            if let Some((j, &v)) = row
                .iter()
                .enumerate()
                .find(|(_, v)| !(-1.0..=1.0).contains(*v))
            {
                return Err(MatrixError::OutOfRange {
                    row: i,
                    col: j,
                    value: v,
                });
            }
        }
        Ok(Self { rows, cols, values })
    }

    /// Matrix built by the in-process generators, whose label tables and
    /// sine-based values already satisfy the checks in [`Self::new`].
    pub(crate) fn from_generated(
        rows: Vec<String>,
        cols: Vec<String>,
        values: Vec<Vec<f64>>,
    ) -> Self {
        debug_assert_eq!(rows.len(), values.len());
        debug_assert!(values
            .iter()
            .flatten()
            .all(|v| (-1.0..=1.0).contains(v)));
        Self { rows, cols, values }
    }

    /// Row labels (biomarkers).
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Column labels (diseases).
    pub fn cols(&self) -> &[String] {
        &self.cols
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SeriesSet – named series over a shared age axis
// ---------------------------------------------------------------------------

/// Several named series sampled on the same age axis. Order is kept so the
/// legend and palette assignment are stable across redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSet {
    ages: Vec<f64>,
    series: Vec<(String, Vec<f64>)>,
}

impl SeriesSet {
    pub fn new(ages: Vec<f64>, series: Vec<(String, Vec<f64>)>) -> Result<Self, MatrixError> {
        if let Some((name, values)) = series.iter().find(|(_, v)| v.len() != ages.len()) {
            return Err(MatrixError::SeriesLength {
                name: name.clone(),
                len: values.len(),
                expected: ages.len(),
            });
        }
        Ok(Self { ages, series })
    }

    /// Series sampled once per age by the generators.
    pub(crate) fn from_generated(ages: Vec<f64>, series: Vec<(String, Vec<f64>)>) -> Self {
        debug_assert!(series.iter().all(|(_, v)| v.len() == ages.len()));
        Self { ages, series }
    }

    pub fn ages(&self) -> &[f64] {
        &self.ages
    }

    pub fn series(&self) -> &[(String, Vec<f64>)] {
        &self.series
    }

    /// Smallest and largest value across every series, `None` when empty.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|(_, values)| values.iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// Biomarker family chosen in the dashboard. Unknown keys are kept verbatim
/// and fall back to generic tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiomarkerType {
    Epigenetic,
    Telomere,
    Inflammatory,
    Metabolic,
    Other(String),
}

impl BiomarkerType {
    pub fn choices() -> [BiomarkerType; 4] {
        [
            BiomarkerType::Epigenetic,
            BiomarkerType::Telomere,
            BiomarkerType::Inflammatory,
            BiomarkerType::Metabolic,
        ]
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "epigenetic" => BiomarkerType::Epigenetic,
            "telomere" => BiomarkerType::Telomere,
            "inflammatory" => BiomarkerType::Inflammatory,
            "metabolic" => BiomarkerType::Metabolic,
            other => BiomarkerType::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            BiomarkerType::Epigenetic => "epigenetic",
            BiomarkerType::Telomere => "telomere",
            BiomarkerType::Inflammatory => "inflammatory",
            BiomarkerType::Metabolic => "metabolic",
            BiomarkerType::Other(key) => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            BiomarkerType::Epigenetic => "Epigenetic Clock",
            BiomarkerType::Telomere => "Telomere Length",
            BiomarkerType::Inflammatory => "Inflammatory Markers",
            BiomarkerType::Metabolic => "Metabolic Markers",
            BiomarkerType::Other(key) => key,
        }
    }
}

impl fmt::Display for BiomarkerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Disease column selection for the heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiseaseFilter {
    All,
    Alzheimers,
    Parkinsons,
    Diabetes,
    Cvd,
    Other(String),
}

impl DiseaseFilter {
    pub fn choices() -> [DiseaseFilter; 5] {
        [
            DiseaseFilter::All,
            DiseaseFilter::Alzheimers,
            DiseaseFilter::Parkinsons,
            DiseaseFilter::Diabetes,
            DiseaseFilter::Cvd,
        ]
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "all" => DiseaseFilter::All,
            "alzheimers" => DiseaseFilter::Alzheimers,
            "parkinsons" => DiseaseFilter::Parkinsons,
            "diabetes" => DiseaseFilter::Diabetes,
            "cvd" => DiseaseFilter::Cvd,
            other => DiseaseFilter::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            DiseaseFilter::All => "all",
            DiseaseFilter::Alzheimers => "alzheimers",
            DiseaseFilter::Parkinsons => "parkinsons",
            DiseaseFilter::Diabetes => "diabetes",
            DiseaseFilter::Cvd => "cvd",
            DiseaseFilter::Other(key) => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DiseaseFilter::All => "All Diseases",
            DiseaseFilter::Alzheimers => "Alzheimer's Disease",
            DiseaseFilter::Parkinsons => "Parkinson's Disease",
            DiseaseFilter::Diabetes => "Type 2 Diabetes",
            DiseaseFilter::Cvd => "Cardiovascular Disease",
            DiseaseFilter::Other(key) => key,
        }
    }
}

/// Age band highlighted on the trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeRange {
    #[default]
    All,
    From20To40,
    From41To60,
    From61To80,
    Over80,
}

impl AgeRange {
    pub const CHOICES: [AgeRange; 5] = [
        AgeRange::All,
        AgeRange::From20To40,
        AgeRange::From41To60,
        AgeRange::From61To80,
        AgeRange::Over80,
    ];

    pub fn from_key(key: &str) -> Self {
        match key {
            "20-40" => AgeRange::From20To40,
            "41-60" => AgeRange::From41To60,
            "61-80" => AgeRange::From61To80,
            "80+" => AgeRange::Over80,
            _ => AgeRange::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeRange::All => "All Ages",
            AgeRange::From20To40 => "20-40 years",
            AgeRange::From41To60 => "41-60 years",
            AgeRange::From61To80 => "61-80 years",
            AgeRange::Over80 => "80+ years",
        }
    }

    /// Inclusive age band, `None` for "all ages". The open-ended band stops
    /// at the last sampled age.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            AgeRange::All => None,
            AgeRange::From20To40 => Some((20.0, 40.0)),
            AgeRange::From41To60 => Some((41.0, 60.0)),
            AgeRange::From61To80 => Some((61.0, 80.0)),
            AgeRange::Over80 => Some((80.0, 90.0)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matrix_rejects_mismatched_row_count() {
        let err = CorrelationMatrix::new(labels(&["a", "b"]), labels(&["x"]), vec![vec![0.1]])
            .unwrap_err();
        assert_eq!(err, MatrixError::RowCount { labels: 2, rows: 1 });
    }

    #[test]
    fn matrix_rejects_ragged_rows() {
        let err = CorrelationMatrix::new(
            labels(&["a", "b"]),
            labels(&["x", "y"]),
            vec![vec![0.1, 0.2], vec![0.3]],
        )
        .unwrap_err();
        assert!(matches!(err, MatrixError::RaggedRow { row: 1, len: 1, expected: 2 }));
    }

    #[test]
    fn matrix_rejects_out_of_range_and_nan() {
        let err = CorrelationMatrix::new(labels(&["a"]), labels(&["x"]), vec![vec![1.5]])
            .unwrap_err();
        assert!(matches!(err, MatrixError::OutOfRange { row: 0, col: 0, .. }));

        assert!(CorrelationMatrix::new(labels(&["a"]), labels(&["x"]), vec![vec![f64::NAN]])
            .is_err());
    }

    #[test]
    fn matrix_from_json_goes_through_validation() {
        let ok: CorrelationMatrix =
            serde_json::from_str(r#"{"rows":["a"],"cols":["x","y"],"values":[[0.5,-0.5]]}"#)
                .unwrap();
        assert_eq!(ok.value(0, 1), -0.5);

        let bad = serde_json::from_str::<CorrelationMatrix>(
            r#"{"rows":["a"],"cols":["x"],"values":[[2.0]]}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn series_set_requires_matching_lengths() {
        let err = SeriesSet::new(vec![20.0, 30.0], vec![("IL-6".into(), vec![1.0])]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::SeriesLength {
                name: "IL-6".into(),
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn value_bounds_spans_all_series() {
        let set = SeriesSet::new(
            vec![20.0, 30.0],
            vec![("a".into(), vec![3.0, 1.0]), ("b".into(), vec![7.0, 2.0])],
        )
        .unwrap();
        assert_eq!(set.value_bounds(), Some((1.0, 7.0)));
        assert_eq!(SeriesSet::new(vec![], vec![]).unwrap().value_bounds(), None);
    }

    #[test]
    fn selectors_round_trip_keys_and_fall_back() {
        for t in BiomarkerType::choices() {
            assert_eq!(BiomarkerType::from_key(t.key()), t);
        }
        for d in DiseaseFilter::choices() {
            assert_eq!(DiseaseFilter::from_key(d.key()), d);
        }
        assert_eq!(
            BiomarkerType::from_key("proteomic"),
            BiomarkerType::Other("proteomic".into())
        );
        assert_eq!(AgeRange::from_key("bogus"), AgeRange::All);
        assert_eq!(AgeRange::from_key("80+").bounds(), Some((80.0, 90.0)));
    }
}
