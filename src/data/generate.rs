use std::f64::consts::PI;

use rand::Rng;

use super::model::{BiomarkerType, CorrelationMatrix, DiseaseFilter, SeriesSet};

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

/// Sampled ages shared by every trend series.
pub const AGES: [f64; 8] = [20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

/// Multiplicative jitter applied to every trend value.
pub const JITTER: std::ops::RangeInclusive<f64> = 0.85..=1.15;

const ALL_DISEASES: [&str; 7] = [
    "Alzheimer's Disease",
    "Parkinson's Disease",
    "Type 2 Diabetes",
    "Cardiovascular Disease",
    "Cancer",
    "Accelerated Aging",
    "Frailty",
];

/// Heatmap rows for a biomarker family.
pub fn heatmap_biomarkers(kind: &BiomarkerType) -> &'static [&'static str] {
    match kind {
        BiomarkerType::Epigenetic => &[
            "DNAm GrimAge",
            "DNAm PhenoAge",
            "Horvath Clock",
            "Hannum Clock",
            "DunedinPACE",
        ],
        BiomarkerType::Telomere => &[
            "Leukocyte TL",
            "Buccal Cell TL",
            "Lymphocyte TL",
            "Granulocyte TL",
        ],
        BiomarkerType::Inflammatory => &["IL-6", "TNF-α", "CRP", "IL-1β", "IL-10", "IFN-γ"],
        BiomarkerType::Metabolic => &[
            "Glucose",
            "Insulin",
            "HbA1c",
            "Cholesterol",
            "Triglycerides",
            "HDL",
            "LDL",
        ],
        BiomarkerType::Other(_) => &["Biomarker 1", "Biomarker 2", "Biomarker 3", "Biomarker 4"],
    }
}

/// Trend chart series for a biomarker family (a shorter subset).
pub fn trend_biomarkers(kind: &BiomarkerType) -> &'static [&'static str] {
    match kind {
        BiomarkerType::Epigenetic => &["DNAm GrimAge", "DNAm PhenoAge", "Horvath Clock"],
        BiomarkerType::Telomere => &["Leukocyte TL", "Lymphocyte TL"],
        BiomarkerType::Inflammatory => &["IL-6", "CRP", "TNF-α"],
        BiomarkerType::Metabolic => &["Glucose", "HbA1c", "Cholesterol"],
        BiomarkerType::Other(_) => &["Biomarker 1", "Biomarker 2"],
    }
}

/// Heatmap columns for a disease filter. An unrecognised filter becomes its
/// own single column.
pub fn diseases(filter: &DiseaseFilter) -> Vec<String> {
    match filter {
        DiseaseFilter::All => ALL_DISEASES.iter().map(|d| d.to_string()).collect(),
        DiseaseFilter::Other(key) => vec![key.clone()],
        named => vec![named.label().to_string()],
    }
}

/// Y-axis title of the trend chart.
pub fn value_label(kind: &BiomarkerType) -> &'static str {
    match kind {
        BiomarkerType::Epigenetic => "Epigenetic Age (years)",
        BiomarkerType::Telomere => "Telomere Length (kb)",
        BiomarkerType::Inflammatory => "Inflammatory Marker Level (pg/mL)",
        BiomarkerType::Metabolic => "Metabolic Marker Level (mg/dL)",
        BiomarkerType::Other(_) => "Biomarker Value",
    }
}

// ---------------------------------------------------------------------------
// Correlation matrix
// ---------------------------------------------------------------------------

fn correlation(kind: &BiomarkerType, disease: &str, i: usize, j: usize, cells: usize) -> f64 {
    let base = ((i * j) as f64 / cells as f64 * PI).sin();
    match kind {
        BiomarkerType::Epigenetic if disease.contains("Alzheimer") => base.abs() * 0.8,
        BiomarkerType::Telomere if disease.contains("Aging") => -base.abs() * 0.9,
        _ => base,
    }
}

/// Deterministic biomarker × disease correlation grid.
pub fn correlation_matrix(kind: &BiomarkerType, filter: &DiseaseFilter) -> CorrelationMatrix {
    let rows: Vec<String> = heatmap_biomarkers(kind)
        .iter()
        .map(|b| b.to_string())
        .collect();
    let cols = diseases(filter);
    let cells = rows.len() * cols.len();

    let values = (0..rows.len())
        .map(|i| {
            cols.iter()
                .enumerate()
                .map(|(j, disease)| correlation(kind, disease, i, j, cells))
                .collect()
        })
        .collect();

    CorrelationMatrix::from_generated(rows, cols, values)
}

// ---------------------------------------------------------------------------
// Age trend series
// ---------------------------------------------------------------------------

/// Noise-free value of a trend at sample index `i` (age `age`).
pub fn trend_base(kind: &BiomarkerType, i: usize, age: f64) -> f64 {
    let n = AGES.len() as f64;
    let i = i as f64;
    match kind {
        BiomarkerType::Epigenetic => age * (1.0 + (i / n) * 0.5),
        BiomarkerType::Telomere => 100.0 - age * 0.8 - i * i,
        BiomarkerType::Inflammatory => {
            20.0 + if age > 50.0 {
                (age - 50.0) * 1.5
            } else {
                age * 0.2
            }
        }
        BiomarkerType::Metabolic => 80.0 + (age / 10.0).sin() * 20.0 + age / 10.0,
        BiomarkerType::Other(_) => 0.0,
    }
}

/// Jittered age trends, one series per trend biomarker.
pub fn age_series<R: Rng>(kind: &BiomarkerType, rng: &mut R) -> SeriesSet {
    let series = trend_biomarkers(kind)
        .iter()
        .map(|name| {
            let values = AGES
                .iter()
                .enumerate()
                .map(|(i, &age)| trend_base(kind, i, age) * rng.gen_range(JITTER))
                .collect();
            (name.to_string(), values)
        })
        .collect();

    SeriesSet::from_generated(AGES.to_vec(), series)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
