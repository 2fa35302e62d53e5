use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Ipsc,
    Msc,
    Hsc,
    Nsc,
}

impl CellType {
    pub const ALL: [CellType; 4] = [CellType::Ipsc, CellType::Msc, CellType::Hsc, CellType::Nsc];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ipsc" => Some(CellType::Ipsc),
            "msc" => Some(CellType::Msc),
            "hsc" => Some(CellType::Hsc),
            "nsc" => Some(CellType::Nsc),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CellType::Ipsc => "Induced Pluripotent Stem Cells (iPSCs)",
            CellType::Msc => "Mesenchymal Stem Cells (MSCs)",
            CellType::Hsc => "Hematopoietic Stem Cells (HSCs)",
            CellType::Nsc => "Neural Stem Cells (NSCs)",
        }
    }

    fn base_score(&self) -> u32 {
        match self {
            CellType::Ipsc => 30,
            CellType::Msc => 40,
            CellType::Hsc => 35,
            CellType::Nsc => 0,
        }
    }
}

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 35.0..=39.0;
pub const PH_RANGE: RangeInclusive<f64> = 6.8..=8.0;

const OPTIMAL_TEMPERATURE: RangeInclusive<f64> = 36.5..=37.5;
const OPTIMAL_PH: RangeInclusive<f64> = 7.2..=7.6;
const MAX_SUCCESS: u32 = 95;
/// Below this score the protocol gets improvement suggestions.
const ADVICE_THRESHOLD: u32 = 50;
const CONFIDENT_THRESHOLD: u32 = 70;

/// The protocol form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolInput {
    pub cell_type: Option<CellType>,
    /// Comma separated, free text.
    pub growth_factors: String,
    /// Culture temperature in °C.
    pub temperature: f64,
    pub ph: f64,
}

impl Default for ProtocolInput {
    fn default() -> Self {
        Self {
            cell_type: None,
            growth_factors: String::new(),
            temperature: 37.0,
            ph: 7.4,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("select a cell type")]
    MissingCellType,
    #[error("enter at least one growth factor")]
    MissingGrowthFactors,
}

// ---------------------------------------------------------------------------
// Prediction
// ---------------------------------------------------------------------------

pub const LOOKS_GOOD: &str = "Your protocol looks good! No specific recommendations.";
const ROCK_INHIBITOR: &str = "Consider adding ROCK inhibitor Y-27632 to improve iPSC survival";
const ADD_FGF2: &str = "Add FGF2 (10ng/ml) to your growth factor cocktail";
const LOW_OXYGEN: &str = "Optimize oxygen levels to 5% for better outcomes";

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Success probability in percent, at most 95.
    pub success: u32,
    pub recommendations: Vec<String>,
}

impl Prediction {
    pub fn is_confident(&self) -> bool {
        self.success >= CONFIDENT_THRESHOLD
    }

    pub fn headline(&self) -> &'static str {
        if self.is_confident() {
            "High probability of success"
        } else {
            "Protocol may need optimization"
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Based on our analysis, your protocol has a {}% chance of success.",
            self.success
        )
    }
}

impl ProtocolInput {
    /// Required fields: a cell type and a non-blank growth factor list.
    pub fn validate(&self) -> Result<CellType, ValidationError> {
        let cell_type = self.cell_type.ok_or(ValidationError::MissingCellType)?;
        if self.growth_factors.trim().is_empty() {
            return Err(ValidationError::MissingGrowthFactors);
        }
        Ok(cell_type)
    }

    /// Additive heuristic score plus advice for weak protocols.
    pub fn predict(&self) -> Result<Prediction, ValidationError> {
        let cell_type = self.validate()?;
        let factors = self.growth_factors.to_lowercase();

        let mut success = cell_type.base_score();
        if factors.contains("tgf") {
            success += 15;
        }
        if OPTIMAL_TEMPERATURE.contains(&self.temperature) {
            success += 20;
        }
        if OPTIMAL_PH.contains(&self.ph) {
            success += 15;
        }
        let success = success.min(MAX_SUCCESS);

        let mut recommendations = Vec::new();
        if success < ADVICE_THRESHOLD {
            if cell_type == CellType::Ipsc {
                recommendations.push(ROCK_INHIBITOR.to_string());
            }
            if !factors.contains("fgf") {
                recommendations.push(ADD_FGF2.to_string());
            }
            recommendations.push(LOW_OXYGEN.to_string());
        }
        if recommendations.is_empty() {
            recommendations.push(LOOKS_GOOD.to_string());
        }

        Ok(Prediction {
            success,
            recommendations,
        })
    }
}
