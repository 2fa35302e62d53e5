use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::DashboardConfig;
use crate::data::filter::{filter_trials, FilterCriteria};
use crate::data::generate::{age_series, correlation_matrix, value_label};
use crate::data::model::{AgeRange, BiomarkerType, CorrelationMatrix, DiseaseFilter, SeriesSet};
use crate::data::trials::{TrialRecord, TRIALS};
use crate::predictor::{CellType, Prediction, ProtocolInput};
use crate::render::{heatmap, line_chart, Scene};

// ---------------------------------------------------------------------------
// Delayed reveal
// ---------------------------------------------------------------------------

/// A result that is already computed but only shown once `ready_at` passes.
#[derive(Debug)]
pub struct Pending<T> {
    value: T,
    ready_at: Instant,
}

impl<T> Pending<T> {
    pub fn new(value: T, delay: Duration, now: Instant) -> Self {
        Self {
            value,
            ready_at: now + delay,
        }
    }

    /// Time left before the value may be revealed, `None` once it is ready.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let left = self.ready_at.saturating_duration_since(now);
        (!left.is_zero()).then_some(left)
    }
}

/// Move a ready value out of `slot`. Returns the wait still needed otherwise.
fn reveal<T>(
    slot: &mut Option<Pending<T>>,
    target: &mut Option<T>,
    now: Instant,
) -> Option<Duration> {
    let pending = slot.as_ref()?;
    if let Some(left) = pending.remaining(now) {
        return Some(left);
    }
    *target = slot.take().map(|p| p.value);
    None
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Optimizer,
    Biomarkers,
    Trials,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Optimizer, Tab::Biomarkers, Tab::Trials];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Optimizer => "Protocol Optimizer",
            Tab::Biomarkers => "Biomarker Dashboard",
            Tab::Trials => "Clinical Trials",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartView {
    #[default]
    Heatmap,
    Trends,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsView {
    #[default]
    List,
    Detail,
}

// ---------------------------------------------------------------------------
// Protocol optimizer
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct PredictorState {
    pub input: ProtocolInput,
    pub pending: Option<Pending<Prediction>>,
    pub result: Option<Prediction>,
    pub error: Option<String>,
}

impl PredictorState {
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and schedule the prediction for reveal.
    pub fn submit(&mut self, delay: Duration, now: Instant) {
        match self.input.predict() {
            Ok(prediction) => {
                log::info!(
                    "Predicted {}% success for {:?}",
                    prediction.success,
                    self.input.cell_type
                );
                self.error = None;
                self.pending = Some(Pending::new(prediction, delay, now));
            }
            Err(e) => {
                log::debug!("Rejected protocol form: {e}");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        reveal(&mut self.pending, &mut self.result, now)
    }
}

// ---------------------------------------------------------------------------
// Biomarker dashboard
// ---------------------------------------------------------------------------

pub struct BiomarkerState {
    pub kind: BiomarkerType,
    pub age_range: AgeRange,
    pub disease: DiseaseFilter,
    pub view: ChartView,
    /// Show the trends in a zoomable plot instead of the static chart.
    pub interactive: bool,
    /// File name of an imported matrix shown instead of the mock one.
    pub imported: Option<String>,
    pub matrix: CorrelationMatrix,
    pub series: SeriesSet,
    pub heatmap: Scene,
    pub trends: Scene,
    rng: StdRng,
}

impl BiomarkerState {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_selection(
            seed,
            BiomarkerType::Epigenetic,
            DiseaseFilter::All,
            AgeRange::All,
        )
    }

    /// Start from the selectors named in the configuration file.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::with_selection(
            config.seed,
            BiomarkerType::from_key(&config.biomarker_type),
            DiseaseFilter::from_key(&config.disease_filter),
            AgeRange::from_key(&config.age_range),
        )
    }

    fn with_selection(
        seed: Option<u64>,
        kind: BiomarkerType,
        disease: DiseaseFilter,
        age_range: AgeRange,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let matrix = correlation_matrix(&kind, &disease);
        let series = age_series(&kind, &mut rng);
        let heatmap = heatmap::render(&matrix);
        let trends = line_chart::render(&series, value_label(&kind), age_range.bounds());

        Self {
            kind,
            age_range,
            disease,
            view: ChartView::default(),
            interactive: false,
            imported: None,
            matrix,
            series,
            heatmap,
            trends,
            rng,
        }
    }

    pub fn set_kind(&mut self, kind: BiomarkerType) {
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.regenerate_matrix();
        self.resample();
    }

    pub fn set_disease(&mut self, disease: DiseaseFilter) {
        if disease == self.disease {
            return;
        }
        self.disease = disease;
        self.regenerate_matrix();
    }

    pub fn set_age_range(&mut self, age_range: AgeRange) {
        if age_range == self.age_range {
            return;
        }
        self.age_range = age_range;
        self.redraw_trends();
    }

    /// Draw a fresh jittered trend sample.
    pub fn resample(&mut self) {
        self.series = age_series(&self.kind, &mut self.rng);
        log::info!(
            "Sampled {} trend series for {}",
            self.series.series().len(),
            self.kind
        );
        self.redraw_trends();
    }

    /// Drop an imported matrix and go back to the generated one.
    pub fn use_sample_data(&mut self) {
        self.imported = None;
        self.regenerate_matrix();
        self.resample();
    }

    pub fn import(&mut self, matrix: CorrelationMatrix, source: String) {
        log::info!(
            "Showing imported {}×{} matrix from {source}",
            matrix.rows().len(),
            matrix.cols().len()
        );
        self.matrix = matrix;
        self.imported = Some(source);
        self.heatmap = heatmap::render(&self.matrix);
    }

    fn regenerate_matrix(&mut self) {
        if self.imported.is_some() {
            return;
        }
        self.matrix = correlation_matrix(&self.kind, &self.disease);
        log::info!(
            "Generated {}×{} correlation matrix ({} / {})",
            self.matrix.rows().len(),
            self.matrix.cols().len(),
            self.kind,
            self.disease.key()
        );
        self.heatmap = heatmap::render(&self.matrix);
    }

    fn redraw_trends(&mut self) {
        self.trends = line_chart::render(
            &self.series,
            value_label(&self.kind),
            self.age_range.bounds(),
        );
    }
}

// ---------------------------------------------------------------------------
// Trial search
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct TrialSearchState {
    pub criteria: FilterCriteria,
    pub pending: Option<Pending<Vec<&'static TrialRecord>>>,
    /// `None` until the first search completes.
    pub results: Option<Vec<&'static TrialRecord>>,
    pub view: ResultsView,
}

impl TrialSearchState {
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn search(&mut self, delay: Duration, now: Instant) {
        let found = filter_trials(&TRIALS, &self.criteria);
        log::info!("Trial search {:?} matched {} records", self.criteria, found.len());
        self.pending = Some(Pending::new(found, delay, now));
    }

    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        reveal(&mut self.pending, &mut self.results, now)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,
    pub tab: Tab,
    pub predictor: PredictorState,
    pub biomarkers: BiomarkerState,
    pub trials: TrialSearchState,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let mut predictor = PredictorState::default();
        predictor.input.cell_type = config.cell_type.as_deref().and_then(CellType::from_key);
        Self {
            biomarkers: BiomarkerState::from_config(&config),
            config,
            tab: Tab::default(),
            predictor,
            trials: TrialSearchState::default(),
            status_message: None,
        }
    }

    /// Reveal any finished delayed results; returns the shortest wait left.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let a = self.predictor.poll(now);
        let b = self.trials.poll(now);
        match (a, b) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn pending_reveals_after_delay() {
        let start = Instant::now();
        let mut slot = Some(Pending::new(7, SECOND, start));
        let mut target = None;

        assert_eq!(reveal(&mut slot, &mut target, start), Some(SECOND));
        assert!(target.is_none());

        assert_eq!(reveal(&mut slot, &mut target, start + SECOND), None);
        assert_eq!(target, Some(7));
        assert!(slot.is_none());
    }

    #[test]
    fn predictor_submit_and_poll() {
        let start = Instant::now();
        let mut state = PredictorState::default();
        state.input.cell_type = Some(CellType::Msc);
        state.input.growth_factors = "TGF-β, FGF2".into();

        state.submit(Duration::from_millis(1500), start);
        assert!(state.loading());
        assert!(state.poll(start + SECOND).is_some());
        assert!(state.result.is_none());

        assert!(state.poll(start + 2 * SECOND).is_none());
        assert!(!state.loading());
        assert_eq!(state.result.as_ref().map(|p| p.success), Some(90));
    }

    #[test]
    fn invalid_form_sets_error_without_scheduling() {
        let mut state = PredictorState::default();
        state.submit(SECOND, Instant::now());
        assert!(!state.loading());
        assert_eq!(state.error.as_deref(), Some("select a cell type"));
    }

    #[test]
    fn search_reveals_filtered_records() {
        let start = Instant::now();
        let mut state = TrialSearchState::default();
        state.criteria.cell_type = "MSC".into();
        state.search(SECOND, start);
        assert!(state.poll(start).is_some());
        assert!(state.poll(start + SECOND).is_none());
        let ids: Vec<_> = state.results.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["NCT04713839"]);
    }

    #[test]
    fn selector_changes_regenerate_scenes() {
        let mut state = BiomarkerState::new(Some(5));
        assert_eq!(state.matrix.cols().len(), 7);

        state.set_disease(DiseaseFilter::Parkinsons);
        assert_eq!(state.matrix.cols(), ["Parkinson's Disease"]);
        assert!(state.heatmap.texts().any(|t| t == "Parkinson's Disease"));

        state.set_kind(BiomarkerType::Telomere);
        assert_eq!(state.matrix.rows().len(), 4);
        assert_eq!(state.series.series().len(), 2);
        assert!(state.trends.texts().any(|t| t == "Telomere Length (kb)"));
    }

    #[test]
    fn unchanged_selection_keeps_the_sample() {
        let mut state = BiomarkerState::new(Some(5));
        let before = state.trends.clone();
        state.set_kind(BiomarkerType::Epigenetic);
        assert_eq!(state.trends, before);
    }

    #[test]
    fn age_range_adds_band_without_resampling() {
        let mut state = BiomarkerState::new(Some(5));
        let series = state.series.clone();
        state.set_age_range(AgeRange::From61To80);
        assert_eq!(state.series, series);
        assert!(matches!(
            state.trends.primitives.first(),
            Some(Primitive::FillRect { .. })
        ));
    }

    #[test]
    fn imported_matrix_survives_selector_changes() {
        let mut state = BiomarkerState::new(Some(5));
        let matrix =
            CorrelationMatrix::new(vec!["IL-6".into()], vec!["Frailty".into()], vec![vec![0.4]])
                .unwrap();
        state.import(matrix.clone(), "mine.csv".into());
        state.set_disease(DiseaseFilter::Cvd);
        assert_eq!(state.matrix, matrix);

        state.use_sample_data();
        assert!(state.imported.is_none());
        assert_eq!(state.matrix.cols(), ["Cardiovascular Disease"]);
    }

    #[test]
    fn configured_selection_is_applied() {
        let config = DashboardConfig {
            seed: Some(3),
            biomarker_type: "metabolic".into(),
            disease_filter: "diabetes".into(),
            age_range: "41-60".into(),
            cell_type: Some("hsc".into()),
            ..DashboardConfig::default()
        };
        let state = AppState::new(config);
        assert_eq!(state.biomarkers.kind, BiomarkerType::Metabolic);
        assert_eq!(state.biomarkers.matrix.cols(), ["Type 2 Diabetes"]);
        assert_eq!(state.biomarkers.age_range, AgeRange::From41To60);
        assert_eq!(state.predictor.input.cell_type, Some(CellType::Hsc));
    }
}
