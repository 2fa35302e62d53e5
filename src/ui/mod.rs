pub mod biomarkers;
pub mod canvas;
pub mod panels;
pub mod plot;
pub mod predictor;
pub mod trials;
