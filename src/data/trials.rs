use std::fmt;

// ---------------------------------------------------------------------------
// TrialRecord – one entry of the built-in catalogue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialStatus {
    Recruiting,
    ActiveNotRecruiting,
    NotYetRecruiting,
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrialStatus::Recruiting => "Recruiting",
            TrialStatus::ActiveNotRecruiting => "Active, not recruiting",
            TrialStatus::NotYetRecruiting => "Not yet recruiting",
        })
    }
}

/// A clinical trial listing. Records are static and never mutated.
#[derive(Debug, PartialEq, Eq)]
pub struct TrialRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub status: TrialStatus,
    pub phase: &'static str,
    pub condition: &'static str,
    pub intervention: &'static str,
    pub location: &'static str,
    /// Free-text participation note, e.g. whether remote visits are possible.
    pub participation: &'static str,
    pub last_updated: &'static str,
    pub sponsor: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub biomarkers: &'static [&'static str],
    pub cell_types: &'static [&'static str],
    pub url: &'static str,
}

impl TrialRecord {
    /// First clause of the eligibility text (typically the age bracket).
    pub fn eligibility_summary(&self) -> &'static str {
        self.eligibility
            .split(',')
            .next()
            .unwrap_or(self.eligibility)
    }

    pub fn allows_virtual_participation(&self) -> bool {
        self.participation.to_lowercase().contains("virtual")
    }
}

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

pub static TRIALS: [TrialRecord; 6] = [
    TrialRecord {
        id: "NCT04713839",
        title: "Mesenchymal Stem Cells for the Treatment of Aging Frailty",
        status: TrialStatus::Recruiting,
        phase: "Phase 2",
        condition: "Frailty",
        intervention: "Allogeneic Mesenchymal Stem Cells",
        location: "Miami, Florida, United States",
        participation: "Virtual participation available",
        last_updated: "2023-06-15",
        sponsor: "Longeveron Inc.",
        description: "This study evaluates the safety and efficacy of LMSCs (Longeveron \
            Mesenchymal Stem Cells) in aging frailty. The primary outcome measures include \
            changes in physical function and inflammatory biomarkers.",
        eligibility: "Ages 70-85, Clinical Frailty Scale score 5-7, Able to walk 10 meters \
            independently",
        biomarkers: &["IL-6", "TNF-α", "CRP"],
        cell_types: &["MSC"],
        url: "https://clinicaltrials.gov/study/NCT04713839",
    },
    TrialRecord {
        id: "NCT05116540",
        title: "iPSC-Derived Dopaminergic Neurons for Parkinson's Disease",
        status: TrialStatus::Recruiting,
        phase: "Phase 1",
        condition: "Parkinson's Disease",
        intervention: "iPSC-derived dopaminergic progenitor cells",
        location: "San Francisco, California, United States",
        participation: "On-site participation required",
        last_updated: "2023-08-22",
        sponsor: "University of California, San Francisco",
        description: "This first-in-human study evaluates the safety of transplanting \
            iPSC-derived dopaminergic progenitor cells in patients with advanced Parkinson's \
            disease.",
        eligibility: "Ages 50-75, Diagnosis of idiopathic Parkinson's disease for at least 5 \
            years, Hoehn and Yahr stage 3-4",
        biomarkers: &["α-synuclein", "DJ-1", "LRRK2"],
        cell_types: &["iPSC"],
        url: "https://clinicaltrials.gov/study/NCT05116540",
    },
    TrialRecord {
        id: "NCT04614337",
        title: "Senolytic Therapy to Delay Progression of Alzheimer's Disease",
        status: TrialStatus::ActiveNotRecruiting,
        phase: "Phase 2",
        condition: "Alzheimer's Disease",
        intervention: "Dasatinib + Quercetin",
        location: "Rochester, Minnesota, United States",
        participation: "On-site participation required",
        last_updated: "2023-05-30",
        sponsor: "Mayo Clinic",
        description: "This study evaluates whether senolytic drugs (dasatinib plus quercetin) \
            can reduce senescent cell burden and associated inflammation in patients with early \
            Alzheimer's disease.",
        eligibility: "Ages 65-90, Clinical diagnosis of mild cognitive impairment or early \
            Alzheimer's disease, MMSE score 20-28",
        biomarkers: &["p16INK4a", "SASP factors", "Amyloid-β", "Tau"],
        cell_types: &[],
        url: "https://clinicaltrials.gov/study/NCT04614337",
    },
    TrialRecord {
        id: "NCT05209698",
        title: "Hematopoietic Stem Cell Transplantation for Rejuvenation of the Immune System",
        status: TrialStatus::NotYetRecruiting,
        phase: "Phase 1/2",
        condition: "Immunosenescence",
        intervention: "Autologous HSC transplantation with ex vivo telomere extension",
        location: "Stanford, California, United States",
        participation: "On-site participation required",
        last_updated: "2023-09-10",
        sponsor: "Stanford University",
        description: "This study investigates whether autologous hematopoietic stem cell \
            transplantation with ex vivo telomere extension can rejuvenate the aging immune \
            system.",
        eligibility: "Ages 65-80, Evidence of immunosenescence, No active malignancies or \
            autoimmune diseases",
        biomarkers: &["Telomere length", "CD28- T cells", "TREC levels"],
        cell_types: &["HSC"],
        url: "https://clinicaltrials.gov/study/NCT05209698",
    },
    TrialRecord {
        id: "NCT04815005",
        title: "Neural Stem Cell Therapy for Age-Related Macular Degeneration",
        status: TrialStatus::Recruiting,
        phase: "Phase 1/2",
        condition: "Age-Related Macular Degeneration",
        intervention: "Subretinal transplantation of human NSCs",
        location: "Boston, Massachusetts, United States",
        participation: "On-site participation required",
        last_updated: "2023-07-18",
        sponsor: "Massachusetts Eye and Ear Infirmary",
        description: "This study evaluates the safety and preliminary efficacy of subretinal \
            transplantation of human neural stem cells in patients with geographic atrophy \
            secondary to age-related macular degeneration.",
        eligibility: "Ages 55+, Diagnosis of geographic atrophy, BCVA 20/80 or worse in the \
            study eye",
        biomarkers: &["VEGF", "Complement factors", "Inflammatory cytokines"],
        cell_types: &["NSC"],
        url: "https://clinicaltrials.gov/study/NCT04815005",
    },
    TrialRecord {
        id: "NCT05388461",
        title: "Metformin to Slow Multimorbidity in Older Adults",
        status: TrialStatus::NotYetRecruiting,
        phase: "Phase 3",
        condition: "Age-Related Multimorbidity",
        intervention: "Extended-release metformin",
        location: "Bronx, New York, United States",
        participation: "Virtual participation available",
        last_updated: "2023-10-02",
        sponsor: "Albert Einstein College of Medicine",
        description: "This study tests whether daily metformin delays the onset of a second \
            age-related disease in older adults who already have one, tracking metabolic and \
            inflammatory markers of biological aging.",
        eligibility: "Ages 65-79, One existing age-related chronic disease, No diabetes \
            diagnosis",
        biomarkers: &["HbA1c", "IL-6", "IGF-1", "GDF15"],
        cell_types: &[],
        url: "https://clinicaltrials.gov/study/NCT05388461",
    },
];
