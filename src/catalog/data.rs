//! Built-in reference data: conditions, formulas, research papers and
//! regional trends shown by the demo.

use crate::models::{owned, Condition, Formula, RegionTrend, ResearchPaper};

pub fn conditions() -> Vec<Condition> {
    vec![
        Condition {
            id: 1,
            name: "Hypertension".into(),
            description:
                "High blood pressure that can lead to heart disease and stroke if untreated."
                    .into(),
            symptoms: owned(&["Headaches", "Shortness of breath", "Nosebleeds", "Dizziness"]),
            causes: owned(&[
                "Genetic factors",
                "Age",
                "Obesity",
                "High sodium intake",
                "Stress",
            ]),
        },
        Condition {
            id: 2,
            name: "Type 2 Diabetes".into(),
            description: "A chronic condition affecting how the body processes blood sugar."
                .into(),
            symptoms: owned(&[
                "Increased thirst",
                "Frequent urination",
                "Increased hunger",
                "Weight loss",
                "Fatigue",
            ]),
            causes: owned(&[
                "Genetic factors",
                "Obesity",
                "Physical inactivity",
                "Age",
                "Poor diet",
            ]),
        },
        Condition {
            id: 3,
            name: "Respiratory Infection".into(),
            description:
                "Infection affecting the respiratory tract including nose, throat and lungs."
                    .into(),
            symptoms: owned(&["Cough", "Sore throat", "Runny nose", "Fever", "Body aches"]),
            causes: owned(&[
                "Viral infection",
                "Bacterial infection",
                "Allergens",
                "Environmental pollutants",
            ]),
        },
    ]
}

pub fn formulas() -> Vec<Formula> {
    vec![
        Formula {
            id: 1,
            condition_id: 1,
            name: "Natural BP Support Formula".into(),
            components: owned(&[
                "Hibiscus extract",
                "Hawthorn berry",
                "Garlic extract",
                "Magnesium",
                "Potassium",
            ]),
            description: "A natural formula that may help maintain healthy blood pressure levels."
                .into(),
            effectiveness: 82,
            research_basis: "Clinical studies show these components may help reduce systolic and diastolic blood pressure.".into(),
        },
        Formula {
            id: 2,
            condition_id: 2,
            name: "Glucose Balance Complex".into(),
            components: owned(&[
                "Cinnamon bark extract",
                "Chromium picolinate",
                "Gymnema sylvestre",
                "Alpha-lipoic acid",
                "Bitter melon extract",
            ]),
            description: "Supports healthy glucose metabolism and insulin sensitivity.".into(),
            effectiveness: 75,
            research_basis: "Research indicates these natural compounds may help improve insulin function and glucose utilization.".into(),
        },
        Formula {
            id: 3,
            condition_id: 3,
            name: "Respiratory Support Blend".into(),
            components: owned(&[
                "Elderberry extract",
                "N-acetyl cysteine",
                "Vitamin C",
                "Zinc",
                "Echinacea",
            ]),
            description: "Supports immune function and respiratory health during infections."
                .into(),
            effectiveness: 78,
            research_basis: "Studies suggest these components may reduce duration and severity of respiratory symptoms.".into(),
        },
    ]
}

pub fn research_papers() -> Vec<ResearchPaper> {
    vec![
        ResearchPaper {
            id: 1,
            title: "Efficacy of Natural Compounds in Hypertension Management".into(),
            authors: owned(&["Johnson, M.", "Smith, A.", "Williams, R."]),
            journal: "Journal of Natural Medicine".into(),
            year: 2023,
            abstract_text: "This study examines the effectiveness of hibiscus extract, hawthorn berry, and garlic extract in managing hypertension through a double-blind placebo-controlled trial.".into(),
            keywords: owned(&["hypertension", "natural compounds", "clinical trial"]),
            relevant_formulas: owned(&["Natural BP Support Formula"]),
        },
        ResearchPaper {
            id: 2,
            title: "Botanical Interventions for Type 2 Diabetes: A Systematic Review".into(),
            authors: owned(&["Chen, L.", "Patel, S.", "Garcia, J."]),
            journal: "International Journal of Herbal Medicine".into(),
            year: 2022,
            abstract_text: "A comprehensive review of botanical interventions for type 2 diabetes, focusing on cinnamon, gymnema sylvestre, and bitter melon extract.".into(),
            keywords: owned(&["diabetes", "botanical interventions", "systematic review"]),
            relevant_formulas: owned(&["Glucose Balance Complex", "Metabolic Balance Formula"]),
        },
        ResearchPaper {
            id: 3,
            title: "Anti-inflammatory Effects of Turmeric and Boswellia in Joint Health".into(),
            authors: owned(&["Singh, P.", "Anderson, K.", "Lee, H."]),
            journal: "Rheumatology Research".into(),
            year: 2023,
            abstract_text: "This research explores the synergistic effects of turmeric and boswellia serrata extracts on inflammatory markers in patients with osteoarthritis.".into(),
            keywords: owned(&["anti-inflammatory", "turmeric", "boswellia", "joint health"]),
            relevant_formulas: owned(&["Joint Comfort Formula"]),
        },
        ResearchPaper {
            id: 4,
            title: "Elderberry Extract in Upper Respiratory Tract Infections: A Meta-analysis"
                .into(),
            authors: owned(&["Brown, T.", "Miller, E.", "Thompson, S."]),
            journal: "Phytomedicine International".into(),
            year: 2021,
            abstract_text: "A meta-analysis of clinical trials investigating the efficacy of elderberry extract in reducing duration and severity of upper respiratory tract infections.".into(),
            keywords: owned(&["elderberry", "respiratory infections", "meta-analysis"]),
            relevant_formulas: owned(&["Respiratory Support Blend"]),
        },
        ResearchPaper {
            id: 5,
            title: "Herbal Approaches to Digestive Health: Focus on GERD Management".into(),
            authors: owned(&["Lopez, R.", "Kim, J.", "Patel, A."]),
            journal: "Digestive Health Research".into(),
            year: 2022,
            abstract_text: "An investigation into traditional herbal remedies including licorice, aloe vera, and slippery elm in the management of gastroesophageal reflux disease symptoms.".into(),
            keywords: owned(&["GERD", "digestive health", "herbal medicine"]),
            relevant_formulas: owned(&["Digestive Harmony Blend"]),
        },
    ]
}

pub fn region_trends() -> Vec<RegionTrend> {
    vec![
        RegionTrend {
            region: "North America".into(),
            top_conditions: owned(&["Obesity", "Hypertension", "Diabetes"]),
            prevalence: vec![23, 18, 12],
        },
        RegionTrend {
            region: "Europe".into(),
            top_conditions: owned(&[
                "Cardiovascular Disease",
                "Mental Health Disorders",
                "Cancer",
            ]),
            prevalence: vec![19, 16, 14],
        },
        RegionTrend {
            region: "Asia".into(),
            top_conditions: owned(&[
                "Respiratory Disease",
                "Gastrointestinal Disorders",
                "Hypertension",
            ]),
            prevalence: vec![22, 15, 13],
        },
        RegionTrend {
            region: "Africa".into(),
            top_conditions: owned(&[
                "Infectious Disease",
                "Malnutrition",
                "Respiratory Infections",
            ]),
            prevalence: vec![27, 21, 17],
        },
    ]
}
