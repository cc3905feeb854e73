//! Vaccine reference data
//!
//! The catalog is fixed at compile time. Order matters: the dose projector
//! walks it front to back and keeps that order for reminders due on the same
//! instant.

use serde::Serialize;

/// A vaccine and its dosing regimen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vaccine {
    pub id: &'static str,
    pub name: &'static str,
    pub diseases: &'static [&'static str],
    /// Total doses in the regimen, always positive
    pub doses: u32,
    /// Recommended age, free text
    pub age: &'static str,
    /// Human readable interval description
    pub dose_interval: &'static str,
    /// Interval used for scheduling the next dose, if known
    pub dose_interval_days: Option<u32>,
}

impl Vaccine {
    /// Whether a next-dose date can be projected for this vaccine
    #[inline]
    pub fn is_schedulable(&self) -> bool {
        self.dose_interval_days.is_some()
    }
}

/// The national immunization schedule
pub static VACCINE_CATALOG: &[Vaccine] = &[
    Vaccine {
        id: "BCG",
        name: "BCG (Bacillus Calmette-Guerin)",
        diseases: &["Tuberculosis"],
        doses: 1,
        age: "At Birth",
        dose_interval: "Single dose",
        dose_interval_days: None,
    },
    Vaccine {
        id: "HepB",
        name: "Hepatitis B",
        diseases: &["Hepatitis B"],
        doses: 3,
        age: "Birth, 6 Weeks, 6 Months",
        dose_interval: "1st at birth, 2nd after 1-2 months, 3rd after 6-18 months from 1st",
        dose_interval_days: Some(30),
    },
    Vaccine {
        id: "OPV",
        name: "Oral Polio Vaccine (OPV)",
        diseases: &["Poliomyelitis"],
        doses: 4,
        age: "Birth, 6, 10, 14 Weeks",
        dose_interval: "At birth, then 3 doses at 4-week intervals",
        dose_interval_days: Some(28),
    },
    Vaccine {
        id: "IPV",
        name: "Inactivated Polio Vaccine (IPV)",
        diseases: &["Poliomyelitis"],
        doses: 2,
        age: "6 and 14 Weeks",
        dose_interval: "Two fractional doses at 6 and 14 weeks of age",
        dose_interval_days: Some(56),
    },
    Vaccine {
        id: "Penta",
        name: "Pentavalent Vaccine",
        diseases: &["Diphtheria", "Tetanus", "Pertussis", "Hepatitis B", "Hib"],
        doses: 3,
        age: "6, 10, 14 Weeks",
        dose_interval: "Three doses at 4-week intervals",
        dose_interval_days: Some(28),
    },
    Vaccine {
        id: "RVV",
        name: "Rotavirus Vaccine (RVV)",
        diseases: &["Rotavirus"],
        doses: 3,
        age: "6, 10, 14 Weeks",
        dose_interval: "Three doses at 4-week intervals",
        dose_interval_days: Some(28),
    },
    Vaccine {
        id: "PCV",
        name: "Pneumococcal Conjugate Vaccine (PCV)",
        diseases: &["Pneumonia", "Meningitis"],
        doses: 3,
        age: "6, 14 Weeks & 9-12 Months",
        dose_interval: "Two primary doses, then a booster dose after 9 months of age",
        dose_interval_days: Some(56),
    },
    Vaccine {
        id: "MMR",
        name: "MMR Vaccine",
        diseases: &["Mumps", "Measles", "Rubella"],
        doses: 2,
        age: "9-12 Months, 16-24 Months",
        dose_interval: "1st dose at 9-12 months, 2nd dose at 16-24 months",
        dose_interval_days: Some(120),
    },
    Vaccine {
        id: "DPT-Booster",
        name: "DPT Booster",
        diseases: &["Diphtheria", "Tetanus", "Pertussis"],
        doses: 2,
        age: "16-24 Months, 5-6 Years",
        dose_interval: "First booster at 16-24 months, second at 5-6 years",
        dose_interval_days: Some(1095),
    },
    Vaccine {
        id: "Td",
        name: "Td/Tdap",
        diseases: &["Tetanus", "Diphtheria", "Pertussis"],
        doses: 1,
        age: "10 Years & 16 years",
        dose_interval: "One dose at 10 years and another at 16 years",
        dose_interval_days: None,
    },
    Vaccine {
        id: "COVID19",
        name: "COVID-19 Vaccine",
        diseases: &["COVID-19"],
        doses: 2,
        age: "Adults",
        dose_interval: "Intervals vary by vaccine type (e.g., 3-8 weeks)",
        dose_interval_days: Some(21),
    },
];

/// Look up a vaccine by its catalog id
pub fn find_vaccine(id: &str) -> Option<&'static Vaccine> {
    VACCINE_CATALOG.iter().find(|v| v.id == id)
}
