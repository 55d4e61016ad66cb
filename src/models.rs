use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogRecord {
    pub weight_kg: f64,
    pub current_food: f64,
    pub owners: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DogAssessment {
    pub owners: Vec<String>,
    pub weight_kg: f64,
    pub current_food: f64,
    pub recommended_food: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeVerdict {
    TooMuch,
    TooLittle,
    Exact,
}

#[derive(Debug, Clone)]
pub struct OwnerGroups {
    pub eat_too_much: Vec<String>,
    pub eat_too_little: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub dogs: Vec<DogAssessment>,
    pub owners_eat_too_much: Vec<String>,
    pub owners_eat_too_little: Vec<String>,
    pub any_exact_portion: bool,
    pub any_okay_portion: bool,
    pub okay_portion_dogs: Vec<DogAssessment>,
    pub by_recommended_portion: Vec<DogAssessment>,
}

#[derive(Debug, Clone)]
pub struct BmiSubject {
    pub name: String,
    pub mass_kg: f64,
    pub height_m: f64,
}
