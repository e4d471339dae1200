use tracing::{debug, info};

use crate::{
    models::grade::{Grade, GradeError},
    utils::Config,
};

// Grade summary DTO
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub average: f64,
    pub passed: Vec<usize>,
    pub failed: Vec<usize>,
    pub highest: usize,
    pub lowest: usize,
    pub pass_rate: f64,
    pub overall_passed: bool,
}

pub struct GradeService {
    pass_threshold: f64,
    max_grade: f64,
}

impl GradeService {
    pub fn new(pass_threshold: f64, max_grade: f64) -> Self {
        Self {
            pass_threshold,
            max_grade,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.pass_threshold, config.max_grade)
    }

    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }

    pub fn max_grade(&self) -> f64 {
        self.max_grade
    }

    /// Validate and build a grade on this service's scale
    pub fn record(&self, subject: &str, raw_score: &str) -> Result<Grade, GradeError> {
        let grade = Grade::new(subject, raw_score, self.max_grade)?;
        debug!("Recorded grade {} for '{}'", grade.score, grade.subject);
        Ok(grade)
    }

    pub fn average(&self, grades: &[Grade]) -> f64 {
        if grades.is_empty() {
            return 0.0;
        }
        grades.iter().map(|g| g.score).sum::<f64>() / grades.len() as f64
    }

    /// Split grade indices into (passed, failed), preserving input order
    pub fn classify(&self, grades: &[Grade]) -> (Vec<usize>, Vec<usize>) {
        (0..grades.len()).partition(|&i| grades[i].is_passing(self.pass_threshold))
    }

    /// Indices of the (highest, lowest) score. Ties keep the earliest entry.
    pub fn extremes(&self, grades: &[Grade]) -> Option<(usize, usize)> {
        if grades.is_empty() {
            return None;
        }

        let mut highest = 0;
        let mut lowest = 0;
        for (i, grade) in grades.iter().enumerate().skip(1) {
            if grade.score > grades[highest].score {
                highest = i;
            }
            if grade.score < grades[lowest].score {
                lowest = i;
            }
        }

        Some((highest, lowest))
    }

    pub fn summarize(&self, grades: &[Grade]) -> Option<GradeSummary> {
        let (highest, lowest) = self.extremes(grades)?;
        let average = self.average(grades);
        let (passed, failed) = self.classify(grades);
        let pass_rate = passed.len() as f64 / grades.len() as f64 * 100.0;

        info!(
            "Grade summary: {} subjects, average {:.2}, {} passed",
            grades.len(),
            average,
            passed.len()
        );

        Some(GradeSummary {
            average,
            passed,
            failed,
            highest,
            lowest,
            pass_rate,
            overall_passed: average >= self.pass_threshold,
        })
    }
}
