use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// A subject and the score obtained in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    pub subject: String,
    pub score: f64,
}

impl Grade {
    pub fn new(subject: &str, raw_score: &str, max_grade: f64) -> Result<Self, GradeError> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(GradeError::ValidationError(
                "Subject name cannot be empty".to_string(),
            ));
        }

        let score = parse_score(raw_score, max_grade)?;

        Ok(Self {
            subject: subject.to_string(),
            score,
        })
    }

    pub fn is_passing(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

pub fn parse_score(raw: &str, max_grade: f64) -> Result<f64, GradeError> {
    let score: f64 = raw
        .trim()
        .parse()
        .ok()
        .filter(|s: &f64| s.is_finite())
        .ok_or_else(|| GradeError::ValidationError("Please enter a valid number".to_string()))?;

    if !(0.0..=max_grade).contains(&score) {
        return Err(GradeError::ValidationError(format!(
            "Grade must be between 0 and {}",
            max_grade
        )));
    }

    Ok(score)
}
