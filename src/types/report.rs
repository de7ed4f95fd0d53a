use crate::types::scoring::ScoreRecord;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_on: NaiveDate,
    pub records: Vec<ScoreRecord>,
}

impl Report {
    pub fn new(mut records: Vec<ScoreRecord>, generated_on: NaiveDate) -> Self {
        records.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        Self {
            generated_on,
            records,
        }
    }

    pub fn leader(&self) -> Option<&ScoreRecord> {
        self.records.first()
    }
}
