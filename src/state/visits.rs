//! Visit list and new-visit form view model.

#[cfg(test)]
#[path = "visits_test.rs"]
mod visits_test;

use crate::net::types::{Visit, VisitRequest};

pub const UNKNOWN_PET_TEXT: &str = "Unknown pet.";

/// Visits screen for one pet.
#[derive(Clone, Debug, Default)]
pub struct VisitsState {
    pub visits: Vec<Visit>,
    /// `yyyy-MM-dd`, as bound to the date input.
    pub date: String,
    pub description: String,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl VisitsState {
    /// Empty form dated `today`.
    pub fn new(today: time::Date) -> Self {
        Self { date: today.to_string(), ..Self::default() }
    }

    /// Both route ids, or `None` with the error set when either is missing.
    pub fn require_route(&mut self, owner_id: Option<i64>, pet_id: Option<i64>) -> Option<(i64, i64)> {
        let ids = owner_id.zip(pet_id);
        if ids.is_none() {
            self.error = Some(UNKNOWN_PET_TEXT.to_owned());
        }
        ids
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Visit>, String>) {
        self.loading = false;
        match result {
            Ok(visits) => self.visits = visits,
            Err(e) => self.error = Some(e),
        }
    }

    /// Visits belonging to `pet_id`; visits without a pet reference are
    /// kept, and `None` keeps everything.
    pub fn visits_for(&self, pet_id: Option<i64>) -> Vec<Visit> {
        self.visits
            .iter()
            .filter(|v| match (pet_id, v.pet_id) {
                (Some(wanted), Some(actual)) => wanted == actual,
                _ => true,
            })
            .cloned()
            .collect()
    }

    pub fn to_request(&self) -> VisitRequest {
        VisitRequest { date: self.date.clone(), description: self.description.clone() }
    }

    pub fn begin_submit(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        self.error = None;
        true
    }

    pub fn finish_submit<T>(&mut self, result: &Result<T, String>) {
        self.saving = false;
        if let Err(e) = result {
            self.error = Some(e.clone());
        }
    }
}

/// Today's date in UTC.
pub fn today() -> time::Date {
    time::OffsetDateTime::now_utc().date()
}
