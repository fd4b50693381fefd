#[cfg(test)]
#[path = "vets_test.rs"]
mod vets_test;

use crate::net::types::Vet;

/// Vet list screen.
#[derive(Clone, Debug, Default)]
pub struct VetListState {
    pub vets: Vec<Vet>,
    pub loading: bool,
    pub error: Option<String>,
}

impl VetListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Vet>, String>) {
        self.loading = false;
        match result {
            Ok(vets) => self.vets = vets,
            Err(e) => self.error = Some(e),
        }
    }
}
