//! Owner list, owner details, and owner form view models.

#[cfg(test)]
#[path = "owners_test.rs"]
mod owners_test;

use crate::net::types::Owner;

/// Owner list screen.
#[derive(Clone, Debug, Default)]
pub struct OwnerListState {
    pub owners: Vec<Owner>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OwnerListState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Mirror the response; on failure keep the previous list.
    pub fn finish_load(&mut self, result: Result<Vec<Owner>, String>) {
        self.loading = false;
        match result {
            Ok(owners) => self.owners = owners,
            Err(e) => self.error = Some(e),
        }
    }
}

/// Owner details screen: the owner plus each pet's visits.
#[derive(Clone, Debug, Default)]
pub struct OwnerDetailsState {
    pub owner: Option<Owner>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OwnerDetailsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Owner, String>) {
        self.loading = false;
        match result {
            Ok(owner) => self.owner = Some(owner),
            Err(e) => self.error = Some(e),
        }
    }
}

/// Owner create/edit form.
#[derive(Clone, Debug, Default)]
pub struct OwnerFormState {
    pub owner: Owner,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

impl OwnerFormState {
    /// An owner without an id is being created.
    pub fn is_new(&self) -> bool {
        self.owner.id.is_none()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Owner, String>) {
        self.loading = false;
        match result {
            Ok(owner) => self.owner = owner,
            Err(e) => self.error = Some(e),
        }
    }

    /// Mark a submit in flight. Returns `false` if one already is.
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
