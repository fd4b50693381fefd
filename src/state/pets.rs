//! Pet create/edit form view model.

#[cfg(test)]
#[path = "pets_test.rs"]
mod pets_test;

use crate::net::types::{Pet, PetRequest, PetType};

/// Type preselected for a new pet.
pub const DEFAULT_PET_TYPE_ID: i64 = 1;

/// Pet form nested under an owner.
#[derive(Clone, Debug, Default)]
pub struct PetFormState {
    pub pet_types: Vec<PetType>,
    pub pet: Pet,
    /// Chosen type; sent as `typeId`.
    pub pet_type_id: i64,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
}

/// What a pet form activation produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PetFormData {
    pub pet_types: Vec<PetType>,
    pub pet: Pet,
    pub pet_type_id: i64,
}

impl PetFormData {
    /// Editing an existing pet: preselect its current type.
    pub fn editing(pet_types: Vec<PetType>, pet: Pet) -> Self {
        let pet_type_id = pet.pet_type.as_ref().map_or(DEFAULT_PET_TYPE_ID, |t| t.id);
        Self { pet_types, pet, pet_type_id }
    }

    /// Creating a pet for the named owner.
    pub fn creating(pet_types: Vec<PetType>, owner_name: String) -> Self {
        let pet = Pet { owner: Some(owner_name), ..Pet::default() };
        Self { pet_types, pet, pet_type_id: DEFAULT_PET_TYPE_ID }
    }
}

impl PetFormState {
    pub fn is_new(&self) -> bool {
        self.pet.id.is_none()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Fold in activation results. Pet types that loaded are kept even when
    /// the pet/owner read failed.
    pub fn finish_load(&mut self, result: Result<PetFormData, (Vec<PetType>, String)>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.pet_types = data.pet_types;
                self.pet = data.pet;
                self.pet_type_id = data.pet_type_id;
            }
            Err((pet_types, e)) => {
                if !pet_types.is_empty() {
                    self.pet_types = pet_types;
                }
                self.error = Some(e);
            }
        }
    }

    /// Request body for submit.
    pub fn to_request(&self) -> PetRequest {
        PetRequest {
            id: self.pet.id.unwrap_or(0),
            name: self.pet.name.clone(),
            birth_date: self.pet.birth_date.clone().filter(|d| !d.is_empty()),
            type_id: self.pet_type_id,
        }
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
