//! Named views and their router paths.
//!
//! Controllers return a [`Route`] after a successful submit; pages turn it
//! into a path and hand it to the router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A screen the app can navigate to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Owners,
    OwnerDetails { owner_id: i64 },
    NewOwner,
    EditOwner { owner_id: i64 },
    NewPet { owner_id: i64 },
    EditPet { owner_id: i64, pet_id: i64 },
    Visits { owner_id: i64, pet_id: i64 },
    Vets,
}

impl Route {
    pub fn path(self) -> String {
        match self {
            Self::Welcome => "/".to_owned(),
            Self::Owners => "/owners".to_owned(),
            Self::OwnerDetails { owner_id } => format!("/owners/details/{owner_id}"),
            Self::NewOwner => "/owners/new".to_owned(),
            Self::EditOwner { owner_id } => format!("/owners/{owner_id}/edit"),
            Self::NewPet { owner_id } => format!("/owners/{owner_id}/new-pet"),
            Self::EditPet { owner_id, pet_id } => format!("/owners/{owner_id}/pets/{pet_id}"),
            Self::Visits { owner_id, pet_id } => format!("/owners/{owner_id}/pets/{pet_id}/visits"),
            Self::Vets => "/vets".to_owned(),
        }
    }
}

/// Parse a route parameter as a record id.
///
/// Missing, non-numeric, and zero values are all "no id".
pub fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok()).filter(|id| *id != 0)
}
