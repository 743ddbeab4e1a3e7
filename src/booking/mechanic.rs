use serde::{Deserialize, Serialize};

use crate::errors::VelofixError;

/// A mechanic a customer can book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mechanic {
    pub id: String,
    pub name: String,
    /// Average customer rating out of 5.
    pub rating: f64,
    pub specialties: Vec<String>,
    pub is_available: bool,
}

struct MechanicSeed {
    id: &'static str,
    name: &'static str,
    rating: f64,
    specialties: &'static [&'static str],
    is_available: bool,
}

static REFERENCE_MECHANICS: &[MechanicSeed] = &[
    MechanicSeed {
        id: "mech-1",
        name: "Mike Rodriguez",
        rating: 4.9,
        specialties: &["Road Bikes", "Mountain Bikes", "E-bikes"],
        is_available: true,
    },
    MechanicSeed {
        id: "mech-2",
        name: "Sarah Chen",
        rating: 4.8,
        specialties: &["Urban Bikes", "Fixies", "Vintage Bikes"],
        is_available: true,
    },
];

/// Mechanics that bookings may be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    mechanics: Vec<Mechanic>,
}

impl Roster {
    pub fn new(mechanics: Vec<Mechanic>) -> Self {
        Self { mechanics }
    }

    pub fn reference() -> Self {
        let mechanics = REFERENCE_MECHANICS
            .iter()
            .map(|seed| Mechanic {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                rating: seed.rating,
                specialties: seed.specialties.iter().map(|s| s.to_string()).collect(),
                is_available: seed.is_available,
            })
            .collect();
        Self { mechanics }
    }

    pub fn mechanics(&self) -> &[Mechanic] {
        &self.mechanics
    }

    pub fn len(&self) -> usize {
        self.mechanics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mechanics.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Mechanic> {
        self.mechanics.iter().find(|m| m.id == id)
    }

    /// Mechanic a booking can be assigned to. Unknown or unavailable ids are
    /// rejected as bad input.
    pub fn assign(&self, id: &str) -> Result<&Mechanic, VelofixError> {
        let mechanic = self
            .get(id.trim())
            .ok_or_else(|| VelofixError::Validation(format!("Unknown mechanic '{}'", id)))?;
        if !mechanic.is_available {
            return Err(VelofixError::Validation(format!(
                "{} is not available for new bookings",
                mechanic.name
            )));
        }
        Ok(mechanic)
    }
}
