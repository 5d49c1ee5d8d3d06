//! Category entity (external catalog).

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A service category from the external taxonomy.
///
/// The catalog itself is managed elsewhere; this core only reads id/name
/// pairs for listing denormalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
