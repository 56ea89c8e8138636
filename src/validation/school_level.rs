use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::domain::question::SchoolLevel;

use super::{ValidationError, ValidationErrorKind};

// Italian school system: five primary years, three lower secondary, five
// upper secondary. Never mutated after startup.
static CLASS_TABLE: Lazy<HashMap<SchoolLevel, &'static [i32]>> = Lazy::new(|| {
    HashMap::from([
        (SchoolLevel::Prim, &[1, 2, 3, 4, 5][..]),
        (SchoolLevel::Sec1, &[1, 2, 3][..]),
        (SchoolLevel::Sec2, &[1, 2, 3, 4, 5][..]),
    ])
});

/// Immutable mapping of school level to the class numbers taught at it.
pub struct SchoolLevelClassTable;

impl SchoolLevelClassTable {
    pub fn valid_classes(level: SchoolLevel) -> &'static [i32] {
        CLASS_TABLE
            .get(&level)
            .copied()
            .expect("class table covers every school level")
    }

    /// Raw-string accessor for callers that have not parsed the level yet.
    pub fn lookup(level: &str) -> Result<&'static [i32], ValidationError> {
        level
            .parse::<SchoolLevel>()
            .map(Self::valid_classes)
            .map_err(|_| {
                ValidationError::new(
                    ValidationErrorKind::UnknownSchoolLevel,
                    "school_level",
                    format!("unrecognized school level '{}'", level),
                )
            })
    }

    pub fn allows(level: SchoolLevel, class_number: i32) -> bool {
        Self::valid_classes(level).contains(&class_number)
    }
}
