use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_COLUMNS, REFERENCE_ROWS};

/// Which `columns`/`rows` pairs the header validation lets through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionPolicy {
    /// Any non-zero size.
    #[default]
    Any,
    /// Exactly one size, in byte-columns and rows.
    Exact { columns: u16, rows: u16 },
}

impl DimensionPolicy {
    /// The 40 x 200 size of the reference sample (320x200 pixels).
    pub const fn reference() -> Self {
        Self::Exact {
            columns: REFERENCE_COLUMNS,
            rows: REFERENCE_ROWS,
        }
    }

    pub fn accepts(&self, columns: u16, rows: u16) -> bool {
        if columns == 0 || rows == 0 {
            return false;
        }
        match *self {
            Self::Any => true,
            Self::Exact {
                columns: expected_columns,
                rows: expected_rows,
            } => columns == expected_columns && rows == expected_rows,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    pub dimensions: DimensionPolicy,
}

impl DecoderConfig {
    /// Only accept the 320x200 reference size.
    pub fn strict() -> Self {
        Self {
            dimensions: DimensionPolicy::reference(),
        }
    }
}
