//! Wellness handlers - stress tracking.

mod record_stress_level;

pub use record_stress_level::{
    RecordStressLevelCommand, RecordStressLevelHandler, RecordStressLevelResult,
};
