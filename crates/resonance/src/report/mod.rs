pub mod assembler;
pub mod types;

pub use assembler::{mark_transitions, normalize, normalize_records, ReportAssembler};
pub use types::{DailyRecord, Normalization, Report, TRANSITION_MARKER};
