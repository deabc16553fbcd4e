pub mod duration;
pub mod raw_document;
pub mod work_record;

pub use duration::{DurationUnit, WorkDuration};
pub use raw_document::{RawDocument, reconstruct};
pub use work_record::{NewWorkDay, WorkRecord};
