//! Struct `Sample` represents a batch of weighted instances.

/// Defines a single weighted instance.
pub mod instance;
/// Defines `Sample`.
pub mod sample_struct;
/// Reads grade records.
pub mod reader;


pub use instance::Instance;
pub use sample_struct::Sample;
pub use reader::{
    SampleReader,
    SUBJECTS,
    LABEL_SUBJECT,
    read_grades,
};
