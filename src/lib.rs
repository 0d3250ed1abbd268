pub mod decode;
pub mod error;
pub mod interpolate;
pub mod shares;

pub use decode::decode;
pub use error::{DecodeError, InputFormatError, ReconstructionError};
pub use interpolate::{interpolate_at_zero, Point};
pub use shares::{ShareFile, ShareRecord, Threshold};
