pub mod category;
pub mod classification_result;
pub mod host_record;

pub use category::{Category, CategoryRules, OTHER_CATEGORY};
pub use classification_result::ClassificationResult;
pub use host_record::{HostAddress, HostRecord, OpenPort, PortEntry, UNKNOWN_SERVICE};
