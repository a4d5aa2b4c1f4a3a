mod error;
mod extractor;

// re-export the required modules
pub use error::Error;
pub use extractor::{CallKind, Extractor};
