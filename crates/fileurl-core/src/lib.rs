pub mod config;
pub mod error;
pub mod logging;
pub mod sas;
pub mod url_parts;

pub use error::{FileUrlError, Result};
pub use sas::{IpRange, SasProtocol, SasQueryParameters};
pub use url_parts::{AddressingStyle, FileUrlParts, QueryParams, SHARE_SNAPSHOT_KEY};
