//! Indelning Catalog
//!
//! Reference data for the Swedish administrative division: the 21 regions
//! (län) and 290 municipalities (kommuner), looked up by their official
//! numeric codes. A municipality's parent region is derived from its id -
//! dividing a kommunkod by 100 yields the länskod.
//!
//! The tables are compile-time constants. Lookups are pure and safe for
//! unsynchronized concurrent use from any number of threads.
//!
//! # Example
//!
//! ```
//! use indelning_catalog::{Municipality, Region};
//!
//! let region = Region::find_by_id(14)?;
//! assert_eq!(region.name(), "Västra Götalands län");
//!
//! let municipality = Municipality::find_by_id(180)?;
//! assert_eq!(municipality.name(), "Stockholms kommun");
//! assert_eq!(municipality.region().id(), 1);
//! # Ok::<(), indelning_catalog::CatalogError>(())
//! ```

pub mod error;
pub mod municipality;
pub mod region;

// Re-export commonly used items
pub use error::{CatalogError, Result};
pub use municipality::Municipality;
pub use region::Region;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
