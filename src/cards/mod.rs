//! Card system: definitions, registry, and pools.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardKind`: `Attack` or `Shield`
//! - `CardDefinition`: Static card data (kind, value, art reference)
//! - `CardRegistry`: Card definition lookup
//! - `CardPool`: Definitions plus the deck list, loadable from JSON

pub mod definition;
pub mod registry;
pub mod pool;

pub use definition::{CardDefinition, CardId, CardKind};
pub use registry::CardRegistry;
pub use pool::CardPool;
