//! Creature Catalog
//!
//! Remote lookup of published creatures by name. The stat block converter
//! never talks to a catalog itself; callers resolve a name through
//! [`lookup_creature`] and hand the resulting [`Creature`] to the emitter.

pub mod error;
pub mod srd;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::statblock::Creature;

pub use error::{CatalogError, Result};
pub use srd::SrdCatalog;

/// A source of creature records keyed by name.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CreatureCatalog: Send + Sync {
    /// `Ok(None)` when the catalog has no creature with that name.
    async fn lookup(&self, name: &str) -> Result<Option<Creature>>;
}

/// Look up a creature by name, logging the outcome.
pub async fn lookup_creature(
    catalog: &dyn CreatureCatalog,
    name: &str,
) -> Result<Option<Creature>> {
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Catalog lookup skipped: empty creature name");
        return Ok(None);
    }

    match catalog.lookup(name).await {
        Ok(Some(creature)) => {
            log::info!("Catalog lookup '{}' found '{}'", name, creature.name);
            Ok(Some(creature))
        }
        Ok(None) => {
            log::info!("Catalog lookup '{}' found nothing", name);
            Ok(None)
        }
        Err(e) => {
            log::warn!("Catalog lookup '{}' failed: {}", name, e);
            Err(e)
        }
    }
}
