use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::components::creature::{Creature, CreatureId, ParseEnumError};
use crate::content::repository::{CatalogError, CatalogProvider};

/// Highest id the catalog publishes.
pub const CATALOG_MAX_ID: u32 = 1025;
/// Ids requested per round trip when browsing a region.
pub const REGION_BATCH_SIZE: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Kanto,
    Johto,
    Hoenn,
    Sinnoh,
    Unova,
    Kalos,
    Alola,
    Galar,
    Paldea,
}

impl Region {
    pub const ALL: [Region; 9] = [
        Region::Kanto,
        Region::Johto,
        Region::Hoenn,
        Region::Sinnoh,
        Region::Unova,
        Region::Kalos,
        Region::Alola,
        Region::Galar,
        Region::Paldea,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Kanto => "Kanto",
            Region::Johto => "Johto",
            Region::Hoenn => "Hoenn",
            Region::Sinnoh => "Sinnoh",
            Region::Unova => "Unova",
            Region::Kalos => "Kalos",
            Region::Alola => "Alola",
            Region::Galar => "Galar",
            Region::Paldea => "Paldea",
        }
    }

    pub fn id_range(self) -> RangeInclusive<u32> {
        match self {
            Region::Kanto => 1..=151,
            Region::Johto => 152..=251,
            Region::Hoenn => 252..=386,
            Region::Sinnoh => 387..=493,
            Region::Unova => 494..=649,
            Region::Kalos => 650..=721,
            Region::Alola => 722..=809,
            Region::Galar => 810..=905,
            Region::Paldea => 906..=CATALOG_MAX_ID,
        }
    }

    /// The region's id range split into request batches, never past the catalog cap.
    pub fn batches(self) -> Vec<RangeInclusive<u32>> {
        let range = self.id_range();
        let end = (*range.end()).min(CATALOG_MAX_ID);
        let mut batches = Vec::new();
        let mut start = *range.start();
        while start <= end {
            let batch_end = (start + REGION_BATCH_SIZE - 1).min(end);
            batches.push(start..=batch_end);
            start = batch_end + 1;
        }
        batches
    }
}

impl FromStr for Region {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseEnumError {
                value: s.to_string(),
            })
    }
}

/// Every creature the provider has for `region`, in id order.
///
/// Ids the provider does not know are skipped; a provider error aborts the load.
pub fn load_region<P: CatalogProvider + ?Sized>(
    provider: &P,
    region: Region,
) -> Result<Vec<Arc<Creature>>, CatalogError> {
    let mut creatures = Vec::new();
    for batch in region.batches() {
        let before = creatures.len();
        for id in batch.clone() {
            if let Some(creature) = provider.creature(CreatureId(id))? {
                creatures.push(Arc::new(creature));
            }
        }
        debug!(
            region = region.label(),
            first = batch.start(),
            last = batch.end(),
            found = creatures.len() - before,
            "region batch loaded"
        );
    }
    info!(region = region.label(), creatures = creatures.len(), "region loaded");
    Ok(creatures)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::components::creature::BaseStats;

    /// Knows every id divisible by three and records what it was asked for.
    #[derive(Default)]
    struct SparseProvider {
        requested: RefCell<Vec<u32>>,
    }

    impl CatalogProvider for SparseProvider {
        fn creature(&self, id: CreatureId) -> Result<Option<Creature>, CatalogError> {
            self.requested.borrow_mut().push(id.0);
            Ok((id.0 % 3 == 0)
                .then(|| Creature::new(id.0, "Mon", "", Vec::new(), BaseStats::default())))
        }
    }

    struct BrokenProvider;

    impl CatalogProvider for BrokenProvider {
        fn creature(&self, id: CreatureId) -> Result<Option<Creature>, CatalogError> {
            Err(CatalogError::Validation {
                id,
                message: "corrupt".to_string(),
            })
        }
    }

    #[test]
    fn ranges_cover_catalog_without_gaps() {
        let mut next = 1;
        for region in Region::ALL {
            let range = region.id_range();
            assert_eq!(*range.start(), next, "{} starts late", region.label());
            next = range.end() + 1;
        }
        assert_eq!(next, CATALOG_MAX_ID + 1);
    }

    #[test]
    fn batches_are_twenty_wide_and_capped() {
        let batches = Region::Kanto.batches();
        assert_eq!(batches.len(), 8);
        assert_eq!(batches[0], 1..=20);
        assert_eq!(batches[7], 141..=151);

        let paldea = Region::Paldea.batches();
        assert_eq!(paldea.last().map(|b| *b.end()), Some(CATALOG_MAX_ID));
    }

    #[test]
    fn load_region_skips_missing_ids() {
        let provider = SparseProvider::default();
        let kalos = load_region(&provider, Region::Kalos).unwrap();
        assert_eq!(provider.requested.borrow().len(), 72);
        assert!(kalos.iter().all(|c| c.id.0 % 3 == 0));
        assert_eq!(kalos.first().map(|c| c.id), Some(CreatureId(651)));
        assert_eq!(kalos.len(), 24);
    }

    #[test]
    fn provider_errors_abort_the_load() {
        assert!(load_region(&BrokenProvider, Region::Johto).is_err());
    }

    #[test]
    fn region_names_parse_case_insensitively() {
        assert_eq!("paldea".parse::<Region>(), Ok(Region::Paldea));
        assert_eq!(" Kanto ".parse::<Region>(), Ok(Region::Kanto));
        assert!("orre".parse::<Region>().is_err());
    }
}
