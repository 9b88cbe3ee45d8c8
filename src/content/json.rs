use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::components::creature::{capitalize_name, Creature, CreatureId};
use crate::content::repository::{CatalogError, CatalogProvider};

/// Catalog backed by a JSON array of creature records, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    creatures: IndexMap<CreatureId, Creature>,
}

impl JsonCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::parse(&raw, &path.display().to_string())?;
        info!(path = %path.display(), creatures = catalog.len(), "json catalog loaded");
        Ok(catalog)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::parse(raw, "<inline>")
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, CatalogError> {
        let records: Vec<Creature> =
            serde_json::from_str(raw).map_err(|source| CatalogError::Json {
                path: origin.to_string(),
                source,
            })?;
        Ok(Self::from_creatures(records))
    }

    /// Later records with a repeated id replace earlier ones.
    pub fn from_creatures(records: impl IntoIterator<Item = Creature>) -> Self {
        let mut creatures = IndexMap::new();
        for mut creature in records {
            creature.name = capitalize_name(&creature.name);
            if creatures.insert(creature.id, creature).is_some() {
                debug!("duplicate catalog record replaced");
            }
        }
        Self { creatures }
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn creatures(&self) -> impl Iterator<Item = &Creature> + '_ {
        self.creatures.values()
    }
}

impl CatalogProvider for JsonCatalog {
    fn creature(&self, id: CreatureId) -> Result<Option<Creature>, CatalogError> {
        Ok(self.creatures.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::components::creature::ElementType;

    const SAMPLE: &str = r#"[
        {"id": 25, "name": "pikachu", "sprite": "25.png", "types": ["electric"],
         "stats": {"hp": 35, "attack": 55, "defense": 40, "special_attack": 50, "special_defense": 50, "speed": 90}},
        {"id": 1, "name": "bulbasaur", "types": ["grass", "poison"]},
        {"id": 7}
    ]"#;

    #[test]
    fn records_are_capitalized_and_defaulted() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let pikachu = catalog.creature(CreatureId(25)).unwrap().unwrap();
        assert_eq!(pikachu.name, "Pikachu");
        assert_eq!(pikachu.total_stats(), 320);

        let bulbasaur = catalog.creature(CreatureId(1)).unwrap().unwrap();
        assert_eq!(bulbasaur.types, vec![ElementType::Grass, ElementType::Poison]);
        assert_eq!(bulbasaur.total_stats(), 0);

        let bare = catalog.creature(CreatureId(7)).unwrap().unwrap();
        assert_eq!(bare.display_name(), None);
        assert!(bare.types.is_empty());

        assert!(catalog.creature(CreatureId(999)).unwrap().is_none());
    }

    #[test]
    fn file_order_is_preserved() {
        let catalog = JsonCatalog::from_json_str(SAMPLE).unwrap();
        let ids: Vec<u32> = catalog.creatures().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![25, 1, 7]);
    }

    #[test]
    fn load_reads_file_and_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = JsonCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        broken.write_all(b"{ not json").unwrap();
        assert!(matches!(
            JsonCatalog::load(broken.path()),
            Err(CatalogError::Json { .. })
        ));

        assert!(matches!(
            JsonCatalog::load("/definitely/not/here.json"),
            Err(CatalogError::Io { .. })
        ));
    }
}
