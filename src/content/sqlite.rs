use std::path::Path;
use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::components::creature::{capitalize_name, BaseStats, Creature, CreatureId, ElementType};
use crate::content::repository::{CatalogError, CatalogProvider};

const CREATURE_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS creature (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL DEFAULT '',
    sprite TEXT NOT NULL DEFAULT '',
    type_primary TEXT,
    type_secondary TEXT,
    hp INTEGER NOT NULL DEFAULT 0,
    attack INTEGER NOT NULL DEFAULT 0,
    defense INTEGER NOT NULL DEFAULT 0,
    special_attack INTEGER NOT NULL DEFAULT 0,
    special_defense INTEGER NOT NULL DEFAULT 0,
    speed INTEGER NOT NULL DEFAULT 0
)";

pub struct SqliteCatalog {
    conn: Connection,
}

impl SqliteCatalog {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        let catalog = Self::from_connection(conn)?;
        info!(path = %path.display(), creatures = catalog.count()?, "sqlite catalog opened");
        Ok(catalog)
    }

    pub fn open_in_memory() -> Result<Self, CatalogError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, CatalogError> {
        conn.execute(CREATURE_SCHEMA, [])?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn count(&self) -> Result<i64, CatalogError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM creature", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Insert or replace one record. Only the first two types are stored.
    pub fn insert(&self, creature: &Creature) -> Result<(), CatalogError> {
        let stats = creature.stats;
        self.conn.execute(
            "INSERT OR REPLACE INTO creature
                (id, name, sprite, type_primary, type_secondary,
                 hp, attack, defense, special_attack, special_defense, speed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                creature.id.0,
                creature.name,
                creature.sprite,
                creature.types.first().map(|t| t.as_str()),
                creature.types.get(1).map(|t| t.as_str()),
                stats.hp,
                stats.attack,
                stats.defense,
                stats.special_attack,
                stats.special_defense,
                stats.speed,
            ],
        )?;
        Ok(())
    }
}

impl CatalogProvider for SqliteCatalog {
    fn creature(&self, id: CreatureId) -> Result<Option<Creature>, CatalogError> {
        let mut stmt = self.conn.prepare(
            "SELECT name, sprite, type_primary, type_secondary,
                    hp, attack, defense, special_attack, special_defense, speed
             FROM creature WHERE id = ?1",
        )?;
        let row = stmt
            .query_row([id.0], |row| {
                let name: String = row.get(0)?;
                let sprite: String = row.get(1)?;
                let primary: Option<String> = row.get(2)?;
                let secondary: Option<String> = row.get(3)?;
                let stats = BaseStats {
                    hp: row.get(4)?,
                    attack: row.get(5)?,
                    defense: row.get(6)?,
                    special_attack: row.get(7)?,
                    special_defense: row.get(8)?,
                    speed: row.get(9)?,
                };
                Ok((name, sprite, primary, secondary, stats))
            })
            .optional()?;

        let Some((name, sprite, primary, secondary, stats)) = row else {
            return Ok(None);
        };

        let mut types = Vec::new();
        for raw in [primary, secondary].into_iter().flatten() {
            let element = ElementType::from_str(&raw).map_err(|err| CatalogError::Validation {
                id,
                message: err.to_string(),
            })?;
            types.push(element);
        }

        Ok(Some(Creature {
            id,
            name: capitalize_name(&name),
            sprite,
            types,
            stats,
        }))
    }
}
