use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

use creature_party::components::creature::CreatureId;
use creature_party::components::roster::PlaceOutcome;
use creature_party::content::{
    load_region, CatalogProvider, JsonCatalog, Region, SqliteCatalog,
};
use creature_party::rules::{AstralSign, FavoriteColor, PersonalityInputs, Zodiac};
use creature_party::ui::{render_assessment_report, render_layout, FixedGeometry, LoggedCelebration};
use creature_party::{Party, PartyConfig};

#[derive(Parser)]
#[command(name = "creature-party")]
#[command(about = "Build, score and lay out a six-creature party", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a party against personality picks
    Assess {
        /// Catalog file (.json or .db)
        #[arg(long)]
        catalog: PathBuf,

        /// Six creature ids, comma separated
        #[arg(long, value_delimiter = ',', num_args = 1..)]
        team: Vec<u32>,

        #[arg(long)]
        zodiac: Zodiac,

        #[arg(long)]
        astral: AstralSign,

        #[arg(long)]
        color: FavoriteColor,

        /// Print the assessment as JSON
        #[arg(long, default_value = "false")]
        json: bool,

        /// Party config JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the initial canvas arrangement for a viewport width
    Layout {
        #[arg(long)]
        catalog: PathBuf,

        #[arg(long, value_delimiter = ',', num_args = 1..)]
        team: Vec<u32>,

        /// Viewport width in pixels
        #[arg(long)]
        width: f32,

        /// Viewport height in pixels
        #[arg(long, default_value = "900")]
        height: f32,

        /// Bottom edge of the title region, if measured
        #[arg(long)]
        title_bottom: Option<f32>,

        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List a region's creatures
    Region {
        #[arg(long)]
        catalog: PathBuf,

        #[arg(long)]
        region: Region,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Assess {
            catalog,
            team,
            zodiac,
            astral,
            color,
            json,
            config,
        } => {
            let catalog = open_catalog(&catalog)?;
            let mut party = build_party(load_config(config.as_deref()), FixedGeometry::new(1280.0, 900.0));
            fill_party(&mut party, catalog.as_ref(), &team)?;

            let inputs = PersonalityInputs::new(zodiac, astral, color);
            party.request_assessment(&inputs)?;
            let delay = party.config().timing.assessment_delay_ms;
            let snapshot = party.frame(delay);
            let Some(assessment) = snapshot.assessment else {
                return Err("assessment was not revealed".into());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&assessment)?);
            } else {
                print!("{}", render_assessment_report(party.roster(), &assessment));
            }
        }

        Commands::Layout {
            catalog,
            team,
            width,
            height,
            title_bottom,
            config,
        } => {
            let catalog = open_catalog(&catalog)?;
            let mut geometry = FixedGeometry::new(width, height);
            geometry.title_bottom = title_bottom;
            let mut party = build_party(load_config(config.as_deref()), geometry);
            fill_party(&mut party, catalog.as_ref(), &team)?;

            let delay = party.config().timing.auto_enter_delay_ms;
            let snapshot = party.frame(delay);
            if !snapshot.phase.is_active() {
                return Err("party canvas did not open".into());
            }
            print!("{}", render_layout(party.roster(), party.positions()));
        }

        Commands::Region { catalog, region } => {
            let catalog = open_catalog(&catalog)?;
            let creatures = load_region(catalog.as_ref(), region)?;
            println!("{} ({} creatures)", region.label(), creatures.len());
            for creature in creatures {
                let types: Vec<&str> = creature.types.iter().map(|t| t.as_str()).collect();
                println!(
                    "  {:>5} {:<14} {:<16} total {}",
                    creature.id.to_string(),
                    creature.display_name().unwrap_or("???"),
                    types.join("/"),
                    creature.total_stats()
                );
            }
        }
    }
    Ok(())
}

fn open_catalog(path: &Path) -> Result<Box<dyn CatalogProvider>, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("catalog not found at {}", path.display()).into());
    }
    let is_sqlite = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("db" | "sqlite" | "sqlite3")
    );
    if is_sqlite {
        Ok(Box::new(SqliteCatalog::open(path)?))
    } else {
        Ok(Box::new(JsonCatalog::load(path)?))
    }
}

fn load_config(path: Option<&Path>) -> PartyConfig {
    match path {
        Some(path) => PartyConfig::load_or_default(path),
        None => PartyConfig::default(),
    }
}

fn build_party(config: PartyConfig, geometry: FixedGeometry) -> Party {
    Party::new(config, Box::new(geometry), Box::new(LoggedCelebration::default()))
}

fn fill_party(
    party: &mut Party,
    catalog: &dyn CatalogProvider,
    team: &[u32],
) -> Result<(), Box<dyn std::error::Error>> {
    for &id in team {
        let Some(creature) = catalog.creature(CreatureId(id))? else {
            warn!(id, "creature not in catalog; skipped");
            continue;
        };
        if party.add_member(Arc::new(creature)) == PlaceOutcome::Full {
            warn!(id, "party already full; extra member ignored");
        }
    }
    Ok(())
}
