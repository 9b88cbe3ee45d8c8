use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::creature::ParseEnumError;

macro_rules! named_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ParseEnumError {
                        value: s.to_string(),
                    })
            }
        }
    };
}

named_enum!(
    /// Cyclical-calendar sign.
    Zodiac {
        Rat => "Rat",
        Ox => "Ox",
        Tiger => "Tiger",
        Rabbit => "Rabbit",
        Dragon => "Dragon",
        Snake => "Snake",
        Horse => "Horse",
        Goat => "Goat",
        Monkey => "Monkey",
        Rooster => "Rooster",
        Dog => "Dog",
        Pig => "Pig",
    }
);

named_enum!(
    /// Celestial sign.
    AstralSign {
        Aries => "Aries",
        Taurus => "Taurus",
        Gemini => "Gemini",
        Cancer => "Cancer",
        Leo => "Leo",
        Virgo => "Virgo",
        Libra => "Libra",
        Scorpio => "Scorpio",
        Sagittarius => "Sagittarius",
        Capricorn => "Capricorn",
        Aquarius => "Aquarius",
        Pisces => "Pisces",
    }
);

named_enum!(
    FavoriteColor {
        Red => "Red",
        Blue => "Blue",
        Green => "Green",
        Yellow => "Yellow",
        Purple => "Purple",
        Orange => "Orange",
        Pink => "Pink",
        Black => "Black",
        White => "White",
        Silver => "Silver",
        Gold => "Gold",
        Cyan => "Cyan",
    }
);

/// The three personality selections. Each stays `None` until the user picks one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityInputs {
    pub zodiac: Option<Zodiac>,
    pub astral: Option<AstralSign>,
    pub color: Option<FavoriteColor>,
}

impl PersonalityInputs {
    pub fn new(zodiac: Zodiac, astral: AstralSign, color: FavoriteColor) -> Self {
        Self {
            zodiac: Some(zodiac),
            astral: Some(astral),
            color: Some(color),
        }
    }

    /// Resolved qualities in zodiac, astral, color order; unset inputs are skipped.
    pub fn qualities(&self) -> Vec<Quality> {
        [
            self.zodiac.map(Quality::from),
            self.astral.map(Quality::from),
            self.color.map(Quality::from),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Short character quality attached to each personality selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    CleverAdaptability,
    PatientStrength,
    BoldCourage,
    GentleWisdom,
    MajesticPower,
    MysteriousInsight,
    FreeSpiritedEnergy,
    CreativeHarmony,
    PlayfulIntelligence,
    PreciseConfidence,
    LoyalDetermination,
    GenerousContentment,
    FieryDetermination,
    CelestialPatience,
    DualCreativity,
    NurturingIntuition,
    RadiantLeadership,
    MeticulousPerfection,
    BalancedHarmony,
    IntenseTransformation,
    AdventurousFreedom,
    AmbitiousDiscipline,
    InnovativeVision,
    DreamyEmpathy,
    PassionateIntensity,
    CalmWisdom,
    NaturalGrowth,
    BrightOptimism,
    MysticalDepth,
    VibrantEnthusiasm,
    GentleCompassion,
    MysteriousDepth,
    PureClarity,
    RefinedElegance,
    NobleExcellence,
    FreshInnovation,
}

impl From<Zodiac> for Quality {
    fn from(sign: Zodiac) -> Self {
        match sign {
            Zodiac::Rat => Quality::CleverAdaptability,
            Zodiac::Ox => Quality::PatientStrength,
            Zodiac::Tiger => Quality::BoldCourage,
            Zodiac::Rabbit => Quality::GentleWisdom,
            Zodiac::Dragon => Quality::MajesticPower,
            Zodiac::Snake => Quality::MysteriousInsight,
            Zodiac::Horse => Quality::FreeSpiritedEnergy,
            Zodiac::Goat => Quality::CreativeHarmony,
            Zodiac::Monkey => Quality::PlayfulIntelligence,
            Zodiac::Rooster => Quality::PreciseConfidence,
            Zodiac::Dog => Quality::LoyalDetermination,
            Zodiac::Pig => Quality::GenerousContentment,
        }
    }
}

impl From<AstralSign> for Quality {
    fn from(sign: AstralSign) -> Self {
        match sign {
            AstralSign::Aries => Quality::FieryDetermination,
            AstralSign::Taurus => Quality::CelestialPatience,
            AstralSign::Gemini => Quality::DualCreativity,
            AstralSign::Cancer => Quality::NurturingIntuition,
            AstralSign::Leo => Quality::RadiantLeadership,
            AstralSign::Virgo => Quality::MeticulousPerfection,
            AstralSign::Libra => Quality::BalancedHarmony,
            AstralSign::Scorpio => Quality::IntenseTransformation,
            AstralSign::Sagittarius => Quality::AdventurousFreedom,
            AstralSign::Capricorn => Quality::AmbitiousDiscipline,
            AstralSign::Aquarius => Quality::InnovativeVision,
            AstralSign::Pisces => Quality::DreamyEmpathy,
        }
    }
}

impl From<FavoriteColor> for Quality {
    fn from(color: FavoriteColor) -> Self {
        match color {
            FavoriteColor::Red => Quality::PassionateIntensity,
            FavoriteColor::Blue => Quality::CalmWisdom,
            FavoriteColor::Green => Quality::NaturalGrowth,
            FavoriteColor::Yellow => Quality::BrightOptimism,
            FavoriteColor::Purple => Quality::MysticalDepth,
            FavoriteColor::Orange => Quality::VibrantEnthusiasm,
            FavoriteColor::Pink => Quality::GentleCompassion,
            FavoriteColor::Black => Quality::MysteriousDepth,
            FavoriteColor::White => Quality::PureClarity,
            FavoriteColor::Silver => Quality::RefinedElegance,
            FavoriteColor::Gold => Quality::NobleExcellence,
            FavoriteColor::Cyan => Quality::FreshInnovation,
        }
    }
}

impl Quality {
    pub fn phrase(self) -> &'static str {
        match self {
            Quality::CleverAdaptability => "clever adaptability",
            Quality::PatientStrength => "patient strength",
            Quality::BoldCourage => "bold courage",
            Quality::GentleWisdom => "gentle wisdom",
            Quality::MajesticPower => "majestic power",
            Quality::MysteriousInsight => "mysterious insight",
            Quality::FreeSpiritedEnergy => "free-spirited energy",
            Quality::CreativeHarmony => "creative harmony",
            Quality::PlayfulIntelligence => "playful intelligence",
            Quality::PreciseConfidence => "precise confidence",
            Quality::LoyalDetermination => "loyal determination",
            Quality::GenerousContentment => "generous contentment",
            Quality::FieryDetermination => "fiery determination",
            Quality::CelestialPatience => "celestial patience",
            Quality::DualCreativity => "dual creativity",
            Quality::NurturingIntuition => "nurturing intuition",
            Quality::RadiantLeadership => "radiant leadership",
            Quality::MeticulousPerfection => "meticulous perfection",
            Quality::BalancedHarmony => "balanced harmony",
            Quality::IntenseTransformation => "intense transformation",
            Quality::AdventurousFreedom => "adventurous freedom",
            Quality::AmbitiousDiscipline => "ambitious discipline",
            Quality::InnovativeVision => "innovative vision",
            Quality::DreamyEmpathy => "dreamy empathy",
            Quality::PassionateIntensity => "passionate intensity",
            Quality::CalmWisdom => "calm wisdom",
            Quality::NaturalGrowth => "natural growth",
            Quality::BrightOptimism => "bright optimism",
            Quality::MysticalDepth => "mystical depth",
            Quality::VibrantEnthusiasm => "vibrant enthusiasm",
            Quality::GentleCompassion => "gentle compassion",
            Quality::MysteriousDepth => "mysterious depth",
            Quality::PureClarity => "pure clarity",
            Quality::RefinedElegance => "refined elegance",
            Quality::NobleExcellence => "noble excellence",
            Quality::FreshInnovation => "fresh innovation",
        }
    }

    /// Sentence expanding the quality in the narrative paragraph. Only the
    /// zodiac qualities have one; the narrative uses the phrase for the rest.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Quality::CleverAdaptability => Some("Your mind moves like water, flowing around obstacles with ingenious solutions that others might miss. You see patterns where chaos seems to reign."),
            Quality::PatientStrength => Some("Like a mountain that has weathered countless storms, your resolve is unshakeable. You understand that true power comes not from haste, but from unwavering commitment."),
            Quality::BoldCourage => Some("You charge forward where others hesitate, your heart beating with the rhythm of adventure. Fear is but a whisper you choose to ignore."),
            Quality::GentleWisdom => Some("Your knowledge flows like a gentle stream, nurturing growth in yourself and others. You see the beauty in quiet moments of understanding."),
            Quality::MajesticPower => Some("There is a regal quality to your presence, a natural authority that commands respect. You carry yourself with the dignity of ancient royalty."),
            Quality::MysteriousInsight => Some("You peer into the depths where others see only surface, uncovering truths hidden in shadow. Your intuition is a compass pointing toward hidden knowledge."),
            Quality::FreeSpiritedEnergy => Some("Your soul dances to a rhythm all its own, unbound by convention. You find freedom in movement, in exploration, in the endless possibilities of the horizon."),
            Quality::CreativeHarmony => Some("You weave together disparate threads into something beautiful, finding balance where others see conflict. Your creativity is a bridge between worlds."),
            Quality::PlayfulIntelligence => Some("Your mind is a playground of ideas, where serious concepts dance with whimsy. You solve problems with a smile, making the complex seem simple."),
            Quality::PreciseConfidence => Some("Every action is measured, every word chosen with care. You move through the world with the certainty of a master craftsman, knowing exactly where each piece fits."),
            Quality::LoyalDetermination => Some("Your commitment runs deep, a bond that time cannot erode. You stand by those you care for with the steadfastness of an ancient oak."),
            Quality::GenerousContentment => Some("You find joy in giving, in sharing the abundance of your spirit. Your happiness multiplies when shared, creating ripples of warmth around you."),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_parse_from_labels() {
        assert_eq!("dragon".parse::<Zodiac>(), Ok(Zodiac::Dragon));
        assert_eq!("Sagittarius".parse::<AstralSign>(), Ok(AstralSign::Sagittarius));
        assert_eq!(" GOLD".parse::<FavoriteColor>(), Ok(FavoriteColor::Gold));
        assert!("Cat".parse::<Zodiac>().is_err());
    }

    #[test]
    fn each_vocabulary_has_twelve_terms() {
        assert_eq!(Zodiac::ALL.len(), 12);
        assert_eq!(AstralSign::ALL.len(), 12);
        assert_eq!(FavoriteColor::ALL.len(), 12);
    }

    #[test]
    fn qualities_resolve_in_fixed_order_and_skip_missing() {
        let inputs = PersonalityInputs::new(Zodiac::Rat, AstralSign::Leo, FavoriteColor::Cyan);
        assert_eq!(
            inputs.qualities(),
            vec![
                Quality::CleverAdaptability,
                Quality::RadiantLeadership,
                Quality::FreshInnovation
            ]
        );

        let partial = PersonalityInputs {
            color: Some(FavoriteColor::Black),
            ..Default::default()
        };
        assert_eq!(partial.qualities(), vec![Quality::MysteriousDepth]);
    }

    #[test]
    fn only_zodiac_qualities_carry_a_sentence() {
        assert!(Zodiac::ALL.iter().all(|z| Quality::from(*z).description().is_some()));
        assert_eq!(Quality::from(AstralSign::Leo).description(), None);
        assert_eq!(Quality::from(FavoriteColor::White).description(), None);
    }

    #[test]
    fn every_selection_maps_to_a_distinct_quality() {
        let mut phrases: Vec<&str> = Zodiac::ALL
            .iter()
            .map(|z| Quality::from(*z).phrase())
            .chain(AstralSign::ALL.iter().map(|a| Quality::from(*a).phrase()))
            .chain(FavoriteColor::ALL.iter().map(|c| Quality::from(*c).phrase()))
            .collect();
        phrases.sort_unstable();
        phrases.dedup();
        assert_eq!(phrases.len(), 36);
    }
}
