use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Stable identifier for a single talent record.
///
/// Ids are assigned when the catalog is seeded and never reused, so they are
/// safe to store in caches and presentation state across queries.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TalentId(pub u32);

/// Source book a talent originates from.
///
/// The set is closed: the game line ships exactly these four books, and a
/// token outside the set is a data or input error, never a new variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SourceBook {
    Core,
    SandAndDust,
    PowerAndPawns,
    GreatGame,
}

impl SourceBook {
    pub const ALL: [SourceBook; 4] = [
        SourceBook::Core,
        SourceBook::SandAndDust,
        SourceBook::PowerAndPawns,
        SourceBook::GreatGame,
    ];

    /// Canonical wire token stored in catalog files and accepted from forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceBook::Core => "core",
            SourceBook::SandAndDust => "Sand_and_Dust",
            SourceBook::PowerAndPawns => "Power_And_Pawns_Emperors_Court",
            SourceBook::GreatGame => "The_Great_Game_Houses_of_the_Landsraad",
        }
    }

    /// Full book title shown in presentation rows.
    pub fn display_title(&self) -> &'static str {
        match self {
            SourceBook::Core => "Core Rulebook",
            SourceBook::SandAndDust => "Sand and Dust",
            SourceBook::PowerAndPawns => "Power and Pawns: The Emperor's Court",
            SourceBook::GreatGame => "The Great Game: Houses of the Landsraad",
        }
    }

    /// Resolve a canonical token, or `None` when it names no known book.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "core" => Some(SourceBook::Core),
            "Sand_and_Dust" => Some(SourceBook::SandAndDust),
            "Power_And_Pawns_Emperors_Court" => Some(SourceBook::PowerAndPawns),
            "The_Great_Game_Houses_of_the_Landsraad" => Some(SourceBook::GreatGame),
            _ => None,
        }
    }
}

impl Serialize for SourceBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        SourceBook::parse(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown source book '{value}'")))
    }
}
