use crate::error::LookupError;
use std::fmt;
use std::str::FromStr;

/// Which kind of wiki page a pipeline scrapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Spell,
    Subclass,
    Weapon,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Spell, EntityKind::Subclass, EntityKind::Weapon];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Spell => "spell",
            EntityKind::Subclass => "subclass",
            EntityKind::Weapon => "weapon",
        }
    }

    /// File name of the dump written for this kind.
    pub fn output_file(&self) -> &'static str {
        match self {
            EntityKind::Spell => "spells.json",
            EntityKind::Subclass => "class_dump.json",
            EntityKind::Weapon => "weapon_dump.json",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spell" | "spells" => Ok(EntityKind::Spell),
            "subclass" | "subclasses" | "class" => Ok(EntityKind::Subclass),
            "weapon" | "weapons" => Ok(EntityKind::Weapon),
            _ => Err(LookupError::UnknownKind(s.to_string())),
        }
    }
}
