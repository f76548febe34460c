use crate::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// Hidden role of a player, revealed on elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// Holds the majority secret word.
    Civilian,
    /// Holds a different, related word.
    Undercover,
    /// Holds no word at all.
    White,
}

impl Role {
    /// Whether this role was dealt a word at all.
    pub fn has_word(&self) -> bool {
        !matches!(self, Self::White)
    }
}

impl TryFrom<char> for Role {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Self::Civilian),
            'U' => Ok(Self::Undercover),
            'W' => Ok(Self::White),
            other => Err(Error::MalformedState(format!("unknown role {:?}", other))),
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(Error::MalformedState(format!("unknown role {:?}", s))),
        }
    }
}

impl From<Role> for char {
    fn from(role: Role) -> Self {
        match role {
            Role::Civilian => 'C',
            Role::Undercover => 'U',
            Role::White => 'W',
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
