use crate::errors::*;

/// Variable data field indicator.
///
/// A pair of single characters; space is the conventional blank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Indicator(pub [char; 2]);

impl Indicator {
    /// Creates an indicator from the given slice.
    ///
    /// ### Errors
    /// Will return `Error::IndicatorArity` if `chars.len() != 2`.
    pub fn from_slice(chars: &[char]) -> Result<Self> {
        match *chars {
            [first, second] => Ok(Indicator([first, second])),
            _ => Err(Error::IndicatorArity(chars.len())),
        }
    }

    pub fn first(&self) -> char {
        self.0[0]
    }

    pub fn second(&self) -> char {
        self.0[1]
    }
}

impl Default for Indicator {
    fn default() -> Self {
        Indicator([' ', ' '])
    }
}

impl From<[char; 2]> for Indicator {
    fn from(s: [char; 2]) -> Indicator {
        Indicator(s)
    }
}

impl From<&'_ [char; 2]> for Indicator {
    fn from(s: &'_ [char; 2]) -> Indicator {
        Indicator(*s)
    }
}

impl TryFrom<&'_ str> for Indicator {
    type Error = Error;

    fn try_from(s: &'_ str) -> Result<Indicator> {
        Indicator::from_slice(&s.chars().collect::<Vec<_>>())
    }
}

impl PartialEq<[char; 2]> for Indicator {
    fn eq(&self, other: &[char; 2]) -> bool {
        self.0 == *other
    }
}

impl PartialEq<str> for Indicator {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

impl PartialEq<&'_ str> for Indicator {
    fn eq(&self, other: &&'_ str) -> bool {
        *self == **other
    }
}

impl PartialEq<Indicator> for str {
    fn eq(&self, other: &Indicator) -> bool {
        *other == *self
    }
}

impl PartialEq<Indicator> for &'_ str {
    fn eq(&self, other: &Indicator) -> bool {
        *other == **self
    }
}
