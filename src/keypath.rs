/*
    Keypaths travel through the commander untouched: the registration
    engine compares them element by element, so nothing here may sort,
    dedup or otherwise normalize the indices.

    The `m/48'/0'/0'/2'` string form exists for logs, configs and tests.
*/

use std::str::FromStr;
use thiserror::Error;

/// Offset of the first hardened child index.
pub const HARDENED: u32 = 0x8000_0000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Keypath {
    children: Vec<u32>
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeypathError {
    #[error("keypath must start with 'm': {0}")]
    MissingRoot(String),
    #[error("bad keypath element '{0}'")]
    BadElement(String),
    #[error("index {0} collides with the hardened range")]
    IndexTooLarge(u32)
}

impl Keypath {
    pub fn new(children: Vec<u32>) -> Self {
        Self {
            children
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<Vec<u32>> for Keypath {
    fn from(children: Vec<u32>) -> Self {
        Self::new(children)
    }
}

impl From<&[u32]> for Keypath {
    fn from(children: &[u32]) -> Self {
        Self::new(children.to_vec())
    }
}

impl FromStr for Keypath {
    type Err = KeypathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let mut elements = path.split('/');
        if elements.next() != Some("m") {
            return Err(KeypathError::MissingRoot(path.to_string()));
        }

        let mut children: Vec<u32> = vec![];
        for element in elements {
            //A trailing ' or h marks a hardened child
            let (digits, hardened) = match element.strip_suffix('\'').or_else(|| element.strip_suffix('h')) {
                Some(digits) => (digits, true),
                None => (element, false)
            };

            let index: u32 = digits
                .parse()
                .map_err(|_| KeypathError::BadElement(element.to_string()))?;
            if index >= HARDENED {
                return Err(KeypathError::IndexTooLarge(index));
            }

            children.push(if hardened { index + HARDENED } else { index });
        }

        Ok(Self::new(children))
    }
}
