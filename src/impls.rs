/*
    This module combines the boilerplate
    implementations of fmt::Display.
*/

use crate::{
    keypath::{
        Keypath,
        HARDENED
    },
    script::{
        Multisig,
        MultisigScriptType,
        ScriptConfig,
        SimpleType
    },
    util::Coin,
    xpub::XPubType
};
use std::fmt;

/*
    util module impls
*/
impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.ticker())
    }
}

/*
    keypath module impls
*/
impl fmt::Display for Keypath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "m")?;
        for child in self.as_slice() {
            if *child >= HARDENED {
                write!(f, "/{}'", child - HARDENED)?;
            } else {
                write!(f, "/{}", child)?;
            }
        }

        Ok(())
    }
}

/*
    xpub module impls
*/
impl fmt::Display for XPubType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/*
    script module impls
*/
impl fmt::Display for SimpleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::P2wpkhP2sh => "p2wpkh-p2sh",
            Self::P2wpkh => "p2wpkh",
            Self::P2tr => "p2tr"
        };

        write!(f, "{}", val)
    }
}

impl fmt::Display for MultisigScriptType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let val = match self {
            Self::P2wsh => "p2wsh",
            Self::P2wshP2sh => "p2wsh-p2sh"
        };

        write!(f, "{}", val)
    }
}

impl fmt::Display for Multisig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-of-{} {}", self.threshold, self.signers(), self.script_type)
    }
}

impl fmt::Display for ScriptConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Simple(simple_type) => write!(f, "simple {}", simple_type),
            Self::Multisig(multisig) => write!(f, "multisig {}", multisig),
            Self::Unknown(tag) => write!(f, "{} (tag {})", self.kind(), tag)
        }
    }
}
