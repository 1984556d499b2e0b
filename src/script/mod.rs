/*
    Script configurations: how an output of the wallet is built.

    The commander only ever acts on the multisig variant. Simple
    configs belong to the single-sig path of the firmware and unknown
    variants carry their raw tag so they can be rejected by value.
*/

pub mod multisig;

pub use multisig::{
    Multisig,
    MultisigScriptType
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptConfig {
    Simple(SimpleType),
    Multisig(Multisig),
    Unknown(u32)
}

/**
    Single-sig output types.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SimpleType {
    P2wpkhP2sh,
    P2wpkh,
    P2tr
}

impl SimpleType {
    pub const ALL: [SimpleType; 3] = [SimpleType::P2wpkhP2sh, SimpleType::P2wpkh, SimpleType::P2tr];
}

impl ScriptConfig {
    /**
        Short variant name for logs.
    */
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptConfig::Simple(_) => "simple",
            ScriptConfig::Multisig(_) => "multisig",
            ScriptConfig::Unknown(_) => "unknown"
        }
    }
}
