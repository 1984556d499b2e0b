/*
    Multisig script configuration: an m-of-n threshold over an
    ordered list of participant xpubs. The commander hands it to the
    engines exactly as received.
*/

use crate::xpub::XPub;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multisig {
    pub threshold: u32,
    pub xpubs: Vec<XPub>,
    /// Position of this device's own xpub in `xpubs`
    pub our_xpub_index: u32,
    pub script_type: MultisigScriptType
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MultisigScriptType {
    P2wsh,
    P2wshP2sh
}

impl Multisig {
    pub fn new(
        threshold: u32,
        xpubs: Vec<XPub>,
        our_xpub_index: u32,
        script_type: MultisigScriptType
    ) -> Self {
        Self {
            threshold,
            xpubs,
            our_xpub_index,
            script_type
        }
    }

    /**
        Number of cosigners (the n of m-of-n).
    */
    pub fn signers(&self) -> usize {
        self.xpubs.len()
    }
}
