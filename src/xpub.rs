/*
    Participant key material of multisig script configs and the
    extended key encodings a host may ask for.

    Serialized extended public keys are 78 bytes:
        version (4) | depth (1) | parent fingerprint (4) | child number (4) | chaincode (32) | key (33)
    Only the fields after the version live in `XPub`. The key bytes are
    carried exactly as the host sent them; checking that they form a
    valid point is left to the Bitcoin application.
*/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XPub {
    pub depth: u8,
    pub parent_fingerprint: [u8; 4],
    pub child_num: u32,
    pub chain_code: [u8; 32],
    /// Compressed SEC1 key, unchecked
    pub public_key: [u8; 33]
}

impl XPub {
    pub fn from_parts(
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_num: u32,
        chain_code: [u8; 32],
        public_key: [u8; 33]
    ) -> Self {
        Self {
            depth,
            parent_fingerprint,
            child_num,
            chain_code,
            public_key
        }
    }
}

/**
    Extended public key encodings of the key export path.
    Capitalised variants are the SLIP-0132 multisig versions.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum XPubType {
    Tpub,
    Xpub,
    Ypub,
    Zpub,
    Vpub,
    Upub,
    CapitalVpub,
    CapitalZpub,
    CapitalUpub,
    CapitalYpub
}

impl XPubType {
    pub const ALL: [XPubType; 10] = [
        XPubType::Tpub,
        XPubType::Xpub,
        XPubType::Ypub,
        XPubType::Zpub,
        XPubType::Vpub,
        XPubType::Upub,
        XPubType::CapitalVpub,
        XPubType::CapitalZpub,
        XPubType::CapitalUpub,
        XPubType::CapitalYpub
    ];

    /**
        Leading characters of an encoded key of this type.
    */
    pub fn prefix(&self) -> &'static str {
        match self {
            XPubType::Tpub => "tpub",
            XPubType::Xpub => "xpub",
            XPubType::Ypub => "ypub",
            XPubType::Zpub => "zpub",
            XPubType::Vpub => "vpub",
            XPubType::Upub => "upub",
            XPubType::CapitalVpub => "Vpub",
            XPubType::CapitalZpub => "Zpub",
            XPubType::CapitalUpub => "Upub",
            XPubType::CapitalYpub => "Ypub"
        }
    }
}

/**
    How the device shows the participant xpubs of a script config
    while asking the user to confirm its registration.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RegisterXPubType {
    /// Electrum style: Zpub/Vpub for p2wsh, Ypub/Upub for p2wsh-p2sh
    AutoElectrum,
    /// Plain xpub on mainnet, tpub on testnets
    AutoXpubTpub
}
