/*
    Decoded host requests and the responses the commander fills in.

    Every "which variant" tag of the host protocol is a Rust enum here.
    Tags this firmware does not know survive decoding as `Unknown(tag)`
    so the commander rejects them instead of guessing.
*/

use crate::{
    keypath::Keypath,
    script::ScriptConfig,
    util::Coin,
    xpub::{
        RegisterXPubType,
        XPubType
    }
};

/// Capacity of the pub response, including the terminator added by the host encoder.
pub const PUB_MAX_LEN: usize = 113;

/**
    What a pub request asks for.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubOutput {
    XPub(XPubType),
    ScriptConfig(ScriptConfig),
    Unknown(u32)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubRequest {
    pub coin: Coin,
    pub keypath: Keypath,
    /// Show the result on the device and wait for the user to confirm it
    pub display: bool,
    pub output: PubOutput
}

/**
    Caller owned output buffer of a pub request. Only a successful
    dispatch writes to it.
*/
#[derive(Clone)]
pub struct PubResponse {
    buf: [u8; PUB_MAX_LEN],
    len: usize
}

impl PubResponse {
    pub fn new() -> Self {
        Self {
            buf: [0u8; PUB_MAX_LEN],
            len: 0
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_str(&self) -> &str {
        //Only ever written from a &str
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /**
        Copies `value` in if it fits next to the terminator.
        Returns false and leaves the buffer untouched otherwise.
    */
    pub(crate) fn write(&mut self, value: &str) -> bool {
        let bytes = value.as_bytes();
        if bytes.len() >= PUB_MAX_LEN {
            return false;
        }

        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.buf[bytes.len()..].iter_mut().for_each(|b| *b = 0);
        self.len = bytes.len();
        true
    }
}

impl Default for PubResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PubResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubResponse")
         .field("pub", &self.as_str())
         .finish()
    }
}

/**
    The tuple a registration is identified by.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfigRegistration {
    pub coin: Coin,
    pub script_config: ScriptConfig,
    pub keypath: Keypath
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsScriptConfigRegisteredRequest {
    pub registration: ScriptConfigRegistration
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterScriptConfigRequest {
    pub registration: ScriptConfigRegistration,
    /// User chosen account name, shown on the device
    pub name: String,
    pub xpub_type: RegisterXPubType
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BtcRequest {
    IsScriptConfigRegistered(IsScriptConfigRegisteredRequest),
    RegisterScriptConfig(RegisterScriptConfigRequest),
    Unknown(u32)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BtcResponse {
    Success,
    IsScriptConfigRegistered {
        is_registered: bool
    }
}
