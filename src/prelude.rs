/*
    This module contains the default imports for the library.

    Import the library using:
        use btc_commander::prelude::*;
    to quickly import the essential parts of the library.
*/

pub use crate::{

    app::{
        AddressEngine,
        CoinPolicy,
        RegistrationEngine
    },

    commander::{
        Commander,
        Error
    },

    config::CoinConfig,

    keypath::{
        Keypath,
        HARDENED
    },

    request::{
        BtcRequest,
        BtcResponse,
        IsScriptConfigRegisteredRequest,
        PubOutput,
        PubRequest,
        PubResponse,
        RegisterScriptConfigRequest,
        ScriptConfigRegistration,
        PUB_MAX_LEN
    },

    script::{
        Multisig,
        MultisigScriptType,
        ScriptConfig,
        SimpleType
    },

    util::Coin,

    xpub::{
        RegisterXPubType,
        XPub,
        XPubType
    }

};
