/*
    The Bitcoin application as seen from the commander: coin policy,
    address derivation and script config registration. Implementations
    live outside this crate; the commander only calls through these traits.

    Calls that involve the user (`display`, registration confirmation)
    block until the user answered. Declining is reported as
    `Error::UserAbort`, an ordinary result like any other.
*/

use thiserror::Error;

use crate::{
    script::{
        Multisig,
        ScriptConfig
    },
    util::Coin,
    xpub::RegisterXPubType
};

/**
    Result codes of the Bitcoin application. Success is `Ok`.
*/
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    #[error("aborted by the user")]
    UserAbort,
    #[error("invalid input")]
    InvalidInput,
    #[error("already exists")]
    Duplicate,
    #[error("invalid application state")]
    State,
    #[error("unknown failure")]
    Unknown
}

pub trait CoinPolicy {
    /**
        Whether requests for `coin` may be served at all.
    */
    fn enabled(&self, coin: Coin) -> bool;
}

pub trait AddressEngine {
    /**
        Derives the multisig address at `keypath`. With `display` set the
        address is shown and the call returns once the user confirmed or
        declined it.
    */
    fn address_multisig(
        &mut self,
        coin: Coin,
        multisig: &Multisig,
        keypath: &[u32],
        display: bool
    ) -> Result<String, Error>;
}

pub trait RegistrationEngine {
    /**
        Looks up a registration by its exact (coin, script config, keypath)
        tuple. A missing registration is `Ok(false)`; `Err` means the lookup
        itself failed.
    */
    fn is_script_config_registered(
        &self,
        coin: Coin,
        script_config: &ScriptConfig,
        keypath: &[u32]
    ) -> Result<bool, Error>;

    /**
        Asks the user to confirm and then stores a new registration.
    */
    fn register_script_config(
        &mut self,
        coin: Coin,
        script_config: &ScriptConfig,
        keypath: &[u32],
        name: &str,
        xpub_type: RegisterXPubType
    ) -> Result<(), Error>;
}
