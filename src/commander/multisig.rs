/*
    Multisig address requests.
*/

use tracing::debug;

use crate::{
    app::{
        self,
        AddressEngine
    },
    error::Error,
    keypath::Keypath,
    request::PubResponse,
    script::Multisig,
    util::Coin
};

/**
    Asks the engine for the multisig address at `keypath` and writes it
    to `response`. The response is only written on success.
*/
pub(crate) fn address<A>(
    engine: &mut A,
    coin: Coin,
    multisig: &Multisig,
    keypath: &Keypath,
    display: bool,
    response: &mut PubResponse
) -> Result<(), Error>
where
    A: AddressEngine + ?Sized
{
    //`display` would resolve to tracing::field::display inside the macro
    let shown = display;
    debug!(%coin, %multisig, %keypath, display = shown, "multisig address");
    let address = engine.address_multisig(coin, multisig, keypath.as_slice(), display)?;

    if !response.write(&address) {
        debug!(len = address.len(), "address does not fit the response");
        return Err(app::Error::Unknown.into());
    }

    Ok(())
}
