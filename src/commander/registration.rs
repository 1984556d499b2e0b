/*
    Script config registration queries. The registration tuple is
    forwarded as is; matching is the engine's business.
*/

use tracing::{
    debug,
    warn
};

use crate::{
    app::RegistrationEngine,
    error::Error,
    request::{
        IsScriptConfigRegisteredRequest,
        RegisterScriptConfigRequest
    }
};

pub(crate) fn is_registered<R>(
    engine: &R,
    request: &IsScriptConfigRegisteredRequest
) -> Result<bool, Error>
where
    R: RegistrationEngine + ?Sized
{
    let reg = &request.registration;
    debug!(coin = %reg.coin, script_config = %reg.script_config, keypath = %reg.keypath, "is script config registered");

    //A failed lookup is not the same as "not registered"
    engine
        .is_script_config_registered(reg.coin, &reg.script_config, reg.keypath.as_slice())
        .map_err(|err| {
            warn!(%err, "registration lookup failed");
            Error::Generic
        })
}

pub(crate) fn register<R>(
    engine: &mut R,
    request: &RegisterScriptConfigRequest
) -> Result<(), Error>
where
    R: RegistrationEngine + ?Sized
{
    let reg = &request.registration;
    debug!(
        coin = %reg.coin,
        script_config = %reg.script_config,
        keypath = %reg.keypath,
        name = %request.name,
        "register script config"
    );

    engine.register_script_config(
        reg.coin,
        &reg.script_config,
        reg.keypath.as_slice(),
        &request.name,
        request.xpub_type
    )?;
    Ok(())
}
