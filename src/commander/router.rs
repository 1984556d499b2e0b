/*
    Decides which subsystem owns a pub request. Only multisig script
    configs are served by this commander; xpubs and simple script
    configs are answered by the single-sig path and anything
    unrecognised is refused.
*/

use tracing::warn;

use crate::{
    error::Error,
    request::PubOutput,
    script::{
        Multisig,
        ScriptConfig
    }
};

pub(crate) fn route(output: &PubOutput) -> Result<&Multisig, Error> {
    match output {
        PubOutput::XPub(xpub_type) => {
            warn!(xpub_type = %xpub_type, "xpub requests are not served here");
            Err(Error::InvalidInput)
        },
        PubOutput::ScriptConfig(script_config) => match script_config {
            ScriptConfig::Multisig(multisig) => Ok(multisig),
            ScriptConfig::Simple(simple_type) => {
                warn!(simple_type = %simple_type, "simple script configs are not served here");
                Err(Error::InvalidInput)
            },
            ScriptConfig::Unknown(tag) => {
                warn!(tag, "unknown script config");
                Err(Error::InvalidInput)
            }
        },
        PubOutput::Unknown(tag) => {
            warn!(tag, "unknown pub output");
            Err(Error::InvalidInput)
        }
    }
}
