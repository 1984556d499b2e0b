/*
    Entry points for the Bitcoin commands of the host protocol.

    The commander checks preconditions, picks the application call for
    the request variant and reports the outcome in the error vocabulary
    of `crate::error`. It keeps no state between calls.
*/

mod multisig;
mod registration;
mod router;

use tracing::{
    debug,
    warn
};

pub use crate::error::Error;

use crate::{
    app::{
        AddressEngine,
        CoinPolicy,
        RegistrationEngine
    },
    request::{
        BtcRequest,
        BtcResponse,
        PubRequest,
        PubResponse
    }
};

pub struct Commander<P, A, R> {
    policy: P,
    address: A,
    registration: R
}

impl<P, A, R> Commander<P, A, R>
where
    P: CoinPolicy,
    A: AddressEngine,
    R: RegistrationEngine
{
    pub fn new(policy: P, address: A, registration: R) -> Self {
        Self {
            policy,
            address,
            registration
        }
    }

    pub fn address_engine(&self) -> &A {
        &self.address
    }

    pub fn registration_engine(&self) -> &R {
        &self.registration
    }

    pub fn into_parts(self) -> (P, A, R) {
        (self.policy, self.address, self.registration)
    }

    /**
        Handles a pub request. Disabled coins are refused before the
        request is looked at any further.
    */
    pub fn process_pub(&mut self, request: &PubRequest, response: &mut PubResponse) -> Result<(), Error> {
        if !self.policy.enabled(request.coin) {
            warn!(coin = %request.coin, "pub request for disabled coin");
            return Err(Error::Disabled);
        }

        let multisig = router::route(&request.output)?;
        multisig::address(
            &mut self.address,
            request.coin,
            multisig,
            &request.keypath,
            request.display,
            response
        )
    }

    /**
        Handles a Bitcoin request. The response variant always matches
        the request variant; an unknown request yields no response.
    */
    pub fn process(&mut self, request: &BtcRequest) -> Result<BtcResponse, Error> {
        match request {
            BtcRequest::IsScriptConfigRegistered(request) => {
                let is_registered = registration::is_registered(&self.registration, request)?;
                debug!(is_registered, "script config lookup done");
                Ok(BtcResponse::IsScriptConfigRegistered {
                    is_registered
                })
            },
            BtcRequest::RegisterScriptConfig(request) => {
                registration::register(&mut self.registration, request)?;
                Ok(BtcResponse::Success)
            },
            BtcRequest::Unknown(tag) => {
                warn!(tag, "unknown btc request");
                Err(Error::Generic)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app,
        config::CoinConfig,
        keypath::Keypath,
        request::PubOutput,
        script::{
            Multisig,
            MultisigScriptType,
            ScriptConfig
        },
        util::Coin,
        xpub::RegisterXPubType
    };

    /// Engine that must never be reached.
    struct Unreachable;

    impl AddressEngine for Unreachable {
        fn address_multisig(&mut self, _: Coin, _: &Multisig, _: &[u32], _: bool) -> Result<String, app::Error> {
            panic!("address engine called")
        }
    }

    impl RegistrationEngine for Unreachable {
        fn is_script_config_registered(&self, _: Coin, _: &ScriptConfig, _: &[u32]) -> Result<bool, app::Error> {
            panic!("registration engine called")
        }

        fn register_script_config(
            &mut self,
            _: Coin,
            _: &ScriptConfig,
            _: &[u32],
            _: &str,
            _: RegisterXPubType
        ) -> Result<(), app::Error> {
            panic!("registration engine called")
        }
    }

    fn multisig_request(coin: Coin) -> PubRequest {
        PubRequest {
            coin,
            keypath: Keypath::new(vec![]),
            display: false,
            output: PubOutput::ScriptConfig(ScriptConfig::Multisig(Multisig::new(1, vec![], 0, MultisigScriptType::P2wsh)))
        }
    }

    #[test]
    fn disabled_coin_short_circuits() {
        let mut commander = Commander::new(CoinConfig::new(vec![Coin::Btc]), Unreachable, Unreachable);
        let mut response = PubResponse::new();

        let result = commander.process_pub(&multisig_request(Coin::Ltc), &mut response);
        assert_eq!(result, Err(Error::Disabled));
        assert!(response.is_empty());
    }

    #[test]
    fn disabled_wins_over_invalid_output() {
        let mut commander = Commander::new(CoinConfig::new(vec![]), Unreachable, Unreachable);
        let mut request = multisig_request(Coin::Btc);
        request.output = PubOutput::Unknown(42);

        assert_eq!(commander.process_pub(&request, &mut PubResponse::new()), Err(Error::Disabled));
    }

    #[test]
    fn unknown_request_is_generic() {
        let mut commander = Commander::new(CoinConfig::default(), Unreachable, Unreachable);
        assert_eq!(commander.process(&BtcRequest::Unknown(3)), Err(Error::Generic));
    }
}
