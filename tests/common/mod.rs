#![allow(dead_code)]

use btc_commander::{
    app,
    prelude::*
};
use rand::Rng;
use secp256k1::{
    PublicKey,
    Secp256k1,
    SecretKey
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/**
    Address engine returning a scripted result and recording its calls.
*/
pub struct RecordingAddressEngine {
    pub next: Result<String, app::Error>,
    pub calls: Vec<(Coin, Multisig, Vec<u32>, bool)>
}

impl RecordingAddressEngine {
    pub fn returning(next: Result<String, app::Error>) -> Self {
        Self {
            next,
            calls: vec![]
        }
    }
}

impl AddressEngine for RecordingAddressEngine {
    fn address_multisig(
        &mut self,
        coin: Coin,
        multisig: &Multisig,
        keypath: &[u32],
        display: bool
    ) -> Result<String, app::Error> {
        self.calls.push((coin, multisig.clone(), keypath.to_vec(), display));
        self.next.clone()
    }
}

pub struct Registration {
    pub coin: Coin,
    pub script_config: ScriptConfig,
    pub keypath: Vec<u32>,
    pub name: String,
    pub xpub_type: RegisterXPubType
}

/**
    Registration engine keeping entries in memory. Entries match on the
    exact (coin, script config, keypath) tuple.
*/
#[derive(Default)]
pub struct MemoryRegistry {
    pub entries: Vec<Registration>,
    /// Makes every lookup fail
    pub broken: bool,
    /// Returned by the next register call instead of storing
    pub next_error: Option<app::Error>
}

impl RegistrationEngine for MemoryRegistry {
    fn is_script_config_registered(
        &self,
        coin: Coin,
        script_config: &ScriptConfig,
        keypath: &[u32]
    ) -> Result<bool, app::Error> {
        if self.broken {
            return Err(app::Error::Unknown);
        }

        Ok(self.entries.iter().any(|e| {
            e.coin == coin && &e.script_config == script_config && e.keypath == keypath
        }))
    }

    fn register_script_config(
        &mut self,
        coin: Coin,
        script_config: &ScriptConfig,
        keypath: &[u32],
        name: &str,
        xpub_type: RegisterXPubType
    ) -> Result<(), app::Error> {
        if let Some(err) = self.next_error.take() {
            return Err(err);
        }
        if self.is_script_config_registered(coin, script_config, keypath)? {
            return Err(app::Error::Duplicate);
        }

        self.entries.push(Registration {
            coin,
            script_config: script_config.clone(),
            keypath: keypath.to_vec(),
            name: name.to_string(),
            xpub_type
        });
        Ok(())
    }
}

pub fn xpub(seed: u8) -> XPub {
    let secp = Secp256k1::new();
    let sk = SecretKey::from_slice(&[seed; 32]).unwrap();
    let pk = PublicKey::from_secret_key(&secp, &sk);
    XPub::from_parts(4, [seed; 4], HARDENED + 2, [seed; 32], pk.serialize())
}

/// 2-of-3 p2wsh with deterministic cosigners.
pub fn multisig() -> Multisig {
    Multisig::new(2, vec![xpub(1), xpub(2), xpub(3)], 0, MultisigScriptType::P2wsh)
}

pub fn multisig_keypath() -> Keypath {
    "m/48'/1'/0'/2'".parse().unwrap()
}

pub fn random_keypath<R: Rng>(rng: &mut R) -> Keypath {
    let len = rng.gen_range(0, 8);
    Keypath::new((0..len).map(|_| rng.gen::<u32>()).collect())
}

pub fn registration(coin: Coin, keypath: Keypath) -> ScriptConfigRegistration {
    ScriptConfigRegistration {
        coin,
        script_config: ScriptConfig::Multisig(multisig()),
        keypath
    }
}
