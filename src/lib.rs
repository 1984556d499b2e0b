/*
    Bitcoin command layer of a hardware wallet.

    Sits between the host request protocol and the Bitcoin application:
    checks that the coin is enabled, works out which subsystem owns a
    request variant, calls the application for the variants handled
    here (multisig addresses, script config registration) and reports
    every outcome in one error vocabulary.

    The application itself (derivation, registration storage, user
    confirmation, coin policy storage) is reached through the traits in
    `app`. Wire encoding and framing happen elsewhere.

    Modules:
        - commander: request entry points and routing
        - app: interface of the Bitcoin application
        - error: host facing errors and their translation
        - request, script, xpub, keypath: request value types
        - config: TOML backed coin policy
*/

//Outward facing modules
pub mod app;
pub mod commander;
pub mod config;
pub mod error;
pub mod keypath;
pub mod prelude;
pub mod request;
pub mod script;
pub mod util;
pub mod xpub;

//Modules for internal use
mod impls;
