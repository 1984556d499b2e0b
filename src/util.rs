/*
    Small value types shared by requests, engines and the coin policy.
*/

use serde::{
    Deserialize,
    Serialize
};

/**
    Networks the Bitcoin application can serve.
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coin {
    Btc,
    Tbtc,
    Ltc,
    Tltc
}

impl Coin {
    pub const ALL: [Coin; 4] = [Coin::Btc, Coin::Tbtc, Coin::Ltc, Coin::Tltc];

    /**
        Ticker as used in configs and logs.
    */
    pub fn ticker(&self) -> &'static str {
        match self {
            Coin::Btc => "btc",
            Coin::Tbtc => "tbtc",
            Coin::Ltc => "ltc",
            Coin::Tltc => "tltc"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Coin;

    #[test]
    /// Log output and config files spell coins the same way.
    fn ticker_matches_config_spelling() {
        for coin in Coin::ALL.iter() {
            let parsed: Coin = toml::Value::String(coin.ticker().to_string()).try_into().unwrap();
            assert_eq!(parsed, *coin);
            assert_eq!(coin.to_string(), coin.ticker());
        }
    }
}
