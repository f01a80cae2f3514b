use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codec::{Address, Hash32};
use crate::core::calculate_pool_address;
use crate::error::{PoolAddressError, Result};

const PANCAKE_FACTORY_ADDRESS: &str = "0xbcfccbde45ce874adcb698cc183debcf17952812";
const PANCAKE_FACTORY_CODE: &str =
    "0xd0d4c4cd0848c93cb4fd1f498d7013ee6bfb25783ea21593d5834f5d250ece66";
const PANCAKE2_FACTORY_ADDRESS: &str = "0xca143ce32fe78f1f7019d7d551a6402fc5350c73";
const PANCAKE2_FACTORY_CODE: &str =
    "0x00fb7f630766e6a796048ea87d01acd3068e8ff67d078148a3fa3f4a84f69bd5";
const BAKERY_FACTORY_ADDRESS: &str = "0x01bf7c66c6bd861915cdaae475042d3c4bae16a7";
const BAKERY_FACTORY_CODE: &str =
    "0xe2e87433120e32c4738a7d8f3271f3d872cbe16241d67537139158d90bac61d3";
const JUL_FACTORY_ADDRESS: &str = "0x553990f2cba90272390f62c5bdb1681ffc899675";
const JUL_FACTORY_CODE: &str =
    "0xb1e98e21a5335633815a8cfb3b580071c2e4561c50afd57a8746def9ed890b18";
const APE_FACTORY_ADDRESS: &str = "0x0841bd0b734e4f5853f0dd8d7ea041c241fb0da6";
const APE_FACTORY_CODE: &str =
    "0xf4ccce374816856d11f00e4069e7cada164065686fbef53c6167a63ec2fd8c5b";
const BURGER_FACTORY_ADDRESS: &str = "0x8a1e9d3aebbbd5ba2a64d3355a48dd5e9b511256";
const BURGER_FACTORY_CODE: &str =
    "0x9e2f28ebeccb25f4ead99c3f563bb6a201e2014a501d90dd0a9382bb1f5f4d0e";
const BI_FACTORY_ADDRESS: &str = "0x858e3312ed3a876947ea49d572a7c42de08af7ee";
const BI_FACTORY_CODE: &str =
    "0xfea293c909d87cd4153593f077b76bb7e94340200f4ee84211ae8e4f9bd7ffdf";
const MDEX_FACTORY_ADDRESS: &str = "0x3cd1c46068daea5ebb0d3f55f6915b10648062b8";
const MDEX_FACTORY_CODE: &str =
    "0x0d994d996174b05cfc7bed897dc1b20b4c458fc8d64fe98bc78b3c64a6b4d093";
const CAFE_FACTORY_ADDRESS: &str = "0x3e708fdbe3ada63fc94f8f61811196f1302137ad";
const CAFE_FACTORY_CODE: &str =
    "0x90bcdb5d0bf0e8db3852b0b7d7e05cc8f7c6eb6d511213c5ba02d1d1dbeda8d3";
const JET_FACTORY_ADDRESS: &str = "0x0eb58e5c8aa63314ff5547289185cc4583dfcbd5";
const JET_FACTORY_CODE: &str =
    "0x3125d0a15fa7af49ce234ba1cf5f931bad0504242e0e1ee9fcd7d1d7aa88c651";
const BABY_FACTORY_ADDRESS: &str = "0x86407bea2078ea5f5eb5a52b2caa963bc1f889da";
const BABY_FACTORY_CODE: &str =
    "0x48c8bec5512d397a5d512fbb7d83d515e7b6d91e9838730bd1aa1b16575da7f5";
const OPENOCEAN_FACTORY_ADDRESS: &str = "0xd76d8c2a7ca0a1609aea0b9b5017b3f7782891bf";
const OPENOCEAN_FACTORY_CODE: &str =
    "0xe7da666f616ba3bdb18c6908b22d556a41659bdd652762c246b8d1fa4f7506b4";

/// Identifier of a supported exchange.
///
/// A closed set with stable string identifiers; parsing any other string
/// fails with `UnknownExchange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExchangeId {
    Pancake,
    Pancake2,
    Bakery,
    Jul,
    Ape,
    Burger,
    Bi,
    Mdex,
    Cafe,
    Jet,
    Baby,
    Openocean,
}

impl ExchangeId {
    /// Every supported exchange, in registry order.
    pub const ALL: [ExchangeId; 12] = [
        ExchangeId::Pancake,
        ExchangeId::Pancake2,
        ExchangeId::Bakery,
        ExchangeId::Jul,
        ExchangeId::Ape,
        ExchangeId::Burger,
        ExchangeId::Bi,
        ExchangeId::Mdex,
        ExchangeId::Cafe,
        ExchangeId::Jet,
        ExchangeId::Baby,
        ExchangeId::Openocean,
    ];

    /// The stable string identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeId::Pancake => "pancake",
            ExchangeId::Pancake2 => "pancake2",
            ExchangeId::Bakery => "bakery",
            ExchangeId::Jul => "jul",
            ExchangeId::Ape => "ape",
            ExchangeId::Burger => "burger",
            ExchangeId::Bi => "bi",
            ExchangeId::Mdex => "mdex",
            ExchangeId::Cafe => "cafe",
            ExchangeId::Jet => "jet",
            ExchangeId::Baby => "baby",
            ExchangeId::Openocean => "openocean",
        }
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExchangeId {
    type Err = PoolAddressError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pancake" => Ok(ExchangeId::Pancake),
            "pancake2" => Ok(ExchangeId::Pancake2),
            "bakery" => Ok(ExchangeId::Bakery),
            "jul" => Ok(ExchangeId::Jul),
            "ape" => Ok(ExchangeId::Ape),
            "burger" => Ok(ExchangeId::Burger),
            "bi" => Ok(ExchangeId::Bi),
            "mdex" => Ok(ExchangeId::Mdex),
            "cafe" => Ok(ExchangeId::Cafe),
            "jet" => Ok(ExchangeId::Jet),
            "baby" => Ok(ExchangeId::Baby),
            "openocean" => Ok(ExchangeId::Openocean),
            other => Err(PoolAddressError::UnknownExchange(other.to_string())),
        }
    }
}

/// Factory identity of one exchange: deployer address plus the hash of the
/// pool creation bytecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryDescriptor {
    pub address: Address,
    pub init_code_hash: Hash32,
}

impl FactoryDescriptor {
    fn from_constants(address: &str, init_code_hash: &str) -> Self {
        FactoryDescriptor {
            address: Address::from_heximal(address)
                .expect("Factory address constant should be a valid heximal address"),
            init_code_hash: Hash32::from_heximal(init_code_hash)
                .expect("Init code hash constant should be a valid heximal hash"),
        }
    }
}

static FACTORY_REGISTRY: Lazy<HashMap<ExchangeId, FactoryDescriptor>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        ExchangeId::Pancake,
        FactoryDescriptor::from_constants(PANCAKE_FACTORY_ADDRESS, PANCAKE_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Pancake2,
        FactoryDescriptor::from_constants(PANCAKE2_FACTORY_ADDRESS, PANCAKE2_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Bakery,
        FactoryDescriptor::from_constants(BAKERY_FACTORY_ADDRESS, BAKERY_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Jul,
        FactoryDescriptor::from_constants(JUL_FACTORY_ADDRESS, JUL_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Ape,
        FactoryDescriptor::from_constants(APE_FACTORY_ADDRESS, APE_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Burger,
        FactoryDescriptor::from_constants(BURGER_FACTORY_ADDRESS, BURGER_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Bi,
        FactoryDescriptor::from_constants(BI_FACTORY_ADDRESS, BI_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Mdex,
        FactoryDescriptor::from_constants(MDEX_FACTORY_ADDRESS, MDEX_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Cafe,
        FactoryDescriptor::from_constants(CAFE_FACTORY_ADDRESS, CAFE_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Jet,
        FactoryDescriptor::from_constants(JET_FACTORY_ADDRESS, JET_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Baby,
        FactoryDescriptor::from_constants(BABY_FACTORY_ADDRESS, BABY_FACTORY_CODE),
    );
    map.insert(
        ExchangeId::Openocean,
        FactoryDescriptor::from_constants(OPENOCEAN_FACTORY_ADDRESS, OPENOCEAN_FACTORY_CODE),
    );
    map
});

/// Returns the factory descriptor of a supported exchange.
///
/// Infallible: the registry covers every `ExchangeId` variant.
pub fn resolve_factory(exchange: ExchangeId) -> &'static FactoryDescriptor {
    FACTORY_REGISTRY
        .get(&exchange)
        .expect("Registry should cover every exchange id")
}

/// Resolves a factory descriptor from a string identifier.
pub fn resolve_factory_by_name(name: &str) -> Result<&'static FactoryDescriptor> {
    let exchange = name.parse::<ExchangeId>()?;
    Ok(resolve_factory(exchange))
}

/// Non-failing factory address lookup, for listing contexts.
pub fn lookup_factory_address(name: &str) -> Option<Address> {
    name.parse::<ExchangeId>()
        .ok()
        .map(|exchange| resolve_factory(exchange).address)
}

/// Computes the pool address a supported exchange would deploy for a
/// token pair.
pub fn pool_address_for_exchange(
    exchange: ExchangeId,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address> {
    let descriptor = resolve_factory(exchange);
    let pool = calculate_pool_address(
        &descriptor.address,
        &descriptor.init_code_hash,
        token_a,
        token_b,
    )?;
    debug!("derived pool {pool} on exchange {exchange}");
    Ok(pool)
}

/// String-identifier variant of [`pool_address_for_exchange`].
///
/// Exchange resolution runs before any token validation: an unknown name
/// reports `UnknownExchange` regardless of token validity.
pub fn pool_address_for_exchange_by_name(
    name: &str,
    token_a: &Address,
    token_b: &Address,
) -> Result<Address> {
    let exchange = name.parse::<ExchangeId>()?;
    pool_address_for_exchange(exchange, token_a, token_b)
}

/// Heximal variant: resolves the exchange first, then parses the token
/// strings, and returns the pool address in EIP-55 checksum form.
pub fn pool_address_for_exchange_heximal(
    name: &str,
    token_a: &str,
    token_b: &str,
) -> Result<String> {
    let exchange = name.parse::<ExchangeId>()?;
    let token_a = Address::from_heximal(token_a)?;
    let token_b = Address::from_heximal(token_b)?;
    let pool = pool_address_for_exchange(exchange, &token_a, &token_b)?;
    Ok(pool.to_checksum_heximal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_stable_identifier() {
        for exchange in ExchangeId::ALL {
            let parsed: ExchangeId = exchange.as_str().parse().unwrap();
            assert_eq!(parsed, exchange);
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = "foo and bar".parse::<ExchangeId>().unwrap_err();
        assert_eq!(
            err,
            PoolAddressError::UnknownExchange("foo and bar".to_string())
        );
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert!("Pancake".parse::<ExchangeId>().is_err());
    }

    #[test]
    fn registry_covers_all_exchanges() {
        for exchange in ExchangeId::ALL {
            let descriptor = resolve_factory(exchange);
            assert!(!descriptor.address.is_zero());
        }
    }

    #[test]
    fn resolve_by_name_known_and_unknown() {
        assert!(resolve_factory_by_name("pancake").is_ok());
        assert!(matches!(
            resolve_factory_by_name("sushiswap").unwrap_err(),
            PoolAddressError::UnknownExchange(_)
        ));
    }

    #[test]
    fn lookup_returns_factory_address() {
        let address = lookup_factory_address("pancake").unwrap();
        assert_eq!(
            address,
            Address::from_heximal(PANCAKE_FACTORY_ADDRESS).unwrap()
        );
    }

    #[test]
    fn lookup_returns_none_for_unknown() {
        assert!(lookup_factory_address("not-a-real-exchange").is_none());
    }

    #[test]
    fn serde_uses_stable_identifier() {
        let json = serde_json::to_string(&ExchangeId::Pancake2).unwrap();
        assert_eq!(json, "\"pancake2\"");
        let back: ExchangeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExchangeId::Pancake2);
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(ExchangeId::Openocean.to_string(), "openocean");
    }
}
