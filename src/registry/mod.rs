//! Exchange registry
//!
//! The closed set of supported exchanges and their factory descriptors,
//! plus the high-level entry points that resolve an exchange identifier
//! before running the derivation.

pub mod exchanges;

pub use exchanges::{
    lookup_factory_address, pool_address_for_exchange, pool_address_for_exchange_by_name,
    pool_address_for_exchange_heximal, resolve_factory, resolve_factory_by_name, ExchangeId,
    FactoryDescriptor,
};
