#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
pub use config::{NETWORKS, NetworkConfig, network_by_l1_chain_id};

mod errors;
pub use errors::{DeriveError, ProviderError};

mod traits;
pub use traits::{BlockInfo, L1ChainProvider, L2ChainProvider, SourceTransaction};

mod oracle;
pub use oracle::target_l2_block;

mod pipeline;
pub use pipeline::FacetDeriver;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
