#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod constants;
pub use constants::{
    FACET_INBOX_ADDRESS, FACET_LOG_INBOX_EVENT_SIG, FACET_TX_TYPE, L1_BLOCK_CONTRACT,
    L2_BLOCK_TIME,
};

mod alias;
pub use alias::{alias_l1_to_l2, unalias_l2_to_l1};

mod errors;
pub use errors::EnvelopeError;

mod transaction;
pub use transaction::FacetTransaction;

mod envelope;
pub use envelope::{EnvelopeKind, classify, decode_direct_envelope, encode_direct_envelope};

mod event;
pub use event::{decode_event_envelope, find_facet_log};

mod mint;
pub use mint::FctMintCalculator;

mod hash;
pub use hash::facet_transaction_hash;
