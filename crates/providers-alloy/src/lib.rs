#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod l1;
pub use l1::OnlineL1Provider;

mod l2;
pub use l2::OnlineL2Provider;
