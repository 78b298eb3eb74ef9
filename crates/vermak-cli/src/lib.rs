//! vermak-cli
//! ==========
//!
//! Command-line previews for the `vermak-core` map-search controller.
//!
//! This crate primarily provides a binary (`vermak`). The library target only
//! carries this overview so it renders on docs.rs.
//!
//! Quick start
//! -----------
//!
//! ```text
//! vermak --help
//! vermak profiles
//! vermak results nearby.json
//! vermak details details.json
//! ```
//!
//! For programmatic access use the [`vermak-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
