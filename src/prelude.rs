//! lnetwork prelude.
//!
//! This module contains the most used types and functions that you can
//! import easily as a group.
//!
//! ```
//! use lnetwork::prelude::*;
//!
//! let mut net = LNetworkBuilder::new()
//!     .antenna(25.0, -20.0)
//!     .frequency(7.1)
//!     .capacitor(10.0, 500.0)
//!     .tap(3.0)
//!     .build()
//!     .unwrap();
//! let z = net.transform().unwrap();
//! assert!(net.compute_swr(net.compute_gamma(z).unwrap()).value() >= 1.0);
//! ```

#[doc(no_inline)]
pub use crate::command::{Command, Outcome, Session};

#[doc(no_inline)]
pub use crate::complex::Complex;

#[doc(no_inline)]
pub use crate::consts::{INDUCTOR_MAX_TAPS, Z_REF};

#[doc(no_inline)]
pub use crate::enums::Topology;

#[doc(no_inline)]
pub use crate::error::TuningError;

#[doc(no_inline)]
pub use crate::file::{parse_config, read_config, ConfigSummary};

#[doc(no_inline)]
pub use crate::math::Swr;

#[doc(no_inline)]
pub use crate::network::{LNetwork, LNetworkBuilder};

#[doc(no_inline)]
pub use crate::report::TuningReport;
