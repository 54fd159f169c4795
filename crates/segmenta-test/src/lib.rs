//! Testing harness for Segmenta widgets.
//!
//! - [`Harness`]: mounts a widget, simulates events, queries its markup
//! - [`Selector`]: CSS-like queries over a rendered [`segmenta_core::Node`]
//! - [`Snapshot`]: markup baselines under `tests/snapshots/`
//!
//! ```
//! use segmenta_test::Harness;
//! use segmenta_widgets::Segmented;
//!
//! let mut harness = Harness::new(Segmented::new().options(["Map", "Transit"]));
//! harness.change(".ant-segmented-item-input", 1);
//! assert_eq!(harness.checked_states("input"), vec![false, true]);
//! ```

mod harness;
mod selector;
mod snapshot;

pub use harness::Harness;
pub use selector::{Selector, SelectorError, SelectorParser};
pub use snapshot::Snapshot;
