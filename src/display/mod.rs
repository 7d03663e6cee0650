//! Display subsystem - 7-segment digit patterns and GPIO rendering.
//!
//! Four independent digit positions (two players × tens/ones). The
//! segment tables in [`segments`] are pure lookup data; [`renderer`]
//! drives them onto `embedded-hal` output pins, applying the
//! common-anode polarity from `config`.

pub mod renderer;
pub mod segments;
