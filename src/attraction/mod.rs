//! Saturating attraction model.
//!
//! - [`site_attraction`] — a site's own attraction contribution, saturating
//!   at utility 100
//! - [`capture_probability`] — probability of capturing a customer's demand,
//!   saturating at total attraction 133

mod curves;

pub use curves::{
    capture_probability, site_attraction, ATTRACTION_SATURATION, SITE_ATTRACTION_CAP,
    UTILITY_SATURATION,
};
