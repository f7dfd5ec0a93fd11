//! Site logic that does not depend on the renderer.

pub mod access_gate;
pub mod app_state;
pub mod contact;
pub mod content;
pub mod estimate;
pub mod money;

pub use access_gate::{GateStatus, SubmitOutcome, SHAKE_DURATION};
pub use app_state::AppState;
pub use contact::{ContactForm, ContactSubject};
pub use content::{search_auction_houses, FaqAccordion};
pub use estimate::{CostEstimate, Destination, PriceInputError, ShippingMethod};
pub use money::format_usd;
