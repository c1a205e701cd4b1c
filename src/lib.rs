//! Share out pieces of eight among a crew, with the captain taking a double
//! share.
//!
//! ```
//! use std::num::NonZeroU64;
//!
//! let shares = booty::calculate_shares(10, NonZeroU64::new(2).unwrap());
//! assert_eq!((shares.share_each, shares.remainder), (3, 1));
//! assert_eq!(shares.captain_share(), 6);
//! ```

use std::io::prelude::*;

use tracing::info;

pub mod error;
pub mod logging;
mod prompt;
mod share;

pub use error::PromptError;
pub use prompt::ask_int;
pub use share::{calculate_shares, DistributionRequest, Shares};

pub const CREW_PROMPT: &str = "How many crew?";
pub const TOTAL_PROMPT: &str = "How many pieces of eight?";

/// Asks for the crew size and then the total, and works out the shares.
///
/// Stops at the first answer that is rejected.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Shares, PromptError> {
    let crew_count = ask_int(input, output, CREW_PROMPT)?;
    let total = ask_int(input, output, TOTAL_PROMPT)?.get();

    let request = DistributionRequest::new(total, crew_count);
    let shares = request.shares();
    info!(
        total,
        crew = crew_count.get(),
        share_each = shares.share_each,
        remainder = shares.remainder,
        "shared out"
    );
    Ok(shares)
}
