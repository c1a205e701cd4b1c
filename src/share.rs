use std::fmt;
use std::num::NonZeroU64;

use num::Integer;

/// How many pieces of eight to share out, and among how many crew.
///
/// The crew count includes the captain.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DistributionRequest {
    pub total: u64,
    pub crew_count: NonZeroU64,
}

impl DistributionRequest {
    pub fn new(total: u64, crew_count: NonZeroU64) -> Self {
        DistributionRequest { total, crew_count }
    }

    pub fn shares(&self) -> Shares {
        calculate_shares(self.total, self.crew_count)
    }
}

/// The outcome of a distribution: what each regular crew member receives and
/// what is left over.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Shares {
    pub share_each: u64,
    pub remainder: u64,
}

impl Shares {
    pub fn captain_share(&self) -> u64 {
        self.share_each * 2
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Each crew member gets {} piece(s) of eight.", self.share_each)?;
        writeln!(f, "The captain gets {} piece(s) of eight.", self.captain_share())?;
        if self.remainder != 0 {
            writeln!(f, "Remainder: {} piece(s) of eight left over.", self.remainder)?;
        }
        Ok(())
    }
}

/// Splits `total` so that the captain gets twice a regular share.
///
/// The captain occupies two slots, so the divisor is `crew_count + 1`.
pub fn calculate_shares(total: u64, crew_count: NonZeroU64) -> Shares {
    let (share_each, remainder) = match crew_count.get().checked_add(1) {
        Some(divisor) => total.div_rem(&divisor),
        // A divisor of 2^64 is larger than any total.
        None => (0, total),
    };
    Shares {
        share_each,
        remainder,
    }
}
