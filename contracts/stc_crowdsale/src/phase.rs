use crate::types::{Phase, SaleConfig};

impl Phase {
    pub fn accepts_purchases(self) -> bool {
        matches!(self, Phase::WhitelistSale | Phase::PublicSale)
    }
}

/// Phase the sale is in at `now`. Window starts are inclusive, ends exclusive.
pub fn phase_at(config: &SaleConfig, now: u64) -> Phase {
    if now < config.open_whitelist_time {
        Phase::NotStarted
    } else if now < config.open_public_time {
        Phase::WhitelistSale
    } else if now < config.close_time {
        Phase::PublicSale
    } else {
        Phase::Closed
    }
}

pub fn has_closed(config: &SaleConfig, now: u64) -> bool {
    now >= config.close_time
}
