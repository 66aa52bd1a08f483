//! # Delivery Slots
//!
//! The four fixed daily delivery windows for timeframe delivery, and the
//! rule for picking the next one a rider can still make.
//!
//! ## Slot Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Daily boundaries:   06:00      12:00      16:00      21:00             │
//! │                        │          │          │          │               │
//! │  now = 11:30  ───────────────────►│  12 PM (cutoff met exactly)         │
//! │  now = 11:31  ──────────────────────────────►│  4 PM (cutoff missed)    │
//! │  now = 20:31  ─────────────────────────────────────────────► rolls      │
//! │                                                     over to 6 AM        │
//! │                                                                         │
//! │  A slot is selectable iff its start is AT LEAST 30 minutes away.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution is a pure function of the provided time. The caller reads
//! the clock and tracks day rollover; when every slot today is missed the
//! result is the 6 AM slot, meaning tomorrow's.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Minimum lead time before a slot starts, in seconds.
///
/// Riders need half an hour between order confirmation and the window
/// opening.
pub const SLOT_LEAD_SECONDS: u32 = 30 * 60;

// =============================================================================
// Slot
// =============================================================================

/// One of the four fixed daily delivery windows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Window starting 06:00.
    SixAm,
    /// Window starting 12:00.
    Noon,
    /// Window starting 16:00.
    FourPm,
    /// Window starting 21:00.
    NinePm,
}

impl Slot {
    /// All slots in start-time order.
    pub const DAILY: [Slot; 4] = [Slot::SixAm, Slot::Noon, Slot::FourPm, Slot::NinePm];

    /// Slot start as seconds from midnight.
    ///
    /// Integer seconds keep the cutoff comparison exact; no clock types
    /// are constructed inside the engine.
    pub const fn start_seconds(self) -> u32 {
        match self {
            Slot::SixAm => 6 * 3600,
            Slot::Noon => 12 * 3600,
            Slot::FourPm => 16 * 3600,
            Slot::NinePm => 21 * 3600,
        }
    }

    /// Label shown to the customer.
    pub const fn label(self) -> &'static str {
        match self {
            Slot::SixAm => "6 AM",
            Slot::Noon => "12 PM",
            Slot::FourPm => "4 PM",
            Slot::NinePm => "9 PM",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses customer/CLI input like "12 PM", "noon", or "4pm".
impl FromStr for Slot {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect();

        match normalized.as_str() {
            "6am" | "sixam" => Ok(Slot::SixAm),
            "12pm" | "noon" => Ok(Slot::Noon),
            "4pm" | "fourpm" => Ok(Slot::FourPm),
            "9pm" | "ninepm" => Ok(Slot::NinePm),
            _ => Err(ValidationError::InvalidFormat {
                field: "slot".to_string(),
                reason: "must be one of: 6 AM, 12 PM, 4 PM, 9 PM".to_string(),
            }),
        }
    }
}

// =============================================================================
// Slot Resolution
// =============================================================================

/// Returns the earliest slot whose start is at least 30 minutes after
/// `now`; when none remains today, the 6 AM slot (of the next day).
///
/// The cutoff is inclusive: at exactly 30 minutes before a boundary the
/// slot is still selectable; at 29 minutes it is not. The returned value
/// is only the slot, never a date; callers track day rollover themselves.
///
/// ## Example
/// ```rust
/// use chrono::NaiveTime;
/// use ollan_checkout::slots::{next_available_slot, Slot};
///
/// let now = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
/// assert_eq!(next_available_slot(now), Slot::Noon);
///
/// let now = NaiveTime::from_hms_opt(11, 31, 0).unwrap();
/// assert_eq!(next_available_slot(now), Slot::FourPm);
/// ```
pub fn next_available_slot(now: NaiveTime) -> Slot {
    // Seconds-from-midnight arithmetic cannot wrap the way clock types
    // do; past-midnight cutoffs simply exceed every boundary.
    let cutoff = now.num_seconds_from_midnight() + SLOT_LEAD_SECONDS;

    Slot::DAILY
        .iter()
        .copied()
        .find(|slot| slot.start_seconds() >= cutoff)
        .unwrap_or(Slot::SixAm)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_cutoff_met_exactly_selects_slot() {
        // 11:30 + 30min lands exactly on 12:00; "at least 30" is met.
        assert_eq!(next_available_slot(at(11, 30)), Slot::Noon);
        assert_eq!(next_available_slot(at(5, 30)), Slot::SixAm);
        assert_eq!(next_available_slot(at(15, 30)), Slot::FourPm);
        assert_eq!(next_available_slot(at(20, 30)), Slot::NinePm);
    }

    #[test]
    fn test_cutoff_missed_by_one_minute_skips_slot() {
        assert_eq!(next_available_slot(at(11, 31)), Slot::FourPm);
        assert_eq!(next_available_slot(at(5, 31)), Slot::Noon);
        assert_eq!(next_available_slot(at(15, 31)), Slot::NinePm);
    }

    #[test]
    fn test_cutoff_comfortably_met() {
        assert_eq!(next_available_slot(at(11, 29)), Slot::Noon);
        assert_eq!(next_available_slot(at(6, 0)), Slot::Noon);
        assert_eq!(next_available_slot(at(12, 30)), Slot::FourPm);
    }

    #[test]
    fn test_rolls_over_to_six_am_after_last_slot() {
        assert_eq!(next_available_slot(at(20, 31)), Slot::SixAm);
        assert_eq!(next_available_slot(at(22, 0)), Slot::SixAm);
    }

    #[test]
    fn test_rolls_over_across_midnight() {
        // 23:45 + 30min is past midnight; no slot today qualifies.
        assert_eq!(next_available_slot(at(23, 45)), Slot::SixAm);
    }

    #[test]
    fn test_early_morning_selects_first_slot() {
        assert_eq!(next_available_slot(at(0, 0)), Slot::SixAm);
        assert_eq!(next_available_slot(at(4, 15)), Slot::SixAm);
    }

    #[test]
    fn test_seconds_count_toward_cutoff() {
        // 11:30:01 leaves only 29m59s before noon.
        let now = NaiveTime::from_hms_opt(11, 30, 1).unwrap();
        assert_eq!(next_available_slot(now), Slot::FourPm);
    }

    #[test]
    fn test_parse_slot_labels() {
        assert_eq!("12 PM".parse::<Slot>().unwrap(), Slot::Noon);
        assert_eq!("noon".parse::<Slot>().unwrap(), Slot::Noon);
        assert_eq!("6am".parse::<Slot>().unwrap(), Slot::SixAm);
        assert_eq!(" 4 pm ".parse::<Slot>().unwrap(), Slot::FourPm);
        assert_eq!("nine_pm".parse::<Slot>().unwrap(), Slot::NinePm);
        assert!("midnight".parse::<Slot>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Slot::SixAm.label(), "6 AM");
        assert_eq!(Slot::Noon.to_string(), "12 PM");
    }
}
