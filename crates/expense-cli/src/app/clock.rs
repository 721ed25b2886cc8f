//! Timezone-aware "today" for new expenses.

use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

use expense_core::Clock;

/// Dates new expenses in a configured timezone, or local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZonedClock {
    tz: Option<Tz>,
}

impl ZonedClock {
    /// Build from an optional IANA timezone name.
    pub fn from_config(timezone: Option<&str>) -> anyhow::Result<Self> {
        let tz = timezone
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|e| anyhow::anyhow!("Invalid timezone {}: {}", name, e))
            })
            .transpose()?;
        Ok(Self { tz })
    }
}

impl Clock for ZonedClock {
    fn today(&self) -> NaiveDate {
        match self.tz {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_timezone() {
        let clock = ZonedClock::from_config(Some("Asia/Kolkata")).unwrap();
        let expected = Utc::now().with_timezone(&chrono_tz::Asia::Kolkata).date_naive();
        // Allow a midnight rollover between the two reads.
        assert!((clock.today() - expected).num_days().abs() <= 1);
    }

    #[test]
    fn test_invalid_timezone() {
        assert!(ZonedClock::from_config(Some("Mars/Olympus")).is_err());
    }

    #[test]
    fn test_no_timezone_is_local() {
        let clock = ZonedClock::from_config(None).unwrap();
        assert!((clock.today() - Local::now().date_naive()).num_days().abs() <= 1);
    }
}
