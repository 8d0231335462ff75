//! Charge bank state
//!
//! Each console bank tracks an animated charge counter, the rate it
//! climbs at, and the weapon label shown next to the bar.

use heapless::String;

/// Number of charge banks on the console
pub const BANK_COUNT: usize = 4;

/// Counter value at which a bank reads fully charged
pub const CHARGE_MAX: u8 = 80;

/// Charge gained per effective update until a rate is configured
pub const DEFAULT_RATE: u8 = 2;

/// Maximum label length, the visible field on a 16-column row
pub const NAME_LEN: usize = 8;

/// State of a single charge bank
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeBank {
    value: u8,
    rate: u8,
    name: String<NAME_LEN>,
}

impl ChargeBank {
    /// Create a bank at zero charge with the default rate
    pub fn new(name: &str) -> Self {
        let mut bank = Self {
            value: 0,
            rate: DEFAULT_RATE,
            name: String::new(),
        };
        bank.set_name(name);
        bank
    }

    /// Advance the counter by the configured rate, saturating at
    /// [`CHARGE_MAX`]
    pub fn charge(&mut self) {
        self.value = self.value.saturating_add(self.rate).min(CHARGE_MAX);
    }

    /// Current counter value
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Set the counter directly, clamped to [`CHARGE_MAX`]
    pub fn set_value(&mut self, value: u8) {
        self.value = value.min(CHARGE_MAX);
    }

    /// Charge gained per effective update
    pub fn rate(&self) -> u8 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: u8) {
        self.rate = rate;
    }

    /// Weapon label shown next to the charge bar
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Replace the label, truncating it to the visible field
    pub fn set_name(&mut self, name: &str) {
        self.name.clear();
        for c in name.chars().take(NAME_LEN) {
            if self.name.push(c).is_err() {
                break;
            }
        }
    }

    /// Whether the bank reads fully charged
    pub fn is_full(&self) -> bool {
        self.value >= CHARGE_MAX
    }

    /// Drop the counter back to zero
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bank_defaults() {
        let bank = ChargeBank::new("LASER");
        assert_eq!(bank.value(), 0);
        assert_eq!(bank.rate(), DEFAULT_RATE);
        assert_eq!(bank.name(), "LASER");
        assert!(!bank.is_full());
    }

    #[test]
    fn test_charge_accumulates_by_rate() {
        let mut bank = ChargeBank::new("EMP");
        bank.set_rate(5);
        bank.charge();
        bank.charge();
        assert_eq!(bank.value(), 10);
    }

    #[test]
    fn test_charge_clamps_at_max() {
        let mut bank = ChargeBank::new("LASER");
        bank.set_rate(30);
        for _ in 0..5 {
            bank.charge();
        }
        assert_eq!(bank.value(), CHARGE_MAX);
        assert!(bank.is_full());
    }

    #[test]
    fn test_odd_rate_lands_exactly_on_max() {
        let mut bank = ChargeBank::new("LASER");
        bank.set_rate(7);
        for _ in 0..12 {
            bank.charge();
        }
        assert_eq!(bank.value(), CHARGE_MAX);
    }

    #[test]
    fn test_set_value_clamps() {
        let mut bank = ChargeBank::new("LASER");
        bank.set_value(200);
        assert_eq!(bank.value(), CHARGE_MAX);
        bank.set_value(41);
        assert_eq!(bank.value(), 41);
    }

    #[test]
    fn test_set_name_truncates() {
        let mut bank = ChargeBank::new("DISRUPTOR BEAM");
        assert_eq!(bank.name(), "DISRUPTO");
        bank.set_name("PD");
        assert_eq!(bank.name(), "PD");
    }

    #[test]
    fn test_reset_zeroes_value_only() {
        let mut bank = ChargeBank::new("EMP");
        bank.set_rate(9);
        bank.set_value(50);
        bank.reset();
        assert_eq!(bank.value(), 0);
        assert_eq!(bank.rate(), 9);
        assert_eq!(bank.name(), "EMP");
    }
}
