use std::fmt;

/// Unique identifier for any actor tracked in the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle referencing an item definition in the host's item catalog.
///
/// Handles are opaque; the item oracle maps them to definitions and resolves
/// configured shortnames back to handles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u16);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item:{}", self.0)
    }
}

/// Discrete time unit of the host's event clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer resource meter (health) tracked per actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    /// True when the meter is at its maximum.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }

    /// Restore up to `amount`, clamped to the maximum.
    ///
    /// Returns the amount actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let missing = self.maximum.saturating_sub(self.current);
        let actual = amount.min(missing);
        self.current += actual;
        actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_clamps_to_maximum() {
        let mut meter = ResourceMeter::new(90, 100);
        assert_eq!(meter.restore(15), 10);
        assert_eq!(meter.current, 100);
        assert!(meter.is_full());
    }

    #[test]
    fn restore_on_full_meter_is_a_noop() {
        let mut meter = ResourceMeter::new(100, 100);
        assert_eq!(meter.restore(15), 0);
        assert_eq!(meter.current, 100);
    }
}
