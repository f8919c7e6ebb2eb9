//! Worker model.
//!
//! A worker carries a static weekly availability table and a pair of
//! allocation counters that the scheduler consumes as it assigns shifts.
//! Roster order matters: it is the tie-break order of the greedy fill.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Shift, Weekday};

/// Stable worker key. Schedule cells hold this, never the worker itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WorkerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for WorkerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WorkerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Availability for the two shifts of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAvailability {
    pub day: bool,
    pub night: bool,
}

impl ShiftAvailability {
    pub const NONE: Self = Self::new(false, false);
    pub const BOTH: Self = Self::new(true, true);
    pub const DAY_ONLY: Self = Self::new(true, false);
    pub const NIGHT_ONLY: Self = Self::new(false, true);

    pub const fn new(day: bool, night: bool) -> Self {
        Self { day, night }
    }

    #[inline]
    pub fn get(&self, shift: Shift) -> bool {
        match shift {
            Shift::Day => self.day,
            Shift::Night => self.night,
        }
    }

    pub fn set(&mut self, shift: Shift, available: bool) {
        match shift {
            Shift::Day => self.day = available,
            Shift::Night => self.night = available,
        }
    }
}

/// Static weekly availability table.
///
/// Every weekday is a required field, so a roster file with a missing day
/// fails at deserialization instead of silently reading as "unavailable".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub mon: ShiftAvailability,
    pub tue: ShiftAvailability,
    pub wed: ShiftAvailability,
    #[serde(rename = "thurs", alias = "thu")]
    pub thu: ShiftAvailability,
    pub fri: ShiftAvailability,
    pub sat: ShiftAvailability,
    pub sun: ShiftAvailability,
}

impl WeeklyAvailability {
    /// The same availability on every day.
    pub fn uniform(slot: ShiftAvailability) -> Self {
        Self {
            mon: slot,
            tue: slot,
            wed: slot,
            thu: slot,
            fri: slot,
            sat: slot,
            sun: slot,
        }
    }

    /// Available for both shifts on every day.
    pub fn always() -> Self {
        Self::uniform(ShiftAvailability::BOTH)
    }

    /// Unavailable everywhere.
    pub fn never() -> Self {
        Self::uniform(ShiftAvailability::NONE)
    }

    /// Builds a table from seven slots in Monday → Sunday order.
    pub fn from_days(days: [ShiftAvailability; 7]) -> Self {
        let [mon, tue, wed, thu, fri, sat, sun] = days;
        Self {
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            sun,
        }
    }

    pub fn day(&self, day: Weekday) -> &ShiftAvailability {
        match day {
            Weekday::Monday => &self.mon,
            Weekday::Tuesday => &self.tue,
            Weekday::Wednesday => &self.wed,
            Weekday::Thursday => &self.thu,
            Weekday::Friday => &self.fri,
            Weekday::Saturday => &self.sat,
            Weekday::Sunday => &self.sun,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut ShiftAvailability {
        match day {
            Weekday::Monday => &mut self.mon,
            Weekday::Tuesday => &mut self.tue,
            Weekday::Wednesday => &mut self.wed,
            Weekday::Thursday => &mut self.thu,
            Weekday::Friday => &mut self.fri,
            Weekday::Saturday => &mut self.sat,
            Weekday::Sunday => &mut self.sun,
        }
    }

    /// Whether (day, shift) is marked available.
    #[inline]
    pub fn is_available(&self, day: Weekday, shift: Shift) -> bool {
        self.day(day).get(shift)
    }
}

/// Remaining shift quotas.
///
/// Signed so that a bad roster (or a bypassed check) is observable as a
/// negative value; the scheduler itself never drives a counter below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub day: i32,
    pub night: i32,
}

impl Allocation {
    pub const fn new(day: i32, night: i32) -> Self {
        Self { day, night }
    }

    #[inline]
    pub fn remaining(&self, shift: Shift) -> i32 {
        match shift {
            Shift::Day => self.day,
            Shift::Night => self.night,
        }
    }

    /// Whether at least one shift of this type is left.
    #[inline]
    pub fn has_remaining(&self, shift: Shift) -> bool {
        self.remaining(shift) > 0
    }

    /// Consumes one shift of the given type.
    ///
    /// Returns `false` and leaves the counter untouched when it is already
    /// exhausted.
    pub fn consume(&mut self, shift: Shift) -> bool {
        let counter = match shift {
            Shift::Day => &mut self.day,
            Shift::Night => &mut self.night,
        };
        if *counter <= 0 {
            return false;
        }
        *counter -= 1;
        true
    }

    pub fn is_negative(&self) -> bool {
        self.day < 0 || self.night < 0
    }
}

/// A worker on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique key.
    pub id: WorkerId,
    /// Display name (not used by scheduling logic).
    #[serde(default)]
    pub name: String,
    /// Static (day, shift) availability.
    pub availability: WeeklyAvailability,
    /// Remaining quotas, consumed in place by the scheduler.
    pub allocation: Allocation,
}

impl Worker {
    /// Creates a worker with no availability and no allocation.
    pub fn new(id: impl Into<WorkerId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability: WeeklyAvailability::never(),
            allocation: Allocation::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_availability(mut self, availability: WeeklyAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Marks a single (day, shift) as available.
    pub fn available_on(mut self, day: Weekday, shift: Shift) -> Self {
        self.availability.day_mut(day).set(shift, true);
        self
    }

    pub fn with_allocation(mut self, day: i32, night: i32) -> Self {
        self.allocation = Allocation::new(day, night);
        self
    }

    #[inline]
    pub fn is_available(&self, day: Weekday, shift: Shift) -> bool {
        self.availability.is_available(day, shift)
    }
}
