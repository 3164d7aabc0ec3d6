//! Ticket prices by age bracket
//!
//! Amounts are whole kronor held as integers so sums stay exact.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Visitors younger than this pay the youth price
pub const YOUTH_AGE_LIMIT: i32 = 20;

/// Visitors older than this pay the senior price
pub const SENIOR_AGE_LIMIT: i32 = 64;

/// An exact amount of Swedish kronor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kronor(pub u64);

impl Kronor {
    pub const ZERO: Kronor = Kronor(0);

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Add for Kronor {
    type Output = Kronor;

    fn add(self, rhs: Kronor) -> Kronor {
        Kronor(self.0 + rhs.0)
    }
}

impl AddAssign for Kronor {
    fn add_assign(&mut self, rhs: Kronor) {
        self.0 += rhs.0;
    }
}

impl Sum for Kronor {
    fn sum<I: Iterator<Item = Kronor>>(iter: I) -> Kronor {
        iter.fold(Kronor::ZERO, |total, amount| total + amount)
    }
}

impl fmt::Display for Kronor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kr", format_thousands(self.0))
    }
}

/// Group digits in threes with a comma, e.g. `1234567` -> `1,234,567`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let mut count = 0;

    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceCategory {
    Youth,
    Standard,
    Senior,
}

impl PriceCategory {
    pub fn for_age(age: i32) -> Self {
        if age < YOUTH_AGE_LIMIT {
            PriceCategory::Youth
        } else if age > SENIOR_AGE_LIMIT {
            PriceCategory::Senior
        } else {
            PriceCategory::Standard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceCategory::Youth => "Youth price",
            PriceCategory::Standard => "Standard price",
            PriceCategory::Senior => "Senior price",
        }
    }

    pub fn amount(&self) -> Kronor {
        match self {
            PriceCategory::Youth => Kronor(80),
            PriceCategory::Standard => Kronor(120),
            PriceCategory::Senior => Kronor(90),
        }
    }
}

/// A looked-up ticket price; displays as `"<label>:<amount>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    pub category: PriceCategory,
    pub amount: Kronor,
}

impl Price {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label(), self.amount)
    }
}

pub fn price_by_age(age: i32) -> Price {
    let category = PriceCategory::for_age(age);
    Price {
        category,
        amount: category.amount(),
    }
}

/// Total price for a group, one age per person
pub fn group_total(ages: &[i32]) -> Kronor {
    ages.iter().map(|&age| price_by_age(age).amount).sum()
}
