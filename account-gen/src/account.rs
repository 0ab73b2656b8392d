use std::fmt;
use std::str::FromStr;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};

use crate::error::GenError;

pub const NUM_DECIMAL_PLACES: u32 = 3;

/// Bounds of a [Balance](crate::account::Balance) in thousandths, both inclusive
const MIN_BALANCE_MILLIS: i64 = 1_000;
const MAX_BALANCE_MILLIS: i64 = 1_000_000;

const INSERT_PREFIX: &str = "insert into account values(";
const INSERT_SUFFIX: &str = ");";

/// The money held by an [AccountRecord](crate::account::AccountRecord).
/// Always lies within `[1, 1000]` and always carries exactly three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Balance(Decimal);

/// One synthetic row of the `account` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountRecord {
    pub id: u64,
    pub name: String,
    pub balance: Balance,
}

impl Balance {
    #[must_use]
    pub fn min() -> Self {
        Balance(Decimal::new(MIN_BALANCE_MILLIS, NUM_DECIMAL_PLACES))
    }

    #[must_use]
    pub fn max() -> Self {
        Balance(Decimal::new(MAX_BALANCE_MILLIS, NUM_DECIMAL_PLACES))
    }

    #[must_use]
    pub fn as_decimal(&self) -> &Decimal {
        &self.0
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = GenError;
    fn try_from(mut decimal: Decimal) -> Result<Self, Self::Error> {
        decimal.rescale(NUM_DECIMAL_PLACES);
        let balance = Balance(decimal);
        if (Balance::min()..=Balance::max()).contains(&balance) {
            Ok(balance)
        } else {
            Err(GenError::BalanceOutOfRange)
        }
    }
}

impl TryFrom<f64> for Balance {
    type Error = GenError;
    fn try_from(decimal: f64) -> Result<Self, Self::Error> {
        Balance::try_from(Decimal::from_f64(decimal).ok_or(GenError::BalanceOutOfRange)?)
    }
}

/// Uniform over every three-place value in `[1, 1000]`
impl Distribution<Balance> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Balance {
        let millis = rng.gen_range(MIN_BALANCE_MILLIS..=MAX_BALANCE_MILLIS);
        Balance(Decimal::new(millis, NUM_DECIMAL_PLACES))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Balance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

impl AccountRecord {
    #[must_use]
    pub fn new(id: u64, name: String, balance: Balance) -> Self {
        AccountRecord { id, name, balance }
    }
}

/// Renders the record as a single SQL statement, without a trailing newline
impl fmt::Display for AccountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, \"{}\", {}{}",
            INSERT_PREFIX, self.id, self.name, self.balance, INSERT_SUFFIX
        )
    }
}

impl FromStr for AccountRecord {
    type Err = GenError;
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let malformed = || GenError::MalformedRecord(line.to_string());

        let values = line
            .strip_suffix('\n')
            .unwrap_or(line)
            .strip_prefix(INSERT_PREFIX)
            .and_then(|rest| rest.strip_suffix(INSERT_SUFFIX))
            .ok_or_else(malformed)?;
        let (id, rest) = values.split_once(", ").ok_or_else(malformed)?;
        let (name, balance) = rest.rsplit_once(", ").ok_or_else(malformed)?;

        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let id = id.parse::<u64>().map_err(|_| malformed())?;
        let name = name
            .strip_prefix('"')
            .and_then(|name| name.strip_suffix('"'))
            .filter(|name| !name.contains('"'))
            .ok_or_else(malformed)?;
        let balance = Decimal::from_str(balance).map_err(|_| malformed())?;
        if balance.scale() != NUM_DECIMAL_PLACES {
            return Err(malformed());
        }

        Ok(AccountRecord::new(
            id,
            name.to_string(),
            Balance::try_from(balance)?,
        ))
    }
}
