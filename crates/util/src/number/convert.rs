use crate::error::UtilError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const MINUTES_PER_HOUR: u64 = 60;

/// A duration split into whole hours and remaining minutes.
///
/// Deserialization rejects `minutes` of 60 or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawHoursAndMinutes")]
pub struct HoursAndMinutes {
    pub hours: u64,
    pub minutes: u64,
}

#[derive(Deserialize)]
struct RawHoursAndMinutes {
    hours: u64,
    minutes: u64,
}

impl TryFrom<RawHoursAndMinutes> for HoursAndMinutes {
    type Error = UtilError;

    fn try_from(raw: RawHoursAndMinutes) -> Result<Self, Self::Error> {
        if raw.minutes >= MINUTES_PER_HOUR {
            return Err(UtilError::MinutesOutOfRange {
                minutes: raw.minutes,
            });
        }
        Ok(Self {
            hours: raw.hours,
            minutes: raw.minutes,
        })
    }
}

impl HoursAndMinutes {
    /// Total number of minutes represented, `None` if it overflows `u64`.
    pub fn total_minutes(&self) -> Option<u64> {
        self.hours
            .checked_mul(MINUTES_PER_HOUR)?
            .checked_add(self.minutes)
    }
}

/// Convert a number of minutes into hours and minutes.
///
/// # Examples
///
/// ```
/// use plain_util::number::{mins_to_hours_and_mins, HoursAndMinutes};
///
/// assert_eq!(
///     mins_to_hours_and_mins(90),
///     HoursAndMinutes { hours: 1, minutes: 30 }
/// );
/// ```
pub fn mins_to_hours_and_mins(mins: u64) -> HoursAndMinutes {
    HoursAndMinutes {
        hours: mins / MINUTES_PER_HOUR,
        minutes: mins % MINUTES_PER_HOUR,
    }
}

/// Values that can be read as a string of binary digits.
///
/// Strings are used as-is. Integers are rendered in decimal and the
/// resulting digits are read as binary, so `101` means five.
pub trait BinaryDigits {
    fn binary_digits(&self) -> Cow<'_, str>;
}

impl BinaryDigits for str {
    fn binary_digits(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl BinaryDigits for String {
    fn binary_digits(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<T: BinaryDigits + ?Sized> BinaryDigits for &T {
    fn binary_digits(&self) -> Cow<'_, str> {
        (**self).binary_digits()
    }
}

macro_rules! impl_binary_digits_for_int {
    ($($t:ty),*) => {
        $(
            impl BinaryDigits for $t {
                fn binary_digits(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_binary_digits_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Convert binary digits into their integer value.
///
/// Accepts strings or integers (see [`BinaryDigits`]). An empty string is
/// zero and a single leading `-` or `+` sets the sign. Returns `None` when
/// any other character appears, when only a sign is given, or when the value
/// does not fit in an `i64`.
///
/// # Examples
///
/// ```
/// use plain_util::number::binary_to_decimal;
///
/// assert_eq!(binary_to_decimal("101"), Some(5));
/// assert_eq!(binary_to_decimal(1101), Some(13));
/// assert_eq!(binary_to_decimal(""), Some(0));
/// assert_eq!(binary_to_decimal("12"), None);
/// ```
pub fn binary_to_decimal<B: BinaryDigits>(binary: B) -> Option<i64> {
    let digits = binary.binary_digits();
    if digits.is_empty() {
        return Some(0);
    }

    let (negative, body) = match digits.as_bytes()[0] {
        b'-' => (true, &digits[1..]),
        b'+' => (false, &digits[1..]),
        _ => (false, &digits[..]),
    };
    if body.is_empty() {
        return None;
    }

    // Accumulate towards the sign so i64::MIN stays representable.
    let mut value: i64 = 0;
    for byte in body.bytes() {
        let bit = match byte {
            b'0' => 0,
            b'1' => 1,
            _ => return None,
        };
        value = value.checked_mul(2)?;
        value = if negative {
            value.checked_sub(bit)?
        } else {
            value.checked_add(bit)?
        };
    }
    Some(value)
}
