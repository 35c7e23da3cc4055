//! Epoch day equations based off Cassio Neri and Lorenz Schneider's paper,
//! [Euclidean affine functions and their application to calendar
//! algorithms][eaf-calendar-algorithms].
//!
//! ## General Usage Note
//!
//! Unless specified, Rata Die refers to the computational rata die as referenced
//! in the paper, where the computational year begins on March 1.
//!
//! ## Shift window
//!
//! The equations operate on unsigned values, so epoch days are shifted by a
//! whole number of 400 year cycles before evaluation. A shift of 3670 cycles,
//! as recommended by Cassio Neri, places the epoch near the center of the
//! window and comfortably covers every instant this crate can represent.
//!
//! [eaf-calendar-algorithms]: https://onlinelibrary.wiley.com/doi/full/10.1002/spe.3172

pub const EPOCH_COMPUTATIONAL_RATA_DIE: i32 = 719_468;
pub const DAYS_IN_A_400Y_CYCLE: u32 = 146_097;

const TWO_POWER_THIRTY_NINE: u64 = 549_755_813_888; // 2^39 constant
const TWO_POWER_SIXTEEN: u32 = 65_536; // 2^16 constant

const SHIFT_CONSTANT: i32 = 3670;

/// Rata die of 1970-01-01 after applying the cycle shift.
const SHIFTED_EPOCH_RATA_DIE: i64 =
    EPOCH_COMPUTATIONAL_RATA_DIE as i64 + DAYS_IN_A_400Y_CYCLE as i64 * SHIFT_CONSTANT as i64;

/// Calculate the epoch days for a gregorian date.
pub const fn epoch_days_from_gregorian_date(year: i32, month: u8, day: u8) -> i64 {
    let (comp_year, comp_month, comp_day, century) = rata_die_first_equations(year, month, day);
    let y_star = 1461 * comp_year / 4 - century + century / 4;
    let m_star = (979 * comp_month - 2919) / 32;
    y_star + m_star + comp_day - SHIFTED_EPOCH_RATA_DIE
}

// Returns Y, M, D, C
const fn rata_die_first_equations(year: i32, month: u8, day: u8) -> (i64, i64, i64, i64) {
    let j = (month <= 2) as i64;
    let computational_year = year as i64 + 400 * SHIFT_CONSTANT as i64 - j;
    let computational_month = month as i64 + 12 * j;
    let computational_day = day as i64 - 1;
    (
        computational_year,
        computational_month,
        computational_day,
        computational_year / 100,
    )
}

// Computational days to gregorian YMD

// Determine j
const fn j(rata_die: u32) -> u32 {
    (computational_day_of_year(rata_die) >= 306) as u32
}

const fn n_one(rata_die: u32) -> u32 {
    4 * rata_die + 3
}

const fn n_two(rata_die: u32) -> u32 {
    century_rem(rata_die) | 3
}

const fn n_three(rata_die: u32) -> u32 {
    2141 * computational_day_of_year(rata_die) + 197_913
}

const fn century_rem(rata_die: u32) -> u32 {
    n_one(rata_die).rem_euclid(DAYS_IN_A_400Y_CYCLE)
}

pub const fn century_number(rata_die: u32) -> u32 {
    n_one(rata_die).div_euclid(DAYS_IN_A_400Y_CYCLE)
}

// Z
pub const fn computational_year_of_century(rata_die: u32) -> u64 {
    (376_287_347 * n_two(rata_die) as u64).div_euclid(TWO_POWER_THIRTY_NINE)
}

// N_y
pub const fn computational_day_of_year(rata_die: u32) -> u32 {
    (n_two(rata_die) - 1461 * computational_year_of_century(rata_die) as u32).div_euclid(4)
}

// Y
pub const fn computational_year(rata_die: u32) -> u32 {
    100 * century_number(rata_die) + computational_year_of_century(rata_die) as u32
}

pub const fn computational_month(rata_die: u32) -> u32 {
    n_three(rata_die).div_euclid(TWO_POWER_SIXTEEN)
}

pub const fn computational_day(rata_die: u32) -> u32 {
    n_three(rata_die)
        .rem_euclid(TWO_POWER_SIXTEEN)
        .div_euclid(2141)
}

pub const fn year(computational_rata_die: u32, shift_constant: i32) -> i32 {
    (computational_year(computational_rata_die) + j(computational_rata_die)) as i32 - shift_constant
}

pub const fn month(computational_rata_die: u32) -> u8 {
    (computational_month(computational_rata_die) - 12 * j(computational_rata_die)) as u8
}

pub const fn day(computational_rata_die: u32) -> u8 {
    (computational_day(computational_rata_die) + 1) as u8
}

/// Get the computational Rata Die for given Epoch Days with the cycle shift.
///
/// Returns the rata die along with the year shift that has to be removed
/// from the computed year.
pub const fn rata_die_for_epoch_days(epoch_days: i32) -> (u32, i32) {
    let rata_die = (epoch_days as i64 + SHIFTED_EPOCH_RATA_DIE) as u32; // epoch_days + K
    (rata_die, 400 * SHIFT_CONSTANT)
}

pub const fn ymd_from_epoch_days(epoch_days: i32) -> (i32, u8, u8) {
    let (rata_die, year_shift) = rata_die_for_epoch_days(epoch_days);
    (year(rata_die, year_shift), month(rata_die), day(rata_die))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPOCH_RATA_DIE: u32 = 719_468; // This is the Rata Die for 1970-01-01

    #[test]
    fn epoch_century_number() {
        assert_eq!(century_number(EPOCH_RATA_DIE), 19);
    }

    #[test]
    fn epoch_year_of_century() {
        assert_eq!(computational_year_of_century(EPOCH_RATA_DIE), 69);
    }

    #[test]
    fn epoch_day_of_year() {
        // Beginning of January in the computational calendar is day number 306
        assert_eq!(computational_day_of_year(EPOCH_RATA_DIE), 306);
    }

    #[test]
    fn epoch_ymd() {
        assert_eq!(year(EPOCH_RATA_DIE, 0), 1970);
        assert_eq!(month(EPOCH_RATA_DIE), 1);
        assert_eq!(day(EPOCH_RATA_DIE), 1);
    }

    #[test]
    fn shifted_epoch() {
        let (rata_die, shift) = rata_die_for_epoch_days(0);
        assert_eq!(i64::from(rata_die), SHIFTED_EPOCH_RATA_DIE);
        assert_eq!(year(rata_die, shift), 1970);
        assert_eq!(epoch_days_from_gregorian_date(1970, 1, 1), 0);
        assert_eq!(epoch_days_from_gregorian_date(1970, 3, 1), 59);
    }
}
