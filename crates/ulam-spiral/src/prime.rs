//! Deterministic trial-division primality.

use crate::{Error, Result};

/// Test `n` for primality by trial division up to `floor(sqrt(n))`.
///
/// 1 is not prime, 2 is. Non-positive input is rejected.
///
/// # Examples
///
/// ```
/// use ulam_spiral::is_prime;
///
/// assert_eq!(is_prime(17), Ok(true));
/// assert_eq!(is_prime(18), Ok(false));
/// assert!(is_prime(0).is_err());
/// ```
pub fn is_prime(n: i64) -> Result<bool> {
    if n <= 0 {
        return Err(Error::NonPositive(n));
    }
    Ok(trial_division(n.unsigned_abs()))
}

fn trial_division(n: u64) -> bool {
    match n {
        1 => false,
        2 => true,
        _ => {
            let mut divisor = 2u64;
            // divisor <= floor(sqrt(n))
            while divisor.checked_mul(divisor).is_some_and(|sq| sq <= n) {
                if n % divisor == 0 {
                    return false;
                }
                divisor += 1;
            }
            true
        }
    }
}
