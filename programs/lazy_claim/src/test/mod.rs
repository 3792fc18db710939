pub mod test_claim;

use anchor_lang::error::Error;
use anchor_lang::Result;

use crate::error::LazyClaimError;

/// Asserts that a result failed with the given program error
pub(crate) fn assert_lazy_err<T: std::fmt::Debug>(result: Result<T>, expected: LazyClaimError) {
    let expected_code = u32::from(expected);
    match result {
        Err(Error::AnchorError(e)) => assert_eq!(
            e.error_code_number, expected_code,
            "unexpected error: {}",
            e.error_name
        ),
        Ok(value) => panic!("expected error code {}, got Ok({:?})", expected_code, value),
        Err(other) => panic!("expected error code {}, got {:?}", expected_code, other),
    }
}
