use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Transfers lamports between system-owned accounts via the system program
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    lamports: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        lamports,
    )
}

/// Grows a program-owned account to `new_len`, topping up rent from `payer`
///
/// Claim accounts grow over time: each non-contiguous mint adds a range entry
/// and allowlist consumption can extend the slot bitmap, so the space cannot
/// be known at initialization.
pub fn resize_account<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    new_len: usize,
) -> Result<()> {
    let required_lamports = Rent::get()?.minimum_balance(new_len);
    let current_lamports = account.lamports();
    if required_lamports > current_lamports {
        transfer_lamports(
            payer,
            account,
            system_program,
            required_lamports - current_lamports,
        )?;
    }
    account.realloc(new_len, false)?;
    Ok(())
}
