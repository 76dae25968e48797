use sha2::{Digest, Sha512};
use zeroize::Zeroizing;

use super::{DIGEST_LEN, MAX_PASSWORD_LEN};
use crate::error::HashError;

/// Runs the iterated SHA-512 loop.
///
/// The first digest covers `salt ++ password`; each of the `iterations`
/// following rounds hashes `digest ++ password`, so `iterations + 1` hashes
/// are computed in total.
pub fn stretch(
    password: &[u8],
    salt: &[u8],
    iterations: u64,
) -> Result<Zeroizing<[u8; DIGEST_LEN]>, HashError> {
    if password.len() > MAX_PASSWORD_LEN {
        return Err(HashError::InputTooLong {
            len: password.len(),
        });
    }

    let mut digest = Zeroizing::new([0u8; DIGEST_LEN]);
    let first = Sha512::new()
        .chain_update(salt)
        .chain_update(password)
        .finalize();
    digest.copy_from_slice(&first);

    for _ in 0..iterations {
        let next = Sha512::new()
            .chain_update(digest.as_slice())
            .chain_update(password)
            .finalize();
        digest.copy_from_slice(&next);
    }

    Ok(digest)
}
