use rayon::prelude::*;

use crate::decryptor::decrypt_with_square;
use crate::encryptor::encrypt_with_square;
use crate::key_square::KeySquare;
use crate::result::CipherResult;

/// Encrypt many texts under one keyword, in parallel.
///
/// The key square is derived once and shared; every stage after that is a
/// pure function, so texts substitute independently across threads.
/// Results keep the input order.
pub fn encrypt_batch<S>(keyword: &str, plaintexts: &[S]) -> Vec<CipherResult>
where
    S: AsRef<str> + Sync,
{
    let square = KeySquare::derive(keyword);
    plaintexts
        .par_iter()
        .map(|text| encrypt_with_square(&square, text.as_ref()))
        .collect()
}

/// Decrypt many texts under one keyword, in parallel.
pub fn decrypt_batch<S>(keyword: &str, ciphertexts: &[S]) -> Vec<CipherResult>
where
    S: AsRef<str> + Sync,
{
    let square = KeySquare::derive(keyword);
    ciphertexts
        .par_iter()
        .map(|text| decrypt_with_square(&square, text.as_ref()))
        .collect()
}
