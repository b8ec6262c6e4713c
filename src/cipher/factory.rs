use super::{CaesarKey, Cipher, CipherKind, KeySquare, VigenereKey};
use crate::error::Result;

/// Validate `raw_key` against the grammar of `kind` and build the cipher.
///
/// This is the only way to obtain a [`Cipher`]; an invalid key is always an
/// error, never an identity transform.
pub fn create(kind: CipherKind, raw_key: &str) -> Result<Cipher> {
    let cipher = match kind {
        CipherKind::Caesar => Cipher::Caesar(CaesarKey::parse(raw_key)?),
        CipherKind::Vigenere => Cipher::Vigenere(VigenereKey::parse(raw_key)?),
        CipherKind::Playfair => Cipher::Playfair(KeySquare::parse(raw_key)?),
    };
    tracing::debug!(%kind, "cipher constructed");
    Ok(cipher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_create_each_kind() {
        assert_eq!(create(CipherKind::Caesar, "3").unwrap().kind(), CipherKind::Caesar);
        assert_eq!(
            create(CipherKind::Vigenere, "LEMON").unwrap().kind(),
            CipherKind::Vigenere
        );
        assert_eq!(
            create(CipherKind::Playfair, "PLAYFAIREXAMPLE").unwrap().kind(),
            CipherKind::Playfair
        );
    }

    #[test]
    fn test_key_normalized() {
        match create(CipherKind::Vigenere, "lemon").unwrap() {
            Cipher::Vigenere(key) => assert_eq!(key.keyword(), "LEMON"),
            other => panic!("unexpected cipher: {other:?}"),
        }
        assert_eq!(
            create(CipherKind::Caesar, "-23").unwrap(),
            create(CipherKind::Caesar, "3").unwrap()
        );
    }

    #[test]
    fn test_invalid_key_reports_kind() {
        let cases = [
            (CipherKind::Caesar, "abc"),
            (CipherKind::Caesar, ""),
            (CipherKind::Vigenere, ""),
            (CipherKind::Vigenere, "K3Y"),
            (CipherKind::Playfair, ""),
            (CipherKind::Playfair, "PLAY-FAIR"),
        ];
        for (kind, key) in cases {
            match create(kind, key) {
                Err(CipherError::KeyValidation { kind: reported, .. }) => {
                    assert_eq!(reported, kind, "key {key:?}")
                }
                other => panic!("expected key validation error for {key:?}, got {other:?}"),
            }
        }
    }
}
