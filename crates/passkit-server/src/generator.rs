use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;

use passkit_common::GenerationRequest;

use crate::error::{Result, ServerError};

pub const MIN_LENGTH: i64 = 8;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generate a password from the OS random source.
pub fn generate(options: &GenerationRequest, max_length: usize) -> Result<String> {
    generate_with(&mut OsRng, options, max_length)
}

/// Generate a password using `rng`.
///
/// Every selected class contributes at least one character; the remainder is
/// drawn from the combined pool and the whole password is shuffled.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    options: &GenerationRequest,
    max_length: usize,
) -> Result<String> {
    if options.length < MIN_LENGTH {
        return Err(ServerError::Validation(format!(
            "Password length should be at least {MIN_LENGTH} characters"
        )));
    }
    let length = usize::try_from(options.length).unwrap_or(usize::MAX);
    if length > max_length {
        return Err(ServerError::Validation(format!(
            "Password length must be at most {max_length} characters"
        )));
    }

    let classes: Vec<&[u8]> = [
        (options.include_lower, LOWERCASE),
        (options.include_upper, UPPERCASE),
        (options.include_numbers, DIGITS),
        (options.include_symbols, SYMBOLS),
    ]
    .into_iter()
    .filter_map(|(selected, set)| selected.then_some(set))
    .collect();

    if classes.is_empty() {
        return Err(ServerError::Validation(
            "At least one character type must be selected".to_string(),
        ));
    }

    let pool: Vec<u8> = classes.concat();
    let mut chars: Vec<u8> = Vec::with_capacity(length);

    for set in &classes {
        chars.extend(set.choose(rng));
    }
    while chars.len() < length {
        chars.extend(pool.choose(rng));
    }

    chars.shuffle(rng);
    Ok(chars.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn options(length: i64) -> GenerationRequest {
        GenerationRequest {
            length,
            ..GenerationRequest::default()
        }
    }

    fn validation_message(err: ServerError) -> String {
        match err {
            ServerError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_generates_requested_length() {
        for length in [8, 16, 64, 128] {
            let password = generate(&options(length), 128).unwrap();
            assert_eq!(password.len(), length as usize);
        }
    }

    #[test]
    fn test_includes_every_selected_class() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let password = generate_with(&mut rng, &options(8), 128).unwrap();
            assert!(password.bytes().any(|b| LOWERCASE.contains(&b)));
            assert!(password.bytes().any(|b| UPPERCASE.contains(&b)));
            assert!(password.bytes().any(|b| DIGITS.contains(&b)));
            assert!(password.bytes().any(|b| SYMBOLS.contains(&b)));
        }
    }

    #[test]
    fn test_only_selected_classes_are_used() {
        let opts = GenerationRequest {
            length: 32,
            include_upper: false,
            include_lower: false,
            include_numbers: true,
            include_symbols: false,
        };
        let password = generate(&opts, 128).unwrap();
        assert!(password.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_rejects_short_length() {
        let err = generate(&options(7), 128).unwrap_err();
        assert_eq!(
            validation_message(err),
            "Password length should be at least 8 characters"
        );

        let err = generate(&options(-5), 128).unwrap_err();
        assert!(validation_message(err).contains("at least 8"));
    }

    #[test]
    fn test_rejects_length_over_max() {
        let err = generate(&options(129), 128).unwrap_err();
        assert_eq!(
            validation_message(err),
            "Password length must be at most 128 characters"
        );
    }

    #[test]
    fn test_rejects_empty_pool() {
        let opts = GenerationRequest {
            length: 12,
            include_upper: false,
            include_lower: false,
            include_numbers: false,
            include_symbols: false,
        };
        let err = generate(&opts, 128).unwrap_err();
        assert_eq!(
            validation_message(err),
            "At least one character type must be selected"
        );
    }

    #[test]
    fn test_passwords_differ() {
        let a = generate(&options(32), 128).unwrap();
        let b = generate(&options(32), 128).unwrap();
        assert_ne!(a, b);
    }
}
