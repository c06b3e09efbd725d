//! Password strength scoring.
//!
//! The score is additive: each rule adds or subtracts points and leaves a
//! feedback or warning line behind. The class is bucketed from the raw
//! score, the reported score is clamped to `0..=10`.

use passkit_common::{AnalysisResult, StrengthClass};

const MAX_SCORE: i32 = 10;

const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "12345678", "1234", "qwerty", "abc123", "password1", "12345",
    "123456789", "letmein", "football", "admin", "welcome", "monkey", "login", "passw0rd",
    "master", "hello", "freedom", "whatever", "qazwsx", "trustno1", "sunshine",
];

const COMMON_PATTERNS: &[&str] = &["123", "abc", "qwerty", "password", "admin", "welcome"];

const SEQUENCES: &[&str] = &[
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm", "lmn", "mno",
    "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy", "xyz", "123", "234",
    "345", "456", "567", "678", "789",
];

/// Which character classes a password draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CharClasses {
    upper: bool,
    lower: bool,
    digit: bool,
    symbol: bool,
}

impl CharClasses {
    fn of(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            match c {
                'A'..='Z' => classes.upper = true,
                'a'..='z' => classes.lower = true,
                '0'..='9' => classes.digit = true,
                _ => classes.symbol = true,
            }
        }
        classes
    }

    fn count(self) -> u8 {
        [self.upper, self.lower, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count() as u8
    }

    fn pool_size(self) -> u32 {
        let mut pool = 0;
        if self.lower {
            pool += 26;
        }
        if self.upper {
            pool += 26;
        }
        if self.digit {
            pool += 10;
        }
        if self.symbol {
            pool += 32;
        }
        pool
    }
}

/// Bits of entropy: length times the square root of the character pool.
pub fn entropy(password: &str) -> f64 {
    let pool = CharClasses::of(password).pool_size();
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).sqrt()
}

fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] != '\n' && w[0] == w[1] && w[1] == w[2])
}

fn has_sequence(lowered: &str) -> bool {
    SEQUENCES.iter().any(|seq| lowered.contains(seq))
}

fn is_common_password(lowered: &str) -> bool {
    COMMON_PASSWORDS.contains(&lowered)
}

/// Score a password and explain the score.
pub fn analyze(password: &str) -> AnalysisResult {
    let mut score: i32 = 0;
    let mut feedback = Vec::new();
    let mut warnings = Vec::new();

    let length = password.chars().count();
    if length >= 16 {
        score += 3;
        feedback.push("Excellent length (16+ characters)".to_string());
    } else if length >= 12 {
        score += 2;
        feedback.push("Good length (12-15 characters)".to_string());
    } else if length >= 8 {
        score += 1;
        feedback.push("Minimum acceptable length (8-11 characters)".to_string());
    } else {
        warnings.push("Too short (minimum 8 characters required)".to_string());
    }

    let classes = CharClasses::of(password);
    let char_types = classes.count();
    match char_types {
        4 => {
            score += 2;
            feedback.push(
                "Contains all character types (upper, lower, numbers, symbols)".to_string(),
            );
        }
        3 => {
            score += 1;
            feedback.push("Contains 3 character types".to_string());
        }
        n => warnings.push(format!("Limited character variety ({n} types)")),
    }

    for (present, found, missing) in [
        (classes.upper, "Contains uppercase letters", "Missing uppercase letters"),
        (classes.lower, "Contains lowercase letters", "Missing lowercase letters"),
        (classes.digit, "Contains numbers", "Missing numbers"),
        (classes.symbol, "Contains symbols", "Missing symbols"),
    ] {
        if present {
            feedback.push(found.to_string());
        } else {
            warnings.push(missing.to_string());
        }
    }

    if has_repeated_run(password) {
        score -= 1;
        warnings.push("Contains repeated characters".to_string());
    }

    let lowered = password.to_lowercase();
    if COMMON_PATTERNS.iter().any(|p| lowered.contains(p)) {
        score -= 2;
        warnings.push("Contains common patterns".to_string());
    }

    if is_common_password(&lowered) {
        score = 0;
        warnings.push("This is a very common password - DO NOT USE!".to_string());
    }

    let entropy = entropy(password);
    if entropy > 100.0 {
        score += 2;
        feedback.push(format!("High entropy ({entropy:.1} bits)"));
    } else if entropy > 80.0 {
        score += 1;
        feedback.push(format!("Moderate entropy ({entropy:.1} bits)"));
    } else {
        warnings.push(format!("Low entropy ({entropy:.1} bits)"));
    }

    if has_sequence(&lowered) {
        score -= 1;
        warnings.push("Contains sequential characters".to_string());
    }

    let class = StrengthClass::from_score(score);

    AnalysisResult {
        length,
        entropy,
        score: score.clamp(0, MAX_SCORE) as u32,
        strength: class.label().to_string(),
        strength_class: class.as_str().to_string(),
        feedback,
        warnings,
        color: Some(class.hex_color().to_string()),
        char_types: Some(char_types),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_password_is_flagged_and_weak() {
        let result = analyze("password");
        assert_eq!(result.strength_class, "weak");
        assert_eq!(result.score, 0);
        assert!(result
            .warnings
            .contains(&"This is a very common password - DO NOT USE!".to_string()));
        assert!(result
            .warnings
            .contains(&"Contains common patterns".to_string()));
    }

    #[test]
    fn test_common_password_check_ignores_case() {
        let result = analyze("LetMeIn");
        assert!(result.warnings.iter().any(|w| w.contains("DO NOT USE")));
    }

    #[test]
    fn test_strong_random_password() {
        // 16 chars, 4 classes: 3 + 2 + 2 (entropy 16 * sqrt(94) = 155.1)
        let result = analyze("Zq8#Lm2!Vx7$Rt4%");
        assert_eq!(result.score, 7);
        assert_eq!(result.strength, "Very Strong");
        assert_eq!(result.strength_class, "very-strong");
        assert_eq!(result.color.as_deref(), Some("#10b981"));
        assert_eq!(result.char_types, Some(4));
        assert!(result.warnings.is_empty());
        assert_eq!(result.feedback.last().unwrap(), "High entropy (155.1 bits)");
    }

    #[test]
    fn test_feedback_order_follows_rule_order() {
        let result = analyze("Zq8#Lm2!Vx7$Rt4%");
        assert_eq!(
            result.feedback,
            vec![
                "Excellent length (16+ characters)",
                "Contains all character types (upper, lower, numbers, symbols)",
                "Contains uppercase letters",
                "Contains lowercase letters",
                "Contains numbers",
                "Contains symbols",
                "High entropy (155.1 bits)",
            ]
        );
    }

    #[test]
    fn test_short_lowercase_password() {
        let result = analyze("zqx");
        assert_eq!(result.length, 3);
        assert_eq!(result.char_types, Some(1));
        assert_eq!(result.strength_class, "weak");
        assert_eq!(
            result.warnings,
            vec![
                "Too short (minimum 8 characters required)",
                "Limited character variety (1 types)",
                "Missing uppercase letters",
                "Missing numbers",
                "Missing symbols",
                "Low entropy (15.3 bits)",
            ]
        );
    }

    #[test]
    fn test_negative_raw_score_is_clamped() {
        // length +0, variety +0, repeated -1, pattern -2, sequence -1
        let result = analyze("aaabc");
        assert_eq!(result.score, 0);
        assert_eq!(result.strength_class, "weak");
        assert!(result
            .warnings
            .contains(&"Contains repeated characters".to_string()));
        assert!(result
            .warnings
            .contains(&"Contains sequential characters".to_string()));
    }

    #[test]
    fn test_entropy() {
        assert_eq!(entropy(""), 0.0);
        assert!((entropy("abcd") - 4.0 * 26f64.sqrt()).abs() < 1e-9);
        assert!((entropy("aB3!") - 4.0 * 94f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let result = analyze("pässwörd");
        assert_eq!(result.length, 8);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        assert_eq!(analyze("Tr0ub4dor&3"), analyze("Tr0ub4dor&3"));
    }
}
