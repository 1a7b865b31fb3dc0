use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

pub const TEXTAREA_MAX_LEN: usize = 500;
pub const INPUT_MAX_LEN: usize = 100;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// Advisory blocklist only. Escaping on output is what keeps markup inert.
static SUSPICIOUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)<script|javascript:|onerror=|onclick=|<iframe").expect("suspicious pattern")
});

/// Element kind a field is rendered as. Decides which length cap applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Textarea,
}

impl FieldKind {
    pub fn max_len(self) -> usize {
        match self {
            FieldKind::Input => INPUT_MAX_LEN,
            FieldKind::Textarea => TEXTAREA_MAX_LEN,
        }
    }
}

/// The `type` attribute of an input. Only `Email` carries extra rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub input_type: InputType,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatProblem {
    InvalidEmail,
    MessageTooLong,
    InputTooLong,
    SuspiciousContent,
}

/// A field-level validation failure. Every variant maps to one fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    RequiredFieldEmpty,
    FieldFormatInvalid(FormatProblem),
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::RequiredFieldEmpty => "This field is required",
            FieldError::FieldFormatInvalid(problem) => match problem {
                FormatProblem::InvalidEmail => "Please enter a valid email address",
                FormatProblem::MessageTooLong => "Message is too long (max 500 characters)",
                FormatProblem::InputTooLong => "Input is too long (max 100 characters)",
                FormatProblem::SuspiciousContent => "Invalid characters detected",
            },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn contains_suspicious_content(text: &str) -> bool {
    SUSPICIOUS_RE.is_match(text)
}

/// Check a raw field value against its rules. The first failing rule wins.
///
/// Rules run on the trimmed value:
/// 1. required and empty
/// 2. email type with a malformed address
/// 3. non-empty value: length cap for the field kind, then the blocklist
///
/// An email field that passes the pattern skips step 3 entirely.
pub fn check_value(rules: &FieldRules, value: &str) -> Option<FieldError> {
    let trimmed = value.trim();

    if rules.required && trimmed.is_empty() {
        return Some(FieldError::RequiredFieldEmpty);
    }

    if rules.input_type == InputType::Email && !trimmed.is_empty() {
        if !is_valid_email(trimmed) {
            return Some(FieldError::FieldFormatInvalid(FormatProblem::InvalidEmail));
        }
        return None;
    }

    if trimmed.is_empty() {
        return None;
    }

    // Browsers count length in UTF-16 code units.
    if trimmed.encode_utf16().count() > rules.kind.max_len() {
        let problem = match rules.kind {
            FieldKind::Textarea => FormatProblem::MessageTooLong,
            FieldKind::Input => FormatProblem::InputTooLong,
        };
        return Some(FieldError::FieldFormatInvalid(problem));
    }

    if contains_suspicious_content(trimmed) {
        return Some(FieldError::FieldFormatInvalid(FormatProblem::SuspiciousContent));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(required: bool) -> FieldRules {
        FieldRules { required, input_type: InputType::Text, kind: FieldKind::Input }
    }

    fn email(required: bool) -> FieldRules {
        FieldRules { required, input_type: InputType::Email, kind: FieldKind::Input }
    }

    fn textarea(required: bool) -> FieldRules {
        FieldRules { required, input_type: InputType::Text, kind: FieldKind::Textarea }
    }

    #[test]
    fn required_empty_and_whitespace() {
        assert_eq!(check_value(&text(true), ""), Some(FieldError::RequiredFieldEmpty));
        assert_eq!(check_value(&text(true), "   \t"), Some(FieldError::RequiredFieldEmpty));
        assert_eq!(check_value(&email(true), ""), Some(FieldError::RequiredFieldEmpty));
    }

    #[test]
    fn optional_empty_always_passes() {
        assert_eq!(check_value(&text(false), ""), None);
        assert_eq!(check_value(&email(false), "  "), None);
        assert_eq!(check_value(&textarea(false), ""), None);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("no@dot"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("sp ace@example.com"));
        assert_eq!(
            check_value(&email(true), "not-an-email").map(|e| e.message()),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        assert_eq!(check_value(&email(true), "  ada@example.com  "), None);
    }

    #[test]
    fn valid_email_skips_length_and_blocklist() {
        let long = format!("{}@example.com", "a".repeat(120));
        assert_eq!(check_value(&email(true), &long), None);
    }

    #[test]
    fn textarea_length_cap() {
        assert_eq!(check_value(&textarea(true), &"x".repeat(500)), None);
        assert_eq!(
            check_value(&textarea(true), &"x".repeat(501)).map(|e| e.message()),
            Some("Message is too long (max 500 characters)")
        );
    }

    #[test]
    fn input_length_cap() {
        assert_eq!(check_value(&text(true), &"y".repeat(100)), None);
        assert_eq!(
            check_value(&text(false), &"y".repeat(101)).map(|e| e.message()),
            Some("Input is too long (max 100 characters)")
        );
    }

    #[test]
    fn length_counts_utf16_units() {
        assert_eq!(check_value(&text(true), &"é".repeat(100)), None);
        assert_eq!(check_value(&text(true), &"😀".repeat(50)), None);
        assert_eq!(
            check_value(&text(false), &"😀".repeat(60)),
            Some(FieldError::FieldFormatInvalid(FormatProblem::InputTooLong))
        );
        assert_eq!(
            check_value(&textarea(true), &"😀".repeat(251)),
            Some(FieldError::FieldFormatInvalid(FormatProblem::MessageTooLong))
        );
    }

    #[test]
    fn blocklist_folds_ascii_case_only() {
        assert!(contains_suspicious_content("OnClick=go()"));
        assert!(!contains_suspicious_content("onclic\u{212A}=go()"));
    }

    #[test]
    fn length_checked_before_blocklist() {
        let value = format!("<script>{}", "z".repeat(200));
        assert_eq!(
            check_value(&text(true), &value),
            Some(FieldError::FieldFormatInvalid(FormatProblem::InputTooLong))
        );
    }

    #[test]
    fn suspicious_content_case_insensitive() {
        for value in [
            "<script>alert(1)</script>",
            "<SCRIPT src=x>",
            "JavaScript:void(0)",
            "<img onerror=alert(1)>",
            "<a ONCLICK=x>",
            "<iframe src=x>",
        ] {
            assert_eq!(
                check_value(&text(true), value).map(|e| e.message()),
                Some("Invalid characters detected"),
                "{value}"
            );
        }
        assert_eq!(check_value(&textarea(true), "I script in JavaScript daily"), None);
    }

    #[test]
    fn error_display_matches_message() {
        let err = FieldError::FieldFormatInvalid(FormatProblem::SuspiciousContent);
        assert_eq!(err.to_string(), "Invalid characters detected");
        assert_eq!(FieldError::RequiredFieldEmpty.to_string(), "This field is required");
    }
}
