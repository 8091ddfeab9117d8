#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameFormatError {
    TooShort,
    InvalidCharacters,
    TooLong,
}

impl UsernameFormatError {
    pub fn message(&self) -> &'static str {
        match self {
            UsernameFormatError::TooShort => "Username must be at least 3 characters",
            UsernameFormatError::InvalidCharacters => {
                "Username may only contain letters, digits, underscores and hyphens"
            }
            UsernameFormatError::TooLong => "Username must be at most 30 characters",
        }
    }
}

/// Validates a requested username and returns its canonical lowercase form.
///
/// Checks run in order: minimum length, allowed charset, then maximum
/// length after lowercasing. Stored usernames are always lowercase.
pub fn normalize_username(raw: &str) -> Result<String, UsernameFormatError> {
    let trimmed = raw.trim();

    if trimmed.len() < 3 {
        return Err(UsernameFormatError::TooShort);
    }

    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(UsernameFormatError::InvalidCharacters);
    }

    let normalized = trimmed.to_lowercase();

    if normalized.len() > 30 {
        return Err(UsernameFormatError::TooLong);
    }

    Ok(normalized)
}
