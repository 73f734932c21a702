//! Field format checks shared by the forms

/// Loose e-mail check: `local@domain.tld`, no whitespace, exactly one `@`,
/// and a dot inside the domain part with something on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Mobile number: spaces and dashes are ignored, the rest must be 7-15
/// characters of digits or `+`.
pub fn is_valid_mobile(mobile: &str) -> bool {
    let cleaned: Vec<char> = mobile
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    (7..=15).contains(&cleaned.len())
        && cleaned.iter().all(|c| c.is_ascii_digit() || *c == '+')
}
