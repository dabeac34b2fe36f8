//! Connection URL helpers.

/// Replace the password of a connection URL with `****` for logging.
///
/// The user info ends at the last `@`, so a password that itself contains
/// `@` or `:` is masked in full. URLs without a password are returned as is.
pub fn mask_url_password(url: &str) -> String {
    let Some(at_pos) = url.rfind('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }
    match url[scheme_end..at_pos].find(':') {
        Some(offset) => {
            let colon_pos = scheme_end + offset;
            format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..])
        }
        None => url.to_string(),
    }
}
