use celes::Country;

/// Two-letter ISO 3166-1 code for a three-letter one. Codes that are already
/// two letters are accepted if they name a known country.
pub fn two_letter(code: &str) -> Option<&'static str> {
    let code = code.trim().to_ascii_uppercase();
    let country = match code.len() {
        3 => Country::from_alpha3(&code).ok()?,
        2 => Country::from_alpha2(&code).ok()?,
        _ => return None,
    };
    Some(country.alpha2)
}
