//! String transformation utilities for code generation

/// Converts a string to snake_case.
///
/// Handles camelCase, PascalCase, kebab-case and space-separated input.
///
/// # Examples
/// ```
/// use mcp_forge::generation::utils::to_snake_case;
///
/// assert_eq!(to_snake_case("weatherServer"), "weather_server");
/// assert_eq!(to_snake_case("Weather-Server"), "weather_server");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_uppercase() {
            // Word boundary on a lower-to-upper transition
            if prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else if (ch == '-' || ch == '_' || ch == ' ') && !result.is_empty() && !result.ends_with('_') {
            result.push('_');
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Converts a string to the kebab-case form npm expects for package names.
///
/// # Examples
/// ```
/// use mcp_forge::generation::utils::to_kebab_case;
///
/// assert_eq!(to_kebab_case("WeatherServer"), "weather-server");
/// assert_eq!(to_kebab_case("my_server"), "my-server");
/// ```
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}
