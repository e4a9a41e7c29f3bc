//! Package name sanitization for artifact file names and UMD globals.

use std::sync::LazyLock;

use regex::Regex;

// Scope prefix, leading non-letters, characters outside the file-safe set,
// trailing punctuation.
static PACKAGE_NAME_STRIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^@.*/)|(^[^a-zA-Z]+)|[^a-zA-Z0-9_.-]|([^a-zA-Z0-9]+$)")
        .expect("package name pattern is valid")
});

// Same as above but keeps the scope so it folds into the identifier.
static VARIABLE_NAME_STRIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^[^a-zA-Z]+)|[^a-zA-Z0-9_.-]|([^a-zA-Z0-9]+$)")
        .expect("variable name pattern is valid")
});

/// Derive the file-name-safe form of a package name.
///
/// # Examples
///
/// ```
/// use libpack_config::safe_package_name;
///
/// assert_eq!(safe_package_name("@scope/My-Pkg"), "my-pkg");
/// assert_eq!(safe_package_name("left-pad"), "left-pad");
/// ```
pub fn safe_package_name(name: &str) -> String {
    PACKAGE_NAME_STRIP
        .replace_all(&name.to_lowercase(), "")
        .into_owned()
}

/// Derive an identifier-safe camel-cased global name from a package name.
///
/// # Examples
///
/// ```
/// use libpack_config::safe_variable_name;
///
/// assert_eq!(safe_variable_name("react-dom"), "reactDom");
/// assert_eq!(safe_variable_name("@scope/my-pkg"), "scopemyPkg");
/// ```
pub fn safe_variable_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let stripped = VARIABLE_NAME_STRIP.replace_all(&lowered, "");
    camel_case(&stripped)
}

/// Check that `name` is a valid JavaScript identifier.
///
/// Must start with a letter, underscore, or dollar sign and continue with
/// letters, digits, underscores, or dollar signs.
pub fn is_valid_identifier(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("identifier cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err("must start with a letter, underscore, or dollar sign".to_string());
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err("can only contain letters, numbers, underscores, or dollar signs".to_string());
    }

    Ok(())
}

/// Words are split on non-alphanumerics and at letter/digit boundaries.
fn camel_case(input: &str) -> String {
    let mut words: Vec<String> = Vec::new();

    for chunk in input.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut current = String::new();
        let mut prev_digit = None;
        for c in chunk.chars() {
            let digit = c.is_ascii_digit();
            if prev_digit.is_some_and(|prev| prev != digit) {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
            prev_digit = Some(digit);
        }
        if !current.is_empty() {
            words.push(current);
        }
    }

    let mut out = String::with_capacity(input.len());
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}
