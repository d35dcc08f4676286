//! URL slug generation.
//!
//! Every entity that appears in a public URL (vehicle brands, car brands,
//! car models, services) derives its slug from its display name with
//! [`slugify`]. Duplicate detection compares slugs, never raw names, so
//! `"Toyota"` and `"toyota "` collide.

use crate::error::CoreError;

/// Normalize a display name into a URL-safe identifier.
///
/// Lower-cases the input, replaces every maximal run of characters outside
/// `[a-z0-9]` with a single hyphen, then strips leading and trailing hyphens.
/// Input with no ASCII letters or digits yields an empty string.
///
/// # Examples
///
/// ```
/// use carcare_core::slug::slugify;
///
/// assert_eq!(slugify("Mahindra XUV-700!!"), "mahindra-xuv-700");
/// assert_eq!(slugify("  "), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Derive a slug for `field` and reject it if it comes out empty.
///
/// An all-symbol name would otherwise produce an empty key that collides
/// with every other all-symbol name.
pub fn require_slug(field: &str, value: &str) -> Result<String, CoreError> {
    let slug = slugify(value);
    if slug.is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} must contain at least one letter or digit"
        )));
    }
    Ok(slug)
}

/// Validate an optional rename, returning the trimmed name with its slug.
///
/// `None` means the field was omitted from an update and stays as stored.
pub fn renamed(field: &str, value: Option<String>) -> Result<Option<(String, String)>, CoreError> {
    match value {
        None => Ok(None),
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::Validation(format!("{field} cannot be empty")));
            }
            let slug = require_slug(field, &name)?;
            Ok(Some((name, slug)))
        }
    }
}

/// Use an admin-supplied slug when present, otherwise derive one from `name`.
///
/// A supplied slug is normalized with [`slugify`] so it obeys the same
/// character rules as a derived one.
pub fn explicit_or_derived(explicit: Option<&str>, name: &str) -> Result<String, CoreError> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => require_slug("slug", raw),
        None => require_slug("name", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_well_formed(slug: &str) -> bool {
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !slug.starts_with('-')
            && !slug.ends_with('-')
            && !slug.contains("--")
    }

    #[test]
    fn mixed_punctuation() {
        assert_eq!(slugify("Mahindra XUV-700!!"), "mahindra-xuv-700");
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(slugify("  "), "");
    }

    #[test]
    fn empty_is_empty() {
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn trailing_space_collides_with_plain_name() {
        assert_eq!(slugify("Toyota"), slugify("toyota "));
    }

    #[test]
    fn runs_collapse_to_one_hyphen() {
        assert_eq!(slugify("AC  --  Services"), "ac-services");
    }

    #[test]
    fn leading_symbols_are_stripped() {
        assert_eq!(slugify("***Ceramic Coating"), "ceramic-coating");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Škoda Octavia"), "koda-octavia");
    }

    #[test]
    fn output_is_always_well_formed() {
        let inputs = [
            "Mahindra XUV-700!!",
            "  ",
            "--a--",
            "Über Café & Bar",
            "123 456",
            "a_b.c/d",
            "ÀÉÎ",
            "-",
        ];
        for input in inputs {
            let slug = slugify(input);
            assert!(is_well_formed(&slug), "bad slug {slug:?} for {input:?}");
        }
    }

    #[test]
    fn require_slug_rejects_symbol_only_names() {
        let err = require_slug("name", "!!!").unwrap_err();
        assert!(err.to_string().contains("name must contain"));
    }

    #[test]
    fn renamed_passes_through_omitted_field() {
        assert!(renamed("name", None).unwrap().is_none());
    }

    #[test]
    fn renamed_trims_and_slugs() {
        let (name, slug) = renamed("name", Some(" Tata Motors ".into())).unwrap().unwrap();
        assert_eq!(name, "Tata Motors");
        assert_eq!(slug, "tata-motors");
    }

    #[test]
    fn renamed_rejects_blank() {
        let err = renamed("name", Some("   ".into())).unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn explicit_slug_wins_but_is_normalized() {
        assert_eq!(
            explicit_or_derived(Some("AC Repair"), "Air Conditioning").unwrap(),
            "ac-repair"
        );
    }

    #[test]
    fn blank_explicit_slug_falls_back_to_name() {
        assert_eq!(
            explicit_or_derived(Some("  "), "Air Conditioning").unwrap(),
            "air-conditioning"
        );
    }

    #[test]
    fn require_slug_returns_slug() {
        assert_eq!(require_slug("name", "Hyundai Creta").unwrap(), "hyundai-creta");
    }
}
