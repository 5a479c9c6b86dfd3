// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! String transforms shared by the slug parser and the slug builder.
//!
//! Fragments produced by [`to_slug_fragment`] contain only lowercase ASCII
//! alphanumeric characters and hyphens, which makes them safe to embed in a
//! single URL path segment without escaping.

/// Converts free text into a slug fragment.
///
/// The text is lowercased and trimmed, every run of whitespace becomes a
/// single hyphen and any character outside `[a-z0-9-]` is dropped. Existing
/// hyphens are kept as-is, so `"a - b"` becomes `"a---b"`, and whitespace
/// next to a dropped character leaves a dangling hyphen (`"Rust *"` becomes
/// `"rust-"`). Applying the function to its own output returns the output
/// unchanged.
///
/// # Examples
///
/// ```
/// use referral_seo::to_slug_fragment;
///
/// assert_eq!(to_slug_fragment("  Senior   Engineer "), "senior-engineer");
/// assert_eq!(to_slug_fragment("C++ Developer"), "c-developer");
/// assert_eq!(to_slug_fragment("Node.js"), "nodejs");
/// ```
pub fn to_slug_fragment(text: &str,) -> String
{
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();

    let mut fragment = String::with_capacity(trimmed.len(),);
    let mut in_whitespace = false;

    for candidate in trimmed.chars() {
        if candidate.is_whitespace() {
            if !in_whitespace {
                fragment.push('-',);
                in_whitespace = true;
            }
            continue;
        }

        in_whitespace = false;
        if matches!(candidate, 'a'..='z' | '0'..='9' | '-') {
            fragment.push(candidate,);
        }
    }

    fragment
}

/// Converts a slug fragment back into human-readable text.
///
/// Hyphens become spaces and the first character of every word is
/// uppercased. The conversion is lossy: original capitalization, punctuation
/// and spacing removed by [`to_slug_fragment`] cannot be recovered, so
/// `"C++ Developer"` comes back as `"C Developer"`.
///
/// # Examples
///
/// ```
/// use referral_seo::to_display_text;
///
/// assert_eq!(to_display_text("data-scientist"), "Data Scientist");
/// assert_eq!(to_display_text("bangalore-india"), "Bangalore India");
/// ```
pub fn to_display_text(fragment: &str,) -> String
{
    let mut display = String::with_capacity(fragment.len(),);
    let mut at_word_start = true;

    for candidate in fragment.chars() {
        if candidate == '-' {
            display.push(' ',);
            at_word_start = true;
            continue;
        }

        let is_word = candidate.is_alphanumeric() || candidate == '_';
        if at_word_start && is_word {
            display.extend(candidate.to_uppercase(),);
        } else {
            display.push(candidate,);
        }
        at_word_start = !is_word;
    }

    display
}
