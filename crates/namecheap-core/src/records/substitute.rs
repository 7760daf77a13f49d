//! Placeholder substitution for record templates
//!
//! A pattern is scanned once, left to right. Each recognised `%key%` marker
//! is replaced by its value; the substituted values themselves are never
//! rescanned. Unknown markers are copied through unchanged.

/// Placeholder keys understood by [`Substitutions`]
pub const PLACEHOLDER_KEYS: [&str; 5] = ["domain", "ipv4", "ipv6", "hostname", "acme_challenge"];

/// Fixed key → value mapping, built once per plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions<'a> {
    domain: &'a str,
    ipv4: &'a str,
    ipv6: &'a str,
    hostname: &'a str,
    acme_challenge: &'a str,
}

impl<'a> Substitutions<'a> {
    /// Create a mapping. Unset inputs are passed as empty strings.
    pub fn new(
        domain: &'a str,
        ipv4: &'a str,
        ipv6: &'a str,
        hostname: &'a str,
        acme_challenge: &'a str,
    ) -> Self {
        Self {
            domain,
            ipv4,
            ipv6,
            hostname,
            acme_challenge,
        }
    }

    fn lookup(&self, key: &str) -> Option<&'a str> {
        match key {
            "domain" => Some(self.domain),
            "ipv4" => Some(self.ipv4),
            "ipv6" => Some(self.ipv6),
            "hostname" => Some(self.hostname),
            "acme_challenge" => Some(self.acme_challenge),
            _ => None,
        }
    }

    /// First `%key%` marker in `pattern` whose key is not a known placeholder
    ///
    /// Only `%` pairs enclosing a bare identifier count as markers, so text
    /// such as `100% or 50%` is not reported.
    pub fn unknown_marker(pattern: &str) -> Option<&str> {
        let mut rest = pattern;
        while let Some(start) = rest.find('%') {
            let after = &rest[start + 1..];
            let end = after.find('%')?;
            let key = &after[..end];

            let is_identifier =
                !key.is_empty() && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
            if is_identifier && !PLACEHOLDER_KEYS.contains(&key) {
                return Some(key);
            }
            rest = if is_identifier { &after[end + 1..] } else { after };
        }
        None
    }

    /// Resolve every placeholder in `pattern`
    pub fn apply(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + 32);
        let mut rest = pattern;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let Some(end) = after.find('%') else {
                // Unterminated marker
                out.push_str(&rest[start..]);
                return out;
            };

            match self.lookup(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 1..];
                }
                None => {
                    // Keep the opening `%` and retry from the closing one,
                    // which may start a real marker
                    out.push('%');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }
}
