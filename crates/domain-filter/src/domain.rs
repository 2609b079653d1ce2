use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Separator between labels. It is also appended to every normalized form, so a
/// prefix match on normalized forms always ends on a label boundary.
pub const SEPARATOR: char = '.';

/// A domain name held in its normalized form: the characters of the dotted name
/// reversed, followed by a trailing [`SEPARATOR`].
///
/// `gdz.ru` is stored as `ur.zdg.` and `a.gdz.ru` as `ur.zdg.a.`. Reversing puts the
/// top level label first, so plain lexicographic ordering of normalized forms sorts
/// every domain directly after its ancestors, and "is a subdomain of" becomes
/// "has the other normalized form as a prefix".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Domain {
    normalized: String,
}

impl Domain {
    /// Parses a dotted domain name such as `alex.maps.me`.
    ///
    /// Fails on strings that do not split into non-empty labels. Nothing else is
    /// validated: case, character set and label length are taken as given.
    pub fn parse(input: &str) -> Result<Self> {
        let reason = if input.is_empty() {
            Some("empty domain")
        } else if input.starts_with(SEPARATOR) {
            Some("leading separator")
        } else if input.ends_with(SEPARATOR) {
            Some("trailing separator")
        } else if input.contains("..") {
            Some("empty label")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::MalformedDomain {
                domain: input.to_owned(),
                position: None,
                reason,
            });
        }

        let mut normalized = String::with_capacity(input.len() + 1);
        normalized.extend(input.chars().rev());
        normalized.push(SEPARATOR);
        Ok(Self { normalized })
    }

    /// Wraps a string that is already in normalized form (`ur.zdg.`).
    pub fn from_normalized(normalized: impl Into<String>) -> Self {
        Self {
            normalized: normalized.into(),
        }
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns true if `self` is `other` or one of its descendants.
    pub fn is_subdomain(&self, other: &Domain) -> bool {
        other.normalized.len() <= self.normalized.len()
            && self.normalized.starts_with(other.normalized.as_str())
    }

    /// Labels from the top level domain downwards, `["ru", "gdz"]` for `gdz.ru`.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.normalized
            .trim_end_matches(SEPARATOR)
            .split(SEPARATOR)
            .map(|label| label.chars().rev().collect())
    }

    pub fn label_count(&self) -> usize {
        self.normalized.matches(SEPARATOR).count()
    }

    /// Builds the direct subdomain `label.<self>`.
    pub fn child(&self, label: &str) -> Result<Self> {
        if label.is_empty() || label.contains(SEPARATOR) {
            return Err(Error::MalformedDomain {
                domain: format!("{label}{SEPARATOR}{self}"),
                position: None,
                reason: "invalid child label",
            });
        }

        let mut normalized = String::with_capacity(self.normalized.len() + label.len() + 1);
        normalized.push_str(&self.normalized);
        normalized.extend(label.chars().rev());
        normalized.push(SEPARATOR);
        Ok(Self { normalized })
    }
}

impl FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted: String = self
            .normalized
            .strip_suffix(SEPARATOR)
            .unwrap_or(&self.normalized)
            .chars()
            .rev()
            .collect();
        f.write_str(&dotted)
    }
}

#[cfg(test)]
mod tests {
    use super::Domain;
    use crate::error::Error;

    #[test]
    fn test_parse_normalizes() {
        let domain = Domain::parse("gdz.ru").unwrap();
        assert_eq!(domain.normalized(), "ur.zdg.");

        let domain: Domain = "maps.me".parse().unwrap();
        assert_eq!(domain.normalized(), "em.spam.");
    }

    #[test]
    fn test_single_label() {
        let domain = Domain::parse("localhost").unwrap();
        assert_eq!(domain.normalized(), "tsohlacol.");
        assert_eq!(domain.label_count(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for (input, expected_reason) in [
            ("", "empty domain"),
            (".gdz.ru", "leading separator"),
            ("gdz.ru.", "trailing separator"),
            ("gdz..ru", "empty label"),
            (".", "leading separator"),
        ] {
            match Domain::parse(input) {
                Err(Error::MalformedDomain {
                    domain,
                    position,
                    reason,
                }) => {
                    assert_eq!(domain, input);
                    assert_eq!(position, None);
                    assert_eq!(reason, expected_reason);
                }
                other => panic!("expected malformed domain error for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_equality() {
        let domain1 = Domain::from_normalized("ur.zdg.");
        let domain2 = Domain::parse("gdz.ru").unwrap();
        let domain3 = Domain::from_normalized("ur.zdg.a.");
        assert_eq!(domain1, domain2);
        assert_ne!(domain1, domain3);
    }

    #[test]
    fn test_is_subdomain() {
        let domain = Domain::from_normalized("ur.zdg.");
        let subdomain = Domain::from_normalized("ur.zdg.a.");
        assert!(subdomain.is_subdomain(&domain));
        assert!(!domain.is_subdomain(&subdomain));
    }

    #[test]
    fn test_is_subdomain_is_reflexive_and_transitive() {
        let root = Domain::parse("gdz.ru").unwrap();
        let middle = Domain::parse("b.gdz.ru").unwrap();
        let leaf = Domain::parse("a.b.gdz.ru").unwrap();

        assert!(root.is_subdomain(&root));
        assert!(leaf.is_subdomain(&middle));
        assert!(middle.is_subdomain(&root));
        assert!(leaf.is_subdomain(&root));
    }

    #[test]
    fn test_is_subdomain_respects_label_boundary() {
        let blocked = Domain::parse("gdz.ru").unwrap();
        for tested in ["abcgdz.ru", "evil-gdz.ru", "freegdz.ru", "dz.ru", "gdz.rus"] {
            let tested = Domain::parse(tested).unwrap();
            assert!(!tested.is_subdomain(&blocked), "{tested} matched {blocked}");
        }
    }

    #[test]
    fn test_display_restores_dotted_form() {
        let domain = Domain::parse("alex.maps.me").unwrap();
        assert_eq!(domain.to_string(), "alex.maps.me");
        assert_eq!(Domain::from_normalized("ur.zdg.").to_string(), "gdz.ru");
    }

    #[test]
    fn test_labels_are_root_first() {
        let domain = Domain::parse("a.b.gdz.ru").unwrap();
        assert_eq!(domain.labels().collect::<Vec<_>>(), vec!["ru", "gdz", "b", "a"]);
        assert_eq!(domain.label_count(), 4);
    }

    #[test]
    fn test_child() {
        let domain = Domain::parse("gdz.ru").unwrap();
        let child = domain.child("abc").unwrap();
        assert_eq!(child, Domain::parse("abc.gdz.ru").unwrap());
        assert!(child.is_subdomain(&domain));

        assert!(domain.child("").is_err());
        assert!(domain.child("a.b").is_err());
    }

    #[test]
    fn test_ordering_places_descendants_after_ancestors() {
        let mut domains: Vec<Domain> = ["maps.me", "abc.gdz.ru", "gdz.ru", "a.ru"]
            .iter()
            .map(|d| d.parse().unwrap())
            .collect();
        domains.sort();
        let sorted: Vec<String> = domains.iter().map(|d| d.to_string()).collect();
        assert_eq!(sorted, vec!["maps.me", "a.ru", "gdz.ru", "abc.gdz.ru"]);
    }
}
