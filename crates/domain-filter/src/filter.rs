//! This module houses the block-list index.

use tracing::debug;

use crate::{domain::Domain, verdict::Verdict};

/// A sorted, minimal set of blocked domains that answers "is this domain or one of
/// its ancestors blocked" in `O(log n)`.
///
/// Minimal means no entry is a subdomain of another entry. Pruning does not change
/// which domains are forbidden, it only drops entries that are already covered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    banned: Vec<Domain>,
}

impl Blocklist {
    pub fn new(domains: impl IntoIterator<Item = Domain>) -> Self {
        let mut banned: Vec<Domain> = domains.into_iter().collect();
        let raw_len = banned.len();

        // Normalized forms put the top level label first, so after sorting every
        // domain follows its ancestors and anything between an ancestor and one of its
        // descendants is itself a descendant of that ancestor. Comparing each entry
        // with the last retained one is therefore enough to drop everything covered.
        banned.sort_unstable();
        banned.dedup_by(|current, retained| current.is_subdomain(retained));
        banned.shrink_to_fit();

        debug!(
            raw = raw_len,
            minimal = banned.len(),
            "Built blocklist index"
        );

        Self { banned }
    }

    /// Returns true if `domain` is a blocked domain or a subdomain of one.
    pub fn is_forbidden(&self, domain: &Domain) -> bool {
        // Upper bound: index of the first entry strictly greater than `domain`.
        let upper = self.banned.partition_point(|banned| banned <= domain);

        // The only candidate is the greatest entry not exceeding `domain`. With
        // `upper == 0` every entry is greater than `domain` and so cannot be a prefix
        // of it; this also covers the empty list.
        match upper.checked_sub(1) {
            Some(candidate) => domain.is_subdomain(&self.banned[candidate]),
            None => false,
        }
    }

    pub fn verdict(&self, domain: &Domain) -> Verdict {
        self.is_forbidden(domain).into()
    }

    /// The minimal sorted set of blocked domains.
    pub fn banned(&self) -> &[Domain] {
        &self.banned
    }

    pub fn len(&self) -> usize {
        self.banned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banned.is_empty()
    }
}

impl FromIterator<Domain> for Blocklist {
    fn from_iter<T: IntoIterator<Item = Domain>>(iter: T) -> Self {
        Self::new(iter)
    }
}
