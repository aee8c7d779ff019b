//! Shared test utilities for `flowgen-core`.

use std::collections::VecDeque;

use flowgen_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;
use rand::RngCore;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `FLOWGEN_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// [`RngCore`] wrapper that counts how many words were pulled from the inner
/// generator.
///
/// # Examples
/// ```ignore
/// use rand::{Rng, SeedableRng, rngs::SmallRng};
///
/// let mut rng = CountingRng::new(SmallRng::seed_from_u64(1));
/// let _: f64 = rng.r#gen();
/// assert_eq!(rng.draws(), 1);
/// ```
#[derive(Debug)]
pub(crate) struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R: RngCore> CountingRng<R> {
    pub(crate) const fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    /// Returns the number of `next_u32`, `next_u64` and fill calls observed.
    pub(crate) const fn draws(&self) -> usize {
        self.draws
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}

/// Breadth-first oracle: is `target` reachable from `source` over `arcs`?
///
/// Independent of the DFS under test so the two can be compared.
pub(crate) fn bfs_reaches(
    vertex_count: usize,
    arcs: impl IntoIterator<Item = (usize, usize)>,
    source: usize,
    target: usize,
) -> bool {
    let mut adjacency = vec![Vec::new(); vertex_count + 1];
    for (from, to) in arcs {
        if let Some(targets) = adjacency.get_mut(from) {
            targets.push(to);
        }
    }

    let mut seen = vec![false; vertex_count + 1];
    let mut queue = VecDeque::from([source]);
    if let Some(flag) = seen.get_mut(source) {
        *flag = true;
    }
    while let Some(vertex) = queue.pop_front() {
        if vertex == target {
            return true;
        }
        for &next in adjacency.get(vertex).map(Vec::as_slice).unwrap_or_default() {
            if let Some(flag) = seen.get_mut(next)
                && !*flag
            {
                *flag = true;
                queue.push_back(next);
            }
        }
    }
    false
}
