use im::Vector;

use crate::solver::{engine::VariableId, value::ValueEquality};

/// A per-frame record of the `(variable, value)` pairs pruned from current
/// domains by forward checking, in removal order. Reversing a frame means
/// replaying this log through [`DomainStore::restore`], nothing more.
#[derive(Debug, Clone)]
pub struct RemovalLog<V: ValueEquality> {
    removals: Vec<(VariableId, V)>,
}

impl<V: ValueEquality> RemovalLog<V> {
    pub fn new() -> Self {
        Self {
            removals: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.removals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(VariableId, V)> {
        self.removals.iter()
    }

    pub(crate) fn record(&mut self, var: VariableId, value: V) {
        self.removals.push((var, value));
    }
}

impl<V: ValueEquality> Default for RemovalLog<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueEquality> IntoIterator for RemovalLog<V> {
    type Item = (VariableId, V);
    type IntoIter = std::vec::IntoIter<(VariableId, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.removals.into_iter()
    }
}

/// The two parallel domain structures of a solve: the *original* domains
/// (the immutable baseline supplied at construction) and the *current*
/// domains (pruned by forward checking, restored on backtrack).
///
/// Invariant: every current domain is an order-preserving subsequence of its
/// original domain. Values are only ever removed from current domains or
/// reinstated at the position that keeps original-domain order, so
/// restoration is exact.
#[derive(Debug, Clone)]
pub struct DomainStore<V: ValueEquality> {
    original: Vec<Vector<V>>,
    current: Vec<Vector<V>>,
}

impl<V: ValueEquality> DomainStore<V> {
    /// Seeds both structures from the caller's ordered domains. Variable ids
    /// are the indices of `domains`.
    pub fn new(domains: Vec<Vec<V>>) -> Self {
        let original: Vec<Vector<V>> = domains
            .into_iter()
            .map(|values| values.into_iter().collect())
            .collect();
        let current = original.clone();
        Self { original, current }
    }

    pub fn variable_count(&self) -> usize {
        self.original.len()
    }

    pub fn contains_variable(&self, var: VariableId) -> bool {
        (var as usize) < self.original.len()
    }

    pub fn current(&self, var: VariableId) -> &Vector<V> {
        &self.current[var as usize]
    }

    pub fn original(&self, var: VariableId) -> &Vector<V> {
        &self.original[var as usize]
    }

    /// Removes `value` from the current domain of `var`, recording the
    /// removal in `log`. A value not present is a no-op.
    pub fn remove(&mut self, var: VariableId, value: &V, log: &mut RemovalLog<V>) {
        if let Some(position) = self.current[var as usize].index_of(value) {
            let removed = self.current[var as usize].remove(position);
            log.record(var, removed);
        }
    }

    /// Narrows the current domain of `var` to the singleton `[value]`,
    /// logging every displaced value so the narrowing reverses like any
    /// other forward-checking prune.
    pub fn narrow(&mut self, var: VariableId, value: &V, log: &mut RemovalLog<V>) {
        let displaced: Vec<V> = self.current[var as usize]
            .iter()
            .filter(|candidate| *candidate != value)
            .cloned()
            .collect();
        for candidate in displaced {
            self.remove(var, &candidate, log);
        }
    }

    /// Sets the current domain of `var` to the singleton `[value]` without
    /// logging. This is the caller-side seeding step for pre-assigned
    /// variables, applied before the search starts.
    pub fn pin(&mut self, var: VariableId, value: V) {
        self.current[var as usize] = im::vector![value];
    }

    /// Reinserts every logged removal at the position that preserves
    /// original-domain order. Values already present are skipped, so a log
    /// whose entries were each removed exactly once restores the domains
    /// bit for bit, and an empty log is a no-op.
    pub fn restore(&mut self, log: RemovalLog<V>) {
        for (var, value) in log {
            let idx = var as usize;
            if self.current[idx].contains(&value) {
                continue;
            }
            let original = &self.original[idx];
            let Some(home) = original.index_of(&value) else {
                continue;
            };
            let position = self.current[idx]
                .iter()
                .position(|existing| original.index_of(existing).map_or(true, |at| at > home))
                .unwrap_or(self.current[idx].len());
            self.current[idx].insert(position, value);
        }
    }

    /// Resets every current domain back to its original baseline, making the
    /// store reusable for a fresh solve.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{DomainStore, RemovalLog};

    fn store() -> DomainStore<i64> {
        DomainStore::new(vec![vec![1, 2, 3, 4], vec![1, 2]])
    }

    #[test]
    fn restore_reinstates_in_original_order() {
        let mut domains = store();
        let before = domains.current(0).clone();

        let mut log = RemovalLog::new();
        domains.remove(0, &2, &mut log);
        domains.remove(0, &4, &mut log);
        assert_eq!(
            domains.current(0).iter().copied().collect::<Vec<_>>(),
            vec![1, 3]
        );

        domains.restore(log);
        assert_eq!(domains.current(0), &before);
    }

    #[test]
    fn restore_with_empty_log_is_a_no_op() {
        let mut domains = store();
        let before = domains.clone();
        domains.restore(RemovalLog::new());
        assert_eq!(domains.current(0), before.current(0));
        assert_eq!(domains.current(1), before.current(1));
    }

    #[test]
    fn restore_never_duplicates_a_value() {
        let mut domains = store();
        let mut log = RemovalLog::new();
        domains.remove(1, &2, &mut log);

        // A second log carrying the same pair must not reinstate it twice.
        let mut duplicate = RemovalLog::new();
        duplicate.record(1, 2);

        domains.restore(log);
        domains.restore(duplicate);
        assert_eq!(
            domains.current(1).iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn narrow_logs_every_displaced_value() {
        let mut domains = store();
        let mut log = RemovalLog::new();
        domains.narrow(0, &3, &mut log);

        assert_eq!(
            domains.current(0).iter().copied().collect::<Vec<_>>(),
            vec![3]
        );
        assert_eq!(log.len(), 3);

        domains.restore(log);
        assert_eq!(
            domains.current(0).iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
    }

    #[test]
    fn pin_narrows_without_logging() {
        let mut domains = store();
        domains.pin(0, 2);
        assert_eq!(
            domains.current(0).iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
        // The baseline is untouched.
        assert_eq!(domains.original(0).len(), 4);
    }

    #[test]
    fn reset_returns_to_the_baseline() {
        let mut domains = store();
        let mut log = RemovalLog::new();
        domains.narrow(0, &1, &mut log);
        domains.pin(1, 2);

        domains.reset();
        assert_eq!(
            domains.current(0).iter().copied().collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            domains.current(1).iter().copied().collect::<Vec<_>>(),
            vec![1, 2]
        );
    }
}
