//! Grouping primitives shared by the queries
//!
//! Groups come back in the order their key is first seen, and items inside a
//! group keep their input order. Keys compare by value.

use std::collections::HashMap;
use std::hash::Hash;

/// Items sharing one key
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K, T> {
    pub key: K,
    pub items: Vec<T>,
}

impl<K, T> Group<K, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition `items` by `key_fn`, keeping first-occurrence group order.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> Vec<Group<K, I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Group<K, I::Item>> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&slot) => groups[slot].items.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

/// Count items per key, keeping first-occurrence key order.
pub fn count_by<I, K, F>(items: I, key_fn: F) -> Vec<(K, usize)>
where
    I: IntoIterator,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    group_by(items, key_fn)
        .into_iter()
        .map(|g| {
            let count = g.len();
            (g.key, count)
        })
        .collect()
}

/// Hash index from key to the matching inner items, in inner order.
///
/// Built once and probed per outer item, this is the right-hand side of a
/// group join.
pub struct JoinIndex<'a, K, T> {
    buckets: HashMap<K, Vec<&'a T>>,
}

impl<'a, K, T> JoinIndex<'a, K, T>
where
    K: Eq + Hash,
{
    pub fn build<F>(inner: &'a [T], mut key_fn: F) -> Self
    where
        F: FnMut(&'a T) -> K,
    {
        let mut buckets: HashMap<K, Vec<&'a T>> = HashMap::new();
        for item in inner {
            buckets.entry(key_fn(item)).or_default().push(item);
        }
        Self { buckets }
    }

    /// Matches for `key`; empty when nothing on the inner side shares it
    pub fn matches(&self, key: &K) -> &[&'a T] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Pair every outer item with all inner items sharing its key.
///
/// Outer items with no match are kept with an empty list; inner items with no
/// matching outer item never appear.
pub fn group_join<'a, O, T, K, FO, FI>(
    outer: &'a [O],
    inner: &'a [T],
    outer_key: FO,
    inner_key: FI,
) -> impl Iterator<Item = (&'a O, Vec<&'a T>)> + 'a
where
    K: Eq + Hash + 'a,
    FO: Fn(&'a O) -> K + 'a,
    FI: FnMut(&'a T) -> K,
{
    let index = JoinIndex::build(inner, inner_key);
    outer.iter().map(move |o| {
        let matches = index.matches(&outer_key(o)).to_vec();
        (o, matches)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_first_occurrence_order() {
        let words = vec!["bb", "a", "cc", "d", "eee"];
        let groups = group_by(words, |w| w.len());

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].key, 2);
        assert_eq!(groups[0].items, vec!["bb", "cc"]);
        assert_eq!(groups[1].key, 1);
        assert_eq!(groups[1].items, vec!["a", "d"]);
        assert_eq!(groups[2].key, 3);
    }

    #[test]
    fn test_group_by_empty_input() {
        let groups = group_by(Vec::<i32>::new(), |x| *x);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_count_by_structural_keys() {
        let pairs = vec![(1997, 8), (1997, 10), (1997, 8), (1998, 1)];
        let counts = count_by(pairs, |p| *p);
        assert_eq!(counts, vec![((1997, 8), 2), ((1997, 10), 1), ((1998, 1), 1)]);
    }

    #[test]
    fn test_group_join_keeps_unmatched_outer() {
        let outer = vec![("a", 1), ("b", 2), ("c", 1)];
        let inner = vec![(1, "x"), (3, "y"), (1, "z")];

        let joined: Vec<_> = group_join(&outer, &inner, |o| o.1, |i| i.0)
            .map(|(o, m)| (o.0, m.iter().map(|i| i.1).collect::<Vec<_>>()))
            .collect();

        assert_eq!(
            joined,
            vec![("a", vec!["x", "z"]), ("b", vec![]), ("c", vec!["x", "z"])]
        );
    }
}
