use std::collections::HashSet;

/// Integer identifier of a single item.
pub type Item = u64;

/// A transaction is an unordered set of item identifiers (duplicates collapse).
///
/// Empty transactions are legal: they contain no item, but they still count
/// towards the transaction total used as the support denominator.
pub type Transaction = HashSet<Item>;

/// An itemset confirmed frequent, annotated with its raw occurrence count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrequentItemset {
    /// Items in canonical order (ascending MIS, ties by identifier).
    pub items: Vec<Item>,
    /// Number of transactions containing every item of the set.
    pub count: usize,
}

/// All frequent itemsets of one size, in the order they were extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsetLevel {
    /// The itemset size shared by every entry of this level.
    pub size: usize,
    pub itemsets: Vec<FrequentItemset>,
}

impl ItemsetLevel {
    pub fn new(size: usize) -> ItemsetLevel {
        ItemsetLevel {
            size,
            itemsets: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// Iterate over the raw item sequences of this level.
    pub fn iter_items(&self) -> impl Iterator<Item = &[Item]> {
        self.itemsets.iter().map(|itemset| itemset.items.as_slice())
    }
}
