//! Corpus module - the ordered, read-only set of captured transactions

use crate::transaction::{Transaction, TransactionId};

/// Transactions in capture order.
///
/// Capture order approximates chronological order, which is what gives
/// "first reference" its meaning. A corpus is never mutated after it is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    transactions: Vec<Transaction>,
}

impl Corpus {
    /// Build a corpus, assigning each transaction its capture-order id
    pub fn new(transactions: Vec<Transaction>) -> Self {
        let transactions = transactions
            .into_iter()
            .enumerate()
            .map(|(index, mut tx)| {
                tx.id = TransactionId::new(index);
                tx
            })
            .collect();
        Self { transactions }
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the corpus holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.get(id.index())
    }

    /// Transactions in capture order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
