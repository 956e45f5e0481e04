use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    common::money::Money,
    domain::debt::{Debt, DebtId, NewDebt},
};

/// The host-owned collection every view reads from. Insertion order is kept.
#[derive(Debug, Default)]
pub struct DebtBook {
    debts: Vec<Debt>,
    index: HashMap<DebtId, usize>,
    next_id: u32,
}

impl DebtBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn len(&self) -> usize {
        self.debts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.debts.is_empty()
    }

    pub fn contains(&self, id: DebtId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: DebtId) -> Option<&Debt> {
        self.index.get(&id).map(|&i| &self.debts[i])
    }

    pub fn get_mut(&mut self, id: DebtId) -> Option<&mut Debt> {
        self.index.get(&id).map(|&i| &mut self.debts[i])
    }

    /// Stores a debt entered through the form under a fresh id.
    pub fn record(&mut self, data: NewDebt, created_on: NaiveDate) -> DebtId {
        while self.index.contains_key(&DebtId(self.next_id)) {
            self.next_id += 1;
        }
        let id = DebtId(self.next_id);
        self.next_id += 1;
        self.push(Debt::new(id, data, created_on));
        id
    }

    /// Adds an existing debt. Returns false and leaves the book unchanged when
    /// the id is already taken.
    pub fn insert(&mut self, debt: Debt) -> bool {
        if self.index.contains_key(&debt.id) {
            return false;
        }
        self.push(debt);
        true
    }

    /// Appends a payment. Returns false for an unknown id.
    pub fn apply_payment(&mut self, id: DebtId, amount: Money) -> bool {
        match self.get_mut(id) {
            Some(debt) => {
                debt.record_payment(amount);
                true
            }
            None => false,
        }
    }

    /// Returns false for an unknown id.
    pub fn mark_paid(&mut self, id: DebtId) -> bool {
        match self.get_mut(id) {
            Some(debt) => {
                debt.set_paid(true);
                true
            }
            None => false,
        }
    }

    fn push(&mut self, debt: Debt) {
        self.index.insert(debt.id, self.debts.len());
        self.debts.push(debt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn new_debt(name: &str, amount: i64) -> NewDebt {
        NewDebt {
            debtor_name: name.into(),
            amount: Money::from_units(amount),
            ..NewDebt::default()
        }
    }

    #[test]
    fn record_assigns_fresh_ids_in_order() {
        let mut book = DebtBook::new();
        let a = book.record(new_debt("Ali", 10), day(1));
        let b = book.record(new_debt("Huda", 20), day(2));

        assert_ne!(a, b);
        assert_eq!(book.len(), 2);
        assert_eq!(book.debts()[0].debtor_name, "Ali");
        assert_eq!(book.get(b).unwrap().amount, Money::from_units(20));
        assert!(!book.get(a).unwrap().paid);
        assert!(book.contains(a) && book.contains(b));
        assert!(!book.contains(DebtId(99)));
    }

    #[test]
    fn record_skips_ids_taken_by_insert() {
        let mut book = DebtBook::new();
        let existing = Debt::new(DebtId(0), new_debt("Ali", 5), day(1));
        assert!(book.insert(existing));

        let id = book.record(new_debt("Sara", 7), day(2));
        assert_eq!(id, DebtId(1));
    }

    #[test]
    fn insert_ignores_duplicate_id() {
        let mut book = DebtBook::new();
        assert!(book.insert(Debt::new(DebtId(9), new_debt("Ali", 5), day(1))));
        assert!(!book.insert(Debt::new(DebtId(9), new_debt("Omar", 99), day(2))));

        assert_eq!(book.len(), 1);
        assert_eq!(book.get(DebtId(9)).unwrap().debtor_name, "Ali");
    }

    #[test]
    fn payments_and_settlement_on_known_and_unknown_ids() {
        let mut book = DebtBook::new();
        let id = book.record(new_debt("Ali", 100), day(1));

        assert!(book.apply_payment(id, Money::from_units(40)));
        assert!(book.mark_paid(id));
        assert!(!book.apply_payment(DebtId(77), Money::from_units(1)));
        assert!(!book.mark_paid(DebtId(77)));

        let debt = book.get(id).unwrap();
        assert!(debt.paid);
        assert_eq!(debt.paid_amount(), Money::from_units(40));
    }
}
