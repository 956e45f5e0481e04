//! Headless state for the "add debt" form and its debtor combobox.
//!
//! The form never stores anything itself. A valid submission is handed to the
//! host's callback and the fields are cleared; an invalid one is refused
//! without touching the callback or the fields.

use chrono::NaiveDate;

use crate::{
    common::{error::FormError, money::Money},
    domain::{
        debt::{Debt, NewDebt},
        directory::{filter_debtors, unique_debtors},
    },
};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// What the combobox dropdown should list for the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions {
    pub names: Vec<String>,
    /// No known debtor matches, so submitting will start a new one.
    pub creates_new_debtor: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebtForm {
    debtor_name: String,
    amount: Money,
    due_date: Option<NaiveDate>,
    description: String,
    query: String,
    open: bool,
}

impl DebtForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn debtor_name(&self) -> &str {
        &self.debtor_name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Typing in the name box filters the dropdown and opens it.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = true;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn suggestions(&self, debts: &[Debt]) -> Suggestions {
        let directory = unique_debtors(debts);
        let names: Vec<String> = filter_debtors(&directory, &self.query)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let creates_new_debtor = names.is_empty() && !self.query.is_empty();
        Suggestions {
            names,
            creates_new_debtor,
        }
    }

    /// Picks an existing debtor from the dropdown.
    pub fn select(&mut self, name: impl Into<String>) {
        self.debtor_name = name.into();
        self.open = false;
    }

    /// Takes the typed query verbatim as the debtor name.
    pub fn accept_query(&mut self) {
        self.debtor_name = self.query.clone();
        self.open = false;
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    /// Raw text from the amount field; anything unparsable counts as zero.
    pub fn set_amount_input(&mut self, input: &str) {
        self.set_amount(Money::parse_or_zero(input));
    }

    pub fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }

    /// Raw text from a date input (`YYYY-MM-DD`). Empty or invalid text clears
    /// the due date.
    pub fn set_due_date_input(&mut self, input: &str) {
        self.set_due_date(NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).ok());
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.debtor_name.is_empty() {
            return Err(FormError::MissingDebtorName);
        }
        if self.amount.is_negative() {
            return Err(FormError::NegativeAmount);
        }
        Ok(())
    }

    /// Hands the entered debt to `on_submit` and resets the form.
    ///
    /// # Examples
    /// ```
    /// use debt_ledger::common::money::Money;
    /// use debt_ledger::ui::form::DebtForm;
    ///
    /// let mut form = DebtForm::new();
    /// form.set_query("Ali");
    /// form.accept_query();
    /// form.set_amount_input("1500");
    ///
    /// let mut submitted = Vec::new();
    /// form.submit(|debt| submitted.push(debt)).unwrap();
    ///
    /// assert_eq!(submitted[0].debtor_name, "Ali");
    /// assert_eq!(submitted[0].amount, Money::from_units(1500));
    /// assert_eq!(form, DebtForm::new());
    /// ```
    pub fn submit<F>(&mut self, on_submit: F) -> Result<(), FormError>
    where
        F: FnOnce(NewDebt),
    {
        if let Err(err) = self.validate() {
            tracing::debug!(%err, "debt form submission refused");
            return Err(err);
        }

        let data = NewDebt {
            debtor_name: std::mem::take(&mut self.debtor_name),
            amount: self.amount,
            description: std::mem::take(&mut self.description),
            due_date: self.due_date,
        };
        *self = Self::default();

        tracing::debug!(debtor = %data.debtor_name, amount = %data.amount, "debt form submitted");
        on_submit(data);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::debt::DebtId;

    fn debt(id: u32, name: &str) -> Debt {
        Debt::new(
            DebtId(id),
            NewDebt {
                debtor_name: name.into(),
                amount: Money::from_units(10),
                ..NewDebt::default()
            },
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn debts() -> Vec<Debt> {
        vec![debt(1, "Zainab"), debt(2, "Ali"), debt(3, "Zainab"), debt(4, "Khalil")]
    }

    #[test]
    fn empty_query_lists_whole_directory() {
        let form = DebtForm::new();
        let s = form.suggestions(&debts());
        assert_eq!(s.names, vec!["Ali", "Khalil", "Zainab"]);
        assert!(!s.creates_new_debtor);
    }

    #[test]
    fn query_filters_case_insensitively_and_opens_dropdown() {
        let mut form = DebtForm::new();
        form.set_query("AL");
        assert!(form.is_open());

        let s = form.suggestions(&debts());
        assert_eq!(s.names, vec!["Ali", "Khalil"]);
        assert!(!s.creates_new_debtor);
    }

    #[test]
    fn unmatched_query_signals_new_debtor() {
        let mut form = DebtForm::new();
        form.set_query("Mustafa");

        let s = form.suggestions(&debts());
        assert!(s.names.is_empty());
        assert!(s.creates_new_debtor);
    }

    #[test]
    fn select_sets_name_and_closes() {
        let mut form = DebtForm::new();
        form.set_query("zai");
        form.select("Zainab");
        assert_eq!(form.debtor_name(), "Zainab");
        assert!(!form.is_open());
    }

    #[test]
    fn malformed_amount_becomes_zero() {
        let mut form = DebtForm::new();
        form.set_amount_input("12x");
        assert_eq!(form.amount(), Money::zero());
        form.set_amount_input("750.25");
        assert_eq!(form.amount(), "750.25".parse::<Money>().unwrap());
    }

    #[test]
    fn due_date_input_parses_iso_dates() {
        let mut form = DebtForm::new();
        form.set_due_date_input("2024-12-31");
        assert_eq!(form.due_date(), NaiveDate::from_ymd_opt(2024, 12, 31));
        form.set_due_date_input("");
        assert_eq!(form.due_date(), None);
        form.set_due_date_input("31/12/2024");
        assert_eq!(form.due_date(), None);
    }

    #[test]
    fn typed_setters_feed_submit() {
        let mut form = DebtForm::new();
        form.select("Huda");
        form.set_amount(Money::from_units(90));
        form.set_due_date(NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(form.amount(), Money::from_units(90));

        let mut received = None;
        form.submit(|d| received = Some(d)).unwrap();
        let d = received.unwrap();
        assert_eq!(d.amount, Money::from_units(90));
        assert_eq!(d.due_date, NaiveDate::from_ymd_opt(2025, 1, 15));

        form.set_due_date(NaiveDate::from_ymd_opt(2025, 2, 1));
        form.set_due_date(None);
        assert_eq!(form.due_date(), None);
    }

    #[test]
    fn submit_hands_data_to_host_and_resets() {
        let mut form = DebtForm::new();
        form.set_query("Ali");
        form.select("Ali");
        form.set_amount_input("300");
        form.set_due_date_input("2024-08-01");
        form.set_description("phone");

        let mut received = None;
        form.submit(|d| received = Some(d)).unwrap();

        assert_eq!(
            received,
            Some(NewDebt {
                debtor_name: "Ali".into(),
                amount: Money::from_units(300),
                description: "phone".into(),
                due_date: NaiveDate::from_ymd_opt(2024, 8, 1),
            })
        );
        assert_eq!(form, DebtForm::new());
        assert_eq!(form.query(), "");
    }

    #[test]
    fn empty_name_is_refused_and_form_keeps_values() {
        let mut form = DebtForm::new();
        form.set_amount_input("40");
        form.set_description("coffee");
        let before = form.clone();

        let mut called = false;
        let result = form.submit(|_| called = true);

        assert_eq!(result, Err(FormError::MissingDebtorName));
        assert!(!called);
        assert_eq!(form, before);
    }

    #[test]
    fn negative_amount_is_refused() {
        let mut form = DebtForm::new();
        form.select("Ali");
        form.set_amount_input("-5");

        let mut called = false;
        assert_eq!(form.submit(|_| called = true), Err(FormError::NegativeAmount));
        assert!(!called);
        assert_eq!(form.amount(), Money::from_units(-5));
    }

    #[test]
    fn zero_amount_is_accepted() {
        let mut form = DebtForm::new();
        form.set_query("New Person");
        form.accept_query();

        let mut received = None;
        form.submit(|d| received = Some(d)).unwrap();
        let d = received.unwrap();
        assert_eq!(d.debtor_name, "New Person");
        assert_eq!(d.amount, Money::zero());
    }
}
