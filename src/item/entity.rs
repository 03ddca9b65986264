//! Entity trait implementation and loan queries for the [`LibraryItem`] domain type.
//!
//! This module contains the [`Entity`] trait implementation that enables [`LibraryItem`]
//! to be stored in a [`crate::framework::Registry`], along with snapshot rendering and
//! the overdue and fine calculations.

use chrono::{DateTime, Utc};

use super::error::ItemError;
use super::fine::fine_for_days;
use crate::config::FineSchedule;
use crate::framework::Entity;
use crate::model::{ItemCreate, ItemDetails, ItemId, ItemInfo, ItemType, LibraryItem, Member};

impl Entity for LibraryItem {
    type Id = ItemId;
    const ENTITY_TYPE: &'static str = "Item";

    fn id(&self) -> ItemId {
        LibraryItem::id(self)
    }
}

impl LibraryItem {
    /// Creates a new item from a loosely-typed payload.
    ///
    /// # Errors
    /// [`ItemError::UnknownType`] if `params.kind` is not a recognized item kind.
    pub fn from_create_params(params: ItemCreate) -> Result<Self, ItemError> {
        let item_type: ItemType = params
            .kind
            .parse()
            .map_err(|_| ItemError::UnknownType(params.kind.clone()))?;
        Ok(Self::new(
            params.title,
            params.pub_year,
            params.author_name,
            ItemDetails::new(item_type, params.detail),
        ))
    }

    /// Renders the item's snapshot.
    ///
    /// `borrower` is the member this item's `borrowed_by` points at, resolved by the caller.
    pub fn info(&self, borrower: Option<&Member>) -> ItemInfo {
        ItemInfo {
            id: self.id(),
            title: self.title().to_string(),
            author_name: self.author_name().to_string(),
            pub_year: self.pub_year().to_string(),
            is_borrowed: self.is_borrowed(),
            borrowed_by: borrower.map(Member::info),
            due_date: self.due_date(),
            details: self.details().clone(),
        }
    }

    /// Whether the item is past its due date at `now`.
    ///
    /// # Errors
    /// [`ItemError::NotBorrowed`] if the item is not on loan.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> Result<bool, ItemError> {
        let due_date = self.loan_due_date()?;
        Ok(now > due_date)
    }

    /// Fine owed at `now` under `schedule`.
    ///
    /// # Errors
    /// [`ItemError::NotBorrowed`] if the item is not on loan.
    pub fn calculate_fine(&self, now: DateTime<Utc>, schedule: &FineSchedule) -> Result<u64, ItemError> {
        let due_date = self.loan_due_date()?;
        let days_overdue = (now - due_date).num_days();
        Ok(fine_for_days(days_overdue, schedule))
    }

    fn loan_due_date(&self) -> Result<DateTime<Utc>, ItemError> {
        match (self.is_borrowed(), self.due_date()) {
            (true, Some(due_date)) => Ok(due_date),
            _ => Err(ItemError::NotBorrowed(self.id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::{json, Value};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn on_loan(member: &Member, due_date: DateTime<Utc>) -> LibraryItem {
        let mut item = LibraryItem::book(
            "The Art of Thinking Clearly",
            "2013",
            "Rolf Dobelli",
            "978-0062219688",
        );
        item.set_is_borrowed(true);
        item.set_borrowed_by(Some(member.id()));
        item.set_due_date(Some(due_date));
        item
    }

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn fresh_item_snapshot() {
        let item = LibraryItem::book("The Art of Thinking Clearly", "2013", "Rolf Dobelli", "978-0062219688");
        let info = serde_json::to_value(item.info(None)).unwrap();

        assert_eq!(info["id"], json!(item.id().to_string()));
        assert_eq!(info["title"], "The Art of Thinking Clearly");
        assert_eq!(info["pub_year"], "2013");
        assert_eq!(info["author_name"], "Rolf Dobelli");
        assert_eq!(info["is_borrowed"], false);
        assert_eq!(info["borrowed_by"], Value::Null);
        assert_eq!(info["due_date"], Value::Null);
        assert_eq!(info["ISBN"], "978-0062219688");
    }

    #[test]
    fn each_kind_adds_exactly_one_field() {
        let base = ["author_name", "borrowed_by", "due_date", "id", "is_borrowed", "pub_year", "title"];
        let cases = [
            (LibraryItem::book("The Pragmatic Programmer", "1999", "Andrew Hunt and David Thomas", "978-0201616224"), "ISBN"),
            (LibraryItem::magazine("National Geographic", "2023", "Susan Goldberg", "May 2023 Issue"), "issue_no"),
            (LibraryItem::dvd("Inception", "2010", "Christopher Nolan", "2h:28m"), "duration"),
        ];

        for (item, extra) in cases {
            let info = serde_json::to_value(item.info(None)).unwrap();
            let mut expected: Vec<String> = base.iter().map(|k| k.to_string()).collect();
            expected.push(extra.to_string());
            expected.sort();
            assert_eq!(keys(&info), expected);
        }
    }

    #[test]
    fn borrowed_by_embeds_member_snapshot() {
        let member = Member::new("Patrick");
        let item = on_loan(&member, now());
        let info = serde_json::to_value(item.info(Some(&member))).unwrap();

        assert_eq!(info["borrowed_by"], json!({ "id": member.id().to_string(), "name": "Patrick" }));
        assert_eq!(info["is_borrowed"], true);
        assert!(info["due_date"].is_string());
    }

    #[test]
    fn unborrowed_item_rejects_loan_queries() {
        let item = LibraryItem::dvd("Inception", "2010", "Christopher Nolan", "2h:28m");

        assert_eq!(item.is_overdue(now()), Err(ItemError::NotBorrowed(item.id())));
        assert_eq!(
            item.calculate_fine(now(), &FineSchedule::default()),
            Err(ItemError::NotBorrowed(item.id()))
        );
    }

    #[test]
    fn overdue_only_after_due_date() {
        let member = Member::new("Patrick");
        let item = on_loan(&member, now() + Duration::days(4));

        assert_eq!(item.is_overdue(now()), Ok(false));
        assert_eq!(item.is_overdue(now() + Duration::days(4)), Ok(false));
        assert_eq!(item.is_overdue(now() + Duration::days(4) + Duration::seconds(1)), Ok(true));
    }

    #[test]
    fn fine_follows_overdue_bands() {
        let member = Member::new("Patrick");
        let schedule = FineSchedule::default();
        let cases = [(-4, 0), (2, 30), (60, 1_000), (365, 10_000), (750, 10_000)];

        for (days_late, expected) in cases {
            let item = on_loan(&member, now() - Duration::days(days_late));
            assert_eq!(item.calculate_fine(now(), &schedule), Ok(expected), "{} days late", days_late);
        }
    }

    #[test]
    fn partial_days_do_not_count() {
        let member = Member::new("Patrick");
        let item = on_loan(&member, now() - Duration::hours(47));

        assert_eq!(item.calculate_fine(now(), &FineSchedule::default()), Ok(15));
    }

    #[test]
    fn create_params_parse_kind() {
        let params = ItemCreate {
            kind: "Magazine".to_string(),
            title: "National Geographic".to_string(),
            author_name: "Susan Goldberg".to_string(),
            pub_year: "2023".to_string(),
            detail: "May 2023 Issue".to_string(),
        };
        let item = LibraryItem::from_create_params(params).unwrap();

        assert_eq!(item.item_type(), ItemType::Magazine);
        assert_eq!(
            item.details(),
            &ItemDetails::Magazine { issue_no: "May 2023 Issue".to_string() }
        );
    }

    #[test]
    fn create_params_reject_unknown_kind() {
        let params = ItemCreate {
            kind: "vinyl".to_string(),
            title: "Kind of Blue".to_string(),
            author_name: "Miles Davis".to_string(),
            pub_year: "1959".to_string(),
            detail: "45m".to_string(),
        };

        assert_eq!(
            LibraryItem::from_create_params(params),
            Err(ItemError::UnknownType("vinyl".to_string()))
        );
    }
}
