//! Entity trait implementation and lending workflow for the [`Member`] domain type.
//!
//! Borrowing and returning are the only paths that write an item's loan fields. Both keep
//! `is_borrowed`, `borrowed_by` and `due_date` set or cleared together.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use super::error::MemberError;
use crate::framework::Entity;
use crate::model::{LibraryItem, Member, MemberId, MemberInfo};

impl Entity for Member {
    type Id = MemberId;
    const ENTITY_TYPE: &'static str = "Member";

    fn id(&self) -> MemberId {
        Member::id(self)
    }
}

impl Member {
    /// Renders the member's `{id, name}` snapshot.
    pub fn info(&self) -> MemberInfo {
        MemberInfo {
            id: self.id(),
            name: self.name().to_string(),
        }
    }

    /// Puts `item` on loan to this member, due `loan_period` after `now`.
    ///
    /// Only a repeat borrow by the same member is rejected. An item on loan to another
    /// member is taken over; that member keeps the id in their own list.
    ///
    /// # Errors
    /// - [`MemberError::AlreadyBorrowed`] if this member already holds the item.
    /// - [`MemberError::DueDateOutOfRange`] if `now + loan_period` cannot be represented.
    ///   Neither the item nor the member is changed.
    pub fn borrow_item(
        &mut self,
        item: &mut LibraryItem,
        now: DateTime<Utc>,
        loan_period: Duration,
    ) -> Result<(), MemberError> {
        let item_id = item.id();
        if self.has_borrowed(&item_id) {
            return Err(MemberError::AlreadyBorrowed {
                member: self.id(),
                item: item_id,
            });
        }

        let due_date = now
            .checked_add_signed(loan_period)
            .ok_or(MemberError::DueDateOutOfRange { item: item_id })?;

        if let Some(holder) = item.borrowed_by() {
            warn!(member_id = %self.id(), %item_id, %holder, "Item already on loan to another member");
        }

        item.set_is_borrowed(true);
        item.set_borrowed_by(Some(self.id()));
        item.set_due_date(Some(due_date));
        self.record_borrowed(item_id);

        debug!(member_id = %self.id(), %item_id, %due_date, "Borrowed");
        Ok(())
    }

    /// Takes `item` back from this member and clears its loan fields.
    ///
    /// # Errors
    /// [`MemberError::NotBorrowed`] if this member does not hold the item.
    pub fn return_item(&mut self, item: &mut LibraryItem) -> Result<(), MemberError> {
        let item_id = item.id();
        if !self.has_borrowed(&item_id) {
            return Err(MemberError::NotBorrowed {
                member: self.id(),
                item: item_id,
            });
        }

        item.set_is_borrowed(false);
        item.set_borrowed_by(None);
        item.set_due_date(None);
        self.forget_borrowed(&item_id);

        debug!(member_id = %self.id(), %item_id, "Returned");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn book() -> LibraryItem {
        LibraryItem::book("The Pragmatic Programmer", "1999", "Andrew Hunt and David Thomas", "978-0201616224")
    }

    #[test]
    fn info_is_id_and_name() {
        let member = Member::new("Patrick");
        assert_eq!(
            member.info(),
            MemberInfo { id: member.id(), name: "Patrick".to_string() }
        );
    }

    #[test]
    fn borrow_sets_all_loan_fields() {
        let mut member = Member::new("Patrick");
        let mut item = book();

        member.borrow_item(&mut item, now(), Duration::days(4)).unwrap();

        assert!(item.is_borrowed());
        assert_eq!(item.borrowed_by(), Some(member.id()));
        assert_eq!(item.due_date(), Some(now() + Duration::days(4)));
        assert_eq!(member.borrowed_item_ids(), &[item.id()]);
    }

    #[test]
    fn borrow_twice_is_rejected() {
        let mut member = Member::new("Patrick");
        let mut item = book();
        member.borrow_item(&mut item, now(), Duration::days(4)).unwrap();

        let err = member
            .borrow_item(&mut item, now() + Duration::days(1), Duration::days(4))
            .unwrap_err();

        assert_eq!(err, MemberError::AlreadyBorrowed { member: member.id(), item: item.id() });
        assert_eq!(item.due_date(), Some(now() + Duration::days(4)));
        assert_eq!(member.borrowed_item_ids().len(), 1);
    }

    #[test]
    fn return_clears_all_loan_fields() {
        let mut member = Member::new("Patrick");
        let mut item = book();
        member.borrow_item(&mut item, now(), Duration::days(4)).unwrap();

        member.return_item(&mut item).unwrap();

        assert!(!item.is_borrowed());
        assert_eq!(item.borrowed_by(), None);
        assert_eq!(item.due_date(), None);
        assert!(member.borrowed_item_ids().is_empty());
    }

    #[test]
    fn return_unborrowed_is_rejected() {
        let mut member = Member::new("Patrick");
        let mut item = book();

        let err = member.return_item(&mut item).unwrap_err();

        assert_eq!(err, MemberError::NotBorrowed { member: member.id(), item: item.id() });
    }

    #[test]
    fn unrepresentable_due_date_leaves_state_untouched() {
        let mut member = Member::new("Patrick");
        let mut item = book();

        let err = member
            .borrow_item(&mut item, DateTime::<Utc>::MAX_UTC, Duration::days(1))
            .unwrap_err();

        assert_eq!(err, MemberError::DueDateOutOfRange { item: item.id() });
        assert!(!item.is_borrowed());
        assert_eq!(item.borrowed_by(), None);
        assert_eq!(item.due_date(), None);
        assert!(member.borrowed_item_ids().is_empty());
    }

    #[test]
    fn second_member_takes_over_loan() {
        let mut first = Member::new("Patrick");
        let mut second = Member::new("Ada");
        let mut item = book();

        first.borrow_item(&mut item, now(), Duration::days(4)).unwrap();
        second.borrow_item(&mut item, now(), Duration::days(4)).unwrap();

        assert_eq!(item.borrowed_by(), Some(second.id()));
        assert!(first.has_borrowed(&item.id()));
        assert!(second.has_borrowed(&item.id()));
    }
}
