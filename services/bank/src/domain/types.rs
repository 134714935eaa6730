use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use corebank_auth_types::principal::Role;

/// Branch details attached to a customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub code: i64,
    pub ifsc: String,
}

/// Card issued against a customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub card_number: i64,
    pub credit_limit: i64,
    pub expiry_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pin: String,
}

/// A customer account. Registration creates the bare record (email, password,
/// role); `profile` is `None` until the customer completes their profile.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: i64,
    pub profile: Option<CustomerProfile>,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Customer {
    pub fn profile_complete(&self) -> bool {
        self.profile.is_some()
    }
}

/// The domain data a customer supplies after registering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    pub name: String,
    pub account_number: i64,
    pub branch: Branch,
    pub account_type: String,
    pub contact_number: i64,
    pub card: Card,
    pub pan_number: i64,
    pub address: Address,
}

impl CustomerProfile {
    /// Structural payload validation, mirroring the positive / non-empty
    /// constraints on the wire shape.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.account_number > 0
            && !self.account_type.is_empty()
            && self.contact_number > 0
            && self.pan_number > 0
            && !self.branch.name.is_empty()
            && self.branch.code > 0
            && !self.branch.ifsc.is_empty()
            && self.card.card_number > 0
            && self.card.credit_limit > 0
            && !self.address.street.is_empty()
            && !self.address.city.is_empty()
            && !self.address.state.is_empty()
            && !self.address.pin.is_empty()
    }
}

/// An employee account, with the same two-phase lifecycle as customers.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub profile: Option<EmployeeProfile>,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Employee {
    pub fn profile_complete(&self) -> bool {
        self.profile.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub name: String,
    pub salary: i32,
    pub title: String,
    pub address: Address,
    pub joining_date: NaiveDate,
}

impl EmployeeProfile {
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
            && self.salary > 0
            && !self.title.is_empty()
            && self.joining_date <= Utc::now().date_naive()
            && !self.address.street.is_empty()
            && !self.address.city.is_empty()
            && !self.address.state.is_empty()
            && !self.address.pin.is_empty()
    }
}

/// Offering aggregate root. Children are linked by `offering_id`, never by
/// object pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offering {
    pub id: i64,
    pub customer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    pub id: i64,
    pub number: i64,
    pub customer_id: i64,
    pub amount: i64,
    pub offering_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locker {
    pub id: i64,
    pub number: i64,
    pub account_number: i64,
    pub branch_code: i64,
    pub offering_id: i64,
}

/// Loan fields as supplied by the client; the row id and parent linkage are
/// assigned at insert time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLoan {
    pub number: i64,
    pub customer_id: i64,
    pub amount: i64,
}

impl NewLoan {
    pub fn is_valid(&self) -> bool {
        self.number > 0 && self.customer_id > 0 && self.amount > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocker {
    pub number: i64,
    pub account_number: i64,
    pub branch_code: i64,
}

impl NewLocker {
    pub fn is_valid(&self) -> bool {
        self.number > 0 && self.account_number > 0 && self.branch_code > 0
    }
}

/// Structural check for a registration identifier: `local@domain`, ASCII,
/// both sides non-empty, charset per the usual address grammar. Anything
/// stricter (deliverability, MX) is not this service's problem.
pub fn validate_email(email: &str) -> bool {
    if !email.is_ascii() {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "_!#$%&'*+/=?`{|}~^.-".contains(c))
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}
