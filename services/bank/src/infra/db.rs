//! sea-orm implementations of the domain repositories.
//!
//! Uniqueness is enforced by the database, not by the application: inserts
//! that may race a duplicate go through `ON CONFLICT DO NOTHING` and report
//! the collision through their return value instead of surfacing a
//! constraint violation.

use anyhow::Context;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

use corebank_auth_types::principal::Role;
use corebank_schema::{customers, employees, loans, lockers, offerings};

use crate::domain::repository::{
    CustomerRepository, EmployeeRepository, LoanRepository, LockerRepository, OfferingRepository,
};
use crate::domain::types::{
    Address, Branch, Card, Customer, CustomerProfile, Employee, EmployeeProfile, Loan, Locker,
    NewLoan, NewLocker, Offering,
};
use crate::error::BankServiceError;

// ── row ↔ domain mapping ─────────────────────────────────────────────────────

/// `None` when any profile column is still null, i.e. the account is in the
/// registered-but-incomplete phase.
fn customer_profile(row: &customers::Model) -> Option<CustomerProfile> {
    Some(CustomerProfile {
        name: row.name.clone()?,
        account_number: row.account_number?,
        branch: Branch {
            name: row.branch_name.clone()?,
            code: row.branch_code?,
            ifsc: row.branch_ifsc.clone()?,
        },
        account_type: row.account_type.clone()?,
        contact_number: row.contact_number?,
        card: Card {
            card_number: row.card_number?,
            credit_limit: row.card_credit_limit?,
            expiry_date: row.card_expiry_date?,
        },
        pan_number: row.pan_number?,
        address: Address {
            street: row.street.clone()?,
            city: row.city.clone()?,
            state: row.state.clone()?,
            pin: row.pin.clone()?,
        },
    })
}

fn employee_profile(row: &employees::Model) -> Option<EmployeeProfile> {
    Some(EmployeeProfile {
        name: row.name.clone()?,
        salary: row.salary?,
        title: row.title.clone()?,
        address: Address {
            street: row.street.clone()?,
            city: row.city.clone()?,
            state: row.state.clone()?,
            pin: row.pin.clone()?,
        },
        joining_date: row.joining_date?,
    })
}

fn parse_role(raw: &str) -> Result<Role, BankServiceError> {
    let role = raw
        .parse::<Role>()
        .map_err(|e| anyhow::anyhow!("stored role is invalid: {e}"))?;
    Ok(role)
}

fn customer_from_row(row: customers::Model) -> Result<Customer, BankServiceError> {
    Ok(Customer {
        id: row.id,
        profile: customer_profile(&row),
        role: parse_role(&row.role)?,
        email: row.email,
        password: row.password,
    })
}

fn employee_from_row(row: employees::Model) -> Result<Employee, BankServiceError> {
    Ok(Employee {
        id: row.id,
        profile: employee_profile(&row),
        role: parse_role(&row.role)?,
        email: row.email,
        password: row.password,
    })
}

fn loan_from_row(row: loans::Model) -> Loan {
    Loan {
        id: row.id,
        number: row.number,
        customer_id: row.customer_id,
        amount: row.amount,
        offering_id: row.offering_id,
    }
}

fn locker_from_row(row: lockers::Model) -> Locker {
    Locker {
        id: row.id,
        number: row.number,
        account_number: row.account_number,
        branch_code: row.branch_code,
        offering_id: row.offering_id,
    }
}

// ── customers ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCustomerRepository {
    pub db: DatabaseConnection,
}

impl CustomerRepository for DbCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, BankServiceError> {
        let row = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("finding customer by id")?;
        row.map(customer_from_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, BankServiceError> {
        let row = customers::Entity::find()
            .filter(customers::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("finding customer by email")?;
        row.map(customer_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Customer>, BankServiceError> {
        let rows = customers::Entity::find()
            .all(&self.db)
            .await
            .context("listing customers")?;
        rows.into_iter().map(customer_from_row).collect()
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Option<i64>, BankServiceError> {
        let row = customers::ActiveModel {
            email: Set(email.to_owned()),
            password: Set(password.to_owned()),
            role: Set(role.as_str().to_owned()),
            ..Default::default()
        };
        let res = customers::Entity::insert(row)
            .on_conflict(
                OnConflict::column(customers::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;
        match res {
            Ok(inserted) => Ok(Some(inserted.last_insert_id)),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context("registering customer"))?,
        }
    }

    async fn save_profile(
        &self,
        id: i64,
        profile: &CustomerProfile,
    ) -> Result<(), BankServiceError> {
        let row = customers::ActiveModel {
            id: Set(id),
            name: Set(Some(profile.name.clone())),
            account_number: Set(Some(profile.account_number)),
            account_type: Set(Some(profile.account_type.clone())),
            contact_number: Set(Some(profile.contact_number)),
            pan_number: Set(Some(profile.pan_number)),
            branch_name: Set(Some(profile.branch.name.clone())),
            branch_code: Set(Some(profile.branch.code)),
            branch_ifsc: Set(Some(profile.branch.ifsc.clone())),
            card_number: Set(Some(profile.card.card_number)),
            card_credit_limit: Set(Some(profile.card.credit_limit)),
            card_expiry_date: Set(Some(profile.card.expiry_date)),
            street: Set(Some(profile.address.street.clone())),
            city: Set(Some(profile.address.city.clone())),
            state: Set(Some(profile.address.state.clone())),
            pin: Set(Some(profile.address.pin.clone())),
            ..Default::default()
        };
        row.update(&self.db)
            .await
            .context("saving customer profile")?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, BankServiceError> {
        let res = customers::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("deleting customer")?;
        Ok(res.rows_affected > 0)
    }
}

// ── employees ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, BankServiceError> {
        let row = employees::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("finding employee by id")?;
        row.map(employee_from_row).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, BankServiceError> {
        let row = employees::Entity::find()
            .filter(employees::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("finding employee by email")?;
        row.map(employee_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Employee>, BankServiceError> {
        let rows = employees::Entity::find()
            .all(&self.db)
            .await
            .context("listing employees")?;
        rows.into_iter().map(employee_from_row).collect()
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Option<i64>, BankServiceError> {
        let row = employees::ActiveModel {
            email: Set(email.to_owned()),
            password: Set(password.to_owned()),
            role: Set(role.as_str().to_owned()),
            ..Default::default()
        };
        let res = employees::Entity::insert(row)
            .on_conflict(
                OnConflict::column(employees::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;
        match res {
            Ok(inserted) => Ok(Some(inserted.last_insert_id)),
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context("registering employee"))?,
        }
    }

    async fn save_profile(
        &self,
        id: i64,
        profile: &EmployeeProfile,
    ) -> Result<(), BankServiceError> {
        let row = employees::ActiveModel {
            id: Set(id),
            name: Set(Some(profile.name.clone())),
            salary: Set(Some(profile.salary)),
            title: Set(Some(profile.title.clone())),
            joining_date: Set(Some(profile.joining_date)),
            street: Set(Some(profile.address.street.clone())),
            city: Set(Some(profile.address.city.clone())),
            state: Set(Some(profile.address.state.clone())),
            pin: Set(Some(profile.address.pin.clone())),
            ..Default::default()
        };
        row.update(&self.db)
            .await
            .context("saving employee profile")?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, BankServiceError> {
        let res = employees::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("deleting employee")?;
        Ok(res.rows_affected > 0)
    }
}

// ── offerings ────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOfferingRepository {
    pub db: DatabaseConnection,
}

impl OfferingRepository for DbOfferingRepository {
    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Option<Offering>, BankServiceError> {
        let row = offerings::Entity::find()
            .filter(offerings::Column::CustomerId.eq(customer_id))
            .one(&self.db)
            .await
            .context("finding offering by customer")?;
        Ok(row.map(|r| Offering {
            id: r.id,
            customer_id: r.customer_id,
        }))
    }

    async fn create_with_children(
        &self,
        customer_id: i64,
        new_loans: &[NewLoan],
        new_lockers: &[NewLocker],
    ) -> Result<Option<i64>, BankServiceError> {
        let txn = self.db.begin().await.context("opening transaction")?;

        let offering = offerings::ActiveModel {
            customer_id: Set(customer_id),
            ..Default::default()
        };
        let offering_id = match offerings::Entity::insert(offering)
            .on_conflict(
                OnConflict::column(offerings::Column::CustomerId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&txn)
            .await
        {
            Ok(inserted) => inserted.last_insert_id,
            // The customer already has an offering; dropping the transaction
            // rolls back.
            Err(DbErr::RecordNotInserted) => return Ok(None),
            Err(e) => return Err(anyhow::Error::new(e).context("inserting offering"))?,
        };

        for loan in new_loans {
            let row = loans::ActiveModel {
                number: Set(loan.number),
                customer_id: Set(loan.customer_id),
                amount: Set(loan.amount),
                offering_id: Set(offering_id),
                ..Default::default()
            };
            match loans::Entity::insert(row)
                .on_conflict(
                    OnConflict::column(loans::Column::Number)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(&txn)
                .await
            {
                Ok(_) => {}
                // A concurrent writer claimed the number after the caller's
                // pre-check; the whole aggregate write is abandoned.
                Err(DbErr::RecordNotInserted) => {
                    return Err(BankServiceError::InconsistentDetails);
                }
                Err(e) => return Err(anyhow::Error::new(e).context("inserting loan"))?,
            }
        }

        for locker in new_lockers {
            let row = lockers::ActiveModel {
                number: Set(locker.number),
                account_number: Set(locker.account_number),
                branch_code: Set(locker.branch_code),
                offering_id: Set(offering_id),
                ..Default::default()
            };
            match lockers::Entity::insert(row)
                .on_conflict(
                    OnConflict::column(lockers::Column::Number)
                        .do_nothing()
                        .to_owned(),
                )
                .exec(&txn)
                .await
            {
                Ok(_) => {}
                Err(DbErr::RecordNotInserted) => {
                    return Err(BankServiceError::InconsistentDetails);
                }
                Err(e) => return Err(anyhow::Error::new(e).context("inserting locker"))?,
            }
        }

        txn.commit().await.context("committing offering")?;
        Ok(Some(offering_id))
    }
}

// ── loans ────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLoanRepository {
    pub db: DatabaseConnection,
}

impl LoanRepository for DbLoanRepository {
    async fn find_by_number(&self, number: i64) -> Result<Option<Loan>, BankServiceError> {
        let row = loans::Entity::find()
            .filter(loans::Column::Number.eq(number))
            .one(&self.db)
            .await
            .context("finding loan by number")?;
        Ok(row.map(loan_from_row))
    }

    async fn exists_by_number(&self, number: i64) -> Result<bool, BankServiceError> {
        let count = loans::Entity::find()
            .filter(loans::Column::Number.eq(number))
            .count(&self.db)
            .await
            .context("counting loans by number")?;
        Ok(count > 0)
    }

    async fn list_by_offering(&self, offering_id: i64) -> Result<Vec<Loan>, BankServiceError> {
        let rows = loans::Entity::find()
            .filter(loans::Column::OfferingId.eq(offering_id))
            .all(&self.db)
            .await
            .context("listing loans")?;
        Ok(rows.into_iter().map(loan_from_row).collect())
    }

    async fn insert(&self, offering_id: i64, loan: &NewLoan) -> Result<bool, BankServiceError> {
        let row = loans::ActiveModel {
            number: Set(loan.number),
            customer_id: Set(loan.customer_id),
            amount: Set(loan.amount),
            offering_id: Set(offering_id),
            ..Default::default()
        };
        let res = loans::Entity::insert(row)
            .on_conflict(
                OnConflict::column(loans::Column::Number)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;
        match res {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("inserting loan"))?,
        }
    }

    async fn update_amount(&self, number: i64, amount: i64) -> Result<(), BankServiceError> {
        loans::Entity::update_many()
            .col_expr(loans::Column::Amount, Expr::value(amount))
            .filter(loans::Column::Number.eq(number))
            .exec(&self.db)
            .await
            .context("updating loan amount")?;
        Ok(())
    }

    async fn delete_by_number(&self, number: i64) -> Result<bool, BankServiceError> {
        let res = loans::Entity::delete_many()
            .filter(loans::Column::Number.eq(number))
            .exec(&self.db)
            .await
            .context("deleting loan")?;
        Ok(res.rows_affected > 0)
    }
}

// ── lockers ──────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLockerRepository {
    pub db: DatabaseConnection,
}

impl LockerRepository for DbLockerRepository {
    async fn find_by_number(&self, number: i64) -> Result<Option<Locker>, BankServiceError> {
        let row = lockers::Entity::find()
            .filter(lockers::Column::Number.eq(number))
            .one(&self.db)
            .await
            .context("finding locker by number")?;
        Ok(row.map(locker_from_row))
    }

    async fn exists_by_number(&self, number: i64) -> Result<bool, BankServiceError> {
        let count = lockers::Entity::find()
            .filter(lockers::Column::Number.eq(number))
            .count(&self.db)
            .await
            .context("counting lockers by number")?;
        Ok(count > 0)
    }

    async fn list_by_offering(&self, offering_id: i64) -> Result<Vec<Locker>, BankServiceError> {
        let rows = lockers::Entity::find()
            .filter(lockers::Column::OfferingId.eq(offering_id))
            .all(&self.db)
            .await
            .context("listing lockers")?;
        Ok(rows.into_iter().map(locker_from_row).collect())
    }

    async fn insert(
        &self,
        offering_id: i64,
        locker: &NewLocker,
    ) -> Result<bool, BankServiceError> {
        let row = lockers::ActiveModel {
            number: Set(locker.number),
            account_number: Set(locker.account_number),
            branch_code: Set(locker.branch_code),
            offering_id: Set(offering_id),
            ..Default::default()
        };
        let res = lockers::Entity::insert(row)
            .on_conflict(
                OnConflict::column(lockers::Column::Number)
                    .do_nothing()
                    .to_owned(),
            )
            .exec(&self.db)
            .await;
        match res {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("inserting locker"))?,
        }
    }

    async fn update_details(
        &self,
        number: i64,
        account_number: i64,
        branch_code: i64,
    ) -> Result<(), BankServiceError> {
        lockers::Entity::update_many()
            .col_expr(lockers::Column::AccountNumber, Expr::value(account_number))
            .col_expr(lockers::Column::BranchCode, Expr::value(branch_code))
            .filter(lockers::Column::Number.eq(number))
            .exec(&self.db)
            .await
            .context("updating locker details")?;
        Ok(())
    }

    async fn delete_by_number(&self, number: i64) -> Result<bool, BankServiceError> {
        let res = lockers::Entity::delete_many()
            .filter(lockers::Column::Number.eq(number))
            .exec(&self.db)
            .await
            .context("deleting locker")?;
        Ok(res.rows_affected > 0)
    }
}
