//! Offering aggregate behavior: one per customer, globally unique child
//! numbers, and full child lifecycle under the owner's credentials.

use corebank::error::BankServiceError;
use corebank::usecase::loan::{DeleteLoanUseCase, GetLoanUseCase, UpdateLoanUseCase};
use corebank::usecase::locker::{GetLockerUseCase, ListLockersUseCase, UpdateLockerUseCase};
use corebank::usecase::offering::{
    AddLoanUseCase, AddLockerUseCase, CreateOfferingInput, CreateOfferingUseCase,
    GetOfferingUseCase,
};
use corebank_auth_types::principal::Role;

use crate::helpers::{
    MockCustomerRepository, MockStore, customer, new_loan, new_locker, principal,
};

fn setup() -> (MockCustomerRepository, MockStore) {
    let customers = MockCustomerRepository::with(vec![
        customer(1, "asha@bank.test"),
        customer(2, "vikram@bank.test"),
    ]);
    (customers, MockStore::default())
}

#[tokio::test]
async fn create_and_read_back_the_aggregate() {
    let (customers, store) = setup();
    let me = principal(1, "asha@bank.test", Role::Customer);

    let create = CreateOfferingUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    let id = create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![new_loan(101, 1, 25_000)],
                lockers: vec![new_locker(55, 1001, 10)],
            },
        )
        .await
        .unwrap();

    let get = GetOfferingUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    let details = get.execute(&me, 1).await.unwrap();
    assert_eq!(details.id, id);
    assert_eq!(details.loans.len(), 1);
    assert_eq!(details.loans[0].number, 101);
    assert_eq!(details.lockers.len(), 1);
    assert_eq!(details.lockers[0].number, 55);
}

#[tokio::test]
async fn a_customer_gets_at_most_one_offering() {
    let (customers, store) = setup();
    let me = principal(1, "asha@bank.test", Role::Customer);
    let create = CreateOfferingUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };

    create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![],
                lockers: vec![],
            },
        )
        .await
        .unwrap();

    let err = create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![],
                lockers: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::OfferingAlreadyAdded));
}

#[tokio::test]
async fn child_numbers_are_unique_system_wide() {
    let (customers, store) = setup();

    let create = CreateOfferingUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    create
        .execute(
            &principal(2, "vikram@bank.test", Role::Customer),
            2,
            CreateOfferingInput {
                loans: vec![new_loan(101, 2, 10_000)],
                lockers: vec![],
            },
        )
        .await
        .unwrap();
    create
        .execute(
            &principal(1, "asha@bank.test", Role::Customer),
            1,
            CreateOfferingInput {
                loans: vec![],
                lockers: vec![],
            },
        )
        .await
        .unwrap();

    // Loan 101 already belongs to customer 2's offering. Customer 1 cannot
    // claim it, even though it does not exist inside their own aggregate.
    let add = AddLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };
    let err = add
        .execute(
            &principal(1, "asha@bank.test", Role::Customer),
            1,
            new_loan(101, 1, 5_000),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::InconsistentDetails));
}

#[tokio::test]
async fn adding_a_child_requires_an_existing_offering() {
    let (customers, store) = setup();
    let add = AddLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };

    let err = add
        .execute(
            &principal(1, "asha@bank.test", Role::Customer),
            1,
            new_loan(101, 1, 5_000),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn invalid_children_fail_validation_before_insert() {
    let (customers, store) = setup();
    let me = principal(1, "asha@bank.test", Role::Customer);
    let create = CreateOfferingUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };

    let err = create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![new_loan(0, 1, 25_000)],
                lockers: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::ValidationFailed));

    // Nothing was created.
    let get = store.offering_repo();
    assert!(
        corebank::domain::repository::OfferingRepository::find_by_customer_id(&get, 1)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn loan_update_changes_only_the_amount() {
    let (customers, store) = setup();
    let me = principal(1, "asha@bank.test", Role::Customer);
    let create = CreateOfferingUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![new_loan(101, 1, 25_000)],
                lockers: vec![],
            },
        )
        .await
        .unwrap();

    let update = UpdateLoanUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };
    update
        .execute(&me, 1, 101, new_loan(101, 1, 40_000))
        .await
        .unwrap();

    let get = GetLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };
    let loan = get.execute(&me, 1, 101).await.unwrap();
    assert_eq!(loan.amount, 40_000);
    assert_eq!(loan.customer_id, 1);
}

#[tokio::test]
async fn loan_update_rejects_path_body_number_mismatch() {
    let (customers, store) = setup();
    let update = UpdateLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };

    let err = update
        .execute(
            &principal(1, "asha@bank.test", Role::Customer),
            1,
            101,
            new_loan(102, 1, 40_000),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::InconsistentDetails));
}

#[tokio::test]
async fn deleted_loan_becomes_invisible_to_its_owner() {
    let (customers, store) = setup();
    let me = principal(1, "asha@bank.test", Role::Customer);
    let create = CreateOfferingUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![new_loan(101, 1, 25_000)],
                lockers: vec![],
            },
        )
        .await
        .unwrap();

    let delete = DeleteLoanUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };
    delete.execute(&me, 1, 101).await.unwrap();

    // The number no longer resolves inside the offering, so the ownership
    // check fails closed.
    let get = GetLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };
    let err = get.execute(&me, 1, 101).await.unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn locker_lifecycle_under_the_owner() {
    let (customers, store) = setup();
    let me = principal(1, "asha@bank.test", Role::Customer);
    let create = CreateOfferingUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    create
        .execute(
            &me,
            1,
            CreateOfferingInput {
                loans: vec![],
                lockers: vec![],
            },
        )
        .await
        .unwrap();

    let add = AddLockerUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        lockers: store.locker_repo(),
    };
    let number = add.execute(&me, 1, new_locker(55, 1001, 10)).await.unwrap();
    assert_eq!(number, 55);

    let update = UpdateLockerUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        lockers: store.locker_repo(),
    };
    update
        .execute(&me, 1, 55, new_locker(55, 2002, 20))
        .await
        .unwrap();

    let get = GetLockerUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        lockers: store.locker_repo(),
    };
    let locker = get.execute(&me, 1, 55).await.unwrap();
    assert_eq!(locker.account_number, 2002);
    assert_eq!(locker.branch_code, 20);

    let list = ListLockersUseCase {
        customers,
        offerings: store.offering_repo(),
        lockers: store.locker_repo(),
    };
    let lockers = list.execute(&me, 1).await.unwrap();
    assert_eq!(lockers.len(), 1);
}

#[tokio::test]
async fn lockers_of_one_customer_are_invisible_to_another() {
    let (customers, store) = setup();
    let create = CreateOfferingUseCase {
        customers: customers.clone(),
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
        lockers: store.locker_repo(),
    };
    create
        .execute(
            &principal(2, "vikram@bank.test", Role::Customer),
            2,
            CreateOfferingInput {
                loans: vec![],
                lockers: vec![new_locker(55, 1001, 10)],
            },
        )
        .await
        .unwrap();
    create
        .execute(
            &principal(1, "asha@bank.test", Role::Customer),
            1,
            CreateOfferingInput {
                loans: vec![],
                lockers: vec![],
            },
        )
        .await
        .unwrap();

    let get = GetLockerUseCase {
        customers,
        offerings: store.offering_repo(),
        lockers: store.locker_repo(),
    };
    let err = get
        .execute(&principal(1, "asha@bank.test", Role::Customer), 1, 55)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}
