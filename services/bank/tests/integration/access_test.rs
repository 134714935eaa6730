//! Principal resolution and ownership validation against in-memory stores.

use corebank::domain::repository::OfferingRepository;
use corebank::error::BankServiceError;
use corebank::usecase::access::ResolvePrincipalUseCase;
use corebank::usecase::customer::GetCustomerUseCase;
use corebank::usecase::employee::GetEmployeeUseCase;
use corebank::usecase::loan::GetLoanUseCase;
use corebank_auth_types::principal::Role;

use crate::helpers::{
    MockCustomerRepository, MockEmployeeRepository, MockStore, customer, employee, new_loan,
    principal,
};

#[tokio::test]
async fn owner_reads_their_own_record() {
    let customers = MockCustomerRepository::with(vec![customer(1, "asha@bank.test")]);
    let usecase = GetCustomerUseCase { customers };

    let found = usecase
        .execute(&principal(1, "asha@bank.test", Role::Customer), 1)
        .await
        .unwrap();
    assert_eq!(found.email, "asha@bank.test");
}

#[tokio::test]
async fn customer_cannot_read_a_foreign_record() {
    let customers = MockCustomerRepository::with(vec![
        customer(1, "asha@bank.test"),
        customer(2, "vikram@bank.test"),
    ]);
    let usecase = GetCustomerUseCase { customers };

    let err = usecase
        .execute(&principal(1, "asha@bank.test", Role::Customer), 2)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn missing_customer_looks_like_a_foreign_one() {
    let customers = MockCustomerRepository::with(vec![customer(1, "asha@bank.test")]);
    let usecase = GetCustomerUseCase { customers };

    // A customer probing an unused id must not learn whether it exists.
    let err = usecase
        .execute(&principal(1, "asha@bank.test", Role::Customer), 999)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn staff_bypass_ownership_for_customer_records() {
    let customers = MockCustomerRepository::with(vec![customer(1, "asha@bank.test")]);
    let usecase = GetCustomerUseCase { customers };

    for role in [Role::Employee, Role::Manager] {
        let found = usecase
            .execute(&principal(50, "staff@bank.test", role), 1)
            .await
            .unwrap();
        assert_eq!(found.id, 1);
    }
}

#[tokio::test]
async fn employee_reads_only_their_own_record() {
    let employees = MockEmployeeRepository::with(vec![
        employee(10, "teller@bank.test", Role::Employee),
        employee(11, "other@bank.test", Role::Employee),
    ]);
    let usecase = GetEmployeeUseCase { employees };

    let ok = usecase
        .execute(&principal(10, "teller@bank.test", Role::Employee), 10)
        .await;
    assert!(ok.is_ok());

    let err = usecase
        .execute(&principal(10, "teller@bank.test", Role::Employee), 11)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn missing_employee_is_reported_as_not_found() {
    let employees = MockEmployeeRepository::with(vec![employee(
        10,
        "teller@bank.test",
        Role::Employee,
    )]);
    let usecase = GetEmployeeUseCase { employees };

    let err = usecase
        .execute(&principal(10, "teller@bank.test", Role::Employee), 999)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::EmployeeNotFound));
}

#[tokio::test]
async fn cross_tenant_loan_access_does_not_leak_existence() {
    let customers = MockCustomerRepository::with(vec![
        customer(1, "asha@bank.test"),
        customer(2, "vikram@bank.test"),
    ]);
    let store = MockStore::default();
    store
        .offering_repo()
        .create_with_children(2, &[new_loan(77, 2, 10_000)], &[])
        .await
        .unwrap()
        .unwrap();
    store
        .offering_repo()
        .create_with_children(1, &[], &[])
        .await
        .unwrap()
        .unwrap();

    let usecase = GetLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };

    // Loan 77 exists but belongs to customer 2. Customer 1 must see the same
    // failure as for a number that does not exist at all.
    let err = usecase
        .execute(&principal(1, "asha@bank.test", Role::Customer), 1, 77)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));

    let err = usecase
        .execute(&principal(1, "asha@bank.test", Role::Customer), 1, 404_404)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn loan_access_without_an_offering_is_unauthorized() {
    let customers = MockCustomerRepository::with(vec![customer(1, "asha@bank.test")]);
    let store = MockStore::default();

    let usecase = GetLoanUseCase {
        customers,
        offerings: store.offering_repo(),
        loans: store.loan_repo(),
    };

    let err = usecase
        .execute(&principal(1, "asha@bank.test", Role::Customer), 1, 77)
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthorized));
}

#[tokio::test]
async fn resolves_employees_before_customers() {
    // The same email cannot normally exist on both sides, but resolution
    // order is still fixed: employees win.
    let customers = MockCustomerRepository::with(vec![customer(1, "shared@bank.test")]);
    let employees = MockEmployeeRepository::with(vec![employee(
        10,
        "shared@bank.test",
        Role::Manager,
    )]);
    let usecase = ResolvePrincipalUseCase {
        customers,
        employees,
    };

    let resolved = usecase.execute("shared@bank.test", "secret").await.unwrap();
    assert_eq!(resolved.id, 10);
    assert_eq!(resolved.role, Role::Manager);
}

#[tokio::test]
async fn wrong_password_is_unauthenticated() {
    let customers = MockCustomerRepository::with(vec![customer(1, "asha@bank.test")]);
    let employees = MockEmployeeRepository::default();
    let usecase = ResolvePrincipalUseCase {
        customers,
        employees,
    };

    let err = usecase
        .execute("asha@bank.test", "wrong")
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthenticated));
}

#[tokio::test]
async fn unknown_email_is_unauthenticated() {
    let usecase = ResolvePrincipalUseCase {
        customers: MockCustomerRepository::default(),
        employees: MockEmployeeRepository::default(),
    };

    let err = usecase.execute("ghost@bank.test", "secret").await.unwrap_err();
    assert!(matches!(err, BankServiceError::Unauthenticated));
}
