//! Two-phase account lifecycle: register, then complete the profile.

use corebank::error::BankServiceError;
use corebank::usecase::customer::{
    CompleteCustomerProfileInput, CompleteCustomerProfileUseCase, RegisterCustomerInput,
    RegisterCustomerUseCase, UpdateCustomerInput, UpdateCustomerUseCase,
};
use corebank::usecase::employee::{RegisterEmployeeInput, RegisterEmployeeUseCase};
use corebank_auth_types::principal::Role;

use crate::helpers::{
    MockCustomerRepository, MockEmployeeRepository, customer_profile, principal,
};

fn register_input(email: &str) -> RegisterCustomerInput {
    RegisterCustomerInput {
        email: email.to_owned(),
        password: "secret".to_owned(),
    }
}

#[tokio::test]
async fn registration_creates_a_bare_account() {
    let customers = MockCustomerRepository::default();
    let usecase = RegisterCustomerUseCase {
        customers: customers.clone(),
        employees: MockEmployeeRepository::default(),
    };

    let id = usecase.execute(register_input("asha@bank.test")).await.unwrap();
    assert!(id > 0);

    let get = corebank::usecase::customer::GetCustomerUseCase { customers };
    let found = get
        .execute(&principal(id, "asha@bank.test", Role::Customer), id)
        .await
        .unwrap();
    assert!(!found.profile_complete());
    assert_eq!(found.role, Role::Customer);
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let usecase = RegisterCustomerUseCase {
        customers: MockCustomerRepository::default(),
        employees: MockEmployeeRepository::default(),
    };

    usecase.execute(register_input("asha@bank.test")).await.unwrap();
    let err = usecase
        .execute(register_input("asha@bank.test"))
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::EmailAlreadyRegistered));
}

#[tokio::test]
async fn email_space_is_shared_across_account_kinds() {
    let customers = MockCustomerRepository::default();
    let employees = MockEmployeeRepository::default();

    let register_customer = RegisterCustomerUseCase {
        customers: customers.clone(),
        employees: employees.clone(),
    };
    register_customer
        .execute(register_input("shared@bank.test"))
        .await
        .unwrap();

    let register_employee = RegisterEmployeeUseCase {
        employees,
        customers,
    };
    let err = register_employee
        .execute(RegisterEmployeeInput {
            email: "shared@bank.test".to_owned(),
            password: "secret".to_owned(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::EmailAlreadyRegistered));
}

#[tokio::test]
async fn malformed_email_is_rejected_before_any_lookup() {
    let usecase = RegisterCustomerUseCase {
        customers: MockCustomerRepository::default(),
        employees: MockEmployeeRepository::default(),
    };

    for bad in ["not-an-email", "@bank.test", "asha@", "a@b@c.test"] {
        let err = usecase.execute(register_input(bad)).await.unwrap_err();
        assert!(matches!(err, BankServiceError::InvalidEmail), "{bad}");
    }
}

#[tokio::test]
async fn profile_completion_is_one_shot() {
    let customers = MockCustomerRepository::default();
    let register = RegisterCustomerUseCase {
        customers: customers.clone(),
        employees: MockEmployeeRepository::default(),
    };
    let id = register.execute(register_input("asha@bank.test")).await.unwrap();

    let complete = CompleteCustomerProfileUseCase {
        customers: customers.clone(),
    };
    let me = principal(id, "asha@bank.test", Role::Customer);

    complete
        .execute(
            &me,
            CompleteCustomerProfileInput {
                id,
                profile: customer_profile(),
            },
        )
        .await
        .unwrap();

    let err = complete
        .execute(
            &me,
            CompleteCustomerProfileInput {
                id,
                profile: customer_profile(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::CustomerAlreadyAdded));
}

#[tokio::test]
async fn incomplete_profile_payload_is_rejected() {
    let customers = MockCustomerRepository::default();
    let register = RegisterCustomerUseCase {
        customers: customers.clone(),
        employees: MockEmployeeRepository::default(),
    };
    let id = register.execute(register_input("asha@bank.test")).await.unwrap();

    let complete = CompleteCustomerProfileUseCase { customers };
    let mut profile = customer_profile();
    profile.name.clear();

    let err = complete
        .execute(
            &principal(id, "asha@bank.test", Role::Customer),
            CompleteCustomerProfileInput { id, profile },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::ValidationFailed));
}

#[tokio::test]
async fn update_rejects_path_body_id_mismatch_first() {
    // The mismatch must win even when the caller would not own the body id,
    // so the check runs before any ownership decision.
    let usecase = UpdateCustomerUseCase {
        customers: MockCustomerRepository::default(),
    };

    let err = usecase
        .execute(
            &principal(1, "asha@bank.test", Role::Customer),
            1,
            UpdateCustomerInput {
                id: 2,
                profile: customer_profile(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, BankServiceError::InconsistentDetails));
}

#[tokio::test]
async fn update_preserves_stored_credentials() {
    let customers = MockCustomerRepository::default();
    let register = RegisterCustomerUseCase {
        customers: customers.clone(),
        employees: MockEmployeeRepository::default(),
    };
    let id = register.execute(register_input("asha@bank.test")).await.unwrap();

    let update = UpdateCustomerUseCase {
        customers: customers.clone(),
    };
    update
        .execute(
            &principal(id, "asha@bank.test", Role::Customer),
            id,
            UpdateCustomerInput {
                id,
                profile: customer_profile(),
            },
        )
        .await
        .unwrap();

    let get = corebank::usecase::customer::GetCustomerUseCase { customers };
    let found = get
        .execute(&principal(id, "asha@bank.test", Role::Customer), id)
        .await
        .unwrap();
    assert_eq!(found.email, "asha@bank.test");
    assert_eq!(found.password, "secret");
    assert_eq!(found.role, Role::Customer);
}
