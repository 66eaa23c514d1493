//! Integration tests for personae-core.

use personae_core::prelude::*;

#[test]
fn mixed_roster_only_flags_short_individual_identifier() {
    let service = ValidationService::new(ValidatorRegistry::new());
    let entities = vec![
        Entity::person("A").unwrap(),
        Entity::individual("B", "333.333.333-33").unwrap(),
        Entity::individual("C", "333.333.33-33").unwrap(),
        Entity::organization("D", "99.999.999/9999-99").unwrap(),
    ];

    let outcomes: Vec<ValidationOutcome> = service
        .validate_all(&entities)
        .into_iter()
        .collect::<PersonaeResult<_>>()
        .unwrap();

    let flagged: Vec<&str> = outcomes
        .iter()
        .filter(|o| !o.is_clean())
        .map(|o| o.entity.as_str())
        .collect();
    assert_eq!(flagged, vec!["C"]);

    let validators: Vec<&str> = outcomes.iter().map(|o| o.validator).collect();
    assert_eq!(
        validators,
        vec![
            "PersonValidator",
            "IndividualValidator",
            "IndividualValidator",
            "OrganizationValidator",
        ]
    );
}

#[test]
fn demo_roster_console_listing() {
    let service = ValidationService::default();
    let listing: Vec<String> = demo_roster()
        .unwrap()
        .iter()
        .flat_map(|e| service.validate(e).unwrap().lines())
        .collect();

    assert_eq!(
        listing,
        vec![
            "A plain person-PersonValidator",
            "João-IndividualValidator",
            "José-IndividualValidator",
            "Validation messages:",
            "    IndividualValidator - identifier does not have the correct length",
            "Maria-OrganizationValidator",
        ]
    );
}

#[test]
fn partial_registry_reports_unknown_variant() {
    let registry = ValidatorRegistry::builder()
        .register(personae_core::domain::PersonValidator)
        .build()
        .unwrap();
    let service = ValidationService::new(registry);

    let err = service
        .validate(&Entity::individual("B", "333.333.333-33").unwrap())
        .unwrap_err();

    assert_eq!(
        err,
        PersonaeError::Domain(DomainError::UnknownVariant {
            variant: "individual".into()
        })
    );
}

#[test]
fn validating_twice_gives_the_same_outcome() {
    let service = ValidationService::default();
    let entity = Entity::organization("Acme", "99.999.999/9999-9").unwrap();

    let first = service.validate(&entity).unwrap();
    let second = service.validate(&entity).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.messages.len(), 1);
}
