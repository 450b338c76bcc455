use super::{ValidationError, Validator};

use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::models::{Category, CategoryLabels};
use crate::types::Monetary;

fn create_validator() -> Validator {
    Validator::new(CategoryLabels::english())
}

#[test]
fn test_valid_record_is_accepted_with_parsed_values() -> Result<()> {
    let mut validator = create_validator();

    let transaction = validator.validate("1", "Credit", "100.50")?;

    assert_eq!(transaction.id(), 1);
    assert_eq!(transaction.category(), Category::Credit);
    assert_eq!(transaction.amount(), Monetary::from_str("100.50")?);
    assert_eq!(validator.seen(), 1);

    Ok(())
}

#[test]
fn test_every_amount_shape_in_the_grammar_is_accepted_without_precision_loss() -> Result<()> {
    let mut validator = create_validator();
    let test_cases = vec![("0", "0.00"), ("75", "75.00"), ("75.5", "75.50"), ("75.05", "75.05"), ("0.01", "0.01")];

    for (id, (raw_amount, expected)) in test_cases.into_iter().enumerate() {
        let transaction = validator.validate(&(id + 1).to_string(), "Debit", raw_amount)?;

        assert_eq!(transaction.amount().to_string(), expected);
    }

    Ok(())
}

#[test]
fn test_invalid_ids_are_rejected_without_touching_state() {
    let mut validator = create_validator();

    for raw_id in ["", "abc", "0", "-1", "1.5", " 1", "1 ", "99999999999999999999"] {
        let result = validator.validate(raw_id, "Credit", "10.00");

        assert_eq!(result, Err(ValidationError::invalid_id(raw_id)));
    }

    assert_eq!(validator.seen(), 0);
}

#[test]
fn test_repeated_id_is_rejected_regardless_of_other_fields() -> Result<()> {
    let mut validator = create_validator();
    validator.validate("7", "Credit", "10.00")?;

    assert_eq!(validator.validate("7", "Credit", "10.00"), Err(ValidationError::duplicate_id(7)));
    assert_eq!(validator.validate("7", "Debit", "99.99"), Err(ValidationError::duplicate_id(7)));
    assert_eq!(validator.validate("007", "Debit", "1"), Err(ValidationError::duplicate_id(7)));
    assert_eq!(validator.validate("7", "Bogus", "abc"), Err(ValidationError::duplicate_id(7)));
    assert_eq!(validator.seen(), 1);

    Ok(())
}

#[test]
fn test_rejected_record_does_not_reserve_its_id() -> Result<()> {
    let mut validator = create_validator();

    assert!(validator.validate("3", "Bogus", "5.00").is_err());
    assert!(validator.validate("3", "Credit", "abc").is_err());

    let transaction = validator.validate("3", "Credit", "5.00")?;

    assert_eq!(transaction.id(), 3);

    Ok(())
}

#[test]
fn test_unknown_category_is_rejected() {
    let mut validator = create_validator();

    for raw_category in ["Bogus", "credit", "DEBIT", "", " Credit", "Crédito"] {
        let result = validator.validate("1", raw_category, "5.00");

        assert_eq!(result, Err(ValidationError::invalid_category(raw_category)));
    }

    assert_eq!(validator.seen(), 0);
}

#[test]
fn test_category_is_checked_before_amount() {
    let mut validator = create_validator();

    assert_eq!(
        validator.validate("1", "Bogus", "abc"),
        Err(ValidationError::invalid_category("Bogus"))
    );
}

#[test]
fn test_id_is_checked_before_everything_else() {
    let mut validator = create_validator();

    assert_eq!(
        validator.validate("x", "Bogus", "abc"),
        Err(ValidationError::invalid_id("x"))
    );
}

#[test]
fn test_malformed_amounts_are_rejected_as_format_errors() {
    let mut validator = create_validator();

    for raw_amount in ["", "abc", "1.234", "-5.00", "+5", "1e3", "1,000", " 5", "5 ", ".50", "5."] {
        let result = validator.validate("1", "Credit", raw_amount);

        assert_eq!(result, Err(ValidationError::invalid_amount_format(raw_amount)));
    }

    assert_eq!(validator.seen(), 0);
}

#[test]
fn test_unrepresentable_amount_is_rejected_as_value_error() {
    let mut validator = create_validator();
    let raw_amount = "1".repeat(40);

    assert_eq!(
        validator.validate("1", "Credit", &raw_amount),
        Err(ValidationError::invalid_amount_value(&raw_amount))
    );
}

#[test]
fn test_amount_above_the_per_record_maximum_is_rejected_as_value_error() -> Result<()> {
    let mut validator = create_validator();

    assert_eq!(
        validator.validate("1", "Credit", "1000000000000000.00"),
        Err(ValidationError::invalid_amount_value("1000000000000000.00"))
    );
    assert_eq!(validator.seen(), 0);
    assert_eq!(validator.validate("1", "Credit", "999999999999999.99")?.amount().to_string(), "999999999999999.99");

    Ok(())
}

#[test]
fn test_rejection_messages_name_the_rule_and_value() -> Result<()> {
    let mut validator = create_validator();
    validator.validate("1", "Credit", "1")?;

    let messages: Vec<String> = [
        validator.validate("zero", "Credit", "1"),
        validator.validate("1", "Credit", "1"),
        validator.validate("2", "Bogus", "1"),
        validator.validate("2", "Credit", "1.999"),
    ]
    .into_iter()
    .map(|result| result.err().map(|error| error.to_string()).ok_or_else(|| anyhow!("expected a rejection")))
    .collect::<Result<_>>()?;

    assert_eq!(messages, vec![
        "invalid id: zero",
        "duplicate id: 1",
        "invalid category: Bogus",
        "invalid amount (format): 1.999",
    ]);
    assert_eq!(ValidationError::invalid_amount_value("9").to_string(), "invalid amount (value): 9");

    Ok(())
}

#[test]
fn test_validators_do_not_share_state_between_runs() -> Result<()> {
    let mut first_run = create_validator();
    let mut second_run = create_validator();

    first_run.validate("1", "Credit", "1.00")?;

    assert!(second_run.validate("1", "Credit", "1.00").is_ok());

    Ok(())
}

#[test]
fn test_spanish_labels_drive_category_matching() -> Result<()> {
    let mut validator = Validator::new(CategoryLabels::spanish());

    assert_eq!(validator.validate("1", "Débito", "2.50")?.category(), Category::Debit);
    assert_eq!(validator.validate("2", "Debit", "2.50"), Err(ValidationError::invalid_category("Debit")));

    Ok(())
}
