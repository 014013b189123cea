//! Library integration tests.

use cmdmenu::MenuError;

#[test]
fn error_types_are_public() {
    let err = MenuError::UnknownCommand {
        signature: "db:nope".into(),
    };
    assert!(err.to_string().contains("db:nope"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> cmdmenu::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn anyhow_errors_convert() {
    let err: MenuError = anyhow::anyhow!("registry exploded").into();
    assert!(err.to_string().contains("registry exploded"));
}
