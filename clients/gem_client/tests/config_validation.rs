#![allow(clippy::unwrap_used)]

use anchor_lang::prelude::Pubkey;
use gem_client::{constants::TOKEN_PROGRAM_ID, ClientConfig, GemClientError};

#[test]
fn json_round_trip_uses_base58() {
    let config = ClientConfig::new(Pubkey::new_unique());
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(&config.program_id.to_string()));
    assert!(json.contains("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"));
    assert_eq!(ClientConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn overrides_collaborator_programs() {
    let program_id = Pubkey::new_unique();
    let token_program = Pubkey::new_unique();
    let json = format!(
        r#"{{ "program_id": "{program_id}", "token_program_id": "{token_program}" }}"#
    );
    let config = ClientConfig::from_json_str(&json).unwrap();
    assert_eq!(config.token_program_id, token_program);
    assert_ne!(config.token_program_id, TOKEN_PROGRAM_ID);
}

#[test]
fn rejects_malformed_input() {
    for json in [
        "{}",
        r#"{ "program_id": "not-a-key" }"#,
        r#"{ "program_id": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA" }"#,
        "[",
    ] {
        assert!(
            matches!(ClientConfig::from_json_str(json), Err(GemClientError::Config(_))),
            "accepted {json}"
        );
    }
}

#[test]
fn loads_from_file() {
    let program_id = Pubkey::new_unique();
    let path = std::env::temp_dir().join(format!("gem_client_config_{program_id}.json"));
    std::fs::write(&path, format!(r#"{{ "program_id": "{program_id}" }}"#)).unwrap();

    let config = ClientConfig::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.program_id, program_id);

    assert!(matches!(
        ClientConfig::from_json_file(&path),
        Err(GemClientError::Config(_))
    ));
}
