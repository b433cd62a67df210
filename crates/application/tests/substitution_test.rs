//! Integration tests for template substitution
//!
//! These tests drive `substitute` through the public API with the same
//! templates a caller would write, including every escape edge case.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use stencil_application::substitution::{Substitutor, referenced_variables, substitute};
use stencil_domain::{SubstitutionError, VariableMap};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

fn variables(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

fn bob() -> HashMap<String, String> {
    variables(&[("name", "Bob")])
}

fn render(vars: &HashMap<String, String>, template: &str) -> String {
    init_tracing();
    substitute(vars, template).expect("substitution should succeed")
}

#[test]
fn test_no_substitutions() {
    let before = "test string with no substitutions";
    assert_eq!(render(&HashMap::new(), before), before);
}

#[test]
fn test_one_substitution() {
    assert_eq!(render(&bob(), "${name}"), "Bob");
}

#[test]
fn test_two_substitutions_in_row() {
    let vars = variables(&[("name", "Bob"), ("num", "123")]);
    assert_eq!(render(&vars, "${name}${num}"), "Bob123");
}

#[test]
fn test_two_substitutions_in_row_with_text() {
    let vars = variables(&[("name", "Bob"), ("num", "123")]);
    assert_eq!(
        render(&vars, "Your id is ${name}${num}. Thank you."),
        "Your id is Bob123. Thank you."
    );
}

#[test]
fn test_one_substitution_with_text() {
    assert_eq!(
        render(&bob(), "Hi ${name}. How are you?"),
        "Hi Bob. How are you?"
    );
}

#[test]
fn test_two_substitutions_with_text() {
    let vars = variables(&[("name", "Bob"), ("timeOfDay", "evening")]);
    assert_eq!(
        render(&vars, "Hi ${name}. How are you this ${timeOfDay}?"),
        "Hi Bob. How are you this evening?"
    );
}

#[test]
fn test_starts_and_ends_with_substitution() {
    let vars = variables(&[("name", "Bob"), ("timeOfDay", "evening")]);
    assert_eq!(
        render(&vars, "${name}, how are you this ${timeOfDay}"),
        "Bob, how are you this evening"
    );
}

#[test]
fn test_dollar_sign_without_brace_is_literal() {
    assert_eq!(render(&bob(), "Hi ${name}. Send $5"), "Hi Bob. Send $5");
}

#[test]
fn test_ends_with_dollar_sign() {
    assert_eq!(render(&bob(), "Hi ${name}. Send $"), "Hi Bob. Send $");
}

#[test]
fn test_dollar_before_start_sequence() {
    assert_eq!(render(&bob(), "$${name}"), "$Bob");
}

#[test]
fn test_unterminated_substitution() {
    init_tracing();
    let err = substitute(&bob(), "Hi ${name. Send $5.").unwrap_err();
    assert_eq!(
        err,
        SubstitutionError::UnterminatedSubstitution {
            template: "Hi ${name. Send $5.".to_string()
        }
    );
    assert!(err.to_string().starts_with("invalid template provided"));
}

#[test]
fn test_undefined_variable() {
    init_tracing();
    let err = substitute(&bob(), "Hi ${names}. Send $5.").unwrap_err();
    assert_eq!(err.variable_name(), Some("names"));
    assert!(
        err.to_string()
            .starts_with("template contains invalid variable: names")
    );
}

#[test]
fn test_start_sequence_escaped() {
    assert_eq!(render(&bob(), "Hi @${Bob. Send 5."), "Hi ${Bob. Send 5.");
}

#[test]
fn test_escaped_start_then_substitution() {
    let vars = variables(&[("day", "Monday")]);
    assert_eq!(
        render(&vars, "A variable starts with @${ as of ${day}."),
        "A variable starts with ${ as of Monday."
    );
}

#[test]
fn test_starts_with_escape_character() {
    assert_eq!(render(&bob(), "@Hi ${name}"), "@Hi Bob");
}

#[test]
fn test_ends_with_escape_character() {
    assert_eq!(render(&bob(), "Hi ${name}@"), "Hi Bob@");
}

#[test]
fn test_starts_and_ends_with_escape_character() {
    assert_eq!(render(&bob(), "@Hi ${name}@"), "@Hi Bob@");
}

#[test]
fn test_escaped_escape_char_collapses() {
    assert_eq!(render(&bob(), "Hi ${name}@@"), "Hi Bob@");
}

#[test]
fn test_literal_escape_char_before_substitution() {
    let vars = variables(&[("name", "Bob"), ("emailAccount", "unittesters.com")]);
    assert_eq!(
        render(&vars, "Hello ${name}@@${emailAccount}"),
        "Hello Bob@unittesters.com"
    );
}

#[test]
fn test_ends_with_escape_char_and_start_char() {
    assert_eq!(render(&bob(), "Hello ${name}@$"), "Hello Bob@$");
}

#[test]
fn test_escaped_escape_char_and_escaped_start_sequence() {
    assert_eq!(render(&bob(), "Hello @@@${${name}"), "Hello @${Bob");
}

#[test]
fn test_escaped_start_sequence_and_escaped_escape_char() {
    assert_eq!(render(&bob(), "Hello @${@@${name}"), "Hello ${@Bob");
}

#[test]
fn test_escape_only_template_is_unchanged() {
    assert_eq!(render(&HashMap::new(), "@@"), "@@");
    assert_eq!(render(&HashMap::new(), "user@@example.com"), "user@@example.com");
}

#[test]
fn test_plain_text_is_idempotent() {
    let template = "nothing to see here, costs $5 @ noon";
    let once = render(&HashMap::new(), template);
    let twice = render(&HashMap::new(), &once);
    assert_eq!(once, template);
    assert_eq!(twice, once);
}

#[test]
fn test_name_with_open_brace() {
    let vars = variables(&[("a{b", "x")]);
    assert_eq!(render(&vars, "${a{b}c}"), "xc}");
}

#[test]
fn test_case_sensitive_lookup() {
    init_tracing();
    let err = substitute(&bob(), "${Name}").unwrap_err();
    assert_eq!(err.variable_name(), Some("Name"));
}

#[test]
fn test_multibyte_values_and_text() {
    let vars = variables(&[("greeting", "¡Hola!"), ("who", "Zoë")]);
    assert_eq!(render(&vars, "${greeting} ${who} → ✓"), "¡Hola! Zoë → ✓");
}

#[test]
fn test_variable_map_source() {
    init_tracing();
    let vars: VariableMap = [("name", "Bob"), ("num", "123")].into_iter().collect();
    assert_eq!(substitute(&vars, "${name}-${num}").unwrap(), "Bob-123");
}

#[test]
fn test_referenced_variables() {
    assert_eq!(
        referenced_variables("Hello ${name}@@${emailAccount} @${skip}").unwrap(),
        vec!["name", "emailAccount"]
    );
}

#[test]
fn test_shared_substitutor_across_threads() {
    init_tracing();
    let substitutor = Substitutor::new(variables(&[("name", "Bob"), ("num", "123")]));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let substitutor = &substitutor;
                scope.spawn(move || substitutor.substitute(&format!("${{name}}#{i}-${{num}}")))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.join().expect("thread panicked").unwrap();
            assert_eq!(result, format!("Bob#{i}-123"));
        }
    });
}
