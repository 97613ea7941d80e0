use crate::helpers::*;
use filter_engine::ErrorKind;
use model::{FieldName, Filter, PhraseTerm, Term};
use query_syntax::{Expression, build::*};

fn phrase(field: &str, terms: &[(&str, usize)]) -> Filter {
    Filter::Phrase {
        field: FieldName::analyzed(field),
        terms: terms
            .iter()
            .map(|(term, offset)| PhraseTerm::new(*term, *offset))
            .collect(),
    }
}

fn prefix(field: &str, term: &str, limit: usize) -> Filter {
    Filter::Prefix {
        field: FieldName::analyzed(field),
        term: Term::from(term),
        scored_terms_limit: limit,
    }
}

fn invalid_attributes() -> Vec<Expression> {
    vec![
        reference("d"),
        string("d.name"),
        number(123.0),
        number(123.5),
        null(),
        boolean(true),
        boolean(false),
    ]
}

#[test]
fn test_phrase_single_term() {
    assert_filter_success(
        &call("ir::phrase", vec![attr("d.name"), string("quick")]),
        phrase("name", &[("quick", 0)]),
    );

    for attribute in invalid_attributes() {
        let expr = call("ir::phrase", vec![attribute, string("quick")]);
        assert_eq!(assert_filter_fail(&expr), ErrorKind::InvalidAttribute);
    }
}

#[test]
fn test_phrase_with_offset() {
    assert_filter_success(
        &call(
            "ir::phrase",
            vec![attr("d.name"), string("quick"), number(0.0), string("brown")],
        ),
        phrase("name", &[("quick", 0), ("brown", 0)]),
    );
    assert_filter_success(
        &call(
            "ir::phrase",
            vec![attr("d.obj.name"), string("quick"), number(5.0), string("brown")],
        ),
        phrase("obj.name", &[("quick", 0), ("brown", 5)]),
    );
    // fractional offsets are truncated
    assert_filter_success(
        &call(
            "ir::phrase",
            vec![attr("d.obj.name"), string("quick"), number(5.5), string("brown")],
        ),
        phrase("obj.name", &[("quick", 0), ("brown", 5)]),
    );
}

#[test]
fn test_phrase_wrong_offset() {
    let offsets = vec![string("0"), null(), boolean(true), boolean(false)];
    for offset in offsets {
        let expr = call(
            "ir::phrase",
            vec![attr("d.name"), string("quick"), offset, string("brown")],
        );
        assert_eq!(assert_filter_fail(&expr), ErrorKind::TypeMismatch);
    }

    let expr = call(
        "ir::phrase",
        vec![attr("d.name"), string("quick"), attr("d.name"), string("brown")],
    );
    assert_eq!(assert_filter_fail(&expr), ErrorKind::NotConstant);
}

#[test]
fn test_phrase_multiple_offsets() {
    let args = |brown: Expression, second_offset: Expression, jumps: Expression| {
        vec![
            attr("d.obj.properties.id.name"),
            string("quick"),
            number(3.0),
            brown,
            second_offset,
            string("fox"),
            number(0.0),
            jumps,
        ]
    };

    assert_filter_success(
        &call("ir::phrase", args(string("brown"), number(2.0), string("jumps"))),
        phrase(
            "obj.properties.id.name",
            &[("quick", 0), ("brown", 3), ("fox", 2), ("jumps", 0)],
        ),
    );

    // wrong value
    let wrong_terms = vec![
        (attr("d.brown"), ErrorKind::NotConstant),
        (number(2.0), ErrorKind::TypeMismatch),
        (number(2.5), ErrorKind::TypeMismatch),
        (null(), ErrorKind::TypeMismatch),
        (boolean(true), ErrorKind::TypeMismatch),
        (boolean(false), ErrorKind::TypeMismatch),
    ];
    for (term, kind) in wrong_terms {
        let expr = call("ir::phrase", args(term, number(2.0), string("jumps")));
        assert_eq!(assert_filter_fail(&expr), kind);
    }
    let expr = call("ir::phrase", args(string("brown"), number(2.0), reference("d")));
    assert_eq!(assert_filter_fail(&expr), ErrorKind::NotConstant);

    // wrong offset
    for offset in [string("2"), null(), boolean(true), boolean(false)] {
        let expr = call("ir::phrase", args(string("brown"), offset, string("jumps")));
        assert_eq!(assert_filter_fail(&expr), ErrorKind::TypeMismatch);
    }
}

#[test]
fn test_phrase_wrong_argument_count() {
    let expr = call("ir::phrase", vec![attr("d.name"), string("quick"), number(3.0)]);
    assert_eq!(assert_filter_fail(&expr), ErrorKind::MalformedShape);

    let expr = call("ir::phrase", vec![attr("d.name")]);
    assert_eq!(assert_filter_fail(&expr), ErrorKind::MalformedShape);
}

#[test]
fn test_starts_with() {
    assert_filter_success(
        &call("ir::starts_with", vec![attr("d.name"), string("abc")]),
        prefix("name", "abc", 128),
    );
    assert_filter_success(
        &call("ir::starts_with", vec![attr("d.obj.properties.name"), string("abc")]),
        prefix("obj.properties.name", "abc", 128),
    );
    assert_filter_success(
        &call("ir::starts_with", vec![attr("d.name"), string("abc"), number(1024.0)]),
        prefix("name", "abc", 1024),
    );
    assert_filter_success(
        &call("ir::starts_with", vec![attr("d.name"), string("abc"), number(100.5)]),
        prefix("name", "abc", 100),
    );
}

#[test]
fn test_starts_with_failures() {
    for attribute in invalid_attributes() {
        let expr = call("ir::starts_with", vec![attribute, string("abc")]);
        assert_eq!(assert_filter_fail(&expr), ErrorKind::InvalidAttribute);
    }

    for value in [number(1.0), number(1.5), boolean(true), boolean(false), null()] {
        let expr = call("ir::starts_with", vec![attr("d.name"), value]);
        assert_eq!(assert_filter_fail(&expr), ErrorKind::TypeMismatch);
    }

    for limit in [string("1024"), boolean(true), boolean(false), null()] {
        let expr = call("ir::starts_with", vec![attr("d.name"), string("abc"), limit]);
        assert_eq!(assert_filter_fail(&expr), ErrorKind::TypeMismatch);
    }
}

#[test]
fn test_function_names_are_case_insensitive() {
    assert_filter_success(
        &call("IR::STARTS_WITH", vec![attr("d.name"), string("abc")]),
        prefix("name", "abc", 128),
    );
    assert_filter_success(
        &call("Ir::Phrase", vec![attr("d.name"), string("quick")]),
        phrase("name", &[("quick", 0)]),
    );
}

#[test]
fn test_unknown_function() {
    let expr = call("ir::boost", vec![attr("d.name"), number(2.0)]);
    assert_eq!(assert_filter_fail(&expr), ErrorKind::UnsupportedExpression);
}
