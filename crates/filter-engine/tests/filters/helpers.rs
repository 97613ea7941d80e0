#![allow(dead_code)]

use filter_engine::{Bindings, ErrorKind, FilterCompiler};
use model::{Bound, Bounds, FieldName, Filter, FilterBuilder, NumericEncoder, Term, ValueType};
use query_syntax::Expression;

/// Compiler for `FOR d IN ... FOR k IN ...`: both `d` and `k` may root paths.
pub fn compiler() -> FilterCompiler {
    FilterCompiler::new(Bindings::new("d").with_variable("k"))
}

/// Validates, then builds, and checks both agree with `expected`.
pub fn assert_filter_success(expr: &Expression, expected: Filter) {
    let compiler = compiler();
    compiler
        .validate(expr)
        .unwrap_or_else(|err| panic!("validation failed for {:?}: {}", expr, err));

    let mut builder = FilterBuilder::new();
    compiler
        .compile(Some(&mut builder), expr)
        .unwrap_or_else(|err| panic!("compilation failed for {:?}: {}", expr, err));
    assert_eq!(builder.finish().unwrap(), expected);
}

/// Checks that both passes fail with the same kind and the sink stays empty.
pub fn assert_filter_fail(expr: &Expression) -> ErrorKind {
    let compiler = compiler();
    let validation = compiler
        .validate(expr)
        .expect_err(&format!("validation unexpectedly passed for {:?}", expr));

    let mut builder = FilterBuilder::new();
    let build = compiler
        .compile(Some(&mut builder), expr)
        .expect_err(&format!("build unexpectedly passed for {:?}", expr));

    assert_eq!(validation, build);
    assert!(builder.is_untouched(), "sink was touched for {:?}", expr);
    validation.kind()
}

pub fn string_term(path: &str, value: &str) -> Filter {
    Filter::term(FieldName::mangled(path, ValueType::String), value)
}

pub fn bool_term(path: &str, value: bool) -> Filter {
    let byte: u8 = if value { 0xFF } else { 0x00 };
    Filter::term(FieldName::mangled(path, ValueType::Bool), vec![byte])
}

pub fn null_term(path: &str) -> Filter {
    Filter::term(FieldName::mangled(path, ValueType::Null), Term::default())
}

pub fn numeric_term(path: &str, value: f64) -> Filter {
    Filter::term(
        FieldName::mangled(path, ValueType::Number),
        model::numeric::leading_term(value),
    )
}

pub fn graded(value: f64, inclusive: bool) -> Bound<Vec<Term>> {
    Bound::new(NumericEncoder::default().encode(value), inclusive)
}

pub fn graded_range(
    path: &str,
    min: Option<Bound<Vec<Term>>>,
    max: Option<Bound<Vec<Term>>>,
) -> Filter {
    Filter::GradedRange {
        field: FieldName::mangled(path, ValueType::Number),
        bounds: Bounds { min, max },
    }
}

pub fn term_bound(term: impl Into<Term>, inclusive: bool) -> Bound<Term> {
    Bound::new(term.into(), inclusive)
}

pub fn term_range(
    path: &str,
    value_type: ValueType,
    min: Option<Bound<Term>>,
    max: Option<Bound<Term>>,
) -> Filter {
    Filter::Range {
        field: FieldName::mangled(path, value_type),
        bounds: Bounds { min, max },
    }
}
