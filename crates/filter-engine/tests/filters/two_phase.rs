use crate::helpers::*;
use filter_engine::{
    Bindings, CompileError, ErrorKind, FilterCompiler, Result,
    functions::FunctionCall,
};
use model::{FieldName, Filter, FilterBuilder, FilterSink, NumericEncoder, ValueType};
use query_syntax::{Expression, build::*};
use std::thread;

fn scenarios() -> Vec<Expression> {
    vec![
        is_in(attr("d.a"), array(vec![string("1"), string("2"), string("3")])),
        is_in(attr("d.a.b.c.e.f"), range(number(4.0), number(5.0))),
        and(vec![gt(attr("d.a.b.c"), number(15.0)), lt(attr("d.a.b.c"), number(40.0))]),
        or(vec![ge(attr("d.a.b.c"), number(15.0)), lt(attr("d.a.b.c"), number(40.0))]),
        number(0.0),
        number(1.0),
        reference("d"),
        call(
            "ir::phrase",
            vec![attr("d.obj.name"), string("quick"), number(5.0), string("brown")],
        ),
        is_in(attr("d.a"), array(vec![])),
        not_in(attr("d.a"), array(vec![])),
        is_in(attr("d.a"), range(range(number(1.0), number(4.0)), number(5.0))),
        call("ir::starts_with", vec![attr("d.name"), string("abc"), string("1")]),
    ]
}

#[test]
fn test_validate_and_build_agree() {
    let compiler = compiler();
    for expr in scenarios() {
        let validated = compiler.validate(&expr);
        let mut builder = FilterBuilder::new();
        let built = compiler.compile(Some(&mut builder), &expr);

        assert_eq!(validated.is_ok(), built.is_ok(), "{:?}", expr);
        if built.is_ok() {
            assert!(builder.finish().is_ok());
        } else {
            assert!(builder.is_untouched());
        }
    }
}

#[test]
fn test_numeric_encoding_is_deterministic() {
    let encoder = NumericEncoder::default();
    assert_eq!(encoder.encode(15.0), NumericEncoder::default().encode(15.0));

    let expr = and(vec![gt(attr("d.a"), number(15.0)), lt(attr("d.a"), number(40.0))]);
    let first = compiler().build(&expr).unwrap();
    let second = compiler().build(&expr).unwrap();
    assert_eq!(first, second);
}

// Scenario: several threads compile the same tree with one shared compiler.
// Expected Outcome: every thread gets the same filter.
#[test]
fn test_concurrent_compilation_of_one_tree() {
    let compiler = FilterCompiler::new(Bindings::new("d"));
    let expr = or(vec![
        is_in(attr("d.a"), array(vec![string("1"), number(2.0)])),
        and(vec![ge(attr("d.b"), number(1.0)), le(attr("d.b"), number(9.0))]),
    ]);
    let expected = compiler.build(&expr).unwrap();

    let results: Vec<Filter> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| compiler.build(&expr).unwrap()))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert!(results.iter().all(|filter| *filter == expected));
}

/// Emits a leaf, then rejects the call.
fn emit_then_fail(
    _compiler: &FilterCompiler,
    sink: &mut dyn FilterSink,
    call: &FunctionCall<'_>,
) -> Result<()> {
    sink.begin_or();
    sink.add_term(FieldName::mangled("a", ValueType::String), "1".into());
    Err(CompileError::unsupported("rejected after emitting", call.span))
}

// Scenario: a registered function writes to its sink before failing.
// Expected Outcome: the caller's sink never sees those calls.
#[test]
fn test_failing_custom_function_leaves_sink_untouched() {
    let mut compiler = compiler();
    compiler.functions_mut().register("custom::partial", emit_then_fail);
    let expr = or(vec![
        eq(attr("d.b"), string("1")),
        call("custom::partial", vec![attr("d.a")]),
    ]);

    let mut builder = FilterBuilder::new();
    let err = compiler.compile(Some(&mut builder), &expr).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedExpression);
    assert!(builder.is_untouched());
}
