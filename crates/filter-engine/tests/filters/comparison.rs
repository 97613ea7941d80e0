use crate::helpers::*;
use filter_engine::ErrorKind;
use model::{Filter, ValueType};
use query_syntax::{ComparisonOperator, build::*};

#[test]
fn test_equal() {
    assert_filter_success(&eq(attr("d.a"), string("1")), string_term("a", "1"));
    assert_filter_success(&eq(attr("d.a.b.c"), string("1")), string_term("a.b.c", "1"));
    assert_filter_success(&eq(attr("d.a.b.c"), boolean(true)), bool_term("a.b.c", true));
    assert_filter_success(&eq(attr("d.a.b.c"), boolean(false)), bool_term("a.b.c", false));
    assert_filter_success(&eq(attr("d.a.b.c"), null()), null_term("a.b.c"));
    assert_filter_success(&eq(attr("d.a.b.c"), number(3.0)), numeric_term("a.b.c", 3.0));
    assert_filter_success(&eq(attr("d.a.b.c"), number(3.5)), numeric_term("a.b.c", 3.5));
}

#[test]
fn test_equal_with_folded_value() {
    use query_syntax::ArithmeticOperator;

    let folded = arithmetic(number(1.0), ArithmeticOperator::Add, number(2.0));
    assert_filter_success(&eq(attr("d.a"), folded), numeric_term("a", 3.0));
    assert_filter_success(&eq(attr("d.a"), negate(number(2.0))), numeric_term("a", -2.0));
}

#[test]
fn test_not_equal() {
    assert_filter_success(
        &ne(attr("d.a"), string("1")),
        Filter::not(string_term("a", "1")),
    );
    assert_filter_success(
        &ne(attr("d.a.b.c.bool"), boolean(false)),
        Filter::not(bool_term("a.b.c.bool", false)),
    );
    assert_filter_success(
        &ne(attr("d.a.b.c.bool"), null()),
        Filter::not(null_term("a.b.c.bool")),
    );
    assert_filter_success(
        &ne(attr("d.a.b.c.numeric"), number(3.0)),
        Filter::not(numeric_term("a.b.c.numeric", 3.0)),
    );
}

#[test]
fn test_greater_or_equal() {
    assert_filter_success(
        &ge(attr("d.a"), string("1")),
        term_range("a", ValueType::String, Some(term_bound("1", true)), None),
    );
    assert_filter_success(
        &ge(attr("d.a.b.c"), boolean(true)),
        term_range("a.b.c", ValueType::Bool, Some(term_bound(vec![0xFFu8], true)), None),
    );
    assert_filter_success(
        &ge(attr("d.a.b.c.nil"), null()),
        term_range(
            "a.b.c.nil",
            ValueType::Null,
            Some(term_bound(Vec::<u8>::new(), true)),
            None,
        ),
    );
    assert_filter_success(
        &ge(attr("d.a.b.c.numeric"), number(13.0)),
        graded_range("a.b.c.numeric", Some(graded(13.0, true)), None),
    );
}

#[test]
fn test_greater() {
    assert_filter_success(
        &gt(attr("d.a.b.c"), string("1")),
        term_range("a.b.c", ValueType::String, Some(term_bound("1", false)), None),
    );
    assert_filter_success(
        &gt(attr("d.a.b.c.bool"), boolean(false)),
        term_range(
            "a.b.c.bool",
            ValueType::Bool,
            Some(term_bound(vec![0x00u8], false)),
            None,
        ),
    );
    assert_filter_success(
        &gt(attr("d.a.b.c.numeric"), number(13.0)),
        graded_range("a.b.c.numeric", Some(graded(13.0, false)), None),
    );
    assert_filter_success(
        &gt(attr("d.a.b.c.numeric"), number(13.5)),
        graded_range("a.b.c.numeric", Some(graded(13.5, false)), None),
    );
}

#[test]
fn test_less_or_equal() {
    assert_filter_success(
        &le(attr("d.a"), string("1")),
        term_range("a", ValueType::String, None, Some(term_bound("1", true))),
    );
    assert_filter_success(
        &le(attr("d.a.b.c.nil"), null()),
        term_range(
            "a.b.c.nil",
            ValueType::Null,
            None,
            Some(term_bound(Vec::<u8>::new(), true)),
        ),
    );
    assert_filter_success(
        &le(attr("d.a.b.c.numeric"), number(13.0)),
        graded_range("a.b.c.numeric", None, Some(graded(13.0, true))),
    );
}

#[test]
fn test_less() {
    assert_filter_success(
        &lt(attr("d.a.b.c"), string("1")),
        term_range("a.b.c", ValueType::String, None, Some(term_bound("1", false))),
    );
    assert_filter_success(
        &lt(attr("d.a.b.c"), boolean(true)),
        term_range("a.b.c", ValueType::Bool, None, Some(term_bound(vec![0xFFu8], false))),
    );
    assert_filter_success(
        &lt(attr("d.a.b.c.numeric"), number(13.0)),
        graded_range("a.b.c.numeric", None, Some(graded(13.0, false))),
    );
}

#[test]
fn test_swapped_operands() {
    assert_filter_success(&eq(string("1"), attr("d.a")), string_term("a", "1"));
    assert_filter_success(
        &lt(number(13.0), attr("d.a")),
        graded_range("a", Some(graded(13.0, false)), None),
    );
    assert_filter_success(
        &ge(string("1"), attr("d.a")),
        term_range("a", ValueType::String, None, Some(term_bound("1", true))),
    );
}

#[test]
fn test_bare_reference_comparisons_fail() {
    let operators = [
        ComparisonOperator::Equal,
        ComparisonOperator::NotEqual,
        ComparisonOperator::GreaterOrEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::LessOrEqual,
        ComparisonOperator::LessThan,
    ];
    for operator in operators {
        let expr = compare(reference("d"), operator, string("1"));
        assert_eq!(assert_filter_fail(&expr), ErrorKind::InvalidAttribute);
    }
}

#[test]
fn test_unbound_root_fails() {
    assert_eq!(
        assert_filter_fail(&eq(attr("x.a"), string("1"))),
        ErrorKind::InvalidAttribute
    );
}

#[test]
fn test_non_constant_value_fails() {
    assert_eq!(
        assert_filter_fail(&eq(attr("d.a"), attr("d.b"))),
        ErrorKind::InvalidAttribute
    );
    assert_eq!(
        assert_filter_fail(&lt(attr("d.a"), array(vec![]))),
        ErrorKind::InvalidAttribute
    );
    assert_eq!(
        assert_filter_fail(&eq(string("1"), string("1"))),
        ErrorKind::InvalidAttribute
    );
}
