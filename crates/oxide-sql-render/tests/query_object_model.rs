//! Operand access, functional update and structural equality.

mod common;

use common::inline_sql;
use oxide_sql_render::ast::{col, Comparator, DataType, Expr, Overlay, QueryPart, Row, RowCompare};
use oxide_sql_render::dialect::Dialect;
use oxide_sql_render::{BuildError, SqlValue};
use proptest::prelude::*;

fn overlay(length: Option<Expr>) -> Overlay {
    Overlay::from_operands(
        Some(Expr::column("title")),
        Some(Expr::value("XY")),
        Some(Expr::value(2)),
        length,
    )
    .unwrap()
}

fn row_compare(op: Comparator) -> RowCompare {
    Row::new(vec![Expr::column("a"), Expr::column("b")])
        .unwrap()
        .compare(op, Row::new(vec![Expr::value(1), Expr::value(2)]).unwrap())
        .unwrap()
}

/// An operand no generated tree contains, shaped to fit any position of
/// `node`.
fn foreign_operand(node: &Expr) -> Expr {
    match node {
        Expr::RowCompare(r) => Row::new(vec![Expr::column("<replaced>"); r.degree()])
            .unwrap()
            .into(),
        _ => Expr::column("<replaced>"),
    }
}

/// Checks the functional update laws for every operand position of `node`.
fn assert_update_laws(node: &Expr) {
    let snapshot = node.clone();
    for i in 0..node.arity() {
        let same = node.with_operand(i, node.operand(i).cloned()).unwrap();
        assert_eq!(&same, node, "operand {i} of {}", node.name());

        let changed = node.with_operand(i, Some(foreign_operand(node))).unwrap();
        assert_ne!(&changed, node, "operand {i} of {}", node.name());
        assert_eq!(changed.name(), node.name());
    }
    assert_eq!(node, &snapshot);
}

#[test]
fn test_arity_is_fixed_per_construct() {
    assert_eq!(overlay(None).arity(), 4);
    assert_eq!(overlay(Some(Expr::value(3))).arity(), 4);
    assert_eq!(row_compare(Comparator::Eq).arity(), 2);
}

#[test]
fn test_optional_length_operand() {
    let without = overlay(None);
    assert!(without.operand(3).is_none());
    assert_eq!(without.operands().len(), 3);

    let with = without.with_operand(3, Some(Expr::value(3))).unwrap();
    assert_eq!(with.operand(3), Some(&Expr::value(3)));
    assert!(without.operand(3).is_none());
}

#[test]
fn test_update_laws() {
    assert_update_laws(&overlay(Some(Expr::value(3))).into());
    assert_update_laws(&row_compare(Comparator::Ge).into());
    assert_update_laws(&Expr::column("a").eq(Expr::value(1)).not());
    assert_update_laws(&Expr::column("a").sub(Expr::inline(1)));
}

#[test]
fn test_row_compare_operands_are_rows() {
    let cmp = row_compare(Comparator::Lt);
    assert!(matches!(cmp.operand(0), Some(Expr::Row(r)) if r.degree() == 2));

    let replaced = cmp
        .with_operand(
            1,
            Some(Row::new(vec![Expr::value(5), Expr::value(6)]).unwrap().into()),
        )
        .unwrap();
    assert_eq!(replaced.right_fields(), &[Expr::value(5), Expr::value(6)]);
    assert_eq!(replaced.comparator(), Comparator::Lt);
}

#[test]
fn test_arity_mismatch_on_update() {
    let cmp = row_compare(Comparator::Eq);
    let three = Row::new(vec![Expr::value(1), Expr::value(2), Expr::value(3)]).unwrap();
    assert_eq!(
        cmp.with_operand(1, Some(three.into())),
        Err(BuildError::ArityMismatch { left: 2, right: 3 })
    );
}

#[test]
fn test_type_conformance_on_update() {
    let err = overlay(None)
        .with_operand(2, Some(Expr::value("two")))
        .unwrap_err();
    assert!(matches!(
        err,
        BuildError::TypeConformance {
            construct: "OVERLAY",
            operand: 2,
            ..
        }
    ));
}

#[test]
fn test_row_conformance_on_update() {
    let typed = Row::new(vec![
        Expr::Column(col("a").typed(DataType::Integer)),
        Expr::Column(col("b").typed(DataType::Text)),
    ])
    .unwrap()
    .compare(
        Comparator::Eq,
        Row::new(vec![Expr::value(1), Expr::value("x")]).unwrap(),
    )
    .unwrap();
    assert_eq!(typed.right_fields()[0].data_type(), DataType::Integer);
    assert_eq!(typed.right_fields()[1].data_type(), DataType::Text);

    let swapped = Row::new(vec![Expr::value("x"), Expr::value(1)]).unwrap();
    assert!(matches!(
        typed.with_operand(1, Some(swapped.into())),
        Err(BuildError::TypeConformance {
            construct: "ROW COMPARISON",
            operand: 1,
            ..
        })
    ));
}

#[test]
fn test_different_constructs_are_never_equal() {
    let o: Expr = overlay(None).into();
    let r: Expr = row_compare(Comparator::Eq).into();
    assert_ne!(o, r);
    assert!(overlay(None) != r);
    assert!(row_compare(Comparator::Eq) != o);
    assert_ne!(
        Expr::from(row_compare(Comparator::Eq)),
        Expr::from(row_compare(Comparator::Ne))
    );
}

#[test]
fn test_traverse_collects_bind_values() {
    let expr: Expr = overlay(Some(Expr::value(3))).into();
    let values = expr.traverse(Vec::new(), &mut |mut acc, node| {
        if let Expr::Value(v) = node {
            acc.push(v.value().clone());
        }
        acc
    });
    assert_eq!(
        values,
        vec![
            SqlValue::Text(String::from("XY")),
            SqlValue::Int(2),
            SqlValue::Int(3)
        ]
    );
}

#[test]
fn test_replace_substitutes_constants_before_rendering() {
    let expr: Expr = row_compare(Comparator::Gt).into();
    let bound = expr
        .replace(&mut |node| match node {
            Expr::Column(c) if c.name == "a" => Some(Expr::inline(10)),
            Expr::Column(c) if c.name == "b" => Some(Expr::inline(20)),
            _ => None,
        })
        .unwrap();

    assert_eq!(inline_sql(&bound, Dialect::Postgres), "(10, 20) > (1, 2)");
    assert_eq!(
        inline_sql(&bound, Dialect::Cubrid),
        "(10 >= 1 AND (10 > 1 OR (10 = 1 AND 20 > 2)))"
    );
    // the original tree is untouched
    assert_eq!(inline_sql(&expr, Dialect::Postgres), "(a, b) > (1, 2)");
}

#[test]
fn test_replace_propagates_construction_errors() {
    let expr: Expr = overlay(None).into();
    let result = expr.replace(&mut |node| match node {
        Expr::Value(v) if v.value() == &SqlValue::Int(2) => Some(Expr::value(true)),
        _ => None,
    });
    assert!(matches!(
        result,
        Err(BuildError::TypeConformance { operand: 2, .. })
    ));
}

fn arb_column() -> impl Strategy<Value = Expr> {
    "[a-z]{1,6}".prop_map(|name| Expr::column(&name))
}

fn arb_leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        arb_column(),
        any::<i64>().prop_map(Expr::value),
        "[a-z]{0,6}".prop_map(Expr::value),
    ]
}

/// Two fields that may be compared: a column against anything, or two values
/// of the same family.
fn arb_field_pair() -> impl Strategy<Value = (Expr, Expr)> {
    prop_oneof![
        (arb_column(), arb_leaf()),
        (arb_leaf(), arb_column()),
        (any::<i64>(), any::<i64>()).prop_map(|(l, r)| (Expr::value(l), Expr::value(r))),
        ("[a-z]{0,6}", "[a-z]{0,6}").prop_map(|(l, r)| (Expr::value(l), Expr::value(r))),
    ]
}

fn arb_int() -> impl Strategy<Value = Expr> {
    prop_oneof![arb_column(), any::<i64>().prop_map(Expr::value)]
}

fn arb_overlay() -> impl Strategy<Value = Expr> {
    (
        "[a-z]{0,6}",
        "[a-z]{0,6}",
        arb_int(),
        prop::option::of(arb_int()),
    )
        .prop_map(|(source, replacement, start, length)| {
            Overlay::from_operands(
                Some(Expr::value(source)),
                Some(Expr::value(replacement)),
                Some(start),
                length,
            )
            .unwrap()
            .into()
        })
}

fn arb_row_compare() -> impl Strategy<Value = Expr> {
    (
        prop::collection::vec(arb_field_pair(), 1..4),
        prop::sample::select(Comparator::ALL.to_vec()),
    )
        .prop_map(|(pairs, op)| {
            let (left, right): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
            RowCompare::new(Row::new(left).unwrap(), op, Row::new(right).unwrap())
                .unwrap()
                .into()
        })
}

proptest! {
    #[test]
    fn with_operand_identity(node in prop_oneof![arb_overlay(), arb_row_compare()]) {
        for i in 0..node.arity() {
            let same = node.with_operand(i, node.operand(i).cloned()).unwrap();
            prop_assert_eq!(&same, &node);
        }
    }

    #[test]
    fn with_operand_leaves_original_unchanged(
        node in prop_oneof![arb_overlay(), arb_row_compare()],
        index in 0usize..4,
    ) {
        prop_assume!(index < node.arity());
        let snapshot = node.clone();
        let changed = node.with_operand(index, Some(foreign_operand(&node))).unwrap();
        prop_assert_ne!(&changed, &node);
        prop_assert_eq!(&node, &snapshot);
    }

    #[test]
    fn rendering_is_deterministic(
        node in prop_oneof![arb_overlay(), arb_row_compare()],
        dialect in prop::sample::select(Dialect::ALL.to_vec()),
    ) {
        prop_assert_eq!(inline_sql(&node, dialect), inline_sql(&node, dialect));
    }
}
