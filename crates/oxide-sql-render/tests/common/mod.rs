#![allow(dead_code)]

use oxide_sql_render::ast::{ArithOp, Builtin, Comparator, Expr, LogicalOp};
use oxide_sql_render::dialect::Dialect;
use oxide_sql_render::render::{render_with, ParamStyle, RenderSettings};
use oxide_sql_render::SqlValue;

/// Installs a fmt subscriber so `RUST_LOG`-style output shows up with
/// `--nocapture`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Renders with every value inlined, ready to run as-is.
pub fn inline_sql(expr: &Expr, dialect: Dialect) -> String {
    let settings = RenderSettings::default().with_param_style(ParamStyle::Inline);
    render_with(expr, dialect, &settings)
        .unwrap_or_else(|e| panic!("Failed to render {expr:?}: {e}"))
        .sql()
        .to_string()
}

/// Result of evaluating an expression with [`eval`].
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Bytes(Vec<u8>),
}

impl Val {
    fn int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Null => None,
            other => panic!("Expected integer, got {other:?}"),
        }
    }

    fn truth(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Null => None,
            other => panic!("Expected boolean, got {other:?}"),
        }
    }
}

/// Evaluates a tree made of values and primitive nodes, with SQL semantics
/// for `NULL` and 1-based string positions. Columns are not supported.
pub fn eval(expr: &Expr) -> Val {
    match expr {
        Expr::Value(v) => match v.value() {
            SqlValue::Null => Val::Null,
            SqlValue::Bool(b) => Val::Bool(*b),
            SqlValue::Int(n) => Val::Int(*n),
            SqlValue::Text(s) => Val::Text(s.clone()),
            SqlValue::Blob(b) => Val::Bytes(b.clone()),
            SqlValue::Float(f) => panic!("Floats are not supported: {f}"),
        },
        Expr::Arithmetic(a) => match (eval(&a.left).int(), eval(&a.right).int()) {
            (Some(l), Some(r)) => Val::Int(match a.op {
                ArithOp::Add => l + r,
                ArithOp::Sub => l - r,
            }),
            _ => Val::Null,
        },
        Expr::Compare(c) => compare(&eval(&c.left), c.op, &eval(&c.right)),
        Expr::Logical(l) => {
            let (left, right) = (eval(&l.left).truth(), eval(&l.right).truth());
            match l.op {
                LogicalOp::And => match (left, right) {
                    (Some(false), _) | (_, Some(false)) => Val::Bool(false),
                    (Some(true), Some(true)) => Val::Bool(true),
                    _ => Val::Null,
                },
                LogicalOp::Or => match (left, right) {
                    (Some(true), _) | (_, Some(true)) => Val::Bool(true),
                    (Some(false), Some(false)) => Val::Bool(false),
                    _ => Val::Null,
                },
            }
        }
        Expr::Not(inner) => eval(inner).truth().map_or(Val::Null, |b| Val::Bool(!b)),
        Expr::Function(f) => {
            let args: Vec<Val> = f.args().iter().map(eval).collect();
            if args.contains(&Val::Null) {
                return Val::Null;
            }
            function(f.builtin(), &args)
        }
        other => panic!("Cannot evaluate {other:?}"),
    }
}

fn compare(left: &Val, op: Comparator, right: &Val) -> Val {
    let ordering = match (left, right) {
        (Val::Null, _) | (_, Val::Null) => return Val::Null,
        (Val::Int(l), Val::Int(r)) => l.cmp(r),
        (Val::Text(l), Val::Text(r)) => l.cmp(r),
        (Val::Bytes(l), Val::Bytes(r)) => l.cmp(r),
        (Val::Bool(l), Val::Bool(r)) => l.cmp(r),
        (l, r) => panic!("Cannot compare {l:?} with {r:?}"),
    };
    Val::Bool(match op {
        Comparator::Eq => ordering.is_eq(),
        Comparator::Ne => ordering.is_ne(),
        Comparator::Gt => ordering.is_gt(),
        Comparator::Ge => ordering.is_ge(),
        Comparator::Lt => ordering.is_lt(),
        Comparator::Le => ordering.is_le(),
    })
}

/// A string as a sequence of units: characters for text, bytes for binary.
#[derive(Clone)]
enum Units {
    Chars(Vec<char>),
    Bytes(Vec<u8>),
}

impl Units {
    fn of(val: &Val) -> Self {
        match val {
            Val::Text(s) => Self::Chars(s.chars().collect()),
            Val::Bytes(b) => Self::Bytes(b.clone()),
            other => panic!("Expected a string, got {other:?}"),
        }
    }

    fn len(&self) -> i64 {
        let len = match self {
            Self::Chars(c) => c.len(),
            Self::Bytes(b) => b.len(),
        };
        i64::try_from(len).unwrap()
    }

    /// Units at the 1-based positions `[from, to)`, clipped to the string.
    fn slice(&self, from: i64, to: i64) -> Val {
        let from = from.max(1);
        let to = to.min(self.len() + 1);
        let (from, to) = if to <= from {
            (0, 0)
        } else {
            (usize::try_from(from - 1).unwrap(), usize::try_from(to - 1).unwrap())
        };
        match self {
            Self::Chars(c) => Val::Text(c[from..to].iter().collect()),
            Self::Bytes(b) => Val::Bytes(b[from..to].to_vec()),
        }
    }
}

fn concat(left: &Val, right: &Val) -> Val {
    match (left, right) {
        (Val::Text(l), Val::Text(r)) => Val::Text(format!("{l}{r}")),
        (Val::Bytes(l), Val::Bytes(r)) => Val::Bytes([l.as_slice(), r.as_slice()].concat()),
        (l, r) => panic!("Cannot concatenate {l:?} with {r:?}"),
    }
}

fn function(builtin: Builtin, args: &[Val]) -> Val {
    match (builtin, args) {
        (Builtin::CharLength | Builtin::OctetLength, [s]) => Val::Int(Units::of(s).len()),
        (Builtin::Substring, [s, start]) => {
            let units = Units::of(s);
            units.slice(start.int().unwrap(), units.len() + 1)
        }
        (Builtin::Substring, [s, start, len]) => {
            let start = start.int().unwrap();
            Units::of(s).slice(start, start + len.int().unwrap())
        }
        (Builtin::Concat | Builtin::BinaryConcat, [l, r]) => concat(l, r),
        // MySQL: positions outside the string leave it unchanged
        (Builtin::Insert, [s, start, len, replacement]) => {
            let units = Units::of(s);
            let start = start.int().unwrap();
            if start < 1 || start > units.len() {
                return s.clone();
            }
            let head = units.slice(1, start);
            let tail = units.slice(start + len.int().unwrap(), units.len() + 1);
            concat(&concat(&head, replacement), &tail)
        }
        (builtin, args) => panic!("Cannot evaluate {builtin:?} with {args:?}"),
    }
}

/// Replaces `length` characters of `source` starting at the 1-based `start`.
pub fn splice(source: &str, replacement: &str, start: usize, length: usize) -> String {
    let head: String = source.chars().take(start - 1).collect();
    let tail: String = source.chars().skip(start - 1 + length).collect();
    format!("{head}{replacement}{tail}")
}
