use std::cmp::Ordering;
use std::fmt;

use uuid::Uuid;

/// A column reachable from the member/team join
///
/// Every field is qualified by the alias used in the joined query
/// (`m` for members, `t` for teams).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MemberId,
    Username,
    Age,
    TeamId,
    TeamName,
}

impl Field {
    /// Returns the qualified SQL column for this field
    pub fn column(self) -> &'static str {
        match self {
            Field::MemberId => "m.id",
            Field::Username => "m.username",
            Field::Age => "m.age",
            Field::TeamId => "t.id",
            Field::TeamName => "t.name",
        }
    }

    /// `field = value`
    pub fn eq(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Eq, value)
    }

    /// `field >= value`
    pub fn goe(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Goe, value)
    }

    /// `field <= value`
    pub fn loe(self, value: impl Into<Value>) -> Predicate {
        Predicate::compare(self, CompareOp::Loe, value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Goe,
    Loe,
}

impl CompareOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Goe => ">=",
            CompareOp::Loe => "<=",
        }
    }

    fn matches(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::Goe => ordering != Ordering::Less,
            CompareOp::Loe => ordering != Ordering::Greater,
        }
    }
}

/// A literal operand carried by a comparison
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Int(i32),
    Uuid(Uuid),
}

impl Value {
    /// Orders two values of the same kind; mixed kinds are incomparable
    fn partial_cmp_same_kind(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "'{}'", text),
            Value::Int(int) => write!(f, "{}", int),
            Value::Uuid(id) => write!(f, "'{}'", id),
        }
    }
}

/// Source of column values for in-process predicate evaluation
///
/// `None` stands for SQL `NULL`, e.g. the team columns of a member
/// that has no team.
pub trait Row {
    fn value(&self, field: Field) -> Option<Value>;
}

/// Boolean condition over the member/team join
///
/// There is no "absent" variant: a criterion that is not supplied is
/// represented by `Option::<Predicate>::None` and never reaches a
/// conjunction. `And(vec![])` is the empty conjunction and matches every row.
///
/// # Example
/// ```
/// use roster_api::domain::query::Field;
///
/// let predicate = Field::Age.goe(35).and(Field::TeamName.eq("team2"));
/// assert_eq!(predicate.to_string(), "m.age >= 35 AND t.name = 'team2'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Compare {
        field: Field,
        op: CompareOp,
        value: Value,
    },
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn compare(field: Field, op: CompareOp, value: impl Into<Value>) -> Self {
        Predicate::Compare {
            field,
            op,
            value: value.into(),
        }
    }

    /// The empty conjunction
    pub fn match_all() -> Self {
        Predicate::And(Vec::new())
    }

    /// Returns true when this predicate places no constraint on rows
    pub fn is_match_all(&self) -> bool {
        match self {
            Predicate::Compare { .. } => false,
            Predicate::And(children) => children.iter().all(Predicate::is_match_all),
        }
    }

    /// Conjoins two predicates, flattening nested conjunctions
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::all([self, other])
    }

    /// Builds a flat conjunction from any number of predicates
    ///
    /// A single remaining conjunct is returned as-is rather than wrapped.
    pub fn all(predicates: impl IntoIterator<Item = Predicate>) -> Predicate {
        let mut conjuncts: Vec<Predicate> = predicates
            .into_iter()
            .flat_map(Predicate::into_conjuncts)
            .collect();

        if conjuncts.len() == 1 {
            conjuncts.remove(0)
        } else {
            Predicate::And(conjuncts)
        }
    }

    fn into_conjuncts(self) -> Vec<Predicate> {
        match self {
            Predicate::And(children) => children
                .into_iter()
                .flat_map(Predicate::into_conjuncts)
                .collect(),
            compare => vec![compare],
        }
    }

    /// Evaluates the predicate against a row
    ///
    /// A comparison against a `NULL` column is never satisfied, matching
    /// how the database treats `NULL` in a WHERE clause.
    pub fn eval<R: Row + ?Sized>(&self, row: &R) -> bool {
        match self {
            Predicate::Compare { field, op, value } => row
                .value(*field)
                .and_then(|actual| actual.partial_cmp_same_kind(value))
                .map(|ordering| op.matches(ordering))
                .unwrap_or(false),
            Predicate::And(children) => children.iter().all(|child| child.eval(row)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Compare { field, op, value } => {
                write!(f, "{} {} {}", field.column(), op.as_sql(), value)
            }
            Predicate::And(children) if children.is_empty() => write!(f, "TRUE"),
            Predicate::And(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " AND ")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}
