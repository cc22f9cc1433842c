// SQL for the member LEFT JOIN team projection

use sqlx::{Postgres, QueryBuilder};

use crate::domain::query::{Predicate, Value};
use crate::domain::search::PageRequest;

const SELECT_MEMBER_TEAMS: &str = "\
SELECT m.id AS member_id, m.username, m.age, t.id AS team_id, t.name AS team_name \
FROM members m LEFT JOIN teams t ON m.team_id = t.id";

const COUNT_MEMBER_TEAMS: &str = "\
SELECT COUNT(*) FROM members m LEFT JOIN teams t ON m.team_id = t.id";

const PAGE_ORDER: &str = " ORDER BY m.username ASC NULLS LAST, m.id ASC";

/// First statement of the page transaction, so content and count read one snapshot
pub const PAGE_SNAPSHOT: &str = "SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY";

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: &Value) {
    match value {
        Value::Text(text) => qb.push_bind(text.clone()),
        Value::Int(int) => qb.push_bind(*int),
        Value::Uuid(id) => qb.push_bind(*id),
    };
}

/// Renders `predicate` into `qb`, binding every literal as a parameter
pub fn push_predicate(qb: &mut QueryBuilder<'_, Postgres>, predicate: &Predicate) {
    match predicate {
        Predicate::Compare { field, op, value } => {
            qb.push(field.column());
            qb.push(" ");
            qb.push(op.as_sql());
            qb.push(" ");
            push_value(qb, value);
        }
        Predicate::And(children) if children.is_empty() => {
            qb.push("TRUE");
        }
        Predicate::And(children) => {
            qb.push("(");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    qb.push(" AND ");
                }
                push_predicate(qb, child);
            }
            qb.push(")");
        }
    }
}

/// Appends ` WHERE ...` for the given conjuncts
///
/// Match-all predicates are skipped, and nothing at all is written when no
/// constraining predicate remains.
pub fn push_where(qb: &mut QueryBuilder<'_, Postgres>, predicates: &[Predicate]) {
    let mut constraining = predicates.iter().filter(|p| !p.is_match_all()).peekable();
    if constraining.peek().is_none() {
        return;
    }

    qb.push(" WHERE ");
    for (i, predicate) in constraining.enumerate() {
        if i > 0 {
            qb.push(" AND ");
        }
        push_predicate(qb, predicate);
    }
}

/// Projection filtered by the AND of `predicates`, in store order
pub fn member_teams_query(predicates: &[Predicate]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(SELECT_MEMBER_TEAMS);
    push_where(&mut qb, predicates);
    qb
}

/// One ordered page of the filtered projection
pub fn member_teams_page_query(
    predicates: &[Predicate],
    page: &PageRequest,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = member_teams_query(predicates);
    qb.push(PAGE_ORDER);
    qb.push(" LIMIT ");
    qb.push_bind(i64::from(page.limit()));
    qb.push(" OFFSET ");
    qb.push_bind(i64::from(page.offset()));
    qb
}

/// Number of rows the filtered projection would return
pub fn member_teams_count_query(predicates: &[Predicate]) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(COUNT_MEMBER_TEAMS);
    push_where(&mut qb, predicates);
    qb
}
