use std::fmt;
use std::str::FromStr;

use super::{Build, Render};
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Direction::Asc),
            "DESC" => Ok(Direction::Desc),
            _ => Err(PatternError::invalid_value(
                "direction",
                s,
                "expected ASC or DESC",
            )),
        }
    }
}

/// A finished `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    sql: String,
}

impl Query {
    pub fn as_str(&self) -> &str {
        &self.sql
    }
}

impl Render for Query {
    fn render(&self) -> String {
        self.sql.clone()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Assembles a `SELECT` statement against a single table.
///
/// Clauses are always emitted in the same order (projection, source, filter,
/// ordering, limit) whatever order the setters were called in.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table: String,
    fields: Vec<String>,
    conditions: Vec<String>,
    order_fields: Vec<(String, Direction)>,
    limit: Option<u32>,
}

impl QueryBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        QueryBuilder {
            table: table.into(),
            fields: Vec::new(),
            conditions: Vec::new(),
            order_fields: Vec::new(),
            limit: None,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Replaces the projected fields. An empty list selects `*`.
    pub fn select<I, S>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a filter predicate. Multiple predicates are joined with `and`.
    pub fn where_clause(&mut self, condition: impl Into<String>) -> &mut Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn order_by(&mut self, field: impl Into<String>, direction: Direction) -> &mut Self {
        self.order_fields.push((field.into(), direction));
        self
    }

    /// Like [`order_by`](Self::order_by) but parses the direction from text.
    pub fn order_by_token(&mut self, field: impl Into<String>, token: &str) -> Result<&mut Self> {
        let direction = token.parse::<Direction>()?;
        Ok(self.order_by(field, direction))
    }

    /// Sets the row limit. Zero clears it.
    pub fn limit(&mut self, count: u32) -> &mut Self {
        self.limit = (count > 0).then_some(count);
        self
    }

    /// Sets the row limit from a signed value, rejecting negatives and values
    /// that do not fit in a `u32`.
    pub fn try_limit(&mut self, count: i64) -> Result<&mut Self> {
        if count < 0 {
            return Err(PatternError::invalid_value(
                "limit",
                count.to_string(),
                "must not be negative",
            ));
        }
        let count = u32::try_from(count).map_err(|_| {
            PatternError::invalid_value("limit", count.to_string(), "exceeds u32::MAX")
        })?;
        Ok(self.limit(count))
    }

    pub fn execute(&self) -> Result<String> {
        self.build().map(|query| query.sql)
    }

    fn render_sql(&self) -> String {
        let projection = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields.join(", ")
        };

        let mut sql = format!("Select {} from {}", projection, self.table);

        if !self.conditions.is_empty() {
            sql.push_str(" where ");
            sql.push_str(&self.conditions.join(" and "));
        }

        if !self.order_fields.is_empty() {
            let ordering: Vec<String> = self
                .order_fields
                .iter()
                .map(|(field, direction)| format!("{field} {direction}"))
                .collect();
            sql.push_str(" order by ");
            sql.push_str(&ordering.join(", "));
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" limit {limit}"));
        }

        sql
    }
}

impl Build for QueryBuilder {
    type Output = Query;

    fn build(&self) -> Result<Query> {
        if self.table.trim().is_empty() {
            return Err(PatternError::missing_field("table"));
        }
        Ok(Query {
            sql: self.render_sql(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_query() {
        let query = QueryBuilder::new("users")
            .select(["id", "name", "email"])
            .where_clause("age > 18")
            .where_clause("country = 'Cri'")
            .order_by("name", Direction::Asc)
            .limit(10)
            .execute()
            .unwrap();

        assert_eq!(
            query,
            "Select id, name, email from users where age > 18 and country = 'Cri' \
             order by name ASC limit 10"
        );
    }

    #[test]
    fn test_empty_select_uses_wildcard() {
        let query = QueryBuilder::new("users")
            .select(Vec::<String>::new())
            .execute()
            .unwrap();
        assert_eq!(query, "Select * from users");
    }

    #[test]
    fn test_no_setters_renders_defaults() {
        assert_eq!(QueryBuilder::new("orders").execute().unwrap(), "Select * from orders");
    }

    #[test]
    fn test_conditions_joined_with_and_in_insertion_order() {
        let query = QueryBuilder::new("users")
            .where_clause("age > 18")
            .where_clause("country = 'Cri'")
            .execute()
            .unwrap();
        assert!(query.ends_with("where age > 18 and country = 'Cri'"));
    }

    #[test]
    fn test_multiple_order_fields() {
        let query = QueryBuilder::new("users")
            .order_by("name", Direction::Asc)
            .order_by("created_at", Direction::Desc)
            .execute()
            .unwrap();
        assert_eq!(query, "Select * from users order by name ASC, created_at DESC");
    }

    #[test]
    fn test_zero_limit_is_omitted() {
        let query = QueryBuilder::new("users").limit(0).execute().unwrap();
        assert!(!query.contains("limit"));

        let query = QueryBuilder::new("users").limit(5).limit(0).execute().unwrap();
        assert!(!query.contains("limit"));
    }

    #[test]
    fn test_negative_limit_is_rejected() {
        let mut builder = QueryBuilder::new("users");
        let result = builder.try_limit(-1);
        assert!(matches!(
            result,
            Err(PatternError::InvalidFieldValue { ref field, .. }) if field == "limit"
        ));
        assert!(!builder.execute().unwrap().contains("limit"));
    }

    #[test]
    fn test_try_limit_accepts_positive() {
        let mut builder = QueryBuilder::new("users");
        builder.try_limit(25).unwrap();
        assert!(builder.execute().unwrap().ends_with("limit 25"));
    }

    #[test]
    fn test_order_by_token_parsing() {
        let mut builder = QueryBuilder::new("users");
        builder.order_by_token("name", "desc").unwrap();
        assert!(builder.execute().unwrap().ends_with("order by name DESC"));

        let err = builder.order_by_token("name", "sideways").unwrap_err();
        assert!(matches!(err, PatternError::InvalidFieldValue { .. }));

        let err = builder.order_by_token("name", "").unwrap_err();
        assert!(matches!(err, PatternError::InvalidFieldValue { .. }));
    }

    #[test]
    fn test_empty_table_is_missing_required_field() {
        let err = QueryBuilder::new("  ").execute().unwrap_err();
        assert_eq!(err, PatternError::missing_field("table"));
    }

    #[test]
    fn test_select_replaces_previous_fields() {
        let query = QueryBuilder::new("users")
            .select(["id"])
            .select(["name", "email"])
            .execute()
            .unwrap();
        assert_eq!(query, "Select name, email from users");
    }

    #[test]
    fn test_query_display_matches_execute() {
        let mut builder = QueryBuilder::new("users");
        builder.select(["id"]).limit(3);
        let query = builder.build().unwrap();
        assert_eq!(query.to_string(), builder.execute().unwrap());
        assert_eq!(query.as_str(), query.render());
    }
}

#[cfg(test)]
mod properties {
    use super::{Direction, QueryBuilder};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_clause_order_independent_of_call_order(
            limit in 1u32..1000,
            steps in Just(vec![0usize, 1, 2, 3]).prop_shuffle()
        ) {
            let mut builder = QueryBuilder::new("users");
            for step in steps {
                match step {
                    0 => { builder.select(["id", "name"]); }
                    1 => { builder.where_clause("age > 18"); }
                    2 => { builder.order_by("name", Direction::Desc); }
                    _ => { builder.limit(limit); }
                }
            }
            let expected = format!(
                "Select id, name from users where age > 18 order by name DESC limit {limit}"
            );
            prop_assert_eq!(builder.execute().unwrap(), expected);
        }
    }
}
