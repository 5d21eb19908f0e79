//! `order=column.direction` clauses of the table read protocol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order clause is empty")]
    Empty,

    #[error("Order clause '{0}' must look like column.asc or column.desc")]
    Malformed(String),

    #[error("Unknown order direction: {0}")]
    Direction(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(column: &str) -> Self {
        Self { column: column.to_string(), direction: Direction::Asc }
    }

    pub fn desc(column: &str) -> Self {
        Self { column: column.to_string(), direction: Direction::Desc }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.column, self.direction.as_str())
    }
}

impl FromStr for Order {
    type Err = OrderError;

    /// A bare column name sorts ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OrderError::Empty);
        }

        let (column, direction) = match s.split_once('.') {
            Some((column, direction)) => {
                let direction = match direction {
                    "asc" => Direction::Asc,
                    "desc" => Direction::Desc,
                    other => return Err(OrderError::Direction(other.to_string())),
                };
                (column, direction)
            }
            None => (s, Direction::Asc),
        };

        let valid = !column.is_empty() && column.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(OrderError::Malformed(s.to_string()));
        }

        Ok(Order { column: column.to_string(), direction })
    }
}

/// Query string for a full-row read, e.g. `select=*&order=churn_score.desc`.
pub fn read_query(order: &Order) -> String {
    format!("select=*&order={}", order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order() {
        assert_eq!("churn_score.desc".parse::<Order>(), Ok(Order::desc("churn_score")));
        assert_eq!("priority.asc".parse::<Order>(), Ok(Order::asc("priority")));
        assert_eq!("name".parse::<Order>(), Ok(Order::asc("name")));
    }

    #[test]
    fn test_parse_order_errors() {
        assert_eq!("".parse::<Order>(), Err(OrderError::Empty));
        assert_eq!("score.sideways".parse::<Order>(), Err(OrderError::Direction("sideways".to_string())));
        assert!(matches!(".desc".parse::<Order>(), Err(OrderError::Malformed(_))));
        assert!(matches!("name;drop.asc".parse::<Order>(), Err(OrderError::Malformed(_))));
    }

    #[test]
    fn test_read_query() {
        assert_eq!(read_query(&Order::desc("churn_score")), "select=*&order=churn_score.desc");
    }
}
