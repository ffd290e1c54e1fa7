//! Filter expression tree
//!
//! The closed set of expression kinds a WHERE clause can be built from. The
//! evaluator matches on every variant; constructs the engine does not
//! implement still have a variant so they can be rejected by name.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::literal::Literal;

/// Filter expression AST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterExpression {
    /// Dotted column path (`body.hair.color`)
    Column {
        /// Fully qualified column name
        name: String,
    },

    /// Literal value
    Literal {
        value: Literal,
    },

    /// Parenthesized value list, as on either side of IN
    List {
        items: Vec<FilterExpression>,
    },

    /// Comparison operations (=, !=, >, >=, <, <=)
    Comparison {
        left: Box<FilterExpression>,
        operator: ComparisonOp,
        right: Box<FilterExpression>,
    },

    /// Logical operations (AND, OR)
    Logical {
        left: Box<FilterExpression>,
        operator: LogicalOp,
        right: Box<FilterExpression>,
    },

    /// NOT expr, also written `! expr`
    Not {
        expression: Box<FilterExpression>,
    },

    Parenthesis {
        expression: Box<FilterExpression>,
    },

    /// field BETWEEN low AND high (inclusive)
    Between {
        field: Box<FilterExpression>,
        low: Box<FilterExpression>,
        high: Box<FilterExpression>,
        #[serde(default)]
        negated: bool,
    },

    /// left IN right, left NOT IN right
    In {
        left: Box<FilterExpression>,
        right: Box<FilterExpression>,
        #[serde(default)]
        negated: bool,
    },

    /// Arithmetic (+, -, *, /, %)
    Arithmetic {
        left: Box<FilterExpression>,
        operator: ArithmeticOp,
        right: Box<FilterExpression>,
    },

    /// Function call; only `matchAny` and `matchAll` evaluate
    Function {
        name: String,
        args: Vec<FilterExpression>,
    },

    /// target LIKE pattern
    Like {
        target: Box<FilterExpression>,
        pattern: Box<FilterExpression>,
        #[serde(default)]
        negated: bool,
    },

    /// target IS NULL
    IsNull {
        target: Box<FilterExpression>,
        #[serde(default)]
        negated: bool,
    },

    /// CAST(expression AS data_type)
    Cast {
        expression: Box<FilterExpression>,
        data_type: String,
    },

    /// CASE WHEN ... END
    Case {
        when_clauses: Vec<(FilterExpression, FilterExpression)>,
        else_clause: Option<Box<FilterExpression>>,
    },

    /// Bitwise operators (&, |, ^, <<, >>)
    Bitwise {
        left: Box<FilterExpression>,
        operator: BitwiseOp,
        right: Box<FilterExpression>,
    },

    /// Nested SELECT, kept as text
    Subquery {
        sql: String,
    },

    /// `*` used inside an expression
    Wildcard,

    /// JDBC parameter (`?` or `:name`)
    Parameter {
        name: Option<String>,
    },
}

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOp {
    Equal,
    NotEqual,
    Greater,
    GreaterEq,
    Less,
    LessEq,
}

impl ComparisonOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "=",
            ComparisonOp::NotEqual => "!=",
            ComparisonOp::Greater => ">",
            ComparisonOp::GreaterEq => ">=",
            ComparisonOp::Less => "<",
            ComparisonOp::LessEq => "<=",
        }
    }
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOp {
    And,
    Or,
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl ArithmeticOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Subtract => "-",
            ArithmeticOp::Multiply => "*",
            ArithmeticOp::Divide => "/",
            ArithmeticOp::Modulo => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitwiseOp {
    And,
    Or,
    Xor,
    LeftShift,
    RightShift,
}

impl BitwiseOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            BitwiseOp::And => "&",
            BitwiseOp::Or => "|",
            BitwiseOp::Xor => "^",
            BitwiseOp::LeftShift => "<<",
            BitwiseOp::RightShift => ">>",
        }
    }
}

impl FilterExpression {
    pub fn column(name: impl Into<String>) -> Self {
        FilterExpression::Column { name: name.into() }
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        FilterExpression::Literal {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn null() -> Self {
        FilterExpression::Literal {
            value: Literal::Null,
        }
    }

    #[must_use]
    pub fn list(items: Vec<FilterExpression>) -> Self {
        FilterExpression::List { items }
    }

    #[must_use]
    pub fn compare(left: FilterExpression, operator: ComparisonOp, right: FilterExpression) -> Self {
        FilterExpression::Comparison {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn equals(left: FilterExpression, right: FilterExpression) -> Self {
        Self::compare(left, ComparisonOp::Equal, right)
    }

    #[must_use]
    pub fn and(left: FilterExpression, right: FilterExpression) -> Self {
        FilterExpression::Logical {
            left: Box::new(left),
            operator: LogicalOp::And,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn or(left: FilterExpression, right: FilterExpression) -> Self {
        FilterExpression::Logical {
            left: Box::new(left),
            operator: LogicalOp::Or,
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn not(expression: FilterExpression) -> Self {
        FilterExpression::Not {
            expression: Box::new(expression),
        }
    }

    #[must_use]
    pub fn parenthesis(expression: FilterExpression) -> Self {
        FilterExpression::Parenthesis {
            expression: Box::new(expression),
        }
    }

    #[must_use]
    pub fn between(field: FilterExpression, low: FilterExpression, high: FilterExpression) -> Self {
        FilterExpression::Between {
            field: Box::new(field),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        }
    }

    #[must_use]
    pub fn in_list(left: FilterExpression, right: FilterExpression, negated: bool) -> Self {
        FilterExpression::In {
            left: Box::new(left),
            right: Box::new(right),
            negated,
        }
    }

    #[must_use]
    pub fn arithmetic(left: FilterExpression, operator: ArithmeticOp, right: FilterExpression) -> Self {
        FilterExpression::Arithmetic {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn function(name: impl Into<String>, args: Vec<FilterExpression>) -> Self {
        FilterExpression::Function {
            name: name.into(),
            args,
        }
    }

    /// `matchAny(path)`
    pub fn match_any(path: impl Into<String>) -> Self {
        Self::function("matchAny", vec![Self::column(path)])
    }

    /// `matchAll(path)`
    pub fn match_all(path: impl Into<String>) -> Self {
        Self::function("matchAll", vec![Self::column(path)])
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[FilterExpression]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterExpression::Column { name } => f.write_str(name),
            FilterExpression::Literal { value } => write!(f, "{value}"),
            FilterExpression::List { items } => {
                f.write_str("(")?;
                write_joined(f, items)?;
                f.write_str(")")
            }
            FilterExpression::Comparison { left, operator, right } => {
                write!(f, "{left} {} {right}", operator.symbol())
            }
            FilterExpression::Logical { left, operator, right } => {
                let keyword = match operator {
                    LogicalOp::And => "AND",
                    LogicalOp::Or => "OR",
                };
                write!(f, "{left} {keyword} {right}")
            }
            FilterExpression::Not { expression } => write!(f, "NOT {expression}"),
            FilterExpression::Parenthesis { expression } => write!(f, "({expression})"),
            FilterExpression::Between { field, low, high, negated } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{field} {not}BETWEEN {low} AND {high}")
            }
            FilterExpression::In { left, right, negated } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{left} {not}IN {right}")
            }
            FilterExpression::Arithmetic { left, operator, right } => {
                write!(f, "{left} {} {right}", operator.symbol())
            }
            FilterExpression::Function { name, args } => {
                write!(f, "{name}(")?;
                write_joined(f, args)?;
                f.write_str(")")
            }
            FilterExpression::Like { target, pattern, negated } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{target} {not}LIKE {pattern}")
            }
            FilterExpression::IsNull { target, negated } => {
                let not = if *negated { "NOT " } else { "" };
                write!(f, "{target} IS {not}NULL")
            }
            FilterExpression::Cast { expression, data_type } => {
                write!(f, "CAST({expression} AS {data_type})")
            }
            FilterExpression::Case { when_clauses, else_clause } => {
                f.write_str("CASE")?;
                for (condition, result) in when_clauses {
                    write!(f, " WHEN {condition} THEN {result}")?;
                }
                if let Some(otherwise) = else_clause {
                    write!(f, " ELSE {otherwise}")?;
                }
                f.write_str(" END")
            }
            FilterExpression::Bitwise { left, operator, right } => {
                write!(f, "{left} {} {right}", operator.symbol())
            }
            FilterExpression::Subquery { sql } => write!(f, "({sql})"),
            FilterExpression::Wildcard => f.write_str("*"),
            FilterExpression::Parameter { name } => match name {
                Some(name) => write!(f, ":{name}"),
                None => f.write_str("?"),
            },
        }
    }
}
