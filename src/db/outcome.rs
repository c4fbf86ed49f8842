use std::fmt;

use tracing::{debug, warn};

use crate::error::StoreError;

/// Outcome of every mutating access function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnValue {
    Ok,
    AlreadyExists,
    NotExists,
    BadParams,
    Error,
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReturnValue::Ok => "OK",
            ReturnValue::AlreadyExists => "ALREADY_EXISTS",
            ReturnValue::NotExists => "NOT_EXISTS",
            ReturnValue::BadParams => "BAD_PARAMS",
            ReturnValue::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// How a failed statement is translated into a [`ReturnValue`]. Entity and
/// association tables disagree on what a dangling foreign key means: for an
/// entity it is a bad argument, for an association it means one side of the
/// link is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Policy {
    InsertEntity,
    InsertAssociation,
    DeleteEntity,
    DeleteAssociation,
}

impl Policy {
    pub(crate) fn classify(self, err: &StoreError) -> ReturnValue {
        use StoreError::*;

        let outcome = match (self, err) {
            (_, Connection(_) | Other(_)) => ReturnValue::Error,

            (Policy::InsertEntity, Check(_) | ForeignKey(_) | NotNull(_)) => ReturnValue::BadParams,
            (Policy::InsertAssociation, ForeignKey(_)) => ReturnValue::NotExists,
            (Policy::InsertAssociation, Check(_) | NotNull(_)) => ReturnValue::BadParams,
            (Policy::InsertEntity | Policy::InsertAssociation, Unique(_)) => {
                ReturnValue::AlreadyExists
            }

            (Policy::DeleteEntity, _) => ReturnValue::Error,
            (Policy::DeleteAssociation, Check(_) | ForeignKey(_)) => ReturnValue::NotExists,
            (Policy::DeleteAssociation, _) => ReturnValue::Error,
        };

        if outcome == ReturnValue::Error {
            warn!(policy = ?self, error = %err, "statement failed");
        } else {
            debug!(policy = ?self, error = %err, %outcome, "constraint rejected statement");
        }
        outcome
    }

    /// Outcome of a statement that ran to completion.
    pub(crate) fn affected(self, rows: usize) -> ReturnValue {
        match self {
            Policy::DeleteEntity | Policy::DeleteAssociation if rows == 0 => ReturnValue::NotExists,
            _ => ReturnValue::Ok,
        }
    }

    pub(crate) fn resolve(self, result: crate::error::Result<usize>) -> ReturnValue {
        match result {
            Ok(rows) => self.affected(rows),
            Err(err) => self.classify(&err),
        }
    }
}
