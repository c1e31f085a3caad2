//! DeleteMessage action.
//!
//! Deletes orphan messages and vanished/obsolete entries from `.ts` files.
//! Used by the `tsglot clean` command.

use super::operation::Operation;
use super::traits::Action;
use crate::{cli::commands::clean::RetiredMessage, issues::OrphanIdIssue};

/// Action to delete `<message>` entries from catalog files.
///
/// This action supports multiple Issue types:
/// - `OrphanIdIssue`: ids in a non-primary locale but not in primary
/// - `RetiredMessage`: entries lupdate marked vanished or obsolete
pub struct DeleteMessage;

impl Action<OrphanIdIssue> for DeleteMessage {
    fn to_operations(issues: &[OrphanIdIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::DeleteMessage {
                context: issue.context.clone(),
                label: "orphan",
            })
            .collect()
    }
}

impl Action<RetiredMessage> for DeleteMessage {
    fn to_operations(issues: &[RetiredMessage]) -> Vec<Operation> {
        issues
            .iter()
            .map(|retired| Operation::DeleteMessage {
                context: retired.context.clone(),
                label: "obsolete",
            })
            .collect()
    }
}
