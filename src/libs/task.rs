//! Task data model shared by the transport client and the list controller.
//!
//! Task records are owned by the remote task service; this module only mirrors
//! their shape. The collection ordering is server-determined, which is why the
//! controller refetches after mutations instead of resorting locally.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task category, client-enforced on create.
///
/// The server stores the category as plain text, so values read back are kept
/// verbatim in [`Task::category`] and never validated against this set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum Category {
    #[default]
    Personal,
    Work,
    Shopping,
    Study,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Shopping => "Shopping",
            Category::Study => "Study",
            Category::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Completion status as reported by the server.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
    Overdue,
}

impl Status {
    /// Status the task moves to when the user toggles completion.
    ///
    /// Completed tasks reopen as pending; anything else (including overdue)
    /// becomes completed.
    pub fn toggled(self) -> Status {
        match self {
            Status::Completed => Status::Pending,
            _ => Status::Completed,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Pending => "pending",
            Status::Completed => "completed",
            Status::Overdue => "overdue",
        };
        write!(f, "{}", name)
    }
}

/// Server-assigned task priority.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::None => "None",
        };
        write!(f, "{}", name)
    }
}

/// A to-do item as returned by the task service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub status: Status,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub category: String,
}

/// Partial update for a task. Absent fields are left untouched server-side.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Category constraint for list retrieval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Due-date bucket constraint for list retrieval.
///
/// Buckets other than `All` match only tasks that have a due date; the server
/// excludes undated tasks from them.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Future,
    Past,
}

/// Query parameters for `GET /tasks/`. `All` filters are omitted entirely so
/// the server applies no constraint.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct TaskQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_filter: Option<DateFilter>,
}

impl TaskQuery {
    pub fn new(category: CategoryFilter, date: DateFilter) -> Self {
        Self {
            category: match category {
                CategoryFilter::All => None,
                CategoryFilter::Only(category) => Some(category),
            },
            date_filter: match date {
                DateFilter::All => None,
                other => Some(other),
            },
        }
    }
}
