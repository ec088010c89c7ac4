use chrono::NaiveDateTime;
use docmap::{
    Builder, Class, CodeMapper, Coded, DateTimeMapper, Direct, Entity, Mapped, Type, Value,
};
use std::sync::Arc;

/// Kinds of task, stored in documents by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    Call,
    Meeting,
    Email,
    FollowUp,
}

impl Coded for TaskType {
    const NAME: &'static str = "TaskType";

    fn code(&self) -> i32 {
        match self {
            TaskType::Call => 1,
            TaskType::Meeting => 2,
            TaskType::Email => 3,
            TaskType::FollowUp => 4,
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => TaskType::Call,
            2 => TaskType::Meeting,
            3 => TaskType::Email,
            4 => TaskType::FollowUp,
            _ => return None,
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Task {
    pub subject: String,
    pub task_type: Option<TaskType>,
    pub priority: i32,
    pub assignees: Vec<String>,
    pub done: bool,
    pub due: Option<NaiveDateTime>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TaskDigest {
    pub subject: String,
    pub done: bool,
}

/// Common base of every activity.
fn activity() -> Arc<Class<Task>> {
    Class::builder("Activity")
        .getter("getSubject", Type::String, |t: &Task| Value::from(&t.subject))
        .setter("setSubject", Type::String, |t: &mut Task, v| {
            t.subject = v.try_into()?;
            Ok(())
        })
        .into()
}

fn completable() -> Arc<Class<Task>> {
    Class::interface("Completable")
        .declares("isDone", vec![], Some(Type::BOOL))
        .declares("setDone", vec![Type::BOOL], None)
        .into()
}

impl Entity for Task {
    fn class() -> Class<Self> {
        Class::builder("Task")
            .extends(activity())
            .implements(completable())
            .getter("getPriority", Type::I32, |t: &Task| Value::from(t.priority))
            .setter("setPriority", Type::I32, |t: &mut Task, v| {
                t.priority = v.try_into()?;
                Ok(())
            })
            .getter("getAssignees", Type::list(Type::String), |t: &Task| {
                Value::from(t.assignees.clone())
            })
            .setter("setAssignees", Type::list(Type::String), |t: &mut Task, v| {
                t.assignees = v.to_vec()?;
                Ok(())
            })
            .getter("isDone", Type::BOOL, |t: &Task| Value::from(t.done))
            .setter("setDone", Type::BOOL, |t: &mut Task, v| {
                t.done = v.try_into()?;
                Ok(())
            })
            .build()
    }
}

impl Entity for TaskDigest {
    fn class() -> Class<Self> {
        Class::builder("TaskDigest")
            .getter("getSubject", Type::String, |t: &TaskDigest| {
                Value::from(&t.subject)
            })
            .setter("setSubject", Type::String, |t: &mut TaskDigest, v| {
                t.subject = v.try_into()?;
                Ok(())
            })
            .getter("isDone", Type::BOOL, |t: &TaskDigest| Value::from(t.done))
            .setter("setDone", Type::BOOL, |t: &mut TaskDigest, v| {
                t.done = v.try_into()?;
                Ok(())
            })
            .build()
    }
}

impl Mapped for Task {
    type Digest = TaskDigest;

    fn mappings(builder: &mut Builder<Self>) {
        builder
            .direct(Direct::new("Subject", Type::String))
            .direct(Direct::new("Priority", Type::I32))
            .direct(Direct::new("Assignees", Type::list(Type::String)))
            .direct(Direct::new("Done", Type::BOOL))
            .mapper(CodeMapper::new(
                "Type",
                |t: &Task| t.task_type,
                |t: &mut Task, v| t.task_type = v,
            ))
            .mapper(DateTimeMapper::new(
                "DueDate",
                "DueTime",
                |t: &Task| t.due,
                |t: &mut Task, v| t.due = v,
            ))
            .constant("Form", "Task");

        builder
            .digest_direct(Direct::new("Subject", Type::String))
            .digest_direct(Direct::new("Done", Type::BOOL));
    }
}
