//! Background task-queue descriptor and the static beat schedule.
//!
//! Both the broker and the result store read `REDIS_URL`. When it is unset
//! they stay empty strings, so a process without Redis provisioned never
//! attempts a connection at startup.

use serde::{Deserialize, Serialize};

use crate::env::EnvSource;

/// One entry in the declarative beat schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Schedule identifier.
    pub id: String,
    /// Fully qualified task name.
    pub task: String,
    /// Cron-style recurrence expression.
    pub cron: String,
}

/// Resolved scheduler section of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Task broker URL; empty disables dispatch.
    pub broker_url: String,

    /// Result-store URL; empty disables result persistence.
    pub result_backend: String,

    /// Accepted content types.
    pub accept_content: Vec<String>,

    /// Task payload serialization format.
    pub task_serializer: String,

    /// Result payload serialization format.
    pub result_serializer: String,

    /// Timezone recurrence expressions are evaluated in.
    pub timezone: String,

    /// Declarative schedule table, task name to recurrence.
    pub beat_schedule: Vec<ScheduleEntry>,
}

impl SchedulerConfig {
    /// Resolve the scheduler section from the environment.
    pub fn resolve(env: &impl EnvSource) -> Self {
        let redis_url = env.get("REDIS_URL").unwrap_or_default();

        Self {
            broker_url: redis_url.clone(),
            result_backend: redis_url,
            accept_content: vec!["json".to_string()],
            task_serializer: "json".to_string(),
            result_serializer: "json".to_string(),
            timezone: "UTC".to_string(),
            beat_schedule: default_beat_schedule(),
        }
    }

    /// Whether a broker is configured at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.broker_url.is_empty()
    }
}

/// The fixed schedule table: appointment reminders, every minute.
fn default_beat_schedule() -> Vec<ScheduleEntry> {
    vec![ScheduleEntry {
        id: "send-appointment-reminders-every-1-minute".to_string(),
        task: "Hospitals.tasks.send_appointment_reminders".to_string(),
        cron: "* * * * *".to_string(),
    }]
}
