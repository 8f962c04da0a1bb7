use crate::config::database::Database;
use crate::service::plan_service::{LlmClient, PlanService};
use std::sync::Arc;

#[derive(Clone)]
pub struct PlanState {
    pub(crate) plan_service: PlanService,
}

impl PlanState {
    pub fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            plan_service: PlanService::new(db_conn, LlmClient::from_config()),
        }
    }
}
