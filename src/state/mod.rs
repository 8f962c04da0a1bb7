pub mod auth_state;
pub mod federacion_state;
pub mod plan_state;
pub mod token_state;
pub mod usuario_state;
