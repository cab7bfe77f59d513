use ministry_auth::SessionCodec;
use ministry_config::{CorsConfig, GuardConfig, SessionConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub session_codec: SessionCodec,
    pub guard_config: GuardConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        session_config: &SessionConfig,
        guard_config: GuardConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            session_codec: SessionCodec::new(session_config),
            guard_config,
            cors_config,
        }
    }
}

pub fn init_app_state() -> AppState {
    AppState::new(
        &SessionConfig::from_env(),
        GuardConfig::from_env(),
        CorsConfig::from_env(),
    )
}
