use userview_business::{BusinessConfig, register_user_view};
use userview_states::StateCtx;

/// The main application state.
#[derive(Debug)]
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        Self::new(BusinessConfig::default())
    }
}

impl State {
    pub fn new(config: BusinessConfig) -> Self {
        let mut ctx = StateCtx::new();
        register_user_view(&mut ctx, config);
        Self { ctx }
    }

    /// State pointed at a test server's users endpoint.
    pub fn test(users_url: impl AsRef<str>) -> Self {
        Self::new(BusinessConfig::new(users_url))
    }
}
